//! Serde support for outcomes, reasons and metadata (feature-gated)
//!
//! Outcomes are serialized for reporting: reasons become
//! `{"kind", "code", "message", "metadata"}` records and exceptions are
//! written as their message. Only [`Metadata`] and [`MetadataValue`] can be
//! deserialized, since an exception cannot be rebuilt from its message.
//!
//! # Example
//!
//! ```rust
//! use wellspring::{NotFoundError, Outcome};
//!
//! let missing = Outcome::<u32>::failure(NotFoundError::new("no row")).with_metadata("table", "users");
//! let json = serde_json::to_string(&missing).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"Failure":{"error":"no row","reasons":[{"kind":"NotFound","code":"NOT_FOUND","message":"no row","metadata":{}}],"metadata":{"table":"users"}}}"#
//! );
//! ```

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::exception::Exception;
use crate::metadata::{Metadata, MetadataValue};
use crate::outcome::{Failure, Outcome, Success};
use crate::reason::Reason;

impl Serialize for Exception {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl Serialize for MetadataValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MetadataValue::String(s) => serializer.serialize_str(s),
            MetadataValue::Int(i) => serializer.serialize_i64(*i),
            MetadataValue::Float(x) => serializer.serialize_f64(*x),
            MetadataValue::Bool(b) => serializer.serialize_bool(*b),
        }
    }
}

struct MetadataValueVisitor;

impl<'de> Visitor<'de> for MetadataValueVisitor {
    type Value = MetadataValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, integer, float or boolean")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(MetadataValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(MetadataValue::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(MetadataValue::Int)
            .map_err(|_| E::custom(format!("integer {} does not fit in i64", v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(MetadataValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(MetadataValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(MetadataValue::String(v))
    }
}

impl<'de> Deserialize<'de> for MetadataValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MetadataValueVisitor)
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = Metadata;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of metadata entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut meta = Metadata::new();
        while let Some((key, value)) = access.next_entry::<String, MetadataValue>()? {
            meta.insert(key, value);
        }
        Ok(meta)
    }
}

impl<'de> Deserialize<'de> for Metadata {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MetadataVisitor)
    }
}

fn kind_name(reason: &Reason) -> &'static str {
    match reason {
        Reason::Exceptional(_) => "Exceptional",
        Reason::NotFound(_) => "NotFound",
        Reason::Conflict(_) => "Conflict",
        Reason::Validation(_) => "Validation",
        Reason::Unauthorized(_) => "Unauthorized",
        Reason::Domain(_) => "Domain",
        Reason::Success(_) => "Success",
    }
}

impl Serialize for Reason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Reason", 4)?;
        state.serialize_field("kind", kind_name(self))?;
        state.serialize_field("code", self.code())?;
        state.serialize_field("message", &self.message())?;
        state.serialize_field("metadata", self.metadata())?;
        state.end()
    }
}

impl Serialize for Failure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Failure", 3)?;
        state.serialize_field("error", self.error())?;
        state.serialize_field("reasons", self.reasons())?;
        state.serialize_field("metadata", self.metadata())?;
        state.end()
    }
}

impl<T: Serialize> Serialize for Success<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Success", 3)?;
        state.serialize_field("value", self.value())?;
        state.serialize_field("reasons", self.reasons())?;
        state.serialize_field("metadata", self.metadata())?;
        state.end()
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Success(s) => serializer.serialize_newtype_variant("Outcome", 0, "Success", s),
            Outcome::Failure(f) => serializer.serialize_newtype_variant("Outcome", 1, "Failure", f),
        }
    }
}
