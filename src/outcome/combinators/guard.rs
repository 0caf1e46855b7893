use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::outcome::{Failure, Outcome, Success};
use crate::reason::ValidationError;

/// Values that can be empty, for [`Outcome::ensure_not_empty`].
pub trait Emptiable {
    /// Whether the value holds nothing.
    fn is_empty_value(&self) -> bool;
}

macro_rules! impl_emptiable {
    ($($ty:ty $(, $($generic:ident),+)?);+ $(;)?) => {
        $(
            impl$(<$($generic),+>)? Emptiable for $ty {
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

impl_emptiable!(
    String;
    &str;
    Vec<T>, T;
    &[T], T;
    VecDeque<T>, T;
    HashMap<K, V>, K, V;
    HashSet<T>, T;
    BTreeMap<K, V>, K, V;
    BTreeSet<T>, T;
);

impl<T> Outcome<T> {
    /// Fail with `error` when the success value does not satisfy `predicate`.
    ///
    /// Existing failures are returned untouched. A failed guard keeps the
    /// outcome's metadata.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let adult = Outcome::success(20).ensure(|age| *age >= 18, "must be an adult");
    /// assert!(adult.is_success());
    ///
    /// let minor = Outcome::success(12).ensure(|age| *age >= 18, "must be an adult");
    /// assert_eq!(minor.reasons()[0].code(), "VALIDATION");
    /// ```
    pub fn ensure<P>(self, predicate: P, error: impl Into<ValidationError>) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Outcome::Success(s) => {
                if predicate(s.value()) {
                    Outcome::Success(s)
                } else {
                    let error: ValidationError = error.into();
                    Outcome::Failure(Failure::new(error).merge_metadata(s.metadata()))
                }
            }
            failed => failed,
        }
    }

    /// Fail with `error` when the success value is empty.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let tags = Outcome::success(Vec::<String>::new()).ensure_not_empty("at least one tag");
    /// assert!(tags.is_failure());
    /// ```
    pub fn ensure_not_empty(self, error: impl Into<ValidationError>) -> Self
    where
        T: Emptiable,
    {
        self.ensure(|value| !value.is_empty_value(), error)
    }
}

impl<T> Outcome<Option<T>> {
    /// Unwrap an optional success value, failing with `error` on `None`.
    ///
    /// ```
    /// use wellspring::Outcome;
    ///
    /// let present = Outcome::success(Some("x")).ensure_some("value required");
    /// assert_eq!(present.ok(), Some("x"));
    ///
    /// let absent = Outcome::success(None::<&str>).ensure_some("value required");
    /// assert!(absent.is_failure());
    /// ```
    pub fn ensure_some(self, error: impl Into<ValidationError>) -> Outcome<T> {
        match self {
            Outcome::Success(s) => {
                let (value, reasons, metadata) = s.into_parts();
                match value {
                    Some(value) => Outcome::Success(Success::from_parts(value, reasons, metadata)),
                    None => {
                        let error: ValidationError = error.into();
                        Outcome::Failure(Failure::new(error).merge_metadata(&metadata))
                    }
                }
            }
            Outcome::Failure(failure) => Outcome::Failure(failure),
        }
    }
}
