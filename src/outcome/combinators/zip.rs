use crate::outcome::Outcome;

impl<T> Outcome<T> {
    /// Pair two outcomes. The first failure, left to right, wins; reasons are
    /// not accumulated across inputs.
    ///
    /// For more than two inputs see [`ZipAll`](crate::arity::ZipAll), which
    /// produces a flat tuple.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellspring::{Exception, Outcome};
    ///
    /// let both = Outcome::success(1).zip(Outcome::success("one"));
    /// assert_eq!(both.ok(), Some((1, "one")));
    ///
    /// let first = Exception::msg("first");
    /// let failed = Outcome::<i32>::failure(first.clone())
    ///     .zip(Outcome::<i32>::failure(Exception::msg("second")));
    /// assert!(failed.err().is_some_and(|e| e.ptr_eq(&first)));
    /// ```
    #[inline]
    pub fn zip<U>(self, other: Outcome<U>) -> Outcome<(T, U)> {
        self.zip_with(other, |a, b| (a, b))
    }

    /// Combine two success values with `f`.
    pub fn zip_with<U, R, F>(self, other: Outcome<U>, f: F) -> Outcome<R>
    where
        F: FnOnce(T, U) -> R,
    {
        match (self, other) {
            (Outcome::Success(a), Outcome::Success(b)) => {
                Outcome::success(f(a.into_value(), b.into_value()))
            }
            (Outcome::Failure(failure), _) | (_, Outcome::Failure(failure)) => {
                Outcome::Failure(failure)
            }
        }
    }
}
