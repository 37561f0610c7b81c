use std::panic::{catch_unwind, resume_unwind, AssertUnwindSafe};

use crate::absent::is_absent_payload;
use crate::invoke::guarded;

/* SafeApply */

/// Graceful application of a function to a value that might be absent.
///
/// `safe_apply` is a narrow safety net: it returns the output type's default
/// when the input is `None` or when the function dereferences an absent value
/// (see [`AbsentError`](crate::AbsentError)), and lets every other panic
/// through. `safe_apply_checked` is the broad one: any failure of the inner
/// call becomes a `false` flag. The two must not be unified.
pub trait SafeApply<T> {
    /// Applies `f` to the contained value, defaulting the output on absence.
    ///
    /// The result may itself be an `Option`, so calls chain:
    ///
    /// ```
    /// use graceful::SafeApply;
    ///
    /// let words = Some("a few words");
    /// let len = words
    ///     .safe_apply(|text| text.split_whitespace().last())
    ///     .safe_apply(|word| word.len());
    ///
    /// assert_eq!(len, 5);
    /// ```
    fn safe_apply<U, F>(self, f: F) -> U
    where
        F: FnOnce(T) -> U,
        U: Default;

    /// Like `safe_apply`, but reports failure instead of panicking.
    ///
    /// Returns `(true, value)` on success and `(false, U::default())` if the
    /// inner call panicked for any reason, not only absence.
    fn safe_apply_checked<U, F>(self, f: F) -> (bool, U)
    where
        F: FnOnce(T) -> U,
        U: Default;
}

impl<T> SafeApply<T> for Option<T> {
    fn safe_apply<U, F>(self, f: F) -> U
    where
        F: FnOnce(T) -> U,
        U: Default,
    {
        let value = match self {
            Some(value) => value,
            None => return U::default(),
        };

        match catch_unwind(AssertUnwindSafe(move || f(value))) {
            Ok(output) => output,
            Err(payload) if is_absent_payload(&*payload) => U::default(),
            Err(payload) => resume_unwind(payload),
        }
    }

    fn safe_apply_checked<U, F>(self, f: F) -> (bool, U)
    where
        F: FnOnce(T) -> U,
        U: Default,
    {
        guarded(move || self.safe_apply(f))
    }
}
