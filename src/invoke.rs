use std::panic::{catch_unwind, AssertUnwindSafe};

/* guarded */

/// Invokes `f`, converting any panic into an explicit failure flag.
///
/// Returns `(true, value)` on normal completion and `(false, U::default())`
/// when `f` panicked, whatever the panic was. Failure is fully absorbed:
/// nothing is logged, wrapped, or re-raised. The counterpart of the
/// `TryParse`-style APIs for functions that only offer a panicking form:
///
/// ```
/// use graceful::guarded;
///
/// assert_eq!(guarded(|| "1".parse::<i32>().unwrap()), (true, 1));
/// assert_eq!(guarded(|| "abc".parse::<i32>().unwrap()), (false, 0));
/// ```
///
/// Requires `panic = "unwind"`; under `panic = "abort"` a failing `f` still
/// aborts the process.
pub fn guarded<U, F>(f: F) -> (bool, U)
where
    F: FnOnce() -> U,
    U: Default,
{
    match catch_unwind(AssertUnwindSafe(f)) {
        Ok(value) => (true, value),
        Err(_) => (false, U::default()),
    }
}
