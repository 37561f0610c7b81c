use std::any::Any;
use std::panic::panic_any;

use thiserror::Error;

/* AbsentError */

/// Panic payload marking a dereference of an absent value.
///
/// Transforms passed to [`SafeApply::safe_apply`](crate::SafeApply::safe_apply)
/// raise this (usually via [`Presence::present`]) when something they expected
/// to be there is not. It is the only panic class that `safe_apply` swallows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to use an absent value")]
pub struct AbsentError;

/* Presence */

/// Dereference of an `Option` that signals absence as an [`AbsentError`].
pub trait Presence<T> {
    /// Returns the contained value, raising [`AbsentError`] if there is none.
    fn present(self) -> T;
}

impl<T> Presence<T> for Option<T> {
    fn present(self) -> T {
        match self {
            Some(value) => value,
            None => panic_any(AbsentError),
        }
    }
}

// Payload of `Option::unwrap` on `None`. Fixed in std, so plain `unwrap`
// deep inside a transform counts as an absent dereference too.
const UNWRAP_ON_NONE: &str = "called `Option::unwrap()` on a `None` value";

pub(crate) fn is_absent_payload(payload: &(dyn Any + Send)) -> bool {
    if payload.is::<AbsentError>() {
        return true;
    }

    payload
        .downcast_ref::<&str>()
        .map_or(false, |message| message.starts_with(UNWRAP_ON_NONE))
}
