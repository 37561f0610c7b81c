mod absent;
mod apply;
mod invoke;

#[cfg(test)]
mod fixture;

pub use self::absent::{AbsentError, Presence};
pub use self::apply::SafeApply;
pub use self::invoke::guarded;
