//! Base trait for actions dispatched to a store.

use std::fmt::Debug;

/// Trait for action objects.
///
/// Actions represent:
/// - User commands (add an item, increment a counter)
/// - Events decoded from external input
///
/// Actions are processed by reducers to produce new states.
pub trait Action: Debug + 'static {
    /// The type discriminator of this action, used for logging.
    fn kind(&self) -> &'static str;

    /// Bootstrap action dispatched once when a store is created.
    ///
    /// Reducers must treat it as unrecognized, so the initial state passes
    /// through unchanged.
    fn init() -> Self;
}
