//! Store middleware for intercepting dispatched actions

use crate::Action;

/// Hooks run around every dispatch of an [`EffectStoreWithMiddleware`](crate::EffectStoreWithMiddleware)
pub trait Middleware<A: Action> {
    fn before(&mut self, action: &A);

    /// `state_changed` is the reducer's change flag
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Traces each action through `tracing`.
///
/// The action name goes out at `trace` on the way in and at `debug`, with the
/// change flag, once the reducer is done.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        tracing::trace!(action = action.name(), "Dispatching");
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = action.name(), state_changed, "Action processed");
    }
}
