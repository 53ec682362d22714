//! Effect-based state management
//!
//! Reducers in this crate return a [`DispatchResult`]: whether state changed
//! plus a list of declarative effects. Effects describe work (schedule a timer
//! step, cancel it, notify the host), they never perform it. The owner of the
//! store decides how to carry them out.
//!
//! # Example
//!
//! ```ignore
//! use teaser_card_core::{DispatchResult, EffectStore};
//!
//! enum Effect {
//!     ScheduleStep { delay: Duration },
//!     Cancel,
//! }
//!
//! fn reducer(state: &mut Blink, action: BlinkAction) -> DispatchResult<Effect> {
//!     match action {
//!         BlinkAction::Start => {
//!             state.on = true;
//!             DispatchResult::changed_with(Effect::ScheduleStep { delay: state.period })
//!         }
//!         BlinkAction::Stop => {
//!             state.on = false;
//!             DispatchResult::changed_with(Effect::Cancel)
//!         }
//!     }
//! }
//!
//! let mut store = EffectStore::new(Blink::default(), reducer);
//! for effect in store.dispatch(BlinkAction::Start).effects {
//!     // hand off to the task manager
//! }
//! ```

use std::marker::PhantomData;

use crate::action::Action;
use crate::store::Middleware;

/// Result of dispatching an action to an effect-aware store.
///
/// Contains both the state change indicator and any effects to be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult<E> {
    /// Whether the state was modified by this action.
    pub changed: bool,
    /// Effects to be processed after dispatch.
    pub effects: Vec<E>,
}

impl<E> DispatchResult<E> {
    /// Create a result indicating no state change and no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// Create a result indicating state changed but no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// Create a result with a single effect but no state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// Create a result indicating state changed with a single effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// Add an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// Returns true if there are any effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }

    /// Convert the effects into another type, keeping the change flag.
    ///
    /// Lets a parent reducer embed a child reducer's result.
    pub fn map<F>(self, f: impl FnMut(E) -> F) -> DispatchResult<F> {
        DispatchResult {
            changed: self.changed,
            effects: self.effects.into_iter().map(f).collect(),
        }
    }
}

/// A reducer function that can emit effects.
pub type EffectReducer<S, A, E> = fn(&mut S, A) -> DispatchResult<E>;

/// A store that supports effect-emitting reducers.
pub struct EffectStore<S, A, E> {
    state: S,
    reducer: EffectReducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A, E> EffectStore<S, A, E>
where
    A: Action,
{
    /// Create a new effect store with the given initial state and reducer.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Dispatch an action to the store.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// An effect store with middleware support.
///
/// Calls `middleware.before()` and `middleware.after()` around each dispatch.
/// The middleware sees the action and the change flag, not the effects.
pub struct EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    store: EffectStore<S, A, E>,
    middleware: M,
}

impl<S, A, E, M> EffectStoreWithMiddleware<S, A, E, M>
where
    A: Action,
    M: Middleware<A>,
{
    /// Create a new effect store with middleware.
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: EffectStore::new(state, reducer),
            middleware,
        }
    }

    /// Get a reference to the current state.
    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Dispatch an action through middleware and store.
    pub fn dispatch(&mut self, action: A) -> DispatchResult<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}
