//! Core traits and types for the teaser card widget
//!
//! This crate provides the small framework the card is built on, following a
//! Redux/Elm-inspired architecture with declarative effects.
//!
//! # Core Concepts
//!
//! - **Action**: Events that describe state changes
//! - **EffectStore**: State container whose reducer returns state change plus effects
//! - **Component**: Pure UI elements that render based on props
//! - **TaskManager**: Keyed, cancellable deferred tasks that report back with actions
//! - **EffectRuntime**: Terminal event/action/render loop
//!
//! # Scheduled Step Pattern
//!
//! Animations run as a chain of deferred steps. The reducer emits a
//! "schedule" effect, the host turns it into a keyed task, and the task sends
//! a step action back when it fires:
//!
//! ```ignore
//! fn handle_effect(effect: CardEffect, ctx: &mut EffectContext<Action>) {
//!     match effect {
//!         CardEffect::ScheduleRevealStep { token, delay } => {
//!             ctx.tasks().debounce(&TaskKey::new("reveal"), delay, async move {
//!                 Action::Card(CardAction::RevealStep(token))
//!             });
//!         }
//!         CardEffect::CancelReveal => ctx.tasks().cancel(&TaskKey::new("reveal")),
//!         CardEffect::Notify(notification) => host.notify(notification),
//!     }
//! }
//! ```
//!
//! Step actions carry a token, so a step that was already queued when the
//! schedule got cancelled is recognised as stale by the reducer.

pub mod action;
pub mod component;
pub mod effect;
pub mod event;
mod poller;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{rect_contains, EventKind};

pub use effect::{DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware};
pub use store::{LoggingMiddleware, Middleware};

pub use runtime::{EffectContext, EffectRuntime, EventOutcome};
pub use tasks::{TaskKey, TaskManager};
