//! Teaser card widget for ratatui
//!
//! A card shows a title, an ingress (summary) and optional pre-title, badge,
//! image and tags in one of four fixed layouts. At rest the title is cut to
//! 30 characters and the ingress to 120. Hovering reveals the rest of the
//! ingress progressively; leaving snaps it back. Clicking the image or the
//! title notifies the host with `action_media` or `action_content`.
//!
//! # Embedding in an app loop
//!
//! Use [`reducer`] inside your own reducer, render with [`CardView`], and
//! carry out [`CardEffect`]s with [`CardEffect::apply`]:
//!
//! ```ignore
//! use teaser_card::{CardEffect, TaskKey};
//!
//! fn handle_effect(effect: AppEffect, ctx: &mut EffectContext<AppAction>) {
//!     let AppEffect::Card { slot, effect } = effect;
//!     let key = TaskKey::new(format!("reveal-{slot}"));
//!     if let Some(notification) =
//!         effect.apply(ctx.tasks(), &key, |action| AppAction::Card { slot, action })
//!     {
//!         host.notify(notification);
//!     }
//! }
//! ```
//!
//! # Standalone
//!
//! [`CardController`] owns the store and the scheduler and calls registered
//! callbacks directly:
//!
//! ```ignore
//! let mut card = CardController::mount(input);
//! card.on(NotificationKind::Content, |payload| open_article(payload.id));
//! card.pointer_enter();
//! card.settle().await;
//! ```

mod action;
mod controller;
mod effect;
mod input;
mod layout;
mod notification;
mod reducer;
mod state;
mod truncate;
mod view;

pub use action::CardAction;
pub use controller::CardController;
pub use effect::CardEffect;
pub use input::{CardInput, CardType, UnknownCardType};
pub use layout::{Arrangement, CardRegions, CardTemplate};
pub use notification::{
    CardNotification, CardPayload, NotificationHandler, NotificationHandlers, NotificationKind,
    UnknownNotification,
};
pub use reducer::reducer;
pub use state::{CardDisplay, CardState, CardViewState, RevealConfig, RevealPhase, RevealToken};
pub use truncate::{char_len, truncate, INGRESS_MAX_CHARS, TITLE_MAX_CHARS};
pub use view::{CardView, CardViewProps};

pub use teaser_card_core;
pub use teaser_card_core::{Component, TaskKey, TaskManager};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CardAction, CardController, CardEffect, CardInput, CardNotification, CardPayload,
        CardState, CardType, CardView, CardViewProps, NotificationKind, RevealConfig,
    };
    pub use teaser_card_core::Component;
}
