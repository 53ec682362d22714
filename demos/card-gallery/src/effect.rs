//! Gallery effects and how the runtime carries them out

use teaser_card::{CardEffect, CardNotification, TaskKey};
use teaser_card_core::EffectContext;

use crate::action::AppAction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEffect {
    /// An effect declared by the card in `slot`
    Card { slot: usize, effect: CardEffect },
}

/// Reveal steps become keyed tasks, one key per card slot. Notifications are
/// logged and fed back so the status line can show them.
pub fn handle_effect(effect: AppEffect, ctx: &mut EffectContext<AppAction>) {
    match effect {
        AppEffect::Card { slot, effect } => {
            let key = TaskKey::new(format!("reveal-{slot}"));
            let notification =
                effect.apply(ctx.tasks(), &key, |action| AppAction::Card { slot, action });
            if let Some(notification) = notification {
                log_notification(slot, &notification);
                ctx.emit(AppAction::DidNotify(notification));
            }
        }
    }
}

/// The payload as it goes into the log.
pub fn payload_json(notification: &CardNotification) -> serde_json::Result<String> {
    serde_json::to_string(&notification.payload)
}

pub fn log_notification(slot: usize, notification: &CardNotification) {
    match payload_json(notification) {
        Ok(payload) => {
            tracing::info!(event = notification.name(), %payload, slot, "Card notification")
        }
        Err(err) => tracing::warn!(
            event = notification.name(),
            error = %err,
            slot,
            "Could not serialize card payload"
        ),
    }
}
