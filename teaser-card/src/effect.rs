//! Effects declared by the card reducer
//!
//! The reducer never touches timers or the host. It returns these, and the
//! owner of the card (a [`CardController`](crate::CardController) or a host
//! app running its own loop) carries them out.

use std::time::Duration;

use teaser_card_core::{Action, TaskKey, TaskManager};

use crate::action::CardAction;
use crate::notification::CardNotification;
use crate::state::RevealToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardEffect {
    /// Deliver `RevealStep(token)` after `delay`, replacing any pending step
    ScheduleRevealStep { token: RevealToken, delay: Duration },
    /// Drop the pending reveal step, if any
    CancelReveal,
    /// Tell the host about a click
    Notify(CardNotification),
}

impl CardEffect {
    /// Carry out the scheduling effects on `tasks` under `key`.
    ///
    /// `wrap` lifts the card's step action into the task manager's action
    /// type. Notifications are handed back for the caller to deliver.
    pub fn apply<A: Action>(
        self,
        tasks: &mut TaskManager<A>,
        key: &TaskKey,
        wrap: impl FnOnce(CardAction) -> A,
    ) -> Option<CardNotification> {
        match self {
            CardEffect::ScheduleRevealStep { token, delay } => {
                let step = wrap(CardAction::RevealStep(token));
                tasks.debounce(key, delay, async move { step });
                None
            }
            CardEffect::CancelReveal => {
                tasks.cancel(key);
                None
            }
            CardEffect::Notify(notification) => Some(notification),
        }
    }
}
