//! Gallery actions
//!
//! Card actions are wrapped with the slot of the card they belong to, so one
//! store drives every card in the grid.

use teaser_card::{CardAction, CardNotification};
use teaser_card_core::Action;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    /// An action for the card in `slot`
    Card { slot: usize, action: CardAction },
    /// Result: a card notified the host
    DidNotify(CardNotification),
    Quit,
}

impl Action for AppAction {
    fn name(&self) -> &'static str {
        match self {
            AppAction::Card { action, .. } => action.name(),
            AppAction::DidNotify(_) => "DidNotify",
            AppAction::Quit => "Quit",
        }
    }
}
