//! Gallery reducer: routes card actions to the card reducer by slot

use teaser_card_core::DispatchResult;

use crate::action::AppAction;
use crate::effect::AppEffect;
use crate::state::AppState;

pub fn reducer(state: &mut AppState, action: AppAction) -> DispatchResult<AppEffect> {
    match action {
        AppAction::Card { slot, action } => {
            let Some(card) = state.cards.get_mut(slot) else {
                tracing::warn!(slot, action = ?action, "No card in slot");
                return DispatchResult::unchanged();
            };
            teaser_card::reducer(card, action).map(|effect| AppEffect::Card { slot, effect })
        }
        AppAction::DidNotify(notification) => {
            state.last_notification = Some(notification);
            DispatchResult::changed()
        }
        AppAction::Quit => DispatchResult::unchanged(),
    }
}
