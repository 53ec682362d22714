//! Card actions
//!
//! Naming follows the framework convention: intent actions are verbs
//! (`PointerEnter`, `MediaClick`), and `RevealStep` is the result of a
//! scheduled task firing.

use teaser_card_core::Action;

use crate::input::CardInput;
use crate::state::RevealToken;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Pointer entered the card region
    PointerEnter,
    /// Pointer left the card region
    PointerLeave,
    /// A scheduled reveal step fired
    RevealStep(RevealToken),
    /// Image element clicked
    MediaClick,
    /// Title element clicked
    ContentClick,
    /// Host replaced the card input
    InputUpdate(CardInput),
    /// Card is being removed
    Unmount,
}

impl Action for CardAction {
    fn name(&self) -> &'static str {
        match self {
            CardAction::PointerEnter => "PointerEnter",
            CardAction::PointerLeave => "PointerLeave",
            CardAction::RevealStep(_) => "RevealStep",
            CardAction::MediaClick => "MediaClick",
            CardAction::ContentClick => "ContentClick",
            CardAction::InputUpdate(_) => "InputUpdate",
            CardAction::Unmount => "Unmount",
        }
    }
}
