//! Gallery state: one `CardState` per slot

use teaser_card::{CardInput, CardNotification, CardState, RevealConfig};

#[derive(Clone, Debug)]
pub struct AppState {
    pub cards: Vec<CardState>,
    /// Most recent notification, shown in the status line
    pub last_notification: Option<CardNotification>,
}

impl AppState {
    pub fn new(deck: Vec<CardInput>, config: RevealConfig) -> Self {
        Self {
            cards: deck
                .into_iter()
                .map(|input| CardState::with_config(input, config))
                .collect(),
            last_notification: None,
        }
    }
}
