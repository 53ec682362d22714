//! Card state: host input plus the controller-owned view state
//!
//! Only the reducer mutates this. Rendering reads it through
//! [`CardState::display`].

use std::time::Duration;

use serde::Deserialize;

use crate::input::CardInput;
use crate::layout::CardTemplate;
use crate::truncate::{char_len, truncate, INGRESS_MAX_CHARS, TITLE_MAX_CHARS};

/// Timing of the ingress reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    /// Delay between two reveal steps
    #[serde(rename = "stepMs", with = "millis")]
    pub step_interval: Duration,
    /// Upper bound for revealing the whole hidden remainder
    #[serde(rename = "revealMs", with = "millis")]
    pub duration: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            step_interval: Duration::from_millis(50),
            duration: Duration::from_millis(1500),
        }
    }
}

impl RevealConfig {
    /// Characters revealed per step so that `hidden` characters show up
    /// within `duration`. Always at least one.
    pub fn chunk_for(&self, hidden: usize) -> usize {
        let interval = self.step_interval.as_millis().max(1);
        let steps = (self.duration.as_millis() / interval).max(1);
        let steps = usize::try_from(steps).unwrap_or(usize::MAX);
        hidden.div_ceil(steps).max(1)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Identifies one reveal run.
///
/// Issued when a reveal starts; step actions carry it back and are ignored
/// once the run has been cancelled or replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealToken(pub u64);

/// Where the card is in its hover cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Not hovered, ingress at the baseline cut
    AtRest,
    /// Hovered, a reveal step is scheduled
    Revealing,
    /// Hovered with the whole ingress shown and nothing scheduled
    Revealed,
}

/// Mutable view state, owned by one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardViewState {
    pub(crate) is_hovered: bool,
    /// Characters of the ingress currently shown
    pub(crate) revealed: usize,
    /// Run in progress, if any
    pub(crate) active: Option<RevealToken>,
    pub(crate) chunk: usize,
    next_token: u64,
}

impl CardViewState {
    fn at_rest(ingress: &str) -> Self {
        Self {
            is_hovered: false,
            revealed: baseline_len(ingress),
            active: None,
            chunk: 1,
            next_token: 0,
        }
    }

    pub(crate) fn issue_token(&mut self) -> RevealToken {
        self.next_token += 1;
        RevealToken(self.next_token)
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// Characters of the ingress currently shown.
    pub fn revealed_chars(&self) -> usize {
        self.revealed
    }

    /// Token of the reveal run in progress, if any.
    pub fn active_reveal(&self) -> Option<RevealToken> {
        self.active
    }

    /// Follows the active run, so `Revealing` ends with the last step
    /// even while the pointer stays on the card.
    pub fn phase(&self) -> RevealPhase {
        match (self.is_hovered, self.active) {
            (false, _) => RevealPhase::AtRest,
            (true, Some(_)) => RevealPhase::Revealing,
            (true, None) => RevealPhase::Revealed,
        }
    }
}

/// Character count of the at-rest ingress.
pub(crate) fn baseline_len(ingress: &str) -> usize {
    char_len(ingress).min(INGRESS_MAX_CHARS)
}

/// Everything one mounted card needs: input, view state, reveal timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    pub(crate) input: CardInput,
    pub(crate) view: CardViewState,
    pub(crate) config: RevealConfig,
}

impl CardState {
    /// Mount a card: not hovered, ingress truncated.
    pub fn new(input: CardInput) -> Self {
        Self::with_config(input, RevealConfig::default())
    }

    pub fn with_config(input: CardInput, config: RevealConfig) -> Self {
        let view = CardViewState::at_rest(&input.ingress);
        Self {
            input,
            view,
            config,
        }
    }

    pub fn input(&self) -> &CardInput {
        &self.input
    }

    pub fn view(&self) -> &CardViewState {
        &self.view
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn template(&self) -> CardTemplate {
        CardTemplate::for_type(self.input.card_type)
    }

    /// Total characters in the ingress.
    pub fn ingress_len(&self) -> usize {
        char_len(&self.input.ingress)
    }

    /// Derived strings for rendering, recomputed from the current state.
    pub fn display(&self) -> CardDisplay<'_> {
        CardDisplay {
            title: truncate(&self.input.title, TITLE_MAX_CHARS),
            ingress: truncate(&self.input.ingress, self.view.revealed),
            is_hovered: self.view.is_hovered,
        }
    }
}

/// Snapshot of the derived display strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardDisplay<'a> {
    /// Title cut to 30 characters, regardless of hover
    pub title: &'a str,
    /// Prefix of the ingress currently shown
    pub ingress: &'a str,
    pub is_hovered: bool,
}
