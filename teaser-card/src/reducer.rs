//! Card reducer: the hover/reveal state machine and click contract
//!
//! `AtRest --PointerEnter--> Revealing`: flag set, first step scheduled.
//! `Revealing --RevealStep--> Revealing`: more ingress shown, next step
//! scheduled until the full text is out, then `Revealed`. Entering with
//! nothing hidden goes straight to `Revealed`.
//! `Revealing | Revealed --PointerLeave--> AtRest`: schedule cancelled,
//! ingress snaps back to the truncated form in the same dispatch.
//!
//! Steps carry the token of the run that scheduled them. Leaving clears the
//! active token, so a step that was already queued is ignored.

use teaser_card_core::DispatchResult;
use tracing::{debug, trace};

use crate::action::CardAction;
use crate::effect::CardEffect;
use crate::input::CardInput;
use crate::notification::CardNotification;
use crate::state::{baseline_len, CardState, RevealToken};

pub fn reducer(state: &mut CardState, action: CardAction) -> DispatchResult<CardEffect> {
    match action {
        CardAction::PointerEnter => pointer_enter(state),
        CardAction::PointerLeave => pointer_leave(state),
        CardAction::RevealStep(token) => reveal_step(state, token),
        CardAction::MediaClick => match state.template().image(&state.input) {
            Some(_) => DispatchResult::effect(CardEffect::Notify(CardNotification::media(
                &state.input,
            ))),
            None => {
                debug!(id = state.input.id, "Media click without a rendered image");
                DispatchResult::unchanged()
            }
        },
        CardAction::ContentClick => DispatchResult::effect(CardEffect::Notify(
            CardNotification::content(&state.input),
        )),
        CardAction::InputUpdate(input) => input_update(state, input),
        CardAction::Unmount => {
            debug!(id = state.input.id, "Card unmounted");
            pointer_leave(state)
        }
    }
}

fn pointer_enter(state: &mut CardState) -> DispatchResult<CardEffect> {
    if state.view.is_hovered {
        return DispatchResult::unchanged();
    }
    state.view.is_hovered = true;

    match start_reveal(state) {
        Some(schedule) => DispatchResult::changed_with(schedule),
        None => DispatchResult::changed(),
    }
}

fn pointer_leave(state: &mut CardState) -> DispatchResult<CardEffect> {
    if !state.view.is_hovered && state.view.active.is_none() {
        return DispatchResult::unchanged();
    }
    state.view.is_hovered = false;

    match reset_reveal(state) {
        Some(cancel) => DispatchResult::changed_with(cancel),
        None => DispatchResult::changed(),
    }
}

fn reveal_step(state: &mut CardState, token: RevealToken) -> DispatchResult<CardEffect> {
    if state.view.active != Some(token) {
        trace!(id = state.input.id, token = token.0, "Ignoring stale reveal step");
        return DispatchResult::unchanged();
    }

    let total = state.ingress_len();
    state.view.revealed = state.view.revealed.saturating_add(state.view.chunk).min(total);

    if state.view.revealed >= total {
        state.view.active = None;
        debug!(id = state.input.id, token = token.0, "Reveal complete");
        DispatchResult::changed()
    } else {
        DispatchResult::changed_with(CardEffect::ScheduleRevealStep {
            token,
            delay: state.config.step_interval,
        })
    }
}

fn input_update(state: &mut CardState, input: CardInput) -> DispatchResult<CardEffect> {
    if state.input == input {
        return DispatchResult::unchanged();
    }
    state.input = input;

    let mut result = DispatchResult::changed();
    if let Some(cancel) = reset_reveal(state) {
        result = result.with(cancel);
    }
    if state.view.is_hovered {
        if let Some(schedule) = start_reveal(state) {
            result = result.with(schedule);
        }
    }
    result
}

/// Issue a token and schedule the first step, unless nothing is hidden.
fn start_reveal(state: &mut CardState) -> Option<CardEffect> {
    let hidden = state.ingress_len().saturating_sub(state.view.revealed);
    if hidden == 0 {
        return None;
    }

    let token = state.view.issue_token();
    state.view.active = Some(token);
    state.view.chunk = state.config.chunk_for(hidden);
    debug!(
        id = state.input.id,
        token = token.0,
        hidden,
        chunk = state.view.chunk,
        "Reveal started"
    );

    Some(CardEffect::ScheduleRevealStep {
        token,
        delay: state.config.step_interval,
    })
}

/// Snap the ingress back to its truncated form and drop the active run.
fn reset_reveal(state: &mut CardState) -> Option<CardEffect> {
    state.view.revealed = baseline_len(&state.input.ingress);
    state.view.active.take().map(|token| {
        debug!(id = state.input.id, token = token.0, "Reveal cancelled");
        CardEffect::CancelReveal
    })
}
