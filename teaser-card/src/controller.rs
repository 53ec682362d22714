//! Self-contained card owner for hosts without their own event loop
//!
//! [`CardController`] wires one card to a store, a task manager and the
//! host's notification callbacks. Effects are carried out inside
//! [`dispatch`](CardController::dispatch); reveal steps come back over a
//! channel and are applied by [`step`](CardController::step) or
//! [`process_pending`](CardController::process_pending).
//!
//! Scheduling spawns tokio tasks, so the controller must live inside a tokio
//! runtime.

use teaser_card_core::{EffectStoreWithMiddleware, LoggingMiddleware, TaskKey, TaskManager};
use tokio::sync::mpsc;
use tracing::debug;

use crate::action::CardAction;
use crate::effect::CardEffect;
use crate::input::CardInput;
use crate::notification::{CardPayload, NotificationHandlers, NotificationKind, UnknownNotification};
use crate::reducer::reducer;
use crate::state::{CardDisplay, CardState, RevealConfig};

pub struct CardController {
    store: EffectStoreWithMiddleware<CardState, CardAction, CardEffect, LoggingMiddleware>,
    tasks: TaskManager<CardAction>,
    action_rx: mpsc::UnboundedReceiver<CardAction>,
    handlers: NotificationHandlers,
    reveal_key: TaskKey,
}

impl CardController {
    /// Mount a card with the default reveal timing.
    pub fn mount(input: CardInput) -> Self {
        Self::with_config(input, RevealConfig::default())
    }

    pub fn with_config(input: CardInput, config: RevealConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let reveal_key = TaskKey::new(format!("reveal-{}", input.id));
        debug!(id = input.id, card_type = %input.card_type, "Card mounted");

        Self {
            store: EffectStoreWithMiddleware::new(
                CardState::with_config(input, config),
                reducer,
                LoggingMiddleware::new(),
            ),
            tasks: TaskManager::new(action_tx),
            action_rx,
            handlers: NotificationHandlers::new(),
            reveal_key,
        }
    }

    /// Register a callback for `action_media` or `action_content`.
    pub fn on<F>(&mut self, kind: NotificationKind, handler: F) -> &mut Self
    where
        F: FnMut(&CardPayload) + Send + 'static,
    {
        self.handlers.on(kind, handler);
        self
    }

    /// Register a callback by notification name.
    pub fn on_name<F>(&mut self, name: &str, handler: F) -> Result<&mut Self, UnknownNotification>
    where
        F: FnMut(&CardPayload) + Send + 'static,
    {
        self.handlers.on_name(name, handler)?;
        Ok(self)
    }

    pub fn state(&self) -> &CardState {
        self.store.state()
    }

    pub fn display(&self) -> CardDisplay<'_> {
        self.store.state().display()
    }

    pub fn is_hovered(&self) -> bool {
        self.store.state().view().is_hovered()
    }

    /// Whether a reveal step is still scheduled.
    pub fn is_revealing(&self) -> bool {
        self.store.state().view().active_reveal().is_some()
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.dispatch(CardAction::PointerEnter)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.dispatch(CardAction::PointerLeave)
    }

    pub fn click_media(&mut self) -> bool {
        self.dispatch(CardAction::MediaClick)
    }

    pub fn click_content(&mut self) -> bool {
        self.dispatch(CardAction::ContentClick)
    }

    /// Replace the card input. A running reveal restarts from the new
    /// truncated ingress.
    pub fn update_input(&mut self, input: CardInput) -> bool {
        self.dispatch(CardAction::InputUpdate(input))
    }

    /// Dispatch an action and carry out its effects. Returns whether the
    /// state changed.
    pub fn dispatch(&mut self, action: CardAction) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            if let Some(notification) = effect.apply(&mut self.tasks, &self.reveal_key, |a| a) {
                self.handlers.notify(&notification);
            }
        }
        result.changed
    }

    /// Dispatch every step that has already fired. Returns how many were
    /// received, stale ones included.
    pub fn process_pending(&mut self) -> usize {
        let mut received = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            received += 1;
        }
        received
    }

    /// Wait for the next reveal step and dispatch it.
    ///
    /// Returns `false` without waiting when no reveal is running.
    pub async fn step(&mut self) -> bool {
        if !self.is_revealing() {
            return false;
        }
        match self.action_rx.recv().await {
            Some(action) => {
                self.dispatch(action);
                true
            }
            None => false,
        }
    }

    /// Run the current reveal to completion.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    /// Tear the card down. No step is delivered afterwards.
    pub fn unmount(mut self) {
        self.dispatch(CardAction::Unmount);
        let aborted = self.tasks.cancel_all();
        debug!(id = self.state().input().id, aborted, "Card controller released");
    }
}
