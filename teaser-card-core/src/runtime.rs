//! Terminal event/action/render loop for effect-based stores
//!
//! The host maps terminal events to actions, actions go through the store,
//! and the effects each dispatch declares are handed back to the host along
//! with the runtime's [`TaskManager`].

use std::io;

use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::effect::{EffectReducer, EffectStoreWithMiddleware};
use crate::event::EventKind;
use crate::poller::spawn_event_poller;
use crate::store::Middleware;
use crate::tasks::TaskManager;
use crate::Action;

/// Actions produced by one terminal event, plus a render hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventOutcome<A> {
    pub actions: Vec<A>,
    pub needs_render: bool,
}

impl<A> EventOutcome<A> {
    /// Collect what `Component::handle_event` returned.
    pub fn from_actions(actions: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
            needs_render: false,
        }
    }

    /// Redraw even if no action changes state, e.g. after a resize.
    pub fn with_render(self) -> Self {
        Self {
            needs_render: true,
            ..self
        }
    }
}

/// What an effect handler may touch
pub struct EffectContext<'a, A: Action> {
    action_tx: &'a mpsc::UnboundedSender<A>,
    tasks: &'a mut TaskManager<A>,
}

impl<A: Action> EffectContext<'_, A> {
    /// Queue `action` behind the ones already pending.
    pub fn emit(&self, action: A) {
        let _ = self.action_tx.send(action);
    }

    pub fn tasks(&mut self) -> &mut TaskManager<A> {
        self.tasks
    }
}

pub struct EffectRuntime<S, A: Action, E, M: Middleware<A>> {
    store: EffectStoreWithMiddleware<S, A, E, M>,
    action_tx: mpsc::UnboundedSender<A>,
    action_rx: mpsc::UnboundedReceiver<A>,
    tasks: TaskManager<A>,
    dirty: bool,
}

impl<S, A: Action, E, M: Middleware<A>> EffectRuntime<S, A, E, M> {
    pub fn new(state: S, reducer: EffectReducer<S, A, E>, middleware: M) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            store: EffectStoreWithMiddleware::new(state, reducer, middleware),
            tasks: TaskManager::new(action_tx.clone()),
            action_tx,
            action_rx,
            dirty: true,
        }
    }

    /// Run until `should_quit` accepts an action or both channels close.
    ///
    /// Pending tasks are aborted and the event poller is cancelled on the
    /// way out.
    pub async fn run<B, FRender, FEvent, FQuit, FEffect>(
        &mut self,
        terminal: &mut Terminal<B>,
        mut render: FRender,
        mut map_event: FEvent,
        mut should_quit: FQuit,
        mut handle_effect: FEffect,
    ) -> io::Result<()>
    where
        B: Backend,
        FRender: FnMut(&mut Frame, Rect, &S),
        FEvent: FnMut(&EventKind, &S) -> EventOutcome<A>,
        FQuit: FnMut(&A) -> bool,
        FEffect: FnMut(E, &mut EffectContext<A>),
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let _poller = spawn_event_poller(event_tx, cancel.clone());

        loop {
            if self.dirty {
                let state = self.store.state();
                terminal.draw(|frame| render(frame, frame.area(), state))?;
                self.dirty = false;
            }

            tokio::select! {
                Some(event) = event_rx.recv() => {
                    let outcome = map_event(&event, self.store.state());
                    self.dirty |= outcome.needs_render;
                    for action in outcome.actions {
                        let _ = self.action_tx.send(action);
                    }
                }

                Some(action) = self.action_rx.recv() => {
                    if should_quit(&action) {
                        break;
                    }

                    let result = self.store.dispatch(action);
                    let mut ctx = EffectContext {
                        action_tx: &self.action_tx,
                        tasks: &mut self.tasks,
                    };
                    for effect in result.effects {
                        handle_effect(effect, &mut ctx);
                    }
                    self.dirty |= result.changed;
                }

                else => break,
            }
        }

        cancel.cancel();
        let aborted = self.tasks.cancel_all();
        debug!(aborted, "Runtime stopped");

        Ok(())
    }
}
