//! Test utilities for components built on this crate
//!
//! - [`RenderHarness`]: render a component into an in-memory terminal buffer
//! - [`mouse_move`], [`mouse_click`], [`char_key`]: build input events
//! - [`ActionAssertions`]: fluent checks on emitted actions
//! - Assertion macros for pattern-matching emitted actions
//!
//! # Example
//!
//! ```ignore
//! use teaser_card_core::testing::*;
//!
//! let mut render = RenderHarness::new(40, 12);
//! let output = render.render_to_string_plain(|frame| {
//!     card.render(frame, frame.area(), props);
//! });
//! assert!(output.contains("Card Title"));
//!
//! let actions: Vec<_> = card.handle_event(&mouse_click(3, 1), props).into_iter().collect();
//! actions.assert_first(CardAction::ContentClick);
//! ```

use std::fmt::Debug;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;

/// Create a key press event for a character with no modifiers.
///
/// # Examples
///
/// ```
/// use teaser_card_core::testing::char_key;
/// use teaser_card_core::EventKind;
/// use crossterm::event::KeyCode;
///
/// let EventKind::Key(k) = char_key('q') else { panic!() };
/// assert_eq!(k.code, KeyCode::Char('q'));
/// ```
pub fn char_key(c: char) -> EventKind {
    EventKind::Key(KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    })
}

/// Create a pointer-move event at the given cell.
pub fn mouse_move(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Moved, column, row)
}

/// Create a left-button press at the given cell.
pub fn mouse_click(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

/// Render harness backed by ratatui's `TestBackend`.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with the given terminal size.
    ///
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Render a frame and return a copy of the resulting buffer.
    pub fn render(&mut self, render_fn: impl FnOnce(&mut Frame)) -> Buffer {
        let completed = self
            .terminal
            .draw(render_fn)
            .unwrap_or_else(|e| panic!("failed to draw test frame: {e}"));
        completed.buffer.clone()
    }

    /// Render a frame and return its contents as plain text, one line per row.
    pub fn render_to_string_plain(&mut self, render_fn: impl FnOnce(&mut Frame)) -> String {
        let buffer = self.render(render_fn);
        buffer_to_string_plain(&buffer)
    }
}

/// Symbols only, one line per row, trailing spaces trimmed
fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut lines = Vec::with_capacity(area.height as usize);
    for y in area.y..area.y.saturating_add(area.height) {
        let mut line = String::new();
        for x in area.x..area.x.saturating_add(area.width) {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Fluent assertions on a list of emitted actions.
pub trait ActionAssertions<A> {
    /// Assert exactly `n` actions were emitted.
    fn assert_count(&self, n: usize);
    /// Assert no actions were emitted.
    fn assert_empty(&self);
    /// Assert the first emitted action equals `expected`.
    fn assert_first(&self, expected: A);
    /// Assert `expected` is among the emitted actions.
    fn assert_contains(&self, expected: A);
}

impl<A: PartialEq + Debug> ActionAssertions<A> for Vec<A> {
    fn assert_count(&self, n: usize) {
        assert_eq!(
            self.len(),
            n,
            "Expected {} actions, got {}: {:?}",
            n,
            self.len(),
            self
        );
    }

    fn assert_empty(&self) {
        assert!(self.is_empty(), "Expected no actions, got: {:?}", self);
    }

    fn assert_first(&self, expected: A) {
        match self.first() {
            Some(first) => assert_eq!(first, &expected, "First action mismatch in {:?}", self),
            None => panic!("Expected first action {:?}, but none were emitted", expected),
        }
    }

    fn assert_contains(&self, expected: A) {
        assert!(
            self.contains(&expected),
            "Expected {:?} to be emitted, got: {:?}",
            expected,
            self
        );
    }
}

/// Assert that an action matching a pattern was emitted.
///
/// # Example
///
/// ```ignore
/// assert_emitted!(effects, CardEffect::Notify(_));
/// ```
#[macro_export]
macro_rules! assert_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            $actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` to be emitted, but got: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}

/// Assert that no action matching a pattern was emitted.
#[macro_export]
macro_rules! assert_not_emitted {
    ($actions:expr, $pattern:pat $(if $guard:expr)?) => {
        assert!(
            !$actions.iter().any(|a| matches!(a, $pattern $(if $guard)?)),
            "Expected action matching `{}` NOT to be emitted, but it was: {:?}",
            stringify!($pattern),
            $actions
        );
    };
}
