//! Event types delivered to components

use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::layout::Rect;

/// The event payload handed to `Component::handle_event`
#[derive(Debug, Clone)]
pub enum EventKind {
    Key(KeyEvent),
    /// Moves, drags, presses and wheel turns, untouched
    Mouse(MouseEvent),
    Resize(u16, u16),
}

impl EventKind {
    /// Map a terminal event; focus changes and pastes are dropped.
    pub fn from_terminal(event: Event) -> Option<Self> {
        match event {
            Event::Key(key) => Some(EventKind::Key(key)),
            Event::Mouse(mouse) => Some(EventKind::Mouse(mouse)),
            Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
            _ => None,
        }
    }
}

/// Whether the cell at `column`, `row` lies inside `area`
pub fn rect_contains(area: Rect, column: u16, row: u16) -> bool {
    (area.x..area.x.saturating_add(area.width)).contains(&column)
        && (area.y..area.y.saturating_add(area.height)).contains(&row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};

    #[test]
    fn test_rect_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(area, 2, 3));
        assert!(rect_contains(area, 5, 4));
        assert!(!rect_contains(area, 6, 4));
        assert!(!rect_contains(area, 5, 5));
        assert!(!rect_contains(area, 1, 3));
    }

    #[test]
    fn test_rect_contains_empty_area() {
        assert!(!rect_contains(Rect::new(0, 0, 0, 0), 0, 0));
    }

    #[test]
    fn test_rect_contains_at_buffer_edge() {
        let area = Rect::new(u16::MAX - 1, 0, 4, 1);
        assert!(rect_contains(area, u16::MAX - 1, 0));
        assert!(!rect_contains(area, u16::MAX, 0));
    }

    #[test]
    fn test_from_terminal() {
        let key = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(matches!(EventKind::from_terminal(key), Some(EventKind::Key(_))));

        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 10,
            row: 20,
            modifiers: KeyModifiers::NONE,
        });
        match EventKind::from_terminal(wheel) {
            Some(EventKind::Mouse(mouse)) => {
                assert_eq!(mouse.kind, MouseEventKind::ScrollDown);
                assert_eq!((mouse.column, mouse.row), (10, 20));
            }
            other => panic!("Expected mouse event, got {other:?}"),
        }

        assert!(matches!(
            EventKind::from_terminal(Event::Resize(80, 24)),
            Some(EventKind::Resize(80, 24))
        ));
        assert!(EventKind::from_terminal(Event::FocusLost).is_none());
    }
}
