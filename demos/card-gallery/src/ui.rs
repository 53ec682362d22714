//! Gallery layout: cards in a two-column grid above a status line

use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use teaser_card::{CardView, CardViewProps, Component};
use teaser_card_core::EventKind;

use crate::action::AppAction;
use crate::state::AppState;

const COLUMNS: usize = 2;

pub struct GalleryProps<'a> {
    pub state: &'a AppState,
}

/// Owns one `CardView` per card so each keeps its own hit regions.
#[derive(Default)]
pub struct Gallery {
    cards: Vec<CardView>,
}

impl Gallery {
    pub fn new() -> Self {
        Self::default()
    }

    fn cells(area: Rect, count: usize) -> Vec<Rect> {
        let rows = count.div_ceil(COLUMNS).max(1);
        let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
        row_areas
            .iter()
            .flat_map(|row| {
                Layout::horizontal(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
                    .split(*row)
                    .to_vec()
            })
            .take(count)
            .collect()
    }

    fn status_line(state: &AppState) -> Line<'static> {
        match &state.last_notification {
            Some(notification) => Line::from(vec![
                Span::styled(
                    notification.name(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(
                    " id={} title={:?}",
                    notification.payload.id, notification.payload.title
                )),
            ]),
            None => Line::from(Span::styled(
                "hover a card to reveal its text, click image or title, q to quit",
                Style::default().fg(Color::DarkGray),
            )),
        }
    }
}

impl Component<AppAction> for Gallery {
    type Props<'a> = GalleryProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = AppAction> {
        if let EventKind::Key(key) = event {
            return match key.code {
                KeyCode::Char('q') | KeyCode::Esc => vec![AppAction::Quit],
                _ => Vec::new(),
            };
        }

        let mut actions = Vec::new();
        for (slot, (view, state)) in self.cards.iter_mut().zip(&props.state.cards).enumerate() {
            actions.extend(
                view.handle_event(event, CardViewProps { state })
                    .into_iter()
                    .map(|action| AppAction::Card { slot, action }),
            );
        }
        actions
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        self.cards.resize_with(state.cards.len(), CardView::new);

        let [grid, status] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        for ((view, card), cell) in self
            .cards
            .iter_mut()
            .zip(&state.cards)
            .zip(Self::cells(grid, state.cards.len()))
        {
            view.render(frame, cell, CardViewProps { state: card });
        }

        frame.render_widget(Paragraph::new(Self::status_line(state)), status);
    }
}
