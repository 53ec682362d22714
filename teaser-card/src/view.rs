//! Card view component
//!
//! Renders a [`CardState`] with the template its card type selects and maps
//! pointer events onto card actions. Hit regions come from the last render.

use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use teaser_card_core::{rect_contains, Component, EventKind};

use crate::action::CardAction;
use crate::layout::CardRegions;
use crate::state::CardState;

/// Props for [`CardView`]
pub struct CardViewProps<'a> {
    pub state: &'a CardState,
}

/// Bordered card with image, pre-title, title, badge, ingress and tags.
///
/// Pointer handling:
/// - moving into the card while not hovered emits `PointerEnter`
/// - moving out while hovered emits `PointerLeave`
/// - a left press on the image or the title emits `MediaClick` or
///   `ContentClick`, preceded by `PointerEnter` if the card was not hovered
#[derive(Default)]
pub struct CardView {
    area: Rect,
    regions: CardRegions,
}

impl CardView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer area from the last render.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Regions from the last render.
    pub fn regions(&self) -> &CardRegions {
        &self.regions
    }

    fn click_target(&self, column: u16, row: u16) -> Option<CardAction> {
        if self
            .regions
            .image
            .is_some_and(|image| rect_contains(image, column, row))
        {
            Some(CardAction::MediaClick)
        } else if rect_contains(self.regions.title, column, row) {
            Some(CardAction::ContentClick)
        } else {
            None
        }
    }
}

impl Component<CardAction> for CardView {
    type Props<'a> = CardViewProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = CardAction> {
        let EventKind::Mouse(mouse) = event else {
            return Vec::new();
        };

        let inside = rect_contains(self.area, mouse.column, mouse.row);
        let hovered = props.state.view().is_hovered();

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => match (inside, hovered) {
                (true, false) => vec![CardAction::PointerEnter],
                (false, true) => vec![CardAction::PointerLeave],
                _ => Vec::new(),
            },
            MouseEventKind::Down(MouseButton::Left) if inside => {
                let mut actions = Vec::with_capacity(2);
                if !hovered {
                    actions.push(CardAction::PointerEnter);
                }
                actions.extend(self.click_target(mouse.column, mouse.row));
                actions
            }
            MouseEventKind::Down(_) if hovered && !inside => vec![CardAction::PointerLeave],
            _ => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        let input = state.input();
        let template = state.template();
        let display = state.display();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if display.is_hovered {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().fg(Color::DarkGray)
            });
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let regions = template.regions(inner, input);

        if let (Some(rect), Some(image)) = (regions.image, template.image(input)) {
            let frame_block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray));
            frame.render_widget(
                Paragraph::new(image_label(image))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Gray))
                    .block(frame_block),
                rect,
            );
        }

        if let (Some(rect), Some(pre_title)) = (regions.pre_title, template.pre_title(input)) {
            frame.render_widget(
                Paragraph::new(pre_title).style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::ITALIC),
                ),
                rect,
            );
        }

        let title_style = if display.is_hovered {
            Style::default()
                .add_modifier(Modifier::BOLD)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Paragraph::new(display.title).style(title_style), regions.title);

        if let (Some(rect), Some(badge)) = (regions.badge, template.badge(input)) {
            let badge = Span::styled(
                format!(" {badge} "),
                Style::default().add_modifier(Modifier::REVERSED),
            );
            frame.render_widget(Paragraph::new(Line::from(badge)), rect);
        }

        frame.render_widget(
            Paragraph::new(display.ingress).wrap(Wrap { trim: true }),
            regions.ingress,
        );

        if let Some(rect) = regions.tags {
            let mut spans = Vec::with_capacity(input.tags.len() * 2);
            for (i, tag) in input.tags.iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(
                    format!("[{tag}]"),
                    Style::default().fg(Color::Yellow),
                ));
            }
            frame.render_widget(Paragraph::new(Line::from(spans)), rect);
        }

        self.area = area;
        self.regions = regions;
    }
}

/// Last path segment of an image reference, or the whole reference.
fn image_label(image: &str) -> &str {
    image
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{CardInput, CardType};
    use crate::reducer::reducer;
    use teaser_card_core::testing::{mouse_click, mouse_move, ActionAssertions, RenderHarness};

    fn detailed_state() -> CardState {
        CardState::new(
            CardInput::new(1, "Card Title longer than 30 characters", "Lorem ipsum dolor sit amet")
                .with_pre_title("Case")
                .with_badge("Badge")
                .with_image("https://example.com/img/fjord.jpg")
                .with_tags(["Tag1", "Tag2"])
                .with_card_type(CardType::DetailedCard),
        )
    }

    fn render(view: &mut CardView, state: &CardState, width: u16, height: u16) -> String {
        let mut harness = RenderHarness::new(width, height);
        harness.render_to_string_plain(|frame| {
            view.render(frame, frame.area(), CardViewProps { state });
        })
    }

    fn events(view: &mut CardView, state: &CardState, event: EventKind) -> Vec<CardAction> {
        view.handle_event(&event, CardViewProps { state })
            .into_iter()
            .collect()
    }

    #[test]
    fn test_render_detailed_card() {
        let state = detailed_state();
        let mut view = CardView::new();

        let output = render(&mut view, &state, 40, 14);

        assert!(output.contains("fjord.jpg"));
        assert!(output.contains("Case"));
        assert!(output.contains("Card Title longer than 30 char"));
        assert!(!output.contains("Card Title longer than 30 chara"));
        assert!(output.contains("Badge"));
        assert!(output.contains("Lorem ipsum"));
        assert!(output.contains("[Tag1] [Tag2]"));
    }

    #[test]
    fn test_render_basic_card_hides_image_and_badge() {
        let mut state = detailed_state();
        state.input.card_type = CardType::BasicCard;
        let mut view = CardView::new();

        let output = render(&mut view, &state, 40, 10);

        assert!(!output.contains("fjord.jpg"));
        assert!(!output.contains("Badge"));
        assert!(output.contains("Case"));
        assert!(view.regions().image.is_none());
    }

    #[test]
    fn test_border_highlights_on_hover() {
        let mut state = detailed_state();
        let mut view = CardView::new();
        let mut harness = RenderHarness::new(40, 14);

        let buffer = harness.render(|frame| {
            view.render(frame, frame.area(), CardViewProps { state: &state });
        });
        assert_eq!(buffer[(0, 0)].fg, Color::DarkGray);

        reducer(&mut state, CardAction::PointerEnter);
        let buffer = harness.render(|frame| {
            view.render(frame, frame.area(), CardViewProps { state: &state });
        });
        assert_eq!(buffer[(0, 0)].fg, Color::Cyan);
    }

    #[test]
    fn test_pointer_motion_maps_to_enter_and_leave() {
        let mut state = detailed_state();
        let mut view = CardView::new();
        let mut harness = RenderHarness::new(60, 20);
        harness.render(|frame| {
            view.render(frame, Rect::new(0, 0, 40, 14), CardViewProps { state: &state });
        });

        events(&mut view, &state, mouse_move(5, 5)).assert_first(CardAction::PointerEnter);
        events(&mut view, &state, mouse_move(50, 5)).assert_empty();

        reducer(&mut state, CardAction::PointerEnter);
        events(&mut view, &state, mouse_move(6, 6)).assert_empty();
        events(&mut view, &state, mouse_move(50, 5)).assert_first(CardAction::PointerLeave);
    }

    #[test]
    fn test_click_on_image_and_title() {
        let mut state = detailed_state();
        let mut view = CardView::new();
        render(&mut view, &state, 40, 14);

        let image = view.regions().image.expect("image region");
        let title = view.regions().title;

        let actions = events(&mut view, &state, mouse_click(image.x + 1, image.y + 1));
        assert_eq!(
            actions,
            vec![CardAction::PointerEnter, CardAction::MediaClick]
        );

        reducer(&mut state, CardAction::PointerEnter);
        let actions = events(&mut view, &state, mouse_click(title.x, title.y));
        actions.assert_count(1);
        actions.assert_first(CardAction::ContentClick);
    }

    #[test]
    fn test_click_elsewhere_in_card_only_enters() {
        let state = detailed_state();
        let mut view = CardView::new();
        render(&mut view, &state, 40, 14);

        let ingress = view.regions().ingress;
        let actions = events(&mut view, &state, mouse_click(ingress.x, ingress.y));
        assert_eq!(actions, vec![CardAction::PointerEnter]);
    }

    #[test]
    fn test_unrendered_view_ignores_pointer() {
        let state = detailed_state();
        let mut view = CardView::new();
        events(&mut view, &state, mouse_click(0, 0)).assert_empty();
    }

    #[test]
    fn test_image_label() {
        assert_eq!(image_label("https://example.com/img/fjord.jpg"), "fjord.jpg");
        assert_eq!(image_label("Test Image"), "Test Image");
        assert_eq!(image_label("https://example.com/"), "https://example.com/");
    }
}
