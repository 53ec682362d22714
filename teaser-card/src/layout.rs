//! Layout selector: card type to template, template to regions
//!
//! Pure lookups with no state. Each template decides which optional fields
//! appear; all of them stack pre-title, title, ingress and tags the same way.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::input::{CardInput, CardType};

/// Where the image sits relative to the text content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrangement {
    ImageLeft,
    ImageTop,
    TextOnly,
}

/// Fixed visual arrangement selected by [`CardType`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardTemplate {
    pub arrangement: Arrangement,
    pub shows_pre_title: bool,
    pub shows_badge: bool,
    pub shows_image: bool,
}

/// Width share of the image column in the horizontal template.
const IMAGE_COLUMN_PERCENT: u16 = 35;

/// Height of the image band in the vertical and detailed templates.
const IMAGE_BAND_HEIGHT: u16 = 3;

impl CardTemplate {
    /// Select the template for a card type.
    pub fn for_type(card_type: CardType) -> Self {
        match card_type {
            CardType::HorizontalCard => Self {
                arrangement: Arrangement::ImageLeft,
                shows_pre_title: true,
                shows_badge: false,
                shows_image: true,
            },
            CardType::VerticalCard => Self {
                arrangement: Arrangement::ImageTop,
                shows_pre_title: true,
                shows_badge: false,
                shows_image: true,
            },
            CardType::BasicCard => Self {
                arrangement: Arrangement::TextOnly,
                shows_pre_title: true,
                shows_badge: false,
                shows_image: false,
            },
            CardType::DetailedCard => Self {
                arrangement: Arrangement::ImageTop,
                shows_pre_title: true,
                shows_badge: true,
                shows_image: true,
            },
        }
    }

    /// The image reference, if this template renders it for `input`.
    pub fn image<'a>(&self, input: &'a CardInput) -> Option<&'a str> {
        input.image.as_deref().filter(|_| self.shows_image)
    }

    /// The badge text, if this template renders it for `input`.
    pub fn badge<'a>(&self, input: &'a CardInput) -> Option<&'a str> {
        input.badge.as_deref().filter(|_| self.shows_badge)
    }

    /// The pre-title text, if this template renders it for `input`.
    pub fn pre_title<'a>(&self, input: &'a CardInput) -> Option<&'a str> {
        input.pre_title.as_deref().filter(|_| self.shows_pre_title)
    }

    /// Lay out the structural regions of a card inside `area`.
    ///
    /// Regions for elements that are absent or hidden by the template are
    /// `None`; nothing is reserved for them.
    pub fn regions(&self, area: Rect, input: &CardInput) -> CardRegions {
        let (image, content) = match (self.image(input), self.arrangement) {
            (Some(_), Arrangement::ImageLeft) => {
                let [image, content] = Layout::horizontal([
                    Constraint::Percentage(IMAGE_COLUMN_PERCENT),
                    Constraint::Min(0),
                ])
                .areas(area);
                (Some(image), content)
            }
            (Some(_), Arrangement::ImageTop) => {
                let [image, content] =
                    Layout::vertical([Constraint::Length(IMAGE_BAND_HEIGHT), Constraint::Min(0)])
                        .areas(area);
                (Some(image), content)
            }
            _ => (None, area),
        };

        let has_pre_title = self.pre_title(input).is_some();
        let has_badge = self.badge(input).is_some();
        let has_tags = !input.tags.is_empty();

        let mut constraints = Vec::with_capacity(5);
        if has_pre_title {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(1));
        if has_badge {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Min(1));
        if has_tags {
            constraints.push(Constraint::Length(1));
        }

        let rows = Layout::vertical(constraints).split(content);
        let mut rows = rows.iter().copied();
        let mut next = || rows.next().unwrap_or_default();

        let pre_title = has_pre_title.then(&mut next);
        let title = next();
        let badge = has_badge.then(&mut next);
        let ingress = next();
        let tags = has_tags.then(&mut next);

        CardRegions {
            image,
            pre_title,
            title,
            badge,
            ingress,
            tags,
        }
    }
}

/// Rects of each structural region from one layout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CardRegions {
    pub image: Option<Rect>,
    pub pre_title: Option<Rect>,
    pub title: Rect,
    pub badge: Option<Rect>,
    pub ingress: Rect,
    pub tags: Option<Rect>,
}
