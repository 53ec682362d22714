//! Host-supplied card input
//!
//! `CardInput` is read-only for the widget. It deserializes from the same
//! camelCase shape hosts already use (`preTitle`, `cardType`).

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Which of the four fixed layouts a card renders with.
///
/// Unknown names never fail: deserialization and [`CardType::from_name`]
/// fall back to [`CardType::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum CardType {
    /// Image column on the left, content on the right
    HorizontalCard,
    /// Image band on top, content below
    VerticalCard,
    /// Text only
    #[default]
    BasicCard,
    /// Image band, badge row, content
    DetailedCard,
}

impl CardType {
    /// All card types, in showcase order.
    pub const ALL: [CardType; 4] = [
        CardType::HorizontalCard,
        CardType::VerticalCard,
        CardType::BasicCard,
        CardType::DetailedCard,
    ];

    /// The host-facing name (`"horizontalCard"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::HorizontalCard => "horizontalCard",
            CardType::VerticalCard => "verticalCard",
            CardType::BasicCard => "basicCard",
            CardType::DetailedCard => "detailedCard",
        }
    }

    /// Lenient lookup: unknown names log a warning and use the default layout.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|err: UnknownCardType| {
            tracing::warn!(error = %err, fallback = Self::default().as_str(), "Unknown card type");
            Self::default()
        })
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = UnknownCardType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|card_type| card_type.as_str() == s)
            .ok_or_else(|| UnknownCardType(s.to_string()))
    }
}

impl From<String> for CardType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Error for a card type name that matches none of the layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCardType(pub String);

impl fmt::Display for UnknownCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card type: {:?}", self.0)
    }
}

impl std::error::Error for UnknownCardType {}

/// Immutable card data supplied by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardInput {
    /// Opaque identifier, passed through unchanged in notifications
    pub id: i64,
    pub title: String,
    /// Summary text; may be empty
    pub ingress: String,
    #[serde(default)]
    pub pre_title: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    /// Image reference (usually a URL)
    #[serde(default)]
    pub image: Option<String>,
    /// Presentation order, duplicates allowed
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub card_type: CardType,
}

impl CardInput {
    /// Create input with the required fields; everything else is absent.
    pub fn new(id: i64, title: impl Into<String>, ingress: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ingress: ingress.into(),
            ..Default::default()
        }
    }

    pub fn with_pre_title(mut self, pre_title: impl Into<String>) -> Self {
        self.pre_title = Some(pre_title.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.card_type = card_type;
        self
    }
}
