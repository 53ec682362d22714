//! Outbound notifications to the host
//!
//! Two notifications exist, `action_media` (image click) and
//! `action_content` (title click). Both carry the untruncated title and the
//! card id. Hosts either match on [`CardNotification`] effects or register
//! callbacks in [`NotificationHandlers`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::input::CardInput;

/// Payload delivered with every notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardPayload {
    /// The original, untruncated title
    pub title: String,
    pub id: i64,
}

impl CardPayload {
    pub fn from_input(input: &CardInput) -> Self {
        Self {
            title: input.title.clone(),
            id: input.id,
        }
    }
}

/// Notification name, as registered by hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// `action_media`: the image was clicked
    Media,
    /// `action_content`: the title was clicked
    Content,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Media => "action_media",
            NotificationKind::Content => "action_content",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = UnknownNotification;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "action_media" => Ok(NotificationKind::Media),
            "action_content" => Ok(NotificationKind::Content),
            other => Err(UnknownNotification(other.to_string())),
        }
    }
}

/// Error for a notification name the card never emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNotification(pub String);

impl fmt::Display for UnknownNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown card notification: {:?}", self.0)
    }
}

impl std::error::Error for UnknownNotification {}

/// A notification with its payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardNotification {
    pub kind: NotificationKind,
    pub payload: CardPayload,
}

impl CardNotification {
    pub fn media(input: &CardInput) -> Self {
        Self {
            kind: NotificationKind::Media,
            payload: CardPayload::from_input(input),
        }
    }

    pub fn content(input: &CardInput) -> Self {
        Self {
            kind: NotificationKind::Content,
            payload: CardPayload::from_input(input),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.as_str()
    }
}

/// Callback invoked with the payload of a notification.
pub type NotificationHandler = Box<dyn FnMut(&CardPayload) + Send>;

/// Host-registered callbacks, keyed by notification name.
///
/// Handlers run synchronously, in registration order, during the dispatch of
/// the click that produced the notification.
#[derive(Default)]
pub struct NotificationHandlers {
    media: Vec<NotificationHandler>,
    content: Vec<NotificationHandler>,
}

impl NotificationHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one notification kind.
    pub fn on<F>(&mut self, kind: NotificationKind, handler: F) -> &mut Self
    where
        F: FnMut(&CardPayload) + Send + 'static,
    {
        self.handlers_mut(kind).push(Box::new(handler));
        self
    }

    /// Register a handler by name (`"action_media"` or `"action_content"`).
    pub fn on_name<F>(&mut self, name: &str, handler: F) -> Result<&mut Self, UnknownNotification>
    where
        F: FnMut(&CardPayload) + Send + 'static,
    {
        let kind = name.parse()?;
        Ok(self.on(kind, handler))
    }

    /// Invoke every handler registered for the notification's kind.
    pub fn notify(&mut self, notification: &CardNotification) {
        tracing::info!(
            event = notification.name(),
            id = notification.payload.id,
            title = %notification.payload.title,
            "Card notification"
        );
        for handler in self.handlers_mut(notification.kind) {
            handler(&notification.payload);
        }
    }

    /// Number of handlers registered for `kind`.
    pub fn len(&self, kind: NotificationKind) -> usize {
        match kind {
            NotificationKind::Media => self.media.len(),
            NotificationKind::Content => self.content.len(),
        }
    }

    fn handlers_mut(&mut self, kind: NotificationKind) -> &mut Vec<NotificationHandler> {
        match kind {
            NotificationKind::Media => &mut self.media,
            NotificationKind::Content => &mut self.content,
        }
    }
}

impl fmt::Debug for NotificationHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationHandlers")
            .field("media", &self.media.len())
            .field("content", &self.content.len())
            .finish()
    }
}
