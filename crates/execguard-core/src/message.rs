//! Structured diagnostic messages
//!
//! A message is an ordered list of typed segments rather than a flat string, so
//! renderers can style references (API names, identifiers) without re-parsing.
//! Messages are composed once through [`StructuredMessage::build`] and are
//! immutable afterwards.

use serde::{Deserialize, Serialize};

/// One piece of a structured message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MessageSegment {
    /// Plain prose.
    Text(String),
    /// A reference to an API or identifier, rendered distinctly.
    Reference(String),
}

impl MessageSegment {
    /// The raw text carried by the segment, whatever its kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Reference(text) => text,
        }
    }

    /// Returns `true` for reference segments.
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(_))
    }
}

/// Ordered, immutable sequence of message segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredMessage {
    segments: Vec<MessageSegment>,
}

impl StructuredMessage {
    /// Compose a message with the append-only builder.
    ///
    /// ```
    /// use execguard_core::{MessageSegment, StructuredMessage};
    ///
    /// let message = StructuredMessage::build(|b| {
    ///     b.text("invocation of ");
    ///     b.reference("getProject");
    /// });
    /// assert_eq!(message.segments()[1], MessageSegment::Reference("getProject".into()));
    /// ```
    pub fn build(compose: impl FnOnce(&mut StructuredMessageBuilder)) -> Self {
        let mut builder = StructuredMessageBuilder::default();
        compose(&mut builder);
        builder.finish()
    }

    /// Segments in composition order.
    pub fn segments(&self) -> &[MessageSegment] {
        &self.segments
    }

    /// Reference segments only, in order.
    pub fn references(&self) -> impl Iterator<Item = &str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_reference())
            .map(MessageSegment::as_str)
    }

    /// Returns `true` if `name` appears as a reference segment.
    pub fn has_reference(&self, name: &str) -> bool {
        self.references().any(|reference| reference == name)
    }

    /// Returns `true` if the message has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl std::fmt::Display for StructuredMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for segment in &self.segments {
            match segment {
                MessageSegment::Text(text) => f.write_str(text)?,
                MessageSegment::Reference(name) => write!(f, "`{name}`")?,
            }
        }
        Ok(())
    }
}

/// Append-only builder handed to [`StructuredMessage::build`].
#[derive(Debug, Default)]
pub struct StructuredMessageBuilder {
    segments: Vec<MessageSegment>,
}

impl StructuredMessageBuilder {
    /// Append a plain text segment.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.segments.push(MessageSegment::Text(text.into()));
        self
    }

    /// Append a reference segment.
    pub fn reference(&mut self, name: impl Into<String>) -> &mut Self {
        self.segments.push(MessageSegment::Reference(name.into()));
        self
    }

    fn finish(self) -> StructuredMessage {
        StructuredMessage {
            segments: self.segments,
        }
    }
}
