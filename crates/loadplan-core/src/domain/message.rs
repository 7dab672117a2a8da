use std::collections::BTreeMap;
use std::fmt;

use super::PartId;

/// Severity of a preprocessing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    /// Makes the whole request unsolvable.
    Error,
    Warning,
    Info,
}

/// A structured message with a stable machine-readable code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Message {
    pub severity: Severity,
    pub text: String,
    pub code: String,
}

impl Message {
    pub fn new(severity: Severity, code: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            code: code.into(),
        }
    }

    pub fn error(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, text)
    }

    pub fn warning(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, text)
    }

    pub fn info(code: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(Severity::Info, code, text)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}: {}", self.severity, self.code, self.text)
    }
}

/// Messages attached globally or to individual parts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Messages {
    global: Vec<Message>,
    per_part: BTreeMap<PartId, Vec<Message>>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_global(&mut self, message: Message) {
        self.global.push(message);
    }

    pub fn add_part(&mut self, part: PartId, message: Message) {
        self.per_part.entry(part).or_default().push(message);
    }

    pub fn global(&self) -> &[Message] {
        &self.global
    }

    pub fn for_part(&self, part: PartId) -> &[Message] {
        self.per_part.get(&part).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every message with the part it is attached to, globals first.
    pub fn iter(&self) -> impl Iterator<Item = (Option<PartId>, &Message)> {
        self.global.iter().map(|m| (None, m)).chain(
            self.per_part
                .iter()
                .flat_map(|(id, msgs)| msgs.iter().map(move |m| (Some(*id), m))),
        )
    }

    /// Any error anywhere makes the request unsolvable.
    pub fn has_errors(&self) -> bool {
        self.iter().any(|(_, m)| m.is_error())
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.iter().filter(|(_, m)| m.severity == severity).count()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.per_part.values().all(Vec::is_empty)
    }

    /// True if any message (global or per part) carries `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        self.iter().any(|(_, m)| m.code == code)
    }

    pub fn extend(&mut self, other: Messages) {
        self.global.extend(other.global);
        for (id, msgs) in other.per_part {
            self.per_part.entry(id).or_default().extend(msgs);
        }
    }
}
