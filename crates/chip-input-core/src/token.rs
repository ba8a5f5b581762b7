/// Token ("chip") model and identifier generation.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of a token, stable for the token's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One selectable, removable item of a chip input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub id: TokenId,
    /// Display text.
    pub label: String,
    /// Secondary payload. Defaults to the label.
    pub value: String,
    /// Transient selection state.
    pub selected: bool,
    /// Disabled tokens ignore clicks and cannot be removed individually.
    pub disabled: bool,
}

impl Token {
    /// Creates an unselected, enabled token whose value equals its label.
    pub fn new(id: impl Into<TokenId>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            id: id.into(),
            value: label.clone(),
            label,
            selected: false,
            disabled: false,
        }
    }

    /// Creates a token with an explicit value; `None` falls back to the label.
    pub fn with_value(
        id: impl Into<TokenId>,
        label: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let mut token = Self::new(id, label);
        if let Some(value) = value {
            token.value = value;
        }
        token
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Source of fresh token identifiers.
///
/// Injected wherever tokens are created so hosts and tests control how ids
/// look and whether they are deterministic.
pub trait IdGenerator {
    fn next_id(&mut self) -> TokenId;
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TokenId {
        TokenId(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic `"<prefix>-<n>"` identifiers, counting from 1.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: 0,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("chip")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TokenId {
        self.counter += 1;
        TokenId(format!("{}-{}", self.prefix, self.counter))
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> TokenId {
        (**self).next_id()
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> TokenId {
        (**self).next_id()
    }
}
