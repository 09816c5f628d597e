use indexmap::IndexMap;

use crate::notify::{Listeners, SubscriptionId};

use super::TokenValue;

pub const DEFAULT_TOKENS: [(&str, DefaultToken); 12] = [
    ("color.action.primary", DefaultToken::Text("#7c3aed")),
    ("color.surface.base", DefaultToken::Text("#0a0a0b")),
    ("color.surface.raised", DefaultToken::Text("#18181b")),
    ("color.border.subtle", DefaultToken::Text("#27272a")),
    ("color.text.primary", DefaultToken::Text("#fafafa")),
    ("color.text.muted", DefaultToken::Text("#52525b")),
    ("radius.component", DefaultToken::Number(12)),
    ("radius.container", DefaultToken::Number(16)),
    ("type.heading.weight", DefaultToken::Number(600)),
    ("type.body.weight", DefaultToken::Number(400)),
    ("space.content.gap", DefaultToken::Number(16)),
    ("space.component.padding", DefaultToken::Number(16)),
];

/// Compile-time form of a default token value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultToken {
    Number(i64),
    Text(&'static str),
}

impl DefaultToken {
    pub fn to_value(self) -> TokenValue {
        match self {
            Self::Number(value) => TokenValue::Number(value),
            Self::Text(value) => TokenValue::from(value),
        }
    }
}

/// Default value shipped for `key`, used by the diff panel as the "before" side.
pub fn default_token(key: &str) -> Option<TokenValue> {
    DEFAULT_TOKENS
        .iter()
        .find(|(default_key, _)| *default_key == key)
        .map(|(_, value)| value.to_value())
}

/// A single write to the store, delivered to listeners after it lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenChange {
    pub key: String,
    pub previous: Option<TokenValue>,
    pub value: TokenValue,
}

/// Flat key -> value map. Keys keep their first insertion order; writes replace whole values.
#[derive(Debug, Default)]
pub struct TokenStore {
    values: IndexMap<String, TokenValue>,
    listeners: Listeners<TokenChange>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        DEFAULT_TOKENS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_value()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: TokenValue) {
        let key = key.into();
        let previous = self.values.insert(key.clone(), value.clone());
        tracing::debug!(key = %key, value = %value, "token written");
        self.listeners.emit(&TokenChange {
            key,
            previous,
            value,
        });
    }

    pub fn snapshot(&self) -> &IndexMap<String, TokenValue> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pretty JSON of the current snapshot, in store order.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.values)
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&TokenChange) + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl FromIterator<(String, TokenValue)> for TokenStore {
    fn from_iter<I: IntoIterator<Item = (String, TokenValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            listeners: Listeners::new(),
        }
    }
}
