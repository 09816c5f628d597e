use indexmap::IndexMap;

use crate::resolve::resolve;
use crate::tokens::{TokenStore, TokenValue};

/// Ordered CSS-like declarations produced for one rendered variant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    properties: IndexMap<&'static str, String>,
}

impl StyleDeclarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.properties.insert(property, value.into());
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.properties
            .iter()
            .map(|(property, value)| (*property, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_css(&self, selector: &str) -> String {
        let mut css = format!("{selector} {{\n");
        for (property, value) in self.iter() {
            css.push_str(&format!("  {property}: {value};\n"));
        }
        css.push('}');
        css
    }
}

/// Store value for `key` as text; unknown keys fall back to the key itself.
pub(crate) fn token_text(store: &TokenStore, key: &str) -> String {
    resolve(&TokenValue::from(key), store).to_string()
}

pub(crate) fn token_px(store: &TokenStore, key: &str) -> String {
    match resolve(&TokenValue::from(key), store) {
        TokenValue::Number(value) => format!("{value}px"),
        TokenValue::Text(text) => text,
    }
}

/// `value * tenths / 10` in pixels, with at most one decimal place.
///
/// Values too large to scale are emitted unscaled.
pub(crate) fn scaled_px(store: &TokenStore, key: &str, tenths: i64) -> String {
    let Some(value) = store.get(key).and_then(TokenValue::as_number) else {
        return token_text(store, key);
    };
    let Some(scaled) = value.checked_mul(tenths) else {
        tracing::debug!(key, value, tenths, "scaled size overflows; using raw value");
        return format!("{value}px");
    };
    let (whole, fraction) = (scaled / 10, (scaled % 10).abs());
    if fraction == 0 {
        format!("{whole}px")
    } else if scaled < 0 && whole == 0 {
        format!("-0.{fraction}px")
    } else {
        format!("{whole}.{fraction}px")
    }
}

/// Appends a two-digit hex alpha to a `#rrggbb` color.
pub(crate) fn with_alpha(color: &str, alpha_hex: &str) -> String {
    format!("{color}{alpha_hex}")
}
