//! One-hop resolution of component token references against the token store.
//!
//! A reference is either a literal (numbers, `#` colors, `transparent`) that
//! resolves to itself, or a store key optionally followed by `→` and a
//! presentation annotation such as `15%`. Store values are never resolved
//! again, so chains and cycles cannot occur.

use crate::catalog::VariantDescriptor;
use crate::tokens::{TokenStore, TokenValue};

pub const ANNOTATION_SEPARATOR: char = '→';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenRef<'a> {
    Literal(&'a TokenValue),
    Reference {
        key: &'a str,
        annotation: Option<&'a str>,
    },
}

impl<'a> TokenRef<'a> {
    pub fn parse(reference: &'a TokenValue) -> Self {
        let text = match reference {
            TokenValue::Number(_) => return Self::Literal(reference),
            TokenValue::Text(text) => text.as_str(),
        };
        if text.starts_with('#') || text.starts_with("transparent") {
            return Self::Literal(reference);
        }

        match text.split_once(ANNOTATION_SEPARATOR) {
            Some((key, annotation)) => Self::Reference {
                key: key.trim(),
                annotation: Some(annotation.trim()).filter(|value| !value.is_empty()),
            },
            None => Self::Reference {
                key: text.trim(),
                annotation: None,
            },
        }
    }

    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference { .. })
    }
}

/// Resolves `reference` against `store`. Unknown keys yield the reference unchanged.
pub fn resolve(reference: &TokenValue, store: &TokenStore) -> TokenValue {
    match TokenRef::parse(reference) {
        TokenRef::Literal(value) => value.clone(),
        TokenRef::Reference { key, .. } => match store.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(key, "unresolved token reference");
                reference.clone()
            }
        },
    }
}

/// One row of the token resolution panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub component_token: String,
    pub reference: TokenValue,
    pub resolved: TokenValue,
    pub is_reference: bool,
    pub annotation: Option<String>,
}

impl Resolution {
    pub fn is_color(&self) -> bool {
        self.resolved.is_color()
    }
}

pub fn resolve_variant(variant: &VariantDescriptor, store: &TokenStore) -> Vec<Resolution> {
    variant
        .tokens
        .iter()
        .map(|(component_token, reference)| {
            let parsed = TokenRef::parse(reference);
            let annotation = match parsed {
                TokenRef::Reference { annotation, .. } => annotation.map(str::to_string),
                TokenRef::Literal(_) => None,
            };
            Resolution {
                component_token: component_token.clone(),
                reference: reference.clone(),
                resolved: resolve(reference, store),
                is_reference: parsed.is_reference(),
                annotation,
            }
        })
        .collect()
}
