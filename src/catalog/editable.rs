use crate::tokens::{TokenStore, TokenValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOption {
    pub label: String,
    pub value: TokenValue,
}

impl TokenOption {
    fn new(label: &str, value: impl Into<TokenValue>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }
}

/// The fixed choices a direct edit may assign to one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditableDescriptor {
    pub key: String,
    pub options: Vec<TokenOption>,
}

impl EditableDescriptor {
    pub fn allows(&self, value: &TokenValue) -> bool {
        self.options.iter().any(|option| &option.value == value)
    }

    pub fn active_option(&self, current: Option<&TokenValue>) -> Option<&TokenOption> {
        let current = current?;
        self.options.iter().find(|option| &option.value == current)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TokenCatalog {
    descriptors: Vec<EditableDescriptor>,
}

impl TokenCatalog {
    pub fn new(descriptors: Vec<EditableDescriptor>) -> Self {
        Self { descriptors }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            EditableDescriptor {
                key: "color.action.primary".to_string(),
                options: vec![
                    TokenOption::new("Violet", "#7c3aed"),
                    TokenOption::new("Blue", "#2563eb"),
                    TokenOption::new("Emerald", "#059669"),
                    TokenOption::new("Rose", "#e11d48"),
                    TokenOption::new("Amber", "#d97706"),
                ],
            },
            numeric_descriptor("radius.component", &[2, 8, 12, 24]),
            numeric_descriptor("type.heading.weight", &[400, 500, 600, 700]),
            numeric_descriptor("space.content.gap", &[8, 16, 24, 32]),
        ])
    }

    pub fn descriptors(&self) -> &[EditableDescriptor] {
        &self.descriptors
    }

    pub fn editable_descriptor(&self, key: &str) -> Option<&EditableDescriptor> {
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.key == key)
    }

    pub fn is_editable(&self, key: &str) -> bool {
        self.editable_descriptor(key).is_some()
    }

    /// Editable keys that the store does not hold yet.
    pub fn missing_keys(&self, store: &TokenStore) -> Vec<&str> {
        self.descriptors
            .iter()
            .map(|descriptor| descriptor.key.as_str())
            .filter(|key| !store.contains(key))
            .collect()
    }
}

fn numeric_descriptor(key: &str, values: &[i64]) -> EditableDescriptor {
    EditableDescriptor {
        key: key.to_string(),
        options: values
            .iter()
            .map(|value| TokenOption::new(&value.to_string(), *value))
            .collect(),
    }
}
