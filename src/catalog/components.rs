use indexmap::IndexMap;

use crate::resolve::TokenRef;
use crate::tokens::{TokenStore, TokenValue};

use super::error::{CatalogError, CatalogResult};

/// One variant of a component and the token reference behind each of its visual properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub component: String,
    pub name: String,
    pub tokens: IndexMap<String, TokenValue>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    pub name: String,
    pub variants: Vec<VariantDescriptor>,
}

/// A component token whose store-key reference names an absent token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub component: String,
    pub variant: String,
    pub component_token: String,
    pub key: String,
}

#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: Vec<ComponentDescriptor>,
}

impl ComponentCatalog {
    pub fn new(components: Vec<ComponentDescriptor>) -> Self {
        Self { components }
    }

    pub fn standard() -> Self {
        Self::new(vec![
            component(
                "Button",
                vec![
                    variant(
                        "Button",
                        "Primary",
                        &[
                            ("button.primary.bg", "color.action.primary"),
                            ("button.primary.text", "#ffffff"),
                            ("button.primary.radius", "radius.component"),
                            ("button.primary.weight", "type.heading.weight"),
                            ("button.primary.padding", "space.content.gap"),
                        ],
                    ),
                    variant(
                        "Button",
                        "Secondary",
                        &[
                            ("button.secondary.bg", "color.surface.raised"),
                            ("button.secondary.text", "color.text.primary"),
                            ("button.secondary.border", "color.border.subtle"),
                            ("button.secondary.radius", "radius.component"),
                            ("button.secondary.padding", "space.content.gap"),
                        ],
                    ),
                    variant(
                        "Button",
                        "Ghost",
                        &[
                            ("button.ghost.bg", "transparent"),
                            ("button.ghost.text", "color.action.primary"),
                            ("button.ghost.radius", "radius.component"),
                            ("button.ghost.padding", "space.content.gap"),
                        ],
                    ),
                ],
            ),
            component(
                "Card",
                vec![
                    variant(
                        "Card",
                        "Default",
                        &[
                            ("card.default.bg", "color.surface.raised"),
                            ("card.default.border", "color.border.subtle"),
                            ("card.default.radius", "radius.container"),
                            ("card.default.padding", "space.component.padding"),
                        ],
                    ),
                    variant(
                        "Card",
                        "Elevated",
                        &[
                            ("card.elevated.bg", "color.surface.raised"),
                            ("card.elevated.border", "color.action.primary → 15%"),
                            ("card.elevated.shadow", "color.action.primary → 10%"),
                            ("card.elevated.radius", "radius.container"),
                            ("card.elevated.padding", "space.component.padding"),
                        ],
                    ),
                    variant(
                        "Card",
                        "Interactive",
                        &[
                            ("card.interactive.bg", "color.surface.raised"),
                            ("card.interactive.border", "color.border.subtle"),
                            ("card.interactive.hover.border", "color.action.primary → 40%"),
                            ("card.interactive.radius", "radius.container"),
                            ("card.interactive.padding", "space.component.padding"),
                        ],
                    ),
                ],
            ),
            component(
                "Input",
                vec![
                    variant(
                        "Input",
                        "Default",
                        &[
                            ("input.default.bg", "color.surface.base"),
                            ("input.default.border", "color.border.subtle"),
                            ("input.default.text", "color.text.primary"),
                            ("input.default.placeholder", "color.text.muted"),
                            ("input.default.radius", "radius.component"),
                            ("input.default.padding", "space.content.gap"),
                        ],
                    ),
                    variant(
                        "Input",
                        "Focused",
                        &[
                            ("input.focused.bg", "color.surface.base"),
                            ("input.focused.border", "color.action.primary"),
                            ("input.focused.ring", "color.action.primary → 20%"),
                            ("input.focused.text", "color.text.primary"),
                            ("input.focused.radius", "radius.component"),
                        ],
                    ),
                    variant(
                        "Input",
                        "Error",
                        &[
                            ("input.error.bg", "color.surface.base"),
                            ("input.error.border", "#ef4444"),
                            ("input.error.ring", "#ef4444 → 20%"),
                            ("input.error.text", "color.text.primary"),
                            ("input.error.radius", "radius.component"),
                        ],
                    ),
                ],
            ),
        ])
    }

    pub fn components(&self) -> &[ComponentDescriptor] {
        &self.components
    }

    pub fn component(&self, name: &str) -> CatalogResult<&ComponentDescriptor> {
        self.components
            .iter()
            .find(|component| component.name == name)
            .ok_or_else(|| CatalogError::UnknownComponent {
                component: name.to_string(),
            })
    }

    pub fn variant(&self, component: &str, variant: &str) -> CatalogResult<&VariantDescriptor> {
        self.component(component)?
            .variants
            .iter()
            .find(|descriptor| descriptor.name == variant)
            .ok_or_else(|| CatalogError::UnknownVariant {
                component: component.to_string(),
                variant: variant.to_string(),
            })
    }

    pub fn component_names(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|component| component.name.as_str())
            .collect()
    }

    pub fn variant_names(&self, component: &str) -> CatalogResult<Vec<&str>> {
        Ok(self
            .component(component)?
            .variants
            .iter()
            .map(|variant| variant.name.as_str())
            .collect())
    }

    pub fn default_variant(&self, component: &str) -> CatalogResult<&VariantDescriptor> {
        let descriptor = self.component(component)?;
        descriptor
            .variants
            .first()
            .ok_or_else(|| CatalogError::EmptyComponent {
                component: component.to_string(),
            })
    }

    pub fn unresolved_references(&self, store: &TokenStore) -> Vec<UnresolvedReference> {
        let mut missing = Vec::new();
        for component in &self.components {
            for variant in &component.variants {
                for (component_token, reference) in &variant.tokens {
                    if let TokenRef::Reference { key, .. } = TokenRef::parse(reference) {
                        if !store.contains(key) {
                            missing.push(UnresolvedReference {
                                component: component.name.clone(),
                                variant: variant.name.clone(),
                                component_token: component_token.clone(),
                                key: key.to_string(),
                            });
                        }
                    }
                }
            }
        }
        missing
    }
}

fn component(name: &str, variants: Vec<VariantDescriptor>) -> ComponentDescriptor {
    ComponentDescriptor {
        name: name.to_string(),
        variants,
    }
}

fn variant(component: &str, name: &str, tokens: &[(&str, &str)]) -> VariantDescriptor {
    VariantDescriptor {
        component: component.to_string(),
        name: name.to_string(),
        tokens: tokens
            .iter()
            .map(|(token, reference)| (token.to_string(), TokenValue::from(*reference)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_declares_three_components_with_three_variants_each() {
        let catalog = ComponentCatalog::standard();
        assert_eq!(catalog.component_names(), vec!["Button", "Card", "Input"]);
        assert_eq!(
            catalog.variant_names("Button").expect("button exists"),
            vec!["Primary", "Secondary", "Ghost"]
        );
        assert_eq!(
            catalog.variant_names("Card").expect("card exists"),
            vec!["Default", "Elevated", "Interactive"]
        );
        assert_eq!(
            catalog.variant_names("Input").expect("input exists"),
            vec!["Default", "Focused", "Error"]
        );
    }

    #[test]
    fn variant_lookup_preserves_token_order() {
        let catalog = ComponentCatalog::standard();
        let variant = catalog
            .variant("Card", "Elevated")
            .expect("elevated card exists");
        let tokens: Vec<&str> = variant.tokens.keys().map(String::as_str).collect();

        assert_eq!(variant.component, "Card");
        assert_eq!(
            tokens,
            vec![
                "card.elevated.bg",
                "card.elevated.border",
                "card.elevated.shadow",
                "card.elevated.radius",
                "card.elevated.padding"
            ]
        );
        assert_eq!(
            variant.tokens["card.elevated.border"],
            TokenValue::from("color.action.primary → 15%")
        );
    }

    #[test]
    fn unknown_names_return_typed_errors() {
        let catalog = ComponentCatalog::standard();

        let err = catalog
            .variant("Tooltip", "Default")
            .expect_err("tooltip is not in the catalog");
        assert!(matches!(
            err,
            CatalogError::UnknownComponent { ref component } if component == "Tooltip"
        ));

        let err = catalog
            .variant("Button", "Danger")
            .expect_err("danger is not a button variant");
        assert!(matches!(
            err,
            CatalogError::UnknownVariant { ref component, ref variant }
                if component == "Button" && variant == "Danger"
        ));
    }

    #[test]
    fn default_variant_is_first_declared() {
        let catalog = ComponentCatalog::standard();
        let variant = catalog.default_variant("Input").expect("input exists");
        assert_eq!(variant.name, "Default");

        let empty = ComponentCatalog::new(vec![component("Badge", Vec::new())]);
        assert!(matches!(
            empty.default_variant("Badge"),
            Err(CatalogError::EmptyComponent { .. })
        ));
    }

    #[test]
    fn standard_catalog_references_only_default_tokens() {
        let catalog = ComponentCatalog::standard();
        assert!(catalog
            .unresolved_references(&TokenStore::with_defaults())
            .is_empty());
    }

    #[test]
    fn unresolved_references_name_the_missing_key() {
        let catalog = ComponentCatalog::standard();
        let store: TokenStore = TokenStore::with_defaults()
            .snapshot()
            .iter()
            .filter(|(key, _)| key.as_str() != "radius.container")
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        let missing = catalog.unresolved_references(&store);
        assert_eq!(missing.len(), 3);
        assert!(missing
            .iter()
            .all(|reference| reference.key == "radius.container" && reference.component == "Card"));
    }
}
