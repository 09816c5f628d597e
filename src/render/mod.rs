//! Rendering capability for catalog variants, kept apart from the token reference data.

pub mod style;

use std::collections::HashMap;

use crate::catalog::{CatalogError, CatalogResult};
use crate::tokens::TokenStore;

pub use style::StyleDeclarations;
use style::{scaled_px, token_px, token_text, with_alpha};

const ERROR_COLOR: &str = "#ef4444";

pub trait VariantRenderer {
    fn component(&self) -> &'static str;
    fn render(&self, variant: &str, store: &TokenStore) -> CatalogResult<StyleDeclarations>;
}

fn unknown_variant(component: &str, variant: &str) -> CatalogError {
    CatalogError::UnknownVariant {
        component: component.to_string(),
        variant: variant.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonStyle;

impl VariantRenderer for ButtonStyle {
    fn component(&self) -> &'static str {
        "Button"
    }

    fn render(&self, variant: &str, store: &TokenStore) -> CatalogResult<StyleDeclarations> {
        let primary = token_text(store, "color.action.primary");
        let (background, color, border) = match variant {
            "Primary" => (primary, "#fff".to_string(), "none".to_string()),
            "Secondary" => (
                token_text(store, "color.surface.raised"),
                token_text(store, "color.text.primary"),
                format!("1px solid {}", token_text(store, "color.border.subtle")),
            ),
            "Ghost" => ("transparent".to_string(), primary, "none".to_string()),
            other => return Err(unknown_variant(self.component(), other)),
        };

        let declarations = StyleDeclarations::new()
            .with("background", background)
            .with("color", color)
            .with("border", border)
            .with("border-radius", token_px(store, "radius.component"))
            .with("font-weight", token_text(store, "type.heading.weight"))
            .with(
                "padding",
                format!(
                    "{} {}",
                    scaled_px(store, "space.content.gap", 7),
                    scaled_px(store, "space.content.gap", 12)
                ),
            );
        Ok(match variant {
            "Ghost" => declarations.with("text-decoration", "underline"),
            _ => declarations,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardStyle;

impl VariantRenderer for CardStyle {
    fn component(&self) -> &'static str {
        "Card"
    }

    fn render(&self, variant: &str, store: &TokenStore) -> CatalogResult<StyleDeclarations> {
        let primary = token_text(store, "color.action.primary");
        let subtle_border = format!("1px solid {}", token_text(store, "color.border.subtle"));
        let border = match variant {
            "Default" | "Interactive" => subtle_border,
            "Elevated" => format!("1px solid {}", with_alpha(&primary, "25")),
            other => return Err(unknown_variant(self.component(), other)),
        };

        let declarations = StyleDeclarations::new()
            .with("background", token_text(store, "color.surface.raised"))
            .with("border", border)
            .with("border-radius", token_px(store, "radius.container"))
            .with("padding", token_px(store, "space.component.padding"));
        Ok(match variant {
            "Elevated" => declarations.with(
                "box-shadow",
                format!("0 4px 24px {}", with_alpha(&primary, "15")),
            ),
            "Interactive" => declarations.with("cursor", "pointer"),
            _ => declarations,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputStyle;

impl VariantRenderer for InputStyle {
    fn component(&self) -> &'static str {
        "Input"
    }

    fn render(&self, variant: &str, store: &TokenStore) -> CatalogResult<StyleDeclarations> {
        let primary = token_text(store, "color.action.primary");
        let (border, color, ring) = match variant {
            "Default" => (
                format!("1px solid {}", token_text(store, "color.border.subtle")),
                token_text(store, "color.text.muted"),
                None,
            ),
            "Focused" => (
                format!("1px solid {primary}"),
                token_text(store, "color.text.primary"),
                Some(with_alpha(&primary, "20")),
            ),
            "Error" => (
                format!("1px solid {ERROR_COLOR}"),
                token_text(store, "color.text.primary"),
                Some(with_alpha(ERROR_COLOR, "20")),
            ),
            other => return Err(unknown_variant(self.component(), other)),
        };

        let declarations = StyleDeclarations::new()
            .with("background", token_text(store, "color.surface.base"))
            .with("border", border)
            .with("border-radius", token_px(store, "radius.component"))
            .with(
                "padding",
                format!(
                    "{} {}",
                    scaled_px(store, "space.content.gap", 7),
                    scaled_px(store, "space.content.gap", 8)
                ),
            )
            .with("color", color);
        Ok(match ring {
            Some(ring) => declarations.with("box-shadow", format!("0 0 0 3px {ring}")),
            None => declarations,
        })
    }
}

/// Renderers keyed by component name.
pub struct RendererRegistry {
    renderers: HashMap<&'static str, Box<dyn VariantRenderer>>,
}

impl RendererRegistry {
    pub fn empty() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }

    pub fn standard() -> Self {
        let mut registry = Self::empty();
        registry.register(ButtonStyle);
        registry.register(CardStyle);
        registry.register(InputStyle);
        registry
    }

    pub fn register(&mut self, renderer: impl VariantRenderer + 'static) {
        self.renderers
            .insert(renderer.component(), Box::new(renderer));
    }

    pub fn render(
        &self,
        component: &str,
        variant: &str,
        store: &TokenStore,
    ) -> CatalogResult<StyleDeclarations> {
        let renderer = self
            .renderers
            .get(component)
            .ok_or_else(|| CatalogError::UnknownComponent {
                component: component.to_string(),
            })?;
        renderer.render(variant, store)
    }
}

impl std::fmt::Debug for RendererRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut components: Vec<&str> = self.renderers.keys().copied().collect();
        components.sort_unstable();
        f.debug_struct("RendererRegistry")
            .field("components", &components)
            .finish()
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentCatalog;
    use crate::tokens::TokenValue;

    #[test]
    fn every_catalog_variant_has_a_renderer() {
        let catalog = ComponentCatalog::standard();
        let registry = RendererRegistry::standard();
        let store = TokenStore::with_defaults();

        for component in catalog.components() {
            for variant in &component.variants {
                let declarations = registry
                    .render(&component.name, &variant.name, &store)
                    .expect("catalog variant should render");
                assert!(!declarations.is_empty());
            }
        }
    }

    #[test]
    fn primary_button_follows_store_edits() {
        let registry = RendererRegistry::standard();
        let mut store = TokenStore::with_defaults();
        store.set("radius.component", TokenValue::Number(24));
        store.set("color.action.primary", TokenValue::from("#2563eb"));

        let declarations = registry
            .render("Button", "Primary", &store)
            .expect("primary button renders");
        assert_eq!(declarations.get("background"), Some("#2563eb"));
        assert_eq!(declarations.get("border-radius"), Some("24px"));
        assert_eq!(declarations.get("font-weight"), Some("600"));
        assert_eq!(declarations.get("padding"), Some("11.2px 19.2px"));
    }

    #[test]
    fn elevated_card_applies_alpha_to_primary() {
        let registry = RendererRegistry::standard();
        let store = TokenStore::with_defaults();

        let declarations = registry
            .render("Card", "Elevated", &store)
            .expect("elevated card renders");
        assert_eq!(declarations.get("border"), Some("1px solid #7c3aed25"));
        assert_eq!(declarations.get("box-shadow"), Some("0 4px 24px #7c3aed15"));
        assert_eq!(declarations.get("border-radius"), Some("16px"));
    }

    #[test]
    fn error_input_ignores_primary_color() {
        let registry = RendererRegistry::standard();
        let store = TokenStore::with_defaults();

        let declarations = registry
            .render("Input", "Error", &store)
            .expect("error input renders");
        assert_eq!(declarations.get("border"), Some("1px solid #ef4444"));
        assert_eq!(declarations.get("box-shadow"), Some("0 0 0 3px #ef444420"));
    }

    #[test]
    fn unknown_names_are_reported() {
        let registry = RendererRegistry::standard();
        let store = TokenStore::with_defaults();

        assert!(matches!(
            registry.render("Tooltip", "Default", &store),
            Err(CatalogError::UnknownComponent { .. })
        ));
        assert!(matches!(
            registry.render("Card", "Floating", &store),
            Err(CatalogError::UnknownVariant { .. })
        ));
    }
}
