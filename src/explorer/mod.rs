use crate::catalog::{CatalogResult, ComponentCatalog, VariantDescriptor};

const INITIAL_COMPONENT: &str = "Button";
const INITIAL_VARIANT: &str = "Primary";

/// Which component and variant the explorer is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorerState {
    component: String,
    variant: String,
}

impl ExplorerState {
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Switching component always lands on its first variant.
    pub fn select_component(
        &mut self,
        catalog: &ComponentCatalog,
        component: &str,
    ) -> CatalogResult<()> {
        let first = catalog.default_variant(component)?;
        tracing::debug!(component, variant = %first.name, "explorer component selected");
        self.component = component.to_string();
        self.variant = first.name.clone();
        Ok(())
    }

    pub fn select_variant(
        &mut self,
        catalog: &ComponentCatalog,
        variant: &str,
    ) -> CatalogResult<()> {
        catalog.variant(&self.component, variant)?;
        self.variant = variant.to_string();
        Ok(())
    }

    pub fn descriptor<'a>(
        &self,
        catalog: &'a ComponentCatalog,
    ) -> CatalogResult<&'a VariantDescriptor> {
        catalog.variant(&self.component, &self.variant)
    }
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            component: INITIAL_COMPONENT.to_string(),
            variant: INITIAL_VARIANT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogError;

    #[test]
    fn starts_on_primary_button() {
        let state = ExplorerState::default();
        let catalog = ComponentCatalog::standard();
        let descriptor = state.descriptor(&catalog).expect("initial selection exists");
        assert_eq!(descriptor.component, "Button");
        assert_eq!(descriptor.name, "Primary");
    }

    #[test]
    fn selecting_component_resets_to_first_variant() {
        let catalog = ComponentCatalog::standard();
        let mut state = ExplorerState::default();
        state
            .select_variant(&catalog, "Ghost")
            .expect("ghost is a button variant");

        state
            .select_component(&catalog, "Card")
            .expect("card exists");
        assert_eq!(state.component(), "Card");
        assert_eq!(state.variant(), "Default");
    }

    #[test]
    fn invalid_selection_keeps_previous_state() {
        let catalog = ComponentCatalog::standard();
        let mut state = ExplorerState::default();

        let err = state
            .select_variant(&catalog, "Elevated")
            .expect_err("elevated is not a button variant");
        assert!(matches!(err, CatalogError::UnknownVariant { .. }));
        assert!(state.select_component(&catalog, "Slider").is_err());
        assert_eq!(state, ExplorerState::default());
    }
}
