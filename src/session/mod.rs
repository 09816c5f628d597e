use std::time::Instant;

use crate::canvas::CanvasControl;
use crate::catalog::{ComponentCatalog, TokenCatalog};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::explorer::ExplorerState;
use crate::notify::SubscriptionId;
use crate::propagation::{
    EditOrigin, FlowNotification, FlowTimings, PropagationController, PropagationEvent,
};
use crate::render::{RendererRegistry, StyleDeclarations};
use crate::resolve::{resolve, resolve_variant, Resolution};
use crate::tokens::{TokenChange, TokenStore, TokenValue};
use crate::view::{self, DiffLine, FlowIndicator, GeneratedOutput, Panel, TokenRow};

/// Everything the panels read from and write to, owned in one place.
#[derive(Debug)]
pub struct TokenSession {
    store: TokenStore,
    controller: PropagationController,
    token_catalog: TokenCatalog,
    component_catalog: ComponentCatalog,
    renderers: RendererRegistry,
    explorer: ExplorerState,
}

impl TokenSession {
    pub fn new(timings: FlowTimings) -> Self {
        Self::with_parts(
            TokenStore::with_defaults(),
            PropagationController::new(timings),
            TokenCatalog::standard(),
            ComponentCatalog::standard(),
        )
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.timings())
    }

    pub fn with_parts(
        store: TokenStore,
        controller: PropagationController,
        token_catalog: TokenCatalog,
        component_catalog: ComponentCatalog,
    ) -> Self {
        for key in token_catalog.missing_keys(&store) {
            tracing::warn!(key, "editable token missing from store");
        }
        for missing in component_catalog.unresolved_references(&store) {
            tracing::warn!(
                component = %missing.component,
                variant = %missing.variant,
                token = %missing.component_token,
                key = %missing.key,
                "component token references an absent store key"
            );
        }

        Self {
            store,
            controller,
            token_catalog,
            component_catalog,
            renderers: RendererRegistry::standard(),
            explorer: ExplorerState::default(),
        }
    }

    pub fn store(&self) -> &TokenStore {
        &self.store
    }

    pub fn controller(&self) -> &PropagationController {
        &self.controller
    }

    pub fn token_catalog(&self) -> &TokenCatalog {
        &self.token_catalog
    }

    pub fn component_catalog(&self) -> &ComponentCatalog {
        &self.component_catalog
    }

    pub fn explorer(&self) -> &ExplorerState {
        &self.explorer
    }

    /// Direct edit from the token panel; only the catalog's options are accepted.
    pub fn edit_token(
        &mut self,
        key: &str,
        value: TokenValue,
        now: Instant,
    ) -> AppResult<PropagationEvent> {
        let descriptor = self
            .token_catalog
            .editable_descriptor(key)
            .ok_or_else(|| AppError::NotEditable {
                key: key.to_string(),
            })?;
        if !descriptor.allows(&value) {
            return Err(AppError::OptionNotAllowed {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
        Ok(self.apply_edit(key, value, EditOrigin::Primary, now))
    }

    /// Gesture on the canvas, written back as a reverse-sync edit.
    pub fn canvas_edit(
        &mut self,
        control: CanvasControl,
        now: Instant,
    ) -> AppResult<PropagationEvent> {
        let (key, value) = control.edit(&self.store)?;
        Ok(self.apply_edit(key, value, EditOrigin::ReverseSync, now))
    }

    /// Unchecked write; the store accepts any value.
    pub fn apply_edit(
        &mut self,
        key: &str,
        value: TokenValue,
        origin: EditOrigin,
        now: Instant,
    ) -> PropagationEvent {
        self.controller
            .apply_edit(&mut self.store, key, value, origin, now)
    }

    pub fn tick(&mut self, now: Instant) -> AppResult<usize> {
        Ok(self.controller.tick(now)?)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.controller.next_deadline()
    }

    pub fn resolve(&self, reference: &TokenValue) -> TokenValue {
        resolve(reference, &self.store)
    }

    pub fn select_component(&mut self, component: &str) -> AppResult<()> {
        Ok(self
            .explorer
            .select_component(&self.component_catalog, component)?)
    }

    pub fn select_variant(&mut self, variant: &str) -> AppResult<()> {
        Ok(self
            .explorer
            .select_variant(&self.component_catalog, variant)?)
    }

    pub fn resolve_active_variant(&self) -> AppResult<Vec<Resolution>> {
        let descriptor = self.explorer.descriptor(&self.component_catalog)?;
        Ok(resolve_variant(descriptor, &self.store))
    }

    pub fn render_active_variant(&self) -> AppResult<StyleDeclarations> {
        self.render_variant(self.explorer.component(), self.explorer.variant())
    }

    pub fn render_variant(&self, component: &str, variant: &str) -> AppResult<StyleDeclarations> {
        self.component_catalog.variant(component, variant)?;
        Ok(self.renderers.render(component, variant, &self.store)?)
    }

    pub fn flow_indicator(&self, panel: Panel) -> Option<FlowIndicator> {
        view::flow_indicator(panel, self.controller.phase())
    }

    pub fn token_rows(&self) -> Vec<TokenRow> {
        view::token_rows(&self.store, &self.token_catalog, &self.controller)
    }

    pub fn token_diff(&self) -> Vec<DiffLine> {
        view::token_diff(&self.store, self.controller.last_edit())
    }

    pub fn build_log(&self) -> &'static [&'static str] {
        &view::BUILD_LOG
    }

    /// Outputs rebuilt by the last edit; every output before any edit.
    pub fn generated_outputs(&self) -> Vec<GeneratedOutput> {
        match self.controller.last_edit() {
            Some(event) => view::outputs_affected_by(&event.key),
            None => view::GENERATED_OUTPUTS.to_vec(),
        }
    }

    pub fn sketchpad_status(&self) -> &'static str {
        view::sketchpad_status(&self.controller)
    }

    pub fn snapshot_json(&self) -> AppResult<String> {
        Ok(self.store.to_json()?)
    }

    pub fn subscribe_tokens(
        &mut self,
        listener: impl FnMut(&TokenChange) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn subscribe_flow(
        &mut self,
        listener: impl FnMut(&FlowNotification) + 'static,
    ) -> SubscriptionId {
        self.controller.subscribe(listener)
    }
}

impl Default for TokenSession {
    fn default() -> Self {
        Self::new(FlowTimings::default())
    }
}
