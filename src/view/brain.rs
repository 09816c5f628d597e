use crate::catalog::TokenCatalog;
use crate::propagation::{EditOrigin, PropagationController};
use crate::tokens::TokenStore;

/// One line of the `tokens.json` listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRow {
    pub key: String,
    pub value: String,
    pub editable: bool,
    pub changed: bool,
    pub from_canvas: bool,
    /// The `← canvas` marker, shown only while the sync flash runs.
    pub canvas_marker: bool,
}

pub fn token_rows(
    store: &TokenStore,
    catalog: &TokenCatalog,
    controller: &PropagationController,
) -> Vec<TokenRow> {
    let last_edit = controller.last_edit();
    store
        .snapshot()
        .iter()
        .map(|(key, value)| {
            let changed = last_edit.is_some_and(|event| &event.key == key);
            let from_canvas =
                changed && last_edit.is_some_and(|event| event.origin == EditOrigin::ReverseSync);
            TokenRow {
                key: key.clone(),
                value: value.to_json_literal(),
                editable: catalog.is_editable(key),
                changed,
                from_canvas,
                canvas_marker: from_canvas && controller.sync_flash_active(),
            }
        })
        .collect()
}

pub const STATUS_LIVE: &str = "live — reading from tokens.json";
pub const STATUS_NOODLED: &str = "noodled — syncing back to tokens";

/// Status line under the canvas.
pub fn sketchpad_status(controller: &PropagationController) -> &'static str {
    match controller.last_edit().map(|event| event.origin) {
        Some(EditOrigin::ReverseSync) => STATUS_NOODLED,
        Some(EditOrigin::Primary) | None => STATUS_LIVE,
    }
}
