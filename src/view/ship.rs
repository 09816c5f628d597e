use crate::propagation::{EditOrigin, PropagationEvent};
use crate::tokens::{default_token, TokenStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine {
    Command(String),
    Hunk(String),
    Removed(String),
    Added(String),
    Note(String),
    Unchanged,
}

/// Simulated `git diff tokens.json` for the most recent edit.
pub fn token_diff(store: &TokenStore, last_edit: Option<&PropagationEvent>) -> Vec<DiffLine> {
    let mut lines = vec![DiffLine::Command("$ git diff tokens.json".to_string())];
    let Some(event) = last_edit else {
        lines.push(DiffLine::Unchanged);
        return lines;
    };

    let key = &event.key;
    let before = default_token(key)
        .map_or_else(|| "undefined".to_string(), |v| v.to_json_literal());
    let after = store
        .get(key)
        .map_or_else(|| "undefined".to_string(), |v| v.to_json_literal());

    lines.push(DiffLine::Hunk(format!("@@ {key} @@")));
    lines.push(DiffLine::Removed(format!("- \"{key}\": {before}")));
    lines.push(DiffLine::Added(format!("+ \"{key}\": {after}")));
    if event.origin == EditOrigin::ReverseSync {
        lines.push(DiffLine::Note("# synced from canvas".to_string()));
    }
    lines
}

pub const BUILD_LOG: [&str; 6] = [
    "$ npm run build:tokens",
    "✓ css variables compiled",
    "✓ figma variables synced",
    "✓ components rebuilt",
    "$ git push origin main",
    "✓ deployed to production",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedOutput {
    pub name: &'static str,
    pub source: &'static str,
}

pub const GENERATED_OUTPUTS: [GeneratedOutput; 5] = [
    GeneratedOutput {
        name: "variables.css",
        source: "tokens.json",
    },
    GeneratedOutput {
        name: "tokens.ts",
        source: "tokens.json",
    },
    GeneratedOutput {
        name: "figma-variables",
        source: "tokens.json",
    },
    GeneratedOutput {
        name: "Button.tsx",
        source: "color.action.primary",
    },
    GeneratedOutput {
        name: "Card.tsx",
        source: "radius.component",
    },
];

/// Outputs that a change to `key` would rebuild.
pub fn outputs_affected_by(key: &str) -> Vec<GeneratedOutput> {
    GENERATED_OUTPUTS
        .iter()
        .filter(|output| output.source == "tokens.json" || output.source == key)
        .copied()
        .collect()
}
