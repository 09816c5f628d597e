use super::model::{EditOrigin, FlowPhase};
use crate::tokens::TokenValue;

/// One edit transaction. `sequence` increases with every edit so superseded events are
/// distinguishable from the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationEvent {
    pub sequence: u64,
    pub key: String,
    pub value: TokenValue,
    pub origin: EditOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTrigger {
    Edit(EditOrigin),
    Timeout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTransition {
    pub from: FlowPhase,
    pub trigger: FlowTrigger,
    pub to: FlowPhase,
}

impl FlowTransition {
    pub const fn new(from: FlowPhase, trigger: FlowTrigger, to: FlowPhase) -> Self {
        Self { from, trigger, to }
    }
}

/// What changed at a notification point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowBoundary {
    Edit,
    PhaseTimeout,
    SyncFlashEnded,
}

/// Delivered to controller listeners on every edit and every timed boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNotification {
    pub boundary: FlowBoundary,
    pub phase: FlowPhase,
    pub event: Option<PropagationEvent>,
    pub sync_flash: bool,
}
