use crate::propagation::{EditOrigin, FlowPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Token source, `tokens.json`.
    Brain,
    /// Canvas surface.
    Sketchpad,
    /// Simulated build and deploy.
    Ship,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowTone {
    /// Painted with the current primary color.
    Accent,
    /// Painted with the sync color.
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowIndicator {
    pub direction: FlowDirection,
    pub tone: FlowTone,
}

impl FlowIndicator {
    const fn new(direction: FlowDirection, tone: FlowTone) -> Self {
        Self { direction, tone }
    }
}

/// Flow bar shown on `panel` during `phase`; `None` means the bar is still.
pub fn flow_indicator(panel: Panel, phase: FlowPhase) -> Option<FlowIndicator> {
    let tone = match phase.origin()? {
        EditOrigin::Primary => FlowTone::Accent,
        EditOrigin::ReverseSync => FlowTone::Sync,
    };
    let direction = match (panel, phase) {
        (_, FlowPhase::Forward) => FlowDirection::Right,
        (Panel::Brain | Panel::Sketchpad, FlowPhase::Reverse) => FlowDirection::Left,
        (Panel::Sketchpad | Panel::Ship, FlowPhase::ForwardFromSync) => FlowDirection::Right,
        (Panel::Ship, FlowPhase::Reverse)
        | (Panel::Brain, FlowPhase::ForwardFromSync)
        | (_, FlowPhase::Idle) => return None,
    };
    Some(FlowIndicator::new(direction, tone))
}
