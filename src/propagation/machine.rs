use super::error::{PropagationError, PropagationResult};
use super::event::{FlowTransition, FlowTrigger};
use super::model::{EditOrigin, FlowPhase};

#[derive(Debug)]
pub struct FlowMachine {
    phase: FlowPhase,
    transition_history: Vec<FlowTransition>,
}

impl FlowMachine {
    pub fn new() -> Self {
        Self {
            phase: FlowPhase::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn phase(&self) -> FlowPhase {
        self.phase
    }

    pub fn can_transition(&self, trigger: FlowTrigger) -> bool {
        self.next_phase(trigger).is_some()
    }

    pub fn next_phase(&self, trigger: FlowTrigger) -> Option<FlowPhase> {
        use FlowTrigger::*;
        match (self.phase, trigger) {
            (_, Edit(EditOrigin::Primary)) => Some(FlowPhase::Forward),
            (_, Edit(EditOrigin::ReverseSync)) => Some(FlowPhase::Reverse),
            (FlowPhase::Forward, Timeout) => Some(FlowPhase::Idle),
            (FlowPhase::Reverse, Timeout) => Some(FlowPhase::ForwardFromSync),
            (FlowPhase::ForwardFromSync, Timeout) => Some(FlowPhase::Idle),
            (FlowPhase::Idle, Timeout) => None,
        }
    }

    /// Edits are accepted from every phase and supersede whatever was running.
    pub fn edit(&mut self, origin: EditOrigin) -> FlowPhase {
        let next = match origin {
            EditOrigin::Primary => FlowPhase::Forward,
            EditOrigin::ReverseSync => FlowPhase::Reverse,
        };
        self.record(FlowTrigger::Edit(origin), next)
    }

    pub fn transition(&mut self, trigger: FlowTrigger) -> PropagationResult<FlowPhase> {
        tracing::debug!(from = ?self.phase, trigger = ?trigger, "request flow transition");
        let next = self.next_phase(trigger).ok_or_else(|| {
            let from = self.phase;
            tracing::warn!(from = ?from, trigger = ?trigger, "invalid flow transition requested");
            PropagationError::InvalidTransition { from, trigger }
        })?;

        Ok(self.record(trigger, next))
    }

    pub fn history(&self) -> &[FlowTransition] {
        &self.transition_history
    }

    fn record(&mut self, trigger: FlowTrigger, next: FlowPhase) -> FlowPhase {
        let record = FlowTransition::new(self.phase, trigger, next);
        self.phase = next;
        self.transition_history.push(record);
        self.phase
    }
}

impl Default for FlowMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FlowMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FlowPhase::{:?}", self.phase)
    }
}
