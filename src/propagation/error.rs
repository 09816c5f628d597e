use super::event::FlowTrigger;
use super::model::FlowPhase;
use thiserror::Error;

pub type PropagationResult<T> = std::result::Result<T, PropagationError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropagationError {
    #[error("invalid flow transition: from {from:?} using trigger {trigger:?}")]
    InvalidTransition { from: FlowPhase, trigger: FlowTrigger },
}
