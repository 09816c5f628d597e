pub mod controller;
pub mod error;
pub mod event;
pub mod machine;
pub mod model;
pub mod timings;

pub use controller::PropagationController;
pub use error::{PropagationError, PropagationResult};
pub use event::{FlowBoundary, FlowNotification, FlowTransition, FlowTrigger, PropagationEvent};
pub use machine::FlowMachine;
pub use model::{EditOrigin, FlowPhase};
pub use timings::FlowTimings;
