pub mod brain;
pub mod flow;
pub mod ship;

pub use brain::{sketchpad_status, token_rows, TokenRow};
pub use flow::{flow_indicator, FlowDirection, FlowIndicator, FlowTone, Panel};
pub use ship::{
    outputs_affected_by, token_diff, DiffLine, GeneratedOutput, BUILD_LOG, GENERATED_OUTPUTS,
};
