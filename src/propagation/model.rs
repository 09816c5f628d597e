use serde::{Deserialize, Serialize};

/// Where an edit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditOrigin {
    /// Direct edit on the token panel.
    Primary,
    /// Edit made on the derived canvas, written back into the store.
    ReverseSync,
}

/// Display phase of the most recent edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowPhase {
    #[default]
    Idle,
    /// Primary edit flowing from the store to every consumer.
    Forward,
    /// Canvas edit syncing back into the store.
    Reverse,
    /// Canvas edit rippling onward again after it landed in the store.
    ForwardFromSync,
}

impl FlowPhase {
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Origin implied by the phase; `None` while idle.
    pub const fn origin(self) -> Option<EditOrigin> {
        match self {
            Self::Idle => None,
            Self::Forward => Some(EditOrigin::Primary),
            Self::Reverse | Self::ForwardFromSync => Some(EditOrigin::ReverseSync),
        }
    }
}
