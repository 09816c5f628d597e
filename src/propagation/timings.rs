use std::time::Duration;

/// Delays driving the timed phases of an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowTimings {
    /// A primary edit stays active this long.
    pub primary_clear: Duration,
    /// A reverse-sync edit turns into its forward echo after this long.
    pub reverse_echo: Duration,
    /// The forward echo clears this long after it starts.
    pub echo_clear: Duration,
    /// The source panel pulse lasts this long after a reverse-sync edit.
    pub sync_flash: Duration,
}

impl Default for FlowTimings {
    fn default() -> Self {
        Self {
            primary_clear: Duration::from_millis(900),
            reverse_echo: Duration::from_millis(700),
            echo_clear: Duration::from_millis(600),
            sync_flash: Duration::from_millis(1_200),
        }
    }
}
