/// Runtime settings for a session.
///
/// Built by the binary from command-line flags; tests construct it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrmConfig {
    /// Load the demo customers before the first prompt
    pub seed: bool,

    /// Colorize confirmation and error messages
    pub color: bool,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            seed: true,
            color: true,
        }
    }
}

impl CrmConfig {
    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
