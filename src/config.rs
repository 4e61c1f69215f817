//! Scanner configuration.

/// Knobs for how the scanner reports recoverable problems. Fatal errors are
/// not configurable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannerOptions {
    /// Warn when `#` is followed by something other than `#`, `@` or `?`.
    pub warn_unknown_hash_sequence: bool,
    /// Skip spaces, tabs and line breaks instead of reporting them as
    /// unexpected characters.
    pub skip_whitespace: bool,
    /// Stop storing warnings after this many. Further ones are only counted.
    pub max_warnings: Option<usize>,
}

impl Default for ScannerOptions {
    fn default() -> Self {
        ScannerOptions {
            warn_unknown_hash_sequence: true,
            skip_whitespace: false,
            max_warnings: None,
        }
    }
}

impl ScannerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unknown_hash_warnings(mut self, enabled: bool) -> Self {
        self.warn_unknown_hash_sequence = enabled;
        self
    }

    pub fn with_whitespace_skipping(mut self, enabled: bool) -> Self {
        self.skip_whitespace = enabled;
        self
    }

    pub fn with_max_warnings(mut self, max: usize) -> Self {
        self.max_warnings = Some(max);
        self
    }
}
