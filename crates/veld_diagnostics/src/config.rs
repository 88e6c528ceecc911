//! Per-run reporting configuration.

/// Reporting configuration for one compilation run, fixed at engine
/// construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunConfig {
    /// Suppress warnings entirely: no output and no counting.
    pub quiet: bool,
    /// Emit one machine-readable JSON record per diagnostic instead of the
    /// human-readable terminal block.
    pub json_output: bool,
    /// Use ANSI color codes in terminal output. Ignored in JSON mode.
    pub color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain_terminal() {
        let config = RunConfig::default();
        assert!(!config.quiet);
        assert!(!config.json_output);
        assert!(!config.color);
    }
}
