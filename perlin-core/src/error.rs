use thiserror::Error;

/// An error that can occur while configuring a noise generator.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// Alpha divides the amplitude of every octave after the first, so zero is rejected.
    #[error("alpha must be non-zero")]
    ZeroAlpha,
    /// A parameter was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The generator configuration could not be parsed.
    #[error("Failed to parse generator config: {0}")]
    Config(#[from] serde_json5::Error),
}
