//! Serializable generator configuration.

use serde::{Deserialize, Serialize};

use crate::{Generator, NoiseError, NoiseParams, RandomSource};

/// Everything needed to build a [`Generator`].
///
/// Parsed from JSON5, with the octave parameters inlined and every field optional:
///
/// ```json5
/// {
///     seed: 41,
///     source: "xoroshiro",
///     alpha: 2.0,
///     beta: 2.0,
///     octaves: 6,
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the table builder.
    pub seed: i64,
    /// Pseudo-random source for the table builder.
    pub source: RandomSource,
    /// Octave parameters.
    #[serde(flatten)]
    pub params: NoiseParams,
}

impl GeneratorConfig {
    /// Parse a configuration from JSON5 text.
    pub fn from_json5(text: &str) -> Result<Self, NoiseError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Validate the parameters and build the generator.
    pub fn build(&self) -> Result<Generator, NoiseError> {
        Generator::with_source(self.params, self.source, self.seed)
    }
}
