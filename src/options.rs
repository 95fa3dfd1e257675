use serde::{Deserialize, Serialize};

use crate::error::{Result, SplineError};

fn default_step() -> f64 {
    0.01
}

/// Resampling parameters. Missing fields take their defaults when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    /// Horizontal distance between consecutive samples.
    pub step: f64,
}

impl SamplingOptions {
    pub fn new(step: f64) -> Self {
        SamplingOptions { step }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step > 0.0 && self.step.is_finite() {
            Ok(())
        } else {
            Err(SplineError::InvalidStep { step: self.step })
        }
    }
}

impl Default for SamplingOptions {
    fn default() -> Self {
        SamplingOptions { step: default_step() }
    }
}
