//! Serializable summary of one processed image.

use serde::{Deserialize, Serialize};

/// Timing entry for a single stage of the two-pass blur.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Dimensions, inferred channel count and per-stage timings of one call.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReport {
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl ProcessReport {
    pub fn new(width: usize, height: usize, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
            total_ms: 0.0,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming {
            label: label.into(),
            elapsed_ms,
        });
    }
}
