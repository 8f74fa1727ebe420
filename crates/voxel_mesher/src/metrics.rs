//! Frame statistics for the animation loop.
//!
//! Feature-gated and runtime-toggled so a build without `metrics` pays
//! nothing beyond a branch per frame.
//!
//! # Usage
//!
//! ```ignore
//! use voxel_mesher::metrics::{MeshMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! metrics.record_frame(&stats, extract_us);
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::types::ExtractStats;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Fixed-size history of the most recent samples.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    samples: VecDeque<u64>,
    capacity: usize,
}

impl RollingWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Push a sample, evicting the oldest when full.
    pub fn push(&mut self, value: u64) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn last(&self) -> Option<u64> {
        self.samples.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.samples.iter().copied()
    }

    pub fn average(&self) -> f64 {
        if self.samples.is_empty() {
            0.0
        } else {
            self.samples.iter().sum::<u64>() as f64 / self.samples.len() as f64
        }
    }

    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.samples.iter().min()?;
        let max = self.samples.iter().max()?;
        Some((*min, *max))
    }
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self::new(128)
    }
}

/// Per-frame extraction statistics.
#[derive(Debug, Clone, Default)]
pub struct MeshMetrics {
    /// Recent extraction times in microseconds.
    pub extract_timings: RollingWindow,
    /// Faces emitted by recent frames.
    pub face_counts: RollingWindow,
    /// Last extraction time in microseconds.
    pub last_extract_us: u64,
    /// Frames recorded this session.
    pub frames: u64,
    /// Frames that overflowed the vertex buffer.
    pub truncated_frames: u64,
}

impl MeshMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one extracted frame.
    pub fn record_frame(&mut self, stats: &ExtractStats, extract_us: u64) {
        if !is_enabled() {
            return;
        }

        self.extract_timings.push(extract_us);
        self.face_counts.push(stats.faces as u64);
        self.last_extract_us = extract_us;
        self.frames += 1;
        if stats.truncated {
            self.truncated_frames += 1;
        }
    }

    pub fn avg_extract_us(&self) -> f64 {
        self.extract_timings.average()
    }

    /// Clear the rolling windows. Session counters are kept.
    pub fn reset(&mut self) {
        self.extract_timings.clear();
        self.face_counts.clear();
        self.last_extract_us = 0;
    }
}
