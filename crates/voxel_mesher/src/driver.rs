//! AnimationDriver - lights one voxel at a time on a fixed period.
//!
//! ```text
//! tick n:   clear cell (n-1) ─► set cell n ─► extract ─► upload_and_draw
//!                                                          │
//!           cursor = n + 1  ◄──────────────────────────────┘
//! ```
//!
//! Between ticks the grid holds exactly the cell shown on screen. When the
//! cursor runs off the end of the grid it either wraps to 0 or halts, per
//! [`CursorPolicy`].

use std::time::Duration;

use web_time::Instant;

use crate::constants::DEFAULT_PERIOD_MS;
use crate::grid::{GridError, OccupancyGrid};
use crate::mesher::Mesher;
use crate::metrics::MeshMetrics;
use crate::surface::RenderSurface;
use crate::types::ExtractStats;

/// What happens when the cursor passes the last cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorPolicy {
  /// Restart from cell 0.
  #[default]
  Wrap,
  /// Stop animating; further ticks report [`TickOutcome::Finished`].
  Halt,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
  /// Cell `index` was lit and a frame was drawn.
  Drawn { index: usize, stats: ExtractStats },
  /// The cursor is exhausted under [`CursorPolicy::Halt`].
  Finished,
}

/// Totals of a [`AnimationDriver::run`] session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
  pub ticks: u64,
  pub truncated_frames: u64,
  /// True if the loop ended because the cursor halted rather than the surface
  /// closing.
  pub halted: bool,
}

/// Fixed-period cursor animation over an [`OccupancyGrid`].
#[derive(Debug)]
pub struct AnimationDriver {
  cursor: usize,
  lit: Option<usize>,
  period: Duration,
  policy: CursorPolicy,
  metrics: MeshMetrics,
}

impl Default for AnimationDriver {
  fn default() -> Self {
    Self::new(Duration::from_millis(DEFAULT_PERIOD_MS))
  }
}

impl AnimationDriver {
  pub fn new(period: Duration) -> Self {
    Self {
      cursor: 0,
      lit: None,
      period,
      policy: CursorPolicy::default(),
      metrics: MeshMetrics::new(),
    }
  }

  pub fn with_policy(mut self, policy: CursorPolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Start the cursor at `index` instead of 0.
  pub fn with_cursor(mut self, index: usize) -> Self {
    self.cursor = index;
    self
  }

  /// Next cell to light.
  #[inline]
  pub fn cursor(&self) -> usize {
    self.cursor
  }

  /// Cell lit by the last tick, if any.
  #[inline]
  pub fn lit(&self) -> Option<usize> {
    self.lit
  }

  #[inline]
  pub fn period(&self) -> Duration {
    self.period
  }

  #[inline]
  pub fn policy(&self) -> CursorPolicy {
    self.policy
  }

  pub fn metrics(&self) -> &MeshMetrics {
    &self.metrics
  }

  /// Advance the animation by one step and draw the frame.
  pub fn tick<S: RenderSurface>(
    &mut self,
    grid: &mut OccupancyGrid,
    mesher: &mut Mesher,
    surface: &mut S,
  ) -> Result<TickOutcome, GridError> {
    self.finish(grid)?;

    if self.cursor >= grid.len() {
      match self.policy {
        CursorPolicy::Wrap => self.cursor = 0,
        CursorPolicy::Halt => return Ok(TickOutcome::Finished),
      }
    }

    let index = self.cursor;
    grid.set_index(index, 1)?;
    self.lit = Some(index);
    self.cursor += 1;

    let start = Instant::now();
    let stats = mesher.extract(grid);
    let extract_us = start.elapsed().as_micros() as u64;
    self.metrics.record_frame(&stats, extract_us);

    surface.upload_and_draw(mesher.data(), mesher.vertex_count());
    tracing::debug!(
      "tick: cell {} lit, {} faces, {} vertices",
      index,
      stats.faces,
      stats.vertices
    );

    Ok(TickOutcome::Drawn { index, stats })
  }

  /// Clear the cell lit by the last tick.
  pub fn finish(&mut self, grid: &mut OccupancyGrid) -> Result<(), GridError> {
    if let Some(index) = self.lit.take() {
      grid.set_index(index, 0)?;
    }
    Ok(())
  }

  /// Tick every `period` until the surface asks to close or the cursor halts.
  ///
  /// The first tick happens immediately. Each following tick is due one
  /// `period` after the previous one started, so a stalled surface delays the
  /// animation instead of causing a burst of catch-up ticks. The lit cell is
  /// cleared before returning.
  #[cfg_attr(feature = "spans", tracing::instrument(skip_all, name = "driver::run"))]
  pub fn run<S: RenderSurface>(
    &mut self,
    grid: &mut OccupancyGrid,
    mesher: &mut Mesher,
    surface: &mut S,
  ) -> Result<RunSummary, GridError> {
    tracing::info!(
      "animation started: {} cells, period {:?}, {:?}",
      grid.len(),
      self.period,
      self.policy
    );

    let mut summary = RunSummary::default();
    let mut next_tick = Instant::now();

    while !surface.should_close() {
      let now = Instant::now();
      if now < next_tick {
        std::thread::sleep(next_tick - now);
        continue;
      }
      next_tick = now + self.period;

      match self.tick(grid, mesher, surface)? {
        TickOutcome::Drawn { stats, .. } => {
          summary.ticks += 1;
          if stats.truncated {
            summary.truncated_frames += 1;
          }
        }
        TickOutcome::Finished => {
          summary.halted = true;
          break;
        }
      }
    }

    self.finish(grid)?;
    tracing::info!(
      "animation stopped after {} ticks ({} truncated)",
      summary.ticks,
      summary.truncated_frames
    );
    Ok(summary)
  }
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod driver_test;
