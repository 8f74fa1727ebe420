//! RenderSurface - the boundary between extraction and whatever draws it.
//!
//! The core never touches windows, shaders, or GPU buffers. It hands a surface
//! the component stream of one frame and asks whether it should stop.

use crate::types::Component;

/// Draw target for extracted frames.
///
/// Implementations own their window/context and GPU resources and bind the
/// components as normalized signed 16-bit attributes (see
/// [`crate::types::Projection::vertex_layout`]).
///
/// # Example (headless)
///
/// ```ignore
/// struct CountingSurface { frames: usize }
///
/// impl RenderSurface for CountingSurface {
///     fn upload_and_draw(&mut self, _components: &[i16], _vertex_count: usize) {
///         self.frames += 1;
///     }
///     fn should_close(&mut self) -> bool {
///         self.frames >= 10
///     }
/// }
/// ```
pub trait RenderSurface {
  /// Upload `components` as the active vertex data and draw `vertex_count`
  /// vertices as a triangle list.
  fn upload_and_draw(&mut self, components: &[Component], vertex_count: usize);

  /// Polled once per loop iteration. May pump OS events.
  fn should_close(&mut self) -> bool;
}

/// No-op surface that never closes.
pub struct NullSurface;

impl RenderSurface for NullSurface {
  fn upload_and_draw(&mut self, _components: &[Component], _vertex_count: usize) {
    // No-op
  }

  fn should_close(&mut self) -> bool {
    false
  }
}

/// One captured draw call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedFrame {
  pub components: Vec<Component>,
  pub vertex_count: usize,
}

/// Surface that keeps a copy of every frame, for tests and offline dumps.
#[derive(Debug, Default)]
pub struct RecordingSurface {
  frames: Vec<RecordedFrame>,
  frame_limit: Option<usize>,
}

impl RecordingSurface {
  pub fn new() -> Self {
    Self::default()
  }

  /// Report `should_close` once `limit` frames have been drawn.
  pub fn with_frame_limit(limit: usize) -> Self {
    Self {
      frames: Vec::new(),
      frame_limit: Some(limit),
    }
  }

  pub fn frames(&self) -> &[RecordedFrame] {
    &self.frames
  }

  pub fn last_frame(&self) -> Option<&RecordedFrame> {
    self.frames.last()
  }

  pub fn frame_count(&self) -> usize {
    self.frames.len()
  }
}

impl RenderSurface for RecordingSurface {
  fn upload_and_draw(&mut self, components: &[Component], vertex_count: usize) {
    self.frames.push(RecordedFrame {
      components: components.to_vec(),
      vertex_count,
    });
  }

  fn should_close(&mut self) -> bool {
    self
      .frame_limit
      .is_some_and(|limit| self.frames.len() >= limit)
  }
}
