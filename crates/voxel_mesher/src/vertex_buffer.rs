//! Fixed-capacity vertex component buffer.
//!
//! Storage is allocated once and never grows. Appends are all-or-nothing: a
//! write that would cross the capacity is dropped, logged, and reported as
//! [`BufferFull`], leaving the existing content untouched.

use thiserror::Error;

use crate::types::{Component, Projection};

/// Append rejected because the buffer has no room for it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("cannot append {requested} components: {remaining} of {capacity} remaining")]
pub struct BufferFull {
  pub requested: usize,
  pub remaining: usize,
  pub capacity: usize,
}

/// Flat, fixed-capacity buffer of vertex components.
#[derive(Clone, Debug)]
pub struct VertexBuffer {
  data: Box<[Component]>,
  len: usize,
}

impl VertexBuffer {
  /// Allocate room for exactly `capacity` components.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      data: vec![0; capacity].into_boxed_slice(),
      len: 0,
    }
  }

  /// Allocate room for the worst case of `solid_voxels` voxels under
  /// `projection` (every voxel emitting all of its faces).
  pub fn for_solid_budget(projection: Projection, solid_voxels: usize) -> Self {
    Self::with_capacity(solid_voxels.saturating_mul(projection.max_components_per_voxel()))
  }

  /// Forget all written components. Does not touch the storage.
  #[inline]
  pub fn reset(&mut self) {
    self.len = 0;
  }

  /// Append `components` at the write position.
  ///
  /// Appending exactly the remaining capacity succeeds; anything larger is a
  /// no-op.
  pub fn append(&mut self, components: &[Component]) -> Result<(), BufferFull> {
    let end = self.len + components.len();
    if end > self.data.len() {
      let err = BufferFull {
        requested: components.len(),
        remaining: self.remaining(),
        capacity: self.data.len(),
      };
      tracing::warn!("vertex buffer full: {}", err);
      return Err(err);
    }

    self.data[self.len..end].copy_from_slice(components);
    self.len = end;
    Ok(())
  }

  /// Append one vertex.
  #[inline]
  pub fn push_vertex<const N: usize>(&mut self, vertex: [Component; N]) -> Result<(), BufferFull> {
    self.append(&vertex)
  }

  /// Valid components, in write order.
  #[inline]
  pub fn data(&self) -> &[Component] {
    &self.data[..self.len]
  }

  /// Number of valid components.
  #[inline]
  pub fn len(&self) -> usize {
    self.len
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Total components the buffer can hold.
  #[inline]
  pub fn capacity(&self) -> usize {
    self.data.len()
  }

  #[inline]
  pub fn remaining(&self) -> usize {
    self.data.len() - self.len
  }

  /// Whole vertices written, given the vertex width.
  #[inline]
  pub fn vertex_count(&self, components_per_vertex: usize) -> usize {
    self.len / components_per_vertex
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_buffer_is_empty() {
    let buffer = VertexBuffer::with_capacity(12);
    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 12);
    assert_eq!(buffer.remaining(), 12);
    assert!(buffer.data().is_empty());
  }

  #[test]
  fn append_advances_write_position() {
    let mut buffer = VertexBuffer::with_capacity(8);
    buffer.append(&[1, 2]).unwrap();
    buffer.append(&[3, 4, 5]).unwrap();

    assert_eq!(buffer.data(), &[1, 2, 3, 4, 5]);
    assert_eq!(buffer.len(), 5);
    assert_eq!(buffer.vertex_count(2), 2);
  }

  #[test]
  fn append_exactly_remaining_capacity_succeeds() {
    let mut buffer = VertexBuffer::with_capacity(6);
    buffer.append(&[1, 2]).unwrap();
    buffer.append(&[3, 4, 5, 6]).unwrap();

    assert_eq!(buffer.remaining(), 0);
    assert_eq!(buffer.data(), &[1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn append_past_capacity_is_a_noop() {
    let mut buffer = VertexBuffer::with_capacity(6);
    buffer.append(&[1, 2, 3, 4]).unwrap();

    let err = buffer.append(&[5, 6, 7]).unwrap_err();
    assert_eq!(
      err,
      BufferFull {
        requested: 3,
        remaining: 2,
        capacity: 6
      }
    );
    assert_eq!(buffer.len(), 4);
    assert_eq!(buffer.data(), &[1, 2, 3, 4]);

    // A smaller write still fits afterwards.
    buffer.append(&[5, 6]).unwrap();
    assert_eq!(buffer.data(), &[1, 2, 3, 4, 5, 6]);
  }

  #[test]
  fn zero_capacity_rejects_everything_but_empty_appends() {
    let mut buffer = VertexBuffer::with_capacity(0);
    assert!(buffer.append(&[]).is_ok());
    assert!(buffer.append(&[1]).is_err());
    assert!(buffer.is_empty());
  }

  #[test]
  fn push_vertex_is_all_or_nothing() {
    let mut buffer = VertexBuffer::with_capacity(5);
    buffer.push_vertex([1, 2, 3]).unwrap();
    assert!(buffer.push_vertex([4, 5, 6]).is_err());
    buffer.push_vertex([4, 5]).unwrap();

    assert_eq!(buffer.data(), &[1, 2, 3, 4, 5]);
  }

  #[test]
  fn reset_keeps_capacity() {
    let mut buffer = VertexBuffer::with_capacity(4);
    buffer.append(&[9, 9, 9, 9]).unwrap();
    buffer.reset();

    assert!(buffer.is_empty());
    assert_eq!(buffer.capacity(), 4);
    buffer.append(&[1, 2, 3, 4]).unwrap();
    assert_eq!(buffer.data(), &[1, 2, 3, 4]);
  }

  #[test]
  fn solid_budget_sizing() {
    let ortho = VertexBuffer::for_solid_budget(Projection::Orthographic, 2);
    assert_eq!(ortho.capacity(), 180);

    let scaled = VertexBuffer::for_solid_budget(Projection::DepthScaled, 3);
    assert_eq!(scaled.capacity(), 180);
  }
}
