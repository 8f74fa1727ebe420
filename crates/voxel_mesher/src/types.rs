//! Core data types for cuboid meshing.

use crate::constants::{MAX_FACES_PER_VOXEL, VERTICES_PER_FACE};

/// Per-cell occupancy flag. Zero = empty, anything else = solid.
pub type Occupancy = u8;

/// One stored vertex component (normalized fixed point).
pub type Component = i16;

/// How grid cells are mapped to fixed-point vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
  /// Exact axis-aligned cuboids in 3-D fixed point. Perspective is applied
  /// downstream (see [`crate::view::ScreenConfig::projection_matrix`]).
  #[default]
  Orthographic,

  /// 2-D fixed point with a per-depth step that shrinks cells towards the
  /// centre of the screen, approximating perspective without a matrix.
  DepthScaled,
}

impl Projection {
  /// Components written per vertex.
  #[inline]
  pub const fn components_per_vertex(self) -> usize {
    match self {
      Projection::Orthographic => 3,
      Projection::DepthScaled => 2,
    }
  }

  /// Components written per face (6 vertices).
  #[inline]
  pub const fn components_per_face(self) -> usize {
    VERTICES_PER_FACE * self.components_per_vertex()
  }

  /// Worst-case components emitted by one solid voxel.
  #[inline]
  pub const fn max_components_per_voxel(self) -> usize {
    MAX_FACES_PER_VOXEL * self.components_per_face()
  }

  /// Attribute layout the render surface should bind.
  pub const fn vertex_layout(self) -> VertexLayout {
    VertexLayout {
      components: self.components_per_vertex(),
      normalized: true,
    }
  }
}

/// Vertex attribute description handed to the render surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VertexLayout {
  /// Signed 16-bit components per vertex (2 or 3).
  pub components: usize,
  /// Components are read as normalized fixed point in `[-1, 1]`.
  pub normalized: bool,
}

impl VertexLayout {
  /// Byte stride of one vertex.
  pub const fn stride_bytes(&self) -> usize {
    self.components * std::mem::size_of::<Component>()
  }
}

/// Decode a stored component the way a normalized signed 16-bit attribute is
/// read by the GPU.
#[inline]
pub fn snorm16_to_f32(value: Component) -> f32 {
  (value as f32 / i16::MAX as f32).max(-1.0)
}

/// One side of a voxel's cuboid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
  /// `x` plane.
  Left,
  /// Near `z` plane (facing the viewer).
  Front,
  /// `x + 1` plane.
  Right,
  /// `y + 1` plane.
  Top,
  /// `y` plane.
  Bottom,
}

impl Face {
  /// Same-depth neighbour that would share this face, as a cell offset.
  ///
  /// `Front` has no same-depth neighbour.
  pub const fn neighbor_offset(self) -> Option<[i32; 3]> {
    match self {
      Face::Left => Some([-1, 0, 0]),
      Face::Right => Some([1, 0, 0]),
      Face::Top => Some([0, 1, 0]),
      Face::Bottom => Some([0, -1, 0]),
      Face::Front => None,
    }
  }
}

/// Configuration for mesh extraction.
#[derive(Clone, Debug, Default)]
pub struct MeshConfig {
  /// Vertex projection strategy.
  pub projection: Projection,

  /// Skip lateral faces shared with a solid same-depth neighbour.
  pub cull_shared_faces: bool,

  /// Most solid voxels the vertex buffer must hold. `None` sizes for every
  /// cell of the grid, which makes overflow impossible.
  pub solid_budget: Option<usize>,
}

impl MeshConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_projection(mut self, projection: Projection) -> Self {
    self.projection = projection;
    self
  }

  pub fn with_shared_face_culling(mut self, cull: bool) -> Self {
    self.cull_shared_faces = cull;
    self
  }

  pub fn with_solid_budget(mut self, budget: usize) -> Self {
    self.solid_budget = Some(budget);
    self
  }
}

/// Summary of one extraction pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExtractStats {
  /// Solid cells visited.
  pub solid_voxels: usize,
  /// Faces written to the buffer.
  pub faces: usize,
  /// Vertices written to the buffer.
  pub vertices: usize,
  /// Components written to the buffer.
  pub components: usize,
  /// True when the buffer filled up and faces were dropped.
  pub truncated: bool,
}

impl ExtractStats {
  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices == 0
  }

  /// Number of triangles in the frame.
  pub fn triangle_count(&self) -> usize {
    self.vertices / 3
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
