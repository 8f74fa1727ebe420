//! Cuboid mesh extraction.
//!
//! Converts an [`OccupancyGrid`] into a flat, fully expanded triangle list of
//! fixed-point vertices. Every solid cell contributes up to five quads (LEFT,
//! FRONT, RIGHT, TOP, BOTTOM); each quad is written as six vertices in the
//! order `v1, v2, v3, v3, v4, v1`.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  grid: OccupancyGrid     - Nx×Ny×Nz flags, X innermost          │
//! │  config: MeshConfig      - projection, culling, buffer budget   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Cell Walk                           │
//! │  Reset the vertex buffer (O(1), storage kept)                   │
//! │  Visit solid cells in flat index order                          │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Face Selection                      │
//! │  Orthographic:  all five faces                                  │
//! │  DepthScaled:   FRONT + half-range gated sides                  │
//! │  Optional: drop sides shared with a solid same-depth neighbour  │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Emission                            │
//! │  Resolve 4 corners → fixed point                                │
//! │  Append 6 vertices as one all-or-nothing write                  │
//! │  First rejected write stops the pass (frame is truncated)       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  buffer: VertexBuffer    - i16 components, 2 or 3 per vertex    │
//! │  stats: ExtractStats     - faces, vertices, truncation          │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Choosing a Projection
//!
//! `Orthographic` is exact: cells become true cuboids and the render surface
//! applies a perspective matrix. `DepthScaled` skips the matrix and shrinks
//! each layer's step with depth instead; its side-face gating is a visibility
//! heuristic, not real occlusion, and leaves seams around the grid's centre
//! lines.

mod depth_scaled;
mod orthographic;

use smallvec::SmallVec;

use crate::constants::MAX_FACES_PER_VOXEL;
use crate::grid::{GridDims, OccupancyGrid};
use crate::types::*;
use crate::vertex_buffer::VertexBuffer;

pub use depth_scaled::{DepthScaledLayout, LayerSteps};
pub use orthographic::OrthographicLayout;

/// Faces chosen for one cell.
pub type FaceList = SmallVec<[Face; MAX_FACES_PER_VOXEL]>;

/// Components of one face (6 vertices × up to 3 components).
pub type FaceComponents = SmallVec<[Component; 18]>;

/// A vertex layout strategy.
///
/// Implementations decide which faces a cell may show and where the face
/// corners land in fixed point.
pub trait FaceLayout {
  /// Faces this layout considers for the cell, before neighbour culling.
  fn candidate_faces(&self, coord: [usize; 3]) -> FaceList;

  /// Append the six vertices of `face` to `out`.
  fn write_face(&self, coord: [usize; 3], face: Face, out: &mut FaceComponents);
}

/// Extractor owning its output buffer.
///
/// The buffer is sized once from the grid dimensions and the configured solid
/// budget and reused for every frame.
pub struct Mesher {
  config: MeshConfig,
  dims: GridDims,
  buffer: VertexBuffer,
}

impl Mesher {
  /// Create an extractor for grids of `dims`.
  pub fn new(dims: GridDims, config: MeshConfig) -> Self {
    let buffer = VertexBuffer::with_capacity(required_capacity(dims, &config));
    Self {
      config,
      dims,
      buffer,
    }
  }

  /// Rebuild the mesh for `grid`, replacing the previous frame.
  ///
  /// `grid` must have the dimensions the mesher was built for; a mismatched
  /// grid is meshed anyway but the capacity guarantee no longer holds.
  pub fn extract(&mut self, grid: &OccupancyGrid) -> ExtractStats {
    if grid.dims() != self.dims {
      tracing::warn!(
        "meshing a {:?} grid with a mesher sized for {:?}",
        grid.dims(),
        self.dims
      );
    }
    extract_into(grid, &self.config, &mut self.buffer)
  }

  /// Components of the last frame.
  #[inline]
  pub fn data(&self) -> &[Component] {
    self.buffer.data()
  }

  /// Vertices of the last frame.
  #[inline]
  pub fn vertex_count(&self) -> usize {
    self
      .buffer
      .vertex_count(self.config.projection.components_per_vertex())
  }

  #[inline]
  pub fn buffer(&self) -> &VertexBuffer {
    &self.buffer
  }

  #[inline]
  pub fn config(&self) -> &MeshConfig {
    &self.config
  }

  #[inline]
  pub fn dims(&self) -> GridDims {
    self.dims
  }
}

/// Buffer components needed for `config` on a grid of `dims`.
pub fn required_capacity(dims: GridDims, config: &MeshConfig) -> usize {
  let solid = config
    .solid_budget
    .unwrap_or_else(|| dims.cell_count())
    .min(dims.cell_count());
  solid.saturating_mul(config.projection.max_components_per_voxel())
}

/// Reset `buffer` and fill it with the mesh of `grid`.
#[cfg_attr(feature = "spans", tracing::instrument(skip_all, name = "mesher::extract"))]
pub fn extract_into(
  grid: &OccupancyGrid,
  config: &MeshConfig,
  buffer: &mut VertexBuffer,
) -> ExtractStats {
  match config.projection {
    Projection::Orthographic => {
      emit(grid, config, buffer, &OrthographicLayout::new(grid.dims()))
    }
    Projection::DepthScaled => emit(grid, config, buffer, &DepthScaledLayout::new(grid.dims())),
  }
}

/// Faces `config` would emit for the cell at `coord`.
///
/// Returns an empty list for empty or out-of-range cells.
pub fn visible_faces(grid: &OccupancyGrid, coord: [usize; 3], config: &MeshConfig) -> FaceList {
  if !grid.is_solid(coord) {
    return FaceList::new();
  }
  match config.projection {
    Projection::Orthographic => {
      select_faces(grid, coord, config, &OrthographicLayout::new(grid.dims()))
    }
    Projection::DepthScaled => {
      select_faces(grid, coord, config, &DepthScaledLayout::new(grid.dims()))
    }
  }
}

fn select_faces<L: FaceLayout>(
  grid: &OccupancyGrid,
  coord: [usize; 3],
  config: &MeshConfig,
  layout: &L,
) -> FaceList {
  let mut faces = layout.candidate_faces(coord);
  if config.cull_shared_faces {
    let dims = grid.dims();
    faces.retain(|face| {
      !face
        .neighbor_offset()
        .and_then(|delta| dims.offset(coord, delta))
        .is_some_and(|neighbor| grid.is_solid(neighbor))
    });
  }
  faces
}

fn emit<L: FaceLayout>(
  grid: &OccupancyGrid,
  config: &MeshConfig,
  buffer: &mut VertexBuffer,
  layout: &L,
) -> ExtractStats {
  buffer.reset();

  let mut stats = ExtractStats::default();
  let mut scratch = FaceComponents::new();

  'cells: for (_, coord) in grid.solid_cells() {
    stats.solid_voxels += 1;

    for face in select_faces(grid, coord, config, layout) {
      scratch.clear();
      layout.write_face(coord, face, &mut scratch);

      if buffer.append(&scratch).is_err() {
        stats.truncated = true;
        tracing::warn!(
          "mesh truncated at cell {:?}: {} faces written, remaining voxels dropped",
          coord,
          stats.faces
        );
        break 'cells;
      }
      stats.faces += 1;
    }
  }

  stats.components = buffer.len();
  stats.vertices = buffer.vertex_count(config.projection.components_per_vertex());
  stats
}
