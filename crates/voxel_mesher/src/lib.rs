//! voxel_mesher - Fixed-point cuboid meshes from dense occupancy grids
//!
//! This crate turns an Nx×Ny×Nz grid of on/off voxels into a flat triangle
//! list of signed 16-bit normalized vertices, ready to be bound as a
//! `GL_SHORT`/`SNORM16` attribute. It owns no window or GPU state; drawing is
//! delegated to a [`RenderSurface`].
//!
//! # Features
//!
//! - **Orthographic extraction**: every solid cell becomes a true cuboid with
//!   five faces (no back face); a downstream perspective matrix does the rest
//! - **Depth-scaled extraction**: 2D output whose per-layer step shrinks with
//!   depth, drawn without any matrix
//! - **Shared-face culling**: optional removal of side faces between solid
//!   same-depth neighbours
//! - **Animation driver**: lights one cell per period and redraws
//!
//! # Example
//!
//! ```ignore
//! use voxel_mesher::{Mesher, MeshConfig, OccupancyGrid, Projection};
//!
//! let mut grid = OccupancyGrid::with_size(4, 4, 4)?;
//! grid.set(1, 1, 1, 1)?;
//!
//! let config = MeshConfig::new().with_projection(Projection::Orthographic);
//! let mut mesher = Mesher::new(grid.dims(), config);
//! let stats = mesher.extract(&grid);
//!
//! println!("{} faces, {} vertices", stats.faces, mesher.vertex_count());
//! ```

pub mod constants;
pub mod grid;
pub mod types;
pub mod vertex_buffer;

// Re-export commonly used items
pub use constants::{axis_step, saturate_i16, DEFAULT_PERIOD_MS, QUAD_CORNER_ORDER};
pub use grid::{GridDims, GridError, OccupancyGrid};
pub use types::{
  snorm16_to_f32, Component, ExtractStats, Face, MeshConfig, Occupancy, Projection, VertexLayout,
};
pub use vertex_buffer::{BufferFull, VertexBuffer};

// Extraction strategies
pub mod mesher;
pub use mesher::{extract_into, required_capacity, visible_faces, Mesher};

// Draw target abstraction
pub mod surface;
pub use surface::{NullSurface, RecordedFrame, RecordingSurface, RenderSurface};

// Fixed-period cursor animation
pub mod driver;
pub use driver::{AnimationDriver, CursorPolicy, RunSummary, TickOutcome};

// Window and camera parameters
pub mod view;
pub use view::ScreenConfig;

// Optional frame statistics
pub mod metrics;
