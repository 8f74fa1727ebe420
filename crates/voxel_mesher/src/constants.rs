//! Fixed-point and face layout constants.
//!
//! Vertex coordinates are stored as `i16` and read back by the render surface
//! as normalized attributes, so the full `i16` range spans the visible extent
//! of the grid along each axis.
//!
//! # Fixed-Point Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      FIXED-POINT AXIS MAPPING                           │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  Corner index:  0        1        2       ...      N                    │
//! │                 │        │        │                │                    │
//! │  Coordinate:  -32768  -32768+s -32768+2s  ...  -32768+N*s               │
//! │                                                                         │
//! │  s = floor(65535 / N)   (the axis "step")                               │
//! │                                                                         │
//! │  -32768+N*s <= 32767 for every N >= 1, so no corner ever overflows.     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Memory Layout
//!
//! ```text
//! Grid memory layout (X innermost):
//!
//! Address:  0      1     ...  Nx-1      Nx     ...  Nx*Ny   ...
//! Content: [0,0,0][1,0,0]...[Nx-1,0,0][0,1,0]...[0,0,1]...
//!          └──────────── X ──────────┘
//!
//! index = x + y * Nx + z * Nx * Ny
//! ```
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │   +Z (into the screen, away from the viewer)
//!          │  /
//!          │ /
//!          └───────── +X
//! ```

/// Smallest fixed-point coordinate.
pub const I16_MIN: i32 = i16::MIN as i32;

/// Centre of the fixed-point range.
pub const I16_MID: i32 = 0;

/// Largest fixed-point coordinate.
pub const I16_MAX: i32 = i16::MAX as i32;

/// Largest representable span (`I16_MAX - I16_MIN`), divided by the axis count
/// to get the step.
pub const I16_SPAN: i32 = I16_MAX - I16_MIN;

/// Faces a single voxel can emit (LEFT, FRONT, RIGHT, TOP, BOTTOM).
pub const MAX_FACES_PER_VOXEL: usize = 5;

/// Two triangles per face, fully expanded (no index buffer).
pub const VERTICES_PER_FACE: usize = 6;

/// Reference grid width.
pub const DEFAULT_GRID_X: usize = 128;

/// Reference grid height.
pub const DEFAULT_GRID_Y: usize = 64;

/// Reference grid depth.
pub const DEFAULT_GRID_Z: usize = 64;

/// Reference animation period in milliseconds.
pub const DEFAULT_PERIOD_MS: u64 = 1000;

/// Emission order of a quad's four corners: `v1, v2, v3, v3, v4, v1`.
pub const QUAD_CORNER_ORDER: [usize; VERTICES_PER_FACE] = [0, 1, 2, 2, 3, 0];

/// Fixed-point step for an axis with `count` cells.
///
/// `floor(65535 / count)`; zero-length axes are rejected before this is ever
/// reached, so `count` is always at least 1.
#[inline(always)]
pub const fn axis_step(count: usize) -> i32 {
  I16_SPAN / count as i32
}

/// Saturating conversion from intermediate `i32` arithmetic to a stored
/// component.
#[inline(always)]
pub const fn saturate_i16(value: i32) -> i16 {
  if value > I16_MAX {
    i16::MAX
  } else if value < I16_MIN {
    i16::MIN
  } else {
    value as i16
  }
}

/// [`saturate_i16`] for `i64` intermediates.
#[inline(always)]
pub const fn saturate_i16_wide(value: i64) -> i16 {
  if value > I16_MAX as i64 {
    i16::MAX
  } else if value < I16_MIN as i64 {
    i16::MIN
  } else {
    value as i16
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
