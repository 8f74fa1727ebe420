//! Depth-scaled 2-D layout (faux 3-D).
//!
//! Instead of projecting through a matrix, every depth layer `Z` gets its own
//! step that shrinks as `Z` grows, pulling deeper cells towards the screen
//! centre:
//!
//! ```text
//! step(Z)        = base * N / (2Z + N)
//! step_behind(Z) = base * N / (2(Z+1) + N)
//! coordinate     = 0 + step * (cell + corner - N/2)
//! ```
//!
//! `base = floor(65535 / N)` per axis, and `N/2` is integer division.
//!
//! # Face Gating
//!
//! Side faces connect the cell's near outline (`step`) to the outline one
//! layer deeper (`step_behind`). Only sides facing the screen centre are
//! candidates:
//!
//! ```text
//!   X ≤ Nx/2-2 │ Nx/2-1 ≤ X ≤ Nx/2 │ X ≥ Nx/2+1
//!   RIGHT      │  (no x side)       │  LEFT
//!
//!   Y ≤ Ny/2-2 → TOP       Y ≥ Ny/2+1 → BOTTOM
//! ```
//!
//! This is a cheap visibility heuristic, not occlusion: the two centre columns
//! and rows never show sides, and it does not look at neighbours.

use super::{FaceComponents, FaceLayout, FaceList};
use crate::constants::{axis_step, saturate_i16_wide, I16_MID, QUAD_CORNER_ORDER};
use crate::grid::GridDims;
use crate::types::Face;

/// Which depth outline a corner sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Depth {
  Near,
  Behind,
}

/// Corners of each face as `(depth, dx, dy)`, ordered top-left, top-right,
/// bottom-right, bottom-left.
const fn face_corners(face: Face) -> [(Depth, i32, i32); 4] {
  use Depth::*;
  match face {
    Face::Front => [(Near, 0, 1), (Near, 1, 1), (Near, 1, 0), (Near, 0, 0)],
    Face::Left => [(Behind, 0, 1), (Near, 0, 1), (Near, 0, 0), (Behind, 0, 0)],
    Face::Right => [(Near, 1, 1), (Behind, 1, 1), (Behind, 1, 0), (Near, 1, 0)],
    Face::Top => [(Behind, 0, 1), (Behind, 1, 1), (Near, 1, 1), (Near, 0, 1)],
    Face::Bottom => [(Near, 0, 0), (Near, 1, 0), (Behind, 1, 0), (Behind, 0, 0)],
  }
}

/// Per-layer steps for one depth `Z`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayerSteps {
  /// `[x, y]` step of the cell's own layer.
  pub near: [i32; 2],
  /// `[x, y]` step one layer deeper.
  pub behind: [i32; 2],
}

/// Faux-3D layout in 2-D fixed point.
#[derive(Clone, Copy, Debug)]
pub struct DepthScaledLayout {
  count: [i32; 2],
  half: [i32; 2],
  base: [i32; 2],
}

impl DepthScaledLayout {
  pub fn new(dims: GridDims) -> Self {
    let count = [dims.x as i32, dims.y as i32];
    Self {
      count,
      half: [count[0] / 2, count[1] / 2],
      base: [axis_step(dims.x), axis_step(dims.y)],
    }
  }

  /// Front-layer step per axis.
  pub fn base_step(&self) -> [i32; 2] {
    self.base
  }

  /// Steps for layer `z`.
  ///
  /// Evaluated in `i64`: `2 * z` alone can exceed `i32` on deep grids. The
  /// result never exceeds the base step.
  pub fn layer_steps(&self, z: usize) -> LayerSteps {
    let z = z as i64;
    let scaled = |axis: usize, depth: i64| {
      let count = self.count[axis] as i64;
      let step = self.base[axis] as i64 * count / (2 * depth + count);
      i32::try_from(step).unwrap_or(i32::MAX)
    };
    LayerSteps {
      near: [scaled(0, z), scaled(1, z)],
      behind: [scaled(0, z + 1), scaled(1, z + 1)],
    }
  }

  #[inline]
  fn coordinate(&self, axis: usize, step: i32, cell: usize, corner: i32) -> i16 {
    let offset = cell as i64 + corner as i64 - self.half[axis] as i64;
    saturate_i16_wide(I16_MID as i64 + step as i64 * offset)
  }
}

impl FaceLayout for DepthScaledLayout {
  fn candidate_faces(&self, coord: [usize; 3]) -> FaceList {
    let x = coord[0] as i32;
    let y = coord[1] as i32;

    let mut faces = FaceList::new();
    faces.push(Face::Front);
    if x > self.half[0] {
      faces.push(Face::Left);
    }
    if x < self.half[0] - 1 {
      faces.push(Face::Right);
    }
    if y < self.half[1] - 1 {
      faces.push(Face::Top);
    }
    if y > self.half[1] {
      faces.push(Face::Bottom);
    }
    faces
  }

  fn write_face(&self, coord: [usize; 3], face: Face, out: &mut FaceComponents) {
    let steps = self.layer_steps(coord[2]);
    let corners = face_corners(face).map(|(depth, dx, dy)| {
      let step = match depth {
        Depth::Near => steps.near,
        Depth::Behind => steps.behind,
      };
      [
        self.coordinate(0, step[0], coord[0], dx),
        self.coordinate(1, step[1], coord[1], dy),
      ]
    });

    for &corner in &QUAD_CORNER_ORDER {
      out.extend_from_slice(&corners[corner]);
    }
  }
}

#[cfg(test)]
#[path = "depth_scaled_test.rs"]
mod depth_scaled_test;
