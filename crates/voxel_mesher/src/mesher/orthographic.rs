//! Orthographic cuboid layout.
//!
//! Each corner index maps linearly onto the full `i16` range:
//! `coordinate = i16::MIN + step_axis * corner`, with
//! `step_axis = floor(65535 / axis_count)`. All five faces of a solid cell are
//! candidates.
//!
//! ```text
//!        (0,1,1)──────(1,1,1)
//!         ╱│   TOP     ╱│
//!  (0,1,0)──────(1,1,0) │
//!     │    │         │  │ RIGHT
//! LEFT│ (0,0,1)──────│(1,0,1)
//!     │  ╱  FRONT    │ ╱
//!  (0,0,0)──────(1,0,0)
//!           BOTTOM
//! ```

use super::{FaceComponents, FaceLayout, FaceList};
use crate::constants::{axis_step, saturate_i16, I16_MIN, QUAD_CORNER_ORDER};
use crate::grid::GridDims;
use crate::types::Face;

/// Emission order of faces per cell.
const FACE_ORDER: [Face; 5] = [Face::Left, Face::Front, Face::Right, Face::Top, Face::Bottom];

/// Corner offsets of each face as `[dx, dy, dz]`, ordered top-left, top-right,
/// bottom-right, bottom-left as seen from outside the cell.
const fn face_corners(face: Face) -> [[usize; 3]; 4] {
  match face {
    Face::Left => [[0, 1, 1], [0, 1, 0], [0, 0, 0], [0, 0, 1]],
    Face::Front => [[0, 1, 0], [1, 1, 0], [1, 0, 0], [0, 0, 0]],
    Face::Right => [[1, 1, 0], [1, 1, 1], [1, 0, 1], [1, 0, 0]],
    Face::Top => [[0, 1, 1], [1, 1, 1], [1, 1, 0], [0, 1, 0]],
    Face::Bottom => [[0, 0, 0], [1, 0, 0], [1, 0, 1], [0, 0, 1]],
  }
}

/// Exact cuboid layout in 3-D fixed point.
#[derive(Clone, Copy, Debug)]
pub struct OrthographicLayout {
  step: [i32; 3],
}

impl OrthographicLayout {
  pub fn new(dims: GridDims) -> Self {
    Self {
      step: [axis_step(dims.x), axis_step(dims.y), axis_step(dims.z)],
    }
  }

  /// Per-axis step.
  pub fn step(&self) -> [i32; 3] {
    self.step
  }

  /// Fixed-point position of grid corner `corner`.
  #[inline]
  pub fn corner(&self, corner: [usize; 3]) -> [i16; 3] {
    std::array::from_fn(|axis| saturate_i16(I16_MIN + self.step[axis] * corner[axis] as i32))
  }
}

impl FaceLayout for OrthographicLayout {
  fn candidate_faces(&self, _coord: [usize; 3]) -> FaceList {
    FaceList::from_slice(&FACE_ORDER)
  }

  fn write_face(&self, coord: [usize; 3], face: Face, out: &mut FaceComponents) {
    let corners = face_corners(face).map(|offset| {
      self.corner([
        coord[0] + offset[0],
        coord[1] + offset[1],
        coord[2] + offset[2],
      ])
    });

    for &corner in &QUAD_CORNER_ORDER {
      out.extend_from_slice(&corners[corner]);
    }
  }
}

#[cfg(test)]
#[path = "orthographic_test.rs"]
mod orthographic_test;
