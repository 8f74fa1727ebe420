//! OccupancyGrid - fixed-size 3-D occupancy field stored as a flat buffer.
//!
//! The grid is allocated once and mutated in place for the whole session.
//! Cells are addressed either by flat index or by `[x, y, z]`; both forms are
//! bounds-checked and out-of-range access is reported as [`GridError`], never
//! as a silent read past the end.

use thiserror::Error;

use crate::types::Occupancy;

/// Errors raised by grid construction and access.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
  #[error("grid dimension {axis} must be non-zero")]
  EmptyDimension { axis: char },

  #[error("grid of {x}×{y}×{z} cells is too large to index")]
  TooLarge { x: usize, y: usize, z: usize },

  #[error("cell ({x}, {y}, {z}) is outside a {dims:?} grid")]
  OutOfBounds {
    x: usize,
    y: usize,
    z: usize,
    dims: GridDims,
  },

  #[error("flat index {index} is outside a grid of {cells} cells")]
  IndexOutOfBounds { index: usize, cells: usize },
}

/// Cells per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
  pub x: usize,
  pub y: usize,
  pub z: usize,
}

impl GridDims {
  /// Validate and build dimensions.
  ///
  /// Every axis must be non-zero and the cell count must fit `i32`, so every
  /// axis count and corner index converts to `i32` losslessly. Products the
  /// mesher derives from them (such as depth-scaled layer steps) are
  /// widened to `i64` where they can exceed that range.
  pub fn new(x: usize, y: usize, z: usize) -> Result<Self, GridError> {
    for (axis, count) in [('x', x), ('y', y), ('z', z)] {
      if count == 0 {
        return Err(GridError::EmptyDimension { axis });
      }
    }

    let cells = x
      .checked_mul(y)
      .and_then(|xy| xy.checked_mul(z))
      .filter(|&cells| cells <= i32::MAX as usize);
    if cells.is_none() {
      return Err(GridError::TooLarge { x, y, z });
    }

    Ok(Self { x, y, z })
  }

  /// Cells in one `z` layer.
  #[inline]
  pub const fn layer_len(&self) -> usize {
    self.x * self.y
  }

  /// Total cell count.
  #[inline]
  pub const fn cell_count(&self) -> usize {
    self.x * self.y * self.z
  }

  /// Flat index for a coordinate, or `None` if out of range.
  #[inline]
  pub const fn index_of(&self, x: usize, y: usize, z: usize) -> Option<usize> {
    if x < self.x && y < self.y && z < self.z {
      Some(x + y * self.x + z * self.layer_len())
    } else {
      None
    }
  }

  /// Coordinate for a flat index, or `None` if out of range.
  #[inline]
  pub const fn coord_of(&self, index: usize) -> Option<[usize; 3]> {
    if index < self.cell_count() {
      Some([
        index % self.x,
        (index / self.x) % self.y,
        index / self.layer_len(),
      ])
    } else {
      None
    }
  }

  /// Coordinate offset by a signed delta, or `None` when it leaves the grid.
  #[inline]
  pub fn offset(&self, coord: [usize; 3], delta: [i32; 3]) -> Option<[usize; 3]> {
    let mut out = [0usize; 3];
    let extent = [self.x, self.y, self.z];
    for axis in 0..3 {
      let moved = coord[axis].checked_add_signed(delta[axis] as isize)?;
      if moved >= extent[axis] {
        return None;
      }
      out[axis] = moved;
    }
    Some(out)
  }
}

impl Default for GridDims {
  fn default() -> Self {
    use crate::constants::{DEFAULT_GRID_X, DEFAULT_GRID_Y, DEFAULT_GRID_Z};
    Self {
      x: DEFAULT_GRID_X,
      y: DEFAULT_GRID_Y,
      z: DEFAULT_GRID_Z,
    }
  }
}

/// Flat occupancy grid, X innermost.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
  dims: GridDims,
  cells: Box<[Occupancy]>,
}

impl OccupancyGrid {
  /// Create an all-empty grid.
  pub fn new(dims: GridDims) -> Self {
    Self {
      dims,
      cells: vec![0; dims.cell_count()].into_boxed_slice(),
    }
  }

  /// Validate dimensions and create an all-empty grid.
  pub fn with_size(x: usize, y: usize, z: usize) -> Result<Self, GridError> {
    Ok(Self::new(GridDims::new(x, y, z)?))
  }

  #[inline]
  pub fn dims(&self) -> GridDims {
    self.dims
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.cells.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.cells.is_empty()
  }

  /// Raw flags, X innermost.
  #[inline]
  pub fn as_slice(&self) -> &[Occupancy] {
    &self.cells
  }

  /// Read the flag at `[x, y, z]`.
  pub fn get(&self, x: usize, y: usize, z: usize) -> Result<Occupancy, GridError> {
    let index = self.checked_index(x, y, z)?;
    Ok(self.cells[index])
  }

  /// Write the flag at `[x, y, z]`.
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: Occupancy) -> Result<(), GridError> {
    let index = self.checked_index(x, y, z)?;
    self.cells[index] = value;
    Ok(())
  }

  /// Read the flag at a flat index.
  pub fn get_index(&self, index: usize) -> Result<Occupancy, GridError> {
    self
      .cells
      .get(index)
      .copied()
      .ok_or(GridError::IndexOutOfBounds {
        index,
        cells: self.cells.len(),
      })
  }

  /// Write the flag at a flat index.
  pub fn set_index(&mut self, index: usize, value: Occupancy) -> Result<(), GridError> {
    let cells = self.cells.len();
    let slot = self
      .cells
      .get_mut(index)
      .ok_or(GridError::IndexOutOfBounds { index, cells })?;
    *slot = value;
    Ok(())
  }

  /// True if `[x, y, z]` is inside the grid and solid.
  #[inline]
  pub fn is_solid(&self, coord: [usize; 3]) -> bool {
    self
      .dims
      .index_of(coord[0], coord[1], coord[2])
      .is_some_and(|index| self.cells[index] > 0)
  }

  /// Number of solid cells.
  pub fn solid_count(&self) -> usize {
    self.cells.iter().filter(|&&flag| flag > 0).count()
  }

  /// Iterate `(flat index, [x, y, z])` of every solid cell in index order.
  pub fn solid_cells(&self) -> impl Iterator<Item = (usize, [usize; 3])> + '_ {
    let dims = self.dims;
    self
      .cells
      .iter()
      .enumerate()
      .filter(|&(_, &flag)| flag > 0)
      .filter_map(move |(index, _)| Some((index, dims.coord_of(index)?)))
  }

  /// Set every cell to `value`.
  pub fn fill(&mut self, value: Occupancy) {
    self.cells.fill(value);
  }

  /// Empty every cell.
  pub fn clear(&mut self) {
    self.fill(0);
  }

  fn checked_index(&self, x: usize, y: usize, z: usize) -> Result<usize, GridError> {
    self.dims.index_of(x, y, z).ok_or(GridError::OutOfBounds {
      x,
      y,
      z,
      dims: self.dims,
    })
  }
}

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;
