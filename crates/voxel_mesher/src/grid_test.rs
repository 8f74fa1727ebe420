use super::*;

#[test]
fn test_index_coord_roundtrip() {
  let dims = GridDims::new(5, 3, 4).unwrap();
  for index in 0..dims.cell_count() {
    let [x, y, z] = dims.coord_of(index).unwrap();
    assert_eq!(
      dims.index_of(x, y, z),
      Some(index),
      "Roundtrip failed for index {}",
      index
    );
  }
}

#[test]
fn test_x_is_innermost() {
  let dims = GridDims::new(4, 3, 2).unwrap();
  assert_eq!(dims.index_of(1, 0, 0), Some(1));
  assert_eq!(dims.index_of(0, 1, 0), Some(4));
  assert_eq!(dims.index_of(0, 0, 1), Some(12));
  assert_eq!(dims.index_of(3, 2, 1), Some(23));
}

#[test]
fn test_out_of_range_lookups() {
  let dims = GridDims::new(2, 2, 2).unwrap();
  assert_eq!(dims.index_of(2, 0, 0), None);
  assert_eq!(dims.index_of(0, 0, 2), None);
  assert_eq!(dims.coord_of(8), None);
}

#[test]
fn test_zero_dimension_rejected() {
  assert_eq!(
    GridDims::new(4, 0, 4),
    Err(GridError::EmptyDimension { axis: 'y' })
  );
  assert!(OccupancyGrid::with_size(0, 1, 1).is_err());
}

#[test]
fn test_oversized_grid_rejected() {
  assert!(matches!(
    GridDims::new(1 << 16, 1 << 16, 1 << 16),
    Err(GridError::TooLarge { .. })
  ));
}

#[test]
fn test_default_dims_match_reference() {
  let dims = GridDims::default();
  assert_eq!((dims.x, dims.y, dims.z), (128, 64, 64));
  assert_eq!(dims.cell_count(), 524_288);
}

#[test]
fn test_new_grid_is_empty() {
  let grid = OccupancyGrid::with_size(4, 4, 4).unwrap();
  assert_eq!(grid.len(), 64);
  assert_eq!(grid.solid_count(), 0);
  assert_eq!(grid.solid_cells().count(), 0);
}

#[test]
fn test_set_get() {
  let mut grid = OccupancyGrid::with_size(4, 4, 4).unwrap();
  grid.set(1, 2, 3, 1).unwrap();

  assert_eq!(grid.get(1, 2, 3), Ok(1));
  assert_eq!(grid.get_index(1 + 2 * 4 + 3 * 16), Ok(1));
  assert!(grid.is_solid([1, 2, 3]));
  assert!(!grid.is_solid([2, 2, 3]));
  assert_eq!(grid.solid_count(), 1);
}

#[test]
fn test_out_of_bounds_access_is_an_error() {
  let mut grid = OccupancyGrid::with_size(4, 4, 4).unwrap();

  assert!(matches!(
    grid.set(4, 0, 0, 1),
    Err(GridError::OutOfBounds { x: 4, .. })
  ));
  assert_eq!(
    grid.set_index(64, 1),
    Err(GridError::IndexOutOfBounds {
      index: 64,
      cells: 64
    })
  );
  assert!(grid.get_index(100).is_err());
  assert_eq!(grid.solid_count(), 0);
}

#[test]
fn test_is_solid_outside_grid_is_false() {
  let mut grid = OccupancyGrid::with_size(2, 2, 2).unwrap();
  grid.fill(1);
  assert!(!grid.is_solid([2, 0, 0]));
  assert!(!grid.is_solid([0, 5, 0]));
}

#[test]
fn test_solid_cells_in_index_order() {
  let mut grid = OccupancyGrid::with_size(3, 3, 3).unwrap();
  grid.set(2, 2, 2, 1).unwrap();
  grid.set(0, 1, 0, 7).unwrap();

  let cells: Vec<_> = grid.solid_cells().collect();
  assert_eq!(cells, vec![(3, [0, 1, 0]), (26, [2, 2, 2])]);
}

#[test]
fn test_offset_stays_in_grid() {
  let dims = GridDims::new(3, 3, 3).unwrap();
  assert_eq!(dims.offset([1, 1, 1], [-1, 0, 0]), Some([0, 1, 1]));
  assert_eq!(dims.offset([0, 1, 1], [-1, 0, 0]), None);
  assert_eq!(dims.offset([2, 1, 1], [1, 0, 0]), None);
  assert_eq!(dims.offset([1, 2, 1], [0, 1, 0]), None);
}

#[test]
fn test_clear() {
  let mut grid = OccupancyGrid::with_size(2, 2, 2).unwrap();
  grid.fill(1);
  assert_eq!(grid.solid_count(), 8);
  grid.clear();
  assert_eq!(grid.solid_count(), 0);
}

#[test]
fn test_solid_cells_agree_with_coord_of() {
  let mut grid = OccupancyGrid::with_size(5, 3, 4).unwrap();
  grid.fill(1);

  let dims = grid.dims();
  for (index, coord) in grid.solid_cells() {
    assert_eq!(dims.coord_of(index), Some(coord));
    assert_eq!(dims.index_of(coord[0], coord[1], coord[2]), Some(index));
  }
  assert_eq!(grid.solid_cells().count(), dims.cell_count());
}
