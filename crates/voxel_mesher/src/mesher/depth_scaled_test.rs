use super::*;

fn layout(x: usize, y: usize, z: usize) -> DepthScaledLayout {
  DepthScaledLayout::new(GridDims::new(x, y, z).unwrap())
}

fn face(layout: &DepthScaledLayout, coord: [usize; 3], face: Face) -> Vec<i16> {
  let mut out = FaceComponents::new();
  layout.write_face(coord, face, &mut out);
  out.to_vec()
}

// =============================================================================
// Steps
// =============================================================================

#[test]
fn test_reference_base_steps() {
  let layout = layout(128, 64, 64);
  assert_eq!(layout.base_step(), [511, 1023]);
  assert_eq!(
    layout.layer_steps(0),
    LayerSteps {
      near: [511, 1023],
      behind: [503, 992],
    }
  );
}

#[test]
fn test_steps_shrink_with_depth() {
  let layout = layout(128, 64, 64);
  assert_eq!(
    layout.layer_steps(63),
    LayerSteps {
      near: [257, 344],
      behind: [255, 341],
    }
  );

  let mut previous = layout.layer_steps(0).near;
  for z in 1..64 {
    let steps = layout.layer_steps(z);
    assert!(steps.near[0] <= previous[0] && steps.near[1] <= previous[1]);
    assert_eq!(steps.behind, layout.layer_steps(z + 1).near);
    previous = steps.near;
  }
}

// =============================================================================
// Half-range gating
// =============================================================================

#[test]
fn test_centre_cell_has_front_only() {
  let layout = layout(8, 8, 4);
  for x in 3..=4 {
    for y in 3..=4 {
      let faces = layout.candidate_faces([x, y, 0]);
      assert_eq!(faces.as_slice(), &[Face::Front], "cell ({}, {})", x, y);
    }
  }
}

#[test]
fn test_left_face_boundary() {
  let layout = layout(8, 8, 4);
  // X > Nx/2
  assert!(layout.candidate_faces([5, 4, 0]).contains(&Face::Left));
  assert!(!layout.candidate_faces([4, 4, 0]).contains(&Face::Left));
}

#[test]
fn test_right_face_boundary() {
  let layout = layout(8, 8, 4);
  // X < Nx/2 - 1
  assert!(layout.candidate_faces([2, 4, 0]).contains(&Face::Right));
  assert!(!layout.candidate_faces([3, 4, 0]).contains(&Face::Right));
}

#[test]
fn test_top_face_boundary() {
  let layout = layout(8, 8, 4);
  // Y < Ny/2 - 1
  assert!(layout.candidate_faces([4, 2, 0]).contains(&Face::Top));
  assert!(!layout.candidate_faces([4, 3, 0]).contains(&Face::Top));
}

#[test]
fn test_bottom_face_boundary() {
  let layout = layout(8, 8, 4);
  // Y > Ny/2
  assert!(layout.candidate_faces([4, 5, 0]).contains(&Face::Bottom));
  assert!(!layout.candidate_faces([4, 4, 0]).contains(&Face::Bottom));
}

#[test]
fn test_corner_cell_gets_three_faces() {
  let layout = layout(8, 8, 4);
  assert_eq!(
    layout.candidate_faces([0, 0, 3]).as_slice(),
    &[Face::Front, Face::Right, Face::Top]
  );
  assert_eq!(
    layout.candidate_faces([7, 7, 3]).as_slice(),
    &[Face::Front, Face::Left, Face::Bottom]
  );
}

#[test]
fn test_tiny_axis_never_gets_sides() {
  // Nx = 1: half = 0, so X > 0 and X < -1 are both impossible.
  let layout = layout(1, 1, 1);
  assert_eq!(layout.candidate_faces([0, 0, 0]).as_slice(), &[Face::Front]);
}

// =============================================================================
// Corner values
// =============================================================================

#[test]
fn test_front_face_values() {
  // 8×8 grid: base = 8191, centred cell (4, 4) at depth 0
  let expected = vec![
    0, 8191, // top left
    8191, 8191, // top right
    8191, 0, // bottom right
    8191, 0, // bottom right
    0, 0, // bottom left
    0, 8191, // top left
  ];
  assert_eq!(face(&layout(8, 8, 4), [4, 4, 0], Face::Front), expected);
}

#[test]
fn test_left_face_reaches_behind() {
  // behind step at depth 0: 8191 * 8 / 10 = 6552
  let expected = vec![
    6552, 6552, // behind top left
    8191, 8191, // near top right
    8191, 0, // near bottom right
    8191, 0, // near bottom right
    6552, 0, // behind bottom left
    6552, 6552, // behind top left
  ];
  assert_eq!(face(&layout(8, 8, 4), [5, 4, 0], Face::Left), expected);
}

#[test]
fn test_reference_front_face() {
  let components = face(&layout(128, 64, 64), [64, 32, 0], Face::Front);
  assert_eq!(&components[..4], &[0, 1023, 511, 1023]);
}

#[test]
fn test_out_of_range_corner_saturates() {
  // Nx = 3: base 21845, half 1; the right edge of X = 2 would be 43690.
  let components = face(&layout(3, 1, 1), [2, 0, 0], Face::Front);
  assert_eq!(components[2], i16::MAX);
}

#[test]
fn test_deepest_layer_of_tall_grid() {
  // Cell count fits i32, but 2 * z + Nx does not.
  let depth = (1usize << 30) + 1;
  let layout = layout(1, 1, depth);

  let deepest = layout.layer_steps(depth - 1);
  assert_eq!(deepest, LayerSteps { near: [0, 0], behind: [0, 0] });
  assert_eq!(layout.layer_steps(depth), deepest);

  let components = face(&layout, [0, 0, depth - 1], Face::Front);
  assert_eq!(components, vec![0; 12]);
}

#[test]
fn test_wide_layer_steps_stay_below_base() {
  let layout = layout(1 << 20, 2, 1 << 9);
  for z in [0, 1, 255, 511] {
    let steps = layout.layer_steps(z);
    assert!(steps.near[0] <= layout.base_step()[0]);
    assert!(steps.behind[1] <= steps.near[1]);
  }
}
