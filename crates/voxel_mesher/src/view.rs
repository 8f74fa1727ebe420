//! Screen geometry and the downstream projection for orthographic meshes.
//!
//! Orthographic output is a cuboid grid in normalized fixed point; the render
//! surface multiplies it by a standard perspective matrix. Depth-scaled output
//! is already screen-ready and is drawn with an identity transform.

use glam::{Mat4, Vec3, Vec4};

use crate::types::{snorm16_to_f32, Projection};

/// Reference window width.
pub const DEFAULT_WIDTH: u32 = 1600;

/// Reference window height.
pub const DEFAULT_HEIGHT: u32 = 800;

/// Fixed window and camera parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenConfig {
  pub width: u32,
  pub height: u32,
  /// Vertical field of view.
  pub fov_y_degrees: f32,
  pub near: f32,
  pub far: f32,
}

impl Default for ScreenConfig {
  fn default() -> Self {
    Self {
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
      fov_y_degrees: 45.0,
      near: 0.1,
      far: 100.0,
    }
  }
}

impl ScreenConfig {
  pub fn new(width: u32, height: u32) -> Self {
    Self {
      width,
      height,
      ..Self::default()
    }
  }

  pub fn with_fov(mut self, fov_y_degrees: f32) -> Self {
    self.fov_y_degrees = fov_y_degrees;
    self
  }

  pub fn with_clip(mut self, near: f32, far: f32) -> Self {
    self.near = near;
    self.far = far;
    self
  }

  /// Width over height. A zero height is treated as one pixel.
  #[inline]
  pub fn aspect(&self) -> f32 {
    self.width as f32 / self.height.max(1) as f32
  }

  /// Right-handed, OpenGL clip-space perspective matrix.
  pub fn projection_matrix(&self) -> Mat4 {
    Mat4::perspective_rh_gl(
      self.fov_y_degrees.to_radians(),
      self.aspect(),
      self.near,
      self.far,
    )
  }

  /// Transform the render surface applies to vertices of `projection`.
  pub fn vertex_transform(&self, projection: Projection) -> Mat4 {
    match projection {
      Projection::Orthographic => self.projection_matrix(),
      Projection::DepthScaled => Mat4::IDENTITY,
    }
  }
}

/// Decode one stored vertex into the float position the shader would see.
///
/// Two-component vertices get `z = 0`.
pub fn decode_vertex(components: &[i16]) -> Vec3 {
  let get = |i: usize| components.get(i).copied().map_or(0.0, snorm16_to_f32);
  Vec3::new(get(0), get(1), get(2))
}

/// Clip-space position of a stored vertex under `transform`.
pub fn to_clip(transform: &Mat4, components: &[i16]) -> Vec4 {
  *transform * decode_vertex(components).extend(1.0)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_reference_window() {
    let screen = ScreenConfig::default();
    assert_eq!((screen.width, screen.height), (1600, 800));
    assert_eq!(screen.aspect(), 2.0);
  }

  #[test]
  fn zero_height_does_not_divide_by_zero() {
    assert_eq!(ScreenConfig::new(640, 0).aspect(), 640.0);
  }

  #[test]
  fn depth_scaled_is_drawn_untransformed() {
    let screen = ScreenConfig::default();
    assert_eq!(
      screen.vertex_transform(Projection::DepthScaled),
      Mat4::IDENTITY
    );

    let clip = to_clip(&Mat4::IDENTITY, &[i16::MAX, 0]);
    assert_eq!(clip, Vec4::new(1.0, 0.0, 0.0, 1.0));
  }

  #[test]
  fn perspective_flips_w_to_depth() {
    let screen = ScreenConfig::default();
    let transform = screen.vertex_transform(Projection::Orthographic);
    assert_eq!(transform, screen.projection_matrix());

    // A point in front of the camera (negative z in a right-handed view)
    let clip = transform * Vec4::new(0.0, 0.0, -1.0, 1.0);
    assert!((clip.w - 1.0).abs() < 1e-6);
  }

  #[test]
  fn decode_vertex_pads_missing_components() {
    let v = decode_vertex(&[0, i16::MIN]);
    assert_eq!(v, Vec3::new(0.0, -1.0, 0.0));
  }
}
