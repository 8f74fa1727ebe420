//! Configuration parsing for the animation binary.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use voxel_mesher::{CursorPolicy, GridDims, MeshConfig, Projection, ScreenConfig};

/// Root configuration. Every key is optional; missing keys take the
/// reference values (128×64×64 grid, 1600×800 window, one cell per second).
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Tick period in milliseconds.
	pub period_ms: u64,
	/// Cursor behaviour past the last cell.
	pub cursor: CursorName,
	pub grid: GridSection,
	pub mesh: MeshSection,
	pub screen: ScreenSection,
}

/// Grid dimensions.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridSection {
	pub x: usize,
	pub y: usize,
	pub z: usize,
}

/// Extraction settings.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MeshSection {
	pub projection: ProjectionName,
	pub cull_shared_faces: bool,
	/// Most solid cells a frame may hold; larger frames are truncated.
	/// `0` sizes the buffer for every cell of the grid, so no frame is ever
	/// truncated.
	pub solid_budget: Option<usize>,
}

/// Window and camera.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreenSection {
	pub width: u32,
	pub height: u32,
	pub fov_y_degrees: f32,
	pub near: f32,
	pub far: f32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionName {
	Orthographic,
	#[default]
	DepthScaled,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CursorName {
	#[default]
	Wrap,
	Halt,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			period_ms: voxel_mesher::DEFAULT_PERIOD_MS,
			cursor: CursorName::default(),
			grid: GridSection::default(),
			mesh: MeshSection::default(),
			screen: ScreenSection::default(),
		}
	}
}

impl Default for GridSection {
	fn default() -> Self {
		let dims = GridDims::default();
		Self {
			x: dims.x,
			y: dims.y,
			z: dims.z,
		}
	}
}

impl Default for MeshSection {
	fn default() -> Self {
		Self {
			projection: ProjectionName::default(),
			cull_shared_faces: false,
			solid_budget: Some(64),
		}
	}
}

impl Default for ScreenSection {
	fn default() -> Self {
		let screen = ScreenConfig::default();
		Self {
			width: screen.width,
			height: screen.height,
			fov_y_degrees: screen.fov_y_degrees,
			near: screen.near,
			far: screen.far,
		}
	}
}

impl From<ProjectionName> for Projection {
	fn from(name: ProjectionName) -> Self {
		match name {
			ProjectionName::Orthographic => Projection::Orthographic,
			ProjectionName::DepthScaled => Projection::DepthScaled,
		}
	}
}

impl From<CursorName> for CursorPolicy {
	fn from(name: CursorName) -> Self {
		match name {
			CursorName::Wrap => CursorPolicy::Wrap,
			CursorName::Halt => CursorPolicy::Halt,
		}
	}
}

impl Config {
	/// Load configuration from a TOML file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file: {}", path.display()))?;
		let config = Self::parse(&content)?;
		config.validate()?;
		Ok(config)
	}

	/// Parse a TOML document without validating it.
	pub fn parse(content: &str) -> Result<Self> {
		toml::from_str(content).with_context(|| "Failed to parse config TOML")
	}

	/// Reject values the mesher or the window cannot use.
	pub fn validate(&self) -> Result<()> {
		self.grid_dims()?;

		if self.screen.width == 0 || self.screen.height == 0 {
			anyhow::bail!(
				"screen must be at least 1x1, got {}x{}",
				self.screen.width,
				self.screen.height
			);
		}
		if !(self.screen.fov_y_degrees > 0.0 && self.screen.fov_y_degrees < 180.0) {
			anyhow::bail!(
				"fov_y_degrees must be in (0, 180), got {}",
				self.screen.fov_y_degrees
			);
		}
		if !(self.screen.near > 0.0 && self.screen.near < self.screen.far) {
			anyhow::bail!(
				"clip planes must satisfy 0 < near < far, got near={} far={}",
				self.screen.near,
				self.screen.far
			);
		}

		Ok(())
	}

	pub fn grid_dims(&self) -> Result<GridDims> {
		GridDims::new(self.grid.x, self.grid.y, self.grid.z)
			.with_context(|| "Invalid [grid] dimensions")
	}

	pub fn mesh_config(&self) -> MeshConfig {
		let config = MeshConfig::new()
			.with_projection(self.mesh.projection.into())
			.with_shared_face_culling(self.mesh.cull_shared_faces);
		match self.mesh.solid_budget {
			Some(0) | None => config,
			Some(budget) => config.with_solid_budget(budget),
		}
	}

	pub fn screen_config(&self) -> ScreenConfig {
		ScreenConfig::new(self.screen.width, self.screen.height)
			.with_fov(self.screen.fov_y_degrees)
			.with_clip(self.screen.near, self.screen.far)
	}

	pub fn cursor_policy(&self) -> CursorPolicy {
		self.cursor.into()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_document_uses_reference_values() {
		let config = Config::parse("").unwrap();
		config.validate().unwrap();

		assert_eq!(config.period_ms, 1000);
		assert_eq!(config.grid_dims().unwrap(), GridDims::new(128, 64, 64).unwrap());
		assert_eq!(config.mesh_config().projection, Projection::DepthScaled);
		assert_eq!(config.mesh_config().solid_budget, Some(64));
		assert_eq!(config.screen_config(), ScreenConfig::default());
		assert_eq!(config.cursor_policy(), CursorPolicy::Wrap);
	}

	#[test]
	fn full_document() {
		let config = Config::parse(
			r#"
			period_ms = 250
			cursor = "halt"

			[grid]
			x = 4
			y = 4
			z = 2

			[mesh]
			projection = "orthographic"
			cull_shared_faces = true

			[screen]
			width = 800
			height = 600
			fov_y_degrees = 60.0
			near = 0.5
			far = 50.0
			"#,
		)
		.unwrap();
		config.validate().unwrap();

		let mesh = config.mesh_config();
		assert_eq!(mesh.projection, Projection::Orthographic);
		assert!(mesh.cull_shared_faces);
		assert_eq!(mesh.solid_budget, Some(64));
		assert_eq!(config.cursor_policy(), CursorPolicy::Halt);
		assert_eq!(config.screen_config().aspect(), 800.0 / 600.0);
	}

	#[test]
	fn zero_budget_sizes_for_whole_grid() {
		let config = Config::parse("[grid]\nx = 4\ny = 4\nz = 4\n[mesh]\nsolid_budget = 0").unwrap();
		config.validate().unwrap();

		let mesh = config.mesh_config();
		assert_eq!(mesh.solid_budget, None);
		assert_eq!(
			voxel_mesher::required_capacity(config.grid_dims().unwrap(), &mesh),
			64 * mesh.projection.max_components_per_voxel()
		);
	}

	#[test]
	fn rejects_unknown_keys() {
		assert!(Config::parse("[grid]\nw = 3").is_err());
		assert!(Config::parse("cursor = \"bounce\"").is_err());
	}

	#[test]
	fn rejects_empty_axis() {
		let config = Config::parse("[grid]\ny = 0").unwrap();
		assert!(config.validate().is_err());
	}

	#[test]
	fn rejects_bad_clip_planes() {
		let config = Config::parse("[screen]\nnear = 10.0\nfar = 1.0").unwrap();
		assert!(config.validate().is_err());
	}
}
