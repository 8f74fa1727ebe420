//! Headless voxel cursor animation.
//!
//! Lights one cell of the grid per period, re-extracts the cuboid mesh and
//! hands it to a logging surface. Stops after `--frames` frames, when the
//! cursor halts, or never.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use voxel_mesher::view::to_clip;
use voxel_mesher::{
	AnimationDriver, Component, Mesher, OccupancyGrid, Projection, RenderSurface, ScreenConfig,
};

use config::Config;

/// Headless voxel cursor animation.
#[derive(Parser, Debug)]
#[command(name = "voxel_anim")]
#[command(about = "Animates a cursor through a voxel grid and logs each frame")]
struct Args {
	/// Path to configuration TOML file (built-in defaults if omitted).
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Stop after this many frames.
	#[arg(short, long)]
	frames: Option<u64>,

	/// Override the configured projection.
	#[arg(short, long, value_enum)]
	projection: Option<ProjectionArg>,

	/// Override the configured tick period.
	#[arg(long)]
	period_ms: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProjectionArg {
	Orthographic,
	DepthScaled,
}

impl From<ProjectionArg> for Projection {
	fn from(arg: ProjectionArg) -> Self {
		match arg {
			ProjectionArg::Orthographic => Projection::Orthographic,
			ProjectionArg::DepthScaled => Projection::DepthScaled,
		}
	}
}

/// Render surface with no window: logs where each frame lands in clip space.
struct LogSurface {
	screen: ScreenConfig,
	projection: Projection,
	frames: u64,
	frame_limit: Option<u64>,
}

impl RenderSurface for LogSurface {
	fn upload_and_draw(&mut self, components: &[Component], vertex_count: usize) {
		self.frames += 1;

		let stride = self.projection.components_per_vertex();
		let transform = self.screen.vertex_transform(self.projection);
		match components.get(..stride) {
			Some(first) => log::info!(
				"frame {}: {} vertices, first vertex {:?} -> clip {}",
				self.frames,
				vertex_count,
				first,
				to_clip(&transform, first)
			),
			None => log::info!("frame {}: empty", self.frames),
		}
	}

	fn should_close(&mut self) -> bool {
		self.frame_limit.is_some_and(|limit| self.frames >= limit)
	}
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let args = Args::parse();

	let mut config = match &args.config {
		Some(path) => {
			log::info!("Loading config from: {}", path.display());
			Config::load(path)?
		}
		None => Config::default(),
	};
	if let Some(period_ms) = args.period_ms {
		config.period_ms = period_ms;
	}

	let mut mesh_config = config.mesh_config();
	if let Some(projection) = args.projection {
		mesh_config = mesh_config.with_projection(projection.into());
	}

	let dims = config.grid_dims()?;
	let mut grid = OccupancyGrid::new(dims);
	let mut mesher = Mesher::new(dims, mesh_config);
	let layout = mesher.config().projection.vertex_layout();
	log::info!(
		"Grid {}x{}x{}, {:?} projection, {} components/vertex, buffer {} components",
		dims.x,
		dims.y,
		dims.z,
		mesher.config().projection,
		layout.components,
		mesher.buffer().capacity()
	);

	let mut surface = LogSurface {
		screen: config.screen_config(),
		projection: mesher.config().projection,
		frames: 0,
		frame_limit: args.frames,
	};
	let mut driver = AnimationDriver::new(Duration::from_millis(config.period_ms))
		.with_policy(config.cursor_policy());

	let summary = driver
		.run(&mut grid, &mut mesher, &mut surface)
		.with_context(|| "Animation failed")?;

	log::info!(
		"Done: {} frames, {} truncated{}",
		summary.ticks,
		summary.truncated_frames,
		if summary.halted { ", cursor halted" } else { "" }
	);

	#[cfg(feature = "metrics")]
	log::info!(
		"Average extraction: {:.1} us",
		driver.metrics().avg_extract_us()
	);

	Ok(())
}
