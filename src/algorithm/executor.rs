//! Engine loop: policy steps in, GIF bytes out
//!
//! Single-pass, single-threaded pipeline. Each policy step that carves a
//! wall updates the canvas; every `cells_per_frame` carves the pending
//! change rectangle is flushed as one animation frame. The lead frame shows
//! the completed maze in the highlight color, so the animation is encoded
//! into an in-memory buffer first and spliced in after the header; the sink
//! itself is still written strictly sequentially.

use std::io::Write;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::depth_first::DepthFirst;
use crate::algorithm::frontier::RandomFrontier;
use crate::algorithm::hybrid::Hybrid;
use crate::algorithm::policy::{AlgorithmKind, CarveEvent, GrowthPolicy};
use crate::encode::gif::GifEncoder;
use crate::io::configuration::{
    DEFAULT_ALGORITHM, DEFAULT_CELLS_PER_FRAME, DEFAULT_FRAME_DELAY, DEFAULT_HEIGHT,
    DEFAULT_SEED, DEFAULT_STACK_BIAS, DEFAULT_THICKNESS, DEFAULT_WIDTH, FINAL_HOLD_DELAY,
    LEAD_IN_DELAY, MAX_CANVAS_EXTENT, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_dimension, invalid_parameter};
use crate::io::progress::ProgressReporter;
use crate::render::canvas::Canvas;
use crate::render::palette::{HIGHLIGHT_INDEX, Palette};
use crate::spatial::Grid;
use crate::spatial::grid::Cell;

/// Validated parameters for one generation run
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    /// Maze width in cells
    pub width: usize,
    /// Maze height in cells
    pub height: usize,
    /// Pixel thickness of each canvas unit
    pub thickness: usize,
    /// Growth policy to run
    pub algorithm: AlgorithmKind,
    /// Carved cells batched into one animation frame
    pub cells_per_frame: usize,
    /// Animation frame delay in 1/100ths of a second
    pub frame_delay: u16,
    /// Seed for the run's single random source
    pub seed: u64,
    /// Hybrid policy's probability of taking the depth-first rule
    pub stack_bias: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            thickness: DEFAULT_THICKNESS,
            algorithm: AlgorithmKind::from_id(DEFAULT_ALGORITHM)
                .unwrap_or(AlgorithmKind::DepthFirst),
            cells_per_frame: DEFAULT_CELLS_PER_FRAME,
            frame_delay: DEFAULT_FRAME_DELAY,
            seed: DEFAULT_SEED,
            stack_bias: DEFAULT_STACK_BIAS,
        }
    }
}

impl EngineConfig {
    /// Canvas width in pixels
    #[must_use]
    pub const fn pixel_width(&self) -> usize {
        self.width * 2 * self.thickness
    }

    /// Canvas height in pixels
    #[must_use]
    pub const fn pixel_height(&self) -> usize {
        self.height * 2 * self.thickness
    }

    /// Check every parameter before any engine step runs
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::InvalidDimension`] or
    /// [`crate::MazeError::InvalidParameter`] describing the first
    /// violation found.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 {
                return Err(invalid_dimension(name, value, &"must be at least 1 cell"));
            }
            if value > MAX_GRID_DIMENSION {
                return Err(invalid_dimension(
                    name,
                    value,
                    &format!("exceeds the {MAX_GRID_DIMENSION}-cell safety limit"),
                ));
            }
        }
        if self.thickness == 0 {
            return Err(invalid_dimension(
                "thickness",
                self.thickness,
                &"must be at least 1 pixel",
            ));
        }
        for (name, cells) in [
            ("canvas width", self.width),
            ("canvas height", self.height),
        ] {
            // Guard the multiplication itself: validation must not overflow.
            let extent = cells
                .checked_mul(2)
                .and_then(|units| units.checked_mul(self.thickness));
            match extent {
                Some(value) if value <= MAX_CANVAS_EXTENT => {}
                _ => {
                    return Err(invalid_dimension(
                        name,
                        extent.unwrap_or(usize::MAX),
                        &format!("exceeds the GIF limit of {MAX_CANVAS_EXTENT} pixels"),
                    ));
                }
            }
        }
        if self.cells_per_frame == 0 {
            return Err(invalid_parameter(
                "speed",
                &self.cells_per_frame,
                &"at least one cell must be drawn per frame",
            ));
        }
        if !self.stack_bias.is_finite() || !(0.0..=1.0).contains(&self.stack_bias) {
            return Err(invalid_parameter(
                "stack-bias",
                &self.stack_bias,
                &"must lie in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// Counters describing a completed run
#[derive(Clone, Copy, Debug)]
pub struct RunSummary {
    /// Walls removed (cells entered) by the policy
    pub carves: usize,
    /// Animation frames flushed from the canvas
    pub animation_frames: usize,
    /// Every image block written, including lead and hold frames
    pub total_frames: usize,
}

/// Instantiate the configured growth policy
fn build_policy(
    config: &EngineConfig,
    grid: &Grid,
    start: Cell,
) -> Box<dyn GrowthPolicy> {
    match config.algorithm {
        AlgorithmKind::DepthFirst => Box::new(DepthFirst::new(grid, start)),
        AlgorithmKind::RandomFrontier => Box::new(RandomFrontier::new(grid, start)),
        AlgorithmKind::Hybrid => Box::new(Hybrid::new(grid, start, config.stack_bias)),
    }
}

/// Run a policy to completion without rendering
///
/// Returns the carved grid and the ordered carve events; used by tests and
/// benchmarks that only care about engine behavior.
#[must_use]
pub fn grow_maze(config: &EngineConfig) -> (Grid, Vec<CarveEvent>) {
    let mut grid = Grid::new(config.width, config.height);
    let mut rng = StdRng::seed_from_u64(config.seed);
    let start = [config.width / 2, config.height / 2];
    let mut policy = build_policy(config, &grid, start);

    let mut events = Vec::new();
    while !policy.is_done() {
        if let Some(event) = policy.step(&mut grid, &mut rng) {
            events.push(event);
        }
    }
    (grid, events)
}

/// The full generation pipeline for one output file
#[derive(Debug)]
pub struct MazeAnimator {
    config: EngineConfig,
    palette: Palette,
}

impl MazeAnimator {
    /// Validate the configuration and prepare a run
    ///
    /// # Errors
    ///
    /// Propagates the first [`EngineConfig::validate`] violation.
    pub fn new(config: EngineConfig, palette: Palette) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, palette })
    }

    /// Generate the maze and write the complete GIF to `sink`
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::OutputWrite`] if the sink rejects a
    /// write; the run aborts immediately, leaving the sink mid-stream.
    pub fn generate<W: Write>(&self, sink: W) -> Result<RunSummary> {
        self.generate_with_progress(sink, None)
    }

    /// As [`Self::generate`], reporting each carve to `progress`
    ///
    /// # Errors
    ///
    /// Returns [`crate::MazeError::OutputWrite`] if the sink rejects a
    /// write.
    pub fn generate_with_progress<W: Write>(
        &self,
        sink: W,
        progress: Option<&ProgressReporter>,
    ) -> Result<RunSummary> {
        let config = &self.config;
        let mut grid = Grid::new(config.width, config.height);
        let mut rng = StdRng::seed_from_u64(config.seed);
        let start = [config.width / 2, config.height / 2];
        let mut policy = build_policy(config, &grid, start);

        let mut canvas = Canvas::new(config.width, config.height, config.thickness);
        canvas.open_cell(start);

        // The construction animation lands in memory first; the lead frame
        // needs the finished maze, which only exists after the run.
        let mut animation = GifEncoder::new(Vec::new());
        let mut carves = 0usize;
        let mut animation_frames = 0usize;

        while !policy.is_done() {
            let Some(event) = policy.step(&mut grid, &mut rng) else {
                continue;
            };
            canvas.apply_carve(&event);
            carves += 1;
            if let Some(reporter) = progress {
                reporter.carve();
            }
            if canvas.pending_changes() >= config.cells_per_frame {
                if let Some(frame) = canvas.take_frame(config.frame_delay) {
                    animation.write_frame(&frame)?;
                    animation_frames += 1;
                }
            }
        }
        debug_assert_eq!(policy.visited_count(), grid.cell_count());
        if let Some(frame) = canvas.take_frame(config.frame_delay) {
            animation.write_frame(&frame)?;
            animation_frames += 1;
        }

        let mut encoder = GifEncoder::new(sink);
        encoder.write_header(
            config.pixel_width() as u16,
            config.pixel_height() as u16,
            &self.palette,
        )?;
        encoder.write_frame(&canvas.full_frame(0, HIGHLIGHT_INDEX))?;
        encoder.write_hold_frame(LEAD_IN_DELAY)?;
        encoder.append_encoded(&animation.into_inner())?;
        encoder.write_hold_frame(FINAL_HOLD_DELAY)?;
        encoder.finish()?;

        Ok(RunSummary {
            carves,
            animation_frames,
            total_frames: animation_frames + 3,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::EngineConfig;
    use crate::algorithm::policy::AlgorithmKind;

    fn small_config() -> EngineConfig {
        EngineConfig {
            width: 4,
            height: 4,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = EngineConfig {
            width: 0,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_canvas() {
        let config = EngineConfig {
            width: 9_000,
            height: 10,
            thickness: 8,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_thickness() {
        let config = EngineConfig {
            thickness: usize::MAX / 4,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_bias() {
        let config = EngineConfig {
            algorithm: AlgorithmKind::Hybrid,
            stack_bias: 1.5,
            ..small_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }
}
