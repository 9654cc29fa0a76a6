//! Command-line interface for generating maze animation files

use crate::algorithm::executor::{EngineConfig, MazeAnimator};
use crate::algorithm::policy::AlgorithmKind;
use crate::io::configuration::{
    DEFAULT_ALGORITHM, DEFAULT_CELLS_PER_FRAME, DEFAULT_FRAME_DELAY, DEFAULT_HEIGHT,
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_PASSAGE_COLOR, DEFAULT_SEED, DEFAULT_STACK_BIAS,
    DEFAULT_THICKNESS, DEFAULT_WALL_COLOR, DEFAULT_WIDTH, PROGRESS_MIN_CELLS,
};
use crate::io::error::{MazeError, Result};
use crate::io::progress::ProgressReporter;
use crate::render::palette::Palette;
use clap::Parser;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "torusmaze")]
#[command(
    author,
    version,
    about = "Generate an animated GIF of maze growth on a toroidal grid"
)]
/// Command-line arguments for the maze animation tool
pub struct Cli {
    /// Output GIF file
    #[arg(value_name = "FILE")]
    pub output: PathBuf,

    /// Maze width in cells
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Pixel width (and height) of each wall and passage unit
    #[arg(short, long, default_value_t = DEFAULT_THICKNESS)]
    pub thickness: usize,

    /// Growth algorithm: 1 depth-first, 2 random frontier, 3 hybrid
    #[arg(short, long, default_value_t = DEFAULT_ALGORITHM,
          value_parser = clap::value_parser!(u8).range(1..=3))]
    pub algorithm: u8,

    /// Number of cells to draw per animation frame
    #[arg(long, default_value_t = DEFAULT_CELLS_PER_FRAME)]
    pub speed: usize,

    /// Frame delay in 1/100ths of a second
    #[arg(long, default_value_t = DEFAULT_FRAME_DELAY)]
    pub delay: u16,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Hybrid policy's probability of advancing depth-first
    #[arg(long, default_value_t = DEFAULT_STACK_BIAS)]
    pub stack_bias: f64,

    /// Passage foreground color
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"],
          default_values_t = DEFAULT_PASSAGE_COLOR)]
    pub fg: Vec<u8>,

    /// Wall background color
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"],
          default_values_t = DEFAULT_WALL_COLOR)]
    pub bg: Vec<u8>,

    /// Highlight color for the completed-maze lead frame
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"],
          default_values_t = DEFAULT_HIGHLIGHT_COLOR)]
    pub highlight: Vec<u8>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build the validated engine configuration
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidParameter`] for an unknown algorithm
    /// identifier; dimension checks happen in [`EngineConfig::validate`].
    pub fn engine_config(&self) -> Result<EngineConfig> {
        Ok(EngineConfig {
            width: self.width,
            height: self.height,
            thickness: self.thickness,
            algorithm: AlgorithmKind::from_id(self.algorithm)?,
            cells_per_frame: self.speed,
            frame_delay: self.delay,
            seed: self.seed,
            stack_bias: self.stack_bias,
        })
    }

    /// Assemble the palette from the color arguments
    pub fn palette(&self) -> Palette {
        Palette {
            wall: color_triple(&self.bg, DEFAULT_WALL_COLOR),
            passage: color_triple(&self.fg, DEFAULT_PASSAGE_COLOR),
            highlight: color_triple(&self.highlight, DEFAULT_HIGHLIGHT_COLOR),
        }
    }

    /// Check if progress should be displayed for this run
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.width * self.height >= PROGRESS_MIN_CELLS
    }
}

/// Collapse a clap-validated triple into an array
fn color_triple(values: &[u8], fallback: [u8; 3]) -> [u8; 3] {
    values.try_into().unwrap_or(fallback)
}

/// Drives one generation run from parsed arguments to an output file
pub struct GifWriter {
    cli: Cli,
    progress: Option<ProgressReporter>,
}

impl GifWriter {
    /// Create a writer for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Generate the maze and write the GIF to the configured path
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails, the output file cannot be
    /// created, or a write to it fails.
    // Allow print for user feedback on completion
    #[allow(clippy::print_stderr)]
    pub fn run(&mut self) -> Result<()> {
        let config = self.cli.engine_config()?;
        let animator = MazeAnimator::new(config, self.cli.palette())?;

        if self.cli.should_show_progress() {
            // The start cell is visited before the first carve.
            let carves = (config.width * config.height).saturating_sub(1);
            self.progress = Some(ProgressReporter::new(carves as u64));
        }

        let file = File::create(&self.cli.output).map_err(|e| MazeError::FileSystem {
            path: self.cli.output.clone(),
            operation: "create file",
            source: e,
        })?;

        let summary = animator.generate_with_progress(BufWriter::new(file), self.progress.as_ref())?;

        if let Some(reporter) = &self.progress {
            reporter.finish();
        }
        if !self.cli.quiet {
            eprintln!(
                "Wrote {}: {} carves across {} frames",
                self.cli.output.display(),
                summary.carves,
                summary.total_frames
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn test_defaults_mirror_configuration() {
        let cli = Cli::parse_from(["torusmaze", "out.gif"]);
        assert_eq!(cli.width, 100);
        assert_eq!(cli.algorithm, 1);
        assert_eq!(cli.speed, 10);
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.fg, vec![200, 200, 200]);
    }

    #[test]
    fn test_algorithm_range_is_enforced() {
        assert!(Cli::try_parse_from(["torusmaze", "out.gif", "--algorithm", "4"]).is_err());
        assert!(Cli::try_parse_from(["torusmaze", "out.gif", "--algorithm", "3"]).is_ok());
    }

    #[test]
    fn test_color_arguments_collect_triples() {
        let cli = Cli::parse_from(["torusmaze", "out.gif", "--bg", "1", "2", "3"]);
        let palette = cli.palette();
        assert_eq!(palette.wall, [1, 2, 3]);
        assert_eq!(palette.passage, [200, 200, 200]);
    }
}
