//! Constants and runtime configuration defaults

// Default values for configurable parameters
/// Default maze width in cells
pub const DEFAULT_WIDTH: usize = 100;
/// Default maze height in cells
pub const DEFAULT_HEIGHT: usize = 100;
/// Default pixel thickness of each canvas unit
pub const DEFAULT_THICKNESS: usize = 1;
/// Default growth policy identifier
pub const DEFAULT_ALGORITHM: u8 = 1;
/// Default number of carved cells batched into one animation frame
pub const DEFAULT_CELLS_PER_FRAME: usize = 10;
/// Default animation frame delay in 1/100ths of a second
pub const DEFAULT_FRAME_DELAY: u16 = 2;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default probability of the hybrid policy taking the depth-first rule
pub const DEFAULT_STACK_BIAS: f64 = 0.5;

// Default palette colors
/// Default passage foreground color
pub const DEFAULT_PASSAGE_COLOR: [u8; 3] = [200, 200, 200];
/// Default wall / background color
pub const DEFAULT_WALL_COLOR: [u8; 3] = [10, 10, 10];
/// Default highlight color for the completed-maze lead frame
pub const DEFAULT_HIGHLIGHT_COLOR: [u8; 3] = [20, 20, 20];

// Stream framing around the construction animation
/// Delay shown on the completed-maze lead frame, in 1/100ths of a second
pub const LEAD_IN_DELAY: u16 = 50;
/// Delay held on the final frame, in 1/100ths of a second
pub const FINAL_HOLD_DELAY: u16 = 300;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension in cells
pub const MAX_GRID_DIMENSION: usize = 10_000;
/// Maximum canvas extent on either axis; GIF descriptors store u16 sizes
pub const MAX_CANVAS_EXTENT: usize = u16::MAX as usize;

// Progress bar display settings
/// Minimum cell count before a progress bar is worth drawing
pub const PROGRESS_MIN_CELLS: usize = 1_000;
