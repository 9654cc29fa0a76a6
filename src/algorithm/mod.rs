//! Maze growth policies and the animation pipeline driver

/// Explicit-stack depth-first growth (algorithm 1)
pub mod depth_first;
/// Engine loop wiring policies to the canvas and encoder
pub mod executor;
/// Uniform random frontier growth (algorithm 2)
pub mod frontier;
/// Stack/frontier hybrid growth (algorithm 3)
pub mod hybrid;
/// Shared policy trait, carve events, and visitation tracking
pub mod policy;

pub use executor::{EngineConfig, MazeAnimator, RunSummary};
pub use policy::{AlgorithmKind, CarveEvent, GrowthPolicy};
