//! Worker tasks that back the runtime orchestration.
//!
//! The simulation worker executes every command against the world, while the
//! frame driver feeds it ticks on the frame cadence.

mod frame;
mod simulation;

pub use frame::{FrameDriver, frame_period};
pub use simulation::{Command, SimulationWorker};
