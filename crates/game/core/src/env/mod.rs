//! Traits describing the collaborators an enemy talks to.
//!
//! The grid move primitive, the tracked target and the audio/visual feedback
//! channel are owned elsewhere. The [`TurnEnv`] aggregate bundles them so a
//! turn can reach everything it needs without a hard coupling to concrete
//! implementations or to process-wide singletons.
mod actors;
mod feedback;
mod map;

pub use actors::{TargetEntity, TargetLookup};
pub use feedback::FeedbackSink;
pub use map::{EntityKind, GridMover, MoveOutcome};

/// Collaborators borrowed for the duration of one turn.
pub struct TurnEnv<'a> {
    pub mover: &'a mut dyn GridMover,
    pub targets: &'a mut dyn TargetLookup,
    pub feedback: &'a mut dyn FeedbackSink,
}

impl<'a> TurnEnv<'a> {
    pub fn new(
        mover: &'a mut dyn GridMover,
        targets: &'a mut dyn TargetLookup,
        feedback: &'a mut dyn FeedbackSink,
    ) -> Self {
        Self {
            mover,
            targets,
            feedback,
        }
    }
}
