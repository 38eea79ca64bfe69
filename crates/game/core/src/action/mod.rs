//! Action domain - the single grid step an enemy may take per turn.
//!
//! Enemies only ever step along one axis per turn. [`step_toward`] picks that
//! axis greedily; the step itself is carried out by a [`crate::GridMover`].

pub mod movement;

pub use movement::{CardinalDirection, step_toward};
