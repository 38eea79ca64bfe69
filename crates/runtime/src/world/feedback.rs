//! Audio and sprite cues, chosen at random and kept for the event bus.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use game_core::FeedbackSink;

/// One cue emitted by an enemy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackCue {
    /// A sound clip to play.
    Sound(String),
    /// A sprite animation trigger to fire.
    Animation(String),
}

/// [`FeedbackSink`] that picks one of each clip pair with an RNG and queues
/// the resulting cues until the worker publishes them.
#[derive(Debug)]
pub struct RandomizedFeedback {
    rng: StdRng,
    pending: Vec<FeedbackCue>,
}

impl RandomizedFeedback {
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic clip selection, for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            pending: Vec::new(),
        }
    }

    pub fn pending(&self) -> &[FeedbackCue] {
        &self.pending
    }

    /// Takes every cue queued since the last drain.
    pub fn drain(&mut self) -> Vec<FeedbackCue> {
        std::mem::take(&mut self.pending)
    }
}

impl FeedbackSink for RandomizedFeedback {
    fn play_random_feedback(&mut self, clips: [&str; 2]) {
        let clip = clips[self.rng.gen_range(0..clips.len())];
        debug!(target: "runtime::feedback", clip, "play sound");
        self.pending.push(FeedbackCue::Sound(clip.to_string()));
    }

    fn trigger_animation(&mut self, name: &str) {
        debug!(target: "runtime::feedback", trigger = name, "fire animation trigger");
        self.pending.push(FeedbackCue::Animation(name.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_one_of_the_two_clips() {
        let mut feedback = RandomizedFeedback::seeded(7);
        for _ in 0..32 {
            feedback.play_random_feedback(["a", "b"]);
        }
        let cues = feedback.drain();
        assert_eq!(cues.len(), 32);
        assert!(cues.iter().all(|cue| matches!(
            cue,
            FeedbackCue::Sound(clip) if clip == "a" || clip == "b"
        )));
        assert!(feedback.pending().is_empty());
    }

    #[test]
    fn same_seed_same_choices() {
        let mut left = RandomizedFeedback::seeded(42);
        let mut right = RandomizedFeedback::seeded(42);
        for _ in 0..16 {
            left.play_random_feedback(["x", "y"]);
            right.play_random_feedback(["x", "y"]);
        }
        assert_eq!(left.drain(), right.drain());
    }

    #[test]
    fn keeps_cue_order() {
        let mut feedback = RandomizedFeedback::seeded(1);
        feedback.trigger_animation("enemyAttack");
        feedback.play_random_feedback(["hit", "hit"]);
        assert_eq!(
            feedback.drain(),
            vec![
                FeedbackCue::Animation("enemyAttack".into()),
                FeedbackCue::Sound("hit".into()),
            ]
        );
    }
}
