/// Fire-and-forget audio/visual cues.
///
/// Nothing returned from a sink influences game rules.
pub trait FeedbackSink {
    /// Plays one of two clips, chosen by the sink.
    fn play_random_feedback(&mut self, clips: [&str; 2]);

    /// Fires a named sprite animation trigger.
    fn trigger_animation(&mut self, name: &str);
}
