//! Frame driver: resumes knockback animations at a fixed rate.

use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::api::{Result, RuntimeError, RuntimeHandle};

/// Interval between frames at `frame_rate_hz`.
///
/// Rejects rates that are not finite and positive, and rates so high that
/// the period rounds down to zero.
pub fn frame_period(frame_rate_hz: f32) -> Result<Duration> {
    if !(frame_rate_hz.is_finite() && frame_rate_hz > 0.0) {
        return Err(RuntimeError::InvalidFrameRate(frame_rate_hz));
    }
    match Duration::try_from_secs_f32(frame_rate_hz.recip()) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => Err(RuntimeError::InvalidFrameRate(frame_rate_hz)),
    }
}

/// Sends a `Tick` with the measured elapsed time on every interval.
///
/// Frames that fall behind are delayed rather than bunched up, and the
/// measured `dt` covers the whole gap, so animation speed stays tied to wall
/// time.
pub struct FrameDriver {
    handle: RuntimeHandle,
    period: Duration,
}

impl FrameDriver {
    /// `period` must be non-zero; see [`frame_period`].
    pub fn new(handle: RuntimeHandle, period: Duration) -> Self {
        Self { handle, period }
    }

    /// Main driver loop. Ends when the simulation worker goes away.
    pub async fn run(self) {
        info!(
            target: "runtime::frame",
            period_us = self.period.as_micros() as u64,
            "FrameDriver started"
        );

        let mut interval = time::interval(self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut last = Instant::now();

        loop {
            interval.tick().await;
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;

            if let Err(error) = self.handle.tick(dt).await {
                debug!(target: "runtime::frame", %error, "FrameDriver stopping");
                break;
            }
        }
    }
}
