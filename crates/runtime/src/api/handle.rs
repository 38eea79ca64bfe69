//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! stepping the simulation or streaming events from specific topics.
use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{CardinalDirection, DamageOutcome, EntityId, MoveOutcome, Vec2};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::Command;
use crate::world::{FrameReport, TurnReport, WorldSnapshot};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Sends a command and waits for the worker's reply.
    async fn request<T>(&self, build: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(build(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Run one enemy turn: every live enemy decides and acts once.
    pub async fn advance_turn(&self) -> Result<TurnReport> {
        self.request(|reply| Command::AdvanceTurn { reply }).await
    }

    /// Hit an enemy with `amount` damage from an attacker at `attacker`.
    pub async fn apply_damage(
        &self,
        enemy: EntityId,
        amount: i32,
        attacker: Vec2,
    ) -> Result<DamageOutcome> {
        self.request(|reply| Command::ApplyDamage {
            enemy,
            amount,
            attacker,
            reply,
        })
        .await?
    }

    /// Advance knockback animations by `dt` seconds.
    pub async fn tick(&self, dt: f32) -> Result<FrameReport> {
        self.request(|reply| Command::Tick { dt, reply }).await
    }

    /// Step the player one tile.
    pub async fn move_player(&self, direction: CardinalDirection) -> Result<MoveOutcome> {
        self.request(|reply| Command::MovePlayer { direction, reply })
            .await?
    }

    /// Query the current world (read-only snapshot)
    pub async fn snapshot(&self) -> Result<WorldSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    /// Ask the simulation worker to stop. Later requests fail with
    /// [`RuntimeError::CommandChannelClosed`] or
    /// [`RuntimeError::ReplyChannelClosed`].
    pub(crate) async fn request_shutdown(&self) -> Result<()> {
        self.command_tx
            .send(Command::Shutdown)
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Turn` - Turn starts, enemy outcomes, game over
    /// - `Topic::Combat` - Hits in both directions and feedback cues
    /// - `Topic::Animation` - Knockbacks returning to rest
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut combat_rx = handle.subscribe(Topic::Combat);
    /// while let Ok(event) = combat_rx.recv().await {
    ///     // Handle combat events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    ///
    /// Returns a map of topic to receiver for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> std::collections::HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }
}
