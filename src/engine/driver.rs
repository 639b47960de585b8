//! Engine driver task.
//!
//! The engine and its interval tick source are moved into a single tokio
//! task. Commands and ticks are handled one at a time in that task, so a
//! disarm always lands before the next tick is polled.

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::types::EngineSnapshot;

use super::tick::{IntervalTickSource, TickSource};
use super::timer::{EngineCommand, TimerEngine, TimerEvent};

/// Requests sent from an [`EngineHandle`] to the driver task.
#[derive(Debug)]
enum EngineRequest {
    Apply {
        command: EngineCommand,
        reply: oneshot::Sender<EngineSnapshot>,
    },
    Snapshot {
        reply: oneshot::Sender<EngineSnapshot>,
    },
    Shutdown,
}

// ============================================================================
// EngineHandle
// ============================================================================

/// Cloneable handle for sending commands to a running engine task.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    request_tx: mpsc::UnboundedSender<EngineRequest>,
}

impl EngineHandle {
    /// Starts or resumes the countdown.
    pub async fn start(&self) -> Result<EngineSnapshot> {
        self.apply(EngineCommand::Start).await
    }

    /// Pauses the countdown.
    pub async fn pause(&self) -> Result<EngineSnapshot> {
        self.apply(EngineCommand::Pause).await
    }

    /// Resets the current session.
    pub async fn reset(&self) -> Result<EngineSnapshot> {
        self.apply(EngineCommand::Reset).await
    }

    /// Skips to the next session.
    pub async fn skip(&self) -> Result<EngineSnapshot> {
        self.apply(EngineCommand::Skip).await
    }

    /// Applies a command and returns the resulting state.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine task has stopped.
    pub async fn apply(&self, command: EngineCommand) -> Result<EngineSnapshot> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(EngineRequest::Apply { command, reply })?;
        reply_rx
            .await
            .with_context(|| format!("timer engine dropped {:?} command", command))
    }

    /// Returns the current state.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine task has stopped.
    pub async fn snapshot(&self) -> Result<EngineSnapshot> {
        let (reply, reply_rx) = oneshot::channel();
        self.send(EngineRequest::Snapshot { reply })?;
        reply_rx.await.context("timer engine dropped snapshot request")
    }

    /// Asks the engine task to stop. Safe to call more than once.
    pub fn shutdown(&self) {
        let _ = self.request_tx.send(EngineRequest::Shutdown);
    }

    fn send(&self, request: EngineRequest) -> Result<()> {
        self.request_tx
            .send(request)
            .map_err(|_| anyhow!("timer engine is not running"))
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Spawns an engine task ticking once per second.
///
/// Events are delivered on `event_tx`. The task ends when
/// [`EngineHandle::shutdown`] is called or every handle is dropped.
pub fn spawn_engine(event_tx: mpsc::UnboundedSender<TimerEvent>) -> (EngineHandle, JoinHandle<()>) {
    spawn_engine_with(IntervalTickSource::new(), event_tx)
}

/// Spawns an engine task with a custom interval tick source.
pub fn spawn_engine_with(
    tick_source: IntervalTickSource,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
) -> (EngineHandle, JoinHandle<()>) {
    let (request_tx, request_rx) = mpsc::unbounded_channel();
    let engine = TimerEngine::new(tick_source, event_tx);
    let task = tokio::spawn(run(engine, request_rx));
    (EngineHandle { request_tx }, task)
}

async fn run(
    mut engine: TimerEngine<IntervalTickSource>,
    mut request_rx: mpsc::UnboundedReceiver<EngineRequest>,
) {
    debug!("timer engine task started");

    loop {
        tokio::select! {
            request = request_rx.recv() => match request {
                Some(EngineRequest::Apply { command, reply }) => {
                    engine.apply(command);
                    let _ = reply.send(engine.snapshot());
                }
                Some(EngineRequest::Snapshot { reply }) => {
                    let _ = reply.send(engine.snapshot());
                }
                Some(EngineRequest::Shutdown) | None => break,
            },
            () = engine.tick_source_mut().fired() => {
                engine.tick();
            }
        }
    }

    engine.tick_source_mut().disarm();
    debug!("timer engine task stopped");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Session, TimerState};
    use tokio::time::{sleep, Duration};

    #[tokio::test(start_paused = true)]
    async fn test_snapshot_of_new_engine() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot, EngineSnapshot::initial());

        handle.shutdown();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_second() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        handle.start().await.unwrap();
        sleep(Duration::from_millis(3_500)).await;

        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot.state, TimerState::Running);
        assert_eq!(snapshot.remaining_seconds, 1497);

        let mut ticks = 0;
        while let Ok(event) = rx.try_recv() {
            assert!(matches!(event, TimerEvent::Tick { .. }));
            ticks += 1;
        }
        assert_eq!(ticks, 3);

        handle.shutdown();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_pause() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        handle.start().await.unwrap();
        sleep(Duration::from_millis(2_500)).await;
        let paused = handle.pause().await.unwrap();
        while rx.try_recv().is_ok() {}

        sleep(Duration::from_secs(10)).await;

        assert!(rx.try_recv().is_err(), "no tick may follow a pause");
        let snapshot = handle.snapshot().await.unwrap();
        assert_eq!(snapshot, paused);
        assert_eq!(snapshot.remaining_seconds, 1498);

        handle.shutdown();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_skip_reply() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        let snapshot = handle.skip().await.unwrap();
        assert_eq!(snapshot.session, Session::ShortBreak);
        assert_eq!(snapshot.remaining_seconds, 300);

        handle.shutdown();
        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_commands_fail_after_shutdown() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        handle.shutdown();
        task.await.unwrap();

        assert!(handle.start().await.is_err());
        assert!(handle.snapshot().await.is_err());
        handle.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_task_ends_when_handles_dropped() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let (handle, task) = spawn_engine(tx);

        handle.start().await.unwrap();
        drop(handle);

        task.await.unwrap();
    }
}
