//! Interactive timer shell.
//!
//! Connects the pieces around the engine task:
//!
//! ```text
//!  stdin lines ──▶ resolve_input ──▶ EngineHandle ──▶ engine task
//!                                                        │
//!  stdout ◀── StatusRenderer ◀── TimerEvent ◀────────────┘
//!                                  │
//!                                  └─ Completed ──▶ notifier + sound
//! ```
//!
//! The shell runs until `q`, end of input or Ctrl-C.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cli::{help_text, OutputMode, RunArgs, StatusRenderer};
use crate::engine::{spawn_engine, EngineHandle, TimerEvent};
use crate::menu::{resolve_input, MenuAction, MenuBuilder, MenuConfig};
use crate::notification::{
    create_completion_content, create_notification_request, NotificationSender,
};
use crate::sound::{SoundPlayer, SoundSource};
use crate::types::{EngineSnapshot, Session};

// ============================================================================
// AppConfig
// ============================================================================

/// Runtime options of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Start the first work session without waiting for input
    pub auto_start: bool,
    /// Play a sound when a session completes
    pub sound: bool,
    /// Post a notification when a session completes
    pub notifications: bool,
    /// Status output format
    pub output: OutputMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auto_start: false,
            sound: true,
            notifications: true,
            output: OutputMode::StatusLine,
        }
    }
}

impl From<&RunArgs> for AppConfig {
    fn from(args: &RunArgs) -> Self {
        Self {
            auto_start: args.start,
            sound: !args.no_sound,
            notifications: !args.no_notify,
            output: if args.json {
                OutputMode::Json
            } else {
                OutputMode::StatusLine
            },
        }
    }
}

// ============================================================================
// App
// ============================================================================

/// The interactive shell around one timer engine.
pub struct App<N, S, W: Write> {
    config: AppConfig,
    notifier: Option<N>,
    player: Option<S>,
    sound_source: SoundSource,
    renderer: StatusRenderer<W>,
    menu_builder: MenuBuilder,
    menu: MenuConfig,
}

impl<N, S, W> App<N, S, W>
where
    N: NotificationSender,
    S: SoundPlayer,
    W: Write,
{
    /// Creates the shell. A disabled notifier or player in `config` is dropped.
    pub fn new(
        config: AppConfig,
        notifier: Option<N>,
        player: Option<S>,
        renderer: StatusRenderer<W>,
    ) -> Self {
        let menu_builder = MenuBuilder::new();
        let menu = menu_builder.build(&EngineSnapshot::initial());
        Self {
            config,
            notifier: notifier.filter(|_| config.notifications),
            player: player.filter(|_| config.sound),
            sound_source: SoundSource::Chime,
            renderer,
            menu_builder,
            menu,
        }
    }

    /// Sets the sound played on completion.
    #[must_use]
    pub fn with_sound_source(mut self, source: SoundSource) -> Self {
        self.sound_source = source;
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn renderer(&self) -> &StatusRenderer<W> {
        &self.renderer
    }

    /// Runs the shell, reading commands line by line from `input`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// engine task stops unexpectedly.
    pub async fn run<R>(&mut self, input: R) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let (engine, task) = spawn_engine(event_tx);

        let result = self.event_loop(&engine, &mut event_rx, input).await;

        engine.shutdown();
        task.await.context("timer engine task failed")?;
        self.renderer.finish()?;
        result
    }

    async fn event_loop<R>(
        &mut self,
        engine: &EngineHandle,
        event_rx: &mut mpsc::UnboundedReceiver<TimerEvent>,
        input: R,
    ) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let snapshot = engine.snapshot().await?;
        self.renderer.show_menu(&self.menu)?;
        self.renderer.render(&snapshot)?;

        if self.config.auto_start {
            let snapshot = engine.start().await?;
            self.refresh(&snapshot)?;
        }

        let mut lines = input.lines();
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                line = lines.next_line() => match line.context("failed to read input")? {
                    Some(line) => {
                        if !self.handle_input(engine, &line).await? {
                            break;
                        }
                    }
                    None => {
                        debug!("End of input");
                        break;
                    }
                },
                Some(event) = event_rx.recv() => self.handle_event(event).await?,
                _ = &mut ctrl_c => {
                    debug!("Interrupted");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handles one input line. Returns false when the shell should stop.
    async fn handle_input(&mut self, engine: &EngineHandle, line: &str) -> Result<bool> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(true);
        }

        match resolve_input(line, &self.menu) {
            Ok(MenuAction::Quit) => return Ok(false),
            Ok(MenuAction::Help) => {
                self.renderer.show_hint(help_text())?;
                self.renderer.show_menu(&self.menu)?;
                let snapshot = engine.snapshot().await?;
                self.renderer.render(&snapshot)?;
            }
            Ok(action) => {
                if let Some(command) = action.to_command() {
                    debug!(action = action.name(), "Applying menu action");
                    let snapshot = engine.apply(command).await?;
                    self.refresh(&snapshot)?;
                }
            }
            Err(candidates) => {
                let hint = match candidates.first() {
                    Some(action) => format!("'{}' is not available right now", action.name()),
                    None => format!("Unknown input '{}'. Press h for help.", line),
                };
                self.renderer.show_hint(&hint)?;
                let snapshot = engine.snapshot().await?;
                self.renderer.render(&snapshot)?;
            }
        }

        Ok(true)
    }

    async fn handle_event(&mut self, event: TimerEvent) -> Result<()> {
        match event {
            TimerEvent::Tick { snapshot } => self.refresh(&snapshot),
            TimerEvent::Completed { snapshot } => {
                self.on_completed(snapshot.session).await;
                Ok(())
            }
        }
    }

    /// Shows the menu when it changed, then the status.
    fn refresh(&mut self, snapshot: &EngineSnapshot) -> Result<()> {
        let menu = self.menu_builder.build(snapshot);
        if menu != self.menu {
            self.menu = menu;
            self.renderer.show_menu(&self.menu)?;
        }
        self.renderer.render(snapshot)?;
        Ok(())
    }

    /// Plays the completion sound, then notifies. Failures are only logged.
    async fn on_completed(&mut self, completed: Session) {
        info!(session = completed.as_str(), "Session completed");

        if let Some(player) = &self.player {
            if let Err(e) = player.play(&self.sound_source) {
                warn!("Failed to play completion sound: {}", e);
            }
        }

        if let Some(notifier) = &self.notifier {
            let request = create_notification_request(create_completion_content(completed));
            if let Err(e) = notifier.send(&request).await {
                warn!("Failed to send notification: {}", e);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
