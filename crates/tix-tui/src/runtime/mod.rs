//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! This is the "Elm runtime" boundary: all side effects happen here.
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async task handlers send `UiEvent`s directly to `inbox_tx`; the runtime
//! drains `inbox_rx` each frame. This keeps event collection in one place
//! with no per-operation receivers.

use std::future::Future;
use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tix_core::auth::AuthClient;
use tix_core::session::Session;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};
use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::state::AppState;
use crate::{render, terminal, update};

/// Target frame interval while a request is in flight.
pub const FRAME_DURATION: Duration = Duration::from_millis(50);

/// Poll duration when idle (no request, no pending banner).
/// Longer timeout reduces CPU usage when nothing is happening.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

type UiEventSender = mpsc::UnboundedSender<UiEvent>;
type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

/// Full-screen TUI runtime.
///
/// Owns the terminal and state. Runs the event loop and executes effects.
/// Terminal state is restored on drop and on panic.
pub struct TuiRuntime {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    pub state: AppState,
    /// Auth API client shared with spawned tasks.
    client: Arc<AuthClient>,
    /// Inbox sender - handlers send events here.
    inbox_tx: UiEventSender,
    /// Inbox receiver - runtime drains this each frame.
    inbox_rx: UiEventReceiver,
    /// Last time a Tick event was emitted.
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn new(base_url: String, session: Option<Session>) -> Result<Self> {
        // Set up panic hook BEFORE entering alternate screen
        terminal::install_panic_hook();

        // Enter alternate screen and raw mode
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let client = Arc::new(AuthClient::new(base_url.clone()));
        let state = AppState::new(base_url, session);

        // Create inbox channel for async event collection
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            client,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn run(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.should_quit {
            let events = self.collect_events()?;

            for event in events {
                // Render on ticks and on input; async results surface on the
                // next tick at the latest.
                if matches!(&event, UiEvent::Tick | UiEvent::Terminal(_)) {
                    dirty = true;
                }

                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox and the terminal, emitting ticks.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Fast polling while a request is in flight or a banner is waiting to
        // dismiss; slow polling otherwise to save CPU.
        let needs_fast_poll = self.state.tasks.is_any_running()
            || !matches!(self.state.login.submit, crate::state::SubmitState::Idle)
            || !matches!(self.state.signup.submit, crate::state::SubmitState::Idle);
        let tick_interval = if needs_fast_poll {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        // Drain inbox - all async results arrive here
        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Poll terminal events:
        // - If we already have events to process, do non-blocking poll
        // - Otherwise, block until the next tick is due
        let time_until_tick = tick_interval.saturating_sub(self.last_tick.elapsed());
        let poll_duration = if events.is_empty() {
            time_until_tick
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any remaining buffered events (non-blocking)
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Dispatch
    // ========================================================================

    /// Executes effects returned by the reducer.
    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async task with a uniform TaskStarted/TaskCompleted lifecycle.
    ///
    /// The completion carries the task id, so the reducer can discard results
    /// whose task was superseded or torn down in the meantime.
    fn spawn_task<F, Fut>(&self, kind: TaskKind, id: TaskId, f: F)
    where
        F: FnOnce(CancellationToken) -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        let cancel = CancellationToken::new();
        let started = TaskStarted {
            id,
            cancel: Some(cancel.clone()),
        };
        let _ = tx.send(UiEvent::TaskStarted { kind, started });
        tokio::spawn(async move {
            let inner = f(cancel).await;
            let completed = TaskCompleted {
                id,
                result: Box::new(inner),
            };
            let _ = tx.send(UiEvent::TaskCompleted { kind, completed });
        });
    }

    /// Executes a single effect by dispatching to the appropriate handler.
    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::SubmitLogin { task, credentials } => {
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::Login, task, move |cancel| async move {
                    let result = tokio::select! {
                        () = cancel.cancelled() => Err("Cancelled.".to_string()),
                        r = client.login(&credentials) => r.map_err(|e| e.message),
                    };
                    UiEvent::Auth(AuthUiEvent::LoginFinished { result })
                });
            }

            UiEffect::SubmitSignup { task, registration } => {
                let client = Arc::clone(&self.client);
                self.spawn_task(TaskKind::Signup, task, move |cancel| async move {
                    let result = tokio::select! {
                        () = cancel.cancelled() => Err("Cancelled.".to_string()),
                        r = client.signup(&registration) => r.map_err(|e| e.message),
                    };
                    UiEvent::Auth(AuthUiEvent::SignupFinished { result })
                });
            }

            UiEffect::SaveSession { payload } => {
                let session = Session::from_payload(&payload);
                if let Err(e) = session.save() {
                    tracing::warn!(error = %e, "failed to save session");
                }
            }

            UiEffect::CancelTask { token } => token.cancel(),
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
