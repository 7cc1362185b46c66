//! One-shot commands with timed success feedback
//!
//! A [`TimedCommand`] runs its operation on a worker thread. On success the
//! action indicator hides and a success indicator shows at full strength for
//! the first half of the transition, fades out over the second half, and only
//! once the whole transition has elapsed does the command become ready again.
//! Failures end the run immediately and stay visible until acknowledged.
//!
//! Time is passed in explicitly so callers can drive the feedback from their
//! own frame clock.

use crate::cart::Cart;
use crate::chr::{export_chr_sheets, AssetRenderer};
use crate::config::EXPORT_SCALE_MAX;
use crate::error::{DisError, InspectError};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default time from success until the command is ready again
pub const TRANSITION_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum CommandState {
    Idle,
    Running,
    Succeeded,
    Failed(InspectError),
}

/// Consumes the payload of a successful operation
pub trait CompletionHandler: Send {
    fn complete(&mut self, payload: &[u8]) -> Result<(), InspectError>;
}

type WorkResult = Result<Vec<u8>, InspectError>;

struct Worker {
    rx: Receiver<WorkResult>,
    handle: Option<JoinHandle<()>>,
}

impl Worker {
    fn spawn<F>(op: F) -> Self
    where
        F: FnOnce() -> WorkResult + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            // Receiver may be gone if the command was dropped mid-run
            let _ = tx.send(op());
        });
        Worker {
            rx,
            handle: Some(handle),
        }
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("command worker panicked");
            }
        }
    }
}

pub struct TimedCommand<H> {
    handler: H,
    transition: Duration,
    state: CommandState,
    in_progress: bool,
    failed: bool,
    error: Option<InspectError>,
    action_visibility: f64,
    succeeded_at: Option<Instant>,
    worker: Option<Worker>,
    subscribers: Vec<Sender<CommandState>>,
}

impl<H: CompletionHandler> TimedCommand<H> {
    pub fn new(handler: H, transition: Duration) -> Self {
        TimedCommand {
            handler,
            transition,
            state: CommandState::Idle,
            in_progress: false,
            failed: false,
            error: None,
            action_visibility: 1.0,
            succeeded_at: None,
            worker: None,
            subscribers: Vec::new(),
        }
    }

    /// Observe every state transition from now on
    pub fn subscribe(&mut self) -> Receiver<CommandState> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// Start the operation. Returns false, doing nothing, while a previous
    /// run is still in progress.
    pub fn invoke<F>(&mut self, op: F) -> bool
    where
        F: FnOnce() -> WorkResult + Send + 'static,
    {
        if self.in_progress {
            debug!("command already in progress, ignoring invoke");
            return false;
        }
        self.failed = false;
        self.error = None;
        self.in_progress = true;
        self.succeeded_at = None;
        self.worker = Some(Worker::spawn(op));
        self.transition_to(CommandState::Running);
        true
    }

    /// Collect a finished result without blocking and advance the feedback
    /// timers to `now`
    pub fn update(&mut self, now: Instant) -> &CommandState {
        let polled = match &self.worker {
            Some(worker) => match worker.rx.try_recv() {
                Ok(result) => Some(result),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => Some(Err(InspectError::Unknown)),
            },
            None => None,
        };
        if let Some(result) = polled {
            self.finish(result, now);
        }
        self.tick(now);
        &self.state
    }

    /// Block until the running operation finishes, then update to `now`
    pub fn wait(&mut self, now: Instant) -> &CommandState {
        let received = self
            .worker
            .as_ref()
            .map(|worker| worker.rx.recv().unwrap_or(Err(InspectError::Unknown)));
        if let Some(result) = received {
            self.finish(result, now);
        }
        self.tick(now);
        &self.state
    }

    /// Dismiss a failure and return to idle
    pub fn acknowledge(&mut self) {
        if let CommandState::Failed(_) = self.state {
            self.failed = false;
            self.error = None;
            self.transition_to(CommandState::Idle);
        }
    }

    fn finish(&mut self, result: WorkResult, now: Instant) {
        if let Some(mut worker) = self.worker.take() {
            worker.join();
        }
        let outcome = result.and_then(|payload| self.handler.complete(&payload));
        match outcome {
            Ok(()) => {
                self.action_visibility = 0.0;
                self.succeeded_at = Some(now);
                self.transition_to(CommandState::Succeeded);
            }
            Err(err) => {
                info!("command failed: {}", err);
                self.failed = true;
                self.error = Some(err.clone());
                self.in_progress = false;
                self.transition_to(CommandState::Failed(err));
            }
        }
    }

    fn tick(&mut self, now: Instant) {
        let elapsed = match (&self.state, self.succeeded_at) {
            (CommandState::Succeeded, Some(at)) => now.saturating_duration_since(at),
            _ => return,
        };
        if elapsed >= self.transition {
            self.succeeded_at = None;
            self.action_visibility = 1.0;
            self.in_progress = false;
            self.transition_to(CommandState::Idle);
        }
    }

    fn transition_to(&mut self, state: CommandState) {
        debug!("command state {:?} -> {:?}", self.state, state);
        self.state = state;
        let state = &self.state;
        self.subscribers.retain(|tx| tx.send(state.clone()).is_ok());
    }

    pub fn state(&self) -> &CommandState {
        &self.state
    }

    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// User-visible failure flag
    pub fn failed(&self) -> bool {
        self.failed
    }

    pub fn error(&self) -> Option<&InspectError> {
        self.error.as_ref()
    }

    pub fn action_visibility(&self) -> f64 {
        self.action_visibility
    }

    /// Success indicator strength at `now`: held at 1 for the first half of
    /// the transition, then eased out to 0
    pub fn success_visibility(&self, now: Instant) -> f64 {
        let at = match (&self.state, self.succeeded_at) {
            (CommandState::Succeeded, Some(at)) => at,
            _ => return 0.0,
        };
        let elapsed = now.saturating_duration_since(at);
        if elapsed >= self.transition {
            return 0.0;
        }
        let half = self.transition / 2;
        if elapsed <= half {
            return 1.0;
        }
        let progress = (elapsed - half).as_secs_f64() / half.as_secs_f64();
        (1.0 - progress).powi(2)
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

/// System clipboard access
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), InspectError>;
}

/// Clipboard kept in memory and shared with whoever reads it back
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Arc<Mutex<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|c| c.clone())
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), InspectError> {
        let mut contents = self.contents.lock().map_err(|_| InspectError::Unknown)?;
        *contents = Some(text.to_string());
        Ok(())
    }
}

/// Delivers text payloads to a clipboard
pub struct ClipboardSink {
    clipboard: Box<dyn Clipboard>,
}

impl CompletionHandler for ClipboardSink {
    fn complete(&mut self, payload: &[u8]) -> Result<(), InspectError> {
        let text = std::str::from_utf8(payload).map_err(|_| InspectError::Unknown)?;
        self.clipboard.set_text(text)
    }
}

pub type ClipboardCopy = TimedCommand<ClipboardSink>;

impl TimedCommand<ClipboardSink> {
    pub fn clipboard(clipboard: Box<dyn Clipboard>, transition: Duration) -> Self {
        TimedCommand::new(ClipboardSink { clipboard }, transition)
    }

    /// Copy text produced up front
    pub fn copy_text(&mut self, text: String) -> bool {
        self.invoke(move || Ok(text.into_bytes()))
    }
}

/// Records the export report once a sheet export completes
#[derive(Debug, Default)]
pub struct ExportReport {
    done: bool,
    report: Option<String>,
}

impl CompletionHandler for ExportReport {
    fn complete(&mut self, payload: &[u8]) -> Result<(), InspectError> {
        let report = String::from_utf8(payload.to_vec()).map_err(|_| InspectError::Unknown)?;
        debug!("chr export report:\n{}", report);
        self.report = Some(report);
        self.done = true;
        Ok(())
    }
}

impl ExportReport {
    /// Forget the previous run's result
    pub fn reset(&mut self) {
        self.done = false;
        self.report = None;
    }
}

/// Exports every CHR bank of a cart as tile sheet images
pub struct ChrExport {
    command: TimedCommand<ExportReport>,
    cart: Arc<Cart>,
    renderer: Arc<dyn AssetRenderer>,
    scale: u32,
    prefix: String,
    folder: Option<PathBuf>,
}

impl ChrExport {
    pub fn new(
        cart: Arc<Cart>,
        renderer: Arc<dyn AssetRenderer>,
        scale: u32,
        prefix: &str,
        transition: Duration,
    ) -> Self {
        let clamped = scale.clamp(1, EXPORT_SCALE_MAX);
        if clamped != scale {
            warn!("export scale {} out of range, using {}", scale, clamped);
        }
        ChrExport {
            command: TimedCommand::new(ExportReport::default(), transition),
            cart,
            renderer,
            scale: clamped,
            prefix: prefix.to_string(),
            folder: None,
        }
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: u32) -> Result<(), InspectError> {
        if !(1..=EXPORT_SCALE_MAX).contains(&scale) {
            return Err(InspectError::Render(DisError::ChrScale));
        }
        self.scale = scale;
        Ok(())
    }

    /// Result of the folder picker; `None` means the user cancelled
    pub fn select_folder(&mut self, folder: Option<PathBuf>) {
        self.folder = folder;
    }

    pub fn folder(&self) -> Option<&PathBuf> {
        self.folder.as_ref()
    }

    /// Start the export. Does nothing without a selected folder or while a
    /// previous export is still in progress.
    pub fn export(&mut self) -> bool {
        let folder = match &self.folder {
            Some(folder) => folder.clone(),
            None => {
                debug!("no export folder selected");
                return false;
            }
        };
        let cart = Arc::clone(&self.cart);
        let renderer = Arc::clone(&self.renderer);
        let scale = self.scale;
        let prefix = self.prefix.clone();
        if !self.command.in_progress() {
            self.command.handler_mut().reset();
        }
        self.command.invoke(move || {
            export_chr_sheets(&cart, renderer.as_ref(), scale, &folder, &prefix)
                .map(String::into_bytes)
        })
    }

    pub fn done(&self) -> bool {
        self.command.handler().done
    }

    pub fn report(&self) -> Option<&str> {
        self.command.handler().report.as_deref()
    }

    pub fn command(&self) -> &TimedCommand<ExportReport> {
        &self.command
    }

    pub fn command_mut(&mut self) -> &mut TimedCommand<ExportReport> {
        &mut self.command
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
