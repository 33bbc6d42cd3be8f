//! The interaction session: the fetch and copy lifecycles over one panel.

use tokio::time::{Duration, Instant};
use tracing::{debug, error, info};

use crate::Engine;
use crate::clipboard::Clipboard;
use crate::decklist;
use crate::panel::{Panel, PanelState};

/// How long the copy action stays disabled after a successful write, with
/// the copied indicator showing.
const COPY_COOLDOWN: Duration = Duration::from_millis(2000);

/// Outcome of one copy invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The panel text was written; the cooldown started.
    Copied,
    /// A recent copy is still cooling down; nothing was written.
    Disabled,
    /// The panel has no text; nothing was written.
    NothingToCopy,
    /// The write failed. Logged; the action stays immediately usable.
    Failed,
}

/// Drives the fetch and copy flows.
///
/// One session owns one panel, the engine that fills it, and the clipboard
/// the copy action writes to.
///
/// # Example
///
/// ```no_run
/// use scrydeck_engine::{CopyOutcome, Engine, PanelState, Session};
/// # use scrydeck_engine::{Clipboard, ClipboardError};
/// # struct NoClipboard;
/// # impl Clipboard for NoClipboard {
/// #     fn set_text(&mut self, _: &str) -> Result<(), ClipboardError> { Ok(()) }
/// # }
///
/// # async fn example() {
/// let mut session = Session::new(Engine::new(), NoClipboard);
///
/// session.fetch("4 Lightning Bolt\n2 Counterspell").await;
/// if let PanelState::Populated(cards) = session.panel().state() {
///     println!("resolved {} cards", cards.len());
/// }
///
/// if session.copy() == CopyOutcome::Copied {
///     println!("card details copied");
/// }
/// # }
/// ```
pub struct Session<C> {
    engine: Engine,
    panel: Panel,
    clipboard: C,
    copy_locked_until: Option<Instant>,
}

impl<C: Clipboard> Session<C> {
    /// Create a session with an empty panel.
    pub fn new(engine: Engine, clipboard: C) -> Self {
        Self {
            engine,
            panel: Panel::new(),
            clipboard,
            copy_locked_until: None,
        }
    }

    /// The session's results panel.
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Run the fetch flow over the given deck-list text.
    ///
    /// Parses the text; with no identifiers the panel goes empty and no
    /// request is made. Otherwise the panel shows loading while the batched
    /// fetch runs to completion or failure, then lands on populated (or
    /// empty, for zero matches) or error. Fetch failures are logged and
    /// absorbed into the error state rather than returned; the resulting
    /// panel state is the outcome.
    ///
    /// Taking `&mut self` is the concurrency guard: a second fetch cannot
    /// start while one is in flight, the role the disabled fetch control
    /// plays in a UI. Nothing queues and nothing is cancelled.
    pub async fn fetch(&mut self, input: &str) -> &PanelState {
        let identifiers = decklist::parse_decklist(input);
        if identifiers.is_empty() {
            debug!("deck list parsed to no identifiers, skipping fetch");
            self.panel.show_empty();
            return self.panel.state();
        }

        self.panel.show_loading();
        match self.engine.fetch().collection(&identifiers).await {
            Ok(cards) => {
                info!(cards = cards.len(), "deck-list fetch succeeded");
                self.panel.show_populated(cards);
            }
            Err(e) => {
                error!(error = %e, "deck-list fetch failed");
                self.panel.show_error();
            }
        }
        self.panel.state()
    }

    /// Run the copy flow: write the panel's plain text to the clipboard.
    ///
    /// No-ops while the cooldown from a previous copy is active, and when
    /// the panel has no text. A failed write is logged with no cooldown and
    /// no panel change — the action stays usable.
    pub fn copy(&mut self) -> CopyOutcome {
        if self.copy_disabled() {
            return CopyOutcome::Disabled;
        }

        let text = self.panel.text();
        if text.is_empty() {
            return CopyOutcome::NothingToCopy;
        }

        match self.clipboard.set_text(&text) {
            Ok(()) => {
                self.copy_locked_until = Some(Instant::now() + COPY_COOLDOWN);
                info!(bytes = text.len(), "panel text copied");
                CopyOutcome::Copied
            }
            Err(e) => {
                error!(error = %e, "clipboard write failed");
                CopyOutcome::Failed
            }
        }
    }

    /// Whether the copy action is currently disabled by the cooldown.
    pub fn copy_disabled(&self) -> bool {
        self.copy_locked_until
            .is_some_and(|until| Instant::now() < until)
    }

    /// Whether the copied indicator is showing.
    ///
    /// The indicator and the disabled window coincide: both appear on a
    /// successful write and clear when the cooldown elapses.
    pub fn copied_indicator(&self) -> bool {
        self.copy_disabled()
    }
}
