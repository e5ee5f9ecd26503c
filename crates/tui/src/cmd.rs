//! # Command Execution Layer
//!
//! This module translates high-level application effects (`Effect`) into
//! imperative commands (`Cmd`) and executes them. It is the boundary where
//! the pure state management of the app meets side effects:
//! - Opening links in the user's browser
//! - Writing to the system clipboard
//!
//! Navigation effects (`SwitchTo`, `Quit`) are handled by the runtime and
//! never reach this layer.
//!
//! Failures are logged and surfaced on the status line; they never abort the
//! event loop.

use folio_types::Effect;
use tracing::{debug, warn};

use crate::app::{App, StatusLine};

/// Side-effectful system commands executed outside of pure state updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Open a URL (or local document) with the platform handler.
    OpenInBrowser(String),
    /// Write text into the system clipboard.
    ClipboardSet(String),
}

/// Convert application [`Effect`]s into [`Cmd`]s, skipping the ones the
/// runtime owns.
pub fn from_effects(effects: Vec<Effect>) -> Vec<Cmd> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::OpenUrl(url) => Some(Cmd::OpenInBrowser(url)),
            Effect::CopyToClipboard(text) => Some(Cmd::ClipboardSet(text)),
            Effect::SwitchTo(_) | Effect::Quit => None,
        })
        .collect()
}

/// Execute commands, reporting the outcome of each on the status line.
pub fn run_cmds(app: &mut App, commands: Vec<Cmd>) {
    for command in commands {
        match command {
            Cmd::OpenInBrowser(target) => execute_open(app, target),
            Cmd::ClipboardSet(text) => execute_clipboard_set(app, text),
        }
    }
}

fn execute_open(app: &mut App, target: String) {
    match open::that_detached(&target) {
        Ok(()) => {
            debug!(%target, "opened link");
            app.set_status(StatusLine::info(format!("Opened {target}")));
        }
        Err(error) => {
            warn!(%target, %error, "could not open link");
            app.set_status(StatusLine::error(format!("Could not open {target}: {error}")));
        }
    }
}

fn execute_clipboard_set(app: &mut App, text: String) {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.clone())) {
        Ok(()) => app.set_status(StatusLine::info(format!("Copied {text}"))),
        Err(error) => {
            warn!(%error, "clipboard write failed");
            app.set_status(StatusLine::error(format!("Clipboard error: {error}")));
        }
    }
}
