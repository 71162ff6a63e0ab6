//! `quire watch` command implementation.

use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use quire_config::ConfigHandle;

use super::{ConfigArg, OverrideArgs};
use crate::error::CliError;
use crate::output::Output;

/// Quiet period after the last change before reloading.
const DEBOUNCE: Duration = Duration::from_millis(150);

/// Arguments for the watch command.
#[derive(Args)]
pub(crate) struct WatchArgs {
    #[command(flatten)]
    config: ConfigArg,

    #[command(flatten)]
    overrides: OverrideArgs,
}

impl WatchArgs {
    /// Execute the watch command.
    ///
    /// Runs until the watcher channel closes or the process is interrupted.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let handle = ConfigHandle::load(self.config.config.as_deref(), self.overrides.into_settings())?;
        let Some(config_path) = handle.config_path().map(Path::to_path_buf) else {
            return Err(CliError::Validation(
                "No config file to watch (using built-in config); run `quire init` first".to_owned(),
            ));
        };

        // Watch the directory: editors often replace the file instead of writing in place
        let watch_dir = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;
        watcher.watch(watch_dir, RecursiveMode::NonRecursive)?;

        output.highlight(&format!("Watching {}", config_path.display()));
        output.info(&format!("Title: {}", handle.get().title));

        while wait_for_change(&rx, &config_path) {
            match handle.reload() {
                Ok(config) => output.success(&format!(
                    "Reloaded: {} ({} sidebar section(s), {} nav item(s))",
                    config.title,
                    config.theme.sidebar.len(),
                    config.theme.nav.len()
                )),
                Err(e) => {
                    output.error(&format!("Reload failed: {e}"));
                    output.detail("Keeping previous configuration");
                }
            }
        }

        Ok(())
    }
}

/// Block until `config_path` changes, then drain follow-up events.
///
/// Returns `false` when the watcher channel is closed.
fn wait_for_change(rx: &Receiver<notify::Result<Event>>, config_path: &Path) -> bool {
    loop {
        match rx.recv() {
            Ok(Ok(event)) if is_relevant(&event, config_path) => break,
            Ok(Ok(_)) => {}
            Ok(Err(e)) => tracing::warn!(error = %e, "File watcher error"),
            Err(_) => return false,
        }
    }

    loop {
        match rx.recv_timeout(DEBOUNCE) {
            Ok(_) => {}
            Err(RecvTimeoutError::Timeout) => return true,
            Err(RecvTimeoutError::Disconnected) => return false,
        }
    }
}

/// Whether `event` modifies, creates or removes the config file.
fn is_relevant(event: &Event, config_path: &Path) -> bool {
    let kind_matches = matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    );
    kind_matches
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == config_path.file_name())
}
