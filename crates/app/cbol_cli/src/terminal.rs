//! Terminal stand-ins for the browser shell: notices go to the log, the
//! confirmation dialog reads stdin, and navigation turns into hints.

use std::io::{BufRead, Write};
use std::sync::Mutex;

use async_trait::async_trait;
use cbol_core::route::{Navigator, Route};
use cbol_views::{ConfirmDialog, ConfirmPrompt, Notice, NoticeLevel, Notifier};

#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => log::info!("{}", notice.message),
            NoticeLevel::Warning => log::warn!("{}", notice.message),
            NoticeLevel::Error => log::error!("{}", notice.message),
        }
    }
}

/// Asks on stdin. `assume_yes` answers every prompt without asking.
#[derive(Debug, Default)]
pub struct StdinConfirm {
    assume_yes: bool,
}

impl StdinConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

#[async_trait]
impl ConfirmDialog for StdinConfirm {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        if self.assume_yes {
            return true;
        }
        let prompt = prompt.clone();
        tokio::task::spawn_blocking(move || ask(&prompt))
            .await
            .unwrap_or(false)
    }
}

fn ask(prompt: &ConfirmPrompt) -> bool {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        let _ = write!(
            stdout,
            "{}\n{} [{}/no]: ",
            prompt.title, prompt.message, prompt.confirm_label
        );
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => return false,
            Ok(_) => {}
        }
        let answer = line.trim().to_lowercase();
        if answer == "y" || answer == "yes" || answer == prompt.confirm_label.to_lowercase() {
            return true;
        }
        if answer == "n" || answer == "no" {
            return false;
        }
        // A blank answer closes a dismissible prompt; the others insist.
        if answer.is_empty() && prompt.dismissible {
            return false;
        }
    }
}

/// Remembers where the views asked to go.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    last: Mutex<Option<Route>>,
}

impl TerminalNavigator {
    pub fn last(&self) -> Option<Route> {
        self.last.lock().ok().and_then(|last| *last)
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        log::debug!("navigate to {route}");
        if let Ok(mut last) = self.last.lock() {
            *last = Some(route);
        }
    }
}
