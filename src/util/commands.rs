//! Runs widget commands against the browser.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use super::scroll_lock::ScrollLock;
use crate::config::WidgetConfig;
use crate::state::widget::Command;

/// Execute one command returned by `WidgetState::dispatch`.
pub fn run(command: Command, config: &WidgetConfig, scroll: &mut ScrollLock) {
    match command {
        Command::ApplyTheme(theme) => super::theme::apply(theme),
        Command::PersistTheme(theme) => super::theme::persist(&config.theme_storage_key, theme),
        Command::LockScroll => scroll.lock(),
        Command::UnlockScroll => scroll.unlock(),
    }
}
