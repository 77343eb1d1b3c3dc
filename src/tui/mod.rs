// TUI module for the interactive planner screen
mod app;
mod events;
mod format;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;
use terminal::TerminalManager;

use crate::catalog::Catalog;

/// Run the interactive planner over the given catalog.
pub fn run_interactive(catalog: Catalog) -> Result<()> {
    let mut manager = TerminalManager::new()?;

    let mut app = App::new(catalog);
    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    res
}
