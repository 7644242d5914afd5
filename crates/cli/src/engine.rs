//! The interactive menu loop.
//!
//! Each round presents the current menu with a default key highlighted,
//! dispatches the chosen entry's command, then advances the default to the
//! next key (clamped at the last) so accepting the default walks forward
//! through the menu. An `exit`/`quit` entry ends the loop; an entry whose
//! command starts with `rungs ` reopens the launcher on other menus
//! in-process and then resumes the loop.

use log::debug;

use rungs_core::error::{Error, Result};
use rungs_core::execution::{CommandRunner, Executor};
use rungs_core::menus::{MenuSet, PromptSet, SECTION_MENU_TITLE};
use rungs_core::resolver;

use crate::menu_ui::{MenuUi, Selection};

/// Commands with this prefix re-enter the launcher on the named menus
/// instead of reaching the shell.
const RECURSE_PREFIX: &str = "rungs ";

pub struct MenuEngine<U, E> {
    menus: MenuSet,
    runner: CommandRunner<E>,
    ui: U,
}

impl<U: MenuUi, E: Executor> MenuEngine<U, E> {
    #[must_use]
    pub fn new(menus: MenuSet, runner: CommandRunner<E>, ui: U) -> Self {
        Self { menus, runner, ui }
    }

    /// Opens each requested menu in turn. A name that resolves to nothing
    /// is reported on stdout and the remaining names are still processed.
    ///
    /// # Errors
    ///
    /// Returns an error when the UI or command execution fails; resolution
    /// failures are diagnostics, not errors.
    pub fn open_all(&mut self, wanted: &[String]) -> Result<()> {
        for name in wanted {
            match resolver::find(name, &self.menus.names()) {
                Ok(found) => self.open(&found)?,
                Err(diagnostic) => println!("ERROR: {diagnostic}"),
            }
        }

        Ok(())
    }

    /// Runs the synthesized menu listing every ordinary section.
    ///
    /// # Errors
    ///
    /// Returns an error when the UI or command execution fails.
    pub fn run_section_menu(&mut self) -> Result<()> {
        let view = self.menus.section_menu().prompt_set();
        self.run_menu(SECTION_MENU_TITLE, &view)
    }

    fn open(&mut self, name: &str) -> Result<()> {
        let Some(menu) = self.menus.get(name) else {
            debug!("resolved menu `{name}` disappeared");
            return Ok(());
        };

        let view = menu.prompt_set();
        self.run_menu(name, &view)
    }

    fn run_menu(&mut self, title: &str, view: &PromptSet) -> Result<()> {
        let Some(first) = view.keys.first() else {
            return Err(Error::EmptyMenu(title.to_string()));
        };

        let mut current = first.clone();

        loop {
            let chosen = match self.ui.prompt(view, &current, title)? {
                Selection::Interrupted => {
                    debug!("menu `{title}` interrupted");
                    return Ok(());
                }
                Selection::Key(key) => key,
            };

            let Some(command) = view.command(&chosen) else {
                continue;
            };

            if command == "exit" || command == "quit" {
                return Ok(());
            }

            if let Some(rest) = command.strip_prefix(RECURSE_PREFIX) {
                self.recurse(rest)?;
            } else {
                self.runner.run(command, None, None)?;
            }

            // Advance the default to the key after the chosen one, clamped
            // to the last key.
            if let Some(index) = view.keys.iter().position(|key| *key == chosen) {
                current = view.keys[(index + 1).min(view.keys.len() - 1)].clone();
            }
        }
    }

    /// Reopens the launcher on the menus named in a re-entrant command,
    /// in-process, with the ambient dry-run mode carried along.
    fn recurse(&mut self, rest: &str) -> Result<()> {
        match shlex::split(rest) {
            Some(arguments) if !arguments.is_empty() => {
                debug!("recursing into {arguments:?}");
                self.open_all(&arguments)
            }
            _ => {
                println!("ERROR: cannot parse nested menu arguments {rest:?}");
                Ok(())
            }
        }
    }
}
