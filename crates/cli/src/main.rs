use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use rungs_cli::cli_args::Args;
use rungs_cli::engine::MenuEngine;
use rungs_cli::menu_ui::InlineMenu;
use rungs_core::config::{ConfigPaths, ConfigStore};
use rungs_core::error::Result;
use rungs_core::execution::{CommandRunner, ShellExecutor, DEFAULT_SHELL};
use rungs_core::menus::EDIT_MENU;

fn execute() -> Result<()> {
    let args = Args::parse();
    let shell = env::var("SHELL").unwrap_or_else(|_| DEFAULT_SHELL.to_string());

    let paths = ConfigPaths::resolve(args.config_path.as_deref())?;
    debug!("config path: `{}`", paths.primary.display());

    let store = ConfigStore::new(paths);
    let menus = store.load()?;

    let mut requested = args.menus;
    if menus.corrupt_origin() {
        // A corrupt config trumps whatever was asked for: the only useful
        // next step is fixing the file.
        println!("NOTE: substituting '{EDIT_MENU}' ...");
        requested = vec![EDIT_MENU.to_string()];
    } else if args.edit {
        requested.insert(0, EDIT_MENU.to_string());
    }

    let runner = CommandRunner::new(ShellExecutor::new(shell), args.dry_run);
    let mut engine = MenuEngine::new(menus, runner, InlineMenu);

    if requested.is_empty() {
        engine.run_section_menu()
    } else {
        engine.open_all(&requested)
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("error: {e}");
            println!("{e:?}");
            ExitCode::FAILURE
        }
    }
}
