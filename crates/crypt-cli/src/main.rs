//! Crypt CLI - password-protected files kept in a single encrypted store
//!
//! This is the command-line interface for Crypt. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, delete, list, misc, read, rename, upgrade};
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let err = CliError::from_anyhow(e);
        let ui_ctx = UiContext::for_stderr();
        print_error(&ui_ctx, &err.to_string(), err.hint());
        std::process::exit(err.exit_code());
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::List(args)) => list::handle_list(ctx, args)?,
        Some(Commands::Add(args)) => add::handle_add(ctx, args)?,
        Some(Commands::Read(args)) => read::handle_read(ctx, args)?,
        Some(Commands::Rename(args)) => rename::handle_rename(ctx, args)?,
        Some(Commands::Delete(args)) => delete::handle_delete(ctx, args)?,
        Some(Commands::Upgrade(args)) => upgrade::handle_upgrade(ctx, args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }
    Ok(())
}
