//! # CLI Layer
//!
//! This module is **one possible UI client** for addrbook, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the logger
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves configuration and the data file, builds the API
//! - `handle_*()`: One-shot subcommands; each loads, prints and exits without saving
//! - [`super::menu::Session`]: the interactive menu, used when no subcommand is given

use super::menu::Session;
use super::prompt::Prompter;
use super::render;
use super::setup::{Cli, Commands, ReportKind, SearchField};
use addrbook::api::AddressBookApi;
use addrbook::commands::{CmdResult, MessageLevel};
use addrbook::config::BookConfig;
use addrbook::error::Result;
use addrbook::store::fs::FileBackend;
use clap::Parser;
use log::{debug, LevelFilter};
use std::io;
use std::path::PathBuf;

struct AppContext {
    api: AddressBookApi<FileBackend>,
    config: BookConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let ctx = init_context(&cli);

    match cli.command {
        Some(Commands::List) => handle_list(ctx),
        Some(Commands::View { id }) => handle_view(ctx, id),
        Some(Commands::Search { field, query }) => handle_search(ctx, field, query),
        Some(Commands::Report { kind }) => handle_report(ctx, kind),
        None => handle_menu(ctx),
    }
}

/// `RUST_LOG` wins unless `-v` is given; the fallback keeps the menu quiet.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = BookConfig::resolve(&cwd);
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    debug!("using data file {}", data_file.display());

    AppContext {
        api: AddressBookApi::new(FileBackend::new(data_file)),
        config,
    }
}

fn handle_menu(ctx: AppContext) -> Result<()> {
    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock(), io::stdout());
    Session::new(ctx.api, prompter, ctx.config).run()
}

/// Loads the book for a one-shot command. Only problems are worth showing here, and they go
/// to stderr so stdout stays clean for the listing.
fn load_quietly(api: &mut AddressBookApi<FileBackend>) -> Result<()> {
    let loaded = api.load()?;
    let problems: Vec<_> = loaded
        .messages
        .into_iter()
        .filter(|m| matches!(m.level, MessageLevel::Warning | MessageLevel::Error))
        .collect();
    eprint!("{}", render::messages(&problems));
    Ok(())
}

fn print_result_messages(result: &CmdResult) {
    print!("{}", render::messages(&result.messages));
}

fn handle_list(mut ctx: AppContext) -> Result<()> {
    load_quietly(&mut ctx.api)?;
    let result = ctx.api.list_contacts()?;
    print!("{}", render::previews(&result.previews));
    print_result_messages(&result);
    Ok(())
}

fn handle_view(mut ctx: AppContext, id: u32) -> Result<()> {
    load_quietly(&mut ctx.api)?;
    let result = ctx.api.view_contact(id)?;
    for contact in &result.contacts {
        print!("{}", render::contact_detail(contact));
    }
    print_result_messages(&result);
    Ok(())
}

fn handle_search(mut ctx: AppContext, field: SearchField, query: String) -> Result<()> {
    load_quietly(&mut ctx.api)?;
    let result = ctx.api.search(&field.query(query))?;
    let heading = result.heading.clone().unwrap_or_default();
    print!("{}", render::search_results(&heading, &result.contacts));
    Ok(())
}

fn handle_report(mut ctx: AppContext, kind: ReportKind) -> Result<()> {
    load_quietly(&mut ctx.api)?;
    let result = match kind {
        ReportKind::Missing => ctx.api.missing_info_report()?,
        ReportKind::Types => ctx.api.type_counts_report()?,
        ReportKind::Groups => ctx.api.groups_report()?,
    };
    if let Some(report) = &result.report {
        print!("{}", render::report(report));
    }
    Ok(())
}
