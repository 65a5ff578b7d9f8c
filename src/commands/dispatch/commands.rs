//! Subcommand routing

use super::command::{Command, CommandContext};
use super::macros::trace_command;
use crate::cli::Commands;
use crate::commands;
use myos_core::error::Result;
use myos_core::store::Store;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        if let Commands::Init(args) = self {
            return commands::init::execute(ctx.cli, ctx.root, args);
        }

        let mut store = ctx.discover_or_open_store()?;
        trace_command!(ctx.cli, ctx.start, "open_store");

        execute_with_store(self, ctx, &mut store)?;
        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(())
    }
}

fn execute_with_store(cmd: &Commands, ctx: &CommandContext, store: &mut Store) -> Result<()> {
    let cli = ctx.cli;
    match cmd {
        Commands::Init(_) => Ok(()),
        Commands::Create(args) => commands::create::execute(cli, store, args),
        Commands::Edit(args) => commands::edit::execute(cli, store, args),
        Commands::Show(args) => commands::show::execute(cli, store, &args.id),
        Commands::List(args) => commands::list::execute(cli, store, args),
        Commands::Search(args) => commands::search::execute(cli, store, args),
        Commands::Link(args) => commands::link::execute_link(cli, store, &args.from, &args.to),
        Commands::Unlink(args) => {
            commands::link::execute_unlink(cli, store, &args.from, &args.to)
        }
        Commands::Pin(args) => commands::flags::execute_pin(cli, store, &args.id),
        Commands::Archive(args) => commands::flags::execute_archive(cli, store, &args.id),
        Commands::Delete(args) => commands::flags::execute_delete(cli, store, &args.id),
        Commands::Graph(args) => commands::graph::execute(cli, store, args),
        Commands::Suggest(args) => commands::suggest::execute(cli, store, args),
        Commands::Resurface(args) => commands::resurface::execute(cli, store, args),
        Commands::Digest(args) => commands::digest::execute(cli, store, args),
        Commands::Keywords(args) => commands::keywords::execute(cli, store, args),
        Commands::Tags => commands::keywords::execute_tags(cli, store),
        Commands::Export(args) => commands::transfer::execute_export(cli, ctx.root, store, args),
        Commands::Import(args) => commands::transfer::execute_import(cli, ctx.root, store, args),
        Commands::Reset(args) => commands::reset::execute(cli, store, args),
    }
}
