//! Ledger CLI - an in-memory bank in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dialoguer::Select;
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{account, client, deposit, statement, withdraw};

/// Ledger - an in-memory bank in your terminal
///
/// All data lives in memory and is lost on exit.
#[derive(Parser)]
#[command(name = "ledger", version, about, long_about = None)]
struct Cli {
    /// Directory holding settings.json (defaults to ~/.ledger)
    #[arg(long, env = "LEDGER_DIR")]
    config_dir: Option<PathBuf>,

    /// Print listings and statements as JSON
    #[arg(long)]
    json: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    NewClient,
    NewAccount,
    Deposit,
    Withdraw,
    Statement,
    ListAccounts,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::NewClient,
        MenuAction::NewAccount,
        MenuAction::Deposit,
        MenuAction::Withdraw,
        MenuAction::Statement,
        MenuAction::ListAccounts,
        MenuAction::Exit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::NewClient => "New client",
            MenuAction::NewAccount => "New account",
            MenuAction::Deposit => "Deposit",
            MenuAction::Withdraw => "Withdraw",
            MenuAction::Statement => "Statement",
            MenuAction::ListAccounts => "List accounts",
            MenuAction::Exit => "Exit",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "ledger_core=debug,ledger=debug"
    } else {
        "ledger_core=warn,ledger=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = commands::get_context(cli.config_dir)?;
    let labels: Vec<&str> = MenuAction::ALL.iter().map(MenuAction::label).collect();

    loop {
        println!();
        let choice = Select::new()
            .with_prompt("Bank Ledger")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        let action = match choice {
            Some(index) => MenuAction::ALL[index],
            None => MenuAction::Exit,
        };

        let result = match action {
            MenuAction::NewClient => client::run(&ctx),
            MenuAction::NewAccount => account::run_new(&ctx, cli.json),
            MenuAction::Deposit => deposit::run(&ctx),
            MenuAction::Withdraw => withdraw::run(&ctx),
            MenuAction::Statement => statement::run(&ctx, cli.json),
            MenuAction::ListAccounts => account::run_list(&ctx, cli.json),
            MenuAction::Exit => return Ok(()),
        };

        // Nothing is fatal: report and return to the menu
        if let Err(e) = result {
            output::error(&format!("{:#}", e));
        }
    }
}
