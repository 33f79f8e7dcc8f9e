use anyhow::Result;
use clap::{Parser, Subcommand};

use budget::cli::{
    handle_add, handle_config, handle_delete, handle_edit, handle_init, handle_list,
    handle_summary,
};
use budget::config::BudgetPaths;
use budget::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Command-line personal budget tracker",
    long_about = "A single-user personal budget tracker. Records income and expense \
                  transactions in a flat CSV ledger, lists and filters them, and \
                  produces totals by type and category along with an expense chart."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the ledger file if it does not already exist
    Init,

    /// Add a new transaction
    Add {
        /// Transaction type: Income or Expense
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Amount, e.g. "42.50"
        #[arg(short, long)]
        amount: String,
        /// Category (e.g. Salary, Groceries, Entertainment)
        #[arg(short, long)]
        category: String,
        /// Description (e.g. Monthly paycheck, Food)
        #[arg(short, long)]
        description: String,
    },

    /// Delete a transaction by id
    Delete {
        /// Transaction id
        id: u64,
    },

    /// Edit one field of a transaction
    Edit {
        /// Transaction id
        id: u64,
        /// Field to change: date, type, amount, category or description
        field: String,
        /// New value for the field
        value: String,
    },

    /// List transactions, optionally filtered by type or category
    List {
        /// Field to filter by (type or category)
        #[arg(short, long)]
        by: Option<String>,
        /// Value to match; omit to list the available values
        #[arg(short, long)]
        value: Option<String>,
    },

    /// Show totals by type and category, net balance, and the expense chart
    Summary,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let paths = BudgetPaths::new()?;
    let store = LedgerStore::new(&paths);

    match args.command {
        Commands::Init => handle_init(&store)?,
        Commands::Add {
            kind,
            amount,
            category,
            description,
        } => handle_add(&store, kind, amount, category, description)?,
        Commands::Delete { id } => handle_delete(&store, id)?,
        Commands::Edit { id, field, value } => handle_edit(&store, id, &field, &value)?,
        Commands::List { by, value } => handle_list(&store, by, value)?,
        Commands::Summary => handle_summary(&store, &paths)?,
        Commands::Config => handle_config(&store, &paths)?,
    }

    Ok(())
}
