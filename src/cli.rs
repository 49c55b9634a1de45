use clap::{Parser, Subcommand};

/// DietPlanner — predicts a daily calorie requirement and builds a meal
/// plan to match it.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to a catalog JSON file. The built-in catalog is used when omitted.
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive planning session.
    Plan {
        /// Seed for reproducible model training and meal selection.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the active food catalog.
    Catalog,

    /// Write the built-in catalog to a JSON file for editing.
    Export {
        /// Destination path.
        #[arg(default_value = "food_catalog.json")]
        path: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan { seed: None }
    }
}
