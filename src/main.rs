use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use vitecraft::scaffold::DEFAULT_NAME;
use vitecraft::{NpmInstaller, Scaffold};

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"), about = "Scaffold a Vite + React + Redux Toolkit frontend", long_about = None)]
struct Cli {
    /// Project name, also the directory created under the current directory
    #[arg(default_value = DEFAULT_NAME)]
    name: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("\n{} {:#}", "❌ Error:".red().bold(), err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let base_dir = env::current_dir().context("Failed to resolve current working directory")?;

    let scaffold = Scaffold::new(base_dir, cli.name);
    scaffold.create_project(&NpmInstaller)?;

    Ok(())
}
