//! pugstart CLI
//!
//! Usage: pugstart <DIR> [-r]
//!
//! Scaffolds a Pug project inside DIR: entry file, base layout, config block,
//! optional sections, and cdnjs asset links.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use pugstart::cli::Cli;
use pugstart::prompts::DialoguerPrompter;
use pugstart::templates::TemplateSource;
use pugstart::{manifest, pipeline, CdnjsRegistry};

fn main() {
    let cli = Cli::parse();

    // Single reporting path for every fatal error.
    if let Err(err) = run(&cli) {
        eprintln!("   {}", style(format!("Error: {err:#}")).red());
        process::exit(1);
    }

    println!();
    println!(
        "    {}",
        style("All parts have been successfully completed.").green()
    );
}

fn run(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;

    manifest::check(&cwd)?;

    let source = TemplateSource::bundled(&cwd);
    let registry = CdnjsRegistry::new().context("failed to build HTTP client")?;
    let mut prompter = DialoguerPrompter::new();

    pipeline::run(&cli.dir, cli.rewrite, &source, &mut prompter, &registry)?;

    Ok(())
}
