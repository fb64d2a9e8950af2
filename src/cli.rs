use std::path::PathBuf;

use clap::Parser;

/// pugstart - interactive scaffolder for Pug template projects
#[derive(Parser, Debug)]
#[command(name = "pugstart")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "The target directory must already exist; pugstart fills it in.")]
pub struct Cli {
    /// Target template directory to scaffold
    pub dir: PathBuf,

    /// Allow rewriting an existing index.pug that pugstart did not generate
    /// (the original content is kept inside 'block main')
    #[arg(short = 'r', long = "rewrite")]
    pub rewrite: bool,
}
