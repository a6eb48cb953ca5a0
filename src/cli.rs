use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "greetcheck")]
#[command(version)]
#[command(about = "Assert that a greeting is well formed", long_about = None)]
pub struct Args {
    /// YAML file with subject values and expected affixes
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the boolean subject
    #[arg(long)]
    pub flag: Option<bool>,

    /// Override the greeting subject
    #[arg(long)]
    pub greeting: Option<String>,

    /// Print the step report as JSON
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
