use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use greetcheck::{cli::Args, logging, AssertionCheck, CheckConfig, CheckReport};

fn main() {
    let args = Args::parse();
    logging::init(args.verbose, args.quiet);

    match run(args) {
        Ok(true) => std::process::exit(0),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> anyhow::Result<bool> {
    let config = match &args.config {
        Some(path) => CheckConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => CheckConfig::default(),
    };
    let config = config.with_flag(args.flag).with_greeting(args.greeting);

    let report = AssertionCheck::from_config(&config).run_with_report();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if let Some(failure) = report.failure() {
        eprintln!(
            "{} {}: {}",
            "FAIL".red().bold(),
            failure.step,
            failure.message.as_deref().unwrap_or("failed")
        );
    }
    Ok(report.passed())
}

fn print_report(report: &CheckReport) {
    for outcome in &report.steps {
        let mark = if outcome.passed {
            "ok".green()
        } else {
            "FAILED".red()
        };
        println!("{:<12} {}", outcome.step.to_string(), mark);
    }
    if report.passed() {
        println!("{}", "All checks passed".green().bold());
    }
}
