use std::io::{self, BufRead};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use amigo_shuffle::prelude::*;

/// Draw secret-friend pairs: every participant gives to another one, and
/// nobody draws themselves.
#[derive(Debug, Parser)]
#[command(name = "amigo-shuffle", version, about)]
struct Cli {
    /// Participant names. When omitted, names are read from stdin, one
    /// per line.
    names: Vec<String>,

    /// Seed for a reproducible draw.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the numbered participant list before the draw.
    #[arg(long)]
    list: bool,

    /// Verbose logging (RUST_LOG overrides).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mut roster = Roster::new();

    if cli.names.is_empty() {
        collect_from_stdin(&mut roster).context("reading names from stdin")?;
    } else {
        for name in &cli.names {
            admit(&mut roster, name);
        }
    }

    if cli.list {
        for (position, name) in roster.numbered() {
            println!("{position}. {name}");
        }
    }

    let pairs = match draw(&roster, cli.seed) {
        Ok(pairs) => pairs,
        Err(err) => {
            eprintln!("{err}");
            return Ok(ExitCode::FAILURE);
        }
    };

    for pair in pairs {
        println!("{pair}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Announce a rejected name and keep collecting; a bad name never aborts
/// the run.
fn admit(roster: &mut Roster, raw: &str) {
    match roster.add(raw) {
        Ok(name) => tracing::info!("{name} added"),
        Err(err) => eprintln!("{err}"),
    }
}

fn collect_from_stdin(roster: &mut Roster) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        admit(roster, &line?);
    }
    Ok(())
}

fn draw(roster: &Roster, seed: Option<u64>) -> Result<Vec<Pairing<String>>, DerangeError> {
    match seed {
        Some(seed) => roster.draw_seeded(seed),
        None => roster.draw(&mut rand::thread_rng()),
    }
}

fn init_logger(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_filter = if verbose {
        "amigo_shuffle=debug,info"
    } else {
        "info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .compact(),
        )
        .init();
}
