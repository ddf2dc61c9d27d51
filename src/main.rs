use clap::Parser;
use seedcode::{Algorithm, Config, SystemClock, generate_code};
use std::io::{self, Write};
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// Seed a pseudo-random generator from input or the clock and print one code.
#[derive(Parser)]
#[command(name = "seedcode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed to use instead of prompting (empty means the current time)
    #[arg(short, long, allow_hyphen_values = true)]
    seed: Option<String>,

    /// Generator algorithm: chacha8 or xorshift64
    #[arg(short, long, default_value_t = Algorithm::ChaCha8)]
    algorithm: Algorithm,
}

fn main() {
    setup_logging();

    let cli = Cli::parse();
    let config = Config {
        seed: cli.seed,
        algorithm: cli.algorithm,
    };

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    if let Err(e) = generate_code(&config, &SystemClock, &mut stdin, &mut stdout) {
        // The prompt has no trailing newline. Stdout may already be closed.
        if config.seed.is_none() {
            let _ = writeln!(stdout);
        }
        eprintln!("error: {e}");
        exit(1);
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}
