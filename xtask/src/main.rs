use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride intents workspace",
    long_about = "A unified CLI for running the intent host, benchmarks,\n\
                  and CI checks in the ride intents workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the intent host (newline-delimited JSON intents on stdin).
    /// `RIDE_INTENTS_*` variables are inherited from the environment.
    Host,
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, benchmarks)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run benchmarks
    Bench,
    /// Run check + bench
    All,
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test ride_intents_core");
    run_cargo(&["test", "-p", "ride_intents_core"]);

    step("Test ride_intents_host");
    run_cargo(&["test", "-p", "ride_intents_host"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&[
        "bench",
        "--package",
        "ride_intents_core",
        "--bench",
        "dispatch",
    ]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Host => {
            run_cargo(&["run", "-p", "ride_intents_host", "--bin", "intent_host"]);
        }
        Commands::Bench => ci_bench(),
        Commands::Ci { job } => match job {
            CiJob::Check => ci_check(),
            CiJob::Bench => ci_bench(),
            CiJob::All => {
                ci_check();
                ci_bench();
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_takes_no_flags() {
        let cli = Cli::try_parse_from(["xtask", "host"]).expect("host should parse");
        assert!(matches!(cli.command, Commands::Host));

        assert!(Cli::try_parse_from(["xtask", "host", "--ride-identifier", "ride-1"]).is_err());
    }
}
