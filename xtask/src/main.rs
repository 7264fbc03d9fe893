use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the ride-share ledger workspace",
    long_about = "A unified CLI for dispatching against the bundled ledger,\n\
                  benchmarks, and CI checks in the ride-share workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a trip against the bundled support/ ledger
    Request {
        /// Passenger id
        #[arg(allow_negative_numbers = true)]
        passenger_id: i64,
        /// Data directory with drivers.csv, passengers.csv and trips.csv
        #[arg(long, default_value = "support")]
        data_dir: String,
    },
    /// Report per-driver and per-passenger totals for the bundled ledger
    Summary {
        #[arg(long, default_value = "support")]
        data_dir: String,
    },
    /// Run Criterion benchmarks
    Bench,
    /// Run CI checks (fmt, clippy, tests, bundled-ledger smoke run, benchmarks)
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
    /// Run the rideshare binary against the bundled ledger
    Smoke,
    /// Run benchmarks
    Bench,
    /// Run check + smoke + bench
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

fn run_rideshare(data_dir: &str, command: &[&str]) {
    let mut args = vec![
        "run",
        "-p",
        "rideshare_records",
        "--bin",
        "rideshare",
        "--",
        "--data-dir",
        data_dir,
    ];
    args.extend_from_slice(command);
    run_cargo(&args);
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

    step("Test rideshare_core");
    run_cargo(&["test", "-p", "rideshare_core"]);

    step("Test rideshare_records");
    run_cargo(&["test", "-p", "rideshare_records"]);
}

fn ci_smoke() {
    step("Summary of bundled ledger");
    run_rideshare("support", &["summary"]);

    step("Dispatch one request against bundled ledger");
    run_rideshare("support", &["request", "1"]);
}

fn ci_bench() {
    step("Run benchmarks");
    run_cargo(&["bench", "--package", "rideshare_core", "--bench", "performance"]);
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Request {
            passenger_id,
            data_dir,
        } => {
            let id = passenger_id.to_string();
            run_rideshare(&data_dir, &["request", &id]);
        }
        Commands::Summary { data_dir } => {
            run_rideshare(&data_dir, &["summary"]);
        }
        Commands::Bench => {
            ci_bench();
        }
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::Smoke => ci_smoke(),
                CiJob::Bench => ci_bench(),
                CiJob::All => {
                    ci_check();
                    ci_smoke();
                    ci_bench();
                }
            }
            eprintln!("\nCI job passed.");
        }
    }
}
