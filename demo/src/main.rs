//! Jasamed Remuneration Engine — Demo CLI
//!
//! Runs the allocation engine over one month of mock admissions and prints
//! the per-admission splits, the batch totals, and the monthly per-staff
//! recap.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- classify
//!   cargo run -p demo -- recap
//!   cargo run -p demo -- run-all --overrides overrides.toml

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jasamed_contracts::{AllocationResult, JasamedResult, TariffOverrides};
use jasamed_recap::{load_overrides, run_batch, BatchReport, RecapRole};

mod mock_data;

// ── CLI definition ────────────────────────────────────────────────────────────

/// Jasamed — hospital claim remuneration allocation demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Jasamed remuneration engine demo",
    long_about = "Splits mock hospital claim tariffs into per-role allocations\n\
                  and aggregates them into a monthly per-staff recap."
)]
struct Cli {
    /// Optional tariff-override file (TOML, keyed by admission id).
    #[arg(long, global = true)]
    overrides: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Per-admission splits, batch totals, and the full recap.
    RunAll,
    /// Visit-classification counts per admission only.
    Classify,
    /// The monthly per-staff recap only.
    Recap,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> JasamedResult<()> {
    let overrides = match &cli.overrides {
        Some(path) => load_overrides(path)?,
        None => TariffOverrides::empty(),
    };

    let admissions = mock_data::admissions();
    let report = run_batch(&admissions, &overrides);

    match cli.command {
        Command::RunAll => {
            print_rows(&report);
            print_totals(&report);
            print_recap(&report);
        }
        Command::Classify => print_classification(&report),
        Command::Recap => print_recap(&report),
    }

    Ok(())
}

// ── Report sections ───────────────────────────────────────────────────────────

fn print_rows(report: &BatchReport) {
    println!();
    println!("Per-admission allocation");
    println!("========================");
    for row in &report.rows {
        println!();
        println!("{}  (tariff {:.0})", row.admission_id, row.tariff);
        match &row.allocation {
            AllocationResult::Outpatient(a) => {
                println!("  outpatient");
                println!("    claim share        {:>12.2}", a.claim_share);
                println!("    lab                {:>12.2}", a.lab_share);
                println!("    radiology          {:>12.2}", a.radiology_share);
                println!("    attending          {:>12.2}", a.attending_share);
                println!("    consult            {:>12.2}", a.consult_share);
                println!("    distributed        {:>12.2}", a.total_distributed);
                println!("    % of claim         {:>12}", a.percent_of_claim);
            }
            AllocationResult::Inpatient(a) => {
                println!("  inpatient");
                println!("    lab                {:>12.2}", a.lab_share);
                println!("    radiology          {:>12.2}", a.radiology_share);
                println!("    general duty       {:>12.2}", a.general_duty_share);
                println!("    attending          {:>12.2}", a.attending_share);
                println!("    anesth. consult    {:>12.2}", a.anesthesia_consult_share);
                println!("    2nd consult        {:>12.2}", a.secondary_consult_share);
                println!("    3rd consult        {:>12.2}", a.tertiary_consult_share);
                println!("    operator           {:>12.2}", a.operator_share);
                println!("    anesthesia         {:>12.2}", a.anesthesia_share);
                println!("    anesth. substitute {:>12.2}", a.anesthesia_substitute_share);
                println!("    distributed        {:>12.2}", a.total_distributed);
                println!("    % of claim         {:>12}", a.percent_of_claim);
            }
        }
    }
}

fn print_classification(report: &BatchReport) {
    println!();
    println!("Visit classification");
    println!("====================");
    for row in &report.rows {
        let c = &row.classification;
        println!(
            "{}  attending={} anesthesia={} secondary={} tertiary={} general={} total={}",
            row.admission_id,
            c.attending_visit_count,
            c.anesthesia_consults.len(),
            c.secondary_consults.len(),
            c.tertiary_consults.len(),
            c.general_duty_visits.len(),
            c.total_visits(),
        );
    }
}

fn print_totals(report: &BatchReport) {
    let t = &report.totals;
    let consult_total = t.consult_share_total
        + t.anesthesia_consult_share_total
        + t.secondary_consult_share_total
        + t.tertiary_consult_share_total;

    println!();
    println!("Batch totals ({} admissions)", t.record_count);
    println!("============================");
    println!("  tariff           {:>14.2}", t.tariff_total);
    println!("  lab              {:>14.2}", t.lab_share_total);
    println!("  radiology        {:>14.2}", t.radiology_share_total);
    println!("  attending        {:>14.2}", t.attending_share_total);
    println!("  consults         {:>14.2}", consult_total);
    println!("  general duty     {:>14.2}", t.general_duty_share_total);
    println!("  operator         {:>14.2}", t.operator_share_total);
    println!(
        "  anesthesia       {:>14.2}",
        t.anesthesia_share_total + t.anesthesia_substitute_share_total
    );
    println!("  distributed      {:>14.2}", t.distributed_total);
    println!("  avg % of claim   {:>14.1}", t.average_percent_of_claim());
}

fn print_recap(report: &BatchReport) {
    println!();
    println!("Monthly recap");
    println!("=============");

    let roles = [
        ("Attending (DPJP)", RecapRole::Attending),
        ("Anesthesia consults", RecapRole::AnesthesiaConsult),
        ("Other consults", RecapRole::OtherConsult),
        ("General duty", RecapRole::GeneralDuty),
        ("Operators", RecapRole::Operator),
        ("Anesthesia", RecapRole::Anesthesia),
        ("Lab / radiology support", RecapRole::Support),
    ];

    for (label, role) in roles {
        let rows = report.recap.rows(role);
        if rows.is_empty() {
            continue;
        }
        println!();
        println!("{label}:");
        for row in rows {
            println!(
                "  {:<28} visits {:>6.1}  amount {:>12}",
                row.display_name, row.visit_count, row.total_amount
            );
        }
    }

    println!();
    println!("Combined:");
    for row in report.recap.combined_rows() {
        println!(
            "  {:<28} visits {:>6.1}  amount {:>12}",
            row.display_name, row.visit_count, row.total_amount
        );
    }
    println!();
    println!("Grand total: {}", report.recap.grand_total());
}
