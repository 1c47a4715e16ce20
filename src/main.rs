//! Domain Sweep - exhaustive short domain availability sweeps
//!
//! Usage: domain-sweep <letters> [tlds] [pattern]

use std::env;
use std::process;
use std::sync::Arc;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use domain_sweep::{
    logging,
    sweep::total_combinations,
    types::{BatchProgress, CheckPhase},
    FileResultWriter, GoDaddyClient, RegistrarConfig, Result, SweepConfig, SweepReport, Sweeper,
    TokioSleeper,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the library
    if let Err(e) = domain_sweep::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();

    // Check for help
    if args.first().is_some_and(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if let Err(e) = logging::init_logging() {
        eprintln!("⚠️  {}", e);
    }

    // Credentials come first: nothing else happens without them
    let registrar = match RegistrarConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(1);
        }
    };

    let result = match SweepConfig::from_args(&args) {
        Ok(config) => run_sweep(config, registrar).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        if e.is_fatal_config() {
            eprintln!();
            eprintln!("Usage: domain-sweep <letters> [tlds] [pattern]");
        }
        process::exit(1);
    }

    Ok(())
}

/// Main sweep workflow
async fn run_sweep(config: SweepConfig, registrar: RegistrarConfig) -> Result<()> {
    println!("🔎 Domain Sweep - short domain availability scan");
    println!("═════════════════════════════════════════════════");
    println!();

    let client = GoDaddyClient::new(&registrar)?;
    tracing::debug!(registrar = ?registrar, "Registrar configured");

    let sweeper = Sweeper::new(config, Arc::new(client), Arc::new(TokioSleeper));
    let config = sweeper.config();

    let candidates = sweeper.candidates();
    let generated = total_combinations(config.length)
        .map(|n| n.to_string())
        .unwrap_or_else(|| "too many".to_string());

    println!("📏 Letters:    {}", config.length);
    println!("🌐 TLDs:       {}", config.tlds.join(", "));
    println!("🔤 Pattern:    {}", config.pattern);
    println!("🧮 Candidates: {} of {} combinations", candidates.len(), generated);
    println!("📦 Batches:    {} per TLD", candidates.len().div_ceil(config.batch_size.max(1)));
    println!();

    let mut writer =
        FileResultWriter::create(&config.output_dir, config.length, &config.tlds, Utc::now())?;

    let bar = ProgressBar::new(candidates.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    ) {
        bar.set_style(style.progress_chars("=>-"));
    }

    let report = sweeper
        .run_with(&candidates, &mut writer, |progress: &BatchProgress| {
            render_progress(&bar, progress)
        })
        .await?;

    bar.finish_and_clear();
    display_summary(&report, &writer);

    Ok(())
}

fn render_progress(bar: &ProgressBar, progress: &BatchProgress) {
    match progress.phase {
        CheckPhase::Idle => {
            bar.set_length(progress.total);
            bar.set_position(0);
            bar.set_message(format!("{} starting", progress.tld));
        }
        CheckPhase::Checking => {
            bar.set_position(progress.checked);
            bar.set_message(format!(
                "{} · {:.1}% · {} available",
                progress.tld,
                progress.percent(),
                progress.found
            ));
        }
        CheckPhase::Draining => {
            bar.set_message(format!("{} · {}", progress.tld, progress.phase));
        }
        CheckPhase::Done => {
            bar.println(format!(
                "✅ {} done: {} available, {} failed batch(es)",
                progress.tld, progress.found, progress.failed_batches
            ));
        }
    }
}

/// Display final results
fn display_summary(report: &SweepReport, writer: &FileResultWriter) {
    println!();
    println!("📈 Summary:");
    println!("─────────────");

    for (tld, names) in &report.available {
        let failed = report.stats.get(tld).map_or(0, |s| s.failed_batches);
        print!("   {:<8} {} available", tld, names.len());
        if failed > 0 {
            print!(" (⚠️  {} failed batch(es))", failed);
        }
        println!();
        if let Some(path) = writer.path_for(tld) {
            println!("            📄 {}", path.display());
        }
    }

    println!();
    println!("   ✅ Available: {}", report.total_available());
    println!("   📊 Checked per TLD: {}", report.candidates);
    println!("   ⏱️  Total time: {:.2}s", report.elapsed.as_secs_f32());
    println!("   🗂️  Aggregate: {}", writer.aggregate_path().display());

    if report.total_failed_batches() > 0 {
        println!();
        println!("⚠️  Some batches failed and were skipped; their names may be available.");
    }
}

/// Print help information
fn print_help() {
    println!("🔎 Domain Sweep - short domain availability scan");
    println!("═════════════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    domain-sweep <LETTERS> [TLDS] [PATTERN]");
    println!();
    println!("ARGUMENTS:");
    println!("    LETTERS   Number of letters per name (required)");
    println!("    TLDS      Comma-separated TLDs (default: .com)");
    println!("    PATTERN   auto | none | C/V signatures, e.g. CVC,CVCV (default: auto)");
    println!();
    println!("EXAMPLES:");
    println!("    domain-sweep 3                      # pronounceable 3-letter .com names");
    println!("    domain-sweep 4 .com,.io             # 4 letters on two TLDs");
    println!("    domain-sweep 4 .ai CVCV             # only consonant-vowel alternation");
    println!("    domain-sweep 2 .io none             # every 2-letter combination");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    GODADDY_API_KEY          Registrar API key (required)");
    println!("    GODADDY_API_SECRET       Registrar API secret (required)");
    println!("    GODADDY_API_URL          API base URL (default: https://api.godaddy.com)");
    println!("    DOMAIN_SWEEP_OUTPUT_DIR  Output directory (default: output)");
    println!("    DOMAIN_SWEEP_DEBUG       Set to 1 for debug logs (RUST_LOG overrides)");
}
