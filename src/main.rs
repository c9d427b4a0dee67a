use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use smearbench::config::BenchmarkConfig;
use smearbench::config::choices::write_catalogue;
use smearbench::core::random::Seed;
use smearbench::export::{DelimitedExporter, ExportFormat, JsonExporter, ReportExporter};
use smearbench::logging;
use smearbench::tasks::{BenchmarkOutcome, BenchmarkTask};
use tracing::{error, info};

/// Compare regression estimators on a smeared-sum dataset with known truth.
#[derive(Debug, Parser)]
#[command(name = "smearbench", version, about)]
struct Cli {
    /// JSON configuration file; defaults describe the reference run.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving one artifact per histogram.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Artifact format.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Also write the generated dataset as a CSV exchange table.
    #[arg(long)]
    dataset_out: Option<PathBuf>,

    /// Override the number of generated samples.
    #[arg(long)]
    samples: Option<i64>,

    /// Override the generation seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the configuration JSON schema and exit.
    #[arg(long)]
    print_schema: bool,

    /// List the estimator types and generation modes and exit.
    #[arg(long)]
    list_choices: bool,
}

fn try_main() -> Result<()> {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.print_schema {
        serde_json::to_writer_pretty(&mut out, &BenchmarkConfig::schema())
            .context("failed to render schema")?;
        writeln!(out)?;
        out.flush()?;
        return Ok(());
    }

    if cli.list_choices {
        write_catalogue(&mut out).context("failed to render choices")?;
        out.flush()?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => BenchmarkConfig::from_path(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => BenchmarkConfig::default(),
    };
    if let Some(n) = cli.samples {
        config.dataset.n_samples = n;
    }
    if let Some(seed) = cli.seed {
        config.dataset.seed = Seed::Fixed(seed);
    }

    let task = BenchmarkTask::new(config).context("invalid benchmark configuration")?;
    if let Some(path) = &cli.dataset_out {
        let dataset = task.generate_dataset()?;
        let file = File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        dataset
            .write_table(BufWriter::new(file), ',')
            .with_context(|| format!("failed to write dataset to {}", path.display()))?;
        info!(path = %path.display(), samples = dataset.len(), "dataset written");
    }

    let outcome = task.run().context("benchmark failed")?;

    if let Some(dir) = &cli.output {
        let mut exporter: Box<dyn ReportExporter> = match cli.format {
            ExportFormat::Csv => Box::new(DelimitedExporter::csv(dir)),
            ExportFormat::Tsv => Box::new(DelimitedExporter::tsv(dir)),
            ExportFormat::Json => Box::new(JsonExporter::new(dir)),
        };
        outcome
            .report
            .export(exporter.as_mut())
            .with_context(|| format!("failed to export report to {}", dir.display()))?;
        info!(dir = %dir.display(), format = %cli.format, "report exported");
    }

    render_summary(&outcome, &mut out).context("failed to render summary")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn render_summary<W: Write>(outcome: &BenchmarkOutcome, w: &mut W) -> io::Result<()> {
    writeln!(w, "train: {}  test: {}", outcome.n_train, outcome.n_test)?;
    for stat in &outcome.report.correlations {
        writeln!(w, "{stat}")?;
    }
    for m in outcome.report.measurements() {
        writeln!(w, "{}: {:.4}", m.name, m.value)?;
    }
    let c = outcome.coverage;
    writeln!(
        w,
        "residual_z within ±{}: {:.4} (normal: {:.4})",
        c.half_width, c.observed, c.expected
    )?;
    for f in &outcome.report.failures {
        writeln!(w, "excluded {}: {}", f.estimator, f.reason)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %format!("{err:#}"), "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
