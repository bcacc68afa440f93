// src/cli.rs
use std::{ fs, path::PathBuf, time::Duration };

use clap::{ ArgAction, Parser, Subcommand, ValueEnum };
use color_eyre::eyre::{ Result, WrapErr };

use crate::{
    aggregate,
    config::options::{ AppOptions, ExportFormat },
    core::net::HttpFetcher,
    data::{ Payload, Petition, Skipped, Source },
    envelope,
    error::IngestError,
    file,
    log::{ self, Sink, DEFAULT_LOG_FILE },
    progress::Progress,
    validate,
};

#[derive(Debug, Parser)]
#[command(name = "petition_ingest", version, about = "Fetch and normalize Ukrainian e-petitions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// -v info, -vv debug (RUST_LOG overrides)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log to a file instead of stderr
    #[arg(long, global = true, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_LOG_FILE)]
    pub log_file: Option<PathBuf>,

    /// Request timeout in seconds; 0 keeps the HTTP client default
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Write normalized petitions to this file instead of printing the envelope
    #[arg(short, long, global = true, value_name = "PATH")]
    pub out: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Omit the header row in CSV/TSV exports
    #[arg(long, global = true)]
    pub no_headers: bool,

    /// Run the data-quality report over the fetched petitions
    #[arg(long, global = true)]
    pub check: bool,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// President of Ukraine petition site (HTML)
    President,
    /// Cabinet of Ministers petition API
    Cabinet,
    /// Open-data catalog search (raw passthrough)
    OpenData {
        /// Free-text catalog query
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Every source, one after another
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
    Json,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
            Format::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    pub fn app_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        match self.timeout {
            Some(0) => opts.ingest.timeout = None,
            Some(secs) => opts.ingest.timeout = Some(Duration::from_secs(secs)),
            None => {}
        }
        if let Command::OpenData { query: Some(q) } = &self.command {
            opts.ingest.open_data_query = q.clone();
        }
        opts.export.format = self.format.into();
        opts.export.include_headers = !self.no_headers;
        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts
    }
}

/// Prints one line per source on stderr.
struct CliProgress {
    skipped: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        eprintln!("Fetching {total} sources…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("  {msg}");
    }
    fn item_skipped(&mut self, _source: Source, _skipped: &Skipped) {
        self.skipped += 1;
    }
    fn source_done(&mut self, source: Source, count: usize) {
        eprintln!("  ok   {:<10} {count}", source.tag());
    }
    fn source_failed(&mut self, source: Source, err: &IngestError) {
        eprintln!("  FAIL {:<10} {} {err}", source.tag(), err.status_code());
    }
    fn finish(&mut self) {
        if self.skipped > 0 {
            eprintln!("  {} records skipped (see log)", self.skipped);
        }
    }
}

fn emit(cli: &Cli, opts: &AppOptions, petitions: &[Petition]) -> Result<()> {
    if cli.out.is_some() {
        let path = file::export_petitions(&opts.export, petitions)?;
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_check(petitions: &[Petition], skipped: usize) -> bool {
    let report = validate::check(petitions, skipped);
    eprintln!("{}", report.summary());
    report.passed()
}

fn print_json(cli: &Cli, body: &serde_json::Value) -> Result<()> {
    let text = if cli.pretty { serde_json::to_string_pretty(body)? } else { body.to_string() };
    println!("{text}");
    Ok(())
}

fn run_single(cli: &Cli, opts: &AppOptions, source: Source) -> Result<bool> {
    let fetcher = HttpFetcher::new(opts.ingest.timeout)?;
    let outcome = aggregate::run_one(source, &fetcher, &opts.ingest, None);
    let result = outcome.result;
    let response = envelope::build(&result);

    let mut ok = response.is_success();
    match (&result, &cli.out) {
        (Ok(Payload::Petitions { data, .. }), Some(_)) => emit(cli, opts, data)?,
        (Ok(Payload::Raw(_)), Some(_)) => {
            // catalog data has no petition columns; keep it as the JSON body
            let mut export = opts.export.clone();
            export.format = ExportFormat::Json;
            let path = export.out_path();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                file::ensure_directory(parent)?;
            }
            fs::write(&path, response.body_pretty())
                .wrap_err_with(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        _ => print_json(cli, &response.body)?,
    }

    if cli.check {
        if let Ok(Payload::Petitions { data, .. }) = &result {
            ok &= run_check(data, outcome.skipped);
        }
    }
    if !response.is_success() {
        eprintln!("Error ({}): {}", response.status, response.body["error"].as_str().unwrap_or("unknown"));
    }
    Ok(ok)
}

fn run_all(cli: &Cli, opts: &AppOptions) -> Result<bool> {
    let fetcher = HttpFetcher::new(opts.ingest.timeout)?;
    let mut progress = CliProgress { skipped: 0 };
    let report = aggregate::run_all(&Source::ALL, &fetcher, &opts.ingest, Some(&mut progress));

    let merged = report.merged();
    if cli.out.is_some() {
        emit(cli, opts, &merged)?;
    } else {
        print_json(cli, &serde_json::to_value(&merged)?)?;
    }

    let mut ok = report.all_ok();
    if cli.check {
        ok &= run_check(&merged, report.skipped());
    }
    Ok(ok)
}

/// Entry point for the binary. `Ok(false)` means the run finished but a
/// source failed or the quality check did not pass.
pub fn run(cli: Cli) -> Result<bool> {
    let sink = match &cli.log_file {
        Some(path) => Sink::File(path),
        None => Sink::Stderr,
    };
    log::init(cli.verbose, sink).wrap_err("initializing logging")?;

    let opts = cli.app_options();
    match cli.command {
        Command::President => run_single(&cli, &opts, Source::President),
        Command::Cabinet => run_single(&cli, &opts, Source::Cabinet),
        Command::OpenData { .. } => run_single(&cli, &opts, Source::OpenData),
        Command::All => run_all(&cli, &opts),
    }
}
