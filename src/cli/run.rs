//! # Run Command
//!
//! Resolves settings from defaults, the configuration file and the command
//! line, then runs a single stamping (or checking) pass.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use copyhead::config::{HeaderSettings, load_config};
use copyhead::diff::DiffManager;
use copyhead::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use copyhead::processor::{Processor, ProcessorConfig};
use copyhead::report::{FileAction, FileReport, ProcessingSummary, write_json_report};
use copyhead::templates::HeaderTemplate;
use tracing::{debug, info};

use crate::output::{print_all_files_ok, print_missing_files, print_summary};

/// Directory walked when no root is given.
pub const DEFAULT_ROOT: &str = ".";

/// Arguments for a run
#[derive(Args, Debug)]
pub struct RunArgs {
  /// Directory to walk recursively
  #[arg(default_value = DEFAULT_ROOT, value_name = "ROOT")]
  pub root: PathBuf,

  /// Header template file (default: copyright.template in the working
  /// directory)
  #[arg(long, short = 't', value_name = "FILE")]
  pub template: Option<PathBuf>,

  /// Path to config file (default: .copyhead.toml in the working directory)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Check mode: report files without a header instead of modifying them
  #[arg(long)]
  pub check: bool,

  /// Show the diff of each change check mode would make
  #[arg(long, requires = "check")]
  pub show_diff: bool,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run a pass with the given arguments
pub fn run(args: RunArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  let mut settings = HeaderSettings::default();
  if let Some(config) = load_config(args.config.as_deref(), &current_dir, args.no_config)? {
    debug!("Applying configuration file overrides");
    settings.merge_config(config);
  }
  if let Some(template_path) = args.template {
    settings.template_path = template_path;
  }
  debug!("Effective settings: {:?}", settings);

  let template = HeaderTemplate::load(&settings.template_path, &settings.placeholder)?;

  let processor = Processor::new(ProcessorConfig {
    check_only: args.check,
    diff_manager: Some(DiffManager::new(args.show_diff)),
    ..ProcessorConfig::new(template, settings)
  });

  let start_time = Instant::now();
  let reports = processor.process(&args.root)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  info!(
    "Considered {} files: {} stamped, {} already present, {} missing",
    summary.total_files, summary.stamped, summary.already_stamped, summary.missing
  );
  print_summary(&summary, args.check);

  if let Some(ref output_path) = args.report_json {
    if let Err(e) = write_json_report(output_path, &reports, &summary) {
      eprintln!("Error generating JSON report: {:#}", e);
    } else {
      info!("Generated JSON report at {}", output_path.display());
    }
  }

  if args.check {
    let missing: Vec<&FileReport> = reports
      .iter()
      .filter(|r| r.action == FileAction::MissingHeader)
      .collect();

    if missing.is_empty() {
      print_all_files_ok();
    } else {
      print_missing_files(&missing);
      process::exit(1);
    }
  }

  Ok(())
}
