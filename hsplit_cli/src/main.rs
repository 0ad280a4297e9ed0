use std::path::Path;
use std::process;

use clap::CommandFactory;
use clap::Parser;
use hsplit_cli::HsplitCli;
use hsplit_cli::OutputFormat;
use hsplit_core::MarkerReport;
use hsplit_core::MarkerStatus;
use hsplit_core::SplitOptions;
use hsplit_core::SplitReport;
use hsplit_core::SystemClock;
use hsplit_core::split_header;
use miette::IntoDiagnostic;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = HsplitCli::parse();

	let use_color = !args.no_color
		&& std::env::var_os("NO_COLOR").is_none()
		&& supports_color::on(supports_color::Stream::Stderr).is_some();
	if !use_color {
		owo_colors::set_override(false);
	}

	init_tracing(args.verbose, use_color);
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	// An unreadable input or template is the only way a run fails.
	if let Err(report) = run(&args) {
		eprintln!("{report:?}");
		process::exit(2);
	}
}

/// `RUST_LOG` takes precedence. Otherwise warnings for skipped markers are
/// shown, or the full pipeline trace with `--verbose`.
fn init_tracing(verbose: bool, use_color: bool) {
	let default_directive = if verbose { "hsplit_core=debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(default_directive));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.without_time()
		.init();
}

fn run(args: &HsplitCli) -> miette::Result<()> {
	let (Some(input), Some(outdir)) = (&args.input, &args.outdir) else {
		HsplitCli::command().print_help().into_diagnostic()?;
		return Ok(());
	};

	if !args.ignored.is_empty() {
		tracing::debug!(count = args.ignored.len(), "ignoring extra arguments");
	}

	let options = SplitOptions {
		input: input.clone(),
		outdir: outdir.clone(),
		template: args.template_path(),
		namespace: args.namespace_name(),
		dry_run: args.dry_run,
	};
	let report = split_header(&options, &SystemClock)?;

	match args.format {
		OutputFormat::Json => print_json(&report, args.dry_run)?,
		OutputFormat::Text => print_text(&report, input, args),
	}

	Ok(())
}

fn print_json(report: &SplitReport, dry_run: bool) -> miette::Result<()> {
	let output = serde_json::json!({
		"dry_run": dry_run,
		"written": report.written_count(),
		"skipped": report.skipped_count(),
		"markers": serde_json::to_value(&report.markers).into_diagnostic()?,
	});
	println!("{output}");
	Ok(())
}

fn print_text(report: &SplitReport, input: &Path, args: &HsplitCli) {
	if report.is_empty() {
		println!("No markers found in {}.", input.display());
		return;
	}

	for marker in &report.markers {
		print_marker(marker, args);
	}

	let written = report.written_count();
	let skipped = report.skipped_count();
	println!();
	if args.dry_run {
		println!("Dry run: would write {written} file(s), {skipped} marker(s) skipped.");
	} else {
		println!("Wrote {written} file(s), {skipped} marker(s) skipped.");
	}
}

/// One line per marker: its 1-indexed position, its name and what happened
/// to it. The reason for a skip is logged as a warning on stderr.
fn print_marker(marker: &MarkerReport, args: &HsplitCli) {
	let outcome = match marker.status {
		MarkerStatus::Written => "saved",
		MarkerStatus::WouldWrite => "would save",
		MarkerStatus::EmptyName => "skipped, empty name",
		MarkerStatus::AlreadyExists => "skipped, already exists",
		MarkerStatus::WriteFailed => "skipped, write failed",
	};
	let outcome = if marker.status.is_skipped() {
		outcome
			.if_supports_color(Stream::Stdout, |text| text.yellow())
			.to_string()
	} else {
		outcome
			.if_supports_color(Stream::Stdout, |text| text.green())
			.to_string()
	};
	let destination = marker
		.path
		.as_deref()
		.map(|path| format!(" {}", path.display()))
		.unwrap_or_default();

	println!(
		"Marker at line {}: '{}' {outcome}{destination}",
		marker.line_index + 1,
		marker.target_name
	);

	if args.verbose && marker.replacements > 0 {
		println!("  {} token(s) replaced", marker.replacements);
	}

	if args.diff && marker.status == MarkerStatus::AlreadyExists {
		print_existing_diff(marker);
	}
}

/// Compare a destination that already exists with what this run generated
/// for it.
fn print_existing_diff(marker: &MarkerReport) {
	let (Some(path), Some(generated)) = (&marker.path, &marker.content) else {
		return;
	};

	match std::fs::read(path) {
		Ok(existing) if existing == *generated => {
			eprintln!("  {} is identical to the generated header", path.display());
		}
		Ok(existing) => {
			print_line_diff(
				&String::from_utf8_lossy(&existing),
				&String::from_utf8_lossy(generated),
			);
		}
		Err(e) => {
			eprintln!("  cannot read {} to diff it: {e}", path.display());
		}
	}
}

/// Line diff on stderr: `-` lines only in the existing file, `+` lines only
/// in the generated header.
fn print_line_diff(existing: &str, generated: &str) {
	let diff = TextDiff::from_lines(existing, generated);
	for change in diff.iter_all_changes() {
		let line = match change.tag() {
			ChangeTag::Delete => {
				format!("-{change}")
					.if_supports_color(Stream::Stderr, |text| text.red())
					.to_string()
			}
			ChangeTag::Insert => {
				format!("+{change}")
					.if_supports_color(Stream::Stderr, |text| text.green())
					.to_string()
			}
			ChangeTag::Equal => format!(" {change}"),
		};
		eprint!("  {line}");
	}
}
