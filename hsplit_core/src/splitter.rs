use std::path::PathBuf;

use serde::Serialize;

use crate::Clock;
use crate::DateStamp;
use crate::Document;
use crate::Excerpt;
use crate::SplitError;
use crate::SplitResult;
use crate::SubstitutionContext;
use crate::assemble;
use crate::extract_excerpts;
use crate::output_file_name;
use crate::output_path;
use crate::scan_markers;
use crate::substitute;
use crate::write_document;

/// Inputs of a single run.
#[derive(Debug, Clone, Default)]
pub struct SplitOptions {
	/// The annotated header to split.
	pub input: PathBuf,
	/// Existing directory receiving the generated headers.
	pub outdir: PathBuf,
	/// Boilerplate prepended to every generated header.
	pub template: Option<PathBuf>,
	/// Namespace wrapped around every excerpt body.
	pub namespace: Option<String>,
	/// Run every stage except the final write.
	pub dry_run: bool,
}

/// What happened to a single marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStatus {
	Written,
	WouldWrite,
	EmptyName,
	AlreadyExists,
	WriteFailed,
}

impl MarkerStatus {
	pub fn is_skipped(self) -> bool {
		matches!(
			self,
			Self::EmptyName | Self::AlreadyExists | Self::WriteFailed
		)
	}
}

#[derive(Debug, Clone, Serialize)]
pub struct MarkerReport {
	/// 0-indexed line of the marker in the input.
	pub line_index: usize,
	pub target_name: String,
	/// Destination of the generated file. `None` for an empty target name.
	pub path: Option<PathBuf>,
	pub status: MarkerStatus,
	/// Number of placeholder tokens replaced in the generated content.
	pub replacements: usize,
	/// Reason the marker was skipped.
	pub message: Option<String>,
	/// The generated bytes, exactly as written on disk.
	#[serde(skip)]
	pub content: Option<Vec<u8>>,
}

/// Result of splitting one header.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SplitReport {
	pub markers: Vec<MarkerReport>,
}

impl SplitReport {
	pub fn is_empty(&self) -> bool {
		self.markers.is_empty()
	}

	pub fn written_count(&self) -> usize {
		self.markers
			.iter()
			.filter(|report| matches!(report.status, MarkerStatus::Written | MarkerStatus::WouldWrite))
			.count()
	}

	pub fn skipped_count(&self) -> usize {
		self.markers
			.iter()
			.filter(|report| report.status.is_skipped())
			.count()
	}
}

/// Split the header described by `options` into one file per marker.
///
/// Only an unreadable input or template aborts the run. Every per-marker
/// failure is logged, recorded in the report and skipped.
pub fn split_header(options: &SplitOptions, clock: &dyn Clock) -> SplitResult<SplitReport> {
	let input = Document::load(&options.input)?;
	let template = match &options.template {
		Some(path) => Document::load(path)?,
		None => Document::default(),
	};

	let stamp = DateStamp::from_clock(clock);
	let markers = scan_markers(&input);
	let excerpts = extract_excerpts(&input, &markers);

	let mut report = SplitReport::default();
	for excerpt in &excerpts {
		let marker_report = process_excerpt(excerpt, &template, &stamp, options);
		if let Some(message) = &marker_report.message {
			tracing::warn!(line = excerpt.marker.line_index, "{message}");
		}
		report.markers.push(marker_report);
	}

	Ok(report)
}

fn process_excerpt(
	excerpt: &Excerpt,
	template: &Document,
	stamp: &DateStamp,
	options: &SplitOptions,
) -> MarkerReport {
	let marker = &excerpt.marker;
	let mut report = MarkerReport {
		line_index: marker.line_index,
		target_name: marker.target_name.clone(),
		path: None,
		status: MarkerStatus::EmptyName,
		replacements: 0,
		message: None,
		content: None,
	};

	if !marker.has_target() {
		let error = SplitError::EmptyMarkerName {
			line: marker.line_index + 1,
		};
		report.message = Some(error.to_string());
		return report;
	}

	let path = output_path(&options.outdir, &marker.target_name);
	let mut document = assemble(excerpt, template, options.namespace.as_deref());
	let context = SubstitutionContext::new(output_file_name(&marker.target_name), stamp);
	report.replacements = substitute(&mut document, &context);
	tracing::debug!(
		marker = %marker.target_name,
		replacements = report.replacements,
		"tokens substituted"
	);
	report.content = Some(document.to_bytes());
	report.path = Some(path.clone());

	let outcome = if options.dry_run {
		if path.exists() {
			Err(SplitError::AlreadyExists { path: path.clone() })
		} else {
			report.status = MarkerStatus::WouldWrite;
			Ok(())
		}
	} else {
		write_document(&path, &document).map(|()| {
			tracing::info!(path = %path.display(), "saved file");
			report.status = MarkerStatus::Written;
		})
	};

	if let Err(error) = outcome {
		report.status = match error {
			SplitError::AlreadyExists { .. } => MarkerStatus::AlreadyExists,
			_ => MarkerStatus::WriteFailed,
		};
		report.message = Some(error_message(&error));
	}

	report
}

fn error_message(error: &SplitError) -> String {
	match error {
		SplitError::Write { source, .. } => format!("{error}: {source}"),
		_ => error.to_string(),
	}
}
