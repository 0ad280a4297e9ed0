use serde::Serialize;

use crate::Document;

/// Literal that opens a marker line. It must start at column one.
pub const MARKER_PREFIX: &[u8] = b"//cut";

/// A split point discovered in the input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Marker {
	/// 0-indexed line of the marker in the input document.
	pub line_index: usize,
	/// Basename of the generated file, without the `.h` extension. May be
	/// empty, in which case the marker produces no output.
	pub target_name: String,
}

impl Marker {
	pub fn has_target(&self) -> bool {
		!self.target_name.is_empty()
	}
}

/// Parse a single line as a marker, returning the raw target name when the
/// line starts with [`MARKER_PREFIX`].
///
/// The byte right after the prefix is a separator and is discarded.
/// Everything after it is the target name, verbatim.
pub fn parse_marker_line(line: &[u8]) -> Option<&[u8]> {
	let rest = line.strip_prefix(MARKER_PREFIX)?;
	Some(rest.get(1..).unwrap_or_default())
}

/// Find every marker in `document`, in file order.
///
/// Target names name files on disk, so bytes that are not valid UTF-8 are
/// replaced with `U+FFFD`.
pub fn scan_markers(document: &Document) -> Vec<Marker> {
	let mut markers = Vec::new();

	for (line_index, line) in document.iter().enumerate() {
		let Some(target_name) = parse_marker_line(line) else {
			continue;
		};

		let target_name = String::from_utf8_lossy(target_name).into_owned();
		tracing::info!(line = line_index, marker = %target_name, "marker found");
		markers.push(Marker {
			line_index,
			target_name,
		});
	}

	markers
}
