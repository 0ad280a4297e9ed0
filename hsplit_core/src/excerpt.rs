use std::collections::VecDeque;
use std::ops::Range;

use crate::Document;
use crate::Line;
use crate::Marker;

/// The body belonging to one marker, after separator lines are trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
	pub marker: Marker,
	pub lines: Vec<Line>,
}

impl Excerpt {
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}
}

/// Returns true when `line` contains nothing but `/` characters. The empty
/// line qualifies.
pub fn is_separator_line(line: &[u8]) -> bool {
	line.iter().all(|byte| *byte == b'/')
}

/// Half-open range of document lines owned by the marker at `position`.
///
/// The range starts after the marker line and ends at the next marker, or
/// at the end of the document for the last one.
pub fn excerpt_range(markers: &[Marker], position: usize, document_len: usize) -> Range<usize> {
	let start = markers[position].line_index + 1;
	let end = markers
		.get(position + 1)
		.map_or(document_len, |next| next.line_index);

	start..end.max(start)
}

/// Drop leading and trailing separator lines. An excerpt made only of
/// separator lines ends up empty.
pub fn trim_separator_lines(lines: impl IntoIterator<Item = Line>) -> Vec<Line> {
	let mut lines: VecDeque<Line> = lines.into_iter().collect();

	while lines.front().is_some_and(|line| is_separator_line(line)) {
		lines.pop_front();
	}

	while lines.back().is_some_and(|line| is_separator_line(line)) {
		lines.pop_back();
	}

	lines.into()
}

/// Extract the trimmed excerpt of every marker, in marker order.
pub fn extract_excerpts(document: &Document, markers: &[Marker]) -> Vec<Excerpt> {
	(0..markers.len())
		.map(|position| {
			let range = excerpt_range(markers, position, document.len());
			tracing::debug!(
				marker = %markers[position].target_name,
				start = range.start,
				end = range.end,
				"excerpt bounds"
			);

			Excerpt {
				marker: markers[position].clone(),
				lines: trim_separator_lines(document[range].iter().cloned()),
			}
		})
		.collect()
}
