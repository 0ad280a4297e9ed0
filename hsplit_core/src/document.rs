use std::path::Path;

use derive_more::Deref;
use derive_more::DerefMut;

use crate::SplitError;
use crate::SplitResult;

/// A single line of a document, without its terminating `\n`.
pub type Line = Vec<u8>;

/// The lines of a whole file, in order.
///
/// Lines are raw bytes split on `\n` only. No encoding is assumed, and every
/// other byte, including `\r` and surrounding whitespace, is kept as-is.
/// Content ending with a newline therefore produces a trailing empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct Document(Vec<Line>);

impl Document {
	pub fn new(lines: Vec<Line>) -> Self {
		Self(lines)
	}

	/// Split raw bytes into a document.
	pub fn from_bytes(content: &[u8]) -> Self {
		Self(content.split(|byte| *byte == b'\n').map(<[u8]>::to_vec).collect())
	}

	pub fn from_text(content: &str) -> Self {
		Self::from_bytes(content.as_bytes())
	}

	/// Read the file at `path` into a document.
	pub fn load(path: &Path) -> SplitResult<Self> {
		let content = std::fs::read(path).map_err(|source| {
			SplitError::Read {
				path: path.to_path_buf(),
				source,
			}
		})?;

		Ok(Self::from_bytes(&content))
	}

	pub fn into_lines(self) -> Vec<Line> {
		self.0
	}

	/// The exact bytes written on disk: every line followed by `\n`.
	pub fn to_bytes(&self) -> Vec<u8> {
		let mut content = Vec::with_capacity(self.iter().map(|line| line.len() + 1).sum());
		for line in self.iter() {
			content.extend_from_slice(line);
			content.push(b'\n');
		}
		content
	}
}

impl<S: Into<Line>> FromIterator<S> for Document {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		Self(iter.into_iter().map(Into::into).collect())
	}
}

/// Byte offset of the first occurrence of `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
	if needle.is_empty() {
		return Some(0);
	}

	haystack
		.windows(needle.len())
		.position(|window| window == needle)
}

pub fn contains_bytes(haystack: &[u8], needle: &[u8]) -> bool {
	find_bytes(haystack, needle).is_some()
}
