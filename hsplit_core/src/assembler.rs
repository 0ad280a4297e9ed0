use std::collections::BTreeSet;

use crate::Document;
use crate::Excerpt;
use crate::Line;
use crate::contains_bytes;

/// Substring patterns that pull in an include when found in an excerpt.
pub const INCLUDE_RULES: &[(&[u8], &str)] = &[
	(b" cv::", "#include <opencv2/core/core.hpp>"),
	(b"std::deque", "#include <deque>"),
	(b"std::map", "#include <map>"),
	(b"std::ostringstream", "#include <sstream>"),
	(b"std::string", "#include <string>"),
	(b"std::vector", "#include <vector>"),
];

/// Include guard symbol for a target, e.g. `foo` becomes `FOO_H`.
pub fn guard_name(target_name: &str) -> String {
	format!("{target_name}_H").to_ascii_uppercase()
}

/// Includes needed by `lines`, deduplicated and sorted lexicographically.
pub fn infer_includes<S: AsRef<[u8]>>(lines: &[S]) -> Vec<&'static str> {
	let mut includes = BTreeSet::new();

	for line in lines {
		let line = line.as_ref();
		for (pattern, include) in INCLUDE_RULES {
			if contains_bytes(line, pattern) {
				includes.insert(*include);
			}
		}
	}

	includes.into_iter().collect()
}

/// Build the output document for one excerpt.
///
/// Layout: template lines, guard open, inferred includes and a blank line,
/// optional namespace open, the excerpt body, optional namespace close,
/// guard close.
pub fn assemble(excerpt: &Excerpt, template: &Document, namespace: Option<&str>) -> Document {
	let guard = guard_name(&excerpt.marker.target_name);
	let namespace = namespace.filter(|name| !name.is_empty());
	let mut lines: Vec<Line> = template.to_vec();

	lines.push(format!("#ifndef {guard}").into_bytes());
	lines.push(format!("#define {guard}").into_bytes());
	lines.extend(infer_includes(&excerpt.lines).into_iter().map(Line::from));
	lines.push(Line::new());

	if let Some(namespace) = namespace {
		lines.push(format!("namespace {namespace} {{").into_bytes());
		lines.push(Line::new());
	}

	lines.extend(excerpt.lines.iter().cloned());

	if let Some(namespace) = namespace {
		lines.push(Line::new());
		lines.push(format!("}} // end namespace {namespace}").into_bytes());
		lines.push(Line::new());
	}

	lines.push(format!("#endif // {guard}").into_bytes());

	Document::new(lines)
}
