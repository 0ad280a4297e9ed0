use std::fs::OpenOptions;
use std::io::BufWriter;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use crate::Document;
use crate::SplitError;
use crate::SplitResult;

/// Extension given to every generated file.
pub const OUTPUT_EXTENSION: &str = ".h";

/// File name of the generated file for a target, e.g. `foo.h`.
pub fn output_file_name(target_name: &str) -> String {
	format!("{target_name}{OUTPUT_EXTENSION}")
}

pub fn output_path(outdir: &Path, target_name: &str) -> PathBuf {
	outdir.join(output_file_name(target_name))
}

/// Write `document` to `path`, one `\n`-terminated line per entry. Line
/// bytes are written unchanged.
///
/// The file is created with create-new semantics so an existing file is
/// never touched. That case is reported as [`SplitError::AlreadyExists`].
pub fn write_document(path: &Path, document: &Document) -> SplitResult<()> {
	let file = OpenOptions::new()
		.write(true)
		.create_new(true)
		.open(path)
		.map_err(|source| {
			if source.kind() == ErrorKind::AlreadyExists {
				SplitError::AlreadyExists {
					path: path.to_path_buf(),
				}
			} else {
				SplitError::Write {
					path: path.to_path_buf(),
					source,
				}
			}
		})?;

	let to_write_error = |source| {
		SplitError::Write {
			path: path.to_path_buf(),
			source,
		}
	};
	let mut writer = BufWriter::new(file);
	for line in document.iter() {
		writer.write_all(line).map_err(to_write_error)?;
		writer.write_all(b"\n").map_err(to_write_error)?;
	}
	writer.flush().map_err(to_write_error)?;

	Ok(())
}
