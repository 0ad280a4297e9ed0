use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum SplitError {
	#[error("unable to read `{}`", .path.display())]
	#[diagnostic(
		code(hsplit::read_error),
		help("check that the file exists and is readable UTF-8 text")
	)]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("marker at line {line} has no target name")]
	#[diagnostic(
		code(hsplit::empty_marker_name),
		help("write the output name after the marker, e.g. `//cut:my_header`")
	)]
	EmptyMarkerName {
		/// 1-indexed line of the marker.
		line: usize,
	},

	#[error("cannot save `{}`, it already exists", .path.display())]
	#[diagnostic(
		code(hsplit::already_exists),
		help("remove the existing file to regenerate it")
	)]
	AlreadyExists { path: PathBuf },

	#[error("unable to write `{}`", .path.display())]
	#[diagnostic(code(hsplit::write_error))]
	Write {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

pub type SplitResult<T> = Result<T, SplitError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
