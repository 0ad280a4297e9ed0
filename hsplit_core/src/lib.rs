//! `hsplit_core` splits one annotated C++ header into many standalone headers.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Annotated header
//!   -> Loader (reads the header and optional template into Documents)
//!   -> Marker scanner (finds `//cut:<name>` lines)
//!   -> Excerpt extractor (slices the lines between markers, trims `////` separators)
//!   -> Assembler (template, include guard, inferred includes, namespace wrapper)
//!   -> Token substitution (%FILENAME%, %YEAR%, %MONTH%, %DAY%)
//!   -> Writer (creates `<outdir>/<name>.h`, never overwrites)
//! ```
//!
//! ## Marker syntax
//!
//! A marker is a line starting with `//cut`. The character after the prefix
//! is a separator and the rest of the line names the generated file:
//!
//! ```text
//! //cut:string_utils
//! ////////////////////////////////////////////////////////////
//! inline std::string trim(const std::string & s);
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hsplit_core::{SplitOptions, SystemClock, split_header};
//! use std::path::PathBuf;
//!
//! let options = SplitOptions {
//!     input: PathBuf::from("utils.h"),
//!     outdir: PathBuf::from("include"),
//!     namespace: Some("utils".into()),
//!     ..SplitOptions::default()
//! };
//!
//! let report = split_header(&options, &SystemClock).unwrap();
//! println!("{} file(s) written", report.written_count());
//! ```

pub use assembler::*;
pub use document::*;
pub use error::*;
pub use excerpt::*;
pub use marker::*;
pub use splitter::*;
pub use substitution::*;
pub use writer::*;

mod assembler;
mod document;
#[allow(unused_assignments)]
mod error;
mod excerpt;
mod marker;
mod splitter;
mod substitution;
mod writer;
