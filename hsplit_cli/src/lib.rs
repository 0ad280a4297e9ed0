use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Split one annotated header into many guarded headers.",
	long_about = "hsplit cuts an annotated C++ header into standalone headers.\n\nEvery line \
	              starting with `//cut:<name>` begins a new file `OUTDIR/<name>.h`. Each \
	              generated file gets an include guard, the includes its body needs, an optional \
	              namespace wrapper and an optional boilerplate template. Existing files are \
	              never overwritten.\n\nTemplate tokens: %FILENAME%, %YEAR%, %MONTH%, \
	              %DAY%\n\nSample:\n  hsplit vision/processing.h /tmp header_short.h \
	              vision_utils"
)]
#[allow(clippy::struct_excessive_bools)]
pub struct HsplitCli {
	/// Annotated header containing `//cut:<name>` markers.
	#[arg(value_name = "INPUT_HEADER")]
	pub input: Option<PathBuf>,

	/// Existing directory that receives the generated headers.
	#[arg(value_name = "OUTDIR")]
	pub outdir: Option<PathBuf>,

	/// Boilerplate file prepended to every generated header.
	#[arg(value_name = "HEADERTEMPLATE")]
	pub template: Option<OsString>,

	/// Namespace wrapped around the body of every generated header.
	#[arg(value_name = "NAMESPACE")]
	pub namespace: Option<String>,

	/// Extra positional arguments are accepted and ignored.
	#[arg(hide = true)]
	pub ignored: Vec<OsString>,

	/// Show which files would be written without touching the disk.
	#[arg(long, default_value_t = false)]
	pub dry_run: bool,

	/// Show a diff between existing files and the content that would have
	/// been generated for them.
	#[arg(long, default_value_t = false)]
	pub diff: bool,

	/// Output format for the run summary.
	#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
	pub format: OutputFormat,

	/// Enable verbose output.
	#[arg(long, short, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, default_value_t = false)]
	pub no_color: bool,
}

impl HsplitCli {
	/// Template path, treating an empty argument as absent.
	pub fn template_path(&self) -> Option<PathBuf> {
		self.template
			.clone()
			.filter(|path| !path.is_empty())
			.map(PathBuf::from)
	}

	/// Namespace, treating an empty argument as absent.
	pub fn namespace_name(&self) -> Option<String> {
		self.namespace.clone().filter(|name| !name.is_empty())
	}
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output with colors.
	Text,
	/// JSON output for programmatic consumption. Includes every marker with
	/// its status and destination path.
	Json,
}
