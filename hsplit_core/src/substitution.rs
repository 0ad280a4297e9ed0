use chrono::Datelike;
use chrono::NaiveDate;

use crate::Document;
use crate::Line;
use crate::find_bytes;

pub const FILENAME_TOKEN: &str = "%FILENAME%";
pub const YEAR_TOKEN: &str = "%YEAR%";
pub const MONTH_TOKEN: &str = "%MONTH%";
pub const DAY_TOKEN: &str = "%DAY%";

/// Source of the current date.
pub trait Clock {
	fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn today(&self) -> NaiveDate {
		chrono::Local::now().date_naive()
	}
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
	fn today(&self) -> NaiveDate {
		self.0
	}
}

/// Date components as they are written into generated files. Month and day
/// are not zero padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
	pub year: String,
	pub month: String,
	pub day: String,
}

impl DateStamp {
	pub fn new(date: NaiveDate) -> Self {
		Self {
			year: date.year().to_string(),
			month: date.month().to_string(),
			day: date.day().to_string(),
		}
	}

	pub fn from_clock(clock: &dyn Clock) -> Self {
		Self::new(clock.today())
	}
}

/// Values for every placeholder token of one generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionContext {
	pub filename: String,
	pub year: String,
	pub month: String,
	pub day: String,
}

impl SubstitutionContext {
	pub fn new(filename: impl Into<String>, stamp: &DateStamp) -> Self {
		Self {
			filename: filename.into(),
			year: stamp.year.clone(),
			month: stamp.month.clone(),
			day: stamp.day.clone(),
		}
	}

	fn replacements(&self) -> [(&'static str, &str); 4] {
		[
			(FILENAME_TOKEN, self.filename.as_str()),
			(YEAR_TOKEN, self.year.as_str()),
			(MONTH_TOKEN, self.month.as_str()),
			(DAY_TOKEN, self.day.as_str()),
		]
	}
}

/// Replace every token in `line` in a single left-to-right pass.
///
/// Inserted values are never scanned again. Returns the new line and the
/// number of replacements made.
pub fn substitute_line(line: &[u8], context: &SubstitutionContext) -> (Line, usize) {
	let replacements = context.replacements();
	let mut output = Line::with_capacity(line.len());
	let mut rest = line;
	let mut count = 0;

	loop {
		let earliest = replacements
			.iter()
			.filter_map(|(token, value)| {
				find_bytes(rest, token.as_bytes()).map(|index| (index, *token, *value))
			})
			.min_by_key(|(index, ..)| *index);

		let Some((index, token, value)) = earliest else {
			output.extend_from_slice(rest);
			break;
		};

		output.extend_from_slice(&rest[..index]);
		output.extend_from_slice(value.as_bytes());
		rest = &rest[index + token.len()..];
		count += 1;
	}

	(output, count)
}

/// Substitute tokens on every line of `document` in place, returning the
/// total number of replacements.
pub fn substitute(document: &mut Document, context: &SubstitutionContext) -> usize {
	let mut total = 0;

	for line in document.iter_mut() {
		let (replaced, count) = substitute_line(line, context);
		if count > 0 {
			*line = replaced;
			total += count;
		}
	}

	total
}
