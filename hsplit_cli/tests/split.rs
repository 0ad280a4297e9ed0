mod common;

use hsplit_core::AnyEmptyResult;
use similar_asserts::assert_eq;

const SCENARIO: &str = "//cut:foo\nint x;\nstd::vector<int> v;\n//cut:bar\nvoid f(){}\n";

#[test]
fn prints_usage_without_arguments() {
	common::hsplit_cmd()
		.assert()
		.success()
		.stdout(predicates::str::contains("INPUT_HEADER"))
		.stdout(predicates::str::contains("OUTDIR"));
}

#[test]
fn prints_usage_with_a_single_argument() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(tmp.path().join("all.h"), SCENARIO)?;

	common::hsplit_cmd()
		.arg(tmp.path().join("all.h"))
		.assert()
		.success()
		.stdout(predicates::str::contains("Usage"));

	assert!(!tmp.path().join("foo.h").exists());
	Ok(())
}

#[test]
fn splits_header_into_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, SCENARIO)?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stdout(predicates::str::contains("saved"))
		.stdout(predicates::str::contains("Wrote 2 file(s), 0 marker(s) skipped."));

	let foo = std::fs::read_to_string(outdir.join("foo.h"))?;
	assert!(foo.starts_with("#ifndef FOO_H\n#define FOO_H\n#include <vector>\n"));
	assert!(foo.ends_with("#endif // FOO_H\n"));

	let bar = std::fs::read_to_string(outdir.join("bar.h"))?;
	assert_eq!(bar, "#ifndef BAR_H\n#define BAR_H\n\nvoid f(){}\n#endif // BAR_H\n");

	Ok(())
}

#[test]
fn applies_template_and_namespace() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let template = tmp.path().join("template.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:widget\n////////\nint w;\n////////\n")?;
	std::fs::write(&template, "// File: %FILENAME%")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.arg(&template)
		.arg("gui")
		.assert()
		.success();

	let widget = std::fs::read_to_string(outdir.join("widget.h"))?;
	assert_eq!(
		widget,
		"// File: widget.h\n#ifndef WIDGET_H\n#define WIDGET_H\n\nnamespace gui {\n\nint \
		 w;\n\n} // end namespace gui\n\n#endif // WIDGET_H\n"
	);

	Ok(())
}

#[test]
fn empty_template_and_namespace_arguments_are_ignored() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:bar\nvoid f(){}\n")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.arg("")
		.arg("")
		.assert()
		.success();

	let bar = std::fs::read_to_string(outdir.join("bar.h"))?;
	assert_eq!(bar, "#ifndef BAR_H\n#define BAR_H\n\nvoid f(){}\n#endif // BAR_H\n");

	Ok(())
}

#[test]
fn second_run_skips_existing_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, SCENARIO)?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd().arg(&input).arg(&outdir).assert().success();
	std::fs::write(outdir.join("foo.h"), "edited by hand\n")?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stderr(predicates::str::contains("already exists"))
		.stdout(predicates::str::contains("Wrote 0 file(s), 2 marker(s) skipped."));

	assert_eq!(
		std::fs::read_to_string(outdir.join("foo.h"))?,
		"edited by hand\n"
	);

	Ok(())
}

#[test]
fn diff_shows_changes_to_existing_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:bar\nvoid f(){}\n")?;
	std::fs::create_dir(&outdir)?;
	std::fs::write(
		outdir.join("bar.h"),
		"#ifndef BAR_H\n#define BAR_H\n\nvoid g(){}\n#endif // BAR_H\n",
	)?;

	common::hsplit_cmd()
		.arg("--diff")
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stderr(predicates::str::contains("-void g(){}"))
		.stderr(predicates::str::contains("+void f(){}"));

	Ok(())
}

#[test]
fn empty_marker_is_reported_and_skipped() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:\nint a;\n//cut:b\nint b;\n")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stderr(predicates::str::contains("marker at line 1 has no target name"));

	assert!(outdir.join("b.h").exists());
	assert_eq!(std::fs::read_dir(&outdir)?.count(), 1);

	Ok(())
}

#[test]
fn no_markers_produces_no_files() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "int x;\n")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stdout(predicates::str::contains("No markers found"));

	assert_eq!(std::fs::read_dir(&outdir)?.count(), 0);
	Ok(())
}

#[test]
fn dry_run_does_not_write() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, SCENARIO)?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg("--dry-run")
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stdout(predicates::str::contains("would save"))
		.stdout(predicates::str::contains("Dry run: would write 2 file(s)"));

	assert_eq!(std::fs::read_dir(&outdir)?.count(), 0);
	Ok(())
}

#[test]
fn json_format_reports_every_marker() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:\n//cut:foo\nint x;\n")?;
	std::fs::create_dir(&outdir)?;

	let output = common::hsplit_cmd()
		.arg("--format")
		.arg("json")
		.arg(&input)
		.arg(&outdir)
		.output()?;
	assert!(output.status.success());

	let stdout = String::from_utf8(output.stdout)?;
	assert!(stdout.contains("\"written\":1"));
	assert!(stdout.contains("\"skipped\":1"));
	assert!(stdout.contains("\"status\":\"empty_name\""));
	assert!(stdout.contains("\"status\":\"written\""));
	assert!(stdout.contains("\"target_name\":\"foo\""));

	Ok(())
}

#[test]
fn unreadable_input_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::hsplit_cmd()
		.arg(tmp.path().join("missing.h"))
		.arg(tmp.path())
		.assert()
		.failure()
		.code(2)
		.stderr(predicates::str::contains("unable to read"));

	Ok(())
}

#[test]
fn unreadable_template_fails() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	std::fs::write(&input, SCENARIO)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(tmp.path())
		.arg(tmp.path().join("missing_template.h"))
		.assert()
		.failure()
		.stderr(predicates::str::contains("missing_template.h"));

	assert!(!tmp.path().join("foo.h").exists());
	Ok(())
}

#[test]
fn lists_every_marker_with_its_line() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:\nint a;\n//cut:foo\nint x;\n")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stdout(predicates::str::contains("Marker at line 1: '' skipped, empty name"))
		.stdout(predicates::str::contains("Marker at line 3: 'foo' saved"));

	Ok(())
}

#[test]
fn skip_reasons_are_logged_by_default() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, "//cut:foo\nint x;\n")?;
	std::fs::create_dir(&outdir)?;
	std::fs::write(outdir.join("foo.h"), "existing\n")?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.assert()
		.success()
		.stderr(predicates::str::contains("WARN"))
		.stderr(predicates::str::contains("it already exists"));

	Ok(())
}

#[test]
fn extra_arguments_are_ignored() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, SCENARIO)?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd()
		.arg(&input)
		.arg(&outdir)
		.arg("")
		.arg("ns")
		.arg("extra")
		.arg("more")
		.assert()
		.success();

	let foo = std::fs::read_to_string(outdir.join("foo.h"))?;
	assert!(foo.contains("namespace ns {"));
	assert!(outdir.join("bar.h").exists());

	Ok(())
}

#[test]
fn non_utf8_input_is_split() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let input = tmp.path().join("all.h");
	let outdir = tmp.path().join("out");
	std::fs::write(&input, b"//cut:foo\n// a\xf1o\nint x;\n")?;
	std::fs::create_dir(&outdir)?;

	common::hsplit_cmd().arg(&input).arg(&outdir).assert().success();

	assert_eq!(
		std::fs::read(outdir.join("foo.h"))?,
		b"#ifndef FOO_H\n#define FOO_H\n\n// a\xf1o\nint x;\n#endif // FOO_H\n".to_vec()
	);

	Ok(())
}
