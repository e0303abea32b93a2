mod common;

use std::fs;

use anyhow::Result;
use common::{HEADER, Workspace};
use put_license::RewriteError;
use put_license::markers::MarkerTable;
use put_license::rewriter::{RewriteOptions, Rewriter, run};

#[test]
fn test_cpp_scenario() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a.cpp", "#include <x>\nint main(){}")?;

  run(&ws.root(), &ws.header())?;

  assert_eq!(ws.read("a.cpp")?, "// LICENSE\n#include <x>\nint main(){}");
  Ok(())
}

#[test]
fn test_hpp_discards_content_before_guard() -> Result<()> {
  let ws = Workspace::new("/* Copyright (c) ACME */\n")?;
  ws.write(
    "include/widget.hpp",
    "// Old header\n// with two lines\n#ifndef WIDGET_HPP\n#define WIDGET_HPP\n#include <string>\n#endif\n",
  )?;

  run(&ws.root(), &ws.header())?;

  assert_eq!(
    ws.read("include/widget.hpp")?,
    "/* Copyright (c) ACME */\n#ifndef WIDGET_HPP\n#define WIDGET_HPP\n#include <string>\n#endif\n"
  );
  Ok(())
}

#[test]
fn test_unrecognized_extensions_untouched() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("b.txt", "#include is just text here")?;
  ws.write("c.h", "#ifndef C_H\n")?;
  ws.write("d.CPP", "#include <d>\n")?;
  ws.write("Makefile", "all:\n")?;

  let summary = run(&ws.root(), &ws.header())?;

  assert_eq!(ws.read("b.txt")?, "#include is just text here");
  assert_eq!(ws.read("c.h")?, "#ifndef C_H\n");
  assert_eq!(ws.read("d.CPP")?, "#include <d>\n");
  assert_eq!(ws.read("Makefile")?, "all:\n");
  assert_eq!(summary.files_scanned, 4);
  assert_eq!(summary.files_skipped, 4);
  assert!(summary.rewritten.is_empty());
  Ok(())
}

#[test]
fn test_recurses_into_subdirectories() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a/b/c/deep.cpp", "#include \"deep.hpp\"\n")?;
  ws.write("a/b/deep.hpp", "#ifndef DEEP\n#endif\n")?;

  let summary = run(&ws.root(), &ws.header())?;

  assert_eq!(summary.files_rewritten(), 2);
  assert_eq!(ws.read("a/b/c/deep.cpp")?, "// LICENSE\n#include \"deep.hpp\"\n");
  assert_eq!(ws.read("a/b/deep.hpp")?, "// LICENSE\n#ifndef DEEP\n#endif\n");
  Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
  let ws = Workspace::new(HEADER)?;

  let summary = run(&ws.root(), &ws.header())?;

  assert_eq!(summary.files_scanned, 0);
  assert!(summary.rewritten.is_empty());
  Ok(())
}

#[test]
fn test_byte_exact_for_non_utf8_content() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  let mut content = vec![0xEF, 0xBB, 0xBF, 0xC3, 0x28];
  content.extend_from_slice(b"#include <latin1>\n// caf\xE9\n");
  ws.write("legacy.cpp", &content)?;

  run(&ws.root(), &ws.header())?;

  let mut expected = HEADER.as_bytes().to_vec();
  expected.extend_from_slice(b"#include <latin1>\n// caf\xE9\n");
  assert_eq!(ws.read_bytes("legacy.cpp")?, expected);
  Ok(())
}

#[test]
fn test_header_inserted_verbatim() -> Result<()> {
  let header = "/*\n * Licensed under the Apache License, Version 2.0\n */\n\n";
  let ws = Workspace::new(header)?;
  ws.write("x.cpp", "#include <x>\n")?;

  run(&ws.root(), &ws.header())?;

  assert_eq!(ws.read("x.cpp")?, format!("{header}#include <x>\n"));
  Ok(())
}

#[test]
fn test_missing_marker_aborts_without_rollback() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a.cpp", "#include <a>\n")?;
  ws.write("b.hpp", "#pragma once\n")?;
  ws.write("c.cpp", "#include <c>\n")?;

  let err = run(&ws.root(), &ws.header()).expect_err("b.hpp has no #ifndef");

  match &err {
    RewriteError::MarkerNotFound { path, marker } => {
      assert_eq!(path, &ws.root().join("b.hpp"));
      assert_eq!(marker, "#ifndef");
    }
    other => panic!("unexpected error: {other}"),
  }
  assert!(err.to_string().contains("#ifndef"));
  assert!(err.to_string().contains("b.hpp"));

  // Already processed stays rewritten, the failing file and later files are untouched.
  assert_eq!(ws.read("a.cpp")?, "// LICENSE\n#include <a>\n");
  assert_eq!(ws.read("b.hpp")?, "#pragma once\n");
  assert_eq!(ws.read("c.cpp")?, "#include <c>\n");
  Ok(())
}

#[test]
fn test_rerun_duplicates_header_that_starts_with_marker() -> Result<()> {
  let header = "#include \"license_notice.h\"\n";
  let ws = Workspace::new(header)?;
  ws.write("a.cpp", "#include <x>\n")?;

  run(&ws.root(), &ws.header())?;
  run(&ws.root(), &ws.header())?;

  assert_eq!(ws.read("a.cpp")?, format!("{header}{header}#include <x>\n"));
  Ok(())
}

#[test]
fn test_rerun_replaces_header_without_marker() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a.cpp", "#include <x>\n")?;

  run(&ws.root(), &ws.header())?;
  let once = ws.read("a.cpp")?;
  run(&ws.root(), &ws.header())?;

  // The previous header sits before the marker, so it is discarded and replaced.
  assert_eq!(ws.read("a.cpp")?, once);
  Ok(())
}

#[test]
fn test_path_errors() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  let missing_root = ws.dir.path().join("missing");
  let missing_header = ws.dir.path().join("missing.txt");

  assert!(matches!(
    run(&missing_root, &ws.header()),
    Err(RewriteError::PathNotFound { path }) if path == missing_root
  ));
  assert!(matches!(
    run(&ws.header(), &ws.header()),
    Err(RewriteError::NotADirectory { .. })
  ));
  assert!(matches!(
    run(&ws.root(), &missing_header),
    Err(RewriteError::PathNotFound { path }) if path == missing_header
  ));
  Ok(())
}

#[test]
fn test_header_directory_is_unreadable() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  let header_dir = ws.dir.path().join("header_dir");
  fs::create_dir(&header_dir)?;

  let err = run(&ws.root(), &header_dir).expect_err("a directory is not a readable header");
  assert!(matches!(err, RewriteError::UnreadableFile { .. }));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_read_only_target_is_unwritable() -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let ws = Workspace::new(HEADER)?;
  let path = ws.write("locked.cpp", "#include <x>\n")?;
  fs::set_permissions(&path, fs::Permissions::from_mode(0o444))?;

  // Root ignores permission bits, so only assert when the write is actually refused.
  if fs::OpenOptions::new().write(true).open(&path).is_ok() {
    return Ok(());
  }

  let err = run(&ws.root(), &ws.header()).expect_err("file is read-only");
  assert!(matches!(err, RewriteError::UnwritableFile { .. }));
  assert_eq!(ws.read("locked.cpp")?, "#include <x>\n");
  Ok(())
}

#[test]
fn test_dry_run_reports_without_writing() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a.cpp", "// stale\n#include <a>\n")?;
  ws.write("b.txt", "text")?;

  let rewriter = Rewriter::new(
    MarkerTable::default(),
    RewriteOptions {
      dry_run: true,
      ..RewriteOptions::default()
    },
    None,
  );
  let summary = rewriter.run(&ws.root(), &ws.header())?;

  assert_eq!(summary.rewritten, vec![ws.root().join("a.cpp")]);
  assert_eq!(summary.files_skipped, 1);
  assert_eq!(ws.read("a.cpp")?, "// stale\n#include <a>\n");
  Ok(())
}

#[test]
fn test_dry_run_still_fails_on_missing_marker() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  ws.write("a.cpp", "int main() {}\n")?;

  let rewriter = Rewriter::new(
    MarkerTable::default(),
    RewriteOptions {
      dry_run: true,
      ..RewriteOptions::default()
    },
    None,
  );

  assert!(matches!(
    rewriter.run(&ws.root(), &ws.header()),
    Err(RewriteError::MarkerNotFound { .. })
  ));
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_follow_symlinks_option() -> Result<()> {
  let ws = Workspace::new(HEADER)?;
  let outside = tempfile::TempDir::new()?;
  fs::write(outside.path().join("ext.cpp"), "#include <ext>\n")?;
  std::os::unix::fs::symlink(outside.path(), ws.root().join("vendor"))?;

  run(&ws.root(), &ws.header())?;
  assert_eq!(fs::read_to_string(outside.path().join("ext.cpp"))?, "#include <ext>\n");

  let rewriter = Rewriter::new(
    MarkerTable::default(),
    RewriteOptions {
      follow_symlinks: true,
      ..RewriteOptions::default()
    },
    None,
  );
  let summary = rewriter.run(&ws.root(), &ws.header())?;

  assert_eq!(summary.files_rewritten(), 1);
  assert_eq!(
    fs::read_to_string(outside.path().join("ext.cpp"))?,
    "// LICENSE\n#include <ext>\n"
  );
  Ok(())
}

#[cfg(unix)]
#[test]
fn test_follow_symlinks_rewrites_linked_file_once() -> Result<()> {
  let header = "#include \"lic.h\"\n";
  let ws = Workspace::new(header)?;
  ws.write("a.cpp", "#include <x>\n")?;
  std::os::unix::fs::symlink(ws.root().join("a.cpp"), ws.root().join("b.cpp"))?;

  let rewriter = Rewriter::new(
    MarkerTable::default(),
    RewriteOptions {
      follow_symlinks: true,
      ..RewriteOptions::default()
    },
    None,
  );
  let summary = rewriter.run(&ws.root(), &ws.header())?;

  assert_eq!(summary.rewritten, vec![ws.root().join("a.cpp")]);
  assert_eq!(ws.read("a.cpp")?, "#include \"lic.h\"\n#include <x>\n");
  Ok(())
}
