use std::process::Command;

fn main() {
  embed_build_info();
  set_rerun_conditions();
}

fn embed_build_info() {
  // Short commit hash and commit date for `--version`; "unknown" outside a
  // git checkout or without git installed.
  let git_hash = git_output(&["rev-parse", "--short", "HEAD"]);
  println!("cargo:rustc-env=GIT_HASH={git_hash}");

  let git_date = git_output(&["log", "-1", "--format=%cs"]);
  println!("cargo:rustc-env=GIT_DATE={git_date}");
}

fn git_output(args: &[&str]) -> String {
  Command::new("git")
    .args(args)
    .output()
    .ok()
    .filter(|output| output.status.success())
    .and_then(|output| String::from_utf8(output.stdout).ok())
    .map(|s| s.trim().to_string())
    .filter(|s| !s.is_empty())
    .unwrap_or_else(|| "unknown".to_string())
}

fn set_rerun_conditions() {
  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-changed=.git/HEAD");
}
