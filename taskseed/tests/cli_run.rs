//! CLI tests for `taskseed run` and the per-profile seed binaries.
//!
//! Spawns the built binaries against scratch manifests and configs whose
//! commands touch files, then checks exit codes and which commands actually ran.

#![cfg(unix)]

use std::process::{Command, Output};

use taskseed::exit_codes;
use taskseed::test_support::Scratch;

fn taskseed(scratch: &Scratch, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_taskseed"))
        .current_dir(scratch.path())
        .args(args)
        .output()
        .expect("taskseed")
}

/// Run a no-argument profile binary inside `scratch`.
fn seed(bin: &str, scratch: &Scratch) -> Output {
    Command::new(bin)
        .current_dir(scratch.path())
        .output()
        .expect("seed binary")
}

#[test]
fn run_executes_every_task_in_order() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write(
            "tasks.toml",
            r#"
[manifest]
name = "ordered"

[[task]]
command = "echo one >> log.txt"

[[task]]
command = "echo two >> log.txt"

[[task]]
command = "echo three >> log.txt"
"#,
        )
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        scratch.read("log.txt").expect("read log").as_deref(),
        Some("one\ntwo\nthree\n")
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Task created successfully.").count(), 3);
    assert!(stdout.contains("[2/3] Executing: echo two >> log.txt..."));
}

#[test]
fn run_stops_at_first_failure() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write(
            "tasks.toml",
            r#"
[manifest]
name = "failing"

[[task]]
command = "echo one >> log.txt"

[[task]]
command = "exit 3"

[[task]]
command = "echo three >> log.txt"
"#,
        )
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert_eq!(
        scratch.read("log.txt").expect("read log").as_deref(),
        Some("one\n")
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Task creation failed."));
    assert!(stderr.contains("task 2 failed"));
    assert!(stderr.contains("command exited with status 3"));
}

#[test]
fn empty_manifest_succeeds_without_invocations() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write("tasks.toml", "[manifest]\nname = \"empty\"\n")
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Executing"));
}

#[test]
fn plan_reaches_the_child_as_one_argument() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write(
            "tasks.toml",
            r#"
[manifest]
name = "quoting"
preamble = "RULE"

[[task]]
command = '''printf '%s\n' > args.txt'''
plan = '''Run 'git commit -m "chore: init"'
| a | $HOME | `x` |'''
"#,
        )
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        scratch.read("args.txt").expect("read args").as_deref(),
        Some("--plan\nRULE\n\nRun 'git commit -m \"chore: init\"'\n| a | $HOME | `x` |\n")
    );
}

#[test]
fn structured_tasks_use_configured_program() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write("taskseed.toml", "program = \"echo\"\n")
        .expect("config");
    scratch
        .write(
            "tasks.toml",
            r#"
[manifest]
name = "structured"
preamble = "RULE"

[[task]]
title = "Define the 'Product' entity"
priority = "high"
labels = ["db", "jpa"]
acceptance_criteria = "Entity exists.,Human review."
"#,
        )
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(
        "task create Define the 'Product' entity --priority high --labels db,jpa --ac Entity exists.,Human review.\n"
    ));
    assert!(!stdout.contains("RULE"));
}

#[test]
fn dry_run_prints_commands_without_running_them() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write(
            "tasks.toml",
            "[manifest]\nname = \"dry\"\n[[task]]\ncommand = \"echo ran >> log.txt\"\n",
        )
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml", "--dry-run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(String::from_utf8_lossy(&output.stdout).contains("echo ran >> log.txt"));
    assert_eq!(scratch.read("log.txt").expect("read log"), None);
}

#[test]
fn builtin_profile_dry_run_renders_fourteen_commands() {
    let scratch = Scratch::new().expect("scratch");

    let output = taskseed(&scratch, &["run", "spring-boot", "--dry-run"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("backlog task create ").count(), 14);
    assert!(stdout.contains("Golden Rule"));
}

#[test]
fn list_shows_builtin_profiles() {
    let scratch = Scratch::new().expect("scratch");

    let output = taskseed(&scratch, &["list"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("spring-boot\t14 tasks"));
    assert!(stdout.contains("helidon\t14 tasks"));
}

#[test]
fn invalid_manifest_exits_with_failure() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write("tasks.toml", "[manifest]\nname = \"Bad Name\"\n")
        .expect("manifest");

    let output = taskseed(&scratch, &["run", "--manifest", "tasks.toml"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    assert!(String::from_utf8_lossy(&output.stderr).contains("manifest.name"));
}

#[test]
fn init_writes_default_config_once() {
    let scratch = Scratch::new().expect("scratch");

    let first = taskseed(&scratch, &["init"]);
    assert_eq!(first.status.code(), Some(exit_codes::OK));
    let written = scratch.read("taskseed.toml").expect("read config").expect("config exists");
    assert!(written.contains("program = \"backlog\""));

    let second = taskseed(&scratch, &["init"]);
    assert_eq!(second.status.code(), Some(exit_codes::FAILED));
    assert!(String::from_utf8_lossy(&second.stderr).contains("already exists"));
}

#[test]
fn seed_binaries_create_every_builtin_task() {
    for bin in [
        env!("CARGO_BIN_EXE_seed-spring-boot"),
        env!("CARGO_BIN_EXE_seed-helidon"),
    ] {
        let scratch = Scratch::new().expect("scratch");
        scratch
            .write("taskseed.toml", "program = \"true\"\n")
            .expect("config");

        let output = seed(bin, &scratch);

        assert_eq!(output.status.code(), Some(exit_codes::OK), "{bin}");
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.matches("Task created successfully.").count(), 14, "{bin}");
        assert!(stdout.contains("[14/14] Executing: true task create "), "{bin}");
    }
}

#[test]
fn seed_binary_stops_after_first_failed_task() {
    let scratch = Scratch::new().expect("scratch");
    scratch
        .write("taskseed.toml", "program = \"false\"\n")
        .expect("config");

    let output = seed(env!("CARGO_BIN_EXE_seed-helidon"), &scratch);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Executing:").count(), 1);
    assert!(!stdout.contains("Task created successfully."));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Task creation failed."));
    assert!(stderr.contains("task 1 failed"));
}
