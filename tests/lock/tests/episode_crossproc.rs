//! Cross-process determinism lock.
//!
//! Spawns the `episode_fixture` binary under several environment variants
//! and asserts that all produce identical output. This proves that episode
//! execution, trace digesting, and transcript rendering are not influenced
//! by process-level state (cwd, locale, env vars).

use std::path::Path;
use std::process::Command;

/// Resolve the path to the compiled `episode_fixture` binary.
fn binary_path() -> String {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("episode_fixture");
    path.to_string_lossy().to_string()
}

/// Resolve the workspace root.
fn workspace_root() -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("tests/ exists")
        .parent()
        .expect("workspace root exists")
        .to_string_lossy()
        .to_string()
}

/// Run the binary with the given cwd and environment overrides.
fn run_variant(work_dir: &str, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();

    let mut command = Command::new(&bin);
    command.current_dir(work_dir);

    // Clear locale-related env to establish a baseline, then apply overrides.
    command
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE");

    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!("failed to spawn {bin} (work_dir={work_dir}, overrides={env_overrides:?}): {e}")
    });

    assert!(
        output.status.success(),
        "episode_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

#[test]
fn crossproc_determinism_across_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, &[]);

    assert!(
        baseline.contains("world_id=detour:3x3"),
        "baseline output missing the detour world"
    );
    assert!(
        baseline.contains("trace_digest=sha256:"),
        "baseline output missing trace digests"
    );

    let variant_cwd = run_variant("/tmp", &[]);
    assert_eq!(
        baseline, variant_cwd,
        "output differs when cwd changes from {root} to /tmp"
    );

    let variant_locale = run_variant(&root, &[("LC_ALL", "C"), ("LANG", "C")]);
    assert_eq!(
        baseline, variant_locale,
        "output differs when LC_ALL=C LANG=C"
    );

    let variant_noise = run_variant(
        &root,
        &[("WAYFIND_UNUSED_VAR", "noise"), ("TZ", "UTC+7")],
    );
    assert_eq!(baseline, variant_noise, "output differs under spurious env");
}
