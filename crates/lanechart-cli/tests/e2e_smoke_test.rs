use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use lanechart_cli::{Args, run};

/// Directory of demo scripts at the workspace root.
fn demos_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("crate lives two levels below the workspace root")
        .join("demos")
}

/// Lists the `.lc` scripts directly inside `dir`, sorted.
fn collect_scripts(dir: &Path) -> Vec<PathBuf> {
    let mut scripts: Vec<PathBuf> = fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "lc"))
                .collect()
        })
        .unwrap_or_default();
    scripts.sort();
    scripts
}

fn args_for(script: &Path, output: &Path) -> Args {
    Args {
        input: script.to_path_buf(),
        output: output.to_path_buf(),
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let out_dir = tempdir().expect("Failed to create temp directory");
    let scripts = collect_scripts(&demos_dir());
    assert!(!scripts.is_empty(), "No demo scripts found in demos/");

    let mut failures = Vec::new();
    for script in &scripts {
        let stem = script.file_stem().unwrap().to_string_lossy();
        let output = out_dir.path().join(format!("{stem}.svg"));

        match run(&args_for(script, &output)) {
            Ok(()) => {
                let svg = fs::read_to_string(&output).expect("output was written");
                assert!(svg.contains("<svg"), "{} produced no SVG", script.display());
            }
            Err(err) => failures.push((script.clone(), err)),
        }
    }

    for (path, err) in &failures {
        eprintln!("  - {}: {}", path.display(), err);
    }
    assert!(failures.is_empty(), "{} demo(s) failed", failures.len());
}

#[test]
fn e2e_smoke_test_error_demos() {
    let out_dir = tempdir().expect("Failed to create temp directory");
    let scripts = collect_scripts(&demos_dir().join("errors"));
    assert!(!scripts.is_empty(), "No error demos found in demos/errors/");

    let succeeded: Vec<_> = scripts
        .iter()
        .filter(|script| {
            let stem = script.file_stem().unwrap().to_string_lossy();
            let output = out_dir.path().join(format!("error_{stem}.svg"));
            run(&args_for(script, &output)).is_ok()
        })
        .collect();

    for path in &succeeded {
        eprintln!("  - {}", path.display());
    }
    assert!(
        succeeded.is_empty(),
        "{} error demo(s) succeeded unexpectedly",
        succeeded.len()
    );
}

#[test]
fn e2e_explicit_config_is_applied() {
    let work_dir = tempdir().expect("Failed to create temp directory");
    let config_path = work_dir.path().join("config.toml");
    fs::write(&config_path, "[layout]\nwidth = 640.0\n").unwrap();

    let output = work_dir.path().join("login.svg");
    let mut args = args_for(&demos_dir().join("login.lc"), &output);
    args.config = Some(config_path);

    run(&args).expect("login demo renders");
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("viewBox=\"0 0 640 "));
}

#[test]
fn e2e_missing_input_is_io_error() {
    let work_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(
        &work_dir.path().join("absent.lc"),
        &work_dir.path().join("absent.svg"),
    );

    let err = run(&args).unwrap_err();
    assert!(matches!(err, lanechart::LanechartError::Io(_)));
}
