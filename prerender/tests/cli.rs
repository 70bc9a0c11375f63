//! End-to-end tests for the prerender binary.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn prerender() -> Command {
    cargo_bin_cmd!("antimatter-prerender")
}

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        prerender()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--config"))
            .stdout(predicate::str::contains("--out"));
    }

    #[test]
    fn shows_version() {
        prerender()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod rendering {
    use super::*;

    #[test]
    fn writes_index_with_defaults() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");

        prerender().arg("--out").arg(&out).assert().success();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Antimatter AI — Next-Generation AI Platform"));
        assert!(html.contains("id=\"pricing\""));
        assert!(html.contains("All rights reserved."));
    }

    #[test]
    fn applies_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("site.toml");
        fs::write(
            &config,
            "copyright_year = 2029\n[meta]\ntitle = \"Antimatter AI Docs\"\n",
        )
        .unwrap();
        let out = tmp.path().join("public");

        prerender()
            .arg("--config")
            .arg(&config)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let html = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title>Antimatter AI Docs</title>"));
        assert!(html.contains("© 2029 Antimatter AI, Inc."));
    }

    #[test]
    fn logs_output_path_on_stderr() {
        let tmp = TempDir::new().unwrap();

        prerender()
            .arg("--out")
            .arg(tmp.path())
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("index.html"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_config_fails() {
        let tmp = TempDir::new().unwrap();

        prerender()
            .arg("--config")
            .arg(tmp.path().join("nope.toml"))
            .arg("--out")
            .arg(tmp.path().join("dist"))
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("nope.toml"));

        assert!(!tmp.path().join("dist").exists());
    }

    #[test]
    fn invalid_config_fails() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("broken.toml");
        fs::write(&config, "copyright_year = \"soon\"\n").unwrap();

        prerender()
            .arg("--config")
            .arg(&config)
            .arg("--out")
            .arg(tmp.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid config"));
    }
}
