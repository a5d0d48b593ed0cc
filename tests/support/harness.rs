use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated project directory for running the fireup
/// binary. The directory doubles as `HOME`, so no user config leaks in.
pub struct TestHarness {
    pub dir: TempDir,
    #[allow(dead_code)]
    pub config_path: PathBuf,
    pub fireup_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness with an empty `.fireup/config.md`.
    pub fn new() -> Self {
        Self::with_config("---\n---\n\n# Project Config\n")
    }

    /// Creates a harness with custom config content.
    pub fn with_config(config_content: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".fireup/config.md");

        fs::create_dir_all(config_path.parent().unwrap()).expect("Failed to create .fireup");
        fs::write(&config_path, config_content).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            fireup_binary: PathBuf::from(env!("CARGO_BIN_EXE_fireup")),
        }
    }

    /// Returns the base directory path (the TempDir path).
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Executes the fireup binary with the given arguments in the harness directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.fireup_binary)
            .args(args)
            .current_dir(self.path())
            .env("HOME", self.path())
            .env_remove("FIREUP_QUIET")
            .env("NO_COLOR", "1")
            .output()
            .expect("Failed to run fireup")
    }

    /// Lists the JSON submissions written into `dir` (relative to the harness).
    #[allow(dead_code)]
    pub fn submissions_in(&self, dir: &str) -> Vec<PathBuf> {
        let Ok(entries) = fs::read_dir(self.path().join(dir)) else {
            return Vec::new();
        };
        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();
        files
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
