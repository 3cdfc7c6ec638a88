//! Shared testing utilities for gensync CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `gensync` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("gensync").expect("Failed to locate gensync binary");
        cmd.current_dir(self.work_dir());
        cmd
    }

    /// Write `gensync.toml` pointing at `endpoint`, with the given generator list.
    ///
    /// `formatter: None` disables index formatting.
    pub fn write_config(&self, endpoint: &str, names: &[&str], formatter: Option<&str>) {
        let names = names.iter().map(|n| format!("\"{}\"", n)).collect::<Vec<_>>().join(", ");
        let index = match formatter {
            Some(program) => format!("format = true\nformatter = \"{}\"", program),
            None => "format = false".to_string(),
        };
        let content = format!(
            r#"[store]
dir = "generators"

[remote]
endpoint = "{}"
timeout_secs = 5

[index]
{}

[generators]
names = [{}]
"#,
            endpoint, index, names
        );
        fs::write(self.work_dir.join("gensync.toml"), content).expect("Failed to write config");
    }

    /// Directory holding generator artifacts.
    pub fn store_dir(&self) -> PathBuf {
        self.work_dir.join("generators")
    }

    /// Write an artifact directly, bypassing the CLI.
    pub fn seed_artifact(&self, name: &str, body: &str) {
        fs::create_dir_all(self.store_dir()).unwrap();
        fs::write(
            self.store_dir().join(format!("{}.perchance", name)),
            format!("// https://perchance.org/{}\n// Fetched at: earlier\n\n{}", name, body),
        )
        .unwrap();
    }

    /// Body of a stored artifact with the provenance header removed.
    pub fn artifact_body(&self, name: &str) -> Option<String> {
        let text = fs::read_to_string(self.store_dir().join(format!("{}.perchance", name))).ok()?;
        gensync::GeneratorArtifact::strip_header(&text).map(str::to_string)
    }

    /// Contents of the generated index, if present.
    pub fn index_contents(&self) -> Option<String> {
        fs::read_to_string(self.store_dir().join("mod.rs")).ok()
    }

    /// Names of stored artifacts, sorted.
    pub fn stored_names(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.store_dir()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "perchance"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().to_string()))
            .collect();
        names.sort();
        names
    }

    /// Root of the temporary tree.
    pub fn root(&self) -> &Path {
        self.root.path()
    }
}

/// Response body in the shape of the generator endpoint.
#[allow(dead_code)]
pub fn generators_body(entries: &[(&str, &str)]) -> String {
    let generators: Vec<serde_json::Value> = entries
        .iter()
        .map(|(name, text)| serde_json::json!({ "name": name, "modelText": text }))
        .collect();
    serde_json::json!({ "generators": generators }).to_string()
}

/// Extract the names listed in a generated index, in file order.
#[allow(dead_code)]
pub fn index_names(index: &str) -> Vec<String> {
    index
        .lines()
        .filter_map(|line| line.trim().strip_prefix("(\""))
        .filter_map(|rest| rest.split('"').next())
        .map(str::to_string)
        .collect()
}
