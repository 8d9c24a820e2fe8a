// File: ./src/context.rs
/*! Application context abstraction for filesystem paths.

`AppContext` encapsulates where the tool reads its configuration and writes
its outputs. Two concrete implementations are provided:

- `StandardContext`: config under `directories::ProjectDirs`, outputs in a
  local `output/` directory, both overridable from the command line.
- `TestContext`: a unique temporary directory for isolated tests, removed
  when dropped.

Code that performs filesystem IO takes a `&dyn AppContext` argument; there
are no hidden globals or environment-variable lookups.
*/

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

/// Defines the filesystem context for the application.
///
/// The trait is object-safe so callers can hold `Arc<dyn AppContext>`.
pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_config_dir(&self) -> Result<PathBuf>;
    fn get_output_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_history_path(&self) -> Result<PathBuf> {
        Ok(self.get_output_dir()?.join("history.json"))
    }
}

// --- Production Implementation ---

#[derive(Clone, Debug)]
pub struct StandardContext {
    override_root: Option<PathBuf>,
    output_override: Option<PathBuf>,
}

impl StandardContext {
    /// When `override_root` is set, config and output both live under that
    /// root. `output_override` wins over everything for the output side.
    pub fn new(override_root: Option<PathBuf>, output_override: Option<PathBuf>) -> Self {
        Self {
            override_root,
            output_override,
        }
    }

    fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
        if !path.exists() {
            std::fs::create_dir_all(&path)
                .with_context(|| format!("Failed to create directory: {:?}", path))?;
        }
        Ok(path)
    }

    fn get_proj_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "wishcal", "wishcal")
    }
}

impl AppContext for StandardContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("config"));
        }
        let proj = Self::get_proj_dirs().ok_or_else(|| anyhow::anyhow!("No home directory"))?;
        Self::ensure_exists(proj.config_dir().to_path_buf())
    }

    fn get_output_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.output_override {
            return Self::ensure_exists(dir.clone());
        }
        if let Some(root) = &self.override_root {
            return Self::ensure_exists(root.join("output"));
        }
        // The calendar and charts are publishable artifacts; they default
        // to a local directory rather than some buried data dir.
        Self::ensure_exists(PathBuf::from("output"))
    }
}

// --- Test Implementation ---

#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    /// Creates a new TestContext backed by a unique temporary directory.
    ///
    /// The directory is created immediately and removed when the
    /// `TestContext` is dropped.
    pub fn new() -> Self {
        let uuid = uuid::Uuid::new_v4();
        let root = std::env::temp_dir().join(format!("wishcal_test_{}", uuid));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_config_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("config");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }

    fn get_output_dir(&self) -> Result<PathBuf> {
        let p = self.root.join("output");
        std::fs::create_dir_all(&p)?;
        Ok(p)
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Best-effort cleanup; ignore errors.
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

// Convenience alias for users who want to store the context in an Arc.
pub type SharedContext = std::sync::Arc<dyn AppContext>;
