use std::path::{Path, PathBuf};

use crate::error::AssetError;

/// Resource directory, resolved once at process start and handed to
/// whatever needs to open asset files.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePaths {
    root: PathBuf,
}

impl ResourcePaths {
    /// Use `root` as-is.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the resource directory.
    ///
    /// Order: `explicit`, then the `env_var` environment variable, then
    /// `resources/` beside the executable, then `resources/` under the
    /// working directory. The first candidate that exists wins; explicit
    /// and environment values must exist.
    pub fn resolve(explicit: Option<&Path>, env_var: &str) -> Result<Self, AssetError> {
        if let Some(dir) = explicit {
            return Self::existing(dir.to_path_buf());
        }
        if let Some(dir) = std::env::var_os(env_var) {
            return Self::existing(PathBuf::from(dir));
        }

        let mut candidates = Vec::new();
        if let Some(exe_dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(exe_dir.join("resources"));
        }
        if let Ok(cwd) = std::env::current_dir() {
            candidates.push(cwd.join("resources"));
        }

        match candidates.iter().find(|dir| dir.is_dir()) {
            Some(dir) => {
                log::info!("resources: {}", dir.display());
                Ok(Self::new(dir.clone()))
            }
            None => Err(AssetError::MissingResourceDir(
                candidates.pop().unwrap_or_else(|| PathBuf::from("resources")),
            )),
        }
    }

    fn existing(dir: PathBuf) -> Result<Self, AssetError> {
        if dir.is_dir() {
            log::info!("resources: {}", dir.display());
            Ok(Self::new(dir))
        } else {
            Err(AssetError::MissingResourceDir(dir))
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a resource relative to the root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}
