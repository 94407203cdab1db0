//! Package share-directory resolution and package-relative file loading

use crate::{
    error::{LaunchError, Result},
    file_cache::read_file_cached,
};
use dashmap::DashMap;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// ROS 2 distributions probed under `/opt/ros` when nothing else matches.
const FALLBACK_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Access to installed package resources.
///
/// Only [`resolve_share_dir`](PackageResolver::resolve_share_dir) is
/// required. The loaders read `<share dir>/<relative path>` and can be
/// overridden to serve content from somewhere other than the filesystem.
pub trait PackageResolver {
    /// Absolute share directory of `package`.
    fn resolve_share_dir(&self, package: &str) -> Result<PathBuf>;

    /// Contents of a package-relative text file.
    fn load_text(&self, package: &str, relative_path: &str) -> Result<String> {
        let path = self.resolve_share_dir(package)?.join(relative_path);
        log::debug!("Loading {} from package {}", relative_path, package);
        read_file_cached(&path)
    }

    /// Parsed contents of a package-relative YAML file.
    fn load_yaml(&self, package: &str, relative_path: &str) -> Result<Value> {
        let path = self.resolve_share_dir(package)?.join(relative_path);
        log::debug!("Loading YAML {} from package {}", relative_path, package);
        let content = read_file_cached(&path)?;
        serde_yaml::from_str(&content).map_err(|e| LaunchError::YamlErrorWithContext {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Resolver over a list of install prefixes, each laid out as
/// `<prefix>/share/<package>`. The first prefix containing the package wins.
#[derive(Debug, Default)]
pub struct AmentIndex {
    prefixes: Vec<PathBuf>,
    share_cache: DashMap<String, PathBuf>,
}

impl AmentIndex {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        let mut index = Self::default();
        for prefix in prefixes {
            index.push_prefix(prefix);
        }
        index
    }

    /// Build the search list from the environment: every entry of
    /// `AMENT_PREFIX_PATH`, then `/opt/ros/$ROS_DISTRO`, then the common
    /// distributions.
    pub fn from_env() -> Self {
        let mut prefixes = Vec::new();

        if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
            prefixes.extend(
                prefix_path
                    .split(':')
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            );
        }

        if let Ok(distro) = std::env::var("ROS_DISTRO") {
            prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
        }

        for distro in FALLBACK_DISTROS {
            prefixes.push(PathBuf::from(format!("/opt/ros/{}", distro)));
        }

        Self::new(prefixes)
    }

    /// Put `extra` ahead of the existing search list.
    pub fn with_prefixes_first<I>(self, extra: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut prefixes: Vec<PathBuf> = extra.into_iter().collect();
        prefixes.extend(self.prefixes);
        Self::new(prefixes)
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    /// Prefixes are stored absolute so resolved paths stay valid from any
    /// working directory.
    fn push_prefix(&mut self, prefix: PathBuf) {
        let prefix = std::path::absolute(&prefix).unwrap_or(prefix);
        if !self.prefixes.contains(&prefix) {
            self.prefixes.push(prefix);
        }
    }

    fn find_share_dir(&self, package: &str) -> Option<PathBuf> {
        self.prefixes
            .iter()
            .map(|prefix| prefix.join("share").join(package))
            .find(|share| share.is_dir())
    }
}

impl PackageResolver for AmentIndex {
    fn resolve_share_dir(&self, package: &str) -> Result<PathBuf> {
        if let Some(cached) = self.share_cache.get(package) {
            return Ok(cached.clone());
        }

        let share = self
            .find_share_dir(package)
            .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))?;
        log::debug!("Package {} found at {}", package, share.display());
        self.share_cache.insert(package.to_string(), share.clone());
        Ok(share)
    }
}

/// Install prefix owning a `<prefix>/share/<package>` directory.
pub(crate) fn install_prefix_of(share_dir: &Path) -> &Path {
    share_dir
        .parent()
        .and_then(Path::parent)
        .unwrap_or(share_dir)
}
