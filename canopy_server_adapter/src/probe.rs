// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checking whether third-party packages are installed.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding the package search path.
///
/// Entries are separated the way `PATH` entries are on the host platform.
pub const SEARCH_PATH_ENV: &str = "CANOPY_ADAPTER_PATH";

/// Answers whether a named package is available.
pub trait PackageProbe {
    /// Returns `true` if `package` is installed.
    fn is_available(&self, package: &str) -> bool;
}

impl<F> PackageProbe for F
where
    F: Fn(&str) -> bool,
{
    fn is_available(&self, package: &str) -> bool {
        self(package)
    }
}

/// A probe over a fixed set of package names.
///
/// ```rust
/// use canopy_server_adapter::{FixedProbe, PackageProbe};
///
/// let probe = FixedProbe::new(["django"]).with("channels");
/// assert!(probe.is_available("channels"));
/// assert!(!probe.is_available("flask"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FixedProbe {
    available: BTreeSet<String>,
}

impl FixedProbe {
    /// Creates a probe that reports exactly `packages` as available.
    pub fn new<I, S>(packages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            available: packages.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds `package` to the available set.
    #[must_use]
    pub fn with(mut self, package: impl Into<String>) -> Self {
        self.available.insert(package.into());
        self
    }
}

impl PackageProbe for FixedProbe {
    fn is_available(&self, package: &str) -> bool {
        self.available.contains(package)
    }
}

/// A probe that looks for packages in a list of directories.
///
/// A package is available when some directory has an entry named after it,
/// a package directory or a single-file module.
#[derive(Clone, Debug, Default)]
pub struct SearchPathProbe {
    paths: Vec<PathBuf>,
}

impl SearchPathProbe {
    /// Creates a probe over `paths`, searched in order.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a probe from a platform search-path string such as `a:b:c`.
    pub fn from_search_path(search_path: &OsStr) -> Self {
        Self::new(std::env::split_paths(search_path))
    }

    /// Creates a probe from [`SEARCH_PATH_ENV`], or one with no paths if it is unset.
    pub fn from_env() -> Self {
        match std::env::var_os(SEARCH_PATH_ENV) {
            Some(search_path) => Self::from_search_path(&search_path),
            None => {
                tracing::debug!(variable = SEARCH_PATH_ENV, "package search path is unset");
                Self::default()
            }
        }
    }

    /// Returns the directories searched, in order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl PackageProbe for SearchPathProbe {
    fn is_available(&self, package: &str) -> bool {
        let module = format!("{package}.py");
        self.paths
            .iter()
            .any(|dir| dir.join(package).exists() || dir.join(&module).is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn fixed_probe_contains_only_its_packages() {
        let probe = FixedProbe::new(["django".to_string()]);
        assert!(probe.is_available("django"));
        assert!(!probe.is_available("channels"));
        assert!(!FixedProbe::default().is_available("django"));
    }

    #[test]
    fn closures_are_probes() {
        let probe = |package: &str| package.starts_with('d');
        assert!(probe.is_available("django"));
        assert!(!probe.is_available("channels"));
    }

    #[test]
    fn search_path_finds_package_directories_and_modules() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir(first.path().join("django")).unwrap();
        fs::write(second.path().join("channels.py"), "").unwrap();

        let probe = SearchPathProbe::new([first.path(), second.path()]);
        assert!(probe.is_available("django"));
        assert!(probe.is_available("channels"));
        assert!(!probe.is_available("flask"));
    }

    #[test]
    fn search_path_string_is_split() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        fs::create_dir(second.path().join("channels")).unwrap();

        let joined = std::env::join_paths([first.path(), second.path()]).unwrap();
        let probe = SearchPathProbe::from_search_path(&joined);
        assert_eq!(
            probe.paths(),
            [first.path().to_path_buf(), second.path().to_path_buf()]
        );
        assert!(probe.is_available("channels"));
    }

    #[test]
    fn empty_search_path_finds_nothing() {
        let probe = SearchPathProbe::default();
        assert!(probe.paths().is_empty());
        assert!(!probe.is_available("django"));
    }
}
