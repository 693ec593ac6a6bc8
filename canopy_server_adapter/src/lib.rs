// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Server Adapter: plugs the Canopy server into a web framework.
//!
//! The adapter needs two third-party packages, `django` and `channels`.
//! [`load`] checks both, in that order, and fails on the first one missing
//! with a message naming it. On success it returns the [`AdapterConfig`] the
//! framework registers, also named by [`DEFAULT_APP_CONFIG`].
//!
//! Nothing else in Canopy depends on this crate; glyph schemas are usable
//! without it.
//!
//! ```rust
//! use canopy_server_adapter::{AdapterError, DEFAULT_APP_CONFIG, FixedProbe, load};
//!
//! let config = load(&FixedProbe::new(["django", "channels"])).unwrap();
//! assert_eq!(config.qualified_name(), DEFAULT_APP_CONFIG);
//!
//! let err = load(&FixedProbe::new(["django"])).unwrap_err();
//! assert_eq!(err.package(), "channels");
//! ```
//!
//! Packages are found through a [`PackageProbe`]. [`SearchPathProbe::from_env`]
//! searches the directories listed in the `CANOPY_ADAPTER_PATH` environment
//! variable.

mod error;
mod probe;

pub use error::AdapterError;
pub use probe::{FixedProbe, PackageProbe, SEARCH_PATH_ENV, SearchPathProbe};

/// Packages the adapter needs, with the message reported when each is missing.
pub const REQUIRED_PACKAGES: [(&str, &str); 2] = [
    ("django", "django is required by canopy.server.django"),
    (
        "channels",
        "The package channels is required by canopy.server.django and must be installed",
    ),
];

/// Qualified name of the app configuration the framework loads by default.
pub const DEFAULT_APP_CONFIG: &str = "canopy.server.django.CanopyConfig";

/// The app configuration registered with the framework.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AdapterConfig {
    /// Module the app lives in.
    pub module: &'static str,
    /// Name of the configuration class.
    pub class: &'static str,
    /// Short app label.
    pub label: &'static str,
}

impl AdapterConfig {
    /// The adapter's configuration.
    pub const DEFAULT: Self = Self {
        module: "canopy.server.django",
        class: "CanopyConfig",
        label: "canopy",
    };

    /// Returns `module.class`.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.module, self.class)
    }
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Fails with [`AdapterError::MissingDependency`] carrying `message` unless
/// `package` is available.
pub fn import_required<P>(probe: &P, package: &str, message: &str) -> Result<(), AdapterError>
where
    P: PackageProbe + ?Sized,
{
    if probe.is_available(package) {
        return Ok(());
    }
    tracing::error!(package, "{message}");
    Err(AdapterError::MissingDependency {
        package: package.to_string(),
        message: message.to_string(),
    })
}

/// Checks every required package and returns the adapter configuration.
pub fn load<P>(probe: &P) -> Result<AdapterConfig, AdapterError>
where
    P: PackageProbe + ?Sized,
{
    for (package, message) in REQUIRED_PACKAGES {
        import_required(probe, package, message)?;
    }
    let config = AdapterConfig::DEFAULT;
    tracing::info!(app_config = %config.qualified_name(), "server adapter loaded");
    Ok(config)
}
