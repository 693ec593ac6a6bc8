// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// An error loading the adapter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdapterError {
    /// A required package is not installed.
    #[error("{message}")]
    MissingDependency {
        /// The missing package.
        package: String,
        /// What requires it, naming the package.
        message: String,
    },
}

impl AdapterError {
    /// Returns the name of the missing package.
    #[must_use]
    pub fn package(&self) -> &str {
        match self {
            Self::MissingDependency { package, .. } => package,
        }
    }
}
