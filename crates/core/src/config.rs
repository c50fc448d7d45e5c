// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline configuration
//!
//! Keys and order are fixed by the phase enums. Configuration can only
//! relabel phases, for example to present the board in another language:
//!
//! ```toml
//! [lead.labels]
//! qualified_profile = "Qualified profile"
//!
//! [property.labels]
//! published = "Live"
//! ```

use crate::error::ConfigError;
use crate::phase::PipelineKind;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Parsed pipeline configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    #[serde(default)]
    pub lead: PipelineOverrides,
    #[serde(default)]
    pub property: PipelineOverrides,
}

/// Overrides for one pipeline
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineOverrides {
    /// Display labels by phase key
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl PipelineConfig {
    /// Parse configuration from TOML content
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    pub fn overrides(&self, kind: PipelineKind) -> &PipelineOverrides {
        match kind {
            PipelineKind::Lead => &self.lead,
            PipelineKind::Property => &self.property,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
