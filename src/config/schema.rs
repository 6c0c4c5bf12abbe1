//! Config schema and deserialization

use crate::catalog::Section;
use serde::{Deserialize, Serialize};

/// Root config structure for .algorefrc.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Extend another config file (path relative to this config)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Sections rendered by `show` when none are named on the command line
    #[serde(default)]
    pub sections: Vec<Section>,

    /// Fail the audit when any notation falls through to the default tier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    /// Colored terminal output. Default: true
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,

    /// Show descriptions alongside table rows. Default: false
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl Config {
    /// Merge CLI overrides into config. CLI flags only ever switch options on
    /// (or colors off), so an unset flag leaves the config value alone.
    pub fn merge_with_cli(mut self, strict: bool, no_color: bool, verbose: bool) -> Self {
        if strict {
            self.strict = Some(true);
        }
        if no_color {
            self.colors = Some(false);
        }
        if verbose {
            self.verbose = Some(true);
        }
        self
    }

    /// Merge another config into this one (for extends)
    pub fn merge_from(&mut self, base: Config) {
        // Base values are overridden by this config's values
        if self.extends.is_none() {
            self.extends = base.extends;
        }
        if self.sections.is_empty() {
            self.sections = base.sections;
        }
        if self.strict.is_none() {
            self.strict = base.strict;
        }
        if self.colors.is_none() {
            self.colors = base.colors;
        }
        if self.verbose.is_none() {
            self.verbose = base.verbose;
        }
    }

    /// Sections to render: configured ones, or the whole catalog
    pub fn effective_sections(&self) -> Vec<Section> {
        if self.sections.is_empty() {
            Section::ALL.to_vec()
        } else {
            self.sections.clone()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict.unwrap_or(false)
    }

    pub fn use_colors(&self) -> bool {
        self.colors.unwrap_or(true)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
