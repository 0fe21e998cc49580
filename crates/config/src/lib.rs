//! Configuration for the 3Dmigoto INI external scanner.
//!
//! The scanner has almost nothing to configure: how section names are matched against the
//! vocabulary, and how many bytes the host allows for persisted scanner state.

#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(all(test, not(feature = "serde")), allow(unused_crate_dependencies))]

#[macro_use]
mod macros;

/// Size of the host's fixed serialization buffer, in bytes.
///
/// Matches `TREE_SITTER_SERIALIZATION_BUFFER_SIZE`.
pub const DEFAULT_SERIALIZATION_BUDGET: usize = 1024;

str_enum! {
    /// How a candidate section name is compared against the section-name vocabulary.
    #[derive(Default, strum::EnumIs)]
    #[strum(serialize_all = "lowercase", ascii_case_insensitive)]
    pub enum MatchMode {
        /// The candidate must equal a vocabulary entry, ignoring ASCII case.
        #[default]
        Exact,
        /// The candidate only has to contain a vocabulary entry.
        ///
        /// Kept for compatibility with older scanners. It accepts lines that merely mention a
        /// keyword, e.g. `[monkey]` contains `key`.
        Substring,
    }
}

/// Scanner configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ScannerConfig {
    /// Section-name matching mode.
    pub match_mode: MatchMode,
    /// Maximum number of bytes the serialized scanner state may occupy.
    pub serialization_budget: usize,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            serialization_budget: DEFAULT_SERIALIZATION_BUDGET,
        }
    }
}

impl ScannerConfig {
    /// Returns a new configuration with the given matching mode.
    pub fn with_match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    /// Returns a new configuration with the given serialization budget.
    pub fn with_serialization_budget(mut self, budget: usize) -> Self {
        self.serialization_budget = budget;
        self
    }
}
