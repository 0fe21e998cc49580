//! The section-name vocabulary and classifier.

use crate::{ValidKinds, WordBuffer};
use migoto_config::MatchMode;

/// Recognized section names and section-name prefixes, lowercase.
///
/// Headers like `[ShaderOverrideVS1]` are matched by their keyword prefix; the rest of the name is
/// the header's subject.
pub static SECTION_NAMES: &[&str] = &[
    "builtincommandlist",
    "builtincustomshader",
    "clearrendertargetview",
    "cleardepthstencilview",
    "clearunorderedaccessviewuint",
    "clearunorderedaccessviewfloat",
    "commandlist",
    "constants",
    "convergencemap",
    "customshader",
    "device",
    "hunting",
    "include",
    "key",
    "loader",
    "logging",
    "preset",
    "present",
    "profile",
    "rendering",
    "resource",
    "shaderoverride",
    "shaderregex",
    "stereo",
    "system",
    "textureoverride",
];

/// Returns `true` if `candidate` is a section name under the given matching mode.
///
/// [`MatchMode::Exact`] requires `candidate` to equal a vocabulary entry, ignoring ASCII case.
/// [`MatchMode::Substring`] only requires it to contain one.
pub fn is_section_name(candidate: &str, mode: MatchMode) -> bool {
    let candidate = candidate.to_ascii_lowercase();
    match mode {
        MatchMode::Exact => SECTION_NAMES.contains(&candidate.as_str()),
        MatchMode::Substring => SECTION_NAMES.iter().any(|name| candidate.contains(name)),
    }
}

/// Returns the length of the longest section name starting with `c`, ignoring ASCII case, or 0
/// if no section name starts with `c`.
pub fn longest_keyword_len(c: char) -> usize {
    if !c.is_ascii_alphabetic() {
        return 0;
    }
    let c = c.to_ascii_lowercase() as u8;
    SECTION_NAMES
        .iter()
        .filter(|name| name.as_bytes()[0] == c)
        .map(|name| name.len())
        .max()
        .unwrap_or(0)
}

/// Matches an accumulated header name against the vocabulary.
///
/// In [`MatchMode::Exact`] mode, returns the longest section name that equals the first
/// `name.len()` characters of `word`, ignoring ASCII case. In [`MatchMode::Substring`] mode,
/// returns the first section name that `word` contains.
pub fn match_keyword(word: &WordBuffer, mode: MatchMode) -> Option<&'static str> {
    match mode {
        MatchMode::Exact => {
            let chars = word.as_chars();
            SECTION_NAMES
                .iter()
                .copied()
                .filter(|name| {
                    name.len() <= chars.len()
                        && name.chars().zip(chars).all(|(a, b)| a.eq_ignore_ascii_case(b))
                })
                .max_by_key(|name| name.len())
        }
        MatchMode::Substring => {
            let word = word.to_lowercase();
            SECTION_NAMES.iter().copied().find(|name| word.contains(name))
        }
    }
}

/// Returns the kinds a grammar offers after the given section keyword, to scan the rest of the
/// header name.
///
/// Empty for sections whose header is just the keyword, e.g. `[Constants]`.
pub fn header_suffix_kinds(keyword: &str) -> ValidKinds {
    match keyword.to_ascii_lowercase().as_str() {
        "key" => ValidKinds::KEY_SUFFIX,
        "preset" => ValidKinds::PRESET_SUFFIX,
        "resource" => ValidKinds::RESOURCE_SUFFIX,
        "include" => ValidKinds::INCLUDE_SUFFIX,
        "shaderregex" => ValidKinds::REGEX,
        "builtincommandlist" | "builtincustomshader" | "commandlist" | "customshader"
        | "shaderoverride" | "textureoverride" => ValidKinds::COMMAND_LIST_SUFFIX,
        _ => ValidKinds::empty(),
    }
}
