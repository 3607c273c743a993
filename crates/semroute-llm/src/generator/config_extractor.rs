//! Extraction of `<config>` blocks from LLM responses
//!
//! Models tend to wrap the requested payload in chatter. The generation
//! prompt asks for the payload between `<config>` and `</config>`; these
//! helpers cut it back out.
//!
//! When a response contains several blocks only the first one is used. An
//! opening tag without a closing one counts as no block at all.

use crate::error::{LLMError, Result};
use regex::Regex;
use std::sync::OnceLock;

const CONFIG_PATTERN: &str = r"(?s)<config>(.*?)</config>";

fn config_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(CONFIG_PATTERN).expect("config tag pattern is valid"))
}

/// Extract the trimmed content of the first `<config>...</config>` block
///
/// # Returns
/// * `Ok(String)` - Content between the tags, surrounding whitespace removed
/// * `Err(LLMError::MissingConfigTags)` - If no complete tag pair exists
pub fn extract_config(llm_output: &str) -> Result<String> {
    config_pattern()
        .captures(llm_output)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .ok_or(LLMError::MissingConfigTags)
}

/// Extract every `<config>` block in order of appearance
///
/// Returns an empty list when there is none.
pub fn extract_all_configs(llm_output: &str) -> Vec<String> {
    config_pattern()
        .captures_iter(llm_output)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .collect()
}
