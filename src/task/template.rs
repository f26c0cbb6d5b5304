// src/task/template.rs

//! Placeholder expansion for command templates and artifact patterns.
//!
//! Recognised placeholders:
//! - `{variant}`: lowercase variant name (`debug`)
//! - `{Variant}`: capitalised variant name (`Debug`)
//! - `{log}`: path of the log file (commands only)

use std::path::Path;

use crate::types::Variant;

pub const VARIANT_LOWER: &str = "{variant}";
pub const VARIANT_CAPITALIZED: &str = "{Variant}";
pub const LOG_FILE: &str = "{log}";

/// Whether `template` needs a variant to be expanded.
pub fn mentions_variant(template: &str) -> bool {
    template.contains(VARIANT_LOWER) || template.contains(VARIANT_CAPITALIZED)
}

/// Fill in the variant placeholders. With no variant they are left as-is.
pub fn expand_variant(template: &str, variant: Option<Variant>) -> String {
    match variant {
        Some(v) => template
            .replace(VARIANT_LOWER, v.name())
            .replace(VARIANT_CAPITALIZED, v.capitalized()),
        None => template.to_string(),
    }
}

/// Split a command template on whitespace, then expand each token.
///
/// Splitting happens first so a substituted path (e.g. a log file under
/// `build logs/`) stays a single argument.
pub fn expand_command(template: &str, variant: Option<Variant>, log_file: &Path) -> Vec<String> {
    let log_file = log_file.display().to_string();
    template
        .split_whitespace()
        .map(|token| expand_variant(token, variant).replace(LOG_FILE, &log_file))
        .collect()
}
