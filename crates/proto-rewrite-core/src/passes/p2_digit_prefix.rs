//! Pass 2: Digit Prefix
//!
//! Enum constant names must be identifiers, so a name starting with a decimal
//! digit is renamed by prepending a fixed prefix (`NUM_` by default). Only
//! ASCII digits are considered; empty names are left alone.

use crate::ast::{Enum, File};
use crate::config::RewriteOptions;
use crate::report::Rewrite;

use super::pass_result::PassResult;
use super::pass_utils::for_each_enum_mut;

/// Prefix every enum constant whose name starts with an ASCII digit.
///
/// Assumes `config` has passed [`RewriteOptions::validate`]; a prefix that
/// itself starts with a digit would leave the renamed constants invalid.
pub fn prefix_digit_names(mut file: File, config: &RewriteOptions) -> PassResult {
    let mut rewrites = Vec::new();

    for_each_enum_mut(&mut file, &mut |e: &mut Enum, path: &str| {
        for field in e.fields.iter_mut().filter(|f| starts_with_digit(&f.name)) {
            let renamed = format!("{}{}", config.digit_prefix, field.name);
            tracing::trace!(path, from = %field.name, to = %renamed, "renaming enum value");
            let from = std::mem::replace(&mut field.name, renamed.clone());
            rewrites.push(Rewrite::EnumValueRenamed {
                path: path.to_string(),
                from,
                to: renamed,
            });
        }
    });

    tracing::debug!(renamed = rewrites.len(), "digit prefixing complete");
    PassResult::with_rewrites(file, rewrites)
}

fn starts_with_digit(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_digit())
}

// ===========================================================================
// Tests
// ===========================================================================
