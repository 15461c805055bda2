//! Pass 1: Zero-Value Completion
//!
//! Wire-format enums must define a constant for the value 0. For every enum
//! in the file, at any depth, that has no constant with index 0, a synthetic
//! constant (`DEFAULT` by default) is inserted at the front of its value list.
//!
//! Enums that already define a zero value are left untouched, even when more
//! than one constant maps to 0.

use crate::ast::{Enum, EnumField, File};
use crate::config::RewriteOptions;
use crate::report::Rewrite;

use super::pass_result::PassResult;
use super::pass_utils::for_each_enum_mut;

/// Ensure every enum in the file has a constant with value 0.
///
/// Assumes `config` has passed [`RewriteOptions::validate`].
pub fn complete_zero(mut file: File, config: &RewriteOptions) -> PassResult {
    let mut rewrites = Vec::new();

    for_each_enum_mut(&mut file, &mut |e: &mut Enum, path: &str| {
        if complete_zero_if_absent(e, &config.zero_value_name) {
            tracing::trace!(path, "inserted zero value");
            rewrites.push(Rewrite::ZeroValueInserted {
                path: path.to_string(),
                name: config.zero_value_name.clone(),
            });
        }
    });

    tracing::debug!(completed = rewrites.len(), "zero-value completion complete");
    PassResult::with_rewrites(file, rewrites)
}

/// Insert `name = 0` at the front of the enum unless some constant is already
/// 0. Returns whether the enum was changed.
fn complete_zero_if_absent(e: &mut Enum, name: &str) -> bool {
    if e.has_zero() {
        return false;
    }
    e.fields.insert(0, EnumField::new(name, 0));
    true
}

// ===========================================================================
// Tests
// ===========================================================================
