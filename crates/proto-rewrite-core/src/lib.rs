//! Structural normalization passes over protocol buffer schema ASTs.
//!
//! Three independent passes rewrite a [`File`] so that it satisfies the
//! structural and naming constraints of the target schema format:
//!
//! - [`lift_messages`] pulls nested messages up to the top level when every
//!   definition sharing a name is structurally identical.
//! - [`complete_zero`] gives every enum a constant with value 0.
//! - [`prefix_digit_names`] renames enum constants that start with a digit.
//!
//! [`rewrite`] runs a configured sequence of them and collects a
//! [`RewriteReport`] of everything that changed.

pub mod ast;
pub mod config;
pub mod error;
pub mod passes;
pub mod report;

pub use ast::{is_same_type, Enum, EnumField, FieldLabel, File, Message, MessageField};
pub use config::{Pass, RewriteOptions};
pub use error::{ErrorCode, RewriteError};
pub use passes::p0_lift_messages::lift_messages;
pub use passes::p1_complete_zero::complete_zero;
pub use passes::p2_digit_prefix::prefix_digit_names;
pub use report::{Rewrite, RewriteReport};

use passes::pass_result::PassResult;

/// Output of a pipeline run.
#[derive(Debug)]
pub struct RewriteResult {
    pub file: File,
    pub report: RewriteReport,
}

/// Run the configured passes over `file`, in order.
///
/// Fails only when the options are invalid (see [`RewriteOptions::validate`]);
/// the passes themselves always succeed.
pub fn rewrite(mut file: File, options: &RewriteOptions) -> Result<RewriteResult, RewriteError> {
    options.validate()?;
    let mut report = RewriteReport::new();

    for pass in &options.passes {
        let before = report.rewrites.len();
        file = run_pass(*pass, file, options).merge_into_report(&mut report);
        tracing::debug!(
            pass = %pass,
            rewrites = report.rewrites.len() - before,
            "pass finished"
        );
    }

    Ok(RewriteResult { file, report })
}

fn run_pass(pass: Pass, file: File, options: &RewriteOptions) -> PassResult {
    match pass {
        Pass::LiftMessages => lift_messages(file),
        Pass::CompleteZero => complete_zero(file, options),
        Pass::PrefixDigits => prefix_digit_names(file, options),
    }
}

/// JSON bridge: parse a file, rewrite it, and serialize the result.
pub fn rewrite_json(json: &str, options: &RewriteOptions) -> Result<String, RewriteError> {
    let file = File::from_json(json)?;
    rewrite(file, options)?.file.to_json()
}
