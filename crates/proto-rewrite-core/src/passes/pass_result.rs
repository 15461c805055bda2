//! Shared result type for rewrite passes.
//!
//! Every pass returns a `PassResult` containing the rewritten file and the
//! rewrites it performed.

use crate::ast::File;
use crate::report::{Rewrite, RewriteReport};

/// Unified result of a single rewrite pass.
#[derive(Debug)]
pub struct PassResult {
    /// The rewritten file.
    pub file: File,
    /// Rewrites performed by this pass, in traversal order.
    pub rewrites: Vec<Rewrite>,
}

impl PassResult {
    /// Create a result for a pass that changed nothing.
    pub fn file_only(file: File) -> Self {
        Self {
            file,
            rewrites: Vec::new(),
        }
    }

    pub fn with_rewrites(file: File, rewrites: Vec<Rewrite>) -> Self {
        Self { file, rewrites }
    }

    /// Merge this pass's rewrites into a report accumulator.
    ///
    /// Consumes `self` and returns the file for the next pass in the pipeline.
    pub fn merge_into_report(self, report: &mut RewriteReport) -> File {
        report.rewrites.extend(self.rewrites);
        self.file
    }
}
