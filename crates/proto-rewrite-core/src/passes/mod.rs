//! Rewrite pass modules.
//!
//! Each pass is a self-contained transformation over a schema [`File`](crate::ast::File).
//! Passes are independent of each other and may run in any order; the default
//! pipeline runs them in numeric order. Shared traversal helpers live in
//! `pass_utils`.

pub mod pass_result;
pub mod pass_utils;

pub mod p0_lift_messages;
pub mod p1_complete_zero;
pub mod p2_digit_prefix;
