//! Pass 0: Message Lifting
//!
//! Reduces nesting depth by moving nested messages to the top level of the
//! file. A message name is liftable when every definition sharing that name,
//! anywhere in the tree, is structurally identical to every other one.
//!
//! For each liftable nested message, the first copy encountered is appended
//! to the file's top level and every later copy is dropped. Messages whose
//! name has conflicting definitions stay where they are. Enums are untouched.

use std::collections::HashSet;

use crate::ast::{File, Message};
use crate::report::Rewrite;

use super::pass_result::PassResult;
use super::pass_utils::{group_messages_by_name, liftable_names, qualify};

/// Lift every liftable nested message to the top level of the file.
///
/// Top-level messages are never removed. A top-level message whose name is
/// liftable already counts as lifted, so nested copies of it are dropped.
/// Lifted messages are appended after the existing top-level messages in
/// the order they are encountered; descendants are lifted before their
/// ancestors.
pub fn lift_messages(mut file: File) -> PassResult {
    if file.messages.is_empty() {
        return PassResult::file_only(file);
    }

    let targets = liftable_names(&group_messages_by_name(&file));

    let lifted_names: HashSet<String> = file
        .messages
        .iter()
        .filter(|m| targets.contains(&m.name))
        .map(|m| m.name.clone())
        .collect();

    let mut state = LiftState {
        targets: &targets,
        lifted_names,
        lifted: Vec::new(),
        rewrites: Vec::new(),
    };

    for message in &mut file.messages {
        lift_children(message, "", &mut state);
    }

    tracing::debug!(
        liftable = targets.len(),
        lifted = state.lifted.len(),
        "message lifting complete"
    );

    file.messages.extend(state.lifted);
    PassResult::with_rewrites(file, state.rewrites)
}

// ---------------------------------------------------------------------------
// Recursive walker
// ---------------------------------------------------------------------------

/// State threaded through one invocation of the pass.
struct LiftState<'a> {
    /// Names whose definitions are all structurally identical.
    targets: &'a HashSet<String>,
    /// Names that already have a top-level definition.
    lifted_names: HashSet<String>,
    /// Messages to append to the file, in encounter order.
    lifted: Vec<Message>,
    rewrites: Vec<Rewrite>,
}

/// Process the direct children of `message`, deepest first, removing every
/// child whose name is liftable.
fn lift_children(message: &mut Message, scope: &str, state: &mut LiftState<'_>) {
    if message.messages.is_empty() {
        return;
    }

    let scope = qualify(scope, &message.name);
    let children = std::mem::take(&mut message.messages);

    for mut child in children {
        lift_children(&mut child, &scope, state);

        if !state.targets.contains(&child.name) {
            message.messages.push(child);
            continue;
        }

        let path = qualify(&scope, &child.name);
        if state.lifted_names.insert(child.name.clone()) {
            tracing::trace!(path = %path, "lifting nested message");
            state.rewrites.push(Rewrite::MessageLifted {
                path,
                name: child.name.clone(),
            });
            state.lifted.push(child);
        } else {
            tracing::trace!(path = %path, "dropping duplicate nested message");
            state.rewrites.push(Rewrite::DuplicateMessageDropped {
                path,
                name: child.name,
            });
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
