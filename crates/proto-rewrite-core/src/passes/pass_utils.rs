//! Shared helpers for rewrite passes.
//!
//! Tree traversal over messages and enums, structural-equality grouping used
//! by the lifting pass, and scope-path construction for report entries.

use std::collections::{HashMap, HashSet};

use crate::ast::{is_same_type, Enum, File, Message};

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// Join a scope path and a name with `.`; an empty scope yields the bare name.
pub fn qualify(scope: &str, name: &str) -> String {
    if scope.is_empty() {
        name.to_string()
    } else {
        format!("{scope}.{name}")
    }
}

// ---------------------------------------------------------------------------
// Message grouping
// ---------------------------------------------------------------------------

/// Group every message in the file, at any depth, by name.
///
/// Each group lists its messages in depth-first pre-order: a message's whole
/// subtree is visited before its next sibling.
pub fn group_messages_by_name(file: &File) -> HashMap<&str, Vec<&Message>> {
    let mut groups = HashMap::new();
    collect_messages(&file.messages, &mut groups);
    groups
}

fn collect_messages<'a>(messages: &'a [Message], groups: &mut HashMap<&'a str, Vec<&'a Message>>) {
    for message in messages {
        groups.entry(message.name.as_str()).or_default().push(message);
        collect_messages(&message.messages, groups);
    }
}

/// Whether every pair of messages is structurally identical.
///
/// Compares all pairs and stops at the first mismatch. A single message is
/// trivially identical to itself.
pub fn all_identical(messages: &[&Message]) -> bool {
    messages
        .iter()
        .enumerate()
        .all(|(i, a)| messages[i + 1..].iter().all(|b| is_same_type(a, b)))
}

/// Names whose every definition is structurally identical to every other.
pub fn liftable_names(groups: &HashMap<&str, Vec<&Message>>) -> HashSet<String> {
    groups
        .iter()
        .filter(|(_, messages)| all_identical(messages))
        .map(|(name, _)| name.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Enum traversal
// ---------------------------------------------------------------------------

/// Visit every enum in the file, at any depth, with its dotted scope path.
///
/// Top-level enums come first, then each top-level message in order; within
/// a message its own enums are visited before its nested messages.
pub fn for_each_enum_mut<F>(file: &mut File, visit: &mut F)
where
    F: FnMut(&mut Enum, &str),
{
    for e in &mut file.enums {
        let path = qualify("", &e.name);
        visit(e, &path);
    }
    for message in &mut file.messages {
        enums_in_message(message, "", visit);
    }
}

fn enums_in_message<F>(message: &mut Message, scope: &str, visit: &mut F)
where
    F: FnMut(&mut Enum, &str),
{
    if message.messages.is_empty() && message.enums.is_empty() {
        return;
    }

    let scope = qualify(scope, &message.name);
    for e in &mut message.enums {
        let path = qualify(&scope, &e.name);
        visit(e, &path);
    }
    for nested in &mut message.messages {
        enums_in_message(nested, &scope, visit);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
