//! Property-based tests for the rewrite passes.
//!
//! Files are generated from a small pool of message names and field shapes so
//! that same-named messages, both identical and conflicting, show up often.

use std::collections::HashMap;

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;
use proto_rewrite_core::passes::pass_utils::{group_messages_by_name, liftable_names};
use proto_rewrite_core::{
    complete_zero, lift_messages, prefix_digit_names, Enum, EnumField, File, Message,
    MessageField, RewriteOptions,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_enum_field() -> impl Strategy<Value = EnumField> {
    ("[0-9A-Z_]{0,4}", -2i32..4).prop_map(|(name, index)| EnumField::new(name, index))
}

fn arb_enum() -> impl Strategy<Value = Enum> {
    (select(vec!["Kind", "Mode"]), vec(arb_enum_field(), 0..4)).prop_map(|(name, fields)| {
        let mut e = Enum::new(name);
        e.fields = fields;
        e
    })
}

fn arb_message_field() -> impl Strategy<Value = MessageField> {
    (select(vec!["x", "y"]), 1u32..3).prop_map(|(name, index)| MessageField::new("string", name, index))
}

fn arb_message_name() -> impl Strategy<Value = &'static str> {
    select(vec!["A", "B", "C", "D", "E"])
}

fn arb_message() -> impl Strategy<Value = Message> {
    let leaf = (arb_message_name(), vec(arb_message_field(), 0..2), vec(arb_enum(), 0..2))
        .prop_map(|(name, fields, enums)| build_message(name, fields, Vec::new(), enums));

    leaf.prop_recursive(3, 24, 3, |inner| {
        (
            arb_message_name(),
            vec(arb_message_field(), 0..2),
            vec(inner, 0..3),
            vec(arb_enum(), 0..2),
        )
            .prop_map(|(name, fields, messages, enums)| build_message(name, fields, messages, enums))
    })
}

fn build_message(
    name: &str,
    fields: Vec<MessageField>,
    messages: Vec<Message>,
    enums: Vec<Enum>,
) -> Message {
    let mut m = Message::new(name);
    m.fields = fields;
    m.messages = messages;
    m.enums = enums;
    m
}

fn arb_file() -> impl Strategy<Value = File> {
    (vec(arb_message(), 0..4), vec(arb_enum(), 0..3)).prop_map(|(messages, enums)| File {
        package: None,
        messages,
        enums,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Every enum in the file, in traversal order.
fn all_enums(file: &File) -> Vec<&Enum> {
    fn walk<'a>(messages: &'a [Message], out: &mut Vec<&'a Enum>) {
        for m in messages {
            out.extend(m.enums.iter());
            walk(&m.messages, out);
        }
    }

    let mut out: Vec<&Enum> = file.enums.iter().collect();
    walk(&file.messages, &mut out);
    out
}

/// Per-name counts of (top-level, nested) message definitions.
fn message_counts(file: &File) -> HashMap<String, (usize, usize)> {
    fn walk(messages: &[Message], counts: &mut HashMap<String, (usize, usize)>) {
        for m in messages {
            counts.entry(m.name.clone()).or_default().1 += 1;
            walk(&m.messages, counts);
        }
    }

    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for m in &file.messages {
        counts.entry(m.name.clone()).or_default().0 += 1;
        walk(&m.messages, &mut counts);
    }
    counts
}

fn options() -> RewriteOptions {
    RewriteOptions::default()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn zero_completion_covers_every_enum(file in arb_file()) {
        let out = complete_zero(file.clone(), &options()).file;

        let before = all_enums(&file);
        let after = all_enums(&out);
        prop_assert_eq!(before.len(), after.len());

        for (b, a) in before.iter().zip(after.iter()) {
            prop_assert!(a.has_zero());
            if b.has_zero() {
                prop_assert_eq!(b, a);
            } else {
                prop_assert_eq!(a.fields.len(), b.fields.len() + 1);
                prop_assert_eq!(&a.fields[0], &EnumField::new("DEFAULT", 0));
                prop_assert_eq!(&a.fields[1..], &b.fields[..]);
            }
        }
    }

    #[test]
    fn zero_completion_is_idempotent(file in arb_file()) {
        let once = complete_zero(file, &options()).file;
        let twice = complete_zero(once.clone(), &options());

        prop_assert_eq!(&twice.file, &once);
        prop_assert!(twice.rewrites.is_empty());
    }

    #[test]
    fn digit_prefix_covers_every_value(file in arb_file()) {
        let out = prefix_digit_names(file.clone(), &options()).file;

        for (b, a) in all_enums(&file).iter().zip(all_enums(&out).iter()) {
            prop_assert_eq!(&b.name, &a.name);
            prop_assert_eq!(b.fields.len(), a.fields.len());
            for (old, new) in b.fields.iter().zip(a.fields.iter()) {
                prop_assert!(!new.name.starts_with(|c: char| c.is_ascii_digit()));
                prop_assert_eq!(old.index, new.index);
                if old.name.starts_with(|c: char| c.is_ascii_digit()) {
                    prop_assert_eq!(&new.name, &format!("NUM_{}", old.name));
                } else {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    #[test]
    fn digit_prefix_is_idempotent(file in arb_file()) {
        let once = prefix_digit_names(file, &options()).file;
        let twice = prefix_digit_names(once.clone(), &options());

        prop_assert_eq!(&twice.file, &once);
        prop_assert!(twice.rewrites.is_empty());
    }

    #[test]
    fn lifting_collapses_liftable_names(file in arb_file()) {
        let targets = liftable_names(&group_messages_by_name(&file));
        let before = message_counts(&file);

        let out = lift_messages(file.clone()).file;
        let after = message_counts(&out);

        for (name, (top_before, nested_before)) in &before {
            let (top_after, nested_after) = after.get(name).copied().unwrap_or_default();
            if targets.contains(name) {
                prop_assert_eq!(nested_after, 0, "{} still nested", name);
                prop_assert_eq!(top_after, (*top_before).max(1), "{} top-level count", name);
            } else {
                // Copies inside a dropped duplicate go with it, but the kept
                // duplicate still carries one.
                prop_assert_eq!(top_after, *top_before, "{} moved to top level", name);
                prop_assert!(nested_after <= *nested_before);
                prop_assert_eq!(nested_after > 0, *nested_before > 0, "{} lost every definition", name);
            }
        }
    }

    #[test]
    fn lifting_preserves_top_level_order_and_enums(file in arb_file()) {
        let out = lift_messages(file.clone()).file;

        let before: Vec<&str> = file.messages.iter().map(|m| m.name.as_str()).collect();
        let after: Vec<&str> = out.messages.iter().map(|m| m.name.as_str()).collect();

        prop_assert!(after.len() >= before.len());
        prop_assert_eq!(&after[..before.len()], &before[..]);
        prop_assert_eq!(&out.enums, &file.enums);
    }
}
