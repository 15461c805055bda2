//! Rewrite report — a record of every change the passes made.

use serde::{Deserialize, Serialize};

/// Ordered collection of rewrites produced by a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteReport {
    pub rewrites: Vec<Rewrite>,
}

impl RewriteReport {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A single rewrite record. Paths are dotted scope paths (`Outer.Inner`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rewrite {
    /// A nested message was moved to the top level of the file.
    MessageLifted { path: String, name: String },
    /// A nested copy of an already lifted message was removed.
    DuplicateMessageDropped { path: String, name: String },
    /// A zero-valued constant was inserted at the front of an enum.
    ZeroValueInserted { path: String, name: String },
    /// An enum constant was renamed. `path` names the enclosing enum, as for
    /// `ZeroValueInserted`.
    EnumValueRenamed {
        path: String,
        from: String,
        to: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rewrite_tagged_serialization() {
        let rewrite = Rewrite::EnumValueRenamed {
            path: "Outer.Level".to_string(),
            from: "0HIGH".to_string(),
            to: "NUM_0HIGH".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&rewrite).unwrap(),
            json!({
                "type": "enum_value_renamed",
                "path": "Outer.Level",
                "from": "0HIGH",
                "to": "NUM_0HIGH"
            })
        );
    }
}
