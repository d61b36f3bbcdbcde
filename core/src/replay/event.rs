//! Typed view over recorded events
//!
//! Each known type tag maps to one variant carrying exactly the fields its
//! line template needs. Anything else becomes [`EventKind::Other`].

use serde_json::Value;

use super::session::Event;
use crate::error::{ReplayError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum EventKind {
    RoomCreated {
        room_id: String,
    },
    HumanMessage {
        from: String,
        text: String,
    },
    AgentMessage {
        from: String,
        text: String,
    },
    AgentJoined {
        name: String,
        model: String,
    },
    TaskCreated {
        title: String,
    },
    TaskClaimed {
        agent_id: String,
    },
    AgentStatus {
        agent_id: String,
        detail: String,
    },
    GitCommit {
        message: String,
        additions: String,
        deletions: String,
    },
    GitMerge {
        from_branch: String,
        to_branch: String,
    },
    TaskCompleted {
        agent_id: String,
    },
    RoomStats {
        commits: String,
        lines_added: String,
    },
    ActivitySummary {
        collaboration_score: String,
    },
    /// Unrecognized tag with a JSON rendering of its payload
    Other {
        tag: String,
        payload: String,
    },
}

impl EventKind {
    /// Interpret an event by its type tag
    ///
    /// Fails when a known tag lacks a field it requires.
    pub fn from_event(event: &Event) -> Result<Self> {
        let fields = Fields { event };

        let kind = match event.kind.as_str() {
            "room.created" => Self::RoomCreated {
                room_id: fields.data(&["room_id"])?,
            },
            "human.message" => Self::HumanMessage {
                from: fields.sender()?,
                text: fields.body()?,
            },
            "agent.message" => Self::AgentMessage {
                from: fields.sender()?,
                text: fields.body()?,
            },
            "agent.joined" => Self::AgentJoined {
                name: fields.data(&["name"])?,
                model: fields.data(&["model"])?,
            },
            "task.created" => Self::TaskCreated {
                title: fields.data(&["title"])?,
            },
            "task.claim" => Self::TaskClaimed {
                agent_id: fields.data(&["agent_id"])?,
            },
            "agent.status" => Self::AgentStatus {
                agent_id: fields.data(&["agent_id"])?,
                detail: fields.data(&["detail"])?,
            },
            "git.commit" => Self::GitCommit {
                message: fields.data(&["message"])?,
                additions: fields.data(&["stats", "additions"])?,
                deletions: fields.data(&["stats", "deletions"])?,
            },
            "git.merge" => Self::GitMerge {
                from_branch: fields.data(&["from_branch"])?,
                to_branch: fields.data(&["to_branch"])?,
            },
            "task.completed" => Self::TaskCompleted {
                agent_id: fields.data(&["agent_id"])?,
            },
            "room.stats" => Self::RoomStats {
                commits: fields.data(&["commits"])?,
                lines_added: fields.data(&["lines_added"])?,
            },
            "room.activity_summary" => Self::ActivitySummary {
                collaboration_score: fields.data(&["agent_collaboration_score"])?,
            },
            tag => Self::Other {
                tag: tag.to_string(),
                payload: fallback_payload(event),
            },
        };
        Ok(kind)
    }
}

/// Field accessor that reports the dotted path of whatever is missing
struct Fields<'a> {
    event: &'a Event,
}

impl Fields<'_> {
    fn missing(&self, field: String) -> ReplayError {
        ReplayError::Render {
            event_type: self.event.kind.clone(),
            t: self.event.t,
            field,
        }
    }

    fn sender(&self) -> Result<String> {
        present(self.event.from.as_ref()).ok_or_else(|| self.missing("from".to_string()))
    }

    fn body(&self) -> Result<String> {
        present(self.event.text.as_ref()).ok_or_else(|| self.missing("text".to_string()))
    }

    fn data(&self, path: &[&str]) -> Result<String> {
        let mut current = self.event.data.as_ref();
        for key in path {
            current = current.and_then(|v| v.get(key));
        }
        present(current).ok_or_else(|| self.missing(format!("data.{}", path.join("."))))
    }
}

/// Display form of a field that exists and is not null
fn present(value: Option<&Value>) -> Option<String> {
    value.filter(|v| !v.is_null()).map(display_value)
}

/// Render a payload value for inline display: strings bare, everything else as JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON form of the first truthy value among `data` and `text`, else `""`
fn fallback_payload(event: &Event) -> String {
    [&event.data, &event.text]
        .into_iter()
        .flatten()
        .find(|value| is_truthy(value))
        .cloned()
        .unwrap_or_else(|| Value::String(String::new()))
        .to_string()
}

/// Empty strings, zero, `false` and `null` do not count as a payload
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(kind: &str, data: Value) -> Event {
        Event {
            t: 1.0,
            kind: kind.to_string(),
            from: None,
            text: None,
            data: Some(data),
        }
    }

    #[test]
    fn test_nested_fields() {
        let ev = event(
            "git.commit",
            json!({"message": "Add parser", "stats": {"additions": 120, "deletions": 7}}),
        );
        assert_eq!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::GitCommit {
                message: "Add parser".to_string(),
                additions: "120".to_string(),
                deletions: "7".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_nested_field_reports_path() {
        let ev = event("git.commit", json!({"message": "Add parser"}));
        match EventKind::from_event(&ev) {
            Err(ReplayError::Render { event_type, field, .. }) => {
                assert_eq!(event_type, "git.commit");
                assert_eq!(field, "data.stats.additions");
            }
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn test_message_requires_sender() {
        let ev = Event {
            t: 2.0,
            kind: "agent.message".to_string(),
            from: None,
            text: Some(json!("done")),
            data: None,
        };
        assert!(matches!(
            EventKind::from_event(&ev),
            Err(ReplayError::Render { field, .. }) if field == "from"
        ));
    }

    #[test]
    fn test_known_kind_without_data() {
        let ev = Event {
            t: 0.0,
            kind: "room.created".to_string(),
            from: None,
            text: None,
            data: None,
        };
        assert!(EventKind::from_event(&ev).is_err());
    }

    #[test]
    fn test_null_field_counts_as_missing() {
        let ev = event("task.claim", json!({"agent_id": null}));
        assert!(EventKind::from_event(&ev).is_err());
    }

    #[test]
    fn test_unknown_kind_payload() {
        let ev = event("custom.foo", json!({"x": 1}));
        assert_eq!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other {
                tag: "custom.foo".to_string(),
                payload: r#"{"x":1}"#.to_string(),
            }
        );

        let ev = Event {
            t: 0.0,
            kind: "note".to_string(),
            from: None,
            text: Some(json!("remember")),
            data: None,
        };
        assert!(matches!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other { payload, .. } if payload == r#""remember""#
        ));

        let ev = Event {
            t: 0.0,
            kind: "ping".to_string(),
            from: None,
            text: None,
            data: None,
        };
        assert!(matches!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other { payload, .. } if payload == r#""""#
        ));
    }

    #[test]
    fn test_non_string_sender_and_text_are_displayed() {
        let ev = Event {
            t: 0.0,
            kind: "agent.message".to_string(),
            from: Some(json!(7)),
            text: Some(json!(true)),
            data: None,
        };
        assert_eq!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::AgentMessage {
                from: "7".to_string(),
                text: "true".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_kind_with_structured_text_or_numeric_sender() {
        let ev = Event {
            t: 1.0,
            kind: "custom.note".to_string(),
            from: None,
            text: Some(json!({"a": 1})),
            data: None,
        };
        assert!(matches!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other { payload, .. } if payload == r#"{"a":1}"#
        ));

        let ev = Event {
            t: 1.0,
            kind: "custom.ping".to_string(),
            from: Some(json!(42)),
            text: None,
            data: Some(json!({"x": 1})),
        };
        assert!(matches!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other { payload, .. } if payload == r#"{"x":1}"#
        ));
    }

    #[test]
    fn test_falsy_data_falls_through_to_text() {
        for data in [json!(false), json!(0), json!(""), Value::Null] {
            let ev = Event {
                t: 0.0,
                kind: "custom.flag".to_string(),
                from: None,
                text: Some(json!("fallback")),
                data: Some(data.clone()),
            };
            assert!(
                matches!(
                    EventKind::from_event(&ev).unwrap(),
                    EventKind::Other { payload, .. } if payload == r#""fallback""#
                ),
                "data {} should fall through",
                data
            );
        }

        let ev = Event {
            t: 0.0,
            kind: "custom.flag".to_string(),
            from: None,
            text: Some(json!("")),
            data: Some(json!(0)),
        };
        assert!(matches!(
            EventKind::from_event(&ev).unwrap(),
            EventKind::Other { payload, .. } if payload == r#""""#
        ));
    }
}
