//! Operation semantics.
//!
//! Tool annotations are derived from the shape of the remote operation, not from the HTTP
//! method: `validate_address` is a read even though it names an action, and
//! `create_live_rate` is a non-idempotent POST even though it persists nothing.

use rmcp::model::ToolAnnotations;

/// Shape of the remote operation behind a tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    List,
    Get,
    Create,
    Update,
    Delete,
    /// `POST <collection>/<id>/<verb>` and other non-idempotent side effects.
    Action,
}

/// Generate MCP tool annotations for an operation shape.
///
/// `openWorldHint` is always set: every tool talks to the remote API.
#[must_use]
pub fn annotations_for(kind: OperationKind) -> ToolAnnotations {
    let open_world_hint = Some(true);

    match kind {
        OperationKind::List | OperationKind::Get => ToolAnnotations {
            title: None,
            read_only_hint: Some(true),
            destructive_hint: Some(false),
            idempotent_hint: Some(true),
            open_world_hint,
        },
        OperationKind::Create | OperationKind::Action => ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(false),
            idempotent_hint: Some(false),
            open_world_hint,
        },
        OperationKind::Update | OperationKind::Delete => ToolAnnotations {
            title: None,
            read_only_hint: Some(false),
            destructive_hint: Some(true),
            idempotent_hint: Some(true),
            open_world_hint,
        },
    }
}
