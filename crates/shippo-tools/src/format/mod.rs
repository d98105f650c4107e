//! Rendering of tool results as JSON or Markdown.

mod markdown;

use crate::error::ToolError;
use crate::params::OutputFormat;
use serde_json::{Value, json};
use shippo_client::{Entity, Paginated};

/// Remote resource a result belongs to. Selects the Markdown layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Address,
    Parcel,
    Shipment,
    Rate,
    Transaction,
    Refund,
    Track,
    CarrierAccount,
    CustomsItem,
    CustomsDeclaration,
    Manifest,
    Batch,
    Pickup,
    Order,
    ServiceGroup,
    CarrierParcelTemplate,
    UserParcelTemplate,
    LiveRate,
}

/// The successful result of one tool call, before rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Page(EntityKind, Paginated),
    Entity(EntityKind, Entity),
    /// A lookup where "nothing configured" is a valid answer.
    Optional(EntityKind, Option<Entity>),
    /// A bare array of entities, without the pagination envelope.
    Items(EntityKind, Vec<Value>),
    Deleted,
}

impl Output {
    #[must_use]
    pub fn page(kind: EntityKind) -> impl FnOnce(Paginated) -> Output {
        move |page| Output::Page(kind, page)
    }

    #[must_use]
    pub fn entity(kind: EntityKind) -> impl FnOnce(Entity) -> Output {
        move |value| Output::Entity(kind, value)
    }

    #[must_use]
    pub fn deleted(_: ()) -> Output {
        Output::Deleted
    }

    /// The JSON document this output stands for.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Output::Page(_, page) => page.as_value().clone(),
            Output::Entity(_, value) => value.clone(),
            Output::Optional(_, value) => value.clone().unwrap_or(Value::Null),
            Output::Items(_, items) => Value::Array(items.clone()),
            Output::Deleted => json!({"deleted": true}),
        }
    }
}

/// Render `output` in the requested encoding.
///
/// # Errors
///
/// Returns [`ToolError::Render`] if JSON serialization fails.
pub fn render(output: &Output, format: OutputFormat) -> Result<String, ToolError> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(&output.to_json())
            .map_err(|e| ToolError::Render(e.to_string())),
        OutputFormat::Markdown => Ok(markdown::render(output)),
    }
}
