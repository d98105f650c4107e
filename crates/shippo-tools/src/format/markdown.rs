//! Markdown layouts, one per entity kind.
//!
//! Lists render as a table with per-kind columns; single entities render through the
//! layout's detail function (a flat field list unless the kind has its own layout).

use super::{EntityKind, Output};
use serde_json::Value;
use shippo_client::Paginated;
use std::fmt::Write as _;

const NO_RESULTS: &str = "_No results._";
const NO_VALUE: &str = "_No value configured._";
const DELETED: &str = "Deleted.";

struct Column {
    header: &'static str,
    path: &'static [&'static str],
}

const fn col(header: &'static str, path: &'static [&'static str]) -> Column {
    Column { header, path }
}

struct Layout {
    singular: &'static str,
    plural: &'static str,
    columns: &'static [Column],
    detail: fn(&Layout, &Value) -> String,
}

const ADDRESS: Layout = Layout {
    singular: "Address",
    plural: "Addresses",
    columns: &[
        col("ID", &["object_id"]),
        col("Name", &["name"]),
        col("Company", &["company"]),
        col("Street", &["street1"]),
        col("City", &["city"]),
        col("State", &["state"]),
        col("Zip", &["zip"]),
        col("Country", &["country"]),
        col("Valid", &["validation_results", "is_valid"]),
    ],
    detail: field_list,
};

const PARCEL: Layout = Layout {
    singular: "Parcel",
    plural: "Parcels",
    columns: &[
        col("ID", &["object_id"]),
        col("Length", &["length"]),
        col("Width", &["width"]),
        col("Height", &["height"]),
        col("Unit", &["distance_unit"]),
        col("Weight", &["weight"]),
        col("Mass unit", &["mass_unit"]),
        col("Template", &["template"]),
    ],
    detail: field_list,
};

const SHIPMENT: Layout = Layout {
    singular: "Shipment",
    plural: "Shipments",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("From", &["address_from", "city"]),
        col("To", &["address_to", "city"]),
        col("Shipment date", &["shipment_date"]),
        col("Created", &["object_created"]),
    ],
    detail: shipment_detail,
};

const RATE: Layout = Layout {
    singular: "Rate",
    plural: "Rates",
    columns: &[
        col("ID", &["object_id"]),
        col("Provider", &["provider"]),
        col("Service", &["servicelevel", "name"]),
        col("Amount", &["amount"]),
        col("Currency", &["currency"]),
        col("Days", &["estimated_days"]),
        col("Local amount", &["amount_local"]),
        col("Local currency", &["currency_local"]),
    ],
    detail: field_list,
};

const TRANSACTION: Layout = Layout {
    singular: "Transaction",
    plural: "Transactions",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("Tracking number", &["tracking_number"]),
        col("Tracking status", &["tracking_status"]),
        col("Rate", &["rate"]),
        col("Label", &["label_url"]),
    ],
    detail: field_list,
};

const REFUND: Layout = Layout {
    singular: "Refund",
    plural: "Refunds",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("Transaction", &["transaction"]),
        col("Created", &["object_created"]),
    ],
    detail: refund_detail,
};

const TRACK: Layout = Layout {
    singular: "Tracking status",
    plural: "Tracking statuses",
    columns: &[
        col("Carrier", &["carrier"]),
        col("Tracking number", &["tracking_number"]),
        col("Status", &["tracking_status", "status"]),
        col("ETA", &["eta"]),
    ],
    detail: track_detail,
};

const CARRIER_ACCOUNT: Layout = Layout {
    singular: "Carrier account",
    plural: "Carrier accounts",
    columns: &[
        col("ID", &["object_id"]),
        col("Carrier", &["carrier"]),
        col("Account", &["account_id"]),
        col("Active", &["active"]),
        col("Test", &["test"]),
    ],
    detail: field_list,
};

const CUSTOMS_ITEM: Layout = Layout {
    singular: "Customs item",
    plural: "Customs items",
    columns: &[
        col("ID", &["object_id"]),
        col("Description", &["description"]),
        col("Quantity", &["quantity"]),
        col("Net weight", &["net_weight"]),
        col("Mass unit", &["mass_unit"]),
        col("Value", &["value_amount"]),
        col("Currency", &["value_currency"]),
        col("Origin", &["origin_country"]),
    ],
    detail: field_list,
};

const CUSTOMS_DECLARATION: Layout = Layout {
    singular: "Customs declaration",
    plural: "Customs declarations",
    columns: &[
        col("ID", &["object_id"]),
        col("Contents", &["contents_type"]),
        col("Non-delivery", &["non_delivery_option"]),
        col("Signer", &["certify_signer"]),
        col("Incoterm", &["incoterm"]),
        col("Items", &["items"]),
    ],
    detail: field_list,
};

const MANIFEST: Layout = Layout {
    singular: "Manifest",
    plural: "Manifests",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("Carrier account", &["carrier_account"]),
        col("Shipment date", &["shipment_date"]),
        col("Documents", &["documents"]),
    ],
    detail: field_list,
};

const BATCH: Layout = Layout {
    singular: "Batch",
    plural: "Batches",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("Carrier account", &["default_carrier_account"]),
        col("Service level", &["default_servicelevel_token"]),
        col("Created", &["object_created"]),
    ],
    detail: batch_detail,
};

const PICKUP: Layout = Layout {
    singular: "Pickup",
    plural: "Pickups",
    columns: &[
        col("ID", &["object_id"]),
        col("Status", &["status"]),
        col("Confirmation code", &["confirmation_code"]),
        col("Carrier account", &["carrier_account"]),
    ],
    detail: pickup_detail,
};

const ORDER: Layout = Layout {
    singular: "Order",
    plural: "Orders",
    columns: &[
        col("ID", &["object_id"]),
        col("Order number", &["order_number"]),
        col("Status", &["order_status"]),
        col("Placed", &["placed_at"]),
        col("Recipient", &["to_address", "name"]),
        col("Total", &["total_price"]),
        col("Currency", &["currency"]),
    ],
    detail: field_list,
};

const SERVICE_GROUP: Layout = Layout {
    singular: "Service group",
    plural: "Service groups",
    columns: &[
        col("ID", &["object_id"]),
        col("Name", &["name"]),
        col("Type", &["type"]),
        col("Active", &["is_active"]),
        col("Flat rate", &["flat_rate"]),
        col("Rate adjustment", &["rate_adjustment"]),
    ],
    detail: field_list,
};

const CARRIER_PARCEL_TEMPLATE: Layout = Layout {
    singular: "Carrier parcel template",
    plural: "Carrier parcel templates",
    columns: &[
        col("Token", &["token"]),
        col("Name", &["name"]),
        col("Carrier", &["carrier"]),
        col("Length", &["length"]),
        col("Width", &["width"]),
        col("Height", &["height"]),
        col("Unit", &["distance_unit"]),
    ],
    detail: field_list,
};

const USER_PARCEL_TEMPLATE: Layout = Layout {
    singular: "User parcel template",
    plural: "User parcel templates",
    columns: &[
        col("ID", &["object_id"]),
        col("Name", &["name"]),
        col("Length", &["length"]),
        col("Width", &["width"]),
        col("Height", &["height"]),
        col("Unit", &["distance_unit"]),
        col("Weight", &["weight"]),
        col("Weight unit", &["weight_unit"]),
    ],
    detail: field_list,
};

const LIVE_RATE: Layout = Layout {
    singular: "Live rate",
    plural: "Live rates",
    columns: &[
        col("Title", &["title"]),
        col("Amount", &["amount"]),
        col("Currency", &["currency"]),
        col("Estimated days", &["estimated_days"]),
    ],
    detail: field_list,
};

fn layout(kind: EntityKind) -> &'static Layout {
    match kind {
        EntityKind::Address => &ADDRESS,
        EntityKind::Parcel => &PARCEL,
        EntityKind::Shipment => &SHIPMENT,
        EntityKind::Rate => &RATE,
        EntityKind::Transaction => &TRANSACTION,
        EntityKind::Refund => &REFUND,
        EntityKind::Track => &TRACK,
        EntityKind::CarrierAccount => &CARRIER_ACCOUNT,
        EntityKind::CustomsItem => &CUSTOMS_ITEM,
        EntityKind::CustomsDeclaration => &CUSTOMS_DECLARATION,
        EntityKind::Manifest => &MANIFEST,
        EntityKind::Batch => &BATCH,
        EntityKind::Pickup => &PICKUP,
        EntityKind::Order => &ORDER,
        EntityKind::ServiceGroup => &SERVICE_GROUP,
        EntityKind::CarrierParcelTemplate => &CARRIER_PARCEL_TEMPLATE,
        EntityKind::UserParcelTemplate => &USER_PARCEL_TEMPLATE,
        EntityKind::LiveRate => &LIVE_RATE,
    }
}

pub(super) fn render(output: &Output) -> String {
    match output {
        Output::Page(kind, page) => page_view(layout(*kind), page),
        Output::Entity(kind, value) => entity_view(layout(*kind), value),
        Output::Optional(kind, Some(value)) => entity_view(layout(*kind), value),
        Output::Optional(_, None) => NO_VALUE.to_string(),
        Output::Items(kind, items) => items_view(layout(*kind), items),
        Output::Deleted => DELETED.to_string(),
    }
}

fn entity_view(layout: &Layout, value: &Value) -> String {
    if value.is_null() {
        return NO_VALUE.to_string();
    }
    (layout.detail)(layout, value)
}

fn page_view(layout: &Layout, page: &Paginated) -> String {
    let results = page.results();
    let count = page
        .count()
        .unwrap_or(results.len() as u64);

    let mut out = format!("## {} ({count})\n\n", layout.plural);
    if results.is_empty() {
        out.push_str(NO_RESULTS);
        return out;
    }

    out.push_str(&table(layout.columns, results));
    if let Some(next) = page.next() {
        let _ = write!(out, "\nNext page: {next}");
    }
    if let Some(previous) = page.previous() {
        let _ = write!(out, "\nPrevious page: {previous}");
    }
    out
}

fn items_view(layout: &Layout, items: &[Value]) -> String {
    let mut out = format!("## {} ({})\n\n", layout.plural, items.len());
    if items.is_empty() {
        out.push_str(NO_RESULTS);
    } else {
        out.push_str(&table(layout.columns, items));
    }
    out
}

fn table(columns: &[Column], rows: &[Value]) -> String {
    let mut out = String::new();
    let headers: Vec<&str> = columns.iter().map(|c| c.header).collect();
    let _ = writeln!(out, "| {} |", headers.join(" | "));
    let _ = writeln!(out, "|{}", " --- |".repeat(columns.len()));
    for row in rows {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| cell(lookup(row, c.path)))
            .collect();
        let _ = writeln!(out, "| {} |", cells.join(" | "));
    }
    out
}

fn heading(layout: &Layout, value: &Value) -> String {
    match lookup(value, &["object_id"]).and_then(Value::as_str) {
        Some(id) => format!("## {} {}\n\n", layout.singular, escape(id)),
        None => format!("## {}\n\n", layout.singular),
    }
}

/// Heading plus one bullet per scalar top-level field, in the remote's field order.
fn field_list(layout: &Layout, value: &Value) -> String {
    let mut out = heading(layout, value);
    let Some(obj) = value.as_object() else {
        out.push_str(&cell(Some(value)));
        return out;
    };
    for (k, v) in obj {
        if let Some(text) = scalar(v) {
            let _ = writeln!(out, "- **{}**: {}", escape(k), escape(&text));
        }
    }
    out
}

/// Bullets for the labelled paths that are present.
fn facts(out: &mut String, value: &Value, facts: &[Column]) {
    for fact in facts {
        if let Some(text) = lookup(value, fact.path).and_then(scalar) {
            let _ = writeln!(out, "- **{}**: {}", fact.header, escape(&text));
        }
    }
}

fn shipment_detail(layout: &Layout, value: &Value) -> String {
    let mut out = heading(layout, value);
    facts(
        &mut out,
        value,
        &[
            col("Status", &["status"]),
            col("From", &["address_from", "city"]),
            col("To", &["address_to", "city"]),
            col("Shipment date", &["shipment_date"]),
            col("Created", &["object_created"]),
        ],
    );
    let rates = lookup(value, &["rates"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    if !rates.is_empty() {
        let _ = write!(out, "\n### Rates\n\n{}", table(RATE.columns, rates));
    }
    out
}

fn refund_detail(layout: &Layout, value: &Value) -> String {
    let mut out = heading(layout, value);
    facts(
        &mut out,
        value,
        &[
            col("Status", &["status"]),
            col("Transaction", &["transaction"]),
            col("Created", &["object_created"]),
            col("Updated", &["object_updated"]),
            col("Test", &["test"]),
        ],
    );
    out
}

fn track_detail(_: &Layout, value: &Value) -> String {
    let carrier = lookup(value, &["carrier"]).and_then(scalar).unwrap_or_default();
    let number = lookup(value, &["tracking_number"])
        .and_then(scalar)
        .unwrap_or_default();
    let mut out = format!("## Tracking {} {}\n\n", escape(&carrier), escape(&number));
    facts(
        &mut out,
        value,
        &[
            col("Status", &["tracking_status", "status"]),
            col("Details", &["tracking_status", "status_details"]),
            col("Updated", &["tracking_status", "status_date"]),
            col("ETA", &["eta"]),
            col("Service level", &["servicelevel", "name"]),
        ],
    );

    let history = lookup(value, &["tracking_history"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    if !history.is_empty() {
        out.push_str("\n### History\n\n| Date | Status | Details | Location |\n| --- | --- | --- | --- |\n");
        for event in history {
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} |",
                cell(lookup(event, &["status_date"])),
                cell(lookup(event, &["status"])),
                cell(lookup(event, &["status_details"])),
                escape(&location(lookup(event, &["location"]))),
            );
        }
    }
    out
}

fn location(value: Option<&Value>) -> String {
    let Some(loc) = value else {
        return String::new();
    };
    ["city", "state", "zip", "country"]
        .iter()
        .filter_map(|k| loc.get(*k).and_then(scalar))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn batch_detail(layout: &Layout, value: &Value) -> String {
    let mut out = heading(layout, value);
    facts(
        &mut out,
        value,
        &[
            col("Status", &["status"]),
            col("Default carrier account", &["default_carrier_account"]),
            col("Default service level", &["default_servicelevel_token"]),
            col("Label file type", &["label_filetype"]),
            col("Shipments", &["batch_shipments", "count"]),
        ],
    );

    if let Some(counts) = lookup(value, &["object_results"]).and_then(Value::as_object)
        && !counts.is_empty()
    {
        out.push_str("\n### Shipments by status\n\n| Status | Count |\n| --- | --- |\n");
        for (status, n) in counts {
            let _ = writeln!(out, "| {} | {} |", escape(status), cell(Some(n)));
        }
    }

    let labels = lookup(value, &["label_url"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);
    if !labels.is_empty() {
        out.push_str("\n### Labels\n\n");
        for url in labels.iter().filter_map(scalar) {
            let _ = writeln!(out, "- {}", escape(&url));
        }
    }
    out
}

fn pickup_detail(layout: &Layout, value: &Value) -> String {
    let mut out = heading(layout, value);
    facts(
        &mut out,
        value,
        &[
            col("Status", &["status"]),
            col("Confirmation code", &["confirmation_code"]),
            col("Carrier account", &["carrier_account"]),
        ],
    );
    for (label, start, end) in [
        (
            "Requested window",
            "requested_start_time",
            "requested_end_time",
        ),
        (
            "Confirmed window",
            "confirmed_start_time",
            "confirmed_end_time",
        ),
    ] {
        let start = lookup(value, &[start]).and_then(scalar);
        let end = lookup(value, &[end]).and_then(scalar);
        if start.is_some() || end.is_some() {
            let _ = writeln!(
                out,
                "- **{label}**: {} to {}",
                escape(&start.unwrap_or_default()),
                escape(&end.unwrap_or_default())
            );
        }
    }
    facts(&mut out, value, &[col("Cancel by", &["cancel_by_time"])]);
    out
}

fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, k| v.get(*k))
}

/// Text of a scalar, or of an array of scalars joined by commas. `None` for null and
/// structured values.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) if items.is_empty() => None,
        Value::Array(items) => {
            let parts: Option<Vec<String>> = items
                .iter()
                .map(|v| match v {
                    Value::Object(_) | Value::Array(_) => None,
                    other => scalar(other),
                })
                .collect();
            parts.map(|p| p.join(", "))
        }
    }
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(v) => match scalar(v) {
            Some(text) => escape(&text),
            None => match v {
                Value::Array(items) => format!("{} items", items.len()),
                _ => "(object)".to_string(),
            },
        },
    }
}

/// Keep a value inside one table cell or list item.
fn escape(text: &str) -> String {
    text.replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace(['\n', '\r'], "<br>")
}
