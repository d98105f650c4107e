use super::{AddressInput, AddressRef, Decimal, LabelFileType, MassUnit, Paging, ShipmentRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shippo_client::OrderFilter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ManifestInput {
    /// Carrier account the manifest is created for.
    pub carrier_account: String,
    /// ISO 8601 date; every label tendered on that date is included.
    pub shipment_date: String,
    pub address_from: AddressRef,
    /// Restrict the manifest to these transaction ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<String>>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub run_async: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ManifestIdArgs {
    /// Manifest object id.
    pub manifest_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchShipmentInput {
    /// Shipment id or inline shipment.
    pub shipment: ShipmentRef,
    /// Overrides the batch's default carrier account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_account: Option<String>,
    /// Overrides the batch's default service level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servicelevel_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BatchInput {
    pub default_carrier_account: String,
    /// e.g. `usps_priority`.
    pub default_servicelevel_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_filetype: Option<LabelFileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub batch_shipments: Vec<BatchShipmentInput>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetBatchArgs {
    /// Batch object id.
    pub batch_id: String,
    /// Pages through the batch's shipments.
    #[serde(flatten)]
    pub paging: Paging,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct BatchIdArgs {
    /// Batch object id.
    pub batch_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddShipmentsToBatchArgs {
    /// Batch object id.
    pub batch_id: String,
    pub shipments: Vec<BatchShipmentInput>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RemoveShipmentsFromBatchArgs {
    /// Batch object id.
    pub batch_id: String,
    /// Object ids of the batch shipments to remove.
    pub shipment_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PickupLocation {
    /// e.g. `Front Door`, `Back Door`, `Mail Room`, `Office`.
    pub building_location_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    pub address: AddressInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PickupInput {
    pub carrier_account: String,
    pub location: PickupLocation,
    /// Transaction ids whose parcels are picked up.
    pub transactions: Vec<String>,
    /// ISO 8601 start of the requested pickup window.
    pub requested_start_time: String,
    /// ISO 8601 end of the requested pickup window.
    pub requested_end_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_test: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Unknown,
    Awaitpay,
    Paid,
    Refunded,
    Cancelled,
    PartiallyFulfilled,
    Shipped,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Unknown => "UNKNOWN",
            OrderStatus::Awaitpay => "AWAITPAY",
            OrderStatus::Paid => "PAID",
            OrderStatus::Refunded => "REFUNDED",
            OrderStatus::Cancelled => "CANCELLED",
            OrderStatus::PartiallyFulfilled => "PARTIALLY_FULFILLED",
            OrderStatus::Shipped => "SHIPPED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineItemInput {
    pub title: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<MassUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacture_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OrderInput {
    pub to_address: AddressInput,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<AddressInput>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub line_items: Vec<LineItemInput>,
    /// ISO 8601 timestamp the order was placed.
    pub placed_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tax: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<MassUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListOrdersArgs {
    #[serde(flatten)]
    pub paging: Paging,
    pub order_status: Option<OrderStatus>,
    /// ISO 8601 lower bound on `placed_at`.
    pub start_date: Option<String>,
    /// ISO 8601 upper bound on `placed_at`.
    pub end_date: Option<String>,
}

impl ListOrdersArgs {
    #[must_use]
    pub fn filter(&self) -> OrderFilter {
        OrderFilter {
            order_status: self.order_status.map(|s| s.as_str().to_string()),
            start_date: self.start_date.clone(),
            end_date: self.end_date.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct OrderIdArgs {
    /// Order object id.
    pub order_id: String,
}

#[cfg(test)]
mod tests {
    use super::{ListOrdersArgs, OrderStatus};
    use serde_json::json;

    #[test]
    fn order_status_tokens_round_trip_through_filter() {
        let args: ListOrdersArgs = serde_json::from_value(json!({
            "order_status": "PARTIALLY_FULFILLED",
            "results": 10
        }))
        .expect("decode");
        assert_eq!(args.order_status, Some(OrderStatus::PartiallyFulfilled));
        assert_eq!(args.paging.results, Some(10));
        assert_eq!(
            args.filter().order_status.as_deref(),
            Some("PARTIALLY_FULFILLED")
        );
    }
}
