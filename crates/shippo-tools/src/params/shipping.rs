use super::{Decimal, DistanceUnit, LabelFileType, MassUnit, Paging};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shippo_client::{ShipmentFilter, TransactionFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AddressInput {
    /// First and last name. Required for purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    /// First street line. Required for purchases.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street3: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province code, e.g. `CA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// ISO 3166-1 alpha-2 country code, e.g. `US`.
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_residential: Option<bool>,
    /// Validate the address on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

/// An existing object id, or an inline object created on the fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AddressRef {
    Id(String),
    Inline(Box<AddressInput>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParcelInput {
    pub length: Decimal,
    pub width: Decimal,
    pub height: Decimal,
    pub distance_unit: DistanceUnit,
    pub weight: Decimal,
    pub mass_unit: MassUnit,
    /// Carrier parcel template token; overrides the dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Carrier-specific extras (COD, insurance, ...), forwarded as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ParcelRef {
    Id(String),
    Inline(Box<ParcelInput>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ShipmentInput {
    pub address_from: AddressRef,
    pub address_to: AddressRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_return: Option<AddressRef>,
    pub parcels: Vec<ParcelRef>,
    /// Customs declaration id, required for international shipments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_declaration: Option<String>,
    /// ISO 8601 date the shipment will be tendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_date: Option<String>,
    /// Restrict rating to these carrier account ids.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_accounts: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    /// Return immediately and compute rates in the background.
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub run_async: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ShipmentRef {
    Id(String),
    Inline(Box<ShipmentInput>),
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddressIdArgs {
    /// Address object id.
    pub address_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ParcelIdArgs {
    /// Parcel object id.
    pub parcel_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentIdArgs {
    /// Shipment object id.
    pub shipment_id: String,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListShipmentsArgs {
    #[serde(flatten)]
    pub paging: Paging,
    /// Only shipments created after this ISO 8601 timestamp.
    pub object_created_gt: Option<String>,
    pub object_created_gte: Option<String>,
    /// Only shipments created before this ISO 8601 timestamp.
    pub object_created_lt: Option<String>,
    pub object_created_lte: Option<String>,
}

impl ListShipmentsArgs {
    #[must_use]
    pub fn filter(&self) -> ShipmentFilter {
        ShipmentFilter {
            object_created_gt: self.object_created_gt.clone(),
            object_created_gte: self.object_created_gte.clone(),
            object_created_lt: self.object_created_lt.clone(),
            object_created_lte: self.object_created_lte.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RateIdArgs {
    /// Rate object id.
    pub rate_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentRatesArgs {
    /// Shipment object id.
    pub shipment_id: String,
    #[serde(flatten)]
    pub paging: Paging,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ShipmentRatesByCurrencyArgs {
    /// Shipment object id.
    pub shipment_id: String,
    /// ISO 4217 currency code the amounts are converted to, e.g. `EUR`.
    pub currency_code: String,
    #[serde(flatten)]
    pub paging: Paging,
}

/// Purchase a label for an existing rate (`rate`), or in one call for an inline shipment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TransactionInput {
    /// Rate object id to purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<String>,
    /// Inline shipment for single-call label purchase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment: Option<ShipmentInput>,
    /// Carrier account id, required with `shipment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier_account: Option<String>,
    /// Service level token, required with `shipment`, e.g. `usps_priority`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servicelevel_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_file_type: Option<LabelFileType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub run_async: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTransactionsArgs {
    #[serde(flatten)]
    pub paging: Paging,
    /// e.g. `SUCCESS`, `ERROR`, `QUEUED`, `REFUNDED`.
    pub object_status: Option<String>,
    /// e.g. `PRE_TRANSIT`, `TRANSIT`, `DELIVERED`.
    pub tracking_status: Option<String>,
    /// Only labels purchased for this rate id.
    pub rate: Option<String>,
}

impl ListTransactionsArgs {
    #[must_use]
    pub fn filter(&self) -> TransactionFilter {
        TransactionFilter {
            object_status: self.object_status.clone(),
            tracking_status: self.tracking_status.clone(),
            rate: self.rate.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TransactionIdArgs {
    /// Transaction (label) object id.
    pub transaction_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RefundInput {
    /// Transaction (label) object id to refund.
    pub transaction: String,
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub run_async: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct RefundIdArgs {
    /// Refund object id.
    pub refund_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TrackingArgs {
    /// Carrier token, e.g. `usps`, `ups`, `fedex`, or `shippo` for test numbers.
    pub carrier: String,
    pub tracking_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrackingWebhookInput {
    /// Carrier token, e.g. `usps`.
    pub carrier: String,
    pub tracking_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{AddressInput, AddressRef, ParcelInput, ShipmentInput, TransactionInput};
    use serde_json::json;

    #[test]
    fn address_body_skips_absent_fields() {
        let address: AddressInput = serde_json::from_value(json!({
            "name": "Jane Doe",
            "street1": "215 Clayton St.",
            "country": "US"
        }))
        .expect("decode");
        assert_eq!(
            serde_json::to_value(&address).expect("ser"),
            json!({"name": "Jane Doe", "street1": "215 Clayton St.", "country": "US"})
        );
    }

    #[test]
    fn references_accept_ids_or_inline_objects() {
        let by_id: AddressRef = serde_json::from_value(json!("addr_1")).expect("id");
        assert_eq!(by_id, AddressRef::Id("addr_1".into()));
        let inline: AddressRef =
            serde_json::from_value(json!({"country": "US", "zip": "94117"})).expect("inline");
        assert!(matches!(inline, AddressRef::Inline(_)));
    }

    #[test]
    fn shipment_body_renames_async() {
        let parcel: ParcelInput = serde_json::from_value(json!({
            "length": "10", "width": 5, "height": 4, "distance_unit": "in",
            "weight": 2, "mass_unit": "lb"
        }))
        .expect("parcel");
        let shipment = ShipmentInput {
            address_from: AddressRef::Id("addr_1".into()),
            address_to: AddressRef::Id("addr_2".into()),
            address_return: None,
            parcels: vec![super::ParcelRef::Inline(Box::new(parcel))],
            customs_declaration: None,
            shipment_date: None,
            carrier_accounts: None,
            extra: None,
            metadata: None,
            run_async: Some(false),
        };
        let body = serde_json::to_value(&shipment).expect("ser");
        assert_eq!(body["async"], json!(false));
        assert_eq!(body["parcels"][0]["length"], json!("10"));
        assert_eq!(body["parcels"][0]["width"], json!(5));
    }

    #[test]
    fn transaction_for_rate_is_minimal() {
        let t: TransactionInput =
            serde_json::from_value(json!({"rate": "rate_1", "label_file_type": "PDF"}))
                .expect("decode");
        assert_eq!(
            serde_json::to_value(&t).expect("ser"),
            json!({"rate": "rate_1", "label_file_type": "PDF"})
        );
    }
}
