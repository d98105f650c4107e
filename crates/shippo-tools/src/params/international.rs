use super::{Decimal, MassUnit};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomsItemInput {
    /// Text description of the item.
    pub description: String,
    pub quantity: u32,
    /// Total weight of this item line, i.e. quantity * unit weight.
    pub net_weight: Decimal,
    pub mass_unit: MassUnit,
    /// Total value of this item line, i.e. quantity * unit value.
    pub value_amount: Decimal,
    /// ISO 4217 currency code of `value_amount`.
    pub value_currency: String,
    /// ISO 3166-1 alpha-2 country of manufacture.
    pub origin_country: String,
    /// Harmonized System tariff code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tariff_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eccn_ear99: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum CustomsItemRef {
    Id(String),
    Inline(Box<CustomsItemInput>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentsType {
    Documents,
    Gift,
    Sample,
    Merchandise,
    HumanitarianDonation,
    ReturnMerchandise,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NonDeliveryOption {
    Abandon,
    Return,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CustomsDeclarationInput {
    /// Certify that the information is accurate.
    pub certify: bool,
    /// Name of the person certifying.
    pub certify_signer: String,
    pub contents_type: ContentsType,
    /// Required when `contents_type` is `OTHER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents_explanation: Option<String>,
    pub non_delivery_option: NonDeliveryOption,
    /// Customs item ids or inline items.
    pub items: Vec<CustomsItemRef>,
    /// e.g. `DDP`, `DDU`, `FCA`, `DAP`, `eDAP`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incoterm: Option<String>,
    /// e.g. `NOEEI_30_37_a`, `AES_ITN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eel_pfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exporter_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub importer_reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CustomsItemIdArgs {
    /// Customs item object id.
    pub customs_item_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CustomsDeclarationIdArgs {
    /// Customs declaration object id.
    pub customs_declaration_id: String,
}

#[cfg(test)]
mod tests {
    use super::CustomsDeclarationInput;
    use serde_json::json;

    #[test]
    fn declaration_accepts_mixed_item_refs() {
        let d: CustomsDeclarationInput = serde_json::from_value(json!({
            "certify": true,
            "certify_signer": "Jane Doe",
            "contents_type": "MERCHANDISE",
            "non_delivery_option": "RETURN",
            "items": ["item_1", {
                "description": "T-Shirt", "quantity": 2, "net_weight": "0.4",
                "mass_unit": "lb", "value_amount": "20", "value_currency": "USD",
                "origin_country": "US"
            }]
        }))
        .expect("decode");
        let body = serde_json::to_value(&d).expect("ser");
        assert_eq!(body["items"][0], json!("item_1"));
        assert_eq!(body["items"][1]["quantity"], json!(2));
        assert_eq!(body["contents_type"], json!("MERCHANDISE"));
        assert!(body.get("incoterm").is_none());
    }
}
