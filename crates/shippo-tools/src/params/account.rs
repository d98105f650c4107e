use super::{AddressRef, Decimal, DistanceUnit, MassUnit, Paging, ParcelRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use shippo_client::CarrierAccountFilter;

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCarrierAccountsArgs {
    #[serde(flatten)]
    pub paging: Paging,
    /// Include each account's service levels.
    pub service_levels: Option<bool>,
    /// Carrier token, e.g. `usps`.
    pub carrier: Option<String>,
    pub account_id: Option<String>,
}

impl ListCarrierAccountsArgs {
    #[must_use]
    pub fn filter(&self) -> CarrierAccountFilter {
        CarrierAccountFilter {
            service_levels: self.service_levels,
            carrier: self.carrier.clone(),
            account_id: self.account_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CarrierAccountIdArgs {
    /// Carrier account object id.
    pub carrier_account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CarrierAccountInput {
    /// Carrier token, e.g. `fedex`.
    pub carrier: String,
    /// The account number with the carrier.
    pub account_id: String,
    /// Carrier-specific credentials and settings.
    pub parameters: serde_json::Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CarrierAccountUpdate {
    pub carrier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateCarrierAccountArgs {
    /// Carrier account object id.
    pub carrier_account_id: String,
    #[serde(flatten)]
    pub update: CarrierAccountUpdate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceGroupType {
    LiveRate,
    FlatRate,
    FreeShipping,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceLevelRef {
    /// Carrier account object id.
    pub account_object_id: String,
    /// e.g. `usps_priority`.
    pub service_level_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceGroupInput {
    /// Name shown to customers at checkout.
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub group_type: ServiceGroupType,
    pub service_levels: Vec<ServiceLevelRef>,
    /// Price for `FLAT_RATE` groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat_rate_currency: Option<String>,
    /// Cart value above which `FREE_SHIPPING` applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold_min: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_shipping_threshold_currency: Option<String>,
    /// Percentage adjustment applied to `LIVE_RATE` amounts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_adjustment: Option<i64>,
}

/// A complete service group; the group is identified by `object_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceGroupUpdate {
    pub object_id: String,
    pub is_active: bool,
    #[serde(flatten)]
    pub group: ServiceGroupInput,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ServiceGroupIdArgs {
    /// Service group object id.
    pub service_group_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TemplateScope {
    All,
    User,
    Enabled,
}

impl TemplateScope {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateScope::All => "all",
            TemplateScope::User => "user",
            TemplateScope::Enabled => "enabled",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListCarrierParcelTemplatesArgs {
    /// Only templates of this carrier, e.g. `fedex`.
    pub carrier: Option<String>,
    /// Which templates to include.
    pub include: Option<TemplateScope>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CarrierParcelTemplateArgs {
    /// Template token, e.g. `FedEx_Box_10kg`.
    pub carrier_parcel_template_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserParcelTemplateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_unit: Option<DistanceUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<MassUnit>,
    /// Carrier template token to base this template on, instead of dimensions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UserParcelTemplateIdArgs {
    /// User parcel template object id.
    pub user_parcel_template_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateUserParcelTemplateArgs {
    /// User parcel template object id.
    pub user_parcel_template_id: String,
    #[serde(flatten)]
    pub template: UserParcelTemplateInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LiveRateLineItem {
    pub title: String,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_unit: Option<MassUnit>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LiveRateInput {
    /// Defaults to the account's default sender address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_from: Option<AddressRef>,
    pub address_to: AddressRef,
    pub line_items: Vec<LiveRateLineItem>,
    /// Defaults to the account's default parcel template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parcel: Option<ParcelRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DefaultParcelTemplateInput {
    /// User parcel template object id to use as the default.
    pub object_id: String,
}
