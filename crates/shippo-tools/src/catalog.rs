//! The tool table: one entry per Shippo operation.
//!
//! Every entry pairs a typed argument struct (which also yields the advertised input
//! schema) with the client call it performs and the shape of its result.

use crate::format::{EntityKind as E, Output};
use crate::params::*;
use crate::semantics::OperationKind;
use crate::semantics::OperationKind::{Action, Create, Delete, Get, List, Update};
use futures::future::BoxFuture;
use schemars::{JsonSchema, SchemaGenerator};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shippo_client::ShippoClient;
use std::future::Future;
use std::sync::Arc;

/// A decoded call, waiting for a client to run against.
pub(crate) type Prepared =
    Box<dyn FnOnce(ShippoClient) -> BoxFuture<'static, shippo_client::Result<Output>> + Send>;

type Decoder = Box<dyn Fn(Value) -> Result<Prepared, serde_json::Error> + Send + Sync>;

pub(crate) struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: OperationKind,
    pub schema: Value,
    decode: Decoder,
}

impl ToolDef {
    /// Decode `args` into the tool's typed parameters.
    pub fn prepare(&self, args: Value) -> Result<Prepared, serde_json::Error> {
        (self.decode)(args)
    }
}

fn def<P, F, Fut>(
    name: &'static str,
    description: &'static str,
    kind: OperationKind,
    run: F,
) -> ToolDef
where
    P: DeserializeOwned + JsonSchema + Send + 'static,
    F: Fn(ShippoClient, P) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = shippo_client::Result<Output>> + Send + 'static,
{
    let run = Arc::new(run);
    ToolDef {
        name,
        description,
        kind,
        schema: input_schema::<P>(),
        decode: Box::new(move |args: Value| -> Result<Prepared, serde_json::Error> {
            let params: P = serde_json::from_value(args)?;
            let run = Arc::clone(&run);
            let prepared: Prepared = Box::new(
                move |client: ShippoClient| -> BoxFuture<'static, shippo_client::Result<Output>> {
                    Box::pin((*run)(client, params))
                },
            );
            Ok(prepared)
        }),
    }
}

/// Input schema for `P`, with the shared `format` property added.
fn input_schema<P: JsonSchema>() -> Value {
    let mut schema = SchemaGenerator::default()
        .into_root_schema_for::<P>()
        .to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.entry("type").or_insert_with(|| json!("object"));
        let props = obj.entry("properties").or_insert_with(|| json!({}));
        if let Some(props) = props.as_object_mut() {
            props.insert("format".into(), format_schema());
        }
    }
    schema
}

fn format_schema() -> Value {
    let mut schema = SchemaGenerator::default()
        .into_root_schema_for::<OutputFormat>()
        .to_value();
    if let Some(obj) = schema.as_object_mut() {
        obj.remove("$schema");
        obj.remove("title");
        obj.insert(
            "description".into(),
            json!("Result encoding: `markdown` (default) or `json`."),
        );
        obj.insert("default".into(), json!(OutputFormat::default().as_str()));
    }
    schema
}

#[rustfmt::skip]
#[allow(clippy::too_many_lines)]
pub(crate) fn tools() -> Vec<ToolDef> {
    vec![
        // Addresses
        def("list_addresses", "List addresses stored in the Shippo account.", List,
            |c, p: Paging| async move {
                c.list_addresses(&p.into()).await.map(Output::page(E::Address))
            }),
        def("create_address", "Create an address. Set `validate` to have Shippo validate it on creation.", Create,
            |c, p: AddressInput| async move {
                c.create_address(&p).await.map(Output::entity(E::Address))
            }),
        def("get_address", "Retrieve an address by object id.", Get,
            |c, p: AddressIdArgs| async move {
                c.get_address(&p.address_id).await.map(Output::entity(E::Address))
            }),
        def("validate_address", "Validate an existing address and return the validation results.", Get,
            |c, p: AddressIdArgs| async move {
                c.validate_address(&p.address_id).await.map(Output::entity(E::Address))
            }),
        // Parcels
        def("list_parcels", "List parcels.", List,
            |c, p: Paging| async move {
                c.list_parcels(&p.into()).await.map(Output::page(E::Parcel))
            }),
        def("create_parcel", "Create a parcel from dimensions and weight, or from a carrier template token.", Create,
            |c, p: ParcelInput| async move {
                c.create_parcel(&p).await.map(Output::entity(E::Parcel))
            }),
        def("get_parcel", "Retrieve a parcel by object id.", Get,
            |c, p: ParcelIdArgs| async move {
                c.get_parcel(&p.parcel_id).await.map(Output::entity(E::Parcel))
            }),
        // Shipments and rates
        def("list_shipments", "List shipments, optionally bounded by creation time.", List,
            |c, p: ListShipmentsArgs| async move {
                c.list_shipments(&p.paging.into(), &p.filter()).await.map(Output::page(E::Shipment))
            }),
        def("create_shipment", "Create a shipment and get the rates quoted for it.", Create,
            |c, p: ShipmentInput| async move {
                c.create_shipment(&p).await.map(Output::entity(E::Shipment))
            }),
        def("get_shipment", "Retrieve a shipment, including its rates, by object id.", Get,
            |c, p: ShipmentIdArgs| async move {
                c.get_shipment(&p.shipment_id).await.map(Output::entity(E::Shipment))
            }),
        def("get_rate", "Retrieve a single rate by object id.", Get,
            |c, p: RateIdArgs| async move {
                c.get_rate(&p.rate_id).await.map(Output::entity(E::Rate))
            }),
        def("list_shipment_rates", "List the rates quoted for a shipment.", List,
            |c, p: ShipmentRatesArgs| async move {
                c.list_shipment_rates(&p.shipment_id, &p.paging.into()).await.map(Output::page(E::Rate))
            }),
        def("list_shipment_rates_by_currency", "List the rates for a shipment with amounts converted to the given ISO 4217 currency.", List,
            |c, p: ShipmentRatesByCurrencyArgs| async move {
                c.list_shipment_rates_by_currency(&p.shipment_id, &p.currency_code, &p.paging.into())
                    .await
                    .map(Output::page(E::Rate))
            }),
        // Transactions (labels)
        def("list_transactions", "List label purchases, optionally filtered by status or rate.", List,
            |c, p: ListTransactionsArgs| async move {
                c.list_transactions(&p.paging.into(), &p.filter()).await.map(Output::page(E::Transaction))
            }),
        def("create_transaction", "Purchase a shipping label for a rate, or in one call from an inline shipment.", Create,
            |c, p: TransactionInput| async move {
                c.create_transaction(&p).await.map(Output::entity(E::Transaction))
            }),
        def("get_transaction", "Retrieve a label purchase by object id.", Get,
            |c, p: TransactionIdArgs| async move {
                c.get_transaction(&p.transaction_id).await.map(Output::entity(E::Transaction))
            }),
        // Refunds
        def("list_refunds", "List label refund requests.", List,
            |c, p: Paging| async move {
                c.list_refunds(&p.into()).await.map(Output::page(E::Refund))
            }),
        def("create_refund", "Request a refund for a purchased label.", Create,
            |c, p: RefundInput| async move {
                c.create_refund(&p).await.map(Output::entity(E::Refund))
            }),
        def("get_refund", "Retrieve a refund request by object id.", Get,
            |c, p: RefundIdArgs| async move {
                c.get_refund(&p.refund_id).await.map(Output::entity(E::Refund))
            }),
        // Tracking
        def("get_tracking_status", "Get the tracking status and history of a shipment by carrier and tracking number.", Get,
            |c, p: TrackingArgs| async move {
                c.get_tracking_status(&p.carrier, &p.tracking_number).await.map(Output::entity(E::Track))
            }),
        def("register_tracking_webhook", "Register a tracking number so status updates are pushed to the account's webhooks.", Create,
            |c, p: TrackingWebhookInput| async move {
                c.register_tracking_webhook(&p).await.map(Output::entity(E::Track))
            }),
        // Carrier accounts
        def("list_carrier_accounts", "List carrier accounts connected to the Shippo account.", List,
            |c, p: ListCarrierAccountsArgs| async move {
                c.list_carrier_accounts(&p.paging.into(), &p.filter()).await.map(Output::page(E::CarrierAccount))
            }),
        def("get_carrier_account", "Retrieve a carrier account by object id.", Get,
            |c, p: CarrierAccountIdArgs| async move {
                c.get_carrier_account(&p.carrier_account_id).await.map(Output::entity(E::CarrierAccount))
            }),
        def("create_carrier_account", "Connect a carrier account using carrier-specific parameters.", Create,
            |c, p: CarrierAccountInput| async move {
                c.create_carrier_account(&p).await.map(Output::entity(E::CarrierAccount))
            }),
        def("update_carrier_account", "Update a carrier account's settings or credentials.", Update,
            |c, p: UpdateCarrierAccountArgs| async move {
                c.update_carrier_account(&p.carrier_account_id, &p.update)
                    .await
                    .map(Output::entity(E::CarrierAccount))
            }),
        // Customs
        def("list_customs_items", "List customs items.", List,
            |c, p: Paging| async move {
                c.list_customs_items(&p.into()).await.map(Output::page(E::CustomsItem))
            }),
        def("create_customs_item", "Create a customs item for use in customs declarations.", Create,
            |c, p: CustomsItemInput| async move {
                c.create_customs_item(&p).await.map(Output::entity(E::CustomsItem))
            }),
        def("get_customs_item", "Retrieve a customs item by object id.", Get,
            |c, p: CustomsItemIdArgs| async move {
                c.get_customs_item(&p.customs_item_id).await.map(Output::entity(E::CustomsItem))
            }),
        def("list_customs_declarations", "List customs declarations.", List,
            |c, p: Paging| async move {
                c.list_customs_declarations(&p.into()).await.map(Output::page(E::CustomsDeclaration))
            }),
        def("create_customs_declaration", "Create a customs declaration for an international shipment.", Create,
            |c, p: CustomsDeclarationInput| async move {
                c.create_customs_declaration(&p).await.map(Output::entity(E::CustomsDeclaration))
            }),
        def("get_customs_declaration", "Retrieve a customs declaration by object id.", Get,
            |c, p: CustomsDeclarationIdArgs| async move {
                c.get_customs_declaration(&p.customs_declaration_id)
                    .await
                    .map(Output::entity(E::CustomsDeclaration))
            }),
        // Manifests
        def("list_manifests", "List carrier manifests (scan forms).", List,
            |c, p: Paging| async move {
                c.list_manifests(&p.into()).await.map(Output::page(E::Manifest))
            }),
        def("create_manifest", "Create a manifest covering the labels tendered on a date.", Create,
            |c, p: ManifestInput| async move {
                c.create_manifest(&p).await.map(Output::entity(E::Manifest))
            }),
        def("get_manifest", "Retrieve a manifest by object id.", Get,
            |c, p: ManifestIdArgs| async move {
                c.get_manifest(&p.manifest_id).await.map(Output::entity(E::Manifest))
            }),
        // Batches
        def("create_batch", "Create a batch of shipments to purchase labels for together.", Create,
            |c, p: BatchInput| async move {
                c.create_batch(&p).await.map(Output::entity(E::Batch))
            }),
        def("get_batch", "Retrieve a batch and a page of its shipments.", Get,
            |c, p: GetBatchArgs| async move {
                c.get_batch(&p.batch_id, &p.paging.into()).await.map(Output::entity(E::Batch))
            }),
        def("add_shipments_to_batch", "Add shipments to a batch that has not been purchased.", Action,
            |c, p: AddShipmentsToBatchArgs| async move {
                c.add_shipments_to_batch(&p.batch_id, &p.shipments).await.map(Output::entity(E::Batch))
            }),
        def("remove_shipments_from_batch", "Remove shipments from a batch that has not been purchased.", Action,
            |c, p: RemoveShipmentsFromBatchArgs| async move {
                c.remove_shipments_from_batch(&p.batch_id, &p.shipment_ids)
                    .await
                    .map(Output::entity(E::Batch))
            }),
        def("purchase_batch", "Purchase labels for every valid shipment in a batch.", Action,
            |c, p: BatchIdArgs| async move {
                c.purchase_batch(&p.batch_id).await.map(Output::entity(E::Batch))
            }),
        // Pickups
        def("create_pickup", "Schedule a carrier pickup for purchased labels.", Create,
            |c, p: PickupInput| async move {
                c.create_pickup(&p).await.map(Output::entity(E::Pickup))
            }),
        // Orders
        def("list_orders", "List orders, optionally filtered by status and placement date.", List,
            |c, p: ListOrdersArgs| async move {
                c.list_orders(&p.paging.into(), &p.filter()).await.map(Output::page(E::Order))
            }),
        def("create_order", "Create an order to fulfil later.", Create,
            |c, p: OrderInput| async move {
                c.create_order(&p).await.map(Output::entity(E::Order))
            }),
        def("get_order", "Retrieve an order by object id.", Get,
            |c, p: OrderIdArgs| async move {
                c.get_order(&p.order_id).await.map(Output::entity(E::Order))
            }),
        // Service groups
        def("list_service_groups", "List service groups offered at checkout.", List,
            |c, _: NoArgs| async move {
                c.list_service_groups().await.map(Output::page(E::ServiceGroup))
            }),
        def("create_service_group", "Create a service group of carrier service levels.", Create,
            |c, p: ServiceGroupInput| async move {
                c.create_service_group(&p).await.map(Output::entity(E::ServiceGroup))
            }),
        def("update_service_group", "Replace a service group. The group is identified by `object_id`.", Update,
            |c, p: ServiceGroupUpdate| async move {
                c.update_service_group(&p).await.map(Output::entity(E::ServiceGroup))
            }),
        def("delete_service_group", "Delete a service group.", Delete,
            |c, p: ServiceGroupIdArgs| async move {
                c.delete_service_group(&p.service_group_id).await.map(Output::deleted)
            }),
        // Parcel templates
        def("list_carrier_parcel_templates", "List carrier-defined parcel templates.", List,
            |c, p: ListCarrierParcelTemplatesArgs| async move {
                c.list_carrier_parcel_templates(p.carrier.as_deref(), p.include.map(TemplateScope::as_str))
                    .await
                    .map(Output::page(E::CarrierParcelTemplate))
            }),
        def("get_carrier_parcel_template", "Retrieve a carrier parcel template by token.", Get,
            |c, p: CarrierParcelTemplateArgs| async move {
                c.get_carrier_parcel_template(&p.carrier_parcel_template_token)
                    .await
                    .map(Output::entity(E::CarrierParcelTemplate))
            }),
        def("list_user_parcel_templates", "List the account's own parcel templates.", List,
            |c, _: NoArgs| async move {
                c.list_user_parcel_templates().await.map(Output::page(E::UserParcelTemplate))
            }),
        def("create_user_parcel_template", "Create a parcel template from dimensions or a carrier template.", Create,
            |c, p: UserParcelTemplateInput| async move {
                c.create_user_parcel_template(&p).await.map(Output::entity(E::UserParcelTemplate))
            }),
        def("get_user_parcel_template", "Retrieve one of the account's parcel templates.", Get,
            |c, p: UserParcelTemplateIdArgs| async move {
                c.get_user_parcel_template(&p.user_parcel_template_id)
                    .await
                    .map(Output::entity(E::UserParcelTemplate))
            }),
        def("update_user_parcel_template", "Update one of the account's parcel templates.", Update,
            |c, p: UpdateUserParcelTemplateArgs| async move {
                c.update_user_parcel_template(&p.user_parcel_template_id, &p.template)
                    .await
                    .map(Output::entity(E::UserParcelTemplate))
            }),
        def("delete_user_parcel_template", "Delete one of the account's parcel templates.", Delete,
            |c, p: UserParcelTemplateIdArgs| async move {
                c.delete_user_parcel_template(&p.user_parcel_template_id).await.map(Output::deleted)
            }),
        // Checkout live rates
        def("create_live_rate", "Quote checkout rates for a cart of line items.", Action,
            |c, p: LiveRateInput| async move {
                c.create_live_rate(&p).await.map(|rates| Output::Items(E::LiveRate, rates))
            }),
        def("get_default_parcel_template", "Show the parcel template used for live rates when none is given.", Get,
            |c, _: NoArgs| async move {
                c.get_default_parcel_template()
                    .await
                    .map(|template| Output::Optional(E::UserParcelTemplate, template))
            }),
        def("update_default_parcel_template", "Set the parcel template used for live rates when none is given.", Update,
            |c, p: DefaultParcelTemplateInput| async move {
                c.update_default_parcel_template(&p).await.map(Output::entity(E::UserParcelTemplate))
            }),
        def("delete_default_parcel_template", "Clear the default live-rate parcel template.", Delete,
            |c, _: NoArgs| async move {
                c.delete_default_parcel_template().await.map(Output::deleted)
            }),
    ]
}

#[cfg(test)]
mod tests {
    use super::tools;
    use serde_json::{Value, json};
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let defs = tools();
        let names: HashSet<&str> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), defs.len());
        assert_eq!(defs.len(), 58);
    }

    #[test]
    fn every_schema_is_an_object_with_format() {
        for def in tools() {
            assert_eq!(def.schema["type"], json!("object"), "{}", def.name);
            let format = &def.schema["properties"]["format"];
            assert_eq!(format["default"], json!("markdown"), "{}", def.name);
            assert_eq!(format["enum"], json!(["json", "markdown"]), "{}", def.name);
        }
    }

    #[test]
    fn paging_bounds_are_advertised() {
        let defs = tools();
        let list = defs
            .iter()
            .find(|d| d.name == "list_addresses")
            .expect("list_addresses");
        let results = &list.schema["properties"]["results"];
        assert_eq!(results["minimum"], json!(1));
        assert_eq!(results["maximum"], json!(100));
        assert_eq!(list.schema.get("required"), None);
    }

    #[test]
    fn path_ids_are_required() {
        let defs = tools();
        let get = defs
            .iter()
            .find(|d| d.name == "get_shipment")
            .expect("get_shipment");
        let required: Vec<&str> = get.schema["required"]
            .as_array()
            .expect("required")
            .iter()
            .filter_map(Value::as_str)
            .collect();
        assert_eq!(required, vec!["shipment_id"]);
    }

    #[test]
    fn decode_rejects_wrong_shapes() {
        let defs = tools();
        let get = defs
            .iter()
            .find(|d| d.name == "get_address")
            .expect("get_address");
        assert!(get.prepare(json!({"address_id": 7})).is_err());
        assert!(get.prepare(json!({"address_id": "addr_1"})).is_ok());
    }
}
