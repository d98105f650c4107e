use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

const SHIPMENTS: &str = "/shipments/";
const RATES: &str = "/rates/";

/// Creation/update time bounds for `list_shipments` (ISO 8601 timestamps).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipmentFilter {
    pub object_created_gt: Option<String>,
    pub object_created_gte: Option<String>,
    pub object_created_lt: Option<String>,
    pub object_created_lte: Option<String>,
}

impl ShippoClient {
    pub async fn list_shipments(
        &self,
        params: &ListParams,
        filter: &ShipmentFilter,
    ) -> Result<Paginated> {
        let query = params
            .query()
            .param("object_created_gt", filter.object_created_gt.as_deref())
            .param("object_created_gte", filter.object_created_gte.as_deref())
            .param("object_created_lt", filter.object_created_lt.as_deref())
            .param("object_created_lte", filter.object_created_lte.as_deref());
        self.list_at(SHIPMENTS, &query).await
    }

    /// Create a shipment. The response carries the rates quoted for it.
    pub async fn create_shipment<B: Serialize + ?Sized>(&self, shipment: &B) -> Result<Entity> {
        self.post_at(SHIPMENTS, Some(to_body(shipment)?)).await
    }

    pub async fn get_shipment(&self, shipment_id: &str) -> Result<Entity> {
        self.get_at(&format!("{SHIPMENTS}{}", segment(shipment_id)))
            .await
    }

    pub async fn get_rate(&self, rate_id: &str) -> Result<Entity> {
        self.get_at(&format!("{RATES}{}", segment(rate_id))).await
    }

    pub async fn list_shipment_rates(
        &self,
        shipment_id: &str,
        params: &ListParams,
    ) -> Result<Paginated> {
        let path = format!("{SHIPMENTS}{}/rates", segment(shipment_id));
        self.list_at(&path, &params.query()).await
    }

    /// Rates for a shipment, with amounts converted to `currency` (ISO 4217).
    pub async fn list_shipment_rates_by_currency(
        &self,
        shipment_id: &str,
        currency: &str,
        params: &ListParams,
    ) -> Result<Paginated> {
        let path = format!(
            "{SHIPMENTS}{}/rates/{}",
            segment(shipment_id),
            segment(currency)
        );
        self.list_at(&path, &params.query()).await
    }
}
