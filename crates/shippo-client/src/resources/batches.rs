use super::{Entity, ListParams, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const BATCHES: &str = "/batches/";

impl ShippoClient {
    pub async fn create_batch<B: Serialize + ?Sized>(&self, batch: &B) -> Result<Entity> {
        self.post_at(BATCHES, Some(to_body(batch)?)).await
    }

    /// Fetch a batch. `params` pages through the batch's embedded shipment list.
    pub async fn get_batch(&self, batch_id: &str, params: &ListParams) -> Result<Entity> {
        let path = format!("{BATCHES}{}{}", segment(batch_id), params.query().build());
        self.get_at(&path).await
    }

    /// `shipments` is forwarded as-is: an array of `{shipment: <id>}` or inline shipment
    /// objects.
    pub async fn add_shipments_to_batch<B: Serialize + ?Sized>(
        &self,
        batch_id: &str,
        shipments: &B,
    ) -> Result<Entity> {
        self.batch_action(batch_id, "add_shipments", Some(to_body(shipments)?))
            .await
    }

    /// `shipment_ids` is an array of batch-shipment object ids.
    pub async fn remove_shipments_from_batch<B: Serialize + ?Sized>(
        &self,
        batch_id: &str,
        shipment_ids: &B,
    ) -> Result<Entity> {
        self.batch_action(batch_id, "remove_shipments", Some(to_body(shipment_ids)?))
            .await
    }

    /// Purchase labels for every valid shipment in the batch.
    pub async fn purchase_batch(&self, batch_id: &str) -> Result<Entity> {
        self.batch_action(batch_id, "purchase", None).await
    }

    async fn batch_action(
        &self,
        batch_id: &str,
        verb: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Entity> {
        self.post_at(&format!("{BATCHES}{}/{verb}", segment(batch_id)), body)
            .await
    }
}
