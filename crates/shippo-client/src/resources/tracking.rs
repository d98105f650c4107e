use super::{Entity, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const TRACKS: &str = "/tracks/";

impl ShippoClient {
    pub async fn get_tracking_status(&self, carrier: &str, tracking_number: &str) -> Result<Entity> {
        self.get_at(&format!(
            "{TRACKS}{}/{}",
            segment(carrier),
            segment(tracking_number)
        ))
        .await
    }

    /// Register a tracking webhook for a shipment not created through the API.
    pub async fn register_tracking_webhook<B: Serialize + ?Sized>(
        &self,
        registration: &B,
    ) -> Result<Entity> {
        self.post_at(TRACKS, Some(to_body(registration)?)).await
    }
}
