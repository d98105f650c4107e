use super::{Entity, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

impl ShippoClient {
    pub async fn create_pickup<B: Serialize + ?Sized>(&self, pickup: &B) -> Result<Entity> {
        self.post_at("/pickups/", Some(to_body(pickup)?)).await
    }
}
