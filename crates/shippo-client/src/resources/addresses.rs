use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const ADDRESSES: &str = "/addresses/";

impl ShippoClient {
    pub async fn list_addresses(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(ADDRESSES, &params.query()).await
    }

    pub async fn create_address<B: Serialize + ?Sized>(&self, address: &B) -> Result<Entity> {
        self.post_at(ADDRESSES, Some(to_body(address)?)).await
    }

    pub async fn get_address(&self, address_id: &str) -> Result<Entity> {
        self.get_at(&format!("{ADDRESSES}{}", segment(address_id)))
            .await
    }

    /// Run the provider's address validation on a stored address.
    pub async fn validate_address(&self, address_id: &str) -> Result<Entity> {
        self.get_at(&format!("{ADDRESSES}{}/validate", segment(address_id)))
            .await
    }
}
