use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const PARCELS: &str = "/parcels/";

impl ShippoClient {
    pub async fn list_parcels(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(PARCELS, &params.query()).await
    }

    pub async fn create_parcel<B: Serialize + ?Sized>(&self, parcel: &B) -> Result<Entity> {
        self.post_at(PARCELS, Some(to_body(parcel)?)).await
    }

    pub async fn get_parcel(&self, parcel_id: &str) -> Result<Entity> {
        self.get_at(&format!("{PARCELS}{}", segment(parcel_id))).await
    }
}
