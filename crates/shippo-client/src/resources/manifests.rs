use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const MANIFESTS: &str = "/manifests/";

impl ShippoClient {
    pub async fn list_manifests(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(MANIFESTS, &params.query()).await
    }

    pub async fn create_manifest<B: Serialize + ?Sized>(&self, manifest: &B) -> Result<Entity> {
        self.post_at(MANIFESTS, Some(to_body(manifest)?)).await
    }

    pub async fn get_manifest(&self, manifest_id: &str) -> Result<Entity> {
        self.get_at(&format!("{MANIFESTS}{}", segment(manifest_id)))
            .await
    }
}
