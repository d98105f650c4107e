use super::{Entity, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use crate::query::QueryBuilder;
use serde::Serialize;

const SERVICE_GROUPS: &str = "/service-groups";

impl ShippoClient {
    pub async fn list_service_groups(&self) -> Result<Paginated> {
        self.list_at(SERVICE_GROUPS, &QueryBuilder::new()).await
    }

    pub async fn create_service_group<B: Serialize + ?Sized>(&self, group: &B) -> Result<Entity> {
        self.post_at(SERVICE_GROUPS, Some(to_body(group)?)).await
    }

    /// Replace a service group. The body identifies the group through its `object_id`.
    pub async fn update_service_group<B: Serialize + ?Sized>(&self, group: &B) -> Result<Entity> {
        self.put_at(SERVICE_GROUPS, to_body(group)?).await
    }

    pub async fn delete_service_group(&self, group_id: &str) -> Result<()> {
        self.delete_at(&format!("{SERVICE_GROUPS}/{}", segment(group_id)))
            .await
    }
}
