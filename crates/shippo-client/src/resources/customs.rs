use super::{Entity, ListParams, Paginated, segment, to_body};
use crate::client::ShippoClient;
use crate::error::Result;
use serde::Serialize;

const CUSTOMS_ITEMS: &str = "/customs/items/";
const CUSTOMS_DECLARATIONS: &str = "/customs/declarations/";

impl ShippoClient {
    pub async fn list_customs_items(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(CUSTOMS_ITEMS, &params.query()).await
    }

    pub async fn create_customs_item<B: Serialize + ?Sized>(&self, item: &B) -> Result<Entity> {
        self.post_at(CUSTOMS_ITEMS, Some(to_body(item)?)).await
    }

    pub async fn get_customs_item(&self, item_id: &str) -> Result<Entity> {
        self.get_at(&format!("{CUSTOMS_ITEMS}{}", segment(item_id)))
            .await
    }

    pub async fn list_customs_declarations(&self, params: &ListParams) -> Result<Paginated> {
        self.list_at(CUSTOMS_DECLARATIONS, &params.query()).await
    }

    pub async fn create_customs_declaration<B: Serialize + ?Sized>(
        &self,
        declaration: &B,
    ) -> Result<Entity> {
        self.post_at(CUSTOMS_DECLARATIONS, Some(to_body(declaration)?))
            .await
    }

    pub async fn get_customs_declaration(&self, declaration_id: &str) -> Result<Entity> {
        self.get_at(&format!("{CUSTOMS_DECLARATIONS}{}", segment(declaration_id)))
            .await
    }
}
