use crate::{domain::requests::product::SaveProduct, model::Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts when `id` is `None`, otherwise upserts the row with that id.
    async fn save(&self, product: &SaveProduct) -> Result<ProductModel, RepositoryError>;
    /// Returns whether a row was removed; a missing id is not an error.
    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError>;
}
