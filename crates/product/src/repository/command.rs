use crate::{
    abstract_trait::product::repository::ProductCommandRepositoryTrait,
    domain::requests::product::SaveProduct, model::Product as ProductModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn save(&self, product: &SaveProduct) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let query = match product.id {
            Some(id) => sqlx::query_as::<_, ProductModel>(
                r#"
                INSERT INTO product_tbl (id, name, quantity, price)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    name = excluded.name,
                    quantity = excluded.quantity,
                    price = excluded.price
                RETURNING id, name, quantity, price
                "#,
            )
            .bind(id),
            None => sqlx::query_as::<_, ProductModel>(
                r#"
                INSERT INTO product_tbl (name, quantity, price)
                VALUES (?, ?, ?)
                RETURNING id, name, quantity, price
                "#,
            ),
        };

        let result = query
            .bind(&product.name)
            .bind(product.quantity)
            .bind(product.price)
            .fetch_one(&mut *conn)
            .await
            .map_err(|err| {
                error!("❌ Failed to save product {}: {:?}", product.name, err);
                RepositoryError::from(err)
            })?;

        info!("✅ Saved product ID {} ({})", result.id, result.name);
        Ok(result)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, RepositoryError> {
        info!("❌ Deleting product: {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            r#"
            DELETE FROM product_tbl
            WHERE id = ?
            "#,
        )
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to delete product {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        let removed = result.rows_affected() > 0;
        if removed {
            info!("✅ Product ID {} deleted", id);
        } else {
            info!("ℹ️ Product ID {} not present, nothing deleted", id);
        }

        Ok(removed)
    }
}
