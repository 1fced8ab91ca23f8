use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of `product_tbl`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
}
