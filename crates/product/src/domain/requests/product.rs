use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Explicit id; when it matches an existing row that row is overwritten.
    #[serde(default)]
    #[schema(example = 4)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "headset")]
    pub name: String,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 2)]
    pub quantity: i32,

    #[schema(example = 7999)]
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    /// Ignored: the path id always wins.
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "shoes")]
    pub name: String,

    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    #[schema(example = 1)]
    pub quantity: i32,

    #[schema(example = 1999)]
    pub price: i64,
}

/// Row payload handed to the repository's `save`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveProduct {
    pub id: Option<i64>,
    pub name: String,
    pub quantity: i32,
    pub price: i64,
}

impl From<&CreateProductRequest> for SaveProduct {
    fn from(req: &CreateProductRequest) -> Self {
        SaveProduct {
            id: req.id,
            name: req.name.clone(),
            quantity: req.quantity,
            price: req.price,
        }
    }
}

impl UpdateProductRequest {
    pub fn to_save(&self, id: i64) -> SaveProduct {
        SaveProduct {
            id: Some(id),
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_missing_id() {
        let req: CreateProductRequest =
            serde_json::from_str(r#"{"name":"headset","quantity":2,"price":7999}"#)
                .expect("valid body");

        assert_eq!(req.id, None);
        assert!(req.validate().is_ok());
        assert_eq!(
            SaveProduct::from(&req),
            SaveProduct {
                id: None,
                name: "headset".into(),
                quantity: 2,
                price: 7999,
            }
        );
    }

    #[test]
    fn create_request_rejects_missing_field() {
        let result = serde_json::from_str::<CreateProductRequest>(r#"{"name":"headset","price":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn validation_flags_empty_name_and_negative_quantity() {
        let req = CreateProductRequest {
            id: None,
            name: String::new(),
            quantity: -1,
            price: 10,
        };

        let errors = req.validate().expect_err("invalid");
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("quantity"));
    }

    #[test]
    fn update_uses_path_id_over_body_id() {
        let req = UpdateProductRequest {
            id: Some(99),
            name: "shoes".into(),
            quantity: 1,
            price: 1999,
        };

        assert_eq!(req.to_save(2).id, Some(2));
    }
}
