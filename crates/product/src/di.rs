use crate::{repository::ProductRepository, service::ProductService};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::fmt;

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_service: ProductService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_service", &self.product_service)
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, registry: &mut Registry) -> Self {
        let product_repository = ProductRepository::new(pool);
        let product_service = ProductService::new(product_repository, registry);

        Self { product_service }
    }
}
