use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::product::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tracing::{Instrument, error, info, info_span};

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service", "ProductQueryService");

        Self { query, metrics }
    }

    fn start_tracing(&self, operation_name: &'static str) -> TracingContext {
        info!("Starting operation: {operation_name}");
        TracingContext::start(info_span!("product_query", operation = operation_name))
    }

    fn complete_tracing_success(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(ctx, method, true, message);
    }

    fn complete_tracing_error(&self, ctx: &TracingContext, method: Method, message: &str) {
        self.complete_tracing_internal(ctx, method, false, message);
    }

    fn complete_tracing_internal(
        &self,
        ctx: &TracingContext,
        method: Method,
        is_success: bool,
        message: &str,
    ) {
        let elapsed = ctx.elapsed_secs();
        let _entered = ctx.span.enter();

        if is_success {
            info!(duration_secs = elapsed, "✅ Operation completed successfully: {message}");
            self.metrics.record(method, StatusUtils::Success, elapsed);
        } else {
            error!(duration_secs = elapsed, "❌ Operation failed: {message}");
            self.metrics.record(method, StatusUtils::Error, elapsed);
        }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let tracing_ctx = self.start_tracing("product_find_all");

        let products = match self
            .query
            .find_all()
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(products) => {
                self.complete_tracing_success(&tracing_ctx, Method::Get, "Products retrieved");
                products
            }
            Err(e) => {
                let msg = format!("Failed to fetch products: {e}");
                self.complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                return Err(ServiceError::Repo(e));
            }
        };

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<ProductResponse, ServiceError> {
        info!("🆔 Finding product by ID: {id}");

        let tracing_ctx = self.start_tracing("product_find_by_id");

        match self
            .query
            .find_by_id(id)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(Some(product)) => {
                self.complete_tracing_success(&tracing_ctx, Method::Get, "Product retrieved");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                let msg = format!("Product not found with ID: {id}");
                self.complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                let msg = format!("Database error while finding product ID {id}: {e}");
                self.complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<ProductResponse, ServiceError> {
        info!("🔤 Finding product by name: {name}");

        let tracing_ctx = self.start_tracing("product_find_by_name");

        match self
            .query
            .find_by_name(name)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(Some(product)) => {
                self.complete_tracing_success(&tracing_ctx, Method::Get, "Product retrieved");
                Ok(ProductResponse::from(product))
            }
            Ok(None) => {
                let msg = format!("Product not found with name: {name}");
                self.complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::NotFound(msg))
            }
            Err(e) => {
                let msg = format!("Database error while finding product '{name}': {e}");
                self.complete_tracing_error(&tracing_ctx, Method::Get, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
