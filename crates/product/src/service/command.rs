use crate::{
    abstract_trait::product::{
        repository::{DynProductCommandRepository, DynProductQueryRepository},
        service::ProductCommandServiceTrait,
    },
    domain::{
        requests::product::{CreateProductRequest, SaveProduct, UpdateProductRequest},
        response::product::ProductResponse,
    },
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, Metrics, Status as StatusUtils, TracingContext},
};
use tracing::{Instrument, error, info, info_span};
use validator::{Validate, ValidationErrors};

#[derive(Clone)]
pub struct ProductCommandService {
    pub command: DynProductCommandRepository,
    pub query: DynProductQueryRepository,
    pub metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(
        command: DynProductCommandRepository,
        query: DynProductQueryRepository,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service", "ProductCommandService");

        Self {
            command,
            query,
            metrics,
        }
    }

    fn start_tracing(&self, operation_name: &'static str, product_id: Option<i64>) -> TracingContext {
        info!("Starting operation: {operation_name}");
        TracingContext::start(info_span!(
            "product_command",
            operation = operation_name,
            product.id = product_id
        ))
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

    async fn save(
        &self,
        tracing_ctx: &TracingContext,
        method: Method,
        product: &SaveProduct,
    ) -> Result<ProductResponse, ServiceError> {
        match self
            .command
            .save(product)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(saved) => {
                self.complete_tracing_success(tracing_ctx, method, "Product saved");
                Ok(ProductResponse::from(saved))
            }
            Err(e) => {
                let msg = format!("Failed to save product '{}': {e}", product.name);
                self.complete_tracing_error(tracing_ctx, method, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}

fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value"),
            })
        })
        .collect();
    messages.sort();
    messages
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product: {}", req.name);

        let tracing_ctx = self.start_tracing("create_product", req.id);

        // HTTP bodies are already checked by `SimpleValidatedJson`; this covers direct callers.
        if let Err(errors) = req.validate() {
            let messages = validation_messages(&errors);
            self.complete_tracing_error(&tracing_ctx, Method::Post, &messages.join("; "));
            return Err(ServiceError::Validation(messages));
        }

        self.save(&tracing_ctx, Method::Post, &SaveProduct::from(req))
            .await
    }

    async fn update_product(
        &self,
        id: i64,
        req: &UpdateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        info!("✏️ Updating product ID: {id}");

        let tracing_ctx = self.start_tracing("update_product", Some(id));

        if let Err(errors) = req.validate() {
            let messages = validation_messages(&errors);
            self.complete_tracing_error(&tracing_ctx, Method::Put, &messages.join("; "));
            return Err(ServiceError::Validation(messages));
        }

        match self
            .query
            .exists_by_id(id)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(true) => {}
            Ok(false) => {
                let msg = format!("Product not found with ID: {id}");
                self.complete_tracing_error(&tracing_ctx, Method::Put, &msg);
                return Err(ServiceError::NotFound(msg));
            }
            Err(e) => {
                let msg = format!("Failed to look up product ID {id}: {e}");
                self.complete_tracing_error(&tracing_ctx, Method::Put, &msg);
                return Err(ServiceError::Repo(e));
            }
        }

        self.save(&tracing_ctx, Method::Put, &req.to_save(id)).await
    }

    async fn delete_product(&self, id: i64) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID: {id}");

        let tracing_ctx = self.start_tracing("delete_product", Some(id));

        match self
            .command
            .delete_by_id(id)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(true) => {
                self.complete_tracing_success(&tracing_ctx, Method::Delete, "Product deleted");
                Ok(())
            }
            Ok(false) => {
                self.complete_tracing_success(
                    &tracing_ctx,
                    Method::Delete,
                    "Product absent, delete was a no-op",
                );
                Ok(())
            }
            Err(e) => {
                let msg = format!("Failed to delete product ID {id}: {e}");
                self.complete_tracing_error(&tracing_ctx, Method::Delete, &msg);
                Err(ServiceError::Repo(e))
            }
        }
    }
}
