use tokio::time::Instant;
use tracing::Span;

/// Span plus start time of one service operation.
pub struct TracingContext {
    pub span: Span,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(span: Span) -> Self {
        Self {
            span,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }
}
