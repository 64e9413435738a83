//! Stubber command implementation

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::commands::Command;
use crate::error::{Error, Result};
use crate::stub::{StubEngine, StubRequest};

/// Applies a stub to a target through the external engine
///
/// The command only records intent; all injection mechanics live behind
/// the [`StubEngine`] handle supplied at construction.
pub struct StubberCommand {
    request: StubRequest,
    engine: Arc<dyn StubEngine>,
}

impl StubberCommand {
    /// Record a stub request; rejects an empty target identifier
    pub(crate) fn new(request: StubRequest, engine: Arc<dyn StubEngine>) -> Result<Self> {
        if request.target.is_empty() {
            return Err(Error::EmptyStubTarget);
        }
        Ok(Self { request, engine })
    }
}

#[async_trait]
impl Command for StubberCommand {
    async fn execute(&self) -> Result<()> {
        info!("applying stub to '{}'", self.request.target);
        self.engine.apply(&self.request).await
    }
}
