//! Boundary contract with the external stub engine
//!
//! The injection mechanism itself lives outside this crate. The stubber
//! command only records intent as a [`StubRequest`] and delegates to
//! whichever [`StubEngine`] implementation the caller supplies.

use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Intent of a single stub application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubRequest {
    /// Identifier of the target whose behavior is replaced
    pub target: String,

    /// Optional stub settings file consumed by the engine
    pub settings: Option<PathBuf>,
}

/// Trait for the external stub/injection engine
#[async_trait]
pub trait StubEngine: Send + Sync {
    /// Apply the requested stub to its target
    async fn apply(&self, request: &StubRequest) -> Result<()>;
}
