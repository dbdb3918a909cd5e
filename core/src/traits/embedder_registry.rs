use std::sync::Arc;

use super::embedder::{Embedder, EmbedderBackendKind};

/// Resolves a backend kind plus a profile or model name to a ready
/// `Embedder` (spec §4.4 "Model-config pinning"). Mirrors
/// `original_source`'s `get_embedder(backend=..., profile=...)` factory:
/// for `Fastembed`, `selector` is a profile name (`"code"`, `"fast"`, ...);
/// for `Litellm`, it's the concrete model name. Deployment-specific — core
/// only consumes it.
pub trait EmbedderRegistry: Send + Sync {
    fn resolve(&self, backend: EmbedderBackendKind, selector: &str) -> anyhow::Result<Arc<dyn Embedder>>;
}
