use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    foundation::error::{GraphError, GraphResult},
    foundation::time::TimeSpan,
    resource::model::{MediaKind, Resource, ResourceId},
    resource::receipt::{BoundResource, ContextId, Receipt},
};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Owner of the resource pool and sole authority for issuing and resolving
/// receipts.
///
/// A context is created once per processing job; resources are registered
/// before any filterchain is set up, and the pool is torn down with the
/// context after all chains have been rendered. The context is deliberately
/// single-threaded: parallel jobs each use their own instance.
#[derive(Debug)]
pub struct CommandContext {
    id: ContextId,
    pool: Vec<Arc<Resource>>,
}

impl CommandContext {
    /// Create an empty context with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed)),
            pool: Vec::new(),
        }
    }

    /// Store `resource` in the pool and return a receipt encoding its
    /// identity and insertion position. Never fails for a well-formed
    /// resource.
    pub fn register(&mut self, resource: Resource) -> Receipt {
        let receipt = Receipt {
            context: self.id,
            resource: resource.id(),
            slot: self.pool.len(),
        };
        tracing::debug!(name = resource.name(), slot = receipt.slot, "registered resource");
        self.pool.push(Arc::new(resource));
        receipt
    }

    /// Mint a synthetic intermediate resource representing one filter stage's
    /// output and return its receipt.
    ///
    /// The stored name is suffixed with the insertion slot so repeated stages
    /// of the same operation stay distinguishable. An unknown length is
    /// recorded as a zero span, which downstream summation re-derives as
    /// "unknown".
    pub fn register_output(
        &mut self,
        name: &str,
        kind: MediaKind,
        length: Option<TimeSpan>,
    ) -> GraphResult<Receipt> {
        let synthetic = Resource::new(
            format!("{name}@{}", self.pool.len()),
            kind,
            length.unwrap_or(TimeSpan::ZERO),
        )?;
        Ok(self.register(synthetic))
    }

    /// Look up each receipt's resource, preserving input order.
    ///
    /// Fails with [`GraphError::UnknownReceipt`] when a receipt was issued by
    /// a different context, its slot is out of range, or the slot's identity
    /// no longer matches. The pool itself is never mutated by resolution.
    #[tracing::instrument(skip(self, receipts), fields(count = receipts.len()))]
    pub fn resolve(&self, receipts: &[Receipt]) -> GraphResult<Vec<BoundResource>> {
        receipts.iter().map(|&r| self.get(r)).collect()
    }

    /// Resolve a single receipt into a [`BoundResource`].
    pub fn get(&self, receipt: Receipt) -> GraphResult<BoundResource> {
        if receipt.context != self.id {
            return Err(GraphError::UnknownReceipt { receipt });
        }
        let resource = self
            .pool
            .get(receipt.slot)
            .filter(|r| r.id() == receipt.resource)
            .ok_or(GraphError::UnknownReceipt { receipt })?;
        Ok(BoundResource {
            resource: Arc::clone(resource),
            receipt,
        })
    }

    /// Identity of a registered resource without building a binding.
    pub fn resource_id(&self, receipt: Receipt) -> GraphResult<ResourceId> {
        self.get(receipt).map(|b| b.id())
    }

    /// Number of resources in the pool, synthetic outputs included.
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    /// True when no resource has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/context.rs"]
mod tests;
