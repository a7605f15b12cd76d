use std::sync::Arc;

use crate::{
    foundation::time::TimeSpan,
    resource::model::{MediaKind, Resource, ResourceId},
};

/// Identity of the [`crate::CommandContext`] that issued a receipt.
///
/// Each context gets a fresh id from a process-wide counter, so receipts from
/// one context can never resolve against another.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ContextId(pub(crate) u64);

/// An opaque, copyable handle identifying a registered resource.
///
/// A receipt carries the issuing context, the resource's hashed identity, and
/// its insertion slot in the pool — but no reference to the resource itself.
/// It is safe to copy, store, and pass across chain boundaries without
/// extending the resource's lifetime. A receipt is meaningful only relative
/// to the context that issued it; resolving it elsewhere fails with
/// [`crate::GraphError::UnknownReceipt`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Receipt {
    pub(crate) context: ContextId,
    pub(crate) resource: ResourceId,
    pub(crate) slot: usize,
}

impl Receipt {
    /// Hashed identity of the resource this receipt refers to.
    pub fn resource_id(self) -> ResourceId {
        self.resource
    }

    /// Insertion position of the resource in the issuing context's pool.
    pub fn slot(self) -> usize {
        self.slot
    }
}

/// A resource resolved from a receipt, scoped to one setup cycle.
///
/// Created only by [`crate::CommandContext::resolve`]; owned by the filter
/// that requested resolution, and replaced wholesale on re-setup.
#[derive(Clone, Debug)]
pub struct BoundResource {
    pub(crate) resource: Arc<Resource>,
    pub(crate) receipt: Receipt,
}

impl BoundResource {
    /// The resolved resource.
    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    /// The receipt this binding was resolved from.
    pub fn receipt(&self) -> Receipt {
        self.receipt
    }

    /// Identity of the resolved resource.
    pub fn id(&self) -> ResourceId {
        self.resource.id()
    }

    /// Capability tag of the resolved resource.
    pub fn kind(&self) -> MediaKind {
        self.resource.kind()
    }

    /// Known duration of the resolved resource.
    pub fn length(&self) -> TimeSpan {
        self.resource.length()
    }
}
