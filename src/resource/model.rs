use crate::{
    foundation::error::{GraphError, GraphResult},
    foundation::math::Fnv1a64,
    foundation::time::TimeSpan,
};

/// Capability tag describing the kind of media a resource provides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MediaKind {
    /// A video stream (possibly with audio).
    Video,
    /// An audio-only stream.
    Audio,
    /// A still image.
    Image,
}

/// Stable hashed identity of a [`Resource`], derived from its name.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ResourceId(u64);

impl ResourceId {
    /// Derive the identity for a resource name.
    pub fn from_name(name: &str) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(name.as_bytes());
        Self(h.finish())
    }

    /// Access the raw 64-bit identity value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// An immutable description of a media input: identity, capability tag, and
/// known duration.
///
/// Resources are owned by the [`crate::CommandContext`] pool once registered;
/// the engine never probes media itself, so the duration is whatever the
/// caller discovered out of band.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Resource {
    name: String,
    id: ResourceId,
    kind: MediaKind,
    length: TimeSpan,
}

impl Resource {
    /// Construct a resource, rejecting an empty name.
    ///
    /// A negative or non-finite duration is already unrepresentable as a
    /// [`TimeSpan`], so `length` needs no further validation here.
    pub fn new(name: impl Into<String>, kind: MediaKind, length: TimeSpan) -> GraphResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::validation("resource name must not be empty"));
        }
        let id = ResourceId::from_name(&name);
        Ok(Self {
            name,
            id,
            kind,
            length,
        })
    }

    /// User-supplied resource name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hashed identity derived from the name.
    pub fn id(&self) -> ResourceId {
        self.id
    }

    /// Capability tag.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Known duration of the media.
    pub fn length(&self) -> TimeSpan {
        self.length
    }
}
