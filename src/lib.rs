//! Filtergraph is a declarative construction and resolution engine for media
//! filter graphs.
//!
//! Callers register media resources with a [`CommandContext`], obtaining
//! copyable [`Receipt`] handles; they assemble [`Filterchain`] pipelines of
//! typed filters referencing those receipts; and at setup time each filter
//! resolves its stage's receipts into [`BoundResource`] values, validates
//! arity, and computes a derived output length. The resolved graph exposes a
//! [`FilterContract`] per stage — operation name, ordered input identities,
//! derived length — which is the complete surface a downstream renderer needs
//! to emit the processing tool's textual syntax.
//!
//! # Lifecycle
//!
//! 1. **Register**: `Resource -> CommandContext::register -> Receipt`
//! 2. **Declare**: build `Filterchain`s of filters; no validation yet
//! 3. **Setup**: `Filterchain::setup` resolves receipts stage by stage,
//!    enforcing input-count bounds and propagating derived timing
//! 4. **Hand off**: `contracts()` describes the resolved graph to the
//!    (out-of-scope) renderer
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Indirection via receipts**: chains hold value-type handles, never live
//!   references, so graph declaration is decoupled from resource lifetime.
//! - **Two-phase filters**: declaration never fails on arity; setup either
//!   passes every validation and stores the full binding, or leaves the
//!   filter exactly as it was.
//! - **Single-threaded contexts**: one [`CommandContext`] per job; parallel
//!   jobs use separate contexts.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod filter;
mod foundation;
mod graph;
mod resource;

pub use command::context::CommandContext;
pub use filter::base::{Filter, FilterBase, FilterContract};
pub use filter::kinds::{Concat, Custom, Overlay, Scale, Trim, Volume};
pub use foundation::error::{GraphError, GraphResult};
pub use foundation::time::TimeSpan;
pub use graph::chain::Filterchain;
pub use graph::model::Filtergraph;
pub use resource::model::{MediaKind, Resource, ResourceId};
pub use resource::receipt::{BoundResource, ContextId, Receipt};
