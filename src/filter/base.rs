use crate::{
    command::context::CommandContext,
    foundation::error::{GraphError, GraphResult},
    foundation::time::TimeSpan,
    resource::model::{MediaKind, ResourceId},
    resource::receipt::{BoundResource, Receipt},
};

/// Shared storage and validation for every filter kind: the declared
/// operation name, the maximum input arity, and the bound resource list
/// populated by setup.
#[derive(Debug)]
pub struct FilterBase {
    name: String,
    max_inputs: usize,
    bound: Vec<BoundResource>,
    configured: bool,
}

impl FilterBase {
    /// Declare a filter base, rejecting a zero arity or an empty name.
    pub fn new(name: impl Into<String>, max_inputs: usize) -> GraphResult<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(GraphError::validation("filter name must not be empty"));
        }
        if max_inputs == 0 {
            return Err(GraphError::validation(
                "filter max_inputs must be at least 1",
            ));
        }
        Ok(Self {
            name,
            max_inputs,
            bound: Vec::new(),
            configured: false,
        })
    }

    /// Infallible constructor for built-in kinds with literal names and
    /// nonzero arity constants.
    pub(crate) fn new_static(name: &'static str, max_inputs: usize) -> Self {
        debug_assert!(!name.is_empty() && max_inputs >= 1);
        Self {
            name: name.to_string(),
            max_inputs,
            bound: Vec::new(),
            configured: false,
        }
    }

    /// Declared operation name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared maximum input arity.
    pub fn max_inputs(&self) -> usize {
        self.max_inputs
    }

    /// True once a setup call has completed successfully.
    pub fn is_configured(&self) -> bool {
        self.configured
    }

    fn bind(&mut self, bound: Vec<BoundResource>) {
        self.bound = bound;
        self.configured = true;
    }
}

/// The resolved outbound contract of one filter stage: everything the
/// downstream renderer needs to emit its textual syntax.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FilterContract {
    /// Operation name meaningful to the renderer.
    pub name: String,
    /// Ordered identities of the bound input resources.
    pub inputs: Vec<ResourceId>,
    /// Derived output length, when one could be estimated.
    pub length: Option<TimeSpan>,
}

/// Capability contract shared by every filter kind.
///
/// A filter has a two-phase lifecycle: it is declared unconfigured, then
/// [`Filter::setup`] resolves its stage's receipts, validates arity, and
/// stores the binding. Binding, length, and contract queries before a
/// successful setup fail with [`GraphError::NotSetUp`].
pub trait Filter {
    /// Shared storage for this filter.
    fn base(&self) -> &FilterBase;

    /// Mutable shared storage for this filter.
    fn base_mut(&mut self) -> &mut FilterBase;

    /// Declared operation name.
    fn name(&self) -> &str {
        self.base().name()
    }

    /// Declared maximum input arity.
    fn max_inputs(&self) -> usize {
        self.base().max_inputs()
    }

    /// Resolve `receipts` through `ctx`, validate arity, and store the bound
    /// list, replacing any prior binding.
    ///
    /// Validation runs before any mutation: on failure the previous binding
    /// (if any) is left untouched, so a filter is never observable in a torn
    /// state.
    fn setup(&mut self, ctx: &CommandContext, receipts: &[Receipt]) -> GraphResult<()> {
        let bound = ctx.resolve(receipts)?;
        if bound.is_empty() {
            return Err(GraphError::EmptyInput {
                filter: self.name().to_string(),
            });
        }
        if bound.len() > self.max_inputs() {
            return Err(GraphError::ArityExceeded {
                filter: self.name().to_string(),
                max_inputs: self.max_inputs(),
                actual: bound.len(),
            });
        }
        tracing::trace!(filter = self.name(), inputs = bound.len(), "filter bound");
        self.base_mut().bind(bound);
        Ok(())
    }

    /// The bound resource list stored by the last successful setup.
    fn bound(&self) -> GraphResult<&[BoundResource]> {
        if !self.base().is_configured() {
            return Err(GraphError::not_set_up(self.name()));
        }
        Ok(&self.base().bound)
    }

    /// Estimate the output length for a given input list.
    ///
    /// The default policy is the shared "positive sum or unknown" shape:
    /// the sum of the input durations when strictly positive, otherwise
    /// `None`. Kinds with non-additive semantics override this. Must stay a
    /// pure function of `inputs`.
    fn length_from_inputs(&self, inputs: &[BoundResource]) -> Option<TimeSpan> {
        TimeSpan::positive_sum(inputs.iter().map(|b| b.length()))
    }

    /// The length policy applied to the stored binding.
    fn derived_length(&self) -> GraphResult<Option<TimeSpan>> {
        Ok(self.length_from_inputs(self.bound()?))
    }

    /// Capability tag of this stage's synthetic output.
    ///
    /// Defaults to the first bound input's kind, which suits transforms and
    /// same-kind merges alike.
    fn output_kind(&self) -> GraphResult<MediaKind> {
        Ok(self.bound()?[0].kind())
    }

    /// The complete resolved contract of this stage.
    fn contract(&self) -> GraphResult<FilterContract> {
        let inputs = self.bound()?.iter().map(|b| b.id()).collect();
        Ok(FilterContract {
            name: self.name().to_string(),
            inputs,
            length: self.derived_length()?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/base.rs"]
mod tests;
