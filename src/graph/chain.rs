use crate::{
    command::context::CommandContext,
    filter::base::{Filter, FilterContract},
    foundation::error::{GraphError, GraphResult},
    resource::receipt::Receipt,
};

/// An ordered pipeline of filters forming one branch of the processing
/// graph, plus the receipts feeding the chain's first stage.
///
/// Chains are linear: the receipt list is the sole resource source for the
/// first filter, and each subsequent filter consumes the synthetic output of
/// the stage before it, reducing N resources toward one lineage.
pub struct Filterchain {
    receipts: Vec<Receipt>,
    filters: Vec<Box<dyn Filter>>,
    output: Option<Receipt>,
}

impl std::fmt::Debug for Filterchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filterchain")
            .field("receipts", &self.receipts)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .field("output", &self.output)
            .finish()
    }
}

impl Filterchain {
    /// Declare a chain fed by `receipts`.
    pub fn new(receipts: Vec<Receipt>) -> Self {
        Self {
            receipts,
            filters: Vec::new(),
            output: None,
        }
    }

    /// Add `filter` as the next pipeline stage.
    ///
    /// No arity checks happen here: a chain may be assembled incrementally
    /// before any resource is bound, so validation is deferred to
    /// [`Filterchain::setup`].
    pub fn append(&mut self, filter: Box<dyn Filter>) -> &mut Self {
        self.filters.push(filter);
        self
    }

    /// Receipts feeding the chain's first stage.
    pub fn receipts(&self) -> &[Receipt] {
        &self.receipts
    }

    /// Number of pipeline stages.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Filters in pipeline order.
    pub fn filters(&self) -> impl Iterator<Item = &dyn Filter> {
        self.filters.iter().map(|f| f.as_ref())
    }

    /// Receipt for the final stage's synthetic output, once the chain has
    /// been set up. Feeding this receipt to another chain connects the two.
    pub fn output(&self) -> Option<Receipt> {
        self.output
    }

    /// Resolve and bind every stage in order.
    ///
    /// Stage 0 consumes the chain's own receipts; each later stage consumes
    /// the synthetic receipt minted for the previous stage's output, so a
    /// stage can never be bound before the one feeding it. The first
    /// validation error aborts the walk, leaving later stages unset-up and
    /// the chain's output cleared — partial setup stays visible.
    #[tracing::instrument(skip(self, ctx), fields(stages = self.filters.len()))]
    pub fn setup(&mut self, ctx: &mut CommandContext) -> GraphResult<()> {
        self.output = None;
        let mut current = self.receipts.clone();
        for (stage, filter) in self.filters.iter_mut().enumerate() {
            filter.setup(ctx, &current)?;
            let out = ctx.register_output(
                filter.name(),
                filter.output_kind()?,
                filter.derived_length()?,
            )?;
            tracing::debug!(stage, filter = filter.name(), "stage bound");
            current = vec![out];
            self.output = Some(out);
        }
        Ok(())
    }

    /// Resolved contracts of all stages, in pipeline order.
    ///
    /// Fails with [`GraphError::NotSetUp`] if any stage has not completed
    /// setup.
    pub fn contracts(&self) -> GraphResult<Vec<FilterContract>> {
        self.filters.iter().map(|f| f.contract()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/chain.rs"]
mod tests;
