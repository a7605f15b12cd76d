use crate::{
    command::context::CommandContext, filter::base::FilterContract,
    foundation::error::GraphResult, graph::chain::Filterchain,
};

/// The full processing graph: an ordered collection of filterchains sharing
/// one command context.
///
/// Branches of the graph have no ordering dependency on each other; they are
/// set up in insertion order purely for determinism.
#[derive(Debug, Default)]
pub struct Filtergraph {
    chains: Vec<Filterchain>,
}

impl Filtergraph {
    /// Declare an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `chain` as the next branch and return a handle to it.
    pub fn add(&mut self, chain: Filterchain) -> &mut Filterchain {
        self.chains.push(chain);
        let idx = self.chains.len() - 1;
        &mut self.chains[idx]
    }

    /// Branches in insertion order.
    pub fn chains(&self) -> &[Filterchain] {
        &self.chains
    }

    /// Number of branches.
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Set up every branch, propagating the first failure.
    ///
    /// A failure leaves the failing chain partially set up and later chains
    /// untouched; the caller is expected to abort construction and report
    /// which stage failed.
    #[tracing::instrument(skip(self, ctx), fields(chains = self.chains.len()))]
    pub fn setup(&mut self, ctx: &mut CommandContext) -> GraphResult<()> {
        for chain in &mut self.chains {
            chain.setup(ctx)?;
        }
        Ok(())
    }

    /// Resolved contracts of every stage across all branches, in setup order.
    pub fn contracts(&self) -> GraphResult<Vec<FilterContract>> {
        let mut all = Vec::new();
        for chain in &self.chains {
            all.extend(chain.contracts()?);
        }
        Ok(all)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/model.rs"]
mod tests;
