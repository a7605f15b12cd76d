use crate::resource::receipt::Receipt;

/// Convenience result type used across the engine.
pub type GraphResult<T> = Result<T, GraphError>;

/// Top-level error taxonomy used by graph-construction APIs.
///
/// Every variant signals a misuse of the construction protocol by the caller,
/// not a transient condition: nothing here is retried, and each failure is
/// surfaced synchronously by the call that detects it.
#[derive(thiserror::Error, Debug)]
pub enum GraphError {
    /// Setup resolved zero input resources for a filter.
    #[error("filter '{filter}' resolved zero input resources")]
    EmptyInput {
        /// Operation name of the failing filter.
        filter: String,
    },

    /// Setup resolved more inputs than the filter's declared maximum.
    #[error("filter '{filter}' accepts at most {max_inputs} input(s), got {actual}")]
    ArityExceeded {
        /// Operation name of the failing filter.
        filter: String,
        /// Declared maximum input arity.
        max_inputs: usize,
        /// Number of resources actually resolved.
        actual: usize,
    },

    /// A receipt did not resolve within the given context: it was issued by a
    /// foreign context, or its target slot no longer matches.
    #[error("unknown receipt: {receipt:?} was not issued by this context")]
    UnknownReceipt {
        /// The offending receipt.
        receipt: Receipt,
    },

    /// A binding, length, or contract query ran before a successful setup.
    #[error("filter '{filter}' has not been set up")]
    NotSetUp {
        /// Operation name of the queried filter.
        filter: String,
    },

    /// Invalid user-provided construction data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GraphError {
    /// Build a [`GraphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GraphError::NotSetUp`] value.
    pub(crate) fn not_set_up(filter: impl Into<String>) -> Self {
        Self::NotSetUp {
            filter: filter.into(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
