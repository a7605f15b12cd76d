use crate::foundation::error::{GraphError, GraphResult};

/// A non-negative, finite span of media time in seconds.
///
/// `TimeSpan` is the unit of all duration arithmetic in the engine: resource
/// lengths, trim windows, and derived filter output lengths. The inner value
/// is validated at construction, so arithmetic over existing spans can never
/// produce a negative or non-finite result.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct TimeSpan {
    secs: f64,
}

impl<'de> serde::Deserialize<'de> for TimeSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        TimeSpan::from_secs(secs).map_err(serde::de::Error::custom)
    }
}

impl TimeSpan {
    /// The zero-length span.
    pub const ZERO: Self = Self { secs: 0.0 };

    /// Construct a span from seconds, rejecting negative and non-finite input.
    pub fn from_secs(secs: f64) -> GraphResult<Self> {
        if !secs.is_finite() {
            return Err(GraphError::validation("TimeSpan must be finite"));
        }
        if secs < 0.0 {
            return Err(GraphError::validation("TimeSpan must be non-negative"));
        }
        Ok(Self { secs })
    }

    /// Span value in seconds.
    pub fn as_secs(self) -> f64 {
        self.secs
    }

    /// True when the span is exactly zero.
    pub fn is_zero(self) -> bool {
        self.secs == 0.0
    }

    /// Difference of two spans, clamped at zero.
    pub fn saturating_sub(self, other: Self) -> Self {
        Self {
            secs: (self.secs - other.secs).max(0.0),
        }
    }

    /// The smaller of two spans.
    pub fn min(self, other: Self) -> Self {
        if other.secs < self.secs { other } else { self }
    }

    /// The larger of two spans.
    pub fn max(self, other: Self) -> Self {
        if other.secs > self.secs { other } else { self }
    }

    /// Shared duration-aggregation policy: the sum of `spans` if it is
    /// strictly positive, otherwise `None`.
    ///
    /// A zero aggregate carries no usable timing information, so the absence
    /// of a value is propagated instead of a degenerate zero-length result.
    pub fn positive_sum(spans: impl IntoIterator<Item = TimeSpan>) -> Option<TimeSpan> {
        let total: f64 = spans.into_iter().map(|s| s.secs).sum();
        (total > 0.0).then_some(Self { secs: total })
    }
}

impl std::ops::Add for TimeSpan {
    type Output = TimeSpan;

    fn add(self, rhs: Self) -> Self {
        Self {
            secs: self.secs + rhs.secs,
        }
    }
}

impl std::ops::AddAssign for TimeSpan {
    fn add_assign(&mut self, rhs: Self) {
        self.secs += rhs.secs;
    }
}

impl std::iter::Sum for TimeSpan {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, s| acc + s)
    }
}
