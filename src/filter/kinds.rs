use crate::{
    filter::base::{Filter, FilterBase},
    foundation::error::{GraphError, GraphResult},
    foundation::time::TimeSpan,
    resource::receipt::BoundResource,
};

/// Joins up to [`Concat::MAX_INPUTS`] inputs end to end.
///
/// Uses the default summation policy: the concatenated output is as long as
/// its inputs put together.
#[derive(Debug)]
pub struct Concat {
    base: FilterBase,
}

impl Concat {
    /// Upper bound on concatenated inputs per stage.
    pub const MAX_INPUTS: usize = 4;

    /// Declare a concat filter.
    pub fn new() -> Self {
        Self {
            base: FilterBase::new_static("concat", Self::MAX_INPUTS),
        }
    }
}

impl Default for Concat {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for Concat {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }
}

/// Composites a second stream over a base stream.
#[derive(Debug)]
pub struct Overlay {
    base: FilterBase,
    /// Horizontal placement of the overlaid stream, in pixels.
    pub x: i32,
    /// Vertical placement of the overlaid stream, in pixels.
    pub y: i32,
}

impl Overlay {
    /// Declare an overlay at the given placement.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            base: FilterBase::new_static("overlay", 2),
            x,
            y,
        }
    }
}

impl Filter for Overlay {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }

    /// Overlaying does not extend playback: the output runs as long as the
    /// longest input, not the sum.
    fn length_from_inputs(&self, inputs: &[BoundResource]) -> Option<TimeSpan> {
        let longest = inputs
            .iter()
            .map(|b| b.length())
            .fold(TimeSpan::ZERO, TimeSpan::max);
        (!longest.is_zero()).then_some(longest)
    }
}

/// Resizes a single stream to fixed output dimensions.
#[derive(Debug)]
pub struct Scale {
    base: FilterBase,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
}

impl Scale {
    /// Declare a scale filter, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> GraphResult<Self> {
        if width == 0 || height == 0 {
            return Err(GraphError::validation("scale dimensions must be positive"));
        }
        Ok(Self {
            base: FilterBase::new_static("scale", 1),
            width,
            height,
        })
    }
}

impl Filter for Scale {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }
}

/// Keeps only the `[start, end)` window of a single stream.
#[derive(Debug)]
pub struct Trim {
    base: FilterBase,
    start: TimeSpan,
    end: TimeSpan,
}

impl Trim {
    /// Declare a trim window, rejecting `start >= end`.
    pub fn new(start: TimeSpan, end: TimeSpan) -> GraphResult<Self> {
        if start >= end {
            return Err(GraphError::validation("trim start must be before end"));
        }
        Ok(Self {
            base: FilterBase::new_static("trim", 1),
            start,
            end,
        })
    }

    /// Start of the kept window.
    pub fn start(&self) -> TimeSpan {
        self.start
    }

    /// Exclusive end of the kept window.
    pub fn end(&self) -> TimeSpan {
        self.end
    }
}

impl Filter for Trim {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }

    /// The trimmed window replaces the naive sum, clamped so a window
    /// reaching past the input's end reports only what the input can supply.
    fn length_from_inputs(&self, inputs: &[BoundResource]) -> Option<TimeSpan> {
        let input = inputs.first()?;
        let end = self.end.min(input.length());
        let window = end.saturating_sub(self.start);
        (!window.is_zero()).then_some(window)
    }
}

/// Adjusts the gain of a single audio stream.
#[derive(Debug)]
pub struct Volume {
    base: FilterBase,
    /// Linear gain multiplier; `1.0` is unchanged.
    pub level: f64,
}

impl Volume {
    /// Declare a volume filter, rejecting a negative or non-finite level.
    pub fn new(level: f64) -> GraphResult<Self> {
        if !level.is_finite() || level < 0.0 {
            return Err(GraphError::validation(
                "volume level must be finite and non-negative",
            ));
        }
        Ok(Self {
            base: FilterBase::new_static("volume", 1),
            level,
        })
    }
}

impl Filter for Volume {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }
}

/// Escape hatch for operations without a dedicated kind: a caller-chosen
/// name, arity, and free-form parameter payload handed through to the
/// renderer untouched.
#[derive(Debug)]
pub struct Custom {
    base: FilterBase,
    /// Free-form renderer parameters.
    pub params: serde_json::Value,
}

impl Custom {
    /// Declare a custom filter with the given name and arity bound.
    pub fn new(
        name: impl Into<String>,
        max_inputs: usize,
        params: serde_json::Value,
    ) -> GraphResult<Self> {
        Ok(Self {
            base: FilterBase::new(name, max_inputs)?,
            params,
        })
    }
}

impl Filter for Custom {
    fn base(&self) -> &FilterBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut FilterBase {
        &mut self.base
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/kinds.rs"]
mod tests;
