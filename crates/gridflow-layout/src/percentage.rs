#![forbid(unsafe_code)]

//! Per-breakpoint percentage tables.

use std::ops::Index;

use crate::Breakpoint;

/// Two values closer than this are considered equal for the uniform state.
const UNIFORM_TOLERANCE: f32 = 1e-4;

/// Five percentages, one per [`Breakpoint`], each clamped to `[0, 100]`.
///
/// A table is *uniform* when it was built from one value (or from five values
/// within `1e-4` of each other). Uniform tables collapse to a single number in
/// serialized form. Setting a single bucket clears the flag; [`set_all`]
/// sets it again.
///
/// [`set_all`]: PercentageTable::set_all
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "PercentageRepr", into = "PercentageRepr")
)]
pub struct PercentageTable {
    values: [f32; 5],
    uniform: bool,
}

impl PercentageTable {
    /// Lowest allowed percentage.
    pub const MIN: f32 = 0.0;
    /// Highest allowed percentage.
    pub const MAX: f32 = 100.0;

    /// Create a table from one value per bucket, smallest first.
    pub fn new(xs: f32, sm: f32, md: f32, lg: f32, xl: f32) -> Self {
        Self::from_values([xs, sm, md, lg, xl])
    }

    /// Create a table from an array indexed by [`Breakpoint::index`].
    pub fn from_values(values: [f32; 5]) -> Self {
        let values = values.map(clamp_percentage);
        Self {
            uniform: is_uniform(&values),
            values,
        }
    }

    /// Create a uniform table with the same value for every bucket.
    pub fn all(value: f32) -> Self {
        Self {
            values: [clamp_percentage(value); 5],
            uniform: true,
        }
    }

    /// Default column width: full width on `xs`, half width everywhere else.
    pub fn default_width() -> Self {
        Self::new(100.0, 50.0, 50.0, 50.0, 50.0)
    }

    /// Default column offset: zero everywhere.
    pub fn default_offset() -> Self {
        Self::all(0.0)
    }

    /// Percentage for a bucket.
    #[inline]
    pub const fn get(&self, bp: Breakpoint) -> f32 {
        self.values[bp.index()]
    }

    /// Set one bucket. Clears the uniform state.
    pub fn set(&mut self, bp: Breakpoint, value: f32) {
        self.values[bp.index()] = clamp_percentage(value);
        self.uniform = false;
    }

    /// The shared value of a uniform table.
    #[must_use]
    pub fn uniform_value(&self) -> Option<f32> {
        self.uniform.then_some(self.values[0])
    }

    /// Assign every bucket and mark the table uniform.
    pub fn set_all(&mut self, value: f32) {
        *self = Self::all(value);
    }

    /// Whether the table is in the uniform state.
    #[inline]
    pub const fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// All five values, smallest bucket first.
    #[inline]
    pub const fn values(&self) -> [f32; 5] {
        self.values
    }

    /// Pixel length of `width * percentage / 100` for one bucket.
    ///
    /// Sub-pixel precision is kept; callers truncate at final placement.
    #[inline]
    pub fn pixels(&self, width: i32, bp: Breakpoint) -> f32 {
        width as f32 * self.get(bp) / 100.0
    }
}

impl Index<Breakpoint> for PercentageTable {
    type Output = f32;

    fn index(&self, bp: Breakpoint) -> &f32 {
        &self.values[bp.index()]
    }
}

/// Clamp to `[MIN, MAX]`. NaN and negative zero become `0.0`.
fn clamp_percentage(value: f32) -> f32 {
    if value.is_nan() || value <= PercentageTable::MIN {
        PercentageTable::MIN
    } else {
        value.min(PercentageTable::MAX)
    }
}

fn is_uniform(values: &[f32; 5]) -> bool {
    let (min, max) = values
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    max - min <= UNIFORM_TOLERANCE
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum PercentageRepr {
    All(f32),
    PerBreakpoint {
        xs: f32,
        sm: f32,
        md: f32,
        lg: f32,
        xl: f32,
    },
}

#[cfg(feature = "serde")]
impl From<PercentageRepr> for PercentageTable {
    fn from(repr: PercentageRepr) -> Self {
        match repr {
            PercentageRepr::All(value) => Self::all(value),
            PercentageRepr::PerBreakpoint { xs, sm, md, lg, xl } => Self::new(xs, sm, md, lg, xl),
        }
    }
}

#[cfg(feature = "serde")]
impl From<PercentageTable> for PercentageRepr {
    fn from(table: PercentageTable) -> Self {
        match table.uniform_value() {
            Some(value) => Self::All(value),
            None => {
                let [xs, sm, md, lg, xl] = table.values;
                Self::PerBreakpoint { xs, sm, md, lg, xl }
            }
        }
    }
}
