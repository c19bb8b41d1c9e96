#![forbid(unsafe_code)]

//! Responsive row-flow layout.
//!
//! This crate lays out the children of a container in rows, left to right,
//! wrapping when a row is full or a child asks for a forced break. Each
//! child's column width and offset are percentages of the container's content
//! width, chosen per [`Breakpoint`]:
//!
//! - [`Breakpoints`] - four strictly increasing width thresholds (five buckets)
//! - [`PercentageTable`] - per-bucket percentages for width and offset
//! - [`BreakFlagTable`] - per-bucket forced row breaks
//! - [`ChildLayoutSpec`] / [`ChildSpecs`] - the per-child tables
//! - [`FlowLayout`] - the row-flow engine (placement and measurement)
//! - [`GridPanel`] - a container wrapper that re-lays out on every change
//! - [`notation`] - textual list notation for tables and breakpoints
//!
//! # Example
//!
//! ```ignore
//! use gridflow_layout::{FlowLayout, PercentageTable};
//!
//! let mut flow = FlowLayout::new();
//! flow.set_column_width(sidebar_id, PercentageTable::new(100.0, 100.0, 25.0, 25.0, 20.0));
//! flow.set_column_width(content_id, PercentageTable::new(100.0, 100.0, 75.0, 75.0, 80.0));
//!
//! let grew = flow.layout(&mut container);
//! ```

pub mod break_flags;
pub mod child_spec;
pub mod flow;
pub mod host;
pub mod notation;
pub mod panel;
pub mod percentage;

pub use break_flags::BreakFlagTable;
pub use child_spec::{ChildLayoutSpec, ChildSpecs};
pub use flow::{ChildPlacement, FlowLayout, FlowMode, FlowOutcome};
pub use gridflow_core::geometry::{Point, Rect, Sides, Size};
pub use host::{LayoutChild, LayoutContainer};
pub use notation::{ListFormat, ListItem, ListNotation, ParseListError};
pub use panel::GridPanel;
pub use percentage::PercentageTable;

/// Responsive breakpoint buckets for container widths.
///
/// Ordered from smallest to largest. Each variant covers the widths below its
/// own threshold in [`Breakpoints`] and at or above the previous one.
///
/// | Breakpoint | Bootstrap widths | Material widths |
/// |-----------|------------------|-----------------|
/// | `Xs`      | < 576            | < 600           |
/// | `Sm`      | 576–767          | 600–967         |
/// | `Md`      | 768–991          | 968–1279        |
/// | `Lg`      | 992–1199         | 1280–1919       |
/// | `Xl`      | 1200+            | 1920+           |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Breakpoint {
    /// Extra small: narrowest bucket.
    Xs,
    /// Small.
    Sm,
    /// Medium.
    Md,
    /// Large.
    Lg,
    /// Extra large: everything at or above the largest threshold.
    Xl,
}

impl Breakpoint {
    /// All breakpoints in ascending order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// Ordinal index (0–4).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Breakpoint::Xs => 0,
            Breakpoint::Sm => 1,
            Breakpoint::Md => 2,
            Breakpoint::Lg => 3,
            Breakpoint::Xl => 4,
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Field name used by the list notation and designer tooling.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "ExtraSmall",
            Breakpoint::Sm => "Small",
            Breakpoint::Md => "Medium",
            Breakpoint::Lg => "Large",
            Breakpoint::Xl => "ExtraLarge",
        }
    }
}

impl std::fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Breakpoint thresholds for responsive layouts.
///
/// Each threshold is the exclusive upper bound of its bucket: a width below
/// `xs` is [`Breakpoint::Xs`], a width below `sm` (and at least `xs`) is
/// [`Breakpoint::Sm`], and so on. Widths at or above `lg` are
/// [`Breakpoint::Xl`].
///
/// Thresholds are strictly increasing at all times. Every setter repairs the
/// ordering instead of rejecting the edit (see [`Breakpoints::set_lg`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawBreakpoints", into = "RawBreakpoints")
)]
pub struct Breakpoints {
    xs: i32,
    sm: i32,
    md: i32,
    lg: i32,
}

impl Breakpoints {
    /// Bootstrap-style thresholds: 576 / 768 / 992 / 1200.
    pub const BOOTSTRAP: Self = Self {
        xs: 576,
        sm: 768,
        md: 992,
        lg: 1200,
    };

    /// Material-style thresholds: 600 / 968 / 1280 / 1920.
    pub const MATERIAL: Self = Self {
        xs: 600,
        sm: 968,
        md: 1280,
        lg: 1920,
    };

    /// Largest value a threshold may hold; keeps the grow pass from overflowing.
    pub const MAX_THRESHOLD: i32 = i32::MAX - 4;

    /// Create breakpoints with explicit thresholds.
    ///
    /// Values are clamped to `0..=MAX_THRESHOLD` and then repaired into strict
    /// ascending order.
    pub fn new(xs: i32, sm: i32, md: i32, lg: i32) -> Self {
        let mut bp = Self {
            xs: clamp_threshold(xs),
            sm: clamp_threshold(sm),
            md: clamp_threshold(md),
            lg: clamp_threshold(lg),
        };
        bp.validate();
        bp
    }

    /// Upper bound of [`Breakpoint::Xs`].
    #[inline]
    pub const fn xs(self) -> i32 {
        self.xs
    }

    /// Upper bound of [`Breakpoint::Sm`].
    #[inline]
    pub const fn sm(self) -> i32 {
        self.sm
    }

    /// Upper bound of [`Breakpoint::Md`].
    #[inline]
    pub const fn md(self) -> i32 {
        self.md
    }

    /// Upper bound of [`Breakpoint::Lg`].
    #[inline]
    pub const fn lg(self) -> i32 {
        self.lg
    }

    /// Set the `xs` threshold and repair ordering.
    pub fn set_xs(&mut self, value: i32) {
        self.xs = clamp_threshold(value);
        self.validate();
    }

    /// Set the `sm` threshold and repair ordering.
    pub fn set_sm(&mut self, value: i32) {
        self.sm = clamp_threshold(value);
        self.validate();
    }

    /// Set the `md` threshold and repair ordering.
    pub fn set_md(&mut self, value: i32) {
        self.md = clamp_threshold(value);
        self.validate();
    }

    /// Set the `lg` threshold and repair ordering.
    ///
    /// Lowering `lg` below the smaller thresholds pulls them down with it:
    ///
    /// ```
    /// use gridflow_layout::Breakpoints;
    ///
    /// let mut bp = Breakpoints::BOOTSTRAP;
    /// bp.set_lg(500);
    /// assert_eq!((bp.xs(), bp.sm(), bp.md(), bp.lg()), (497, 498, 499, 500));
    /// ```
    pub fn set_lg(&mut self, value: i32) {
        self.lg = clamp_threshold(value);
        self.validate();
    }

    /// Upper bound of a bucket, `None` for the unbounded [`Breakpoint::Xl`].
    #[must_use]
    pub const fn threshold(self, bp: Breakpoint) -> Option<i32> {
        match bp {
            Breakpoint::Xs => Some(self.xs),
            Breakpoint::Sm => Some(self.sm),
            Breakpoint::Md => Some(self.md),
            Breakpoint::Lg => Some(self.lg),
            Breakpoint::Xl => None,
        }
    }

    /// All bounded thresholds as `(Breakpoint, upper_bound)` pairs.
    #[must_use]
    pub const fn thresholds(self) -> [(Breakpoint, i32); 4] {
        [
            (Breakpoint::Xs, self.xs),
            (Breakpoint::Sm, self.sm),
            (Breakpoint::Md, self.md),
            (Breakpoint::Lg, self.lg),
        ]
    }

    /// Classify a width into a breakpoint bucket.
    ///
    /// Comparison is strict: a width equal to a threshold belongs to the next
    /// bucket up.
    #[inline]
    pub const fn classify_width(self, width: i32) -> Breakpoint {
        if width < self.xs {
            Breakpoint::Xs
        } else if width < self.sm {
            Breakpoint::Sm
        } else if width < self.md {
            Breakpoint::Md
        } else if width < self.lg {
            Breakpoint::Lg
        } else {
            Breakpoint::Xl
        }
    }

    /// Pixel length for `width` from the table entry of its bucket.
    #[inline]
    pub fn resolve(self, width: i32, table: &PercentageTable) -> f32 {
        table.pixels(width, self.classify_width(width))
    }

    /// Forced-break flag for `width` from the table entry of its bucket.
    #[inline]
    pub fn resolve_break(self, width: i32, flags: &BreakFlagTable) -> bool {
        flags.get(self.classify_width(width))
    }

    // Shrink first so a lowered upper threshold drags the lower ones down;
    // the grow pass then guarantees strict ordering when shrinking could not.
    // The `> 3`/`> 2`/`> 1` guards keep thresholds from collapsing below zero.
    fn validate(&mut self) {
        if self.lg > 3 && self.lg <= self.md {
            self.md = self.lg - 1;
        }
        if self.md > 2 && self.md <= self.sm {
            self.sm = self.md - 1;
        }
        if self.sm > 1 && self.sm <= self.xs {
            self.xs = self.sm - 1;
        }

        if self.xs >= self.sm {
            self.sm = self.xs + 1;
        }
        if self.sm >= self.md {
            self.md = self.sm + 1;
        }
        if self.md >= self.lg {
            self.lg = self.md + 1;
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::BOOTSTRAP
    }
}

#[inline]
fn clamp_threshold(value: i32) -> i32 {
    value.clamp(0, Breakpoints::MAX_THRESHOLD)
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawBreakpoints {
    xs: i32,
    sm: i32,
    md: i32,
    lg: i32,
}

#[cfg(feature = "serde")]
impl From<RawBreakpoints> for Breakpoints {
    fn from(raw: RawBreakpoints) -> Self {
        Self::new(raw.xs, raw.sm, raw.md, raw.lg)
    }
}

#[cfg(feature = "serde")]
impl From<Breakpoints> for RawBreakpoints {
    fn from(bp: Breakpoints) -> Self {
        Self {
            xs: bp.xs,
            sm: bp.sm,
            md: bp.md,
            lg: bp.lg,
        }
    }
}
