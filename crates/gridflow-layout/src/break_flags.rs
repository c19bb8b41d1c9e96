#![forbid(unsafe_code)]

//! Per-breakpoint forced row breaks.

use crate::Breakpoint;

/// Whether a child starts a new row, per [`Breakpoint`].
///
/// A set flag wraps the child onto a fresh row when the container is in that
/// bucket, even if the current row still has room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BreakFlagTable {
    pub xs: bool,
    pub sm: bool,
    pub md: bool,
    pub lg: bool,
    pub xl: bool,
}

impl BreakFlagTable {
    /// No forced breaks.
    pub const NONE: Self = Self::new(false, false, false, false, false);

    /// Break in every bucket.
    pub const ALWAYS: Self = Self::new(true, true, true, true, true);

    /// Create a table from one flag per bucket, smallest first.
    pub const fn new(xs: bool, sm: bool, md: bool, lg: bool, xl: bool) -> Self {
        Self { xs, sm, md, lg, xl }
    }

    /// Break only in the given bucket.
    pub fn only(bp: Breakpoint) -> Self {
        let mut flags = Self::NONE;
        flags.set(bp, true);
        flags
    }

    /// Flag for a bucket.
    #[inline]
    pub const fn get(&self, bp: Breakpoint) -> bool {
        match bp {
            Breakpoint::Xs => self.xs,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
        }
    }

    /// Set the flag for a bucket.
    pub fn set(&mut self, bp: Breakpoint, value: bool) {
        let slot = match bp {
            Breakpoint::Xs => &mut self.xs,
            Breakpoint::Sm => &mut self.sm,
            Breakpoint::Md => &mut self.md,
            Breakpoint::Lg => &mut self.lg,
            Breakpoint::Xl => &mut self.xl,
        };
        *slot = value;
    }

    /// All five flags, smallest bucket first.
    #[inline]
    pub const fn values(&self) -> [bool; 5] {
        [self.xs, self.sm, self.md, self.lg, self.xl]
    }

    /// True if any bucket forces a break.
    #[inline]
    pub const fn any(&self) -> bool {
        self.xs || self.sm || self.md || self.lg || self.xl
    }
}
