use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Elapsed machine time in T-cycles.
///
/// The CPU works in machine cycles of 4 T-cycles each, so every value produced
/// by the instruction tables is a multiple of 4. The only exception is a
/// hard-locked CPU, which reports `Cycles::ZERO` forever.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cycles(pub u32);

impl Cycles {
    pub const ZERO: Cycles = Cycles(0);
    /// A single machine cycle (4 T-cycles).
    pub const MCYCLE: Cycles = Cycles(4);

    /// Number of T-cycles.
    #[inline]
    pub const fn t(self) -> u32 {
        self.0
    }

    /// Number of whole machine cycles.
    #[inline]
    pub const fn mcycles(self) -> u32 {
        self.0 / 4
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Cycles {
    type Output = Cycles;

    #[inline]
    fn add(self, rhs: Cycles) -> Cycles {
        Cycles(self.0.wrapping_add(rhs.0))
    }
}

impl AddAssign for Cycles {
    #[inline]
    fn add_assign(&mut self, rhs: Cycles) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl Sum for Cycles {
    fn sum<I: Iterator<Item = Cycles>>(iter: I) -> Cycles {
        iter.fold(Cycles::ZERO, |acc, c| acc + c)
    }
}

impl From<Cycles> for u64 {
    fn from(cycles: Cycles) -> u64 {
        cycles.0 as u64
    }
}
