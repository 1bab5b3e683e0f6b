use core::fmt;
use core::ops::{Add, Neg, Sub};

use crate::fast_div::div_mod_10;

/// Signed fixed-point number with 12 fractional bits.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fq12(pub i32);

impl Fq12 {
    pub const FRAC_BITS: u32 = 12;
    pub const SCALE: i32 = 1 << Self::FRAC_BITS;
    pub const FRAC_MASK: i32 = Self::SCALE - 1;
    pub const ZERO: Fq12 = Fq12(0);

    /// Largest integer part that still fits after shifting.
    pub const MAX_INT: i32 = i32::MAX >> Self::FRAC_BITS;

    pub const fn from_raw(raw: i32) -> Self {
        Fq12(raw)
    }

    pub const fn from_int(value: i32) -> Self {
        Fq12(value << Self::FRAC_BITS)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Truncates toward zero.
    pub const fn to_int(self) -> i32 {
        if self.0 < 0 {
            -((self.0.unsigned_abs() >> Self::FRAC_BITS) as i32)
        } else {
            self.0 >> Self::FRAC_BITS
        }
    }

    /// Fraction of the absolute value in 1/100000 steps, rounded down.
    pub fn decimals_e5(self) -> u32 {
        let frac = self.0.unsigned_abs() & Self::FRAC_MASK as u32;
        (frac * 100_000) >> Self::FRAC_BITS
    }

    pub fn checked_add(self, rhs: Fq12) -> Option<Fq12> {
        self.0.checked_add(rhs.0).map(Fq12)
    }

    pub fn checked_sub(self, rhs: Fq12) -> Option<Fq12> {
        self.0.checked_sub(rhs.0).map(Fq12)
    }

    /// Wraps an angle in degrees into `[0, 360)`.
    pub fn wrap_degrees(self) -> Fq12 {
        let full_turn = Self::from_int(360).0;
        let mut raw = self.0;
        while raw < 0 {
            raw += full_turn;
        }
        while raw >= full_turn {
            raw -= full_turn;
        }
        Fq12(raw)
    }

    /// Builds a value from a decimal integer part and up to five fraction
    /// digits (`frac` holding `digits` decimal digits).
    pub(crate) fn from_decimal(negative: bool, int: u32, frac: u32, digits: u8) -> Option<Self> {
        if int > Self::MAX_INT as u32 {
            return None;
        }
        let mut scaled = frac << Self::FRAC_BITS;
        for _ in 0..digits {
            scaled = div_mod_10(scaled).0;
        }
        let raw = ((int as i32) << Self::FRAC_BITS).checked_add(scaled as i32)?;
        Some(Fq12(if negative { -raw } else { raw }))
    }
}

impl Add for Fq12 {
    type Output = Fq12;

    fn add(self, rhs: Fq12) -> Fq12 {
        Fq12(self.0 + rhs.0)
    }
}

impl Sub for Fq12 {
    type Output = Fq12;

    fn sub(self, rhs: Fq12) -> Fq12 {
        Fq12(self.0 - rhs.0)
    }
}

impl Neg for Fq12 {
    type Output = Fq12;

    fn neg(self) -> Fq12 {
        Fq12(-self.0)
    }
}

/// Renders as `[-]int.ddddd`, five decimals, integer math only.
impl fmt::Display for Fq12 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let int = self.0.unsigned_abs() >> Self::FRAC_BITS;
        write!(f, "{}{}.{:05}", sign, int, self.decimals_e5())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Fq12 {
    fn format(&self, fmt: defmt::Formatter) {
        let sign = if self.0 < 0 { "-" } else { "" };
        let int = self.0.unsigned_abs() >> Self::FRAC_BITS;
        defmt::write!(fmt, "{=str}{=u32}.{=u32:05}", sign, int, self.decimals_e5())
    }
}
