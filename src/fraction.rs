//! A plain `numer/denom` value type.
//!
//! Results are never reduced and `i32` overflow wraps. A zero denominator is
//! not rejected: [`Fraction::divide`] by a zero numerator yields one, use
//! [`Fraction::checked_divide`] to get an error instead.

use anyhow::{Result, bail};

use crate::util::op_count::{OpCounter, ADD, SUB, MUL, DIV};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    numer: i32,
    denom: i32,
}

impl Default for Fraction {
    fn default() -> Self {
        Self { numer: 5, denom: 9 }
    }
}

impl From<(i32, i32)> for Fraction {
    fn from(value: (i32, i32)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl Fraction {
    pub const fn new(numer: i32, denom: i32) -> Self {
        Self { numer, denom }
    }

    #[inline]
    pub const fn numer(&self) -> i32 {
        self.numer
    }

    #[inline]
    pub const fn denom(&self) -> i32 {
        self.denom
    }

    pub fn add(&self, other: &Self, ops: &OpCounter) -> Self {
        ops.inc(ADD);
        Self::new(
            self.numer.wrapping_mul(other.denom).wrapping_add(other.numer.wrapping_mul(self.denom)),
            self.denom.wrapping_mul(other.denom),
        )
    }

    pub fn subtract(&self, other: &Self, ops: &OpCounter) -> Self {
        ops.inc(SUB);
        Self::new(
            self.numer.wrapping_mul(other.denom).wrapping_sub(other.numer.wrapping_mul(self.denom)),
            self.denom.wrapping_mul(other.denom),
        )
    }

    pub fn multiply(&self, other: &Self, ops: &OpCounter) -> Self {
        ops.inc(MUL);
        Self::new(
            self.numer.wrapping_mul(other.numer),
            self.denom.wrapping_mul(other.denom),
        )
    }

    /// Multiplies by the reciprocal of `other`, zero numerator included.
    pub fn divide(&self, other: &Self, ops: &OpCounter) -> Self {
        ops.inc(DIV);
        Self::new(
            self.numer.wrapping_mul(other.denom),
            self.denom.wrapping_mul(other.numer),
        )
    }

    pub fn checked_divide(&self, other: &Self, ops: &OpCounter) -> Result<Self> {
        if other.numer == 0 {
            bail!("divide {} by {}: zero numerator", self, other);
        }
        Ok(self.divide(other, ops))
    }

    /// Cross-multiplied ordering, meaningful for positive denominators only.
    pub fn less_than(&self, other: &Self) -> bool {
        (self.numer as i64) * (other.denom as i64) < (self.denom as i64) * (other.numer as i64)
    }

    pub fn display(&self) {
        println!("{}", self);
    }

    pub fn display_operation_count(ops: &OpCounter) {
        println!("Number of fraction operations performed: {}", ops.total());
    }
}

impl std::fmt::Display for Fraction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.numer, self.denom))
    }
}


#[cfg(test)]
mod test {
    use super::Fraction;
    use crate::util::op_count::{OpCounter, ADD, SUB, MUL, DIV};

    #[test]
    fn test_default_is_five_ninths() {
        let f = Fraction::default();
        assert_eq!(f.numer(), 5);
        assert_eq!(f.denom(), 9);
    }

    #[test]
    fn test_copy_is_independent() {
        let a = Fraction::new(3, 4);
        let mut b = a;
        assert_eq!(a, b);
        b = b.multiply(&Fraction::new(2, 2), &OpCounter::default());
        assert_eq!(a, Fraction::new(3, 4));
        assert_eq!(b, Fraction::new(6, 8));
    }

    #[test]
    fn test_add_cross_multiplies() {
        let ops = OpCounter::default();
        for (a, b, c, d) in [(1, 2, 1, 3), (-7, 5, 4, 9), (0, 1, 0, 1), (3, -4, 5, 6)] {
            let r = Fraction::new(a, b).add(&Fraction::new(c, d), &ops);
            assert_eq!(r, Fraction::new(a * d + c * b, b * d));
        }
        assert_eq!(ops.get(ADD), 4);
    }

    #[test]
    fn test_subtract_unreduced() {
        let ops = OpCounter::default();
        let r = Fraction::new(1, 2).subtract(&Fraction::new(1, 4), &ops);
        assert_eq!(r, Fraction::new(2, 8));
        assert_eq!(ops.get(SUB), 1);
    }

    #[test]
    fn test_multiply_straight() {
        let ops = OpCounter::default();
        for (a, b, c, d) in [(2, 3, 5, 7), (-2, 3, 5, 7), (2, -3, -5, 7), (0, 4, 9, 2), (6, 1, 0, 5), (-1, -1, -1, -1)] {
            let r = Fraction::new(a, b).multiply(&Fraction::new(c, d), &ops);
            assert_eq!(r, Fraction::new(a * c, b * d));
        }
        assert_eq!(ops.get(MUL), 6);
    }

    #[test]
    fn test_divide_by_reciprocal() {
        let ops = OpCounter::default();
        let r = Fraction::new(2, 3).divide(&Fraction::new(5, 7), &ops);
        assert_eq!(r, Fraction::new(14, 15));
        assert_eq!(ops.get(DIV), 1);
    }

    #[test]
    fn test_divide_by_zero_numerator() {
        let ops = OpCounter::default();
        let zero = Fraction::new(0, 5);
        let r = Fraction::new(2, 3).divide(&zero, &ops);
        assert_eq!(r.denom(), 0);

        let err = Fraction::new(2, 3).checked_divide(&zero, &ops).unwrap_err();
        assert!(err.to_string().contains("zero numerator"));
        assert_eq!(ops.get(DIV), 1);

        let ok = Fraction::new(2, 3).checked_divide(&Fraction::new(1, 2), &ops).unwrap();
        assert_eq!(ok, Fraction::new(4, 3));
        assert_eq!(ops.get(DIV), 2);
    }

    #[test]
    fn test_overflow_wraps() {
        let ops = OpCounter::default();
        let big = Fraction::new(i32::MAX, 2);
        let r = big.multiply(&Fraction::new(2, 1), &ops);
        assert_eq!(r, Fraction::new(i32::MAX.wrapping_mul(2), 2));
    }

    #[test]
    fn test_less_than() {
        assert!(Fraction::new(1, 2).less_than(&Fraction::new(2, 3)));
        assert!(!Fraction::new(2, 3).less_than(&Fraction::new(1, 2)));
        assert!(!Fraction::new(2, 4).less_than(&Fraction::new(1, 2)));
        assert!(Fraction::new(i32::MAX, 3).less_than(&Fraction::new(i32::MAX, 2)));
    }

    #[test]
    fn test_counter_after_add_and_multiply() {
        let ops = OpCounter::default();
        let a = Fraction::new(1, 2);
        let b = Fraction::new(3, 4);
        let _ = a.add(&b, &ops);
        let _ = a.multiply(&b, &ops);
        assert_eq!(ops.total(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(-3, 8).to_string(), "-3/8");
        assert_eq!(Fraction::from((10, 21)).to_string(), "10/21");
    }
}
