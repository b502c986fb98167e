use std::{sync::atomic::{Ordering, AtomicI64}, ops::Deref};

use array_init::array_init;
use lazy_static::lazy_static;

use super::human::ToHuman;

const ORDERING: Ordering = Ordering::Relaxed;

pub const NAMES: [&str; 4] = ["add", "sub", "mul", "div"];
pub const ADD: usize = 0;
pub const SUB: usize = 1;
pub const MUL: usize = 2;
pub const DIV: usize = 3;

lazy_static! {
    static ref GLOBAL: OpCounter = OpCounter::default();
}

#[derive(Debug)]
pub struct AtomicI64Array<const N: usize>([AtomicI64; N]);

impl<const N: usize> Default for AtomicI64Array<N> {
    fn default() -> Self {
        Self(array_init(|_i| AtomicI64::new(0)))
    }
}

impl <const N: usize> Deref for  AtomicI64Array<N> {
    type Target = [AtomicI64; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> AtomicI64Array<N> {
    pub fn snapshot(&self) -> [i64; N] {
        array_init(|i| self[i].load(ORDERING))
    }
}


/// Counts arithmetic operations performed on fractions, one slot per kind.
///
/// Counters only grow. Pass one explicitly to the arithmetic methods;
/// [`OpCounter::global`] is the process-wide instance used by `fbench`.
#[derive(Debug, Default)]
pub struct OpCounter {
    atomic: AtomicI64Array<4>,
}

impl OpCounter {
    pub fn global() -> &'static OpCounter {
        &GLOBAL
    }

    /// `n` is one of [`ADD`], [`SUB`], [`MUL`], [`DIV`]; panics on any other index.
    pub fn inc(&self, n: usize) {
        self.atomic[n].fetch_add(1, ORDERING);
    }

    /// Same index rules as [`OpCounter::inc`].
    pub fn get(&self, n: usize) -> i64 {
        self.atomic[n].load(ORDERING)
    }

    pub fn total(&self) -> i64 {
        self.snapshot().iter().sum()
    }

    pub fn snapshot(&self) -> [i64; 4] {
        self.atomic.snapshot()
    }

    pub fn human(&self) -> OpCountHuman {
        OpCountHuman(self.snapshot())
    }
}

pub struct OpCountHuman([i64; 4]);

impl OpCountHuman {
    fn fmt_me(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total: i64 = self.0.iter().sum();
        f.write_fmt(format_args!("total {}", total.to_human()))?;
        for i in 0..NAMES.len() {
            f.write_fmt(format_args!(", {} {}", NAMES[i], self.0[i].to_human()))?;
        }
        Ok(())
    }
}

impl std::fmt::Display for OpCountHuman {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_me(f)
    }
}

impl std::fmt::Debug for OpCountHuman {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_me(f)
    }
}
