use std::{collections::{VecDeque, HashMap}, hint::black_box};

use anyhow::{Result, Context};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde_derive::Serialize;
use tracing::{info, debug};

use crate::{fraction::Fraction, util::{human::ToHuman, timing::{measure_time, PhaseMetric}}};

pub const DEFAULT_NUM: usize = 100_000;

pub const QUEUE_ADD: &str = "Queue addition";
pub const QUEUE_REMOVE: &str = "Queue removal";
pub const MAP_ADD: &str = "Map addition";
pub const MAP_SEARCH: &str = "Map search";
pub const MAP_REMOVE: &str = "Map removal";


#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub num: usize,
    pub seed: u64,
}

impl BenchConfig {
    pub fn new(num: usize, seed: u64) -> Self {
        Self { num, seed }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub seed: u64,
    pub num: usize,
    pub phases: Vec<PhaseMetric>,
}

impl BenchReport {
    pub fn phase(&self, label: &str) -> Option<&PhaseMetric> {
        self.phases.iter().find(|m| m.label == label)
    }
}

/// Random fractions with numerator in `[0,100)` and denominator in `[1,100)`.
pub struct FractionSource {
    rng: StdRng,
}

impl FractionSource {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn next_fraction(&mut self) -> Fraction {
        let numer = self.rng.gen_range(0..100);
        let denom = self.rng.gen_range(1..100);
        Fraction::new(numer, denom)
    }
}

pub fn run(cfg: &BenchConfig) -> Result<BenchReport> {
    // checked before the queue phase allocates
    i32::try_from(cfg.num).with_context(|| format!("num [{}] exceeds map key range", cfg.num))?;

    info!("bench fractions: num {}, seed {}", cfg.num.to_human(), cfg.seed);

    let mut source = FractionSource::with_seed(cfg.seed);
    let mut phases = Vec::with_capacity(5);
    bench_queue(cfg.num, &mut source, &mut phases);
    bench_map(cfg.num, &mut source, &mut phases)?;

    Ok(BenchReport {
        seed: cfg.seed,
        num: cfg.num,
        phases,
    })
}

pub fn bench_queue(num: usize, source: &mut FractionSource, phases: &mut Vec<PhaseMetric>) {
    let mut queue = VecDeque::new();

    let (pushed, elapsed) = measure_time(QUEUE_ADD, || {
        for _ in 0..num {
            queue.push_back(source.next_fraction());
        }
        num
    });
    phases.push(phase(QUEUE_ADD, pushed, queue.len(), elapsed));

    let (popped, elapsed) = measure_time(QUEUE_REMOVE, || {
        let mut popped = 0;
        while let Some(f) = queue.pop_front() {
            black_box(f);
            popped += 1;
        }
        popped
    });
    phases.push(phase(QUEUE_REMOVE, popped, queue.len(), elapsed));
}

/// Map keys are `i32`, so `num` above `i32::MAX` is rejected before any phase runs.
pub fn bench_map(num: usize, source: &mut FractionSource, phases: &mut Vec<PhaseMetric>) -> Result<()> {
    let n = i32::try_from(num).with_context(|| format!("num [{}] exceeds map key range", num))?;
    let keys = 0..n;
    let mut map: HashMap<i32, Fraction> = HashMap::new();

    let (inserted, elapsed) = measure_time(MAP_ADD, || {
        let mut inserted = 0;
        for k in keys.clone() {
            map.insert(k, source.next_fraction());
            inserted += 1;
        }
        inserted
    });
    phases.push(phase(MAP_ADD, inserted, map.len(), elapsed));

    let (hits, elapsed) = measure_time(MAP_SEARCH, || {
        keys.clone()
        .filter(|k| black_box(map.get(k)).is_some())
        .count()
    });
    phases.push(phase(MAP_SEARCH, hits, map.len(), elapsed));

    let (removed, elapsed) = measure_time(MAP_REMOVE, || {
        keys.clone()
        .filter(|k| map.remove(k).is_some())
        .count()
    });
    phases.push(phase(MAP_REMOVE, removed, map.len(), elapsed));
    Ok(())
}

fn phase(label: &str, elements: usize, len_after: usize, elapsed: std::time::Duration) -> PhaseMetric {
    debug!("[{}] elements {}, len {}, {:?}", label, elements.to_human(), len_after.to_human(), elapsed);
    PhaseMetric {
        label: label.to_string(),
        elements,
        len_after,
        elapsed,
    }
}
