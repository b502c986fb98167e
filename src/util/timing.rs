use std::time::{Duration, Instant};

use serde_derive::Serialize;


/// One timed bench phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseMetric {
    pub label: String,
    pub elements: usize,
    pub len_after: usize,
    #[serde(serialize_with = "ser_secs")]
    pub elapsed: Duration,
}

impl PhaseMetric {
    pub fn secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn ser_secs<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

/// Runs `func` once and returns its output with the elapsed wall-clock time.
pub fn elapsed_of<F, T>(func: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start_time = Instant::now();
    let r = func();
    (r, start_time.elapsed())
}

/// Times `func` and prints `"<label> took <seconds> seconds"` to stdout.
pub fn measure_time<F, T>(label: &str, func: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let (r, elapsed) = elapsed_of(func);
    println!("{} took {} seconds", label, elapsed.as_secs_f64());
    (r, elapsed)
}


#[cfg(test)]
mod test {
    use std::time::Duration;
    use super::{elapsed_of, measure_time, PhaseMetric};

    #[test]
    fn test_elapsed_covers_sleep() {
        let (r, d) = elapsed_of(|| {
            std::thread::sleep(Duration::from_millis(20));
            7
        });
        assert_eq!(r, 7);
        assert!(d >= Duration::from_millis(20));
    }

    #[test]
    fn test_measure_time_passes_output() {
        let mut v = Vec::new();
        let (n, _d) = measure_time("Vec addition", || {
            v.extend(0..10);
            v.len()
        });
        assert_eq!(n, 10);
    }

    #[test]
    fn test_phase_metric_json() {
        let m = PhaseMetric {
            label: "Queue addition".into(),
            elements: 3,
            len_after: 3,
            elapsed: Duration::from_millis(1500),
        };
        assert_eq!(m.secs(), 1.5);
        let s = serde_json::to_string(&m).unwrap();
        assert_eq!(s, r#"{"label":"Queue addition","elements":3,"len_after":3,"elapsed":1.5}"#);
    }
}
