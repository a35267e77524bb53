use std::time::Duration;

/// Outcome of one parallel integration run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    pi: f64,
    elapsed: Duration,
    num_threads: usize,
    total_intervals: u64
}

impl PiEstimate {
    pub fn new(pi: f64, elapsed: Duration, num_threads: usize, total_intervals: u64) -> PiEstimate {
        PiEstimate { pi, elapsed, num_threads, total_intervals }
    }

    pub fn pi(&self) -> f64 {
        self.pi
    }

    /// Wall-clock time from worker launch to the end of aggregation.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    pub fn total_intervals(&self) -> u64 {
        self.total_intervals
    }

    /// Absolute distance from `std::f64::consts::PI`.
    pub fn error(&self) -> f64 {
        (self.pi - std::f64::consts::PI).abs()
    }
}
