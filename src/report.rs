use std::fmt;
use std::time::Duration;

use crate::parallel::piestimate::PiEstimate;

pub fn format_timing_line(num_threads: usize, elapsed: Duration) -> String {
    format!("Czas obliczen z {} watkami: {:.6} sekund.", num_threads, elapsed.as_secs_f64())
}

pub fn format_pi_line(pi: f64) -> String {
    format!("Przyblizona wartosc PI wynosi: {:.8}", pi)
}

/// Console summary of a run: the timing line followed by the estimate line,
/// each terminated by a newline.
pub struct PiReport<'a> {
    estimate: &'a PiEstimate
}

impl<'a> PiReport<'a> {
    pub fn new(estimate: &'a PiEstimate) -> PiReport<'a> {
        PiReport { estimate }
    }
}

impl fmt::Display for PiReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", format_timing_line(self.estimate.num_threads(), self.estimate.elapsed()))?;
        writeln!(f, "{}", format_pi_line(self.estimate.pi()))
    }
}
