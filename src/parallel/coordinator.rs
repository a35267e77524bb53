use std::thread;
use std::time::Instant;

use log::{
    debug,
    info,
    trace
};

use crate::math::integrand::{
    Integrand,
    PiIntegrand
};
use crate::math::trapezoid::integrate_with;

use super::chunk::{
    partition,
    Chunk
};
use super::coordinatorerror::CoordinatorError;
use super::piestimate::PiEstimate;

// ─────────────────────────────────────────────────────────────────────────────
// Parallel coordinator
// ─────────────────────────────────────────────────────────────────────────────
//
// launch → compute → join → aggregate, exactly once per call.
//
//   - worker i owns chunk i and hands its partial sum back through its own
//     join handle; nothing else is shared between workers
//   - every worker is joined before any partial sum is read
//   - partial sums are added in ascending worker index, never in completion
//     order, so the result only depends on (total_intervals, num_threads)
//   - all workers live inside a `thread::scope` and never outlive the call

/// Estimates π with `num_threads` OS threads over `total_intervals` steps.
pub fn calculate_pi(total_intervals: u64, num_threads: usize) -> Result<PiEstimate, CoordinatorError> {
    calculate_pi_with(&PiIntegrand, total_intervals, num_threads)
}

/// Same decomposition as [`calculate_pi`] for an arbitrary integrand on [0, 1].
pub fn calculate_pi_with<I>(integrand: &I,
                            total_intervals: u64,
                            num_threads: usize) -> Result<PiEstimate, CoordinatorError>
    where I: Integrand {
    if num_threads == 0 {
        return Err(CoordinatorError::NoWorkers);
    }
    let chunks = partition(total_intervals, num_threads);
    debug!("partitioned {} intervals into {} chunks of {} (last: {})",
           total_intervals,
           chunks.len(),
           total_intervals / num_threads as u64,
           chunks.last().map_or(0, Chunk::len));

    let start_time = Instant::now();
    let partials = run_workers(integrand, &chunks, total_intervals)?;
    let mut pi = 0.0;
    for partial in partials.iter() {
        pi += partial;
    }
    let elapsed = start_time.elapsed();

    info!("pi ~ {:.8} with {} workers in {:.6}s", pi, num_threads, elapsed.as_secs_f64());
    Ok(PiEstimate::new(pi, elapsed, num_threads, total_intervals))
}

fn run_workers<I>(integrand: &I,
                  chunks: &[Chunk],
                  total_intervals: u64) -> Result<Vec<f64>, CoordinatorError>
    where I: Integrand {
    thread::scope(|scope| {
        let mut handles = Vec::with_capacity(chunks.len());
        for (worker, chunk) in chunks.iter().copied().enumerate() {
            let handle = thread::Builder::new()
                .name(format!("pi-worker-{}", worker))
                .spawn_scoped(scope, move || {
                    let partial = integrate_with(integrand, chunk.start(), chunk.end(), total_intervals);
                    trace!("worker {} summed [{}, {}) = {}", worker, chunk.start(), chunk.end(), partial);
                    partial
                })
                .map_err(|source| CoordinatorError::SpawnFailed { worker, source })?;
            handles.push(handle);
        }

        // Join barrier: collect every outcome before inspecting any of them.
        let outcomes: Vec<_> = handles.into_iter().map(|handle| handle.join()).collect();
        outcomes
            .into_iter()
            .enumerate()
            .map(|(worker, outcome)| outcome.map_err(|_| CoordinatorError::WorkerPanicked { worker }))
            .collect()
    })
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::trapezoid::integrate;

    struct Panicking;

    impl Integrand for Panicking {
        fn value(&self, x: f64) -> f64 {
            if x > 0.5 {
                panic!("boom");
            }
            x
        }
    }

    #[test]
    fn zero_workers_are_rejected() {
        assert!(matches!(calculate_pi(100, 0), Err(CoordinatorError::NoWorkers)));
    }

    #[test]
    fn two_workers_over_four_steps() {
        let estimate = calculate_pi(4, 2).unwrap();
        let expected = integrate(0, 2, 4) + integrate(2, 4, 4);
        assert_eq!(estimate.pi(), expected);
        assert_relative_eq!(estimate.pi(), 1.8411764705882352 + 1.29, epsilon = 1e-12);
        assert_eq!(estimate.num_threads(), 2);
        assert_eq!(estimate.total_intervals(), 4);
    }

    #[test]
    fn result_is_ordered_sum_of_chunk_partials() {
        let total = 100_003;
        for threads in [1, 3, 7, 50] {
            let mut expected = 0.0;
            for chunk in partition(total, threads) {
                expected += integrate(chunk.start(), chunk.end(), total);
            }
            assert_eq!(calculate_pi(total, threads).unwrap().pi(), expected);
        }
    }

    #[test]
    fn repeated_runs_are_bit_identical() {
        let first = calculate_pi(50_000, 6).unwrap().pi();
        for _ in 0..5 {
            assert_eq!(calculate_pi(50_000, 6).unwrap().pi(), first);
        }
    }

    #[test]
    fn more_workers_than_steps_still_covers_grid() {
        let estimate = calculate_pi(3, 5).unwrap();
        assert_eq!(estimate.pi(), integrate(0, 3, 3));
    }

    #[test]
    fn panicking_worker_is_reported() {
        let result = calculate_pi_with(&Panicking, 10, 2);
        assert!(matches!(result, Err(CoordinatorError::WorkerPanicked { worker: 1 })));
    }
}
