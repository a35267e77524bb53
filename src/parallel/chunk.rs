/// Half-open range `[start, end)` of step indices owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chunk {
    start: u64,
    end: u64
}

impl Chunk {
    pub fn new(start: u64, end: u64) -> Chunk {
        Chunk { start, end }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `[0, total_intervals)` into `num_threads` contiguous chunks.
///
/// Every chunk gets `total_intervals / num_threads` steps and the last one
/// also takes the remainder. When there are fewer steps than workers the
/// leading chunks are empty and the last chunk covers the whole grid.
/// `num_threads == 0` yields no chunks.
pub fn partition(total_intervals: u64, num_threads: usize) -> Vec<Chunk> {
    if num_threads == 0 {
        return Vec::new();
    }
    let workers = num_threads as u64;
    let intervals_per_thread = total_intervals / workers;
    (0..workers)
        .map(|i| {
            let start = i * intervals_per_thread;
            let end = if i == workers - 1 {
                total_intervals
            } else {
                (i + 1) * intervals_per_thread
            };
            Chunk::new(start, end)
        })
        .collect()
}
