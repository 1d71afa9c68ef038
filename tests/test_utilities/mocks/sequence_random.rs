use repo_sbom::prelude::*;
use std::sync::{Arc, Mutex};

/// Deterministic RandomSource that replays a fixed sequence of draws
///
/// Each draw takes the next value (cycling) and maps it into `[low, high)`
/// with `low + value % (high - low)`, so a sequence of zeros always yields
/// the lower bound.
#[derive(Clone)]
pub struct SequenceRandom {
    values: Arc<Vec<u64>>,
    cursor: Arc<Mutex<usize>>,
}

impl SequenceRandom {
    pub fn new(values: Vec<u64>) -> Self {
        Self {
            values: Arc::new(values),
            cursor: Arc::new(Mutex::new(0)),
        }
    }

    pub fn zeros() -> Self {
        Self::new(vec![0])
    }

    pub fn draws(&self) -> usize {
        *self.cursor.lock().unwrap()
    }
}

impl RandomSource for SequenceRandom {
    fn gen_range(&self, low: u64, high: u64) -> u64 {
        let mut cursor = self.cursor.lock().unwrap();
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[*cursor % self.values.len()]
        };
        *cursor += 1;

        if high <= low {
            low
        } else {
            low + value % (high - low)
        }
    }
}
