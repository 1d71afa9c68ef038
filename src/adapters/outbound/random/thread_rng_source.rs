use crate::ports::outbound::RandomSource;
use rand::Rng;

/// ThreadRngSource adapter backed by the thread-local `rand` generator
///
/// Stateless: every call borrows the current thread's generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl ThreadRngSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRngSource {
    fn gen_range(&self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        rand::thread_rng().gen_range(low..high)
    }
}
