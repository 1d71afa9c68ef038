/// RandomSource port for every random choice the analysis makes
///
/// Dependency synthesis, popularity estimates, simulated records and scan
/// pacing all draw from this port, so tests can substitute a scripted sequence.
pub trait RandomSource: Send + Sync {
    /// Returns a uniformly distributed integer in `[low, high)`.
    ///
    /// Implementations return `low` when the range is empty.
    fn gen_range(&self, low: u64, high: u64) -> u64;

    /// Picks one element of a non-empty slice
    fn pick<'a, T>(&self, items: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if items.is_empty() {
            return None;
        }
        let index = self.gen_range(0, items.len() as u64) as usize;
        items.get(index.min(items.len() - 1))
    }
}
