/// Randomness adapters
mod thread_rng_source;

pub use thread_rng_source::ThreadRngSource;
