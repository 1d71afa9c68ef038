mod language_inference;
mod popularity_tier;

pub use language_inference::{LanguageInference, FALLBACK_LANGUAGES};
pub use popularity_tier::PopularityTier;
