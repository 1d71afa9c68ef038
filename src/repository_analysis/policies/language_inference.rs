use crate::ports::outbound::RandomSource;

/// Keyword found in a repository name, and the language it suggests.
/// Checked in order, first match wins, so longer keywords come first.
const NAME_KEYWORDS: &[(&str, &str)] = &[
    ("typescript", "TypeScript"),
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("golang", "Go"),
    ("rust", "Rust"),
    ("java", "Java"),
    ("ruby", "Ruby"),
    ("swift", "Swift"),
    ("kotlin", "Kotlin"),
    ("php", "PHP"),
    ("cpp", "C++"),
    ("node", "JavaScript"),
    (".ts", "TypeScript"),
    (".js", "JavaScript"),
    (".py", "Python"),
    (".rs", "Rust"),
    (".go", "Go"),
    (".rb", "Ruby"),
];

/// Languages a simulated record falls back to when the name gives no hint
pub const FALLBACK_LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "Go",
    "Rust",
];

/// Guesses a repository's language from its name when no API data is available
pub struct LanguageInference;

impl LanguageInference {
    /// Substring match against the keyword table (case-insensitive)
    pub fn from_name(repo_name: &str) -> Option<&'static str> {
        let lowered = repo_name.to_lowercase();
        NAME_KEYWORDS
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, language)| *language)
    }

    /// Keyword match, else a random pick from `FALLBACK_LANGUAGES`
    pub fn infer(repo_name: &str, random: &impl RandomSource) -> String {
        Self::from_name(repo_name)
            .or_else(|| random.pick(FALLBACK_LANGUAGES).copied())
            .unwrap_or("Unknown")
            .to_string()
    }
}
