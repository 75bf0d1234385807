use crate::models::profile::Degree;

/// Checked in order; the first keyword found wins.
const DEGREE_KEYWORDS: &[(&str, Degree)] = &[
    ("phd", Degree::Doctorate),
    ("doctorate", Degree::Doctorate),
    ("master", Degree::Master),
    ("bachelor", Degree::Bachelor),
    ("associate", Degree::Associate),
];

/// Classifies a degree from free text such as `Master of Science in CS`.
/// Falls back to [`Degree::Bachelor`] when no keyword is present.
pub fn infer_degree(text: &str) -> Degree {
    let lower = text.to_lowercase();
    DEGREE_KEYWORDS
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, degree)| *degree)
        .unwrap_or_default()
}
