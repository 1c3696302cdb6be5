use strsim::jaro_winkler;

use crate::models::InputField;

/// Minimum Jaro-Winkler similarity for a fuzzy candidate.
pub const FUZZY_THRESHOLD: f64 = 0.7;

/// Most candidates offered when a name is ambiguous.
pub const MAX_CANDIDATES: usize = 5;

/// Outcome of resolving a typed field name.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMatch {
    Exact(InputField),
    /// Close names, best first.
    Candidates(Vec<InputField>),
    NoMatch,
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == ' ' { '-' } else { c })
        .collect()
}

/// Resolve what the user typed to a form field.
///
/// Exact key or label matches win (case-insensitive, `_` and spaces read as
/// `-`); otherwise fields scoring above [`FUZZY_THRESHOLD`] are returned.
pub fn find_field(input: &str) -> FieldMatch {
    let needle = normalize(input);
    if needle.is_empty() {
        return FieldMatch::NoMatch;
    }

    if let Some(field) = InputField::ALL
        .iter()
        .find(|f| f.key() == needle || normalize(f.label()) == needle)
    {
        return FieldMatch::Exact(*field);
    }

    let mut scored: Vec<(InputField, f64)> = InputField::ALL
        .iter()
        .map(|f| {
            let score = jaro_winkler(f.key(), &needle).max(jaro_winkler(&normalize(f.label()), &needle));
            (*f, score)
        })
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    if scored.is_empty() {
        return FieldMatch::NoMatch;
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    FieldMatch::Candidates(
        scored
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(|(f, _)| f)
            .collect(),
    )
}
