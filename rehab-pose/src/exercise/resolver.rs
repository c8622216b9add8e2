//! Exercise lookup by id or display name
//!
//! Exact id match first, then fuzzy matching on normalized display names.

use super::config::ExerciseAngleConfig;
use super::registry::EXERCISES;

/// Lowercase, collapse every run of non-ASCII-alphanumerics into one hyphen,
/// and trim hyphens from both ends.
///
/// `"  Heel  Slide!"` → `"heel-slide"`
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(ch);
        } else {
            pending_hyphen = true;
        }
    }

    out
}

/// Resolve against the compiled-in registry
pub fn resolve(id_or_name: &str) -> Option<&'static ExerciseAngleConfig> {
    resolve_in(EXERCISES, id_or_name)
}

/// Resolve against an arbitrary registry
///
/// A fuzzy match is accepted when either normalized string contains the
/// other; ties go to the first entry in registry order.
pub fn resolve_in<'a>(
    registry: &'a [ExerciseAngleConfig],
    id_or_name: &str,
) -> Option<&'a ExerciseAngleConfig> {
    if let Some(exact) = registry.iter().find(|e| e.id == id_or_name) {
        return Some(exact);
    }

    let query = normalize_name(id_or_name);
    if query.is_empty() {
        return None;
    }

    registry.iter().find(|e| {
        let name = normalize_name(e.name);
        name.contains(&query) || query.contains(&name)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_name("Heel Slide"), "heel-slide");
        assert_eq!(normalize_name("  HEEL -- slide!! "), "heel-slide");
        assert_eq!(normalize_name("Sit to Stand (chair)"), "sit-to-stand-chair");
        assert_eq!(normalize_name("***"), "");
    }

    #[test]
    fn test_exact_id() {
        let config = resolve("wall-sit").unwrap();
        assert_eq!(config.name, "Wall Sit");
    }

    #[test]
    fn test_fuzzy_variants_agree() {
        let a = resolve("Heel Slide").unwrap();
        let b = resolve("heel-slide").unwrap();
        let c = resolve("HEEL SLIDE").unwrap();
        assert_eq!(a.id, "heel-slide");
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn test_query_contains_name() {
        let config = resolve("Supine Heel Slide (left leg)").unwrap();
        assert_eq!(config.id, "heel-slide");
    }

    #[test]
    fn test_not_found() {
        assert!(resolve("Bench Press").is_none());
        assert!(resolve("").is_none());
        assert!(resolve("  - ").is_none());
    }
}
