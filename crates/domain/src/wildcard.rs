//! Label-wise name comparison with single-label `*` wildcards.

/// Compares two names label by label.
///
/// A `*` label on either side matches any single label at the same
/// position; it never absorbs more than one label, so names with a
/// different label count never match. Everything else compares ASCII
/// case-insensitively. The root name matches unconditionally.
pub struct WildcardMatcher;

impl WildcardMatcher {
    pub fn matches(candidate: &str, pattern: &str) -> bool {
        if candidate == "." || pattern == "." {
            return true;
        }

        if label_count(candidate) != label_count(pattern) {
            return false;
        }

        labels(candidate)
            .zip(labels(pattern))
            .all(|(a, b)| label_matches(a, b))
    }
}

fn labels(name: &str) -> impl Iterator<Item = &str> {
    let trimmed = name.strip_suffix('.').unwrap_or(name);
    trimmed.split('.').filter(|label| !label.is_empty())
}

fn label_count(name: &str) -> usize {
    labels(name).count()
}

fn label_matches(a: &str, b: &str) -> bool {
    a == "*" || b == "*" || a.eq_ignore_ascii_case(b)
}
