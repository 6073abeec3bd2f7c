//! File-name sanitization for blueprint labels.

/// Derive a file-system-safe identifier from a blueprint label.
///
/// Keeps alphanumeric characters (Unicode-aware) plus `-` and `_` in their
/// original order and discards everything else. The result may be empty —
/// that is a valid output, not an error; callers writing to storage must
/// handle an empty identifier themselves, this function invents no fallback.
///
/// Labels differing only in stripped characters collide (`"A!B"` and `"AB"`
/// both become `"AB"`); uniqueness is explicitly not guaranteed.
pub fn sanitize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_'))
        .collect()
}
