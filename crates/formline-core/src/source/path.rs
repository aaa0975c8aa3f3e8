use std::path::PathBuf;

/// Clean up a path pasted or dragged into a terminal.
///
/// Terminals wrap dropped paths containing spaces in quotes and the line
/// read from stdin keeps its newline; both are removed. Returns None when
/// nothing is left.
pub fn normalize_dropped_path(input: &str) -> Option<PathBuf> {
    let trimmed = input.trim();
    let unquoted = ['\'', '"']
        .iter()
        .find_map(|&q| {
            trimmed
                .strip_prefix(q)
                .and_then(|rest| rest.strip_suffix(q))
        })
        .unwrap_or(trimmed);
    if unquoted.is_empty() {
        return None;
    }
    Some(PathBuf::from(unquoted))
}
