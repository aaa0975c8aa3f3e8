use formline_engine::{Mode, flatten, rewrite_references};

/// Flatten `raw`, then rewrite its references when a mode is given.
pub fn convert(raw: &str, indirect: Option<Mode>) -> String {
    let flat = flatten(raw);
    match indirect {
        Some(mode) => rewrite_references(&flat, mode),
        None => flat,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_flatten_only() {
        assert_eq!(convert("  LEN(A5) \n + 2 ", None), "LEN(A5)+ 2");
    }

    #[test]
    fn test_convert_with_mode() {
        assert_eq!(
            convert("LEN(\n  A5\n)", Some(Mode::Row)),
            "LEN(INDIRECT(CONCAT(\"A\", ROW())))"
        );
        assert_eq!(
            convert("LEN(\n  A5\n)", Some(Mode::Column)),
            "LEN(INDIRECT(CONCAT(COLUMN(), \"5\")))"
        );
    }
}
