//! formline_engine - Formula flattening and indirect reference rewriting.

pub mod engine;

pub use engine::{
    InvalidModeError, Mode, ReferenceToken, find_references, flatten, indirect_reference,
    rewrite_references, rewrite_references_with,
};

#[cfg(test)]
mod tests {
    use crate::engine::*;

    #[test]
    fn test_flatten_then_rewrite_row() {
        let formula = "=IF(\n    A2 > 10,\n    B2 * 2,\n    C2\n)\n";
        let flat = flatten(formula);
        assert_eq!(flat, "=IF(A2 > 10,B2 * 2,C2)");
        assert_eq!(
            rewrite_references(&flat, Mode::Row),
            "=IF(INDIRECT(CONCAT(\"A\", ROW())) > 10,INDIRECT(CONCAT(\"B\", ROW())) * 2,INDIRECT(CONCAT(\"C\", ROW())))"
        );
    }

    #[test]
    fn test_flatten_then_rewrite_column() {
        let flat = flatten("SUM(\n  A1,\n  A2\n)");
        assert_eq!(
            rewrite_references(&flat, Mode::Column),
            "SUM(INDIRECT(CONCAT(COLUMN(), \"1\")),INDIRECT(CONCAT(COLUMN(), \"2\")))"
        );
    }

    #[test]
    fn test_invalid_mode_for_any_equation() {
        for eq in ["", "LEN(A5)", "no refs here"] {
            assert!(rewrite_references_with(eq, "diagonal").is_err());
        }
    }

    #[test]
    fn test_every_token_splits_into_letters_then_digits() {
        for token in find_references("A1 ZZ99 ABC12345 XY7") {
            let (column, row) = token.split();
            assert!(!column.is_empty() && column.chars().all(|c| c.is_ascii_uppercase()));
            assert!(!row.is_empty() && row.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(format!("{}{}", column, row), token.as_str());
        }
    }
}
