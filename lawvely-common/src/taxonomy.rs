//! Fixed category taxonomy for legislation records
//!
//! The classifier only ever emits labels from this list, and the API's
//! category filter validates against it. Declaration order matters: the
//! fallback stages of the classifier break score ties by taking the first
//! label in this order.

/// The fixed, ordered set of legal subject-matter categories.
pub const TAXONOMY: [&str; 12] = [
    "Finance",
    "Housing",
    "Transportation",
    "Health",
    "Environment",
    "Energy",
    "Education",
    "Justice",
    "Trade",
    "Consumer",
    "Governance",
    "Technology",
];

/// True if `label` is a taxonomy member (case-sensitive exact match).
pub fn is_valid_category(label: &str) -> bool {
    TAXONOMY.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(is_valid_category("Finance"));
        assert!(!is_valid_category("finance"));
        assert!(!is_valid_category("FINANCE"));
        assert!(!is_valid_category("Sports"));
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(TAXONOMY[0], "Finance");
        assert_eq!(TAXONOMY[1], "Housing");
        assert_eq!(TAXONOMY[11], "Technology");
    }
}
