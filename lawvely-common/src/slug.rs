//! Slug derivation for legislation record ids
//!
//! Records are keyed by a slug of their extracted title: lowercased, runs
//! of non-word characters collapsed to single hyphens, leading and
//! trailing hyphens stripped. Underscores count as word characters and
//! pass through unchanged.

/// Derive a record id slug from a legislation title.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in c.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
