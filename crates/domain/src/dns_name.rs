//! Domain name normalization and comparison.
//!
//! Names travel through the resolver as plain strings. Every comparison goes
//! through [`same`], so callers never have to care about casing or whether a
//! name carries the trailing root dot.

/// Lowercases `name` and makes sure it ends with exactly the root dot that was
/// given or one appended.
pub fn normalize(name: &str) -> String {
    let mut normalized = name.to_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

/// Case-insensitive, dot-termination-insensitive name equality.
///
/// Both names are normalized and split into labels. The label sequences must
/// match exactly, except that the longer one may carry one extra trailing
/// empty label.
pub fn same(lhs: &str, rhs: &str) -> bool {
    let lhs = normalize(lhs);
    let rhs = normalize(rhs);
    let lhs_labels: Vec<&str> = lhs.split('.').collect();
    let rhs_labels: Vec<&str> = rhs.split('.').collect();

    let (longer, shorter) = if rhs_labels.len() > lhs_labels.len() {
        (rhs_labels, lhs_labels)
    } else {
        (lhs_labels, rhs_labels)
    };

    if longer.len() != shorter.len() && longer.len() != shorter.len() + 1 {
        return false;
    }
    if longer[..shorter.len()] != shorter[..] {
        return false;
    }

    longer.len() == shorter.len() || longer.last().is_some_and(|label| label.is_empty())
}
