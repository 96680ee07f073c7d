//! Scope enforcement predicate for dragnet scans
//!
//! Every command the engine is about to run is gated on [`within_scope`].
//! The check is a symmetric containment match: a target is authorized when
//! it contains a declared scope entry or a declared scope entry contains it.
//! The looseness is deliberate so that subdomains (`api.example.com`) and
//! paths (`example.com/admin`) stay inside a scope of `example.com` without
//! any URL normalization.
//!
//! An empty scope list authorizes nothing.

/// Check whether `target` is authorized under the declared `scope` list.
///
/// Returns `true` iff some scope entry is a substring of `target` or
/// `target` is a substring of some scope entry. No case folding or scheme
/// stripping is performed.
///
/// # Example
///
/// ```rust
/// use dragnet_scope::within_scope;
///
/// let scope = vec!["example.com".to_string()];
/// assert!(within_scope("api.example.com", &scope));
/// assert!(within_scope("example", &scope));
/// assert!(!within_scope("evil.org", &scope));
/// assert!(!within_scope("example.com", &[]));
/// ```
#[must_use]
pub fn within_scope(target: &str, scope: &[String]) -> bool {
    scope
        .iter()
        .any(|entry| target.contains(entry.as_str()) || entry.contains(target))
}
