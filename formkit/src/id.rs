use uuid::Uuid;

/// A fresh id starting with `prefix`.
///
/// Every call returns a new id. Components that need an id to survive
/// re-renders generate it once and keep it.
pub fn use_unique_id(prefix: &str) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}
