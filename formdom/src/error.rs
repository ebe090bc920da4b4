use thiserror::Error;

/// Errors surfaced by the document when callers touch nodes imperatively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The handle points at a node that is no longer mounted.
    #[error("node '{0}' is not mounted")]
    Detached(String),

    #[error("no element with id '{0}'")]
    UnknownElement(String),

    /// The element exists but is not a native control.
    #[error("element '{0}' is not a native control")]
    NotAControl(String),
}
