use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RadioGroupError {
    /// Two options share a value, so selection cannot tell them apart.
    #[error("radio value '{0}' is used by more than one option")]
    DuplicateValue(String),
}
