use thiserror::Error;

/// Errors produced by the `name: type` and `name: bound & bound` short
/// forms.
///
/// `E` is the error type of the external type parser; parser failures are
/// passed through verbatim.
#[derive(Debug, Error)]
pub enum ShortFormError<E> {
    /// The input had no `:` separating the name from the type.
    #[error("expected `name: type`, got `{input}`")]
    MissingColon { input: String },

    /// A type-parameter bound parsed to a non-nominal type reference.
    #[error("bound `{bound}` is not a defined type")]
    BoundNotDefined { bound: String },

    /// The external type parser rejected its input.
    #[error(transparent)]
    Type(E),
}
