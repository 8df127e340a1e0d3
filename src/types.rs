//! Boundaries to the external type system and naming engine.
//!
//! The front end owns type parsing and naming templates; this crate only
//! stores and returns the values it is handed. The traits here pin down the
//! small surface the core actually depends on.

use std::fmt;

use crate::code::Term;

/// The collaborator types an encoding is expressed against.
///
/// Bundling them into one trait keeps every record generic over a single
/// parameter. Implementations are typically zero-sized markers wiring in
/// the front end's concrete token, type-reference, naming, and scope types.
pub trait Syntax {
    /// Body token produced by the tokenizer.
    type Term: Term + PartialEq + fmt::Debug;

    /// Parsed type reference.
    type Type: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Defined (nominal) type reference, the sub-kind of [`Syntax::Type`]
    /// admissible as a type-parameter bound.
    type Defined: Clone + PartialEq + fmt::Debug + fmt::Display;

    /// Naming template consumed by the emitter.
    type Naming: Clone + fmt::Debug;

    /// Ambient generic-parameter scope an element was encoded under.
    type Scope: Clone + fmt::Debug;

    /// Runtime kind-check: the defined view of `ty`, or `None` when `ty` is
    /// a variable, wildcard, or other non-nominal reference.
    fn as_defined(ty: Self::Type) -> Option<Self::Defined>;
}

/// An already-constructed parser for type references.
pub trait TypeParser<S: Syntax> {
    /// Error reported for text the parser cannot read.
    type Error;

    fn parse(&self, input: &str) -> Result<S::Type, Self::Error>;
}

/// Creates type parsers bound to a generic-parameter scope.
///
/// Bound parsing needs a parser that resolves names against the scope the
/// element was declared under, so the factory and the scope travel together
/// to [`TypeParameter::from_line`](crate::param::TypeParameter::from_line).
pub trait TypeFactory<S: Syntax> {
    type Parser: TypeParser<S>;

    fn parser(&self, scope: &S::Scope) -> Self::Parser;
}
