//! Formal parameters and generic parameters of encoded elements, plus
//! their short textual forms.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::error::ShortFormError;
use crate::types::{Syntax, TypeFactory, TypeParser};

/// A named, typed formal parameter of an encoded element.
///
/// Order among parameters is positional and owned by the element; a
/// parameter itself is just the `name: type` pair.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(bound(
    serialize = "S::Type: serde::Serialize",
    deserialize = "S::Type: serde::Deserialize<'de>"
))]
pub struct Parameter<S: Syntax> {
    name: String,
    #[serde(rename = "type")]
    ty: S::Type,
}

impl<S: Syntax> Parameter<S> {
    pub fn new(name: impl Into<String>, ty: S::Type) -> Self {
        Parameter { name: name.into(), ty }
    }

    /// Parses the `name ":" type` short form.
    ///
    /// The input splits on the first `:`, both sides trimmed; the right
    /// side goes through `parser`. Fails when no colon is present or when
    /// the parser rejects the type text.
    pub fn from_line<P: TypeParser<S>>(
        input: &str,
        parser: &P,
    ) -> Result<Self, ShortFormError<P::Error>> {
        let (name, ty_text) = input
            .split_once(':')
            .ok_or_else(|| ShortFormError::MissingColon { input: input.to_string() })?;
        let ty = parser.parse(ty_text.trim()).map_err(ShortFormError::Type)?;
        Ok(Parameter::new(name.trim(), ty))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &S::Type {
        &self.ty
    }
}

impl<S: Syntax> fmt::Display for Parameter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}

impl<S: Syntax> Clone for Parameter<S> {
    fn clone(&self) -> Self {
        Parameter { name: self.name.clone(), ty: self.ty.clone() }
    }
}

impl<S: Syntax> PartialEq for Parameter<S> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.ty == other.ty
    }
}

impl<S: Syntax> fmt::Debug for Parameter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .finish()
    }
}

/// A generic parameter declared on an element, with zero or more defined
/// (nominal) bounds in declaration order.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(bound(
    serialize = "S::Defined: serde::Serialize",
    deserialize = "S::Defined: serde::Deserialize<'de>"
))]
pub struct TypeParameter<S: Syntax> {
    name: String,
    bounds: Vec<S::Defined>,
}

impl<S: Syntax> TypeParameter<S> {
    pub fn builder(name: impl Into<String>) -> TypeParameterBuilder<S> {
        TypeParameterBuilder { name: name.into(), bounds: Vec::new() }
    }

    /// Parses the `name` or `name ":" bound ("&" bound)*` short form.
    ///
    /// With no colon the parameter is bound-less. Otherwise a parser is
    /// obtained from `factory` for `scope` and every `&`-separated bound is
    /// parsed and kind-checked; a bound that is not a defined type fails
    /// the whole parse.
    pub fn from_line<F: TypeFactory<S>>(
        input: &str,
        factory: &F,
        scope: &S::Scope,
    ) -> Result<Self, ShortFormError<<F::Parser as TypeParser<S>>::Error>> {
        let Some((name, bounds_text)) = input.split_once(':') else {
            return Ok(Self::builder(input.trim()).build());
        };

        let parser = factory.parser(scope);
        let mut builder = Self::builder(name.trim());
        for bound_text in bounds_text.split('&') {
            let bound_text = bound_text.trim();
            let ty = parser.parse(bound_text).map_err(ShortFormError::Type)?;
            match S::as_defined(ty) {
                Some(bound) => builder = builder.bound(bound),
                None => {
                    return Err(ShortFormError::BoundNotDefined { bound: bound_text.to_string() })
                }
            }
        }
        Ok(builder.build())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &[S::Defined] {
        &self.bounds
    }
}

impl<S: Syntax> fmt::Display for TypeParameter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, bound) in self.bounds.iter().enumerate() {
            if i == 0 {
                write!(f, ": {}", bound)?;
            } else {
                write!(f, " & {}", bound)?;
            }
        }
        Ok(())
    }
}

impl<S: Syntax> Clone for TypeParameter<S> {
    fn clone(&self) -> Self {
        TypeParameter { name: self.name.clone(), bounds: self.bounds.clone() }
    }
}

impl<S: Syntax> PartialEq for TypeParameter<S> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.bounds == other.bounds
    }
}

impl<S: Syntax> fmt::Debug for TypeParameter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeParameter")
            .field("name", &self.name)
            .field("bounds", &self.bounds)
            .finish()
    }
}

/// Assembles a [`TypeParameter`].
pub struct TypeParameterBuilder<S: Syntax> {
    name: String,
    bounds: Vec<S::Defined>,
}

impl<S: Syntax> TypeParameterBuilder<S> {
    /// Appends one bound; declaration order is kept.
    pub fn bound(mut self, bound: S::Defined) -> Self {
        self.bounds.push(bound);
        self
    }

    pub fn bounds(mut self, bounds: impl IntoIterator<Item = S::Defined>) -> Self {
        self.bounds.extend(bounds);
        self
    }

    pub fn build(self) -> TypeParameter<S> {
        TypeParameter { name: self.name, bounds: self.bounds }
    }
}
