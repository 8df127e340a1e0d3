//! The normalized member record and its role predicates.

use std::fmt;

use serde_derive::{Deserialize, Serialize};

use crate::code;
use crate::param::{Parameter, TypeParameter};
use crate::tags::{Tag, Tags};
use crate::types::Syntax;

/// A normalized member lifted out of an encoding template.
///
/// One element describes one member of the generated value class or its
/// companion builder: the structural shape (name, type, parameters, body
/// tokens, thrown conditions, generic parameters) together with a [`Tags`]
/// set that fixes the member's role. The emitter reads the role back
/// through the predicate methods; every predicate is a pure function of
/// the tag set and answers `false` rather than failing on exotic
/// combinations.
///
/// Elements are assembled once through [`ElementBuilder`] and are immutable
/// afterwards, so they can be shared freely across threads.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[serde(bound(
    serialize = "S::Term: serde::Serialize, S::Type: serde::Serialize, \
                 S::Defined: serde::Serialize, S::Naming: serde::Serialize, \
                 S::Scope: serde::Serialize",
    deserialize = "S::Term: serde::Deserialize<'de>, S::Type: serde::Deserialize<'de>, \
                   S::Defined: serde::Deserialize<'de>, S::Naming: serde::Deserialize<'de>, \
                   S::Scope: serde::Deserialize<'de>"
))]
pub struct EncodedElement<S: Syntax> {
    name: String,
    #[serde(rename = "type")]
    ty: S::Type,
    naming: S::Naming,
    params: Vec<Parameter<S>>,
    code: Vec<S::Term>,
    thrown: Vec<S::Type>,
    tags: Tags,
    type_parameters: S::Scope,
    type_params: Vec<TypeParameter<S>>,
}

impl<S: Syntax> EncodedElement<S> {
    /// Starts assembling an element from its four required attributes.
    pub fn builder(
        name: impl Into<String>,
        ty: S::Type,
        naming: S::Naming,
        type_parameters: S::Scope,
    ) -> ElementBuilder<S> {
        ElementBuilder {
            name: name.into(),
            ty,
            naming,
            type_parameters,
            params: Vec::new(),
            code: Vec::new(),
            thrown: Vec::new(),
            tags: Tags::EMPTY,
            type_params: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &S::Type {
        &self.ty
    }

    pub fn naming(&self) -> &S::Naming {
        &self.naming
    }

    /// Formal parameters, in positional order.
    pub fn params(&self) -> &[Parameter<S>] {
        &self.params
    }

    /// Body token sequence; empty for synthesized elements.
    pub fn code(&self) -> &[S::Term] {
        &self.code
    }

    /// Declared thrown conditions, in declaration order.
    pub fn thrown(&self) -> &[S::Type] {
        &self.thrown
    }

    pub fn tags(&self) -> Tags {
        self.tags
    }

    /// The ambient generic-parameter scope the element was encoded under.
    pub fn type_parameters(&self) -> &S::Scope {
        &self.type_parameters
    }

    /// Generic parameters declared on this element itself.
    pub fn type_params(&self) -> &[TypeParameter<S>] {
        &self.type_params
    }

    pub fn is_to_string(&self) -> bool {
        self.tags.contains(Tag::ToString)
    }

    pub fn is_hash_code(&self) -> bool {
        self.tags.contains(Tag::HashCode)
    }

    pub fn is_equals(&self) -> bool {
        self.tags.contains(Tag::Equals)
    }

    pub fn is_from(&self) -> bool {
        self.tags.contains(Tag::From)
    }

    pub fn is_build(&self) -> bool {
        self.tags.contains(Tag::Build)
    }

    pub fn is_init(&self) -> bool {
        self.tags.contains(Tag::Init)
    }

    /// The value-side `with`-style copy operation.
    pub fn is_copy(&self) -> bool {
        self.tags.contains(Tag::Copy) && !self.in_builder()
    }

    /// The builder-side counterpart of [`is_copy`](Self::is_copy).
    pub fn is_builder_copy(&self) -> bool {
        self.tags.contains(Tag::Copy) && self.in_builder()
    }

    pub fn is_expose(&self) -> bool {
        self.tags.contains(Tag::Expose)
    }

    /// Whether the member is placed on the builder rather than the value.
    pub fn in_builder(&self) -> bool {
        self.tags.contains(Tag::Builder)
    }

    pub fn is_static(&self) -> bool {
        self.tags.contains(Tag::Static)
    }

    pub fn is_final(&self) -> bool {
        self.tags.contains(Tag::Final)
    }

    pub fn is_private(&self) -> bool {
        self.tags.contains(Tag::Private)
    }

    pub fn is_synthetic(&self) -> bool {
        self.tags.contains(Tag::Synth)
    }

    pub fn is_impl_field(&self) -> bool {
        self.tags.contains(Tag::Impl)
    }

    pub fn is_field(&self) -> bool {
        self.tags.contains(Tag::Field)
    }

    /// An instance field of the value itself, excluding the backing
    /// implementation slot.
    pub fn is_value_field(&self) -> bool {
        self.is_field()
            && !self.tags.contains(Tag::Impl)
            && !self.in_builder()
            && !self.is_static()
    }

    pub fn is_static_field(&self) -> bool {
        self.is_field() && !self.in_builder() && self.is_static()
    }

    pub fn is_builder_field(&self) -> bool {
        self.is_field() && self.in_builder() && !self.is_static()
    }

    pub fn is_builder_static_field(&self) -> bool {
        self.is_field() && self.in_builder() && self.is_static()
    }

    pub fn is_static_method(&self) -> bool {
        self.tags.contains(Tag::Helper) && self.is_static() && !self.in_builder()
    }

    pub fn is_value_method(&self) -> bool {
        self.tags.contains(Tag::Helper) && !self.is_static() && !self.in_builder()
    }

    pub fn is_builder_method(&self) -> bool {
        self.tags.contains(Tag::Helper) && self.in_builder()
    }

    /// Whether the emitter may splice this member's body in place of a
    /// call to it.
    pub fn is_inlinable(&self) -> bool {
        self.is_equals() || self.is_to_string() || self.is_hash_code() || self.is_from() || self.is_copy()
    }

    /// The body compacted to a single logical line, when this element is
    /// inlinable and declares no generic parameters of its own; empty
    /// otherwise.
    pub fn one_liner(&self) -> Vec<S::Term> {
        if self.is_inlinable() && self.type_params.is_empty() {
            code::one_liner(&self.code)
        } else {
            Vec::new()
        }
    }
}

impl<S: Syntax> Clone for EncodedElement<S> {
    fn clone(&self) -> Self {
        EncodedElement {
            name: self.name.clone(),
            ty: self.ty.clone(),
            naming: self.naming.clone(),
            params: self.params.clone(),
            code: self.code.clone(),
            thrown: self.thrown.clone(),
            tags: self.tags,
            type_parameters: self.type_parameters.clone(),
            type_params: self.type_params.clone(),
        }
    }
}

impl<S: Syntax> fmt::Debug for EncodedElement<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedElement")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("naming", &self.naming)
            .field("params", &self.params)
            .field("code", &self.code)
            .field("thrown", &self.thrown)
            .field("tags", &self.tags)
            .field("type_parameters", &self.type_parameters)
            .field("type_params", &self.type_params)
            .finish()
    }
}

/// Assembles an [`EncodedElement`].
///
/// The builder is a pure assembler: beyond debug-build assertions it does
/// not validate, and the front end is responsible for supplying a
/// consistent tag set.
pub struct ElementBuilder<S: Syntax> {
    name: String,
    ty: S::Type,
    naming: S::Naming,
    params: Vec<Parameter<S>>,
    code: Vec<S::Term>,
    thrown: Vec<S::Type>,
    tags: Tags,
    type_parameters: S::Scope,
    type_params: Vec<TypeParameter<S>>,
}

impl<S: Syntax> ElementBuilder<S> {
    pub fn param(mut self, param: Parameter<S>) -> Self {
        self.params.push(param);
        self
    }

    pub fn params(mut self, params: impl IntoIterator<Item = Parameter<S>>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn code(mut self, code: impl IntoIterator<Item = S::Term>) -> Self {
        self.code.extend(code);
        self
    }

    pub fn thrown(mut self, thrown: S::Type) -> Self {
        self.thrown.push(thrown);
        self
    }

    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.insert(tag);
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn type_param(mut self, type_param: TypeParameter<S>) -> Self {
        self.type_params.push(type_param);
        self
    }

    pub fn build(self) -> EncodedElement<S> {
        debug_assert!(!self.name.is_empty(), "element name must be non-empty");
        debug_assert!(
            !(self.tags.contains(Tag::Field) && self.tags.contains(Tag::Helper)),
            "element `{}` is tagged as both field and helper",
            self.name
        );
        debug_assert!(
            has_unique_param_names(&self.params),
            "element `{}` has duplicate parameter names",
            self.name
        );
        EncodedElement {
            name: self.name,
            ty: self.ty,
            naming: self.naming,
            params: self.params,
            code: self.code,
            thrown: self.thrown,
            tags: self.tags,
            type_parameters: self.type_parameters,
            type_params: self.type_params,
        }
    }
}

fn has_unique_param_names<S: Syntax>(params: &[Parameter<S>]) -> bool {
    params
        .iter()
        .enumerate()
        .all(|(i, param)| params[..i].iter().all(|earlier| earlier.name() != param.name()))
}
