//! Shared fixture: a minimal front end the encoded-element surface is
//! exercised against.

#![allow(dead_code)]

use std::convert::Infallible;
use std::fmt;

use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use encode_types::{EncodedElement, Syntax, Tag, Term, TypeFactory, TypeParser};

/// One body token: a blank run, a line break, or a word.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Tok {
    Blank(String),
    Newline,
    Word(String),
}

impl Term for Tok {
    fn is_whitespace(&self) -> bool {
        matches!(self, Tok::Blank(_))
    }

    fn is_newline(&self) -> bool {
        matches!(self, Tok::Newline)
    }

    fn space() -> Self {
        Tok::Blank(" ".to_string())
    }
}

pub fn word(text: &str) -> Tok {
    Tok::Word(text.to_string())
}

pub fn blank() -> Tok {
    Tok::Blank(" ".to_string())
}

/// Type references as the fixture parser produces them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Ty {
    Defined(Defined),
    Variable(String),
}

/// A nominal type reference.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Defined(pub String);

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Defined(defined) => defined.fmt(f),
            Ty::Variable(name) => f.write_str(name),
        }
    }
}

impl fmt::Display for Defined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn defined(name: &str) -> Ty {
    Ty::Defined(Defined(name.to_string()))
}

/// Marker wiring the fixture types together.
pub struct TestSyntax;

impl Syntax for TestSyntax {
    type Term = Tok;
    type Type = Ty;
    type Defined = Defined;
    type Naming = String;
    type Scope = Vec<String>;

    fn as_defined(ty: Ty) -> Option<Defined> {
        match ty {
            Ty::Defined(defined) => Some(defined),
            Ty::Variable(_) => None,
        }
    }
}

/// Parses any name present in the scope as a type variable and everything
/// else as a defined type.
pub struct ScopedParser {
    scope: Vec<String>,
}

impl ScopedParser {
    pub fn new(scope: &[&str]) -> Self {
        ScopedParser {
            scope: scope.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl TypeParser<TestSyntax> for ScopedParser {
    type Error = Infallible;

    fn parse(&self, input: &str) -> Result<Ty, Infallible> {
        if self.scope.iter().any(|name| name == input) {
            Ok(Ty::Variable(input.to_string()))
        } else {
            Ok(Ty::Defined(Defined(input.to_string())))
        }
    }
}

pub struct ScopedFactory;

impl TypeFactory<TestSyntax> for ScopedFactory {
    type Parser = ScopedParser;

    fn parser(&self, scope: &Vec<String>) -> ScopedParser {
        ScopedParser { scope: scope.clone() }
    }
}

/// Rejects every input, for error-propagation tests.
pub struct RejectingParser;

#[derive(Debug, Error)]
#[error("cannot parse `{0}`")]
pub struct Unparseable(pub String);

impl TypeParser<TestSyntax> for RejectingParser {
    type Error = Unparseable;

    fn parse(&self, input: &str) -> Result<Ty, Unparseable> {
        Err(Unparseable(input.to_string()))
    }
}

/// An element with the given tags and an otherwise fixed shape.
pub fn element_with_tags(tags: &[Tag]) -> EncodedElement<TestSyntax> {
    EncodedElement::<TestSyntax>::builder("value", defined("int"), "get*".to_string(), Vec::new())
        .tags(tags.iter().copied())
        .build()
}
