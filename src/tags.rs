use serde_derive::{Deserialize, Serialize};
use std::fmt;

/// One facet of an encoded member's role.
///
/// The alphabet is closed: every member role the generator understands is a
/// combination of these tags, and no other tags exist. Tags mark orthogonal
/// axes (placement, storage, visibility, provenance); the legal combinations
/// are expressed by the role predicates on
/// [`EncodedElement`](crate::element::EncodedElement).
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    /// Backing-implementation field slot.
    Impl,
    /// Accessor that exposes the attribute value.
    Expose,
    /// Member lives on the builder, not the value.
    Builder,
    /// No instance receiver.
    Static,
    /// Visibility hint for emission.
    Private,
    /// Emit as non-reassignable.
    Final,
    /// Terminal build operation of the builder.
    Build,
    /// Per-attribute initializer on the builder.
    Init,
    /// Copy-from-another-value operation.
    From,
    /// User-supplied auxiliary method.
    Helper,
    /// Storage member, not a method.
    Field,
    ToString,
    HashCode,
    Equals,
    /// `with`-style copy operation.
    Copy,
    /// Synthesized by the generator rather than authored.
    Synth,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 16] = [
        Tag::Impl,
        Tag::Expose,
        Tag::Builder,
        Tag::Static,
        Tag::Private,
        Tag::Final,
        Tag::Build,
        Tag::Init,
        Tag::From,
        Tag::Helper,
        Tag::Field,
        Tag::ToString,
        Tag::HashCode,
        Tag::Equals,
        Tag::Copy,
        Tag::Synth,
    ];

    const fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// A set of [`Tag`]s, stored as a bitset keyed by the tag discriminant.
///
/// Membership tests are single bit tests, and the closed alphabet makes the
/// set exhaustively enumerable. Serialized as the ordered list of contained
/// tags.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
#[serde(from = "Vec<Tag>", into = "Vec<Tag>")]
pub struct Tags(u16);

impl Tags {
    pub const EMPTY: Tags = Tags(0);

    pub fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    /// This set plus `tag`.
    pub fn with(self, tag: Tag) -> Tags {
        Tags(self.0 | tag.bit())
    }

    pub fn insert(&mut self, tag: Tag) {
        self.0 |= tag.bit();
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Contained tags, in declaration order of the alphabet.
    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |tag| self.contains(*tag))
    }
}

impl From<Tag> for Tags {
    fn from(tag: Tag) -> Tags {
        Tags::EMPTY.with(tag)
    }
}

impl FromIterator<Tag> for Tags {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Tags {
        iter.into_iter().fold(Tags::EMPTY, Tags::with)
    }
}

impl Extend<Tag> for Tags {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        for tag in iter {
            self.insert(tag);
        }
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(tags: Vec<Tag>) -> Tags {
        tags.into_iter().collect()
    }
}

impl From<Tags> for Vec<Tag> {
    fn from(tags: Tags) -> Vec<Tag> {
        tags.iter().collect()
    }
}

impl fmt::Debug for Tags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
