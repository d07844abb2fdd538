use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::pronoun::PronounError;

/// Newtype wrapper for entity IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything the resolver can refer to: it only needs a display name and
/// the stored pronoun preference tag.
///
/// The tag is a raw string on purpose. Entity stores may hold values the
/// resolver does not recognize, and those degrade to neuter forms.
pub trait Referent {
    fn name(&self) -> &str;
    fn pronoun(&self) -> &str;
}

/// Stand-in used when no entity is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Nobody;

impl Referent for Nobody {
    fn name(&self) -> &str {
        "nobody"
    }

    fn pronoun(&self) -> &str {
        Pronoun::It.tag()
    }
}

/// Pronoun preference tag for an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pronoun {
    /// he/him/his/his/himself
    He,
    /// she/her/her/hers/herself
    She,
    /// it/it/its/its/itself
    It,
    /// they/them/their/theirs/themself
    They,
    /// Refer to the entity by name: "Fred", "Fred's".
    Name,
}

impl Pronoun {
    /// Every preference tag, in table column order.
    pub const ALL: [Pronoun; 5] = [
        Pronoun::He,
        Pronoun::She,
        Pronoun::It,
        Pronoun::They,
        Pronoun::Name,
    ];

    /// The literal tag stored on entity records.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::He => "he",
            Self::She => "she",
            Self::It => "it",
            Self::They => "they",
            Self::Name => "name",
        }
    }

    /// Match a stored tag exactly; unrecognized tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Pronoun> {
        Pronoun::ALL.into_iter().find(|p| p.tag() == tag)
    }
}

impl fmt::Display for Pronoun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Pronoun {
    type Err = PronounError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pronoun::from_tag(s).ok_or_else(|| PronounError::UnknownPreference(s.to_string()))
    }
}

/// A player or character record as supplied by the entity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub name: String,
    pub pronoun: String,
}

impl Entity {
    pub fn new(id: EntityId, name: impl Into<String>, pronoun: Pronoun) -> Self {
        Self {
            id,
            name: name.into(),
            pronoun: pronoun.tag().to_string(),
        }
    }

    /// The stored preference, if it is one of the recognized tags.
    pub fn preference(&self) -> Option<Pronoun> {
        Pronoun::from_tag(&self.pronoun)
    }
}

impl Referent for Entity {
    fn name(&self) -> &str {
        &self.name
    }

    fn pronoun(&self) -> &str {
        &self.pronoun
    }
}
