//! Pronoun resolver — role tables and preference-driven lookup.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::schema::entity::{Nobody, Pronoun, Referent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PronounError {
    #[error("unknown pronoun role: '{0}'")]
    UnknownRole(String),
    #[error("unknown pronoun preference: '{0}'")]
    UnknownPreference(String),
}

/// A grammatical slot that can be filled for an entity.
///
/// Builder text reads in first-person plural so the slot names stay
/// readable: "[we] open[s] [our] pack".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Subject: he, she, it, they.
    We,
    /// Object: him, her, it, them.
    Us,
    /// Possessive determiner: his, her, its, their.
    Our,
    /// Possessive pronoun: his, hers, its, theirs.
    Ours,
    /// Reflexive: himself, herself, itself, themself.
    Ourself,
    /// Copula agreement: is, are.
    Are,
    /// Verb suffix: "open[s]".
    S,
    /// Verb suffix: "go[es]".
    Es,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::We,
        Role::Us,
        Role::Our,
        Role::Ours,
        Role::Ourself,
        Role::Are,
        Role::S,
        Role::Es,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::We => "we",
            Self::Us => "us",
            Self::Our => "our",
            Self::Ours => "ours",
            Self::Ourself => "ourself",
            Self::Are => "are",
            Self::S => "s",
            Self::Es => "es",
        }
    }

    /// Registry key of the capitalized variant. Verb suffixes have none.
    pub fn capitalized_key(&self) -> Option<&'static str> {
        match self {
            Self::We => Some("We"),
            Self::Us => Some("Us"),
            Self::Our => Some("Our"),
            Self::Ours => Some("Ours"),
            Self::Ourself => Some("Ourself"),
            Self::Are => Some("Are"),
            Self::S | Self::Es => None,
        }
    }

    /// True when the `name` column is appended to the entity's name
    /// instead of being looked up as a form of its own.
    pub fn is_name_suffix(&self) -> bool {
        !matches!(self, Self::Are | Self::S | Self::Es)
    }

    pub fn is_verb_suffix(&self) -> bool {
        matches!(self, Self::S | Self::Es)
    }

    /// The lowercase forms for this role.
    pub fn base_table(&self) -> PronounTable {
        match self {
            Self::We => PronounTable::new("he", "she", "it", "they", ""),
            Self::Us => PronounTable::new("him", "her", "it", "them", ""),
            Self::Our => PronounTable::new("his", "her", "its", "their", "'s"),
            Self::Ours => PronounTable::new("his", "hers", "its", "theirs", "'s"),
            Self::Ourself => PronounTable::new("himself", "herself", "itself", "themself", ""),
            Self::Are => PronounTable::new("is", "is", "is", "are", "is"),
            Self::S => PronounTable::new("s", "s", "s", "", "s"),
            Self::Es => PronounTable::new("es", "es", "es", "", "es"),
        }
    }
}

/// The literal forms of one role, one column per preference tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounTable {
    pub he: String,
    pub she: String,
    pub it: String,
    pub they: String,
    /// For name-suffix roles this is appended to the entity's name.
    pub name: String,
}

impl PronounTable {
    pub fn new(he: &str, she: &str, it: &str, they: &str, name: &str) -> Self {
        Self {
            he: he.to_string(),
            she: she.to_string(),
            it: it.to_string(),
            they: they.to_string(),
            name: name.to_string(),
        }
    }

    /// Look up a form by raw preference tag.
    pub fn get(&self, tag: &str) -> Option<&str> {
        Pronoun::from_tag(tag).map(|preference| self.form(preference))
    }

    pub fn form(&self, preference: Pronoun) -> &str {
        match preference {
            Pronoun::He => &self.he,
            Pronoun::She => &self.she,
            Pronoun::It => &self.it,
            Pronoun::They => &self.they,
            Pronoun::Name => &self.name,
        }
    }

    /// Copy of this table with the first character of every value uppercased.
    pub fn capitalized(&self) -> Self {
        Self {
            he: capitalize(&self.he),
            she: capitalize(&self.she),
            it: capitalize(&self.it),
            they: capitalize(&self.they),
            name: capitalize(&self.name),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone)]
struct RoleEntry {
    key: &'static str,
    role: Role,
    table: PronounTable,
}

/// Every registered role key with its table. Capitalized tables are
/// derived when the registry is built and never recomputed.
#[derive(Debug, Clone)]
pub struct PronounRegistry {
    entries: Vec<RoleEntry>,
    index: FxHashMap<&'static str, usize>,
}

impl PronounRegistry {
    /// Build the registry: each role's capitalized variant (where one
    /// exists) followed by its lowercase table.
    pub fn standard() -> Self {
        let mut entries = Vec::new();
        for role in Role::ALL {
            let table = role.base_table();
            if let Some(key) = role.capitalized_key() {
                entries.push(RoleEntry {
                    key,
                    role,
                    table: table.capitalized(),
                });
            }
            entries.push(RoleEntry {
                key: role.key(),
                role,
                table,
            });
        }

        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.key, i))
            .collect();

        Self { entries, index }
    }

    /// Registered role keys, in registry order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn table(&self, key: &str) -> Result<&PronounTable, PronounError> {
        self.entry(key).map(|entry| &entry.table)
    }

    /// The role a registered key belongs to. `We` and `we` map to the same
    /// role; the key itself must match a registered key exactly.
    pub fn role(&self, key: &str) -> Result<Role, PronounError> {
        self.entry(key).map(|entry| entry.role)
    }

    /// Resolve `key` for `entity`. A missing entity reads as "nobody"/"it".
    ///
    /// - `name` preference on a name-suffix role: the entity's name with
    ///   the table's `name` entry appended.
    /// - Otherwise the column for the entity's preference. An unrecognized
    ///   or empty value falls back to the `it` column, except that `they`
    ///   on a verb-suffix role is legitimately empty.
    pub fn resolve(
        &self,
        entity: Option<&dyn Referent>,
        key: &str,
    ) -> Result<String, PronounError> {
        let entry = self.entry(key)?;
        Ok(resolve_entry(entry, entity.unwrap_or(&Nobody)))
    }

    /// Every registered role resolved for `entity`, in registry order.
    pub fn resolve_all(&self, entity: Option<&dyn Referent>) -> Vec<(&'static str, String)> {
        let entity = entity.unwrap_or(&Nobody);
        self.entries
            .iter()
            .map(|entry| (entry.key, resolve_entry(entry, entity)))
            .collect()
    }

    fn entry(&self, key: &str) -> Result<&RoleEntry, PronounError> {
        self.index
            .get(key)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| PronounError::UnknownRole(key.to_string()))
    }
}

impl Default for PronounRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn resolve_entry(entry: &RoleEntry, entity: &dyn Referent) -> String {
    let preference = entity.pronoun();

    if preference == Pronoun::Name.tag() && entry.role.is_name_suffix() {
        return format!("{}{}", entity.name(), entry.table.name);
    }

    let form = match entry.table.get(preference) {
        Some(form) if !form.is_empty() => form,
        Some(form) if entry.role.is_verb_suffix() && preference == Pronoun::They.tag() => form,
        _ => {
            debug!(preference, role = entry.key, "falling back to neuter pronoun form");
            entry.table.it.as_str()
        }
    };
    form.to_string()
}

/// The shared registry, built on first use.
pub fn registry() -> &'static PronounRegistry {
    static REGISTRY: OnceLock<PronounRegistry> = OnceLock::new();
    REGISTRY.get_or_init(PronounRegistry::standard)
}

/// Resolve `key` for `entity` against the shared registry.
pub fn resolve(entity: Option<&dyn Referent>, key: &str) -> Result<String, PronounError> {
    registry().resolve(entity, key)
}

/// Every registered role resolved for `entity` against the shared registry.
pub fn resolve_all(entity: Option<&dyn Referent>) -> Vec<(&'static str, String)> {
    registry().resolve_all(entity)
}
