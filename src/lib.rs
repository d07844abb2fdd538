//! Narrative Pronouns — data-driven pronoun resolution for game narration.
//!
//! Maps an entity's stored pronoun preference (`he`, `she`, `it`, `they`,
//! or `name`) and a grammatical role (`we`, `us`, `our`, `ours`, `ourself`,
//! `are`, plus the verb suffixes `s`/`es`) to the literal text that belongs
//! in a sentence about that entity.

pub mod core;
pub mod schema;
