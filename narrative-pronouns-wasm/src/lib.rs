//! WASM bindings for narrative-pronouns — powers the interactive web demo.

use wasm_bindgen::prelude::*;

use narrative_pronouns::core::directory::EntityDirectory;
use narrative_pronouns::core::pronoun;
use narrative_pronouns::schema::entity::{Entity, EntityId, Pronoun};

// ---------------------------------------------------------------------------
// Embedded demo cast — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const CAST: &str = include_str!("../../demo_data/cast.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct EntityInfo {
    id: u64,
    name: String,
    pronoun: String,
}

#[derive(serde::Serialize)]
struct FormEntry {
    role: &'static str,
    form: String,
}

/// Every role for `entity` as a JSON array of `{role, form}`, in registry order.
fn forms_json(entity: &Entity) -> Result<String, serde_json::Error> {
    let forms: Vec<FormEntry> = pronoun::resolve_all(Some(entity))
        .into_iter()
        .map(|(role, form)| FormEntry { role, form })
        .collect();
    serde_json::to_string(&forms)
}

fn serialization_error(e: serde_json::Error) -> JsError {
    JsError::new(&format!("Serialization error: {e}"))
}

/// Resolve one role for an ad-hoc entity.
#[wasm_bindgen]
pub fn resolve_pronoun(name: &str, tag: &str, role: &str) -> Result<String, JsError> {
    let entity = Entity {
        id: EntityId(0),
        name: name.to_string(),
        pronoun: tag.to_string(),
    };
    pronoun::resolve(Some(&entity), role).map_err(|e| JsError::new(&e.to_string()))
}

/// Every role for an ad-hoc entity, as a JSON array of `{role, form}`.
#[wasm_bindgen]
pub fn pronoun_forms(name: &str, tag: &str) -> Result<String, JsError> {
    let entity = Entity {
        id: EntityId(0),
        name: name.to_string(),
        pronoun: tag.to_string(),
    };
    forms_json(&entity).map_err(serialization_error)
}

/// Demo session over the embedded cast.
#[wasm_bindgen]
pub struct PronounDemo {
    directory: EntityDirectory,
}

#[wasm_bindgen]
impl PronounDemo {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PronounDemo, JsError> {
        let directory = EntityDirectory::parse_ron(data::CAST)
            .map_err(|e| JsError::new(&format!("Cast load error: {e}")))?;
        Ok(PronounDemo { directory })
    }

    /// Resolve a role for a cast member by id.
    pub fn resolve(&self, id: u64, role: &str) -> Result<String, JsError> {
        self.directory
            .resolve(EntityId(id), role)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// All forms for a cast member, as a JSON array of `{role, form}`.
    pub fn forms(&self, id: u64) -> Result<String, JsError> {
        let entity = self
            .directory
            .get(EntityId(id))
            .ok_or_else(|| JsError::new(&format!("No entity with id {id}")))?;
        forms_json(entity).map_err(serialization_error)
    }

    /// Return a JSON description of the cast.
    pub fn get_cast(&self) -> Result<String, JsError> {
        let entities: Vec<EntityInfo> = self
            .directory
            .entities()
            .into_iter()
            .map(|e| EntityInfo {
                id: e.id.0,
                name: e.name.clone(),
                pronoun: e.pronoun.clone(),
            })
            .collect();
        serde_json::to_string(&entities)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Return JSON array of every registered role key.
    pub fn role_keys() -> String {
        let keys: Vec<&str> = pronoun::registry().keys().collect();
        serde_json::to_string(&keys).unwrap_or_else(|_| "[]".to_string())
    }

    /// Return JSON array of the recognized preference tags.
    pub fn preferences() -> String {
        let tags: Vec<&str> = Pronoun::ALL.iter().map(|p| p.tag()).collect();
        serde_json::to_string(&tags).unwrap_or_else(|_| "[]".to_string())
    }
}
