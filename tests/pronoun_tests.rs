/// Pronoun resolution integration tests — full role tables per preference.

use narrative_pronouns::core::pronoun::{registry, resolve, PronounError, PronounRegistry};
use narrative_pronouns::schema::entity::{Entity, EntityId, Pronoun, Referent};

fn fred(pronoun: &str) -> Entity {
    Entity {
        id: EntityId(1),
        name: "Fred".to_string(),
        pronoun: pronoun.to_string(),
    }
}

/// A record from some other store, reached only through `Referent`.
struct Npc {
    display: &'static str,
    tag: &'static str,
}

impl Referent for Npc {
    fn name(&self) -> &str {
        self.display
    }

    fn pronoun(&self) -> &str {
        self.tag
    }
}

fn check(entity: &Entity, expected: &[(&str, &str)]) {
    for (role, form) in expected {
        assert_eq!(
            resolve(Some(entity), role).unwrap(),
            *form,
            "pronoun '{}' role '{}'",
            entity.pronoun,
            role
        );
    }
}

#[test]
fn literal_scenarios() {
    assert_eq!(resolve(Some(&fred("he")), "we").unwrap(), "he");
    assert_eq!(resolve(Some(&fred("he")), "Our").unwrap(), "His");
    assert_eq!(resolve(Some(&fred("he")), "Ourself").unwrap(), "Himself");
    assert_eq!(resolve(Some(&fred("they")), "Us").unwrap(), "Them");
    assert_eq!(resolve(Some(&fred("they")), "s").unwrap(), "");
    assert_eq!(resolve(Some(&fred("name")), "our").unwrap(), "Fred's");
    assert_eq!(resolve(Some(&fred("name")), "Are").unwrap(), "Is");
    assert_eq!(resolve(None, "we").unwrap(), "it");
}

#[test]
fn he_forms() {
    check(
        &fred("he"),
        &[
            ("we", "he"),
            ("us", "him"),
            ("our", "his"),
            ("Our", "His"),
            ("Ours", "His"),
            ("Ourself", "Himself"),
            ("Are", "Is"),
            ("s", "s"),
            ("es", "es"),
        ],
    );
}

#[test]
fn she_forms() {
    check(
        &fred("she"),
        &[
            ("We", "She"),
            ("Us", "Her"),
            ("Our", "Her"),
            ("our", "her"),
            ("ours", "hers"),
            ("ourself", "herself"),
            ("are", "is"),
            ("s", "s"),
            ("es", "es"),
        ],
    );
}

#[test]
fn it_forms() {
    check(
        &fred("it"),
        &[
            ("we", "it"),
            ("Us", "It"),
            ("our", "its"),
            ("Ours", "Its"),
            ("ourself", "itself"),
            ("are", "is"),
            ("s", "s"),
            ("es", "es"),
        ],
    );
}

#[test]
fn name_forms() {
    check(
        &fred("name"),
        &[
            ("we", "Fred"),
            ("us", "Fred"),
            ("our", "Fred's"),
            ("Our", "Fred's"),
            ("Ours", "Fred's"),
            ("Ourself", "Fred"),
            ("Are", "Is"),
            ("s", "s"),
            ("es", "es"),
        ],
    );
}

#[test]
fn they_forms() {
    check(
        &fred("they"),
        &[
            ("We", "They"),
            ("Us", "Them"),
            ("Our", "Their"),
            ("our", "their"),
            ("ours", "theirs"),
            ("ourself", "themself"),
            ("are", "are"),
            ("s", ""),
            ("es", ""),
        ],
    );
}

#[test]
fn fixed_preferences_ignore_name() {
    let registry = registry();
    for p in [Pronoun::He, Pronoun::She, Pronoun::It, Pronoun::They] {
        let a = Entity::new(EntityId(1), "Fred", p);
        let b = Entity::new(EntityId(2), "Wilhelmina", p);
        for key in registry.keys() {
            assert_eq!(
                resolve(Some(&a), key).unwrap(),
                resolve(Some(&b), key).unwrap()
            );
        }
    }
}

#[test]
fn name_preference_concatenates_suffix() {
    let names = ["Fred", "Ada Lovelace", ""];
    let suffixes = [
        ("we", ""),
        ("We", ""),
        ("us", ""),
        ("Us", ""),
        ("our", "'s"),
        ("Our", "'s"),
        ("ours", "'s"),
        ("Ours", "'s"),
        ("ourself", ""),
        ("Ourself", ""),
    ];
    for name in names {
        let entity = Entity::new(EntityId(1), name, Pronoun::Name);
        for (role, suffix) in suffixes {
            assert_eq!(
                resolve(Some(&entity), role).unwrap(),
                format!("{}{}", name, suffix)
            );
        }
    }
}

#[test]
fn unrecognized_preference_uses_neuter() {
    assert_eq!(
        resolve(Some(&fred("xyz")), "we").unwrap(),
        resolve(Some(&fred("it")), "we").unwrap()
    );
    assert_eq!(resolve(Some(&fred("xyz")), "Ourself").unwrap(), "Itself");
    assert_eq!(resolve(Some(&fred("xyz")), "s").unwrap(), "s");
    assert_eq!(resolve(Some(&fred("xyz")), "es").unwrap(), "es");
    // Tags are case-sensitive.
    assert_eq!(resolve(Some(&fred("They")), "s").unwrap(), "s");
    assert_eq!(resolve(Some(&fred("Name")), "our").unwrap(), "its");
}

#[test]
fn unknown_role_is_distinct_from_fallback() {
    let err = resolve(Some(&fred("xyz")), "theirs").unwrap_err();
    assert_eq!(err, PronounError::UnknownRole("theirs".to_string()));
    assert_eq!(err.to_string(), "unknown pronoun role: 'theirs'");
    assert!(resolve(None, "S").is_err());
    assert!(resolve(None, "Es").is_err());
}

#[test]
fn any_referent_can_be_resolved() {
    let npc = Npc {
        display: "the ferryman",
        tag: "name",
    };
    assert_eq!(resolve(Some(&npc), "Our").unwrap(), "the ferryman's");

    let beast = Npc {
        display: "Grue",
        tag: "it",
    };
    assert_eq!(resolve(Some(&beast), "Are").unwrap(), "Is");
}

#[test]
fn local_registry_matches_shared() {
    let local = PronounRegistry::default();
    let entity = fred("she");
    for key in registry().keys() {
        assert_eq!(
            local.resolve(Some(&entity), key).unwrap(),
            resolve(Some(&entity), key).unwrap()
        );
    }
}

#[test]
fn concurrent_resolution() {
    let handles: Vec<_> = Pronoun::ALL
        .into_iter()
        .map(|p| {
            std::thread::spawn(move || {
                let entity = Entity::new(EntityId(1), "Fred", p);
                registry()
                    .keys()
                    .map(|key| resolve(Some(&entity), key).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for (p, handle) in Pronoun::ALL.into_iter().zip(handles) {
        let forms = handle.join().unwrap();
        assert_eq!(forms.len(), 14);
        let entity = Entity::new(EntityId(1), "Fred", p);
        assert_eq!(forms[0], resolve(Some(&entity), "We").unwrap());
    }
}
