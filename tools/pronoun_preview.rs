/// Pronoun Preview — prints every role resolved for an entity.
///
/// Usage:
///   pronoun_preview --name <name> --pronoun <tag>
///   pronoun_preview --entities <file.ron> [--id <n>]
///
/// Set RUST_LOG=debug to see neuter fallbacks.

use narrative_pronouns::core::directory::EntityDirectory;
use narrative_pronouns::core::pronoun;
use narrative_pronouns::schema::entity::{Entity, EntityId, Pronoun};
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut name = None;
    let mut pronoun_tag = None;
    let mut entities_path = None;
    let mut id = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--name" if i + 1 < args.len() => {
                i += 1;
                name = Some(args[i].clone());
            }
            "--pronoun" if i + 1 < args.len() => {
                i += 1;
                pronoun_tag = Some(args[i].clone());
            }
            "--entities" if i + 1 < args.len() => {
                i += 1;
                entities_path = Some(args[i].clone());
            }
            "--id" if i + 1 < args.len() => {
                i += 1;
                match args[i].parse::<u64>() {
                    Ok(n) => id = Some(EntityId(n)),
                    Err(_) => {
                        eprintln!("ERROR: --id expects a number, got '{}'", args[i]);
                        process::exit(1);
                    }
                }
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if let Some(ref path) = entities_path {
        let directory = match EntityDirectory::load_from_ron(Path::new(path)) {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("ERROR: Failed to load entities: {}", e);
                process::exit(1);
            }
        };

        match id {
            Some(id) => match directory.get(id) {
                Some(entity) => print_forms(entity),
                None => {
                    eprintln!("ERROR: No entity with id {} in {}", id, path);
                    process::exit(1);
                }
            },
            None => {
                println!("Loaded {} entities", directory.len());
                for entity in directory.entities() {
                    println!();
                    print_forms(entity);
                }
            }
        }
        return;
    }

    let (Some(name), Some(tag)) = (name, pronoun_tag) else {
        eprintln!("ERROR: --name and --pronoun are required without --entities");
        print_usage();
        process::exit(1);
    };

    if tag.parse::<Pronoun>().is_err() {
        eprintln!(
            "WARNING: '{}' is not a known preference; forms fall back to 'it'",
            tag
        );
    }

    let entity = Entity {
        id: EntityId(0),
        name,
        pronoun: tag,
    };
    print_forms(&entity);
}

fn print_forms(entity: &Entity) {
    println!("=== {} ({}) ===", entity.name, entity.pronoun);
    for (key, form) in pronoun::resolve_all(Some(entity)) {
        // Empty forms are shown as quotes so they stay visible.
        if form.is_empty() {
            println!("  {:<8} \"\"", key);
        } else {
            println!("  {:<8} {}", key, form);
        }
    }
}

fn print_usage() {
    println!("Usage:");
    println!("  pronoun_preview --name <name> --pronoun <he|she|it|they|name>");
    println!("  pronoun_preview --entities <file.ron> [--id <n>]");
}
