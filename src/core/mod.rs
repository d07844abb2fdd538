pub mod directory;
pub mod pronoun;
