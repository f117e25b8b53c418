pub mod player_identity;
pub mod registry_builder;
