/// Database connections and table creation
pub mod database;

/// Connection parameters loaded from a TOML or YAML file
pub mod connection_file;
