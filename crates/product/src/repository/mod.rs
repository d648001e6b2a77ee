pub mod command;
pub mod query;
pub mod schema;
