pub mod panic;
pub mod validate;
