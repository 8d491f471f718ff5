pub mod aggregate;
pub mod quantity;
pub mod receipt;
