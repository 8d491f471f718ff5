pub mod details;
pub mod edit;
pub mod form;
pub mod list;
pub mod receipt;
