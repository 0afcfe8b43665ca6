pub mod common;
pub mod compliance;
pub mod diet;
pub mod recipe;
