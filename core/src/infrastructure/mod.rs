pub mod diet;
pub mod nutrition;
