pub mod mappers;
pub mod repositories;

pub use repositories::json_diet_repository::JsonDietRepository;
