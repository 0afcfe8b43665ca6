pub mod json_diet_repository;
