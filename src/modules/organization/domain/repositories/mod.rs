pub mod organization_repository;
