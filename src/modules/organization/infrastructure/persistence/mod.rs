pub mod organization_repository_impl;

pub use organization_repository_impl::OrganizationRepositoryImpl;
