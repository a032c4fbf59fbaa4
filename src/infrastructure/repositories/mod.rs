pub mod json_organization_repository;
pub mod memory_organization_repository;

pub use json_organization_repository::JsonOrganizationRepository;
pub use memory_organization_repository::InMemoryOrganizationRepository;
