pub mod organization_repository;

pub use organization_repository::{OrganizationRepository, RepositoryError};
