use std::fmt::Debug;

use crate::domain::entities::organization::Organization;

#[derive(Debug)]
pub enum RepositoryError {
    NotFound(u64),
    InvalidData(String),
    StorageError(String),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RepositoryError::NotFound(id) => write!(f, "Organization {} not found", id),
            RepositoryError::InvalidData(msg) => write!(f, "Invalid data: {}", msg),
            RepositoryError::StorageError(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Read-only source of organizations and their meeting rules
pub trait OrganizationRepository: Send + Sync + Debug {
    /// All organizations, ordered by id
    fn list(&self) -> Result<Vec<Organization>>;

    /// Obtain an organization by its ID
    fn get(&self, organization_id: u64) -> Result<Option<Organization>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|org| org.id == organization_id))
    }

    /// Like `get`, but a missing organization is an error
    fn require(&self, organization_id: u64) -> Result<Organization> {
        self.get(organization_id)?
            .ok_or(RepositoryError::NotFound(organization_id))
    }
}
