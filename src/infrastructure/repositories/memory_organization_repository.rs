use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::organization::Organization;
use crate::domain::repositories::organization_repository::{
    OrganizationRepository, RepositoryError, Result,
};

/// In-memory implementation of OrganizationRepository.
/// Useful for testing or for callers that already hold their organizations.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrganizationRepository {
    organizations: Arc<RwLock<HashMap<u64, Organization>>>,
}

impl InMemoryOrganizationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organizations(organizations: impl IntoIterator<Item = Organization>) -> Self {
        let repository = Self::new();
        for org in organizations {
            repository.insert(org);
        }
        repository
    }

    /// Adds or replaces an organization by id
    pub fn insert(&self, organization: Organization) {
        if let Ok(mut map) = self.organizations.write() {
            map.insert(organization.id, organization);
        }
    }
}

impl OrganizationRepository for InMemoryOrganizationRepository {
    fn list(&self) -> Result<Vec<Organization>> {
        let map = self
            .organizations
            .read()
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        let mut organizations: Vec<Organization> = map.values().cloned().collect();
        organizations.sort_by_key(|org| org.id);
        Ok(organizations)
    }

    fn get(&self, organization_id: u64) -> Result<Option<Organization>> {
        let map = self
            .organizations
            .read()
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        Ok(map.get(&organization_id).cloned())
    }
}
