use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::entities::organization::Organization;
use crate::domain::repositories::organization_repository::{
    OrganizationRepository, RepositoryError, Result,
};
use crate::infrastructure::dto::OrganizationDto;

/// Organizations loaded once from a JSON array of organization records
pub struct JsonOrganizationRepository {
    file_path: PathBuf,
    organizations: Vec<Organization>,
}

impl JsonOrganizationRepository {
    /// Reads the file; a missing file yields an empty repository
    pub fn open(file_path: impl Into<PathBuf>) -> Result<Self> {
        let file_path = file_path.into();
        let organizations = Self::load_data(&file_path)?;
        debug!(
            path = %file_path.display(),
            count = organizations.len(),
            "Loaded organizations"
        );

        Ok(Self {
            file_path,
            organizations,
        })
    }

    fn load_data(file_path: &Path) -> Result<Vec<Organization>> {
        if !file_path.exists() {
            warn!(path = %file_path.display(), "Organizations file not found, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(file_path)
            .map_err(|e| RepositoryError::StorageError(e.to_string()))?;
        let records: Vec<OrganizationDto> = serde_json::from_str(&content)
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let mut organizations: Vec<Organization> = records
            .into_iter()
            .map(OrganizationDto::into_organization)
            .collect();
        organizations.sort_by_key(|org| org.id);
        Ok(organizations)
    }
}

impl OrganizationRepository for JsonOrganizationRepository {
    fn list(&self) -> Result<Vec<Organization>> {
        Ok(self.organizations.clone())
    }

    fn get(&self, organization_id: u64) -> Result<Option<Organization>> {
        Ok(self
            .organizations
            .iter()
            .find(|org| org.id == organization_id)
            .cloned())
    }
}

impl std::fmt::Debug for JsonOrganizationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonOrganizationRepository")
            .field("file_path", &self.file_path)
            .field("organizations", &self.organizations.len())
            .finish()
    }
}
