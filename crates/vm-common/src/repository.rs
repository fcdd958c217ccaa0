use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Opportunity, Organization, Volunteer};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read store file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed store document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Candidate records, behind a trait so the engine never learns where they
/// come from.
pub trait OpportunityRepository {
    fn list_all(&self) -> Result<Vec<Opportunity>, StoreError>;
    fn get_by_id(&self, id: i64) -> Result<Option<Opportunity>, StoreError>;
}

pub trait VolunteerRepository {
    fn list_all(&self) -> Result<Vec<Volunteer>, StoreError>;
    fn get_by_id(&self, id: i64) -> Result<Option<Volunteer>, StoreError>;
}

/// Owner lookup, used only to decorate results with an organization name.
pub trait OrganizationDirectory {
    fn get_by_id(&self, id: i64) -> Result<Option<Organization>, StoreError>;
}

/// The flat-file document layout: three record arrays, each optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub volunteers: Vec<Volunteer>,
    #[serde(default)]
    pub opportunities: Vec<Opportunity>,
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

/// In-memory view over a JSON flat file. The whole document is read once at
/// open; lookups are linear scans, which is fine at flat-file scale.
#[derive(Debug, Clone, Default)]
pub struct JsonFileStore {
    document: StoreDocument,
}

impl JsonFileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let raw = fs::read_to_string(path)?;
        let document: StoreDocument = serde_json::from_str(&raw)?;
        Ok(Self { document })
    }

    pub fn from_document(document: StoreDocument) -> Self {
        Self { document }
    }

    pub fn volunteers(&self) -> &[Volunteer] {
        &self.document.volunteers
    }

    pub fn opportunities(&self) -> &[Opportunity] {
        &self.document.opportunities
    }
}

impl OpportunityRepository for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Opportunity>, StoreError> {
        Ok(self.document.opportunities.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Opportunity>, StoreError> {
        Ok(self
            .document
            .opportunities
            .iter()
            .find(|o| o.id == Some(id))
            .cloned())
    }
}

impl VolunteerRepository for JsonFileStore {
    fn list_all(&self) -> Result<Vec<Volunteer>, StoreError> {
        Ok(self.document.volunteers.clone())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Volunteer>, StoreError> {
        Ok(self
            .document
            .volunteers
            .iter()
            .find(|v| v.id == Some(id))
            .cloned())
    }
}

impl OrganizationDirectory for JsonFileStore {
    fn get_by_id(&self, id: i64) -> Result<Option<Organization>, StoreError> {
        Ok(self
            .document
            .organizations
            .iter()
            .find(|o| o.id == Some(id))
            .cloned())
    }
}
