pub mod seed;

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use seed::seed_patients;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatientStatus {
    Active,
    Inactive,
    Pending,
}

impl PatientStatus {
    pub const ALL: [PatientStatus; 3] = [
        PatientStatus::Active,
        PatientStatus::Inactive,
        PatientStatus::Pending,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "ACTIVE",
            PatientStatus::Inactive => "INACTIVE",
            PatientStatus::Pending => "PENDING",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "pending" => Some(Self::Pending),
            _ => None,
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// A single patient record.
///
/// Dates are calendar date strings (`YYYY-MM-DD`) kept as given; they are only
/// interpreted when derived display fields are computed.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub address: Address,
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub medical_history: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub blood_type: String,
    pub status: PatientStatus,
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Error)]
pub enum PatientLoadError {
    #[error("failed to read patients file: {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse patients file as JSON: {path}: {source}")]
    ParseJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse patients file as YAML: {path}: {source}")]
    ParseYaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unsupported patients file extension: {path} (expected .json, .yml or .yaml)")]
    UnsupportedExtension { path: String },

    #[error("duplicate patient id: {id}")]
    DuplicateId { id: String },
}

/// The immutable list of patients browsed during a session.
///
/// Cloning is cheap; clones share the same records.
#[derive(Clone, Debug)]
pub struct PatientRoster {
    patients: Arc<[Patient]>,
}

impl PatientRoster {
    pub fn new(patients: Vec<Patient>) -> Result<Self, PatientLoadError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for p in patients.iter() {
            if !seen.insert(p.id.as_str()) {
                return Err(PatientLoadError::DuplicateId { id: p.id.clone() });
            }
        }
        Ok(Self {
            patients: patients.into(),
        })
    }

    pub fn seeded() -> Self {
        Self {
            patients: seed_patients().into(),
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn get(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

pub fn load_patients(path: &Path) -> Result<PatientRoster, PatientLoadError> {
    let shown = path.display().to_string();
    let lower = shown.to_lowercase();
    let contents = std::fs::read_to_string(path).map_err(|e| PatientLoadError::FileRead {
        path: shown.clone(),
        source: e,
    })?;

    let patients: Vec<Patient> = if lower.ends_with(".json") {
        serde_json::from_str(&contents).map_err(|e| PatientLoadError::ParseJson {
            path: shown.clone(),
            source: e,
        })?
    } else if lower.ends_with(".yml") || lower.ends_with(".yaml") {
        serde_yaml::from_str(&contents).map_err(|e| PatientLoadError::ParseYaml {
            path: shown.clone(),
            source: e,
        })?
    } else {
        return Err(PatientLoadError::UnsupportedExtension { path: shown });
    };

    let roster = PatientRoster::new(patients)?;
    tracing::info!(path = %shown, count = roster.len(), "loaded patients file");
    Ok(roster)
}
