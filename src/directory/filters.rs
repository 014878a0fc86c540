use serde::Serialize;

use crate::patient::{Patient, PatientStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Inactive,
    Pending,
}

impl StatusFilter {
    pub const OPTIONS: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Inactive,
        StatusFilter::Pending,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" | "" => Some(Self::All),
            other => PatientStatus::parse(other).map(Self::from),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "ALL",
            StatusFilter::Active => "ACTIVE",
            StatusFilter::Inactive => "INACTIVE",
            StatusFilter::Pending => "PENDING",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Status",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
            StatusFilter::Pending => "Pending",
        }
    }

    pub fn matches(&self, status: PatientStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == PatientStatus::Active,
            StatusFilter::Inactive => status == PatientStatus::Inactive,
            StatusFilter::Pending => status == PatientStatus::Pending,
        }
    }
}

impl From<PatientStatus> for StatusFilter {
    fn from(status: PatientStatus) -> Self {
        match status {
            PatientStatus::Active => StatusFilter::Active,
            PatientStatus::Inactive => StatusFilter::Inactive,
            PatientStatus::Pending => StatusFilter::Pending,
        }
    }
}

/// Names and email match case-insensitively; the phone number only matches
/// the term literally.
pub fn matches_search(patient: &Patient, term: &str) -> bool {
    let needle = term.to_lowercase();
    patient.first_name.to_lowercase().contains(&needle)
        || patient.last_name.to_lowercase().contains(&needle)
        || patient.email.to_lowercase().contains(&needle)
        || patient.phone.contains(term)
}

pub fn is_visible(patient: &Patient, filter: StatusFilter, term: &str) -> bool {
    filter.matches(patient.status) && matches_search(patient, term)
}
