use chrono::NaiveDate;
use serde::Serialize;

use super::{page_count, DirectoryState, StatusFilter};
use crate::display::{self, AvatarColor};
use crate::patient::{EmergencyContact, Gender, Patient, PatientRoster, PatientStatus};

pub const NO_MEDICAL_HISTORY: &str = "No medical history recorded";
pub const NO_ALLERGIES: &str = "No known allergies";
pub const UNKNOWN_AGE: &str = "Unknown";

/// Head counts over the whole roster, independent of search and filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub inactive: usize,
}

impl RosterStats {
    pub fn from_roster(roster: &PatientRoster) -> Self {
        let mut stats = RosterStats {
            total: roster.len(),
            ..Default::default()
        };
        for p in roster.patients() {
            match p.status {
                PatientStatus::Active => stats.active += 1,
                PatientStatus::Pending => stats.pending += 1,
                PatientStatus::Inactive => stats.inactive += 1,
            }
        }
        stats
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientRow {
    pub id: String,
    pub name: String,
    pub initials: String,
    pub avatar: AvatarColor,
    pub email: String,
    pub phone: String,
    pub age: Option<i32>,
    pub gender: Gender,
    pub blood_type: String,
    pub status: PatientStatus,
    pub last_visit: String,
}

impl PatientRow {
    fn build(patient: &Patient, today: NaiveDate) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.full_name(),
            initials: display::avatar_initials(&patient.first_name, &patient.last_name),
            avatar: AvatarColor::for_names(&patient.first_name, &patient.last_name),
            email: patient.email.clone(),
            phone: patient.phone.clone(),
            age: display::age(&patient.date_of_birth, today),
            gender: patient.gender,
            blood_type: patient.blood_type.clone(),
            status: patient.status,
            last_visit: display::format_date(patient.last_visit.as_deref()),
        }
    }

    pub fn age_label(&self) -> String {
        match self.age {
            Some(age) => format!("{age} years"),
            None => UNKNOWN_AGE.to_string(),
        }
    }
}

/// Everything the detail panel shows for the selected patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientDetail {
    pub id: String,
    pub full_name: String,
    pub initials: String,
    pub avatar: AvatarColor,
    pub status: PatientStatus,
    pub age: String,
    pub date_of_birth: String,
    pub gender: Gender,
    pub blood_type: String,
    pub email: String,
    pub phone: String,
    pub address_lines: Vec<String>,
    pub medical_history: Vec<String>,
    pub allergies: Vec<String>,
    pub emergency_contact: EmergencyContact,
    pub registration_date: String,
    pub last_visit: Option<String>,
}

impl PatientDetail {
    pub fn build(patient: &Patient, today: NaiveDate) -> Self {
        let age = match display::age(&patient.date_of_birth, today) {
            Some(age) => format!("{age} years old"),
            None => UNKNOWN_AGE.to_string(),
        };
        let address = &patient.address;
        Self {
            id: patient.id.clone(),
            full_name: patient.full_name(),
            initials: display::avatar_initials(&patient.first_name, &patient.last_name),
            avatar: AvatarColor::for_names(&patient.first_name, &patient.last_name),
            status: patient.status,
            age,
            date_of_birth: display::format_date(Some(&patient.date_of_birth)),
            gender: patient.gender,
            blood_type: patient.blood_type.clone(),
            email: patient.email.clone(),
            phone: patient.phone.clone(),
            address_lines: vec![
                address.street.clone(),
                format!("{}, {} {}", address.city, address.state, address.zip_code),
                address.country.clone(),
            ],
            medical_history: patient.medical_history.clone(),
            allergies: patient.allergies.clone(),
            emergency_contact: patient.emergency_contact.clone(),
            registration_date: display::format_date(Some(&patient.registration_date)),
            last_visit: patient
                .last_visit
                .as_deref()
                .map(|d| display::format_date(Some(d))),
        }
    }
}

/// The derived view of a [`DirectoryState`] at one moment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DirectoryView {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub stats: RosterStats,
    pub rows: Vec<PatientRow>,
    pub visible_count: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub current_page: usize,
    pub page_numbers: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
    pub first_row: usize,
    pub last_row: usize,
    pub page_out_of_range: bool,
    pub detail: Option<PatientDetail>,
}

impl DirectoryView {
    pub fn showing_line(&self) -> String {
        if self.rows.is_empty() {
            return format!("Showing 0 of {} results", self.visible_count);
        }
        format!(
            "Showing {} to {} of {} results",
            self.first_row, self.last_row, self.visible_count
        )
    }

    /// Message for a page without rows, if the current page has none.
    pub fn empty_message(&self) -> Option<String> {
        if !self.rows.is_empty() {
            return None;
        }
        if self.page_out_of_range {
            return Some(format!(
                "Page {} is past the last page ({}) for the current search",
                self.current_page,
                self.page_count.max(1)
            ));
        }
        Some("No patients match the current search".to_string())
    }
}

pub(super) fn build(state: &DirectoryState, today: NaiveDate) -> DirectoryView {
    let visible = state.visible_patients();
    let visible_count = visible.len();
    let page_size = state.page_size();
    let pages = page_count(visible_count, page_size);
    let current_page = state.current_page();

    let offset = (current_page - 1).saturating_mul(page_size);
    let rows: Vec<PatientRow> = visible
        .iter()
        .skip(offset)
        .take(page_size)
        .map(|p| PatientRow::build(p, today))
        .collect();

    let (first_row, last_row) = if rows.is_empty() {
        (0, 0)
    } else {
        (offset + 1, offset + rows.len())
    };

    let detail = if state.is_modal_visible() {
        state
            .selected_patient()
            .map(|p| PatientDetail::build(p, today))
    } else {
        None
    };

    DirectoryView {
        search_term: state.search_term().to_string(),
        status_filter: state.status_filter(),
        stats: RosterStats::from_roster(state.roster()),
        rows,
        visible_count,
        page_size,
        page_count: pages,
        current_page,
        page_numbers: (1..=pages).collect(),
        has_previous: current_page > 1,
        has_next: current_page < pages,
        first_row,
        last_row,
        page_out_of_range: current_page > pages.max(1),
        detail,
    }
}
