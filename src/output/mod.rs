pub mod plain;
pub mod report;
pub mod vivid;

use crate::directory::{DirectoryView, PatientDetail, PatientRow};
use crate::directory::view::{NO_ALLERGIES, NO_MEDICAL_HISTORY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Vivid,
    Json,
    Html,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "plain" | "text" | "txt" => Some(Self::Plain),
            "vivid" | "color" | "colour" => Some(Self::Vivid),
            "json" => Some(Self::Json),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Plain => "plain",
            OutputFormat::Vivid => "vivid",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        }
    }

    pub fn renderer(&self) -> Box<dyn Renderer + Send + Sync> {
        match self {
            OutputFormat::Plain => Box::new(plain::PlainRenderer),
            OutputFormat::Vivid => Box::new(vivid::VividRenderer),
            OutputFormat::Json => Box::new(JsonRenderer),
            OutputFormat::Html => Box::new(report::HtmlRenderer::default()),
        }
    }
}

pub fn infer_format_from_path(path: &str) -> Option<OutputFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(OutputFormat::Json);
    }
    if lower.ends_with(".html") || lower.ends_with(".htm") {
        return Some(OutputFormat::Html);
    }
    if lower.ends_with(".txt") {
        return Some(OutputFormat::Plain);
    }
    None
}

/// A presentation of the derived directory view.
pub trait Renderer {
    fn render_view(&self, view: &DirectoryView) -> String;
}

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render_view(&self, view: &DirectoryView) -> String {
        match serde_json::to_string_pretty(view) {
            Ok(mut out) => {
                out.push('\n');
                out
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize directory view");
                "{}\n".to_string()
            }
        }
    }
}

pub const TITLE: &str = "Patient Management";
pub const COLUMNS: [&str; 6] = [
    "Patient",
    "Contact",
    "Age/Gender",
    "Blood Type",
    "Status",
    "Last Visit",
];

pub(crate) fn stat_cards(view: &DirectoryView) -> [(&'static str, usize); 4] {
    [
        ("Total Patients", view.stats.total),
        ("Active Patients", view.stats.active),
        ("Pending", view.stats.pending),
        ("Inactive", view.stats.inactive),
    ]
}

/// The text cells of one table row, in [`COLUMNS`] order.
pub(crate) fn row_cells(row: &PatientRow) -> [String; 6] {
    [
        format!("[{}] {}", row.initials, row.name),
        format!("{} / {}", row.email, row.phone),
        format!("{} / {}", row.age_label(), row.gender),
        row.blood_type.clone(),
        row.status.to_string(),
        row.last_visit.clone(),
    ]
}

pub(crate) fn column_widths(rows: &[[String; 6]]) -> [usize; 6] {
    let mut widths = COLUMNS.map(|c| c.chars().count());
    for cells in rows {
        for (w, cell) in widths.iter_mut().zip(cells.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }
    widths
}

pub(crate) fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let mut out = value.to_string();
    out.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    out
}

pub(crate) struct DetailSection {
    pub title: &'static str,
    pub fields: Vec<(&'static str, Vec<String>)>,
}

/// The detail panel grouped the way every renderer lays it out.
pub(crate) fn detail_sections(detail: &PatientDetail) -> Vec<DetailSection> {
    let medical_history = if detail.medical_history.is_empty() {
        vec![NO_MEDICAL_HISTORY.to_string()]
    } else {
        detail.medical_history.clone()
    };
    let allergies = if detail.allergies.is_empty() {
        vec![NO_ALLERGIES.to_string()]
    } else {
        detail.allergies.clone()
    };

    let mut registration = vec![
        ("Registration Date", vec![detail.registration_date.clone()]),
        ("Status", vec![detail.status.to_string()]),
    ];
    if let Some(last_visit) = detail.last_visit.as_ref() {
        registration.push(("Last Visit", vec![last_visit.clone()]));
    }

    vec![
        DetailSection {
            title: "Personal Information",
            fields: vec![
                ("Age", vec![detail.age.clone()]),
                ("Date of Birth", vec![detail.date_of_birth.clone()]),
                ("Gender", vec![detail.gender.to_string()]),
                ("Blood Type", vec![detail.blood_type.clone()]),
            ],
        },
        DetailSection {
            title: "Contact Information",
            fields: vec![
                ("Email", vec![detail.email.clone()]),
                ("Phone", vec![detail.phone.clone()]),
                ("Address", detail.address_lines.clone()),
            ],
        },
        DetailSection {
            title: "Medical Information",
            fields: vec![
                ("Medical History", medical_history),
                ("Allergies", allergies),
            ],
        },
        DetailSection {
            title: "Emergency Contact",
            fields: vec![
                ("Name", vec![detail.emergency_contact.name.clone()]),
                ("Phone", vec![detail.emergency_contact.phone.clone()]),
                (
                    "Relationship",
                    vec![detail.emergency_contact.relationship.clone()],
                ),
            ],
        },
        DetailSection {
            title: "Registration Details",
            fields: registration,
        },
    ]
}

pub fn render(format: OutputFormat, view: &DirectoryView) -> String {
    format.renderer().render_view(view)
}
