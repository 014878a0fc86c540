pub mod filters;
pub mod view;

use chrono::NaiveDate;
use thiserror::Error;

use crate::patient::{Patient, PatientRoster};

pub use filters::StatusFilter;
pub use view::{DirectoryView, PatientDetail, PatientRow, RosterStats};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What happens to the current page when the search term or status filter
/// changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageResetPolicy {
    /// Leave the page untouched. A page beyond the new page count renders
    /// empty and is reported as out of range.
    #[default]
    Keep,
    FirstPage,
}

/// A discrete user input applied to the directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DirectoryEvent {
    Search(String),
    FilterStatus(StatusFilter),
    NextPage,
    PreviousPage,
    GoToPage(usize),
    View(String),
    Close,
    Add,
    Edit(String),
    Delete(String),
    Export,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("no patient with id '{id}'")]
    UnknownPatient { id: String },

    #[error("page {page} is out of range, expected 1-{last_page}")]
    PageOutOfRange { page: usize, last_page: usize },

    #[error("{action} is not implemented")]
    NotImplemented { action: String },
}

pub fn page_count(visible: usize, page_size: usize) -> usize {
    visible.div_ceil(page_size.max(1))
}

/// State of the patient directory view.
///
/// The roster never changes; everything shown is derived from the roster
/// and the search/filter/page/selection fields on each call to [`view`].
///
/// [`view`]: DirectoryState::view
#[derive(Clone, Debug)]
pub struct DirectoryState {
    roster: PatientRoster,
    search_term: String,
    status_filter: StatusFilter,
    current_page: usize,
    selected: Option<String>,
    modal_visible: bool,
    page_size: usize,
    reset_policy: PageResetPolicy,
}

impl DirectoryState {
    pub fn new(roster: PatientRoster) -> Self {
        Self {
            roster,
            search_term: String::new(),
            status_filter: StatusFilter::All,
            current_page: 1,
            selected: None,
            modal_visible: false,
            page_size: DEFAULT_PAGE_SIZE,
            reset_policy: PageResetPolicy::Keep,
        }
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_reset_policy(mut self, policy: PageResetPolicy) -> Self {
        self.reset_policy = policy;
        self
    }

    pub fn roster(&self) -> &PatientRoster {
        &self.roster
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.selected.as_deref().and_then(|id| self.roster.get(id))
    }

    pub fn visible_patients(&self) -> Vec<&Patient> {
        self.roster
            .patients()
            .iter()
            .filter(|p| filters::is_visible(p, self.status_filter, &self.search_term))
            .collect()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.visible_patients().len(), self.page_size)
    }

    fn last_page(&self) -> usize {
        self.page_count().max(1)
    }

    fn criteria_changed(&mut self) {
        if self.reset_policy == PageResetPolicy::FirstPage {
            self.current_page = 1;
        }
    }

    pub fn apply(&mut self, event: DirectoryEvent) -> Result<(), DirectoryError> {
        tracing::debug!(?event, page = self.current_page, "applying directory event");
        match event {
            DirectoryEvent::Search(term) => {
                self.search_term = term;
                self.criteria_changed();
            }
            DirectoryEvent::FilterStatus(filter) => {
                self.status_filter = filter;
                self.criteria_changed();
            }
            DirectoryEvent::NextPage => {
                self.current_page = (self.current_page + 1).min(self.last_page());
            }
            DirectoryEvent::PreviousPage => {
                self.current_page = self.current_page.saturating_sub(1).max(1);
            }
            DirectoryEvent::GoToPage(page) => {
                let last_page = self.last_page();
                if page == 0 || page > last_page {
                    return Err(DirectoryError::PageOutOfRange { page, last_page });
                }
                self.current_page = page;
            }
            DirectoryEvent::View(id) => {
                if self.roster.get(&id).is_none() {
                    return Err(DirectoryError::UnknownPatient { id });
                }
                self.selected = Some(id);
                self.modal_visible = true;
            }
            DirectoryEvent::Close => {
                self.modal_visible = false;
            }
            DirectoryEvent::Add => return Err(not_implemented("adding a patient")),
            DirectoryEvent::Edit(id) => {
                return Err(not_implemented(&format!("editing patient '{id}'")))
            }
            DirectoryEvent::Delete(id) => {
                return Err(not_implemented(&format!("deleting patient '{id}'")))
            }
            DirectoryEvent::Export => return Err(not_implemented("exporting patients")),
        }
        Ok(())
    }

    pub fn view(&self, today: NaiveDate) -> DirectoryView {
        view::build(self, today)
    }
}

fn not_implemented(action: &str) -> DirectoryError {
    tracing::warn!(action, "rejected unwired action");
    DirectoryError::NotImplemented {
        action: action.to_string(),
    }
}
