use crate::view_model::AppViewModel;
use crate::{AnalysisRequest, FormField, FormState};

/// Generation number attached to each submission.
pub type RequestId = u64;

pub const DEFAULT_BASE_ADDRESS: &str = "http://127.0.0.1:5000/";
pub const IN_PROGRESS_MESSAGE: &str = "Processing...";
pub const ERROR_PREFIX: &str = "Error: ";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

/// Download links are the base address and the returned path glued together as-is.
pub fn download_link(base_address: &str, csv_path: &str) -> String {
    format!("{base_address}{csv_path}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    base_address: String,
    form: FormState,
    phase: Phase,
    message: String,
    download_path: Option<String>,
    download_note: Option<String>,
    missing_field: Option<FormField>,
    latest_request: RequestId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_ADDRESS)
    }
}

impl AppState {
    pub fn new(base_address: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            form: FormState::default(),
            phase: Phase::Idle,
            message: String::new(),
            download_path: None,
            download_note: None,
            missing_field: None,
            latest_request: 0,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            urls_text: self.form.urls_text.clone(),
            keywords_text: self.form.keywords_text.clone(),
            phase: self.phase,
            message: (!self.message.is_empty()).then(|| self.message.clone()),
            download_link: self
                .download_path
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(|path| download_link(&self.base_address, path)),
            missing_field: self.missing_field,
            download_note: self.download_note.clone(),
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn latest_request(&self) -> RequestId {
        self.latest_request
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_urls_text(&mut self, text: String) {
        if self.form.urls_text != text {
            self.form.urls_text = text;
            self.clear_hint_if_resolved();
            self.dirty = true;
        }
    }

    pub(crate) fn set_keywords_text(&mut self, text: String) {
        if self.form.keywords_text != text {
            self.form.keywords_text = text;
            self.clear_hint_if_resolved();
            self.dirty = true;
        }
    }

    pub(crate) fn flag_missing(&mut self, field: FormField) {
        self.missing_field = Some(field);
        self.dirty = true;
    }

    /// Enters `Pending` and hands out the next generation number.
    pub(crate) fn begin_submission(&mut self) -> (RequestId, AnalysisRequest) {
        self.latest_request += 1;
        self.phase = Phase::Pending;
        self.message = IN_PROGRESS_MESSAGE.to_string();
        self.download_path = None;
        self.download_note = None;
        self.missing_field = None;
        self.dirty = true;
        (self.latest_request, self.form.to_request())
    }

    pub(crate) fn is_latest(&self, request_id: RequestId) -> bool {
        request_id == self.latest_request
    }

    pub(crate) fn apply_success(&mut self, message: String, csv_path: String) {
        self.phase = Phase::Succeeded;
        self.message = message;
        self.download_path = Some(csv_path);
        self.dirty = true;
    }

    pub(crate) fn apply_failure(&mut self, reported_error: Option<String>) {
        let detail = reported_error
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string());
        self.phase = Phase::Failed;
        self.message = format!("{ERROR_PREFIX}{detail}");
        self.download_path = None;
        self.dirty = true;
    }

    pub(crate) fn current_download_link(&self) -> Option<String> {
        self.view().download_link
    }

    pub(crate) fn set_download_note(&mut self, note: String) {
        self.download_note = Some(note);
        self.dirty = true;
    }

    fn clear_hint_if_resolved(&mut self) {
        let resolved = match self.missing_field {
            Some(FormField::Urls) => !self.form.urls_text.is_empty(),
            Some(FormField::Keywords) => !self.form.keywords_text.is_empty(),
            None => false,
        };
        if resolved {
            self.missing_field = None;
        }
    }
}
