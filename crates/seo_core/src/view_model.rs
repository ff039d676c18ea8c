use crate::{FormField, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub urls_text: String,
    pub keywords_text: String,
    pub phase: Phase,
    /// Status line; `None` while there is nothing to say.
    pub message: Option<String>,
    /// Absolute download link, present only after a successful analysis.
    pub download_link: Option<String>,
    pub missing_field: Option<FormField>,
    pub download_note: Option<String>,
}
