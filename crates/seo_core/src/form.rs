/// Raw text of the two form inputs, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    pub urls_text: String,
    pub keywords_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Urls,
    Keywords,
}

impl FormState {
    /// First required input that is still empty, URLs before keywords.
    pub fn missing_field(&self) -> Option<FormField> {
        if self.urls_text.is_empty() {
            Some(FormField::Urls)
        } else if self.keywords_text.is_empty() {
            Some(FormField::Keywords)
        } else {
            None
        }
    }

    pub fn to_request(&self) -> AnalysisRequest {
        AnalysisRequest {
            urls: split_field(&self.urls_text),
            keywords: split_field(&self.keywords_text),
        }
    }
}

/// Payload sent to the analysis endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnalysisRequest {
    pub urls: Vec<String>,
    pub keywords: Vec<String>,
}

/// Splits on every literal `,`. Segments are kept as-is, empty ones included.
pub fn split_field(raw: &str) -> Vec<String> {
    raw.split(',').map(ToOwned::to_owned).collect()
}
