use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    UrlsChanged(String),
    /// User edited the keyword input.
    KeywordsChanged(String),
    /// User activated the submit control.
    SubmitClicked,
    /// Collaborator accepted the request.
    AnalysisSucceeded {
        request_id: RequestId,
        message: String,
        csv_path: String,
    },
    /// Request failed; `reported_error` is the collaborator's own error text, if any.
    AnalysisFailed {
        request_id: RequestId,
        reported_error: Option<String>,
    },
    /// User asked to save the CSV behind the download link.
    DownloadClicked,
    /// Download finished; `Ok` carries the saved path, `Err` the reason.
    DownloadFinished {
        request_id: RequestId,
        outcome: Result<String, String>,
    },
    NoOp,
}
