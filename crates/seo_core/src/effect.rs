use crate::{AnalysisRequest, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the request to the analysis endpoint.
    SubmitAnalysis {
        request_id: RequestId,
        request: AnalysisRequest,
    },
    /// Fetch the generated CSV behind the download link.
    DownloadCsv { request_id: RequestId, url: String },
}
