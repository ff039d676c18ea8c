//! SEO analysis engine: HTTP client for the analysis endpoint and effect execution.
mod client;
mod download;
mod endpoint;
mod engine;
mod persist;
mod settings;
mod types;

pub use client::{AnalysisClient, ReqwestAnalysisClient};
pub use download::{CsvDownloader, DEFAULT_CSV_FILENAME};
pub use endpoint::{analysis_endpoint, normalize_base_address, ANALYSIS_PATH};
pub use engine::{EngineError, EngineHandle};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use settings::EngineSettings;
pub use types::{
    AnalysisReply, AnalysisRequest, EngineEvent, FailureKind, RequestError, RequestId,
};
