use std::time::Duration;

#[derive(Debug, Clone)]
pub struct EngineSettings {
    /// Collaborator base address, always ending in `/`.
    pub base_address: String,
    pub connect_timeout: Duration,
    /// `None` waits for the collaborator indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_download_bytes: u64,
}

impl EngineSettings {
    pub fn new(base_address: impl Into<String>) -> Self {
        Self {
            base_address: base_address.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_download_bytes: 50 * 1024 * 1024,
        }
    }

    pub(crate) fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        let mut builder = reqwest::Client::builder().connect_timeout(self.connect_timeout);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}
