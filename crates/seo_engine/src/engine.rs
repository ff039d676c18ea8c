use std::future::Future;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_debug, engine_info, engine_warn};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::{
    AnalysisClient, AnalysisRequest, CsvDownloader, EngineEvent, EngineSettings, FailureKind,
    ReqwestAnalysisClient, RequestError, RequestId,
};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] RequestError),
    #[error("failed to spawn engine thread: {0}")]
    Thread(std::io::Error),
    #[error("engine is no longer accepting work")]
    Stopped,
}

enum EngineCommand {
    Submit {
        request_id: RequestId,
        request: AnalysisRequest,
    },
    Download {
        request_id: RequestId,
        url: String,
        dir: PathBuf,
    },
}

/// Runs requests on a background runtime; results come back through [`EngineHandle::try_recv`].
///
/// Every command runs independently, so overlapping submissions are all sent.
/// Dropping the handle cancels whatever is still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let client: Arc<dyn AnalysisClient> =
            Arc::new(ReqwestAnalysisClient::new(settings.clone())?);
        Self::with_client(client, settings)
    }

    pub fn with_client(
        client: Arc<dyn AnalysisClient>,
        settings: EngineSettings,
    ) -> Result<Self, EngineError> {
        let downloader = Arc::new(CsvDownloader::new(&settings)?);
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_cancel = cancel.clone();

        thread::Builder::new()
            .name("seo-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let client = client.clone();
                    let downloader = downloader.clone();
                    let event_tx = event_tx.clone();
                    let cancel = worker_cancel.clone();
                    runtime.spawn(async move {
                        let event =
                            handle_command(client.as_ref(), &downloader, command, &cancel).await;
                        let _ = event_tx.send(event);
                    });
                }
                engine_debug!("Engine command channel closed");
            })
            .map_err(EngineError::Thread)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
        })
    }

    pub fn submit(
        &self,
        request_id: RequestId,
        request: AnalysisRequest,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Submit {
            request_id,
            request,
        })
    }

    pub fn download(
        &self,
        request_id: RequestId,
        url: impl Into<String>,
        dir: PathBuf,
    ) -> Result<(), EngineError> {
        self.send(EngineCommand::Download {
            request_id,
            url: url.into(),
            dir,
        })
    }

    /// Fails once the handle was shut down or the worker thread is gone.
    fn send(&self, command: EngineCommand) -> Result<(), EngineError> {
        if self.cancel.is_cancelled() {
            engine_warn!("Engine command rejected after shutdown");
            return Err(EngineError::Stopped);
        }
        self.cmd_tx.send(command).map_err(|_| {
            engine_warn!("Engine worker thread is gone; command dropped");
            EngineError::Stopped
        })
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Aborts all in-flight work; each aborted command reports `Cancelled`.
    pub fn shutdown(&self) {
        if !self.cancel.is_cancelled() {
            engine_info!("Cancelling in-flight engine work");
            self.cancel.cancel();
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}

async fn handle_command(
    client: &dyn AnalysisClient,
    downloader: &CsvDownloader,
    command: EngineCommand,
    cancel: &CancellationToken,
) -> EngineEvent {
    match command {
        EngineCommand::Submit {
            request_id,
            request,
        } => {
            engine_debug!("Sending request_id={}", request_id);
            let result = cancellable(cancel, client.submit(&request)).await;
            EngineEvent::AnalysisCompleted { request_id, result }
        }
        EngineCommand::Download {
            request_id,
            url,
            dir,
        } => {
            engine_debug!("Downloading request_id={} url={}", request_id, url);
            let result = cancellable(cancel, downloader.download(&url, &dir)).await;
            EngineEvent::DownloadCompleted { request_id, result }
        }
    }
}

async fn cancellable<T>(
    cancel: &CancellationToken,
    work: impl Future<Output = Result<T, RequestError>>,
) -> Result<T, RequestError> {
    tokio::select! {
        _ = cancel.cancelled() => {
            Err(RequestError::new(FailureKind::Cancelled, "engine shut down"))
        }
        result = work => result,
    }
}
