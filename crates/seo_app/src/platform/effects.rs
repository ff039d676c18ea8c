use std::path::PathBuf;

use engine_logging::{engine_info, engine_warn};
use seo_core::{Effect, Msg};
use seo_engine::{EngineEvent, EngineHandle};

/// Executes core effects on the engine and turns engine events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    download_dir: PathBuf,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, download_dir: PathBuf) -> Self {
        Self {
            engine,
            download_dir,
        }
    }

    /// Hands effects to the engine. Effects the engine refuses come back as
    /// failure messages so the form never stays pending.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut feedback = Vec::new();
        for effect in effects {
            match effect {
                Effect::SubmitAnalysis {
                    request_id,
                    request,
                } => {
                    engine_info!(
                        "SubmitAnalysis request_id={} urls={} keywords={}",
                        request_id,
                        request.urls.len(),
                        request.keywords.len()
                    );
                    if let Err(err) = self.engine.submit(request_id, to_wire(request)) {
                        engine_warn!("Submit request_id={} not sent: {}", request_id, err);
                        feedback.push(Msg::AnalysisFailed {
                            request_id,
                            reported_error: None,
                        });
                    }
                }
                Effect::DownloadCsv { request_id, url } => {
                    engine_info!("DownloadCsv request_id={} url={}", request_id, url);
                    let dir = self.download_dir.clone();
                    if let Err(err) = self.engine.download(request_id, url, dir) {
                        engine_warn!("Download request_id={} not sent: {}", request_id, err);
                        feedback.push(Msg::DownloadFinished {
                            request_id,
                            outcome: Err(err.to_string()),
                        });
                    }
                }
            }
        }
        feedback
    }

    pub fn drain_messages(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(map_event)
            .collect()
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

fn to_wire(request: seo_core::AnalysisRequest) -> seo_engine::AnalysisRequest {
    seo_engine::AnalysisRequest {
        urls: request.urls,
        keywords: request.keywords,
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Ok(reply),
        } => Msg::AnalysisSucceeded {
            request_id,
            message: reply.message,
            csv_path: reply.csv,
        },
        EngineEvent::AnalysisCompleted {
            request_id,
            result: Err(err),
        } => {
            engine_warn!("Analysis request_id={} failed: {}", request_id, err);
            Msg::AnalysisFailed {
                request_id,
                reported_error: err.reported_error().map(ToOwned::to_owned),
            }
        }
        EngineEvent::DownloadCompleted {
            request_id,
            result: Ok(path),
        } => Msg::DownloadFinished {
            request_id,
            outcome: Ok(path.display().to_string()),
        },
        EngineEvent::DownloadCompleted {
            request_id,
            result: Err(err),
        } => {
            engine_warn!("Download request_id={} failed: {}", request_id, err);
            Msg::DownloadFinished {
                request_id,
                outcome: Err(err.kind.to_string()),
            }
        }
    }
}
