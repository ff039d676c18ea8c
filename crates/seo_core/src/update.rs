use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::UrlsChanged(text) => {
            state.set_urls_text(text);
            Vec::new()
        }
        Msg::KeywordsChanged(text) => {
            state.set_keywords_text(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Required inputs block submission before anything else changes.
            if let Some(field) = state.form().missing_field() {
                state.flag_missing(field);
                return (state, Vec::new());
            }
            let (request_id, request) = state.begin_submission();
            vec![Effect::SubmitAnalysis {
                request_id,
                request,
            }]
        }
        Msg::AnalysisSucceeded {
            request_id,
            message,
            csv_path,
        } => {
            // Completions of superseded submissions are dropped.
            if state.is_latest(request_id) {
                state.apply_success(message, csv_path);
            }
            Vec::new()
        }
        Msg::AnalysisFailed {
            request_id,
            reported_error,
        } => {
            if state.is_latest(request_id) {
                state.apply_failure(reported_error);
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.current_download_link() {
            Some(url) => vec![Effect::DownloadCsv {
                request_id: state.latest_request(),
                url,
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished {
            request_id,
            outcome,
        } => {
            if state.is_latest(request_id) {
                let note = match outcome {
                    Ok(path) => format!("Saved to {path}"),
                    Err(reason) => format!("Download failed: {reason}"),
                };
                state.set_download_note(note);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
