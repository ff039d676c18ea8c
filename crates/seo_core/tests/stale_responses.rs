use seo_core::{update, AppState, Effect, Msg, Phase};

fn filled() -> AppState {
    let (state, _) = update(AppState::default(), Msg::UrlsChanged("https://a.com".into()));
    update(state, Msg::KeywordsChanged("seo".into())).0
}

#[test]
fn late_response_from_older_request_is_discarded() {
    let (state, _) = update(filled(), Msg::SubmitClicked);
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.latest_request(), 2);

    // Second request resolves first.
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 2,
            message: "Second".into(),
            csv_path: "second.csv".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id: 1,
            reported_error: Some("First".into()),
        },
    );

    let view = state.view();
    assert_eq!(view.phase, Phase::Succeeded);
    assert_eq!(view.message.as_deref(), Some("Second"));
    assert_eq!(
        view.download_link.as_deref(),
        Some("http://127.0.0.1:5000/second.csv")
    );
}

#[test]
fn stale_success_does_not_end_pending() {
    let (state, _) = update(filled(), Msg::SubmitClicked);
    let (mut state, _) = update(state, Msg::SubmitClicked);
    assert!(state.consume_dirty());

    let (mut state, effects) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            message: "Old".into(),
            csv_path: "old.csv".into(),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.phase(), Phase::Pending);
    assert_eq!(state.view().download_link, None);
}

#[test]
fn download_requires_link_and_targets_latest_request() {
    let (state, effects) = update(filled(), Msg::DownloadClicked);
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            message: "Done".into(),
            csv_path: "files/out.csv".into(),
        },
    );
    let (state, effects) = update(state, Msg::DownloadClicked);
    assert_eq!(
        effects,
        vec![Effect::DownloadCsv {
            request_id: 1,
            url: "http://127.0.0.1:5000/files/out.csv".into(),
        }]
    );

    let (state, _) = update(
        state,
        Msg::DownloadFinished {
            request_id: 1,
            outcome: Ok("downloads/out.csv".into()),
        },
    );
    assert_eq!(
        state.view().download_note.as_deref(),
        Some("Saved to downloads/out.csv")
    );

    // A resubmit clears the note and ignores the old download's result.
    let (state, _) = update(state, Msg::SubmitClicked);
    assert_eq!(state.view().download_note, None);
    let (state, _) = update(
        state,
        Msg::DownloadFinished {
            request_id: 1,
            outcome: Err("network error".into()),
        },
    );
    assert_eq!(state.view().download_note, None);
}

#[test]
fn download_failure_is_reported() {
    let (state, _) = update(filled(), Msg::SubmitClicked);
    let (state, _) = update(
        state,
        Msg::AnalysisSucceeded {
            request_id: 1,
            message: "Done".into(),
            csv_path: "out.csv".into(),
        },
    );
    let (state, _) = update(
        state,
        Msg::DownloadFinished {
            request_id: 1,
            outcome: Err("http status 404".into()),
        },
    );

    assert_eq!(
        state.view().download_note.as_deref(),
        Some("Download failed: http status 404")
    );
}
