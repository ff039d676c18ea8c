use std::sync::Once;

use pretty_assertions::assert_eq;
use seo_core::{
    update, AnalysisRequest, AppState, Effect, FormField, Msg, Phase, RequestId,
    DEFAULT_BASE_ADDRESS, IN_PROGRESS_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn filled(urls: &str, keywords: &str) -> AppState {
    let (state, _) = update(AppState::default(), Msg::UrlsChanged(urls.to_string()));
    let (state, _) = update(state, Msg::KeywordsChanged(keywords.to_string()));
    state
}

fn submit(state: AppState) -> (AppState, RequestId) {
    let (state, effects) = update(state, Msg::SubmitClicked);
    match effects.as_slice() {
        [Effect::SubmitAnalysis { request_id, .. }] => {
            let id = *request_id;
            (state, id)
        }
        other => panic!("expected one submit effect, got {other:?}"),
    }
}

fn succeed(state: AppState, request_id: RequestId, message: &str, csv: &str) -> AppState {
    update(
        state,
        Msg::AnalysisSucceeded {
            request_id,
            message: message.to_string(),
            csv_path: csv.to_string(),
        },
    )
    .0
}

#[test]
fn submit_emits_request_split_on_commas() {
    init_logging();
    let state = filled("https://a.com,https://b.com", "seo,rank");

    let (_state, effects) = update(state, Msg::SubmitClicked);

    assert_eq!(
        effects,
        vec![Effect::SubmitAnalysis {
            request_id: 1,
            request: AnalysisRequest {
                urls: vec!["https://a.com".to_string(), "https://b.com".to_string()],
                keywords: vec!["seo".to_string(), "rank".to_string()],
            },
        }]
    );
}

#[test]
fn submit_sets_progress_and_clears_previous_link() {
    init_logging();
    let (state, id) = submit(filled("https://a.com", "seo"));
    let state = succeed(state, id, "Done", "files/out.csv");
    assert!(state.view().download_link.is_some());

    let (mut state, _effects) = update(state, Msg::SubmitClicked);
    let view = state.view();

    assert_eq!(view.phase, Phase::Pending);
    assert_eq!(view.message.as_deref(), Some(IN_PROGRESS_MESSAGE));
    assert_eq!(view.download_link, None);
    assert!(state.consume_dirty());
}

#[test]
fn success_shows_message_and_download_link() {
    init_logging();
    let (state, id) = submit(filled("https://a.com", "seo"));
    let state = succeed(state, id, "Done", "files/out.csv");
    let view = state.view();

    assert_eq!(view.phase, Phase::Succeeded);
    assert_eq!(view.message.as_deref(), Some("Done"));
    assert_eq!(
        view.download_link,
        Some(format!("{DEFAULT_BASE_ADDRESS}files/out.csv"))
    );
}

#[test]
fn success_uses_configured_base_address() {
    init_logging();
    let state = AppState::new("http://analysis.local:8080/");
    let (state, _) = update(state, Msg::UrlsChanged("u".into()));
    let (state, _) = update(state, Msg::KeywordsChanged("k".into()));
    let (state, id) = submit(state);
    let state = succeed(state, id, "ok", "seo_analysis.csv");

    assert_eq!(
        state.view().download_link.as_deref(),
        Some("http://analysis.local:8080/seo_analysis.csv")
    );
}

#[test]
fn failure_with_reported_error_is_prefixed() {
    init_logging();
    let (state, request_id) = submit(filled("bad", "seo"));
    let (state, _) = update(
        state,
        Msg::AnalysisFailed {
            request_id,
            reported_error: Some("Bad URL".to_string()),
        },
    );
    let view = state.view();

    assert_eq!(view.phase, Phase::Failed);
    assert_eq!(view.message.as_deref(), Some("Error: Bad URL"));
    assert_eq!(view.download_link, None);
}

#[test]
fn failure_without_reported_error_uses_fallback() {
    init_logging();
    for reported_error in [None, Some(String::new())] {
        let (state, request_id) = submit(filled("https://a.com", "seo"));
        let (state, _) = update(
            state,
            Msg::AnalysisFailed {
                request_id,
                reported_error,
            },
        );
        assert_eq!(
            state.view().message.as_deref(),
            Some("Error: An unknown error occurred.")
        );
    }
}

#[test]
fn empty_csv_path_shows_no_link() {
    init_logging();
    let (state, id) = submit(filled("https://a.com", "seo"));
    let state = succeed(state, id, "Done", "");

    assert_eq!(state.view().message.as_deref(), Some("Done"));
    assert_eq!(state.view().download_link, None);
}

#[test]
fn missing_field_blocks_submission() {
    init_logging();
    let (mut state, effects) = update(AppState::default(), Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let view = state.view();
    assert_eq!(view.phase, Phase::Idle);
    assert_eq!(view.message, None);
    assert_eq!(view.missing_field, Some(FormField::Urls));

    let (state, _) = update(state, Msg::UrlsChanged("https://a.com".into()));
    assert_eq!(state.view().missing_field, None);

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.view().missing_field, Some(FormField::Keywords));
    assert_eq!(state.latest_request(), 0);
}

#[test]
fn fields_persist_after_submit() {
    init_logging();
    let (state, id) = submit(filled("https://a.com", "seo"));
    let state = succeed(state, id, "Done", "out.csv");

    assert_eq!(state.view().urls_text, "https://a.com");
    assert_eq!(state.view().keywords_text, "seo");
}

#[test]
fn repeated_submits_issue_independent_requests() {
    init_logging();
    let state = filled("https://a.com", "seo");
    let (state, first) = update(state, Msg::SubmitClicked);
    let (_state, second) = update(state, Msg::SubmitClicked);

    let ids: Vec<_> = first
        .iter()
        .chain(second.iter())
        .map(|effect| match effect {
            Effect::SubmitAnalysis { request_id, .. } => *request_id,
            other => panic!("unexpected effect {other:?}"),
        })
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn editing_to_same_text_is_not_dirty() {
    init_logging();
    let mut state = filled("a", "b");
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::UrlsChanged("a".into()));
    assert!(!state.consume_dirty());
}
