use seo_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::default();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn noop_leaves_nothing_to_render() {
    let (mut next, effects) = update(AppState::default(), Msg::NoOp);

    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
