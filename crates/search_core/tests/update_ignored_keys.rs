use search_core::{update, AppState, Key, Msg};

#[test]
fn non_enter_keys_are_ignored() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::KeyPressed(Key::Other("a".to_string())));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn non_enter_keys_do_not_submit_a_valid_query() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("iphone".to_string()));
    let (next, effects) = update(state.clone(), Msg::KeyPressed(Key::Other("Tab".to_string())));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
