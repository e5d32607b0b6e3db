use serde_json::Value;

use crate::state::SettleGuard;
use crate::{
    decode_response, found_summary, render_table, request_error, sort_by_price, AppState, Effect,
    Key, Msg, Outcome, RequestFailure, SearchResponse, MIN_QUERY_CHARS, NOTHING_FOUND,
    NOTICE_FALLBACK, PROMPT_TOO_SHORT, SEARCHING, UNEXPECTED_FORMAT,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // A disabled input cannot be edited.
            if state.controls_enabled() {
                state.set_input(text);
            }
            Vec::new()
        }
        Msg::SearchClicked | Msg::KeyPressed(Key::Enter) => {
            if state.controls_enabled() {
                start_search(&mut state)
            } else {
                Vec::new()
            }
        }
        Msg::SearchFinished { request_id, result } => {
            if state.in_flight_request() == Some(request_id) {
                let mut settled = state.settle();
                apply_result(&mut settled, result);
            }
            Vec::new()
        }
        Msg::KeyPressed(Key::Other(_)) => Vec::new(),
    };

    (state, effects)
}

fn start_search(state: &mut AppState) -> Vec<Effect> {
    let query = state.input().trim().to_string();
    if query.chars().count() < MIN_QUERY_CHARS {
        state.clear_table();
        state.set_message(PROMPT_TOO_SHORT);
        state.set_outcome(Outcome::Rejected);
        return Vec::new();
    }

    state.clear_table();
    state.set_message(SEARCHING);
    let request_id = state.begin_request(query.clone());
    vec![Effect::IssueSearch { request_id, query }]
}

fn apply_result(state: &mut SettleGuard<'_>, result: Result<Value, RequestFailure>) {
    let body = match result {
        Ok(body) => body,
        Err(failure) => {
            state.clear_table();
            state.set_message(request_error(&failure.description));
            state.set_outcome(Outcome::Errored);
            return;
        }
    };

    match decode_response(&body) {
        Err(_) => {
            state.clear_table();
            state.set_message(UNEXPECTED_FORMAT);
            state.set_outcome(Outcome::UnexpectedShape);
        }
        Ok(SearchResponse::Notice(notice)) => {
            state.clear_table();
            state.set_message(notice.message.unwrap_or_else(|| NOTICE_FALLBACK.to_string()));
            state.set_outcome(Outcome::NoticeShown);
        }
        Ok(SearchResponse::ResultList(mut records)) => {
            sort_by_price(&mut records);
            let table = render_table(&records, state.price_format());
            let count = table.row_count();
            state.replace_table(table);
            if count == 0 {
                state.set_message(NOTHING_FOUND);
                state.set_outcome(Outcome::Empty);
            } else {
                state.set_message(found_summary(count));
                state.set_outcome(Outcome::Rendered { count });
            }
        }
    }
}
