use pretty_assertions::assert_eq;
use search_app::{format_text_table, parse_line, InputLine, TableOutput, TerminalSurface};
use search_core::{apply_view, update, AppState, Key, Msg, RowView};
use serde_json::json;

fn output(surface: TerminalSurface<Vec<u8>>) -> String {
    String::from_utf8(surface.into_inner()).unwrap()
}

#[test]
fn text_table_aligns_wide_characters() {
    let rows = vec![
        RowView {
            shop: "Магазин".to_string(),
            title: "Phone".to_string(),
            price: "100 ₽".to_string(),
            link: Some("http://x".to_string()),
        },
        RowView {
            shop: "B".to_string(),
            title: "—".to_string(),
            price: "n/a".to_string(),
            link: None,
        },
    ];

    assert_eq!(
        format_text_table(&rows),
        "Shop    | Title | Price | Link\n\
         --------+-------+-------+---------\n\
         Магазин | Phone | 100 ₽ | http://x\n\
         B       | —     | n/a   | —\n"
    );
}

#[test]
fn input_lines_map_to_widget_events() {
    assert_eq!(parse_line("/quit"), InputLine::Quit);
    assert_eq!(parse_line(" /search "), InputLine::Trigger);
    assert_eq!(parse_line("/help"), InputLine::Unknown("/help".to_string()));
    assert_eq!(
        parse_line("  iphone \r\n"),
        InputLine::Submit("  iphone ".to_string())
    );
    assert_eq!(
        parse_line("ab").into_messages(),
        vec![
            Msg::InputChanged("ab".to_string()),
            Msg::KeyPressed(Key::Enter)
        ]
    );
    assert_eq!(InputLine::Trigger.into_messages(), vec![Msg::SearchClicked]);
}

#[test]
fn surface_prints_message_table_and_prompt() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("phone".to_string()));
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            request_id: 1,
            result: Ok(json!([{"shop": "A", "title": "<T>", "price": 5, "url": ""}])),
        },
    );

    let mut surface = TerminalSurface::new(Vec::new(), TableOutput::Text);
    apply_view(&state.view(), &mut surface);
    surface.flush().unwrap();
    assert!(surface.controls_enabled());

    assert_eq!(
        output(surface),
        "Found: 1\n\
         Shop | Title | Price | Link\n\
         -----+-------+-------+-----\n\
         A    | <T>   | 5 ₽   | —\n\
         > "
    );
}

#[test]
fn html_output_prints_escaped_body() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("phone".to_string()));
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            request_id: 1,
            result: Ok(json!([{"shop": "A", "title": "<T>"}])),
        },
    );

    let mut surface = TerminalSurface::new(Vec::new(), TableOutput::Html);
    apply_view(&state.view(), &mut surface);
    surface.flush().unwrap();

    let text = output(surface);
    assert!(text.contains("<tr><td>A</td><td>&lt;T&gt;</td><td>—</td><td>—</td></tr>"));
}

#[test]
fn repeated_short_query_reprints_message_and_prompt() {
    let mut state = AppState::new();
    let mut surface = TerminalSurface::new(Vec::new(), TableOutput::Text);

    for query in ["x", "y"] {
        let (next, _) = update(state, Msg::InputChanged(query.to_string()));
        let (mut next, _) = update(next, Msg::KeyPressed(Key::Enter));
        assert!(next.consume_dirty());
        apply_view(&next.view(), &mut surface);
        next.consume_focus_request();
        surface.flush().unwrap();
        state = next;
    }

    let text = output(surface);
    assert_eq!(text.matches("Enter at least 2 characters").count(), 2);
    assert!(text.ends_with("search.\n> "));
}

#[test]
fn control_characters_in_cells_are_escaped() {
    let rows = vec![RowView {
        shop: "\u{1b}[2J".to_string(),
        title: "a\nb\tc".to_string(),
        price: "5 ₽".to_string(),
        link: Some("http://x/\r".to_string()),
    }];

    let table = format_text_table(&rows);

    assert!(!table.contains('\u{1b}'));
    assert!(!table.contains('\t'));
    assert!(!table.contains('\r'));
    assert_eq!(table.lines().count(), 3);
    let row = table.lines().nth(2).unwrap();
    assert_eq!(row, r"\u{1b}[2J | a\nb\tc | 5 ₽   | http://x/\r");
}

#[test]
fn control_characters_in_server_text_never_reach_the_terminal() {
    let (state, _) = update(AppState::new(), Msg::InputChanged("phone".to_string()));
    let (state, _) = update(state, Msg::SearchClicked);
    let (state, _) = update(
        state,
        Msg::SearchFinished {
            request_id: 1,
            result: Ok(json!([{"type": "limit", "message": "\u{1b}]0;owned\u{7}\nfake"}])),
        },
    );

    let mut surface = TerminalSurface::new(Vec::new(), TableOutput::Text);
    apply_view(&state.view(), &mut surface);
    surface.flush().unwrap();

    assert_eq!(output(surface), "\\u{1b}]0;owned\\u{7}\\nfake\n> ");
}
