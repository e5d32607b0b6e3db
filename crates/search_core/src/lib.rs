//! Shop search core: pure query lifecycle state machine and rendering helpers.
mod effect;
mod markup;
mod msg;
mod response;
mod sort;
mod state;
mod surface;
mod text;
mod update;
mod view_model;

pub use effect::Effect;
pub use markup::{
    escape_html, format_price, render_table, PriceFormat, RowView, TableView, EMPTY_CELL,
};
pub use msg::{Key, Msg, RequestFailure};
pub use response::{
    decode_response, is_truthy, to_number, NoticePayload, ResultRecord, SearchResponse,
    ShapeError,
};
pub use sort::{compare_prices, sort_by_price};
pub use state::{AppState, Outcome, Phase, RequestId, MIN_QUERY_CHARS};
pub use surface::{apply_view, SearchSurface};
pub use text::*;
pub use update::update;
pub use view_model::AppViewModel;
