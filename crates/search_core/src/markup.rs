use serde_json::Value;

use crate::response::display_text;
use crate::{to_number, ResultRecord, OPEN_LINK_LABEL};

/// Placeholder for empty cells and missing prices.
pub const EMPTY_CELL: &str = "—";

/// Replace the five HTML-sensitive characters with entities, `&` first.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Locale settings used to display finite prices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormat {
    pub group_separator: String,
    pub decimal_separator: String,
    pub max_fraction_digits: usize,
    pub currency_suffix: String,
}

impl Default for PriceFormat {
    /// Russian grouping with a rouble suffix: `1 234 567,5 ₽`.
    fn default() -> Self {
        Self {
            group_separator: "\u{a0}".to_string(),
            decimal_separator: ",".to_string(),
            max_fraction_digits: 3,
            currency_suffix: " ₽".to_string(),
        }
    }
}

impl PriceFormat {
    fn format_number(&self, value: f64) -> String {
        let rounded = format!(
            "{:.*}",
            self.max_fraction_digits,
            round_half_away(value.abs(), self.max_fraction_digits)
        );
        let (int_part, frac_part) = match rounded.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part.trim_end_matches('0')),
            None => (rounded.as_str(), ""),
        };

        let is_zero = int_part.bytes().all(|b| b == b'0') && frac_part.is_empty();
        let mut out = String::with_capacity(rounded.len() + 8);
        if value.is_sign_negative() && !is_zero {
            out.push('-');
        }

        let digits = int_part.len();
        for (idx, digit) in int_part.chars().enumerate() {
            if idx > 0 && (digits - idx) % 3 == 0 {
                out.push_str(&self.group_separator);
            }
            out.push(digit);
        }
        if !frac_part.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(frac_part);
        }
        out.push_str(&self.currency_suffix);
        out
    }
}

/// Round to `digits` decimals with ties away from zero; `format!` alone
/// rounds exact binary ties to even.
fn round_half_away(value: f64, digits: usize) -> f64 {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = value * scale;
    if scaled.is_finite() && scale.is_finite() {
        scaled.round() / scale
    } else {
        value
    }
}

/// Display text for a price: `—` when absent or `null`, the raw value when it does not
/// coerce to a finite number, otherwise the localized amount.
pub fn format_price(price: Option<&Value>, format: &PriceFormat) -> String {
    let Some(price) = price.filter(|price| !price.is_null()) else {
        return EMPTY_CELL.to_string();
    };
    let number = to_number(price);
    if number.is_finite() {
        format.format_number(number)
    } else {
        display_text(price)
    }
}

/// Unescaped display cells of one rendered row, for hosts that do not consume markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub shop: String,
    pub title: String,
    pub price: String,
    pub link: Option<String>,
}

/// Current table contents. `body_html` is the complete `<tbody>` inner markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub body_html: String,
    pub rows: Vec<RowView>,
    pub hidden: bool,
}

impl Default for TableView {
    fn default() -> Self {
        Self {
            body_html: String::new(),
            rows: Vec::new(),
            hidden: true,
        }
    }
}

impl TableView {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Render records, in the given order, into a fresh table.
pub fn render_table(records: &[ResultRecord], format: &PriceFormat) -> TableView {
    let mut body_html = String::new();
    let mut rows = Vec::with_capacity(records.len());

    for record in records {
        let shop = or_empty_cell(record.shop.as_deref().unwrap_or_default());
        let title = or_empty_cell(record.title.as_deref().unwrap_or_default());
        let price = format_price(record.price.as_ref(), format);
        let link = record.link().map(str::to_string);

        let action = match &link {
            Some(url) => format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer">{OPEN_LINK_LABEL}</a>"#,
                escape_html(url)
            ),
            None => EMPTY_CELL.to_string(),
        };
        body_html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(shop),
            escape_html(title),
            escape_html(&price),
            action
        ));

        rows.push(RowView {
            shop: shop.to_string(),
            title: title.to_string(),
            price,
            link,
        });
    }

    TableView {
        body_html,
        hidden: rows.is_empty(),
        rows,
    }
}

fn or_empty_cell(text: &str) -> &str {
    if text.is_empty() {
        EMPTY_CELL
    } else {
        text
    }
}
