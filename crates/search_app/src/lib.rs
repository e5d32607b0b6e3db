//! Terminal host for the shop search widget.
mod platform;

pub use platform::app::{run_app, run_event_loop, AppError, AppEvent};
pub use platform::config::{
    config_path, load_config, AppConfig, ConfigError, LogTarget, PriceFormatConfig, TableOutput,
    CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE,
};
pub use platform::effects::{engine_event_to_msg, EffectRunner};
pub use platform::input::{parse_line, InputLine};
pub use platform::terminal::{format_text_table, TerminalSurface};
