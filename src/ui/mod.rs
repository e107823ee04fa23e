//! Text console: formatting and line-oriented I/O.

pub mod formatter;
pub mod text_ui;

pub use formatter::Formatter;
pub use text_ui::TextUi;
