//! Printable: how a person's detail presents itself to the display layer.

/// A labelled, privacy-aware detail of a person record.
pub trait Printable {
    /// Field label, e.g. "Phone".
    fn label(&self) -> &'static str;

    /// The canonical value text.
    fn value_text(&self) -> &str;

    /// Whether the display layer should hide the value.
    fn is_private(&self) -> bool {
        false
    }

    /// `"<label>: <value>"`, ignoring the privacy flag.
    fn printable_string(&self) -> String {
        format!("{}: {}", self.label(), self.value_text())
    }
}
