pub mod probe;
pub mod progress;
pub mod status;

/// Convert a string into a tree label.
fn tree_label<S: Into<String>>(s: S) -> String {
    s.into()
}
