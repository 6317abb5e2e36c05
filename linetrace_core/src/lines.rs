//! Line splitting for revision snapshots.

/// Split `text` into lines at every `\r\n`, `\r`, or `\n`.
///
/// Separators are consumed and not retained. An empty input yields no lines
/// and a trailing separator yields no trailing empty line; interior empty
/// lines are kept.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(text[start..index].to_owned());
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(text[start..index].to_owned());
                index += 1;
                if bytes.get(index) == Some(&b'\n') {
                    index += 1;
                }
                start = index;
            }
            _ => index += 1,
        }
    }

    if start < bytes.len() {
        lines.push(text[start..].to_owned());
    }

    lines
}
