/// Output filename for one crop: `"{stem}_{label}.png"`.
///
/// The stem is `original` without its last extension. The label keeps ASCII letters, digits,
/// `_`, `-` and whitespace; any other character separates words, and every whitespace run
/// becomes a single `-`.
pub fn export_filename(original: &str, ratio_label: &str) -> String {
    format!("{}_{}.png", strip_extension(original), sanitize_label(ratio_label))
}

/// Output filename for a contact sheet covering all `labels`, in order.
pub fn sheet_filename<S: AsRef<str>>(original: &str, labels: &[S]) -> String {
    let joined = labels
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");
    export_filename(original, &joined)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => {
            let ext = &name[idx + 1..];
            if ext.is_empty() || ext.contains(['/', '\\']) {
                name
            } else {
                &name[..idx]
            }
        }
        None => name,
    }
}

fn sanitize_label(label: &str) -> String {
    let spaced: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                ' '
            }
        })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
#[path = "../../tests/unit/export/naming.rs"]
mod tests;
