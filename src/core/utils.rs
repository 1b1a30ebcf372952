// License: MIT

/// Display labels keep the first 30 characters of trimmed text content.
pub const LABEL_MAX_CHARS: usize = 30;

pub fn node_label(text: &str) -> String {
    text.trim().chars().take(LABEL_MAX_CHARS).collect()
}

pub fn format_secs(secs: f64) -> String {
    format!("{secs:.2}s")
}
