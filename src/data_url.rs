//! Data-URL handling for image payloads.

/// Strip an optional `data:<mime>;base64,` prefix, returning the bare
/// base64 payload. Input without a comma is returned unchanged.
pub fn strip_data_url_prefix(input: &str) -> &str {
    match input.find(',') {
        Some(index) => &input[index + 1..],
        None => input,
    }
}
