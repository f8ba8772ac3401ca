//! Download filename derivation.

use super::ExportFormat;

/// Prefix shared by every downloaded drawing.
pub const FILENAME_PREFIX: &str = "desenho_biblico_";

/// Name used when nothing survives sanitizing.
pub const FALLBACK_NAME: &str = "arte";

/// Maximum length of the sanitized part of the name.
pub const MAX_NAME_LEN: usize = 30;

/// Keep ASCII letters and digits only, lowercased, at most 30 characters.
///
/// Accented letters are dropped rather than transliterated, so
/// `"A Arca de Noé!"` becomes `"aarcadeno"`. The result may be empty.
pub fn sanitize(base_name: &str) -> String {
    base_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .take(MAX_NAME_LEN)
        .collect()
}

/// Full download name, `desenho_biblico_<name>.<ext>`.
pub fn suggested_filename(base_name: &str, format: ExportFormat) -> String {
    let name = sanitize(base_name);
    let name = if name.is_empty() {
        FALLBACK_NAME
    } else {
        name.as_str()
    };
    format!("{FILENAME_PREFIX}{name}.{}", format.extension())
}
