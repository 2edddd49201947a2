//! Language detection for streamed code events.
//!
//! The viewer uses the language name for syntax highlighting, so detection
//! only needs to cover the extensions agents commonly touch. Everything else
//! falls back to plain text.

use std::path::Path;

/// Language reported when the extension is missing or unknown.
pub const FALLBACK_LANGUAGE: &str = "text";

/// Extension to language table. Keys are lowercase and unique.
const EXTENSION_LANGUAGES: &[(&str, &str)] = &[
    ("py", "python"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("rs", "rust"),
    ("go", "go"),
    ("rb", "ruby"),
    ("java", "java"),
    ("swift", "swift"),
    ("kt", "kotlin"),
    ("c", "c"),
    ("h", "c"),
    ("cpp", "cpp"),
    ("sql", "sql"),
    ("css", "css"),
    ("html", "html"),
    ("json", "json"),
    ("md", "markdown"),
    ("yml", "yaml"),
    ("yaml", "yaml"),
    ("sh", "bash"),
    ("bash", "bash"),
    ("zsh", "bash"),
];

/// Detects the display language for a filename.
///
/// Matching is case-insensitive on the extension. Filenames without an
/// extension (including dotfiles like `.bashrc`) map to [`FALLBACK_LANGUAGE`].
///
/// # Examples
///
/// ```
/// use agentcast_client::language::detect_language;
///
/// assert_eq!(detect_language("main.py"), "python");
/// assert_eq!(detect_language("notes.xyz"), "text");
/// ```
#[must_use]
pub fn detect_language(filename: &str) -> &'static str {
    let Some(ext) = Path::new(filename).extension().and_then(|e| e.to_str()) else {
        return FALLBACK_LANGUAGE;
    };

    let ext = ext.to_ascii_lowercase();
    EXTENSION_LANGUAGES
        .iter()
        .find(|&&(key, _)| key == ext)
        .map_or(FALLBACK_LANGUAGE, |&(_, language)| language)
}
