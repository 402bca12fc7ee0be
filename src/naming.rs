//! Filename helpers shared by the scanner, the metadata extractor and the
//! tree builder.
//!
//! Every document is identified by a slash-separated path relative to the
//! docs root. Two things are derived from its last segment:
//!
//! - the **base name**: the segment with its extension stripped, used as the
//!   title of last resort (`guide/setup.md` → `setup`)
//! - whether it is an **index document**: base name equal to `index`,
//!   compared case-insensitively (`Index.md`, `INDEX.MD`)

/// Last segment of a slash-separated relative path.
pub fn file_name(relative_path: &str) -> &str {
    relative_path.rsplit('/').next().unwrap_or(relative_path)
}

/// Base name of a path segment: the segment with its extension stripped.
///
/// Only the last `.`-suffix is removed, and a leading dot does not count as
/// an extension separator:
/// - `"setup.md"` → `"setup"`
/// - `"v1.2.md"` → `"v1.2"`
/// - `".hidden"` → `".hidden"`
/// - `"README"` → `"README"`
pub fn base_name(segment: &str) -> &str {
    let name = file_name(segment);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(pos) => &name[..pos],
    }
}

/// Whether a document represents its containing folder.
pub fn is_index(segment: &str) -> bool {
    base_name(segment).eq_ignore_ascii_case("index")
}

/// Whether a file name carries the given extension, compared case-insensitively.
pub fn has_extension(name: &str, extension: &str) -> bool {
    name.len() > extension.len()
        && name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case(extension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_of_nested_path() {
        assert_eq!(file_name("guide/install/linux.md"), "linux.md");
        assert_eq!(file_name("top.md"), "top.md");
    }

    #[test]
    fn base_name_strips_extension() {
        assert_eq!(base_name("setup.md"), "setup");
        assert_eq!(base_name("guide/setup.md"), "setup");
    }

    #[test]
    fn base_name_strips_only_last_extension() {
        assert_eq!(base_name("v1.2.md"), "v1.2");
    }

    #[test]
    fn base_name_keeps_dotfiles_and_bare_names() {
        assert_eq!(base_name(".hidden"), ".hidden");
        assert_eq!(base_name("README"), "README");
    }

    #[test]
    fn index_detection_is_case_insensitive() {
        assert!(is_index("index.md"));
        assert!(is_index("Index.md"));
        assert!(is_index("INDEX.MD"));
        assert!(is_index("a/b/index.md"));
    }

    #[test]
    fn index_prefix_is_not_index() {
        assert!(!is_index("indexes.md"));
        assert!(!is_index("my-index.md"));
        assert!(!is_index("index.old.md"));
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(has_extension("notes.md", "md"));
        assert!(has_extension("NOTES.MD", "md"));
        assert!(!has_extension("notes.mdx", "md"));
        assert!(!has_extension("md", "md"));
        assert!(!has_extension("notes.txt", "md"));
    }
}
