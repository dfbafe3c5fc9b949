//! URL path utilities for the open and download actions.

/// Join path segments with exactly one `/` between them.
///
/// Trailing separators on the left side and leading separators on the right
/// side collapse; empty segments are skipped entirely. Segment characters
/// are otherwise left untouched.
///
/// ```
/// use nbw_core::url::url_path_join;
///
/// assert_eq!(url_path_join(&["/base/", "/tree", "work/nb"]), "/base/tree/work/nb");
/// assert_eq!(url_path_join(&["/", "files", ""]), "/files");
/// ```
pub fn url_path_join(segments: &[&str]) -> String {
    let mut joined = String::new();
    for segment in segments {
        let trimmed = segment.trim_matches('/');
        if trimmed.is_empty() {
            continue;
        }
        if !joined.is_empty() && !joined.ends_with('/') {
            joined.push('/');
        }
        joined.push_str(trimmed);
    }
    // A leading slash on the first segment is significant.
    if segments.first().is_some_and(|s| s.starts_with('/')) {
        joined.insert(0, '/');
    }
    joined
}

/// Decode `%XX` escapes, including `+` as itself (not a space).
///
/// Invalid escapes pass through verbatim; the notebook path the page hands
/// us is the only input and it is well-formed in practice.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%'
            && let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            )
        {
            out.push((hi * 16 + lo) as u8);
            i += 3;
            continue;
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_separator_between_segments() {
        assert_eq!(url_path_join(&["/base/", "tree", "sub/dir"]), "/base/tree/sub/dir");
        assert_eq!(url_path_join(&["/base", "/tree/", "/sub"]), "/base/tree/sub");
    }

    #[test]
    fn empty_segments_are_skipped() {
        assert_eq!(url_path_join(&["/base", "", "files"]), "/base/files");
        assert_eq!(url_path_join(&["", "tree"]), "tree");
    }

    #[test]
    fn leading_slash_of_first_segment_is_kept() {
        assert_eq!(url_path_join(&["/", "files", "nb.ipynb"]), "/files/nb.ipynb");
        assert_eq!(url_path_join(&["base", "files"]), "base/files");
    }

    #[test]
    fn percent_decode_basic() {
        assert_eq!(percent_decode("My%20Notebook"), "My Notebook");
        assert_eq!(percent_decode("a%2Fb"), "a/b");
        assert_eq!(percent_decode("plain"), "plain");
    }

    #[test]
    fn percent_decode_leaves_invalid_escapes() {
        assert_eq!(percent_decode("50%"), "50%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    proptest! {
        #[test]
        fn join_never_doubles_the_separator(
            base in "[a-z0-9]{1,8}",
            base_slash in proptest::bool::ANY,
            segs in proptest::collection::vec("[a-z0-9]{1,8}", 1..4),
        ) {
            let base = if base_slash { format!("/{base}/") } else { base };
            let mut parts: Vec<&str> = vec![&base];
            parts.extend(segs.iter().map(String::as_str));
            let joined = url_path_join(&parts);
            prop_assert!(!joined.contains("//"), "double separator in {joined:?}");
        }

        #[test]
        fn percent_decode_is_identity_on_unescaped_input(s in "[a-zA-Z0-9 ._-]{0,32}") {
            prop_assert_eq!(percent_decode(&s), s);
        }
    }
}
