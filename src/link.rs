//! Parsing of the `Link` pagination header.
//!
//! The listing endpoints advertise further pages through a header of the
//! form `<url>; rel="next", <url>; rel="last"`. Only the `next` relation
//! drives pagination; everything else is ignored.

/// Extract the continuation URL from a `Link` header value.
///
/// Returns the target of the first entry whose `rel` parameter contains the
/// relation `next`. Malformed entries are skipped rather than treated as
/// errors, and a header with no `next` relation yields `None`, which is the
/// normal end-of-data condition.
pub fn next_url(header: &str) -> Option<String> {
    for entry in header.split(',') {
        let mut parts = entry.split(';');

        let target = match parts.next() {
            Some(t) if !t.trim().is_empty() => t.trim(),
            _ => continue,
        };

        // A rel value may carry several space-separated relations,
        // e.g. rel="next last".
        let is_next = parts.any(|param| match param.split_once('=') {
            Some((key, value)) if key.trim() == "rel" => value
                .trim()
                .trim_matches('"')
                .split_whitespace()
                .any(|relation| relation == "next"),
            _ => false,
        });

        if is_next {
            let url = target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .unwrap_or(target);
            return Some(url.to_string());
        }
    }

    None
}
