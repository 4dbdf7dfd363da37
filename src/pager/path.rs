//! Route path helpers for page links.

/// Strip every trailing `/`. The root `/` becomes the empty string.
pub fn unslash_end(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Path for `page` under `base`.
///
/// Page 1 (and anything below it) is the base path itself; later pages get
/// a `/<page>` suffix.
pub fn page_path(base: &str, page: i64) -> String {
    if page > 1 {
        format!("{}/{}", unslash_end(base), page)
    } else {
        base.to_string()
    }
}

/// Recover the base path from the route being viewed.
///
/// When the route was matched with a page parameter its last segment is the
/// page number and gets dropped. Routes without one are returned unchanged.
pub fn strip_page_param(path: &str, page_param: Option<i64>) -> String {
    if page_param.is_none() {
        return path.to_string();
    }

    let trimmed = unslash_end(path);
    match trimmed.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => trimmed[..idx].to_string(),
    }
}
