use std::collections::HashSet;
use url::Url;

/// Derives the origin of a URL: scheme plus host (and any explicit port),
/// with path, query and fragment discarded.
///
/// Anchor hrefs are resolved against this origin rather than the full page
/// URL, so `href="x"` on `https://host/a/b` resolves to `https://host/x`.
pub fn origin_of(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    let origin = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };
    Url::parse(&origin).ok()
}

/// A resolved link is kept only when it carries both a scheme and a host
///
/// Parsed URLs always have a scheme, so the host is the deciding check.
/// This drops `mailto:`, `javascript:`, `tel:` and data URLs.
pub fn is_valid(url: &Url) -> bool {
    url.has_host()
}

/// Resolves raw anchor hrefs against the page origin
///
/// Unresolvable and invalid entries are skipped; the rest are
/// deduplicated, preserving first-seen order.
pub fn resolve_links<'a, I>(base: &Url, hrefs: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for href in hrefs {
        let resolved = match base.join(href) {
            Ok(url) => url,
            Err(e) => {
                ::log::debug!("Skipping unresolvable href {:?}: {}", href, e);
                continue;
            }
        };

        if !is_valid(&resolved) {
            ::log::debug!("Skipping link without a host: {:?}", href);
            continue;
        }

        let link = resolved.to_string();
        if seen.insert(link.clone()) {
            links.push(link);
        }
    }

    links
}
