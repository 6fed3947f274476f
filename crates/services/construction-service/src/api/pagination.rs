//! Pagination response headers.
//!
//! List endpoints return the page content as a bare JSON array; the total
//! element count goes into `X-Total-Count` and navigation into an RFC 8288
//! `Link` header with `next`, `prev`, `last` and `first` relations.

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue};
use url::form_urlencoded;

use common::{Page, PageRequest};

/// Total element count header
pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

/// Build `X-Total-Count` and `Link` headers for a page served at `path`.
pub fn pagination_headers<T>(path: &str, request: &PageRequest, page: &Page<T>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_elements));

    let last = page.total_pages().saturating_sub(1);
    let mut links = Vec::with_capacity(4);
    if page.has_next() {
        links.push(link(path, request, page.number + 1, "next"));
    }
    if page.has_previous() {
        links.push(link(path, request, page.number - 1, "prev"));
    }
    links.push(link(path, request, last, "last"));
    links.push(link(path, request, 0, "first"));

    match HeaderValue::from_str(&links.join(",")) {
        Ok(value) => {
            headers.insert(LINK, value);
        }
        Err(e) => tracing::warn!("Dropping invalid Link header for {}: {}", path, e),
    }

    headers
}

fn link(path: &str, request: &PageRequest, page: u64, rel: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    query.append_pair("size", &request.size.to_string());
    for sort in &request.sort {
        query.append_pair(
            "sort",
            &format!("{},{}", sort.property, sort.direction.as_str()),
        );
    }

    format!("<{}?{}>; rel=\"{}\"", path, query.finish(), rel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Sort;

    fn link_header(headers: &HeaderMap) -> &str {
        headers.get(LINK).unwrap().to_str().unwrap()
    }

    #[test]
    fn first_page_links_forward_only() {
        let request = PageRequest::new(0, 2);
        let page = Page::new(vec![1, 2], &request, 5);
        let headers = pagination_headers("/api/buildings", &request, &page);

        assert_eq!(headers.get(TOTAL_COUNT_HEADER).unwrap(), "5");
        assert_eq!(
            link_header(&headers),
            "</api/buildings?page=1&size=2>; rel=\"next\",\
             </api/buildings?page=2&size=2>; rel=\"last\",\
             </api/buildings?page=0&size=2>; rel=\"first\""
        );
    }

    #[test]
    fn middle_page_links_both_ways_and_keeps_sort() {
        let request = PageRequest::new(1, 2).with_sort(Sort::desc("name"));
        let page = Page::new(vec![3, 4], &request, 5);
        let link = link_header(&pagination_headers("/api/floors", &request, &page)).to_string();

        assert!(link.contains("</api/floors?page=2&size=2&sort=name%2Cdesc>; rel=\"next\""));
        assert!(link.contains("</api/floors?page=0&size=2&sort=name%2Cdesc>; rel=\"prev\""));
    }

    #[test]
    fn empty_result_still_links_first_and_last() {
        let request = PageRequest::default();
        let page: Page<u8> = Page::new(vec![], &request, 0);
        let headers = pagination_headers("/api/apartments", &request, &page);

        assert_eq!(headers.get(TOTAL_COUNT_HEADER).unwrap(), "0");
        let link = link_header(&headers);
        assert!(!link.contains("rel=\"next\""));
        assert!(!link.contains("rel=\"prev\""));
        assert!(link.contains("</api/apartments?page=0&size=20>; rel=\"last\""));
    }
}
