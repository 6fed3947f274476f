//! Entity alert headers.
//!
//! Every mutating endpoint reports what it did through a pair of headers:
//! `X-constructionMs-alert` carries a message key such as
//! `constructionMs.building.created` and `X-constructionMs-params` carries its
//! parameter (the entity id). Client errors raised against an entity use
//! `X-constructionMs-error` instead.

use axum::http::{HeaderMap, HeaderName, HeaderValue};
use domain::APPLICATION_NAME;

/// Alert message key header
pub const ALERT_HEADER: HeaderName = HeaderName::from_static("x-constructionms-alert");

/// Error message key header
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-constructionms-error");

/// Alert parameter header
pub const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-constructionms-params");

/// Alert for a freshly created entity.
pub fn entity_creation_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.created", APPLICATION_NAME, entity_name), param)
}

/// Alert for an updated entity.
pub fn entity_update_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.updated", APPLICATION_NAME, entity_name), param)
}

/// Alert for a deleted entity.
pub fn entity_deletion_alert(entity_name: &str, param: &str) -> HeaderMap {
    alert(&format!("{}.{}.deleted", APPLICATION_NAME, entity_name), param)
}

/// Failure alert attached to client errors.
pub fn failure_alert(entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ERROR_HEADER, &format!("error.{}", error_key));
    insert(&mut headers, PARAMS_HEADER, entity_name);
    headers
}

fn alert(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, ALERT_HEADER, message);
    insert(&mut headers, PARAMS_HEADER, param);
    headers
}

fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    match HeaderValue::from_str(value) {
        Ok(value) => {
            headers.insert(name, value);
        }
        Err(_) => tracing::warn!("Dropping non-ASCII alert header value: {}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_alert_carries_message_key_and_id() {
        let headers = entity_creation_alert("building", "42");
        assert_eq!(
            headers.get(ALERT_HEADER).unwrap(),
            "constructionMs.building.created"
        );
        assert_eq!(headers.get(PARAMS_HEADER).unwrap(), "42");
    }

    #[test]
    fn failure_alert_carries_error_key_and_entity() {
        let headers = failure_alert("floor", "idnull");
        assert_eq!(headers.get(ERROR_HEADER).unwrap(), "error.idnull");
        assert_eq!(headers.get(PARAMS_HEADER).unwrap(), "floor");
        assert!(headers.get(ALERT_HEADER).is_none());
    }
}
