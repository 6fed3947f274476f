//! Custom request extractors.

mod pageable;
mod validated_json;

pub use pageable::Pageable;
pub use validated_json::ValidatedJson;
