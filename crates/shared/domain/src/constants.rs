//! Domain-level constants.
//!
//! Entity names double as cache key prefixes and alert header parameters.

// =============================================================================
// Application
// =============================================================================

/// Application name used in alert headers (`X-constructionMs-alert`)
pub const APPLICATION_NAME: &str = "constructionMs";

// =============================================================================
// Entity Names
// =============================================================================

/// Building entity name
pub const ENTITY_BUILDING: &str = "building";

/// Floor entity name
pub const ENTITY_FLOOR: &str = "floor";

/// Apartment entity name
pub const ENTITY_APARTMENT: &str = "apartment";

// =============================================================================
// Validation
// =============================================================================

/// Minimum name length requirement (buildings and apartments)
pub const MIN_NAME_LENGTH: u64 = 1;
