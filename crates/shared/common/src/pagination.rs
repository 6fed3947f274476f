//! Pagination types for list endpoints.
//!
//! Pages are 0-indexed. A request carries the page index, the page size and
//! an ordered list of sort orders parsed from `sort=property[,asc|desc]`
//! query parameters (`sort=a,b,desc` applies the direction to both).

use serde::Deserialize;

use crate::error::AppError;

/// Default starting page number (0-indexed)
pub const DEFAULT_PAGE_NUMBER: u64 = 0;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Maximum allowed items per page to prevent excessive queries
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest row offset a query can bind (signed 64-bit in SQL)
pub const MAX_OFFSET: u64 = i64::MAX as u64;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

/// A single sort order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

impl Sort {
    pub fn asc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            direction: Direction::Desc,
        }
    }

    /// Parse one `sort` query value into its orders.
    pub fn parse_param(value: &str) -> Vec<Sort> {
        let mut tokens: Vec<&str> = value
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let direction = match tokens.last().and_then(|t| Direction::parse(t)) {
            Some(direction) => {
                tokens.pop();
                direction
            }
            None => Direction::Asc,
        };

        tokens
            .into_iter()
            .map(|property| Sort {
                property: property.to_string(),
                direction,
            })
            .collect()
    }
}

/// Raw pagination query parameters as sent by clients
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
    pub size: Option<u64>,
    #[serde(default)]
    pub sort: Vec<String>,
}

/// Normalized page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: Vec<Sort>,
}

impl PageRequest {
    /// Create a request, clamping the size into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u64, size: u64) -> Self {
        let size = match size {
            0 => DEFAULT_PAGE_SIZE,
            s => s.min(MAX_PAGE_SIZE),
        };
        Self {
            page,
            size,
            sort: Vec::new(),
        }
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort.push(sort);
        self
    }

    /// Calculate offset for database query, saturating at [`MAX_OFFSET`]
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size).min(MAX_OFFSET)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

impl TryFrom<PageQuery> for PageRequest {
    type Error = AppError;

    /// Rejects page indexes whose offset would not fit a query.
    fn try_from(query: PageQuery) -> Result<Self, Self::Error> {
        let mut request = PageRequest::new(
            query.page.unwrap_or(DEFAULT_PAGE_NUMBER),
            query.size.unwrap_or(DEFAULT_PAGE_SIZE),
        );

        match request.page.checked_mul(request.size) {
            Some(offset) if offset <= MAX_OFFSET => {}
            _ => {
                return Err(AppError::validation(format!(
                    "Page index {} is out of range",
                    request.page
                )))
            }
        }

        request.sort = query
            .sort
            .iter()
            .flat_map(|value| Sort::parse_param(value))
            .collect();
        Ok(request)
    }
}

/// A bounded, ordered slice of a larger result set plus metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 0-indexed page number
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.page,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size > 0 {
            self.total_elements.div_ceil(self.size)
        } else {
            0
        }
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_property_with_direction() {
        assert_eq!(Sort::parse_param("id,desc"), vec![Sort::desc("id")]);
        assert_eq!(Sort::parse_param("name,ASC"), vec![Sort::asc("name")]);
        assert_eq!(Sort::parse_param("name"), vec![Sort::asc("name")]);
    }

    #[test]
    fn direction_applies_to_every_listed_property() {
        assert_eq!(
            Sort::parse_param("name,id,desc"),
            vec![Sort::desc("name"), Sort::desc("id")]
        );
    }

    #[test]
    fn blank_sort_values_are_ignored() {
        assert!(Sort::parse_param("").is_empty());
        assert!(Sort::parse_param(",desc").is_empty());
    }

    #[test]
    fn size_is_clamped() {
        assert_eq!(PageRequest::new(0, 0).size, DEFAULT_PAGE_SIZE);
        assert_eq!(PageRequest::new(0, 5000).size, MAX_PAGE_SIZE);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn page_index_beyond_any_offset_is_rejected() {
        let query = |page| PageQuery {
            page: Some(page),
            size: Some(20),
            sort: Vec::new(),
        };

        let overflowing = PageRequest::try_from(query(u64::MAX)).unwrap_err();
        assert!(matches!(overflowing, AppError::Validation(_)));
        let unbindable = PageRequest::try_from(query(MAX_OFFSET / 20 + 1)).unwrap_err();
        assert!(matches!(unbindable, AppError::Validation(_)));

        let furthest = PageRequest::try_from(query(MAX_OFFSET / 20)).unwrap();
        assert!(furthest.offset() <= MAX_OFFSET);
    }

    #[test]
    fn offset_and_navigation_saturate() {
        assert_eq!(PageRequest::new(u64::MAX, 20).offset(), MAX_OFFSET);

        let page: Page<u8> = Page::new(vec![], &PageRequest::new(u64::MAX, 20), 5);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn query_defaults() {
        let request = PageRequest::try_from(PageQuery::default()).unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
    }

    #[test]
    fn page_navigation() {
        let request = PageRequest::new(1, 10);
        let page = Page::new(vec![1, 2, 3], &request, 25);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(page.has_previous());

        let last = Page::new(vec![1], &PageRequest::new(2, 10), 25);
        assert!(!last.has_next());

        let empty: Page<u8> = Page::new(vec![], &PageRequest::default(), 0);
        assert_eq!(empty.total_pages(), 0);
        assert!(!empty.has_next());
        assert!(!empty.has_previous());
    }
}
