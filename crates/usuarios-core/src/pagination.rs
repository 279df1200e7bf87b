//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// Sortable fields of the user entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Id,
    FirstName,
    LastName,
    Email,
    BirthDate,
}

impl SortField {
    /// Parses a field name as it appears in the `sort` query parameter.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "id" => Some(Self::Id),
            "firstName" => Some(Self::FirstName),
            "lastName" => Some(Self::LastName),
            "email" => Some(Self::Email),
            "birthDate" => Some(Self::BirthDate),
            _ => None,
        }
    }

    /// Returns the database column backing this field.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Email => "email",
            Self::BirthDate => "birth_date",
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the SQL keyword for this direction.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A requested ordering, parsed from a `field,direction` query value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortOrder {
    /// Parses a Spring-style sort parameter such as `firstName,desc`.
    ///
    /// The direction defaults to ascending when omitted. Unrecognized
    /// field names yield `None`, which callers treat as the default
    /// (insertion) ordering.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut parts = s.splitn(2, ',');
        let field = SortField::parse(parts.next()?.trim())?;
        let direction = match parts.next().map(str::trim) {
            None | Some("asc") | Some("") => SortDirection::Asc,
            Some("desc") => SortDirection::Desc,
            Some(_) => return None,
        };
        Some(Self { field, direction })
    }
}

/// A request for a page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (0-indexed).
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// Requested ordering; `None` means insertion order (`id ASC`).
    pub sort: Option<SortOrder>,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 20;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 100;

    /// Creates a new page request with the default ordering.
    #[must_use]
    pub fn new(page: usize, size: usize) -> Self {
        Self {
            page,
            size: size.min(Self::MAX_SIZE),
            sort: None,
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub fn first() -> Self {
        Self::new(0, Self::DEFAULT_SIZE)
    }

    /// Sets the requested ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: Option<SortOrder>) -> Self {
        self.sort = sort;
        self
    }

    /// Returns the offset for database queries.
    ///
    /// Saturates instead of wrapping: `page` comes straight from the
    /// query string and can be arbitrarily large.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Returns the limit for database queries.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
///
/// Serializes with the field names of the paging envelope consumed by
/// existing clients: `number`, `size`, `totalElements`, `totalPages`,
/// `first`, `last`, `numberOfElements`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// The current page number (0-indexed).
    #[serde(rename = "number")]
    pub page: usize,
    /// The number of items per page.
    pub size: usize,
    /// The total number of items across all pages.
    pub total_elements: u64,
    /// The total number of pages.
    pub total_pages: u64,
    /// Whether this is the first page.
    pub first: bool,
    /// Whether this is the last page.
    pub last: bool,
    /// The number of items on this page.
    pub number_of_elements: usize,
}

impl PageInfo {
    /// Creates a new page info.
    #[must_use]
    pub fn new(page: usize, size: usize, total_elements: u64, number_of_elements: usize) -> Self {
        let total_pages = if size > 0 {
            (total_elements + size as u64 - 1) / size as u64
        } else {
            0
        };

        Self {
            page,
            size,
            total_elements,
            total_pages,
            first: page == 0,
            last: page as u64 >= total_pages.saturating_sub(1),
            number_of_elements,
        }
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page: usize, size: usize, total_elements: u64) -> Self {
        let number_of_elements = content.len();
        Self {
            content,
            info: PageInfo::new(page, size, total_elements, number_of_elements),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page: usize, size: usize) -> Self {
        Self::new(Vec::new(), page, size, 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.info.total_elements
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0, PageRequest::DEFAULT_SIZE)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request() {
        let req = PageRequest::new(2, 10);
        assert_eq!(req.offset(), 20);
        assert_eq!(req.limit(), 10);
        assert!(req.sort.is_none());
    }

    #[test]
    fn test_page_request_max_size() {
        let req = PageRequest::new(0, 1000);
        assert_eq!(req.size, PageRequest::MAX_SIZE);
    }

    #[test]
    fn test_offset_saturates_for_huge_page_numbers() {
        let req = PageRequest::new(usize::MAX / 2, 100);
        assert_eq!(req.offset(), usize::MAX);

        let req = PageRequest::new(usize::MAX, 1);
        assert_eq!(req.offset(), usize::MAX);
    }

    #[test]
    fn test_page_request_first() {
        let req = PageRequest::first();
        assert_eq!(req.page, 0);
        assert_eq!(req.size, PageRequest::DEFAULT_SIZE);
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn test_sort_order_parse() {
        let sort = SortOrder::parse("firstName,desc").unwrap();
        assert_eq!(sort.field, SortField::FirstName);
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort = SortOrder::parse("email").unwrap();
        assert_eq!(sort.field, SortField::Email);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_order_parse_rejects_unknown() {
        assert!(SortOrder::parse("password,asc").is_none());
        assert!(SortOrder::parse("firstName,sideways").is_none());
        assert!(SortOrder::parse("").is_none());
    }

    #[test]
    fn test_sort_field_columns() {
        assert_eq!(SortField::BirthDate.column(), "birth_date");
        assert_eq!(SortField::Id.column(), "id");
        assert_eq!(SortDirection::Desc.keyword(), "DESC");
    }

    #[test]
    fn test_page_info() {
        let page: Page<i32> = Page::new(vec![1, 2, 3], 0, 10, 25);
        assert!(page.info.first);
        assert!(!page.info.last);
        assert_eq!(page.info.total_pages, 3);
    }

    #[test]
    fn test_page_info_last_page() {
        let page: Page<i32> = Page::new(vec![1, 2], 2, 10, 22);
        assert!(!page.info.first);
        assert!(page.info.last);
    }

    #[test]
    fn test_page_map() {
        let page = Page::new(vec![1, 2, 3], 0, 10, 3);
        let mapped = page.map(|x| x * 2);
        assert_eq!(mapped.content, vec![2, 4, 6]);
    }

    #[test]
    fn test_page_empty() {
        let page: Page<i32> = Page::empty(0, 10);
        assert!(page.is_empty());
        assert_eq!(page.len(), 0);
        assert_eq!(page.total_elements(), 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn test_page_total_elements_and_pages() {
        let page: Page<i32> = Page::new(vec![1], 0, 5, 11);
        assert_eq!(page.total_elements(), 11);
        assert_eq!(page.total_pages(), 3); // ceil(11/5) = 3
    }

    #[test]
    fn test_page_envelope_field_names() {
        let page: Page<i32> = Page::new(vec![1, 2], 1, 2, 5);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["content"], serde_json::json!([1, 2]));
        assert_eq!(json["number"], 1);
        assert_eq!(json["size"], 2);
        assert_eq!(json["totalElements"], 5);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["numberOfElements"], 2);
        assert_eq!(json["first"], false);
        assert_eq!(json["last"], false);
    }
}
