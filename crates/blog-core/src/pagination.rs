//! Paging and sorting rules for post listings.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::Post;
use crate::error::DomainError;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(DomainError::Validation(format!(
                "unknown sort direction '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// Post attributes a listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSortField {
    Id,
    Title,
    Author,
    CreatedAt,
    UpdatedAt,
}

impl FromStr for PostSortField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "id" => Ok(Self::Id),
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            other => Err(DomainError::Validation(format!(
                "unknown sort field '{other}'"
            ))),
        }
    }
}

impl fmt::Display for PostSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Author => "author",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
        };
        f.write_str(name)
    }
}

/// Ordering for a post listing. Ties are broken by id in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostSort {
    pub field: PostSortField,
    pub direction: SortDirection,
}

impl Default for PostSort {
    fn default() -> Self {
        Self {
            field: PostSortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for PostSort {
    type Err = DomainError;

    /// Parses `field[,direction]`; a bare field sorts ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let field = parts.next().unwrap_or_default().parse()?;
        let direction = match parts.next() {
            Some(dir) => dir.parse()?,
            None => SortDirection::Asc,
        };
        if parts.next().is_some() {
            return Err(DomainError::Validation(format!(
                "sort '{s}' must look like 'field' or 'field,direction'"
            )));
        }

        Ok(Self { field, direction })
    }
}

impl PostSort {
    /// Compare two posts under this ordering.
    pub fn compare(&self, a: &Post, b: &Post) -> Ordering {
        let by_field = match self.field {
            PostSortField::Id => Ordering::Equal,
            PostSortField::Title => a.title.cmp(&b.title),
            PostSortField::Author => a.author.cmp(&b.author),
            PostSortField::CreatedAt => a.created_at.cmp(&b.created_at),
            PostSortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        let ordering = by_field.then_with(|| a.id.cmp(&b.id));

        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// A request for one page of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u64,
    pub size: u64,
    pub sort: PostSort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: PostSort::default(),
        }
    }
}

impl PageRequest {
    /// Build a request from raw query values, applying defaults.
    ///
    /// A size below one falls back to the default; sizes above
    /// [`MAX_PAGE_SIZE`] are clamped. A blank sort means the default sort.
    /// The row offset must fit a signed 64-bit SQL `OFFSET`.
    pub fn from_parts(
        page: Option<u64>,
        size: Option<u64>,
        sort: Option<&str>,
    ) -> Result<Self, DomainError> {
        let size = match size {
            Some(0) | None => DEFAULT_PAGE_SIZE,
            Some(size) => size.min(MAX_PAGE_SIZE),
        };
        let sort = match sort.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse()?,
            _ => PostSort::default(),
        };

        let page = page.unwrap_or(0);
        if page
            .checked_mul(size)
            .is_none_or(|offset| offset > i64::MAX as u64)
        {
            return Err(DomainError::Validation(format!(
                "Page index {page} is out of range"
            )));
        }

        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn post(id: i64, title: &str, minutes_ago: i64) -> Post {
        let at = Utc::now() - Duration::minutes(minutes_ago);
        Post {
            id,
            title: title.to_string(),
            content: String::new(),
            author: String::new(),
            category_id: 1,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn defaults_are_first_page_of_ten_newest_first() {
        let req = PageRequest::from_parts(None, None, None).unwrap();

        assert_eq!(req, PageRequest::default());
        assert_eq!(req.size, 10);
        assert_eq!(req.sort.field, PostSortField::CreatedAt);
        assert_eq!(req.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn size_is_clamped_and_zero_falls_back() {
        assert_eq!(PageRequest::from_parts(None, Some(0), None).unwrap().size, 10);
        assert_eq!(PageRequest::from_parts(None, Some(500), None).unwrap().size, 100);
    }

    #[test]
    fn parses_field_and_direction() {
        let sort: PostSort = "title,DESC".parse().unwrap();
        assert_eq!(sort.field, PostSortField::Title);
        assert_eq!(sort.direction, SortDirection::Desc);

        let sort: PostSort = "updatedAt".parse().unwrap();
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn rejects_unknown_sort() {
        assert!(matches!(
            "popularity,desc".parse::<PostSort>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "title,sideways".parse::<PostSort>(),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            "title,asc,extra".parse::<PostSort>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn offset_is_page_times_size() {
        let req = PageRequest::from_parts(Some(3), Some(20), None).unwrap();
        assert_eq!(req.offset(), 60);
    }

    #[test]
    fn page_beyond_sql_offset_range_is_rejected() {
        assert!(matches!(
            PageRequest::from_parts(Some(u64::MAX), None, None),
            Err(DomainError::Validation(_))
        ));

        let last_ok = i64::MAX as u64 / 100;
        let req = PageRequest::from_parts(Some(last_ok), Some(100), None).unwrap();
        assert!(req.offset() <= i64::MAX as u64);
        assert!(PageRequest::from_parts(Some(last_ok + 1), Some(100), None).is_err());
    }

    #[test]
    fn compare_breaks_ties_by_id() {
        let mut a = post(1, "same", 5);
        let mut b = post(2, "same", 5);
        b.created_at = a.created_at;
        a.updated_at = a.created_at;

        let desc = PostSort::default();
        assert_eq!(desc.compare(&a, &b), Ordering::Greater);

        let by_title: PostSort = "title,asc".parse().unwrap();
        assert_eq!(by_title.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn default_sort_puts_newest_first() {
        let mut posts = vec![post(1, "old", 30), post(2, "new", 1), post(3, "mid", 10)];
        let sort = PostSort::default();
        posts.sort_by(|a, b| sort.compare(a, b));

        let ids: Vec<i64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
