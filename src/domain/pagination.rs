use serde::{Deserialize, Serialize};

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

fn default_page() -> u32 { DEFAULT_PAGE }
fn default_limit() -> u32 { DEFAULT_LIMIT }

/// 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

impl Pagination {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Both values must be positive.
    pub fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page must be a positive integer".to_string());
        }
        if self.limit == 0 {
            return Err("limit must be a positive integer".to_string());
        }
        Ok(())
    }

    /// Records to skip before this page starts. Saturates on narrow platforms.
    pub fn skip(&self) -> usize {
        let skip = u64::from(self.page.saturating_sub(1)) * u64::from(self.limit);
        usize::try_from(skip).unwrap_or(usize::MAX)
    }

    pub fn take(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(usize::MAX)
    }

    /// `ceil(total / limit)`; zero when nothing matches.
    pub fn last_page(&self, total: usize) -> usize {
        total.div_ceil(self.take().max(1))
    }
}

/// One page of results plus its position in the full listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// `total` goes out as `totalPages`: existing callers read the matching
/// record count under that name, while `lastPage` holds the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: u32,
    #[serde(rename = "totalPages")]
    pub total: usize,
    pub last_page: usize,
}
