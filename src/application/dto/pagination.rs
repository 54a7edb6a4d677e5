use crate::domain::article::PageRequest;
use serde::{Deserialize, Serialize};

/// Length-aware page: the rows of one page plus enough metadata for a client
/// to walk the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: serde::de::DeserializeOwned"
))]
pub struct Paginated<T> {
    pub current_page: u32,
    pub data: Vec<T>,
    pub first_page_url: String,
    pub from: Option<u64>,
    pub last_page: u32,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub path: String,
    pub per_page: u32,
    pub prev_page_url: Option<String>,
    pub to: Option<u64>,
    pub total: u64,
}

impl<T> Paginated<T> {
    pub fn new(data: Vec<T>, total: u64, request: PageRequest, path: impl Into<String>) -> Self {
        let path = path.into();
        let current_page = request.page();
        let per_page = request.per_page();
        let last_page = last_page(total, per_page);

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            let from = request.offset() + 1;
            (Some(from), Some(from + data.len() as u64 - 1))
        };

        let url = |page: u32| format!("{path}?page={page}");
        let next_page_url = (current_page < last_page).then(|| url(current_page + 1));
        let prev_page_url = (current_page > 1).then(|| url(current_page - 1));

        Self {
            current_page,
            first_page_url: url(1),
            last_page_url: url(last_page),
            next_page_url,
            prev_page_url,
            from,
            to,
            last_page,
            per_page,
            total,
            data,
            path,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            current_page: self.current_page,
            data: self.data.into_iter().map(f).collect(),
            first_page_url: self.first_page_url,
            from: self.from,
            last_page: self.last_page,
            last_page_url: self.last_page_url,
            next_page_url: self.next_page_url,
            path: self.path,
            per_page: self.per_page,
            prev_page_url: self.prev_page_url,
            to: self.to,
            total: self.total,
        }
    }
}

fn last_page(total: u64, per_page: u32) -> u32 {
    let per_page = u64::from(per_page.max(1));
    let pages = total.div_ceil(per_page).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_has_single_page() {
        let page: Paginated<i32> = Paginated::new(vec![], 0, PageRequest::default(), "/articles");
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
        assert_eq!(page.next_page_url, None);
        assert_eq!(page.prev_page_url, None);
        assert_eq!(page.first_page_url, "/articles?page=1");
        assert_eq!(page.last_page_url, "/articles?page=1");
    }

    #[test]
    fn middle_page_links_both_ways() {
        let request = PageRequest::new(2, 5);
        let page = Paginated::new(vec![6, 7, 8, 9, 10], 12, request, "/api/v1/articles");
        assert_eq!(page.current_page, 2);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.from, Some(6));
        assert_eq!(page.to, Some(10));
        assert_eq!(page.per_page, 5);
        assert_eq!(page.total, 12);
        assert_eq!(page.next_page_url.as_deref(), Some("/api/v1/articles?page=3"));
        assert_eq!(page.prev_page_url.as_deref(), Some("/api/v1/articles?page=1"));
        assert_eq!(page.last_page_url, "/api/v1/articles?page=3");
    }

    #[test]
    fn page_past_the_end_is_empty_but_keeps_metadata() {
        let page: Paginated<i32> = Paginated::new(vec![], 4, PageRequest::new(9, 2), "/a");
        assert_eq!(page.current_page, 9);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.from, None);
        assert_eq!(page.next_page_url, None);
        assert_eq!(page.prev_page_url.as_deref(), Some("/a?page=8"));
    }

    #[test]
    fn map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2], 2, PageRequest::default(), "/a").map(|n| n * 10);
        assert_eq!(page.data, vec![10, 20]);
        assert_eq!(page.total, 2);
        assert_eq!(page.to, Some(2));
    }
}
