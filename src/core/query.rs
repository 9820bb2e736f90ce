use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => write!(f, "asc"),
            Direction::Desc => write!(f, "desc"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub field: &'static str,
    pub direction: Direction,
}

impl SortKey {
    pub const fn asc(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Asc,
        }
    }

    pub const fn desc(field: &'static str) -> Self {
        Self {
            field,
            direction: Direction::Desc,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// 單一集合的讀取查詢，依內容服務的 query-string 慣例組成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentQuery {
    collection: String,
    filters: Vec<(String, String)>,
    populate_all: bool,
    sort: Option<SortKey>,
}

impl ContentQuery {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            filters: Vec::new(),
            populate_all: false,
            sort: None,
        }
    }

    /// 等值過濾，例如 `filters[slug][$eq]=lake-view`
    pub fn filter_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((field.into(), value.into()));
        self
    }

    pub fn populate_all(mut self) -> Self {
        self.populate_all = true;
        self
    }

    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = Some(key);
        self
    }

    pub fn without_sort(mut self) -> Self {
        self.sort = None;
        self
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        self.sort
    }

    /// 依 filters、populate、sort 的順序輸出查詢參數（未編碼）
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .filters
            .iter()
            .map(|(field, value)| (format!("filters[{}][$eq]", field), value.clone()))
            .collect();

        if self.populate_all {
            pairs.push(("populate".to_string(), "*".to_string()));
        }

        if let Some(sort) = self.sort {
            pairs.push(("sort".to_string(), sort.to_string()));
        }

        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_order() {
        let query = ContentQuery::new("blog-posts")
            .sort(SortKey::desc("date"))
            .populate_all()
            .filter_eq("slug", "malankara-dam-history");

        assert_eq!(
            query.query_pairs(),
            vec![
                (
                    "filters[slug][$eq]".to_string(),
                    "malankara-dam-history".to_string()
                ),
                ("populate".to_string(), "*".to_string()),
                ("sort".to_string(), "date:desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_plain_query_has_no_pairs() {
        let query = ContentQuery::new("navigation-items");
        assert!(query.query_pairs().is_empty());
        assert_eq!(query.collection(), "navigation-items");
    }

    #[test]
    fn test_without_sort_drops_sort() {
        let query = ContentQuery::new("blog-posts")
            .sort(SortKey::desc("date"))
            .without_sort();
        assert_eq!(query.sort_key(), None);
    }

    #[test]
    fn test_sort_key_display() {
        assert_eq!(SortKey::asc("order").to_string(), "order:asc");
        assert_eq!(SortKey::desc("date").to_string(), "date:desc");
    }
}
