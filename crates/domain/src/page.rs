use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

/// Pagination parameters for listing queries.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: u32,
    #[serde(default = "default_size")]
    pub size: u32,
    #[serde(default = "default_sort_field")]
    pub sort: String,
    #[serde(default)]
    pub order: SortOrder,
}

fn default_size() -> u32 {
    20
}

fn default_sort_field() -> String {
    "title".to_string()
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
            sort: default_sort_field(),
            order: SortOrder::Asc,
        }
    }
}

impl PageRequest {
    /// Row offset in u64 so client-supplied page/size values cannot overflow.
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_page_times_size() {
        let request = PageRequest {
            page: 3,
            size: 25,
            ..PageRequest::default()
        };
        assert_eq!(request.offset(), 75);
    }

    #[test]
    fn offset_does_not_overflow_on_extreme_page_values() {
        let request = PageRequest {
            page: u32::MAX,
            size: u32::MAX,
            ..PageRequest::default()
        };
        assert_eq!(
            request.offset(),
            u64::from(u32::MAX) * u64::from(u32::MAX)
        );
    }
}
