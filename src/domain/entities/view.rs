use crate::domain::entities::employee::Gender;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterCriteria {
    pub gender: Option<Gender>,
    pub country: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    FirstName,
    Age,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Asc => "▲",
            SortDirection::Desc => "▼",
        }
    }
}

/// `key: None` keeps source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Same key while ascending flips to descending; anything else starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self::by(key, direction)
    }
}

/// 1-based current page; `1 <= current <= total` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current: usize,
    total: usize,
}

impl PageState {
    pub fn new(total: usize) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn go_to(&mut self, page: usize) {
        self.current = page.clamp(1, self.total);
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total.max(1);
        self.current = self.current.min(self.total);
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Page(usize),
    Ellipsis,
}

impl PageLabel {
    pub fn is_active(&self, current: usize) -> bool {
        matches!(self, PageLabel::Page(page) if *page == current)
    }

    pub fn text(&self) -> String {
        match self {
            PageLabel::Page(page) => page.to_string(),
            PageLabel::Ellipsis => "...".to_string(),
        }
    }
}
