use crate::domain::entities::employee::Gender;
use crate::domain::entities::view::{FilterCriteria, PageState, SortKey, SortSpec};

/// Filter, sort and page selections driven by user intents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    filter: FilterCriteria,
    sort: SortSpec,
    page: PageState,
}

impl TableState {
    pub fn new(total_pages: usize) -> Self {
        Self {
            page: PageState::new(total_pages),
            ..Self::default()
        }
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    /// Every filter edit goes back to page 1, whether or not the value changed.
    pub fn set_filter(&mut self, filter: FilterCriteria) {
        log::debug!("filter changed: {filter:?}");
        self.filter = filter;
        self.page.reset();
    }

    pub fn set_gender_filter(&mut self, gender: Option<Gender>) {
        let next = FilterCriteria {
            gender,
            ..self.filter.clone()
        };
        self.set_filter(next);
    }

    pub fn set_country_filter(&mut self, country: impl Into<String>) {
        let next = FilterCriteria {
            country: country.into(),
            ..self.filter.clone()
        };
        self.set_filter(next);
    }

    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggled(key);
        log::debug!("sort changed: {:?}", self.sort);
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page.go_to(page);
    }

    pub fn set_total_pages(&mut self, total: usize) {
        self.page.set_total(total);
    }

    /// `▲`/`▼` for the active sort column, nothing for the others.
    pub fn sort_indicator(&self, key: SortKey) -> Option<&'static str> {
        (self.sort.key == Some(key)).then(|| self.sort.direction.indicator())
    }
}
