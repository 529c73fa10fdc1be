use std::cmp::Ordering;

use crate::domain::entities::employee::{Employee, RecordSet};
use crate::domain::entities::view::{FilterCriteria, SortDirection, SortKey, SortSpec};
use crate::PAGE_SIZE;

pub fn matches_filter(employee: &Employee, filter: &FilterCriteria) -> bool {
    let gender_ok = filter
        .gender
        .map_or(true, |gender| employee.gender == gender);
    let country_ok = filter.country.is_empty()
        || employee
            .address
            .country
            .to_lowercase()
            .contains(&filter.country.to_lowercase());
    gender_ok && country_ok
}

pub fn filter_records<'a>(records: &'a [Employee], filter: &FilterCriteria) -> Vec<&'a Employee> {
    records
        .iter()
        .filter(|employee| matches_filter(employee, filter))
        .collect()
}

fn compare_by_key(a: &Employee, b: &Employee, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::FirstName => a.first_name.cmp(&b.first_name),
        SortKey::Age => a.age.cmp(&b.age),
    }
}

/// Stable: equal keys keep their input order in both directions.
pub fn sort_records(records: &mut [&Employee], sort: SortSpec) {
    let Some(key) = sort.key else {
        return;
    };
    records.sort_by(|a, b| directed(compare_by_key(a, b, key), sort.direction));
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Rows `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)`, truncated at the end.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[allow(dead_code)]
pub fn derive_view<'a>(
    records: &'a [Employee],
    filter: &FilterCriteria,
    sort: SortSpec,
    page: usize,
) -> Vec<&'a Employee> {
    let mut visible = filter_records(records, filter);
    sort_records(&mut visible, sort);
    page_slice(&visible, page).to_vec()
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewKey {
    generation: u64,
    filter: FilterCriteria,
    sort: SortSpec,
}

/// Remembers the filtered and sorted ordering (as indices into the record set)
/// for the last `(record set, filter, sort)` seen. Page changes reuse it.
#[derive(Debug, Default)]
pub struct ViewCache {
    key: Option<ViewKey>,
    ordering: Vec<usize>,
    recomputations: usize,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn refresh(&mut self, records: &RecordSet, filter: &FilterCriteria, sort: SortSpec) {
        let key = ViewKey {
            generation: records.generation(),
            filter: filter.clone(),
            sort,
        };
        if self.key.as_ref() == Some(&key) {
            return;
        }

        let all = records.records();
        let mut ordering: Vec<usize> = (0..all.len())
            .filter(|&idx| matches_filter(&all[idx], filter))
            .collect();
        if let Some(sort_key) = sort.key {
            ordering.sort_by(|&a, &b| {
                directed(compare_by_key(&all[a], &all[b], sort_key), sort.direction)
            });
        }
        self.ordering = ordering;
        self.key = Some(key);
        self.recomputations += 1;
        log::debug!(
            "recomputed view: {} of {} records match",
            self.ordering.len(),
            all.len()
        );
    }

    pub fn page<'a>(
        &mut self,
        records: &'a RecordSet,
        filter: &FilterCriteria,
        sort: SortSpec,
        page: usize,
    ) -> Vec<&'a Employee> {
        self.refresh(records, filter, sort);
        let all = records.records();
        page_slice(&self.ordering, page)
            .iter()
            .filter_map(|idx| all.get(*idx))
            .collect()
    }

    pub fn matching_count(&mut self, records: &RecordSet, filter: &FilterCriteria, sort: SortSpec) -> usize {
        self.refresh(records, filter, sort);
        self.ordering.len()
    }

    #[allow(dead_code)]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
