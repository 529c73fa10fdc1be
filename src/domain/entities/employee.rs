use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Deserialize;

use crate::PAGE_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Parses a selector value; the empty string (and anything unknown) means "no constraint".
    pub fn from_filter_value(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub state: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub gender: Gender,
    pub image: String,
    pub address: Address,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn location(&self) -> String {
        format!("{}, {}", self.address.state, self.address.country)
    }
}

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// The records loaded at mount. Never mutated afterwards; each instance gets
/// its own generation so derived views can tell record sets apart cheaply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    generation: u64,
    records: Arc<[Employee]>,
}

impl RecordSet {
    pub fn new(records: Vec<Employee>) -> Self {
        Self {
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
            records: records.into(),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Never less than one, so an empty set still shows a single page.
    pub fn total_pages(&self) -> usize {
        total_pages_for(self.len())
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::empty()
    }
}

pub fn total_pages_for(record_count: usize) -> usize {
    record_count.div_ceil(PAGE_SIZE).max(1)
}
