use std::sync::Arc;

use crate::domain::entities::employee::RecordSet;
use crate::usecase::ports::source::EmployeeSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub records: RecordSet,
    pub failure: Option<String>,
}

pub struct LoadService {
    source: Arc<dyn EmployeeSource>,
}

impl LoadService {
    pub fn new(source: Arc<dyn EmployeeSource>) -> Self {
        Self { source }
    }

    /// Fetches once. A failure is logged and turned into an empty record set;
    /// there is no retry.
    pub async fn load(&self) -> LoadOutcome {
        match self.source.fetch_all().await {
            Ok(records) => {
                log::info!("loaded {} employees", records.len());
                LoadOutcome {
                    records: RecordSet::new(records),
                    failure: None,
                }
            }
            Err(err) => {
                log::error!("error fetching employees: {err}");
                LoadOutcome {
                    records: RecordSet::empty(),
                    failure: Some(err.to_string()),
                }
            }
        }
    }
}
