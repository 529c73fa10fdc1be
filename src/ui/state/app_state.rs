use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::employee::RecordSet;
use crate::ui::state::table_state::TableState;

pub struct AppState {
    pub records: Signal<RecordSet>,
    pub table: Signal<TableState>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: use_signal(RecordSet::empty),
            table: use_signal(|| TableState::new(1)),
            busy: use_signal(|| true),
            status: use_signal(|| "Loading employees...".to_string()),
        }
    }
}
