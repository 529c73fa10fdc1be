use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::entities::employee::{Employee, Gender};
use crate::domain::entities::view::{PageLabel, SortKey};
use crate::infra::http::source::HttpEmployeeSource;
use crate::ui::state::app_state::AppState;
use crate::ui::state::lifecycle::Liveness;
use crate::ui::styles::{
    header_bar_style, page_button_style, root_container_style, table_cell_style,
    table_container_style, table_header_cell_style, user_image_style,
};
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::pagination::pagination_window;
use crate::usecase::services::view_service::ViewCache;
use crate::AppConfig;

#[component]
fn FilterBar(on_gender: EventHandler<Option<Gender>>, on_country: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: center;",
            select {
                name: "gender",
                style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px;",
                onchange: move |event| {
                    on_gender.call(Gender::from_filter_value(&event.value()));
                },
                option { value: "", disabled: true, selected: true, "Gender" }
                option { value: "", "All" }
                option { value: Gender::Male.as_str(), "Male" }
                option { value: Gender::Female.as_str(), "Female" }
            }
            input {
                name: "country",
                r#type: "text",
                placeholder: "Country",
                style: "padding: 4px 8px; border: 1px solid #bbb; border-radius: 6px;",
                oninput: move |event| {
                    on_country.call(event.value());
                },
            }
        }
    }
}

#[component]
fn SortHeader(
    label: &'static str,
    indicator: Option<&'static str>,
    on_sort: EventHandler<()>,
) -> Element {
    let indicator = indicator.unwrap_or_default();
    rsx! {
        th {
            style: table_header_cell_style(true),
            onclick: move |_| on_sort.call(()),
            "{label} {indicator}"
        }
    }
}

#[component]
fn EmployeeRow(employee: Employee) -> Element {
    let id = employee.id;
    let full_name = employee.full_name();
    let age = employee.age;
    let gender = employee.gender.as_str();
    let location = employee.location();
    rsx! {
        tr {
            td { style: table_cell_style(), "{id}" }
            td { style: table_cell_style(), "{full_name}" }
            td { style: table_cell_style(), "{age}" }
            td { style: table_cell_style(), "{gender}" }
            td { style: table_cell_style(),
                img {
                    src: employee.image.clone(),
                    alt: employee.first_name.clone(),
                    style: user_image_style(),
                }
            }
            td { style: table_cell_style(), "{location}" }
        }
    }
}

#[component]
fn PaginationBar(current: usize, total: usize, on_page: EventHandler<usize>) -> Element {
    let labels = pagination_window(current, total);
    rsx! {
        div {
            style: "display: flex; gap: 6px; justify-content: center; padding: 10px 0;",
            {labels.into_iter().enumerate().map(|(idx, label)| {
                let active = label.is_active(current);
                let text = label.text();
                rsx!(
                    button {
                        key: "{idx}",
                        style: page_button_style(active),
                        disabled: label == PageLabel::Ellipsis,
                        onclick: move |_| {
                            if let PageLabel::Page(page) = label {
                                on_page.call(page);
                            }
                        },
                        "{text}"
                    }
                )
            })}
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    let AppState {
        mut records,
        mut table,
        mut busy,
        mut status,
    } = AppState::new();

    let liveness = use_hook(Liveness::mounted);
    let view_cache = use_hook(|| Rc::new(RefCell::new(ViewCache::new())));

    let liveness_for_drop = liveness.clone();
    use_drop(move || liveness_for_drop.end());

    let liveness_for_load = liveness.clone();
    let endpoint = config.endpoint.clone();
    use_hook(move || {
        spawn(async move {
            let service = LoadService::new(Arc::new(HttpEmployeeSource::new(endpoint)));
            let outcome = service.load().await;
            if !liveness_for_load.is_live() {
                log::warn!("employee list arrived after teardown; ignoring");
                return;
            }

            let total_pages = outcome.records.total_pages();
            *status.write() = match &outcome.failure {
                Some(err) => format!("Failed to load employees: {err}"),
                None => format!("Loaded {} employees", outcome.records.len()),
            };
            records.set(outcome.records);
            table.write().set_total_pages(total_pages);
            busy.set(false);
        })
    });

    let table_snapshot = table();
    let page_state = table_snapshot.page();
    let current_rows: Vec<Employee> = view_cache
        .borrow_mut()
        .page(
            &records.read(),
            table_snapshot.filter(),
            table_snapshot.sort(),
            page_state.current(),
        )
        .into_iter()
        .cloned()
        .collect();
    let matching = view_cache.borrow_mut().matching_count(
        &records.read(),
        table_snapshot.filter(),
        table_snapshot.sort(),
    );
    let title = config.window_title.clone();
    let id_indicator = table_snapshot.sort_indicator(SortKey::Id);
    let name_indicator = table_snapshot.sort_indicator(SortKey::FirstName);
    let age_indicator = table_snapshot.sort_indicator(SortKey::Age);

    rsx! {
        div {
            style: root_container_style(),

            div {
                style: header_bar_style(),
                h4 { style: "margin: 0;", "{title}" }
                span { style: "color: #666;",
                    if busy() { "Loading..." } else { "{status} ({matching} matching)" }
                }
                FilterBar {
                    on_gender: move |gender: Option<Gender>| {
                        table.write().set_gender_filter(gender);
                    },
                    on_country: move |country: String| {
                        table.write().set_country_filter(country);
                    },
                }
            }

            div {
                style: table_container_style(),
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    thead {
                        tr {
                            SortHeader {
                                label: "ID",
                                indicator: id_indicator,
                                on_sort: move |_| table.write().toggle_sort(SortKey::Id),
                            }
                            SortHeader {
                                label: "Name",
                                indicator: name_indicator,
                                on_sort: move |_| table.write().toggle_sort(SortKey::FirstName),
                            }
                            SortHeader {
                                label: "Age",
                                indicator: age_indicator,
                                on_sort: move |_| table.write().toggle_sort(SortKey::Age),
                            }
                            th { style: table_header_cell_style(false), "Gender" }
                            th { style: table_header_cell_style(false), "Image" }
                            th { style: table_header_cell_style(false), "Location" }
                        }
                    }
                    tbody {
                        {current_rows.into_iter().map(|employee| {
                            let row_key = employee.id;
                            rsx!(EmployeeRow { key: "{row_key}", employee })
                        })}
                    }
                }
            }

            PaginationBar {
                current: page_state.current(),
                total: page_state.total(),
                on_page: move |page: usize| {
                    table.write().go_to_page(page);
                },
            }
        }
    }
}
