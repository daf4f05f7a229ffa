//! Appointment table with sortable headers and row selection

use dioxus::prelude::*;
use showcase_core::widgets::{Appointment, Column, SortDirection, TableState};

use super::badge::{Badge, BadgeColor};

#[derive(Clone, PartialEq, Props)]
pub struct DataTableProps {
    pub rows: Vec<Appointment>,
}

#[component]
pub fn DataTable(props: DataTableProps) -> Element {
    let mut state = use_signal(|| TableState::new(props.rows.clone()));

    let (rows, all_selected): (Vec<(Appointment, bool)>, bool) = {
        let current = state.read();
        let rows = current
            .rows()
            .into_iter()
            .map(|row| (row.clone(), current.is_selected(row.id)))
            .collect();
        (rows, current.all_selected())
    };

    rsx! {
        div { class: "table-wrapper",
            table { class: "data-table",
                thead {
                    tr {
                        th { class: "table-check",
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                onchange: move |_| state.write().toggle_all(),
                            }
                        }
                        for column in Column::ALL {
                            th {
                                key: "{column.header()}",
                                class: "sortable",
                                onclick: move |_| {
                                    state.write().toggle_sort(column);
                                    tracing::debug!(sort = ?state.read().sort(), "Table sort changed");
                                },
                                "{column.header()}"
                                span { class: "sort-indicator", {sort_indicator(state.read().sorted(column))} }
                            }
                        }
                    }
                }
                tbody {
                    for (row, selected) in rows {
                        tr {
                            key: "{row.id}",
                            class: if selected { "selected" } else { "" },
                            td { class: "table-check",
                                input {
                                    r#type: "checkbox",
                                    checked: selected,
                                    onchange: move |_| state.write().toggle_row(row.id),
                                }
                            }
                            for column in Column::ALL {
                                td { key: "{column.header()}",
                                    if column == Column::Status {
                                        Badge { color: BadgeColor::for_status(row.cell(column)), "{row.cell(column)}" }
                                    } else {
                                        "{row.cell(column)}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        None => "↕",
        Some(SortDirection::Asc) => "↑",
        Some(SortDirection::Desc) => "↓",
    }
}
