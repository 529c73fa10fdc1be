pub fn root_container_style() -> &'static str {
    "font-family: sans-serif; padding: 12px; background: #fff; height: 100vh; display: flex; flex-direction: column; overflow: hidden; box-sizing: border-box;"
}

pub fn header_bar_style() -> &'static str {
    "display: flex; justify-content: space-between; align-items: center; gap: 8px; margin-bottom: 12px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 6px;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "position: sticky; top: 0; z-index: 10; background: #f5f5f5; border: 1px solid #bbb; padding: 6px 8px; text-align: left; cursor: {cursor}; user-select: none;"
    )
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #bbb; padding: 4px 8px; vertical-align: middle;"
}

pub fn user_image_style() -> &'static str {
    "width: 40px; height: 40px; border-radius: 50%; object-fit: cover;"
}

pub fn page_button_style(active: bool) -> &'static str {
    if active {
        "padding: 4px 10px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px; font-weight: bold;"
    } else {
        "padding: 4px 10px; border: 1px solid #bbb; background: #fff; border-radius: 6px;"
    }
}
