use tabled::builder::Builder;
use tabled::settings::Style;
use views::Page;

/// A table column: header text plus the accessor that renders one cell.
pub struct Column<T> {
    pub header: &'static str,
    pub cell: fn(&T) -> String,
}

impl<T> Column<T> {
    pub const fn new(header: &'static str, cell: fn(&T) -> String) -> Self {
        Self { header, cell }
    }
}

pub fn render_rows<T>(rows: &[T], columns: &[Column<T>]) -> String {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|column| column.header.to_string()));
    for row in rows {
        builder.push_record(columns.iter().map(|column| (column.cell)(row)));
    }

    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Renders the current page followed by its pagination control line.
pub fn render_page<T>(page: &Page<T>, columns: &[Column<T>]) -> String {
    if page.total_items == 0 {
        return "No matching records.".to_string();
    }
    format!("{}\n{}", render_rows(&page.items, columns), controls(page))
}

pub fn controls<T>(page: &Page<T>) -> String {
    format!(
        "Showing {}-{} of {} · page {}/{}{}{}",
        page.first_position(),
        page.last_position(),
        page.total_items,
        page.page,
        page.total_pages.max(1),
        if page.has_previous() { "  [prev]" } else { "" },
        if page.has_next() { "  [next]" } else { "" },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use views::paginate;

    fn columns() -> Vec<Column<(u32, &'static str)>> {
        vec![
            Column::new("ID", |row: &(u32, &'static str)| row.0.to_string()),
            Column::new("Name", |row: &(u32, &'static str)| row.1.to_string()),
        ]
    }

    #[test]
    fn test_rows_include_headers_and_cells() {
        let out = render_rows(&[(1, "Ada"), (2, "Grace")], &columns());
        assert!(out.contains("ID"));
        assert!(out.contains("Name"));
        assert!(out.contains("Grace"));
    }

    #[test]
    fn test_page_controls_line() {
        let rows: Vec<(u32, &str)> = (1..=13).map(|i| (i, "x")).collect();
        let page = paginate(&rows, 10, 2);
        let out = render_page(&page, &columns());
        assert!(out.ends_with("Showing 11-13 of 13 · page 2/2  [prev]"));
    }

    #[test]
    fn test_empty_page() {
        let rows: Vec<(u32, &str)> = Vec::new();
        let page = paginate(&rows, 10, 1);
        assert_eq!(render_page(&page, &columns()), "No matching records.");
    }
}
