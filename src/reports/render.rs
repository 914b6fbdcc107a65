/// A result row that can be printed as part of a text table.
pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

/// Renders `rows` right-aligned under their headers, with a leading
/// row ordinal column.
pub fn render<T: Tabular>(rows: &[T]) -> String {
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    let header = std::iter::once(String::new())
        .chain(T::headers().iter().map(|h| h.to_string()))
        .collect::<Vec<_>>();
    let body = rows
        .iter()
        .enumerate()
        .map(|(i, row)| std::iter::once(i.to_string()).chain(row.cells()).collect())
        .collect::<Vec<Vec<String>>>();
    let widths = header
        .iter()
        .enumerate()
        .map(|(j, h)| {
            body.iter()
                .filter_map(|cells| cells.get(j))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();
    std::iter::once(&header)
        .chain(body.iter())
        .map(|cells| {
            cells
                .iter()
                .zip(widths.iter())
                .map(|(c, w)| format!("{:>w$}", c, w = *w))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Cell text for a nullable value.
pub fn cell<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => String::from("None"),
    }
}
