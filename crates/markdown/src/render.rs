use cellsplit_table::Dataset;

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace("\r\n", "<br>").replace('\n', "<br>")
}

fn pad(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    for _ in text.chars().count()..width {
        out.push(' ');
    }
}

fn write_line(out: &mut String, cells: &[String], widths: &[usize]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        pad(out, cell, *width);
        out.push_str(" |");
    }
    out.push('\n');
}

/// Render a dataset as a GitHub-flavoured markdown pipe table.
///
/// Columns are padded to a common width. Pipes are escaped and line breaks
/// become `<br>`, so every row stays on one line. A dataset without columns
/// renders as an empty string.
#[must_use]
pub fn to_markdown(dataset: &Dataset) -> String {
    if dataset.col_count() == 0 {
        return String::new();
    }

    let header: Vec<String> = dataset.columns().iter().map(|c| escape_cell(c)).collect();
    let body: Vec<Vec<String>> = dataset
        .rows()
        .map(|row| row.iter().map(|cell| escape_cell(&cell.to_string())).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count().max(3)).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    write_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, &rule, &widths);
    for row in &body {
        write_line(&mut out, row, &widths);
    }
    out
}
