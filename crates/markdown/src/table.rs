use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};

use crate::error::{MarkdownError, Result};

/// A pipe table as raw cell text.
#[derive(Debug, Clone)]
pub struct MarkdownTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct MarkdownTables {
    pub tables: Vec<MarkdownTable>,
}

/// Filters applied to tables found in a document.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownOptions {
    /// Minimum number of body rows.
    pub min_table_rows: usize,
    pub min_table_cols: usize,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            min_table_rows: 1,
            min_table_cols: 1,
        }
    }
}

impl MarkdownTables {
    pub fn from_markdown(markdown: &str) -> Result<Self> {
        Self::from_markdown_with_options(markdown, MarkdownOptions::default())
    }

    pub fn from_markdown_with_options(markdown: &str, options: MarkdownOptions) -> Result<Self> {
        let arena = Arena::new();
        let mut comrak_options = Options::default();
        comrak_options.extension.table = true;

        let root = parse_document(&arena, markdown, &comrak_options);
        let mut tables = Vec::new();
        collect_tables(root, &mut tables)?;

        let found = tables.len();
        let filtered: Vec<MarkdownTable> = tables
            .into_iter()
            .filter(|table| {
                table.rows.len() >= options.min_table_rows
                    && table.headers.len() >= options.min_table_cols
            })
            .collect();

        tracing::trace!(found, kept = filtered.len(), "parsed markdown tables");
        Ok(Self { tables: filtered })
    }
}

fn collect_tables<'a>(node: &'a AstNode<'a>, tables: &mut Vec<MarkdownTable>) -> Result<()> {
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Table(_) => {
                tables.push(extract_table(child)?);
            }
            _ => {
                collect_tables(child, tables)?;
            }
        }
    }
    Ok(())
}

fn extract_table<'a>(table_node: &'a AstNode<'a>) -> Result<MarkdownTable> {
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();

    for child in table_node.children() {
        if let NodeValue::TableRow(is_header) = &child.data.borrow().value {
            if *is_header {
                headers = Some(extract_table_row(child));
            } else {
                rows.push(extract_table_row(child));
            }
        }
    }

    let headers = headers.ok_or(MarkdownError::InvalidTable)?;
    Ok(MarkdownTable { headers, rows })
}

fn extract_table_row<'a>(row_node: &'a AstNode<'a>) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in row_node.children() {
        if let NodeValue::TableCell = &cell.data.borrow().value {
            cells.push(extract_text(cell));
        }
    }
    cells
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn is_line_break_tag(html: &str) -> bool {
    matches!(
        html.trim().to_ascii_lowercase().as_str(),
        "<br>" | "<br/>" | "<br />"
    )
}

fn collect_text<'a>(node: &'a AstNode<'a>, output: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => {
            output.push_str(text);
        }
        NodeValue::Code(code) => {
            output.push_str(&code.literal);
        }
        // Merged cells keep their line structure through `<br>`.
        NodeValue::HtmlInline(html) if is_line_break_tag(html) => {
            output.push('\n');
        }
        NodeValue::SoftBreak | NodeValue::LineBreak => {
            output.push(' ');
        }
        _ => {
            for child in node.children() {
                collect_text(child, output);
            }
        }
    }
}
