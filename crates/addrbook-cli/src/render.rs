use addrbook_core::{Page, Record};
use std::fmt;

const COLUMN_SEPARATOR: &str = " | ";

/// Plain text table with columns padded to their widest cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_row(cells);
        self
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn write_line(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let last = cells.len().saturating_sub(1);
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(COLUMN_SEPARATOR);
        }
        line.push_str(cell);
        if index < last {
            let padding = width.saturating_sub(cell.chars().count());
            line.extend(std::iter::repeat(' ').take(padding));
        }
    }
    writeln!(f, "{}", line.trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        write_line(f, &self.headers, &widths)?;
        let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;
        for row in &self.rows {
            write_line(f, row, &widths)?;
        }
        Ok(())
    }
}

pub fn contacts_table<'a>(records: impl IntoIterator<Item = &'a Record>) -> Table {
    let mut table = Table::new(["Name", "Birthday", "Phones"]);
    for record in records {
        table.push_row([
            record.name().to_string(),
            record.show_birthday(),
            record.show_phones(),
        ]);
    }
    table
}

/// Renders one page of a listing, with a page marker when the listing spans several pages.
pub fn page(page: &Page<'_>) -> String {
    let table = contacts_table(page.records);
    if page.total > 1 {
        format!("Page {}/{}\n{table}", page.number, page.total)
    } else {
        table.to_string()
    }
}
