//! Minimal ASCII table writer.

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Center,
    Right,
}

/// A bordered table with an upper-cased header, right-aligned body, and an
/// optional multi-line footer.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    footer: Vec<String>,
}

impl Table {
    /// Creates a table with the given column headers.
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        Self {
            header: header.iter().map(|h| h.as_ref().to_uppercase()).collect(),
            rows: Vec::new(),
            footer: Vec::new(),
        }
    }

    /// Appends a body row.
    pub fn row(mut self, cells: Vec<String>) -> Self {
        self.rows.push(cells);
        self
    }

    /// Sets the footer. Cells may span several lines.
    pub fn footer(mut self, cells: Vec<String>) -> Self {
        self.footer = cells;
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.header.len()];
        let all = std::iter::once(&self.header)
            .chain(&self.rows)
            .chain(std::iter::once(&self.footer));
        for cells in all {
            for (i, cell) in cells.iter().enumerate().take(widths.len()) {
                let width = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                widths[i] = widths[i].max(width);
            }
        }
        widths
    }

    /// Writes the table.
    pub fn render<W: Write>(&self, w: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let border = widths
            .iter()
            .map(|&width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let border = format!("+{border}+");

        writeln!(w, "{border}")?;
        write_cells(w, &self.header, &widths, Align::Center)?;
        writeln!(w, "{border}")?;
        for row in &self.rows {
            write_cells(w, row, &widths, Align::Right)?;
        }
        writeln!(w, "{border}")?;
        if !self.footer.is_empty() {
            write_cells(w, &self.footer, &widths, Align::Center)?;
            writeln!(w, "{border}")?;
        }
        Ok(())
    }
}

fn write_cells<W: Write>(w: &mut W, cells: &[String], widths: &[usize], align: Align) -> io::Result<()> {
    let lines: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line in 0..height {
        write!(w, "|")?;
        for (i, &width) in widths.iter().enumerate() {
            let text = lines.get(i).and_then(|l| l.get(line)).copied().unwrap_or("");
            match align {
                Align::Center => write!(w, " {text:^width$} |")?,
                Align::Right => write!(w, " {text:>width$} |")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(table: &Table) -> String {
        let mut out = Vec::new();
        table.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let table = Table::new(&["id", "burst"]).row(vec!["1".into(), "12".into()]);
        let expected = "\
+----+-------+
| ID | BURST |
+----+-------+
|  1 |    12 |
+----+-------+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_multiline_footer() {
        let table = Table::new(&["a", "b"])
            .row(vec!["1".into(), "2".into()])
            .footer(vec!["".into(), "Avg\n1.50".into()]);
        let expected = "\
+---+------+
| A |  B   |
+---+------+
| 1 |    2 |
+---+------+
|   | Avg  |
|   | 1.50 |
+---+------+
";
        assert_eq!(render(&table), expected);
    }

    #[test]
    fn test_empty_body() {
        let out = render(&Table::new(&["x"]));
        assert_eq!(out.lines().count(), 4);
    }
}
