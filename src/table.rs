// src/table.rs

/// A fetched dataset, split into a header row and data rows.
///
/// Rows are not padded to the header width, so consumers index defensively
/// and treat a missing cell as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the first non-blank line of the CSV.
    pub header: Vec<String>,
    /// Each subsequent non-blank line, one trimmed field per cell.
    pub rows: Vec<Vec<String>>,
}

/// Parse published-spreadsheet CSV text into a [`RawTable`].
///
/// Lines that are empty or whitespace-only are dropped before anything
/// else, so blank rows in the sheet never show up as empty records. The
/// first surviving line is the header.
pub fn parse_csv(text: &str) -> RawTable {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let header = match lines.next() {
        Some(line) => split_line(line),
        None => {
            return RawTable {
                header: Vec::new(),
                rows: Vec::new(),
            }
        }
    };
    let rows = lines
        .map(split_line)
        .filter(|parts| !parts.is_empty())
        .collect();
    RawTable { header, rows }
}

/// Split one CSV line into fields.
///
/// A double quote toggles quoted mode and is never emitted; a `""` pair
/// toggles twice, removing both characters (no RFC 4180 unescaping). A
/// comma outside quoted mode ends the field, trimmed of surrounding
/// whitespace. The trailing buffer is recorded only if it is non-empty
/// before trimming, so a line ending in a bare comma yields no trailing
/// empty field.
fn split_line(line: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut cur = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(cur.trim().to_string());
                cur.clear();
            }
            _ => cur.push(ch),
        }
    }
    if !cur.is_empty() {
        parts.push(cur.trim().to_string());
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_and_rows_split() {
        let table = parse_csv("Registration#,Name,Hours\r\nVIS001,Ada,65\nVIS002,Grace,12\n");
        assert_eq!(table.header, vec!["Registration#", "Name", "Hours"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["VIS001", "Ada", "65"]);
        assert_eq!(table.rows[1], vec!["VIS002", "Grace", "12"]);
    }

    #[test]
    fn quoted_comma_is_one_field() {
        let table = parse_csv("Registration#,Name\nVIS001,\"Smith, John\"");
        assert_eq!(table.rows[0], vec!["VIS001", "Smith, John"]);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let table = parse_csv("\n  \nReg,Name\n\nVIS001,Ada\n   \nVIS002,Grace\n\n");
        assert_eq!(table.header, vec!["Reg", "Name"]);
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn trailing_comma_yields_no_empty_field() {
        let table = parse_csv("Reg,Name,Status\nVIS001,Ada,");
        assert_eq!(table.rows[0], vec!["VIS001", "Ada"]);
    }

    #[test]
    fn whitespace_only_trailing_field_is_kept_empty() {
        // the buffer is non-empty before trimming, so the field survives
        let table = parse_csv("Reg,Name\nVIS001,   ");
        assert_eq!(table.rows[0], vec!["VIS001", ""]);
    }

    #[test]
    fn quote_pair_toggles_twice() {
        let table = parse_csv("Reg,Note\nVIS001,say \"\"hi\"\" there");
        assert_eq!(table.rows[0], vec!["VIS001", "say hi there"]);
    }

    #[test]
    fn fields_are_trimmed() {
        let table = parse_csv("Reg , Name \n VIS001 ,  Ada Lovelace ");
        assert_eq!(table.header, vec!["Reg", "Name"]);
        assert_eq!(table.rows[0], vec!["VIS001", "Ada Lovelace"]);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = parse_csv("");
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
        let table = parse_csv("\n\n   \n");
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn line_with_no_fields_contributes_no_row() {
        // a lone quote toggles quoted mode and produces zero fields
        let table = parse_csv("Reg,Name\n\"\nVIS001,Ada");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["VIS001", "Ada"]);
    }

    #[test]
    fn rows_may_be_shorter_or_longer_than_header() {
        let table = parse_csv("Reg,Name,Hours\nVIS001\nVIS002,Grace,12,extra");
        assert_eq!(table.rows[0], vec!["VIS001"]);
        assert_eq!(table.rows[1], vec!["VIS002", "Grace", "12", "extra"]);
    }
}
