//! Line tokenizer for the bulk-import format.
//!
//! Not a general CSV reader. Quoted fields cannot span physical lines, a
//! quote character only toggles whether commas separate fields, and doubled
//! quotes are unescaped in a trim pass after the surrounding pair has been
//! stripped. Changing any of this changes which rows get accepted.

/// Splits raw import text into tokenized rows. The first line is the header
/// and is skipped without being inspected; blank lines are ignored; lines
/// with fewer than `min_fields` fields are dropped.
pub fn tokenize(raw: &str, min_fields: usize) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in raw.split('\n').skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields = tokenize_line(line);
        if fields.len() < min_fields {
            log::debug!(
                "dropping row with {} of {} expected columns: {}",
                fields.len(),
                min_fields,
                line
            );
            continue;
        }
        rows.push(fields);
    }
    rows
}

fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                field.push(c);
            }
            ',' if !in_quotes => {
                fields.push(trim_field(&field));
                field.clear();
            }
            _ => field.push(c),
        }
    }
    fields.push(trim_field(&field));
    fields
}

/// Trim pass, in order: whitespace, one surrounding quote pair, `""` to
/// `"`. The ordering matters for fields like `"She said ""hi""."`.
fn trim_field(field: &str) -> String {
    let field = field.trim();
    let field = if field.len() >= 2 && field.starts_with('"') && field.ends_with('"') {
        &field[1..field.len() - 1]
    } else {
        field
    };
    field.replace("\"\"", "\"")
}
