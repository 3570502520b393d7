pub fn escape_table_cell(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '|' => escaped.push_str("\\|"),
            '\n' | '\r' => escaped.push(' '),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// `[href](href)` for use inside a table cell.
pub fn table_cell_link(href: &str) -> String {
    let mut text = String::with_capacity(href.len());
    let mut destination = String::with_capacity(href.len());
    for ch in href.chars() {
        if matches!(ch, '\\' | '[' | ']') {
            text.push('\\');
        }
        text.push(ch);
        if matches!(ch, '\\' | '(' | ')' | ' ') {
            destination.push('\\');
        }
        destination.push(ch);
    }
    escape_table_cell(&format!("[{}]({})", text, destination))
}
