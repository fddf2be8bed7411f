use super::types::LocatorTable;

/// Quote a field when it contains a separator, quote or line break
pub fn escape_csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn push_record<'a, I>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = &'a str>,
{
    let escaped: Vec<String> = fields.into_iter().map(escape_csv_field).collect();
    out.push_str(&escaped.join(","));
    out.push('\n');
}

/// Comma-separated text with a header row
pub fn table_to_csv(table: &LocatorTable) -> String {
    let mut out = String::new();
    push_record(&mut out, table.headers());
    for record in table.records() {
        push_record(&mut out, record.iter().map(String::as_str));
    }
    out
}

impl LocatorTable {
    pub fn to_csv(&self) -> String {
        table_to_csv(self)
    }
}
