use crate::{FieldRecord, NodeLayout};

/// Width the quoted offset label is padded to.
pub const LABEL_WIDTH: usize = 10;

/// Render one record as `'<label>'` followed by an empty column and its fields.
///
/// # Examples
/// ```
/// use nodedump_core::{FieldRecord, Region, Span, render_record};
///
/// let record = FieldRecord {
///     region: Region::Header,
///     span: Span::closed(0, 2),
///     fields: vec!["06".to_string()],
/// };
/// assert_eq!(render_record(&record), "'0-2       '  06");
/// ```
pub fn render_record(record: &FieldRecord) -> String {
    format!(
        "'{:<width$}'  {}",
        record.span.to_string(),
        record.fields.join(" "),
        width = LABEL_WIDTH
    )
}

/// Render a decoded node as the text table, one blank line before each section.
pub fn render_text(layout: &NodeLayout) -> String {
    let mut out = String::new();
    for section in &layout.sections {
        out.push('\n');
        for record in &section.records {
            out.push_str(&render_record(record));
            out.push('\n');
        }
    }
    out
}
