//! Tabular output of a view.
//!
//! [`TableModel`] is what a view renders to. The egui widget draws it, and
//! [`TableModel::to_html`] serializes it as the markup the web frontend used.

use ustr::Ustr;

use crate::column::ColumnDef;
use crate::record::{Record, RowKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub key: RowKey,
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub title: Ustr,
    pub headers: Vec<Ustr>,
    pub rows: Vec<TableRow>,
}

impl TableModel {
    /// One header per column, one row per record in order, one cell per column.
    pub fn build(
        title: Ustr,
        columns: &[ColumnDef],
        row_key: impl Fn(&Record, usize) -> RowKey,
        records: &[Record],
    ) -> Self {
        let headers = columns.iter().map(ColumnDef::label).collect();
        let rows = records
            .iter()
            .enumerate()
            .map(|(index, record)| TableRow {
                key: row_key(record, index),
                cells: columns.iter().map(|column| column.cell(record)).collect(),
            })
            .collect();

        Self {
            title,
            headers,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Bootstrap-styled page fragment: heading plus striped, bordered table.
    pub fn to_html(&self) -> String {
        let mut html = String::new();

        html.push_str(r#"<div class="container mt-4">"#);
        html.push_str(&format!(
            r#"<h1 class="text-center text-primary">{}</h1>"#,
            escape_html(&self.title)
        ));
        html.push_str(r#"<table class="table table-striped table-bordered mt-4">"#);

        html.push_str(r#"<thead class="table-dark"><tr>"#);
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead>");

        html.push_str("<tbody>");
        for row in &self.rows {
            let key = escape_html(&row.key.to_string());
            html.push_str(&format!(r#"<tr data-key="{key}">"#));
            for cell in &row.cells {
                html.push_str(&format!("<td>{}</td>", escape_html(cell)));
            }
            html.push_str("</tr>");
        }
        html.push_str("</tbody></table></div>");

        html
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn records(value: serde_json::Value) -> Vec<Record> {
        serde_json::from_value(value).unwrap()
    }

    fn teams_table(records: &[Record]) -> TableModel {
        TableModel::build(
            Ustr::from("Teams"),
            &[ColumnDef::field("Team Name", "name")],
            RowKey::for_record,
            records,
        )
    }

    #[test]
    fn build_keeps_order_and_keys() {
        let recs = records(json!([
            {"id": 2, "name": "Gold Team"},
            {"id": 1, "name": "Blue Team"}
        ]));
        let table = teams_table(&recs);

        assert_eq!(table.headers, vec![Ustr::from("Team Name")]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].key, RowKey::Id("2".to_owned()));
        assert_eq!(table.rows[0].cells, vec!["Gold Team".to_owned()]);
        assert_eq!(table.rows[1].cells, vec!["Blue Team".to_owned()]);
    }

    #[test]
    fn empty_collection_has_headers_only() {
        let table = teams_table(&[]);
        assert!(table.is_empty());
        assert_eq!(table.headers.len(), 1);
        assert!(table.to_html().contains("<tbody></tbody>"));
    }

    #[test]
    fn html_matches_frontend_markup() {
        let recs = records(json!([{"id": 1, "name": "Alpha"}]));
        let html = teams_table(&recs).to_html();

        assert_eq!(
            html,
            concat!(
                r#"<div class="container mt-4">"#,
                r#"<h1 class="text-center text-primary">Teams</h1>"#,
                r#"<table class="table table-striped table-bordered mt-4">"#,
                r#"<thead class="table-dark"><tr><th>Team Name</th></tr></thead>"#,
                r#"<tbody><tr data-key="1"><td>Alpha</td></tr></tbody>"#,
                "</table></div>"
            )
        );
    }

    #[test]
    fn html_escapes_cell_text() {
        let recs = records(json!([{"id": "<x>", "name": "Tom & \"Jerry\""}]));
        let html = teams_table(&recs).to_html();

        assert!(html.contains(r#"data-key="&lt;x&gt;""#));
        assert!(html.contains("<td>Tom &amp; &quot;Jerry&quot;</td>"));
    }
}
