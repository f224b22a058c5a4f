//! Server-rendered HTML pages
//!
//! Plain string rendering; the only dynamic text that is not a static table
//! label is error messages, which are escaped.

use std::fmt::Write;

use crate::constants::APP_NAME;
use crate::error::AppError;
use crate::logic::features::{EncodingTable, Feature};
use crate::logic::pipeline::Outcome;

const STYLE: &str = "\
body{font-family:sans-serif;margin:0;display:flex}\
aside{background:#f0f2f6;padding:1.5rem;min-width:18rem}\
main{padding:1.5rem 3rem;max-width:52rem}\
label{display:block;margin-top:.6rem;font-size:.9rem}\
select,input{width:100%;padding:.3rem}\
button{margin-top:1rem;padding:.5rem 1.5rem}\
table{border-collapse:collapse}td,th{border:1px solid #ddd;padding:.35rem .8rem;text-align:left}\
.success{background:#d4edda;color:#155724;padding:1rem}\
.failure{background:#f8d7da;color:#721c24;padding:1rem}";

/// Escape text for HTML bodies and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <title>{APP_NAME}</title><style>{STYLE}</style></head><body>{body}</body></html>"
    )
}

fn sidebar() -> String {
    let table = EncodingTable::global();
    let mut html = String::from(
        "<aside><form method=\"post\" action=\"/predict\" enctype=\"multipart/form-data\">\
         <h3>Input Features</h3>\
         <label>Upload your input CSV file<input type=\"file\" name=\"file\" accept=\".csv\"></label>\
         <h3>Input Manual</h3>",
    );

    for feature in Feature::ALL {
        let name = escape_html(feature.name());
        let _ = write!(html, "<label>{name}<select name=\"{name}\">");
        for label in table.feature(feature).labels() {
            let label = escape_html(label);
            let _ = write!(html, "<option value=\"{label}\">{label}</option>");
        }
        html.push_str("</select></label>");
    }

    html.push_str("<button type=\"submit\">Predict!</button></form></aside>");
    html
}

fn intro() -> &'static str {
    "<h1>Adaptability Prediction in Online Education Dashboard</h1>\
     <p>Predict how well a student can adapt to the online learning environment \
     from their device, network, financial and institutional circumstances. \
     Pick the inputs on the left, or upload a pre-encoded CSV row, then press Predict!</p>"
}

pub fn form_page() -> String {
    page(&format!("{}<main>{}</main>", sidebar(), intro()))
}

pub fn result_page(outcome: &Outcome) -> String {
    let mut rows = String::new();
    for entry in &outcome.inputs {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape_html(entry.feature.name()),
            escape_html(entry.value)
        );
    }

    let class = if outcome.prediction.can_adapt() { "success" } else { "failure" };

    page(&format!(
        "{}<main>{}<h3>User Inputs:</h3>\
         <table><tr><th>Feature</th><th>Value</th></tr>{rows}</table>\
         <h3>Prediction:</h3><div class=\"{class}\">{}</div></main>",
        sidebar(),
        intro(),
        escape_html(&outcome.prediction.message()),
    ))
}

pub fn error_page(err: &AppError) -> String {
    page(&format!(
        "{}<main>{}<div class=\"failure\"><strong>Error:</strong> {}</div></main>",
        sidebar(),
        intro(),
        escape_html(&err.message()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FeatureRow;
    use crate::logic::model::stub::StubClassifier;
    use crate::logic::pipeline::run;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>\"x\" & 'y'</b>"), "&lt;b&gt;&quot;x&quot; &amp; &#39;y&#39;&lt;/b&gt;");
    }

    #[test]
    fn test_form_lists_every_feature() {
        let html = form_page();
        for feature in Feature::ALL {
            assert!(html.contains(&format!("name=\"{}\"", feature.name())), "{feature}");
        }
        assert!(html.contains("<option value=\"Mobile Data\">Mobile Data</option>"));
        assert!(html.contains("enctype=\"multipart/form-data\""));
    }

    #[test]
    fn test_result_page() {
        let row = FeatureRow::from_codes([1, 0, 0, 1, 0, 1, 0, 1, 2, 1, 0, 0, 1]).unwrap();
        let outcome = run(&row, &StubClassifier::returning(1)).unwrap();
        let html = result_page(&outcome);

        assert!(html.contains("<tr><td>Internet Type</td><td>Wifi</td></tr>"));
        assert!(html.contains("class=\"success\">Prediction of this app is Yes Can Adaptive"));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let err = AppError::MalformedRow("unexpected column '<script>'".to_string());
        let html = error_page(&err);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
