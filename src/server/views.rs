//! HTML pages for the form-driven view.

use std::fmt::Write as _;

use crate::theory::Progression;

const STYLE: &str = r#"
    body { font-family: Arial, sans-serif; max-width: 900px; margin: 24px auto; padding: 0 12px; }
    h1 { margin-bottom: 8px; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 14px; margin: 14px 0; }
    label { display:block; margin: 8px 0 4px; font-weight: 600; }
    input { width: 100%; padding: 8px; box-sizing: border-box; }
    button { margin-top: 12px; padding: 8px 14px; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #ddd; padding: 6px 10px; text-align: center; }
    th { background: #f4f4f4; }
    td.key { font-weight: 600; }
"#;

pub fn home_page() -> String {
    page("", None)
}

/// Home page with the progression table below the form, the submitted text
/// kept in the input.
pub fn progressions_page(submitted: &str, progression: &Progression) -> String {
    page(submitted, Some(progressions_table(progression)))
}

pub fn progressions_table(progression: &Progression) -> String {
    let mut html = String::from("<table>\n  <thead>\n    <tr><th>Key</th>");
    for numeral in progression.input_numerals() {
        let _ = write!(html, "<th>{}</th>", escape_html(numeral));
    }
    html.push_str("</tr>\n  </thead>\n  <tbody>\n");
    for entry in progression.keys() {
        let _ = write!(html, "    <tr><td class=\"key\">{}</td>", escape_html(entry.key));
        for chord in &entry.chords {
            let _ = write!(html, "<td>{}</td>", escape_html(chord));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("  </tbody>\n</table>\n");
    html
}

fn page(submitted: &str, table: Option<String>) -> String {
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width,initial-scale=1" />
  <title>Triadic</title>
  <style>{STYLE}</style>
</head>
<body>
  <h1>Triadic</h1>
  <p>Chord progressions in all twelve major keys.</p>

  <div class="card">
    <form method="post" action="/">
      <label for="prog">Progression</label>
      <input id="prog" name="prog" value="{value}" placeholder="I V vi IV" autofocus />
      <p style="margin:8px 0 0;font-size:0.9rem;color:#666;">
        Numerals I ii iii IV V vi VII or digits 1-7, separated by spaces or hyphens
        (e.g. <code>I V vi IV</code>, <code>1-5-6-4</code>).
      </p>
      <button type="submit">Show chords</button>
    </form>
  </div>
{table}</body>
</html>
"#,
        value = escape_html(submitted),
        table = table.unwrap_or_default(),
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theory::resolve;

    #[test]
    fn table_has_header_and_twelve_rows() {
        let html = progressions_table(&resolve("I-V").unwrap());
        assert!(html.contains("<tr><th>Key</th><th>I</th><th>V</th></tr>"));
        assert_eq!(html.matches("<td class=\"key\">").count(), 12);
        assert!(html.contains("<tr><td class=\"key\">C</td><td>C</td><td>G</td></tr>"));
        assert!(html.contains("<tr><td class=\"key\">F#</td><td>F#</td><td>C#</td></tr>"));
    }

    #[test]
    fn submitted_text_is_escaped() {
        let html = page("\"><script>", None);
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }
}
