//! HTML pages.

use pulldown_cmark::{Event, Options, Parser, html};
use scrivener_core::Report;
use scrivener_export::{markdown_file_name, pdf_file_name};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #0f172a; color: #e2e8f0; margin: 0; }
main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }
h1 { color: #38bdf8; }
a { color: #60a5fa; }
.card { background: #1e293b; border-radius: 12px; padding: 1.25rem 1.5rem; margin: 1rem 0; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 12px; font-size: 0.8rem; }
.ok { background: #065f46; } .missing { background: #7f1d1d; } .section { background: #1d4ed8; }
.error { background: #7f1d1d; border-radius: 8px; padding: 0.75rem 1rem; }
input[type=text] { width: 100%; padding: 0.6rem; border-radius: 8px; border: 1px solid #334155;
  background: #0f172a; color: #e2e8f0; box-sizing: border-box; }
button, .button { margin-top: 0.75rem; padding: 0.6rem 1.2rem; border: 0; border-radius: 8px;
  background: #2563eb; color: white; text-decoration: none; display: inline-block; cursor: pointer; }
.tabs > input { display: none; }
.tabs > label { display: inline-block; padding: 0.5rem 1rem; cursor: pointer; border-radius: 8px 8px 0 0; background: #334155; }
.tabs > input:checked + label { background: #1e293b; color: #38bdf8; }
.tab { display: none; }
#tab-outline:checked ~ .outline, #tab-draft:checked ~ .draft, #tab-final:checked ~ .final { display: block; }
.stats { display: grid; grid-template-columns: repeat(3, 1fr); text-align: center; }
.stats strong { display: block; font-size: 1.6rem; color: #38bdf8; }
"#;

const TOPIC_IDEAS: [(&str, &str); 5] = [
    ("Technology", "How to Get Started with Machine Learning"),
    ("Health", "The Impact of AI on Modern Healthcare"),
    ("Lifestyle", "Sustainable Living in Urban Areas"),
    ("Finance", "Blockchain Technology Explained"),
    ("Personal Development", "Mindfulness Techniques for Daily Life"),
];

/// Escape text for HTML element content and attribute values.
///
/// # Examples
///
/// ```
/// use scrivener_server::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///     "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
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

/// Render model Markdown to HTML.
///
/// Raw HTML in the input is shown as text, never passed through.
///
/// # Examples
///
/// ```
/// use scrivener_server::markdown_to_html;
///
/// assert_eq!(markdown_to_html("## Hi"), "<h2>Hi</h2>\n");
/// assert!(markdown_to_html("<script>x</script>").contains("&lt;script&gt;"));
/// ```
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<main>\n{}\n</main>\n</body>\n</html>\n",
        escape_html(title),
        STYLE,
        body
    )
}

fn api_key_badge(configured: bool) -> &'static str {
    if configured {
        r#"<span class="badge ok">GROQ API key loaded</span>"#
    } else {
        r#"<span class="badge missing">GROQ API key not found. Set GROQ_API_KEY in .env</span>"#
    }
}

fn topic_form(topic: &str) -> String {
    format!(
        r#"<form class="card" method="post" action="/generate">
<label for="topic"><strong>What would you like to write about?</strong></label>
<input type="text" id="topic" name="topic" value="{}" placeholder="e.g. Rust Async Tips" required>
<button type="submit">Generate blog post</button>
</form>"#,
        escape_html(topic)
    )
}

/// The topic form, with an optional error above it.
pub(crate) fn index_page(api_key_configured: bool, topic: &str, error: Option<&str>) -> String {
    let mut body = String::new();
    body.push_str("<h1>Scrivener</h1>\n<p>Turn a topic into a researched, edited blog post.</p>\n");
    let _ = writeln!(body, "<p>{}</p>", api_key_badge(api_key_configured));

    if let Some(error) = error {
        let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape_html(error));
    }
    body.push_str(&topic_form(topic));

    body.push_str("\n<section class=\"card\">\n<h3>Topic ideas</h3>\n<ul>\n");
    for (area, idea) in TOPIC_IDEAS {
        let _ = writeln!(body, "<li><strong>{}:</strong> {}</li>", area, idea);
    }
    body.push_str("</ul>\n</section>\n");

    body.push_str(
        "<section class=\"card\">\n<h3>How it works</h3>\n<ol>\n\
         <li>Enter a topic and press generate.</li>\n\
         <li>The model drafts an outline of sections.</li>\n\
         <li>Every section is written in parallel.</li>\n\
         <li>The joined draft gets a final editorial pass.</li>\n\
         </ol>\n<p>Download the result as Markdown or PDF.</p>\n</section>",
    );

    layout("Scrivener", &body)
}

/// Outline, draft and final text in tabs, with stats and downloads.
pub(crate) fn report_page(id: &str, report: &Report) -> String {
    let topic = report.topic().as_str();
    let stats = report.stats();
    let mut body = String::new();

    let _ = writeln!(body, "<h1>{}</h1>", escape_html(topic));
    let _ = writeln!(
        body,
        r#"<section class="card stats">
<div><strong>{}</strong>Sections</div>
<div><strong>{}</strong>Words</div>
<div><strong>Complete</strong>Status</div>
</section>"#,
        stats.sections(),
        stats.words()
    );

    let _ = writeln!(
        body,
        r#"<p>
<a class="button" href="/reports/{id}/markdown" download="{md}">Download Markdown</a>
<a class="button" href="/reports/{id}/pdf" download="{pdf}">Download PDF</a>
<a class="button" href="/">New topic</a>
</p>"#,
        id = escape_html(id),
        md = escape_html(&markdown_file_name(topic)),
        pdf = escape_html(&pdf_file_name(topic)),
    );

    body.push_str(
        "<div class=\"tabs\">\n\
         <input type=\"radio\" name=\"tab\" id=\"tab-outline\"><label for=\"tab-outline\">Outline</label>\n\
         <input type=\"radio\" name=\"tab\" id=\"tab-draft\"><label for=\"tab-draft\">Draft</label>\n\
         <input type=\"radio\" name=\"tab\" id=\"tab-final\" checked><label for=\"tab-final\">Final</label>\n",
    );

    body.push_str("<div class=\"tab outline card\">\n");
    if report.outline().is_empty() {
        body.push_str("<p>The model returned no sections.</p>\n");
    }
    for (n, section) in report.outline().sections().iter().enumerate() {
        let _ = writeln!(
            body,
            r#"<div class="card"><span class="badge section">Section {}</span> <strong>{}</strong> <small>{} words planned</small><p>{}</p></div>"#,
            n + 1,
            escape_html(section.title()),
            section.planned_words(),
            escape_html(section.description())
        );
    }
    body.push_str("</div>\n");

    let _ = writeln!(
        body,
        "<div class=\"tab draft card\">\n{}</div>",
        markdown_to_html(report.draft())
    );
    let _ = writeln!(
        body,
        "<div class=\"tab final card\">\n{}</div>",
        markdown_to_html(report.final_text())
    );
    body.push_str("</div>\n");

    layout(&format!("{} | Scrivener", topic), &body)
}

/// Workflow failure, with the form pre-filled for another attempt.
pub(crate) fn failure_page(api_key_configured: bool, topic: &str, message: &str) -> String {
    let mut body = String::new();
    body.push_str("<h1>Generation failed</h1>\n");
    let _ = writeln!(body, "<p>{}</p>", api_key_badge(api_key_configured));
    let _ = writeln!(body, r#"<p class="error">{}</p>"#, escape_html(message));
    body.push_str(&topic_form(topic));
    layout("Generation failed | Scrivener", &body)
}

/// Unknown report.
pub(crate) fn not_found_page(id: &str) -> String {
    let body = format!(
        "<h1>Report not found</h1>\n<p>No report with id <code>{}</code>. \
         Reports are kept in memory and are lost when the server restarts.</p>\n\
         <p><a class=\"button\" href=\"/\">New topic</a></p>",
        escape_html(id)
    );
    layout("Not found | Scrivener", &body)
}
