//! Server-rendered HTML for the generator form and the download page.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::task::{Environment, GeneratedFile, MAX_TASKS_PER_FILE};

const STYLE: &str = "body{font-family:sans-serif;max-width:48rem;margin:2rem auto;padding:0 1rem}\
label{display:block;margin-top:1rem;font-weight:bold}\
input,select,textarea{width:100%;box-sizing:border-box;padding:.4rem}\
textarea{min-height:16rem;font-family:monospace}\
button{margin-top:1rem;padding:.5rem 1.5rem}\
.error{background:#fdecea;color:#611a15;border:1px solid #f5c6cb;padding:.75rem;margin:1rem 0}\
pre{background:#f6f8fa;padding:.75rem;overflow:auto;max-height:20rem}";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// Values echoed back into the form after a failed submission.
#[derive(Debug, Default)]
pub struct FormPage<'a> {
    pub error: Option<&'a str>,
    pub environment: Option<&'a str>,
    pub base_filename: &'a str,
    pub tile_ids: &'a str,
}

pub fn render_form(form: &FormPage<'_>) -> String {
    let selected = Environment::from_form_value(form.environment);
    let option = |env: Environment, label: &str| {
        format!(
            "<option value=\"{}\"{}>{}</option>",
            env.as_str(),
            if env == selected { " selected" } else { "" },
            label
        )
    };

    let error = form
        .error
        .map(|msg| format!("<div class=\"error\" role=\"alert\">{}</div>\n", escape_html(msg)))
        .unwrap_or_default();

    let body = format!(
        "<h1>Task List Generator</h1>\n{error}\
         <form method=\"post\" action=\"/\">\n\
         <label for=\"environment\">Environment</label>\n\
         <select id=\"environment\" name=\"environment\">{}{}</select>\n\
         <label for=\"base_filename\">Base Filename</label>\n\
         <input id=\"base_filename\" name=\"base_filename\" type=\"text\" value=\"{}\">\n\
         <label for=\"tile_ids\">Tile IDs (one per line, up to {MAX_TASKS_PER_FILE} per file)</label>\n\
         <textarea id=\"tile_ids\" name=\"tile_ids\">{}</textarea>\n\
         <button type=\"submit\">Generate</button>\n\
         </form>",
        option(Environment::Uat, "UAT"),
        option(Environment::Prod, "PROD"),
        escape_html(form.base_filename),
        escape_html(form.tile_ids),
    );

    page("Task List Generator", &body)
}

/// Page listing several generated files, each downloadable on its own.
pub fn render_downloads(files: &[GeneratedFile], task_count: usize) -> String {
    let mut items = String::new();
    for file in files {
        let name = escape_html(&file.filename);
        items.push_str(&format!(
            "<li>\n<a download=\"{name}\" href=\"data:text/plain;charset=utf-8;base64,{}\">{name}</a>\n\
             <details><summary>Preview</summary><pre>{}</pre></details>\n</li>\n",
            BASE64.encode(file.content.as_bytes()),
            escape_html(&file.content),
        ));
    }

    let body = format!(
        "<h1>Generated Files</h1>\n\
         <p>{task_count} tasks were split into {} files of at most {MAX_TASKS_PER_FILE} tasks.</p>\n\
         <ul>\n{items}</ul>\n\
         <p><a href=\"/\">Generate more</a></p>",
        files.len()
    );

    page("Generated Files", &body)
}
