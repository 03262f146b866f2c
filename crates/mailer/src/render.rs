//! Rendering of shared summaries into email bodies.
//!
//! The summary text is a small Markdown subset (headings, bullets,
//! paragraphs); the transform here is deterministic and line-based, just
//! enough for readable HTML mail.

use crate::types::Email;

/// Convert the summary Markdown subset to HTML.
///
/// Handles `#`/`##`/`###` headings and `- ` bullets; blank lines become
/// paragraph breaks. Everything else passes through untouched.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut out = String::new();
    let mut pending_break = false;
    let mut first = true;

    for line in markdown.lines() {
        if line.trim().is_empty() {
            pending_break = true;
            continue;
        }

        if first {
            first = false;
        } else if pending_break {
            out.push_str("</p><p>");
        } else {
            out.push('\n');
        }
        pending_break = false;

        out.push_str(&render_line(line));
    }

    out
}

fn render_line(line: &str) -> String {
    if let Some(rest) = line.strip_prefix("### ") {
        format!("<h3>{}</h3>", rest)
    } else if let Some(rest) = line.strip_prefix("## ") {
        format!("<h2>{}</h2>", rest)
    } else if let Some(rest) = line.strip_prefix("# ") {
        format!("<h1>{}</h1>", rest)
    } else if let Some(rest) = line.strip_prefix("- ") {
        format!("<li>{}</li>", rest)
    } else {
        line.to_string()
    }
}

/// Build the share email for one recipient.
///
/// The body carries only the summary plus the public view link.
pub fn summary_email(to: &str, title: &str, summary_markdown: &str, view_url: &str) -> Email {
    let title = if title.is_empty() { "Shared Summary" } else { title };
    let subject = format!("Summary: {}", title);

    let mut text = summary_markdown.to_string();
    if !view_url.is_empty() {
        text.push_str("\n\nView online: ");
        text.push_str(view_url);
    }

    let html_summary = markdown_to_html(summary_markdown);
    let link_block = if view_url.is_empty() {
        String::new()
    } else {
        format!(
            r#"
  <p style="margin: 16px 0 0;">
    <a href="{view_url}" style="background:#2563eb;color:#fff;padding:10px 16px;border-radius:8px;text-decoration:none;display:inline-block;">View Online</a>
  </p>
  <p style="color:#777; font-size:12px; margin-top:8px;">
    If the button doesn't work, copy this link: {view_url}
  </p>"#
        )
    };

    let html = format!(
        r#"<div style="font-family: ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Helvetica, Arial; max-width: 680px; margin: 0 auto;">
  <h2 style="margin: 0 0 12px;">{title}</h2>
  <p style="margin: 0 0 16px; color: #555;">Here's the summary you were sent.</p>
  <div style="border:1px solid #eee; border-radius:12px; padding:16px; background:#fafafa;">
    <div>
      <p>{html_summary}</p>
    </div>
  </div>{link_block}
</div>"#
    );

    Email::new(to, subject, text).with_html(html)
}
