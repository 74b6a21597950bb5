//! HTML serialization of a [`Document`].
//!
//! Listeners cannot travel to the browser, so an element with a click listener is wrapped in
//! a small POST form aimed at `{base}/events/click/{id}`, and a form with a submit listener
//! posts to `{base}/events/submit/{id}`. Pending alerts become an open `<dialog>`.

use crate::dom::{Document, Element, EventKind};

const STYLE: &str = "body{font-family:sans-serif;margin:2rem}\
#all-players-container{display:flex;flex-wrap:wrap;gap:1rem}\
.player-card{border:1px solid #ccc;border-radius:8px;padding:1rem;width:220px}\
.player-card img{max-width:100%;height:auto;cursor:pointer}\
.click-target{border:0;padding:0;background:none}\
form.event-target{display:inline}\
#add-player{display:grid;gap:.5rem;max-width:320px;margin-bottom:2rem}";

const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta"];

/// Escape text for use in element content or a double-quoted attribute.
#[must_use]
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

/// Serialize the whole page. `base` is the page's URL path, e.g. `/pages/{id}`.
#[must_use]
pub fn render_page(document: &Document, alerts: &[String], base: &str) -> String {
    let mut out = String::from(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Puppy Bowl</title>\n<style>",
    );
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");

    for alert in alerts {
        out.push_str("<dialog open class=\"alert\"><pre>");
        out.push_str(&escape(alert));
        out.push_str("</pre><form method=\"get\" action=\"");
        out.push_str(&escape(base));
        out.push_str("\"><button type=\"submit\">OK</button></form></dialog>\n");
    }

    for child in document.body().children() {
        write_element(&mut out, child, base);
        out.push('\n');
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn has_listener(element: &Element, kind: EventKind) -> bool {
    element.listeners().iter().any(|l| l.kind == kind)
}

fn write_element(out: &mut String, element: &Element, base: &str) {
    match element.id() {
        Some(id) if has_listener(element, EventKind::Click) => {
            out.push_str("<form method=\"post\" class=\"event-target\" action=\"");
            out.push_str(&escape(&format!("{base}/events/click/{id}")));
            out.push_str("\">");
            if element.tag() == "button" {
                write_plain(out, element, base, &[("type", "submit")]);
            } else {
                out.push_str("<button type=\"submit\" class=\"click-target\">");
                write_plain(out, element, base, &[]);
                out.push_str("</button>");
            }
            out.push_str("</form>");
        }
        Some(id) if has_listener(element, EventKind::Submit) => {
            let action = format!("{base}/events/submit/{id}");
            write_plain(
                out,
                element,
                base,
                &[("method", "post"), ("action", action.as_str())],
            );
        }
        _ => write_plain(out, element, base, &[]),
    }
}

fn write_plain(out: &mut String, element: &Element, base: &str, extra: &[(&str, &str)]) {
    out.push('<');
    out.push_str(element.tag());
    if let Some(id) = element.id() {
        push_attribute(out, "id", id);
    }
    if !element.classes().is_empty() {
        push_attribute(out, "class", &element.classes().join(" "));
    }
    for (name, value) in element.attributes() {
        push_attribute(out, name, value);
    }
    for (name, value) in extra {
        if element.attribute(name).is_none() {
            push_attribute(out, name, value);
        }
    }
    out.push('>');

    if VOID_TAGS.contains(&element.tag()) {
        return;
    }

    if let Some(text) = element.text() {
        out.push_str(&escape(text));
    }
    for child in element.children() {
        write_element(out, child, base);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}
