//! Standalone HTML export of a generated post, carrying the branding's
//! head metadata (title, description, Open Graph and Twitter tags).

use std::fmt::Write as _;

use crate::branding::BrandingConfig;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn meta_name(head: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        head,
        "    <meta name=\"{}\" content=\"{}\">",
        escape(name),
        escape(content)
    );
}

fn meta_property(head: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        head,
        "    <meta property=\"{}\" content=\"{}\">",
        escape(property),
        escape(content)
    );
}

fn link(head: &mut String, rel: &str, href: &str) {
    let _ = writeln!(
        head,
        "    <link rel=\"{}\" href=\"{}\">",
        escape(rel),
        escape(href)
    );
}

pub fn render_head(branding: &BrandingConfig) -> String {
    let m = &branding.metadata;
    let mut head = String::new();
    head.push_str("    <meta charset=\"utf-8\">\n");
    let _ = writeln!(head, "    <title>{}</title>", escape(&m.title));

    meta_name(&mut head, "description", &m.description);
    meta_name(&mut head, "keywords", &m.keywords);
    meta_name(&mut head, "author", &m.author);

    meta_property(&mut head, "og:title", &m.og_title);
    meta_property(&mut head, "og:description", &m.og_description);
    meta_property(&mut head, "og:image", &m.og_image);
    meta_property(&mut head, "og:type", "website");

    meta_name(&mut head, "twitter:card", &m.twitter_card);
    meta_name(&mut head, "twitter:title", &m.og_title);
    meta_name(&mut head, "twitter:description", &m.og_description);
    meta_name(&mut head, "twitter:image", &m.og_image);

    meta_name(&mut head, "theme-color", &m.theme_color);

    link(&mut head, "icon", &m.favicon);
    link(&mut head, "apple-touch-icon", "/apple-touch-icon.png");
    head
}

/// Convert the post's light markdown (headings, bullets, paragraphs) to HTML.
pub fn render_post(post: &str) -> String {
    let mut body = String::new();
    for block in post.split("\n\n").map(str::trim).filter(|b| !b.is_empty()) {
        let lines: Vec<&str> = block.lines().map(str::trim).collect();

        if lines.iter().all(|l| l.starts_with("- ") || l.starts_with("* ")) {
            body.push_str("<ul>\n");
            for line in &lines {
                let _ = writeln!(body, "  <li>{}</li>", escape(&line[2..]));
            }
            body.push_str("</ul>\n");
            continue;
        }

        let first = lines[0];
        let level = first.chars().take_while(|c| *c == '#').count();
        if (1..=6).contains(&level) && first[level..].starts_with(' ') {
            let _ = writeln!(
                body,
                "<h{level}>{}</h{level}>",
                escape(first[level..].trim())
            );
            let rest = lines[1..].join(" ");
            if !rest.is_empty() {
                let _ = writeln!(body, "<p>{}</p>", escape(&rest));
            }
            continue;
        }

        let _ = writeln!(body, "<p>{}</p>", escape(&lines.join(" ")));
    }
    body
}

pub fn render_document(branding: &BrandingConfig, post: &str) -> String {
    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n  <head>\n");
    doc.push_str(&render_head(branding));
    doc.push_str("  </head>\n  <body>\n");
    let _ = writeln!(
        doc,
        "    <header>\n      <h1>{}</h1>\n      <p>{}</p>\n    </header>",
        escape(&branding.ui.header.title),
        escape(&branding.ui.header.subtitle)
    );
    doc.push_str("    <article>\n");
    doc.push_str(&render_post(post));
    doc.push_str("    </article>\n");
    let _ = writeln!(
        doc,
        "    <footer><p>{}</p></footer>",
        escape(&branding.ui.footer.text)
    );
    doc.push_str("  </body>\n</html>\n");
    doc
}
