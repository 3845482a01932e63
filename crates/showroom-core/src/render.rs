//! # HTML Rendering
//!
//! Renders a composed [`Page`] into a complete HTML document.
//!
//! Output is plain markup and contains no formatting decisions beyond
//! structure: every reveal region is tagged with `section-animate` and a
//! `data-reveal-region` attribute so the browser-side observer (and any other
//! host) can find exactly the declared regions. Regions already revealed are
//! rendered with the reveal class applied.

use crate::content::{ContactItem, Icon, Image, SiteContent};
use crate::observer::RevealOptions;
use crate::page::{Page, Section};
use crate::RegionId;
use serde_json::json;
use std::collections::BTreeSet;

/// Class carried by every region that animates in.
pub const REVEAL_REGION_CLASS: &str = "section-animate";

/// Attribute naming the region a section element represents.
pub const REGION_ATTRIBUTE: &str = "data-reveal-region";

// =============================================================================
// ESCAPING
// =============================================================================

/// Escape text for HTML element content and double-quoted attributes.
#[must_use]
pub fn escape_html(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Encode a value as JSON that is safe to embed in a `<script>` block.
///
/// `<` only ever appears inside JSON strings, where `\u003c` is an
/// equivalent escape that cannot close the script element.
fn script_json(value: &serde_json::Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// Render the whole document.
///
/// `revealed` lists regions that should render already marked (for example
/// from a previous observer run); pass an empty set for a fresh page.
#[must_use]
pub fn render_page(page: &Page, content: &SiteContent, revealed: &BTreeSet<RegionId>) -> String {
    let config = page.config();
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n");
    if config.smooth_scroll {
        out.push_str("<html lang=\"en\" style=\"scroll-behavior: smooth\">\n");
    } else {
        out.push_str("<html lang=\"en\">\n");
    }
    out.push_str("<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    out.push_str(&format!(
        "<title>{}</title>\n",
        escape_html(content.footer.company)
    ));
    out.push_str(&reveal_style(&config.reveal_class));
    out.push_str("</head>\n<body>\n<main class=\"page\">\n");

    for section in page.sections() {
        let marked = revealed.contains(&section.region_id());
        out.push_str(&render_section(*section, content, &config.reveal_class, marked));
    }

    out.push_str("</main>\n");
    out.push_str(&reveal_script(
        &page.reveal_regions(),
        &config.reveal,
        &config.reveal_class,
    ));
    out.push_str("</body>\n</html>\n");
    out
}

/// Opening tag for a section, carrying region markers when it reveals.
fn open_section(section: Section, tag: &str, reveal_class: &str, marked: bool) -> String {
    let slug = section.slug();
    if !section.reveals() {
        return format!("<{tag} class=\"{slug}\">\n");
    }
    let mut classes = format!("{slug} {REVEAL_REGION_CLASS}");
    if marked {
        classes.push(' ');
        classes.push_str(&escape_html(reveal_class));
    }
    format!("<{tag} class=\"{classes}\" {REGION_ATTRIBUTE}=\"{slug}\">\n")
}

/// Render one section.
#[must_use]
pub fn render_section(
    section: Section,
    content: &SiteContent,
    reveal_class: &str,
    marked: bool,
) -> String {
    let tag = if section == Section::Footer {
        "footer"
    } else {
        "section"
    };
    let mut out = open_section(section, tag, reveal_class, marked);

    match section {
        Section::Hero => hero(&mut out, content),
        Section::Stats => stats(&mut out, content),
        Section::About => about(&mut out, content),
        Section::Features => features(&mut out, content),
        Section::Clients => clients(&mut out, content),
        Section::Values => values(&mut out, content),
        Section::Contact => contact(&mut out, content),
        Section::Footer => footer(&mut out, content),
    }

    out.push_str(&format!("</{tag}>\n"));
    out
}

// =============================================================================
// SECTIONS
// =============================================================================

fn icon(icon: Icon) -> String {
    format!(
        "<span class=\"icon icon-{}\" aria-hidden=\"true\"></span>",
        icon.name()
    )
}

fn image(img: &Image) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\">",
        escape_html(img.src),
        escape_html(img.alt)
    )
}

fn hero(out: &mut String, content: &SiteContent) {
    let hero = &content.hero;
    out.push_str("<div class=\"hero-copy\">\n");
    out.push_str(&format!(
        "<div class=\"brand\">{}<h1>{}</h1></div>\n",
        icon(Icon::TreePine),
        escape_html(hero.company)
    ));
    out.push_str(&format!(
        "<h2>{}<br><span class=\"highlight\">{}</span></h2>\n",
        escape_html(hero.headline),
        escape_html(hero.highlight)
    ));
    out.push_str(&format!("<p>{}</p>\n", escape_html(hero.summary)));
    out.push_str("<ul class=\"badges\">\n");
    for badge in hero.badges {
        out.push_str(&format!(
            "<li>{}<span>{}</span></li>\n",
            icon(Icon::Check),
            escape_html(badge)
        ));
    }
    out.push_str("</ul>\n</div>\n");
    out.push_str(&format!("<div class=\"hero-media\">{}</div>\n", image(&hero.image)));
}

fn stats(out: &mut String, content: &SiteContent) {
    out.push_str("<div class=\"stats-grid\">\n");
    for stat in content.stats {
        out.push_str(&format!(
            "<div class=\"stat\">{}<h3>{}</h3><p>{}</p></div>\n",
            icon(stat.icon),
            escape_html(stat.value),
            escape_html(stat.label)
        ));
    }
    out.push_str("</div>\n");
}

fn about(out: &mut String, content: &SiteContent) {
    let about = &content.about;
    out.push_str(&format!(
        "<div class=\"about-copy\">\n<h2>{}</h2>\n",
        escape_html(about.heading)
    ));
    for paragraph in about.paragraphs {
        out.push_str(&format!("<p>{}</p>\n", escape_html(paragraph)));
    }
    out.push_str("</div>\n");
    out.push_str(&format!("<div class=\"about-media\">{}</div>\n", image(&about.image)));
}

fn features(out: &mut String, content: &SiteContent) {
    let block = &content.features;
    out.push_str(&format!(
        "<h2>{} <span class=\"highlight\">{}</span></h2>\n<p>{}</p>\n",
        escape_html(block.heading),
        escape_html(block.highlight),
        escape_html(block.subheading)
    ));
    out.push_str("<div class=\"feature-grid\">\n");
    for feature in block.items {
        out.push_str(&format!(
            "<div class=\"feature\">{}<h3>{}</h3><p>{}</p></div>\n",
            icon(feature.icon),
            escape_html(feature.title),
            escape_html(feature.description)
        ));
    }
    out.push_str("</div>\n");
}

fn clients(out: &mut String, content: &SiteContent) {
    let clients = &content.clients;
    out.push_str(&format!("<h2>{}</h2>\n", escape_html(clients.heading)));
    out.push_str("<div class=\"client-grid\">\n");
    for logo in clients.logos {
        out.push_str(&format!("<div class=\"client\">{}</div>\n", image(logo)));
    }
    out.push_str("</div>\n");
}

fn values(out: &mut String, content: &SiteContent) {
    let values = &content.values;
    out.push_str(&format!(
        "<h2>{}</h2>\n<p class=\"tagline\">{}</p>\n<div class=\"divider\"></div>\n<p>{}</p>\n",
        escape_html(values.heading),
        escape_html(values.tagline),
        escape_html(values.body)
    ));
}

fn contact_item(item: &ContactItem) -> String {
    format!(
        "<li>{}<span class=\"label\">{}</span> <span class=\"value\">{}</span></li>\n",
        icon(item.icon),
        escape_html(item.label),
        escape_html(item.value)
    )
}

fn contact(out: &mut String, content: &SiteContent) {
    let contact = &content.contact;
    out.push_str(&format!(
        "<div class=\"card hours\">\n<h3>{}</h3>\n",
        escape_html(contact.hours_heading)
    ));
    out.push_str(&format!(
        "<p>{}<strong>{}</strong> <em>{}</em></p>\n",
        icon(Icon::Clock),
        escape_html(contact.hours),
        escape_html(contact.timezone)
    ));
    out.push_str(&format!(
        "<p>{}Our facility is located in <strong>{}</strong>. {}</p>\n</div>\n",
        icon(Icon::MapPin),
        escape_html(contact.location),
        escape_html(contact.location_note)
    ));
    out.push_str(&format!(
        "<div class=\"card contact-us\">\n<h3>{}</h3>\n<ul>\n",
        escape_html(contact.contact_heading)
    ));
    for item in contact.items {
        out.push_str(&contact_item(item));
    }
    out.push_str("</ul>\n</div>\n");
}

fn footer(out: &mut String, content: &SiteContent) {
    let footer = &content.footer;
    out.push_str(&format!(
        "<div class=\"footer-brand\">\n<div class=\"brand\">{}<h3>{}</h3></div>\n<p>{}</p>\n",
        icon(Icon::TreePine),
        escape_html(footer.company),
        escape_html(footer.tagline)
    ));
    out.push_str("<div class=\"social\">");
    for social in footer.social {
        out.push_str(&icon(*social));
    }
    out.push_str("</div>\n</div>\n<div class=\"footer-columns\">\n");
    for column in footer.columns {
        out.push_str(&format!(
            "<div class=\"footer-column\">\n<h4>{}</h4>\n<ul>\n",
            escape_html(column.title)
        ));
        for link in column.links {
            out.push_str(&format!("<li>{}</li>\n", escape_html(link)));
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str(&format!(
        "</div>\n<div class=\"copyright\">{}</div>\n",
        escape_html(footer.copyright)
    ));
}

// =============================================================================
// REVEAL ASSETS
// =============================================================================

/// Fade/slide transition keyed on the reveal class.
fn reveal_style(reveal_class: &str) -> String {
    format!(
        "<style>\n\
         .{REVEAL_REGION_CLASS} {{ opacity: 0; transform: translateY(24px); \
         transition: opacity 0.6s ease-out, transform 0.6s ease-out; }}\n\
         .{REVEAL_REGION_CLASS}.{class} {{ opacity: 1; transform: none; }}\n\
         </style>\n",
        class = reveal_class
    )
}

/// Browser bootstrap for the declared regions.
///
/// Mirrors the core observer: one-shot reveal at the configured threshold and
/// margin, unobserve after reveal, reveal everything when the browser has no
/// `IntersectionObserver`. Options travel as one JSON object; the threshold is
/// sent in permille and scaled in the browser.
#[must_use]
pub fn reveal_script(regions: &[RegionId], options: &RevealOptions, reveal_class: &str) -> String {
    let config = json!({
        "regions": regions,
        "revealClass": reveal_class,
        "thresholdPermille": options.threshold.permille(),
        "rootMargin": options.margin.to_string(),
    });

    format!(
        r#"<script>
(function () {{
  var config = {config};
  var threshold = config.thresholdPermille / 1000;
  var elements = config.regions
    .map(function (id) {{ return document.querySelector('[{attr}="' + id + '"]'); }})
    .filter(function (el) {{ return el !== null; }});

  function reveal(el) {{ el.classList.add(config.revealClass); }}

  if (!('IntersectionObserver' in window)) {{
    elements.forEach(reveal);
    return;
  }}

  var observer = new IntersectionObserver(function (entries) {{
    entries.forEach(function (entry) {{
      if (entry.isIntersecting && entry.intersectionRatio >= threshold) {{
        reveal(entry.target);
        observer.unobserve(entry.target);
      }}
    }});
  }}, {{ threshold: threshold, rootMargin: config.rootMargin }});

  elements.forEach(function (el) {{
    if (!el.classList.contains(config.revealClass)) {{ observer.observe(el); }}
  }});
  window.addEventListener('pagehide', function () {{ observer.disconnect(); }});
}})();
</script>
"#,
        config = script_json(&config),
        attr = REGION_ATTRIBUTE,
    )
}

// =============================================================================
// TESTS
// =============================================================================
