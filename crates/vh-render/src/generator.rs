//! Page generation for the grid, detail, and not-found views.
//!
//! Pages are assembled with `format!` templates around a shared layout
//! shell. Every record-sourced string is escaped at the point it enters
//! markup; release builds additionally minify the result.

use crate::config::RenderConfig;
use crate::text::{escape_html, excerpt, EXCERPT_LEN};
use tracing::debug;
use vh_catalog::{Opportunity, Page};

/// Renders catalog data into self-contained HTML pages.
pub struct PageGenerator {
    config: RenderConfig,
}

impl PageGenerator {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render one page of the card grid.
    ///
    /// The page is expected to come out of `paginate`, so its number is
    /// already clamped; card links carry it so the detail view can lead
    /// back to the same page.
    pub fn render_list(&self, page: &Page<'_, Opportunity>, banner: Option<&str>) -> String {
        let cards = page
            .items
            .iter()
            .map(|record| self.render_card(record, page.number))
            .collect::<String>();
        let body = format!(
            r#"{banner}<div class="vol-grid">{cards}</div>
        {pagination}"#,
            banner = render_banner(banner),
            cards = cards,
            pagination = self.render_pagination(page.number, page.total_pages),
        );
        self.render_page("list", &body)
    }

    /// Render the full detail view for one record.
    ///
    /// `current_page` is the already-clamped page the reader came from; the
    /// back control reopens the list exactly there.
    pub fn render_detail(
        &self,
        record: &Opportunity,
        current_page: usize,
        banner: Option<&str>,
    ) -> String {
        let body = format!(
            r#"{banner}<article class="vol-detail">
            <h2>{title}</h2>
            {description}
            {organization}
            <p class="vol-field"><strong>Location:</strong> {location}</p>
            <p class="vol-field"><strong>Timeframe:</strong> {timeframe}</p>
            <p class="vol-field"><strong>Requirements:</strong></p>
            {requirements}
            <a class="vol-back" href="?page={page}">Back to list</a>
        </article>"#,
            banner = render_banner(banner),
            title = escape_html(&record.title),
            description = render_description(&record.description),
            organization = render_organization(&record.organization_url),
            location = escape_html(&record.location),
            timeframe = escape_html(&record.timeframe),
            requirements = render_requirements(&record.requirements),
            page = current_page,
        );
        self.render_page("detail", &body)
    }

    /// Render the view for an id that matches no record.
    pub fn render_not_found(&self, current_page: usize, banner: Option<&str>) -> String {
        let body = format!(
            r#"{banner}<div class="vol-banner">Opportunity not found.</div>
        <a class="vol-back" href="?page={page}">Back to list</a>"#,
            banner = render_banner(banner),
            page = current_page,
        );
        self.render_page("not-found", &body)
    }

    fn render_card(&self, record: &Opportunity, current_page: usize) -> String {
        let short_desc = escape_html(&excerpt(&record.description, EXCERPT_LEN));
        format!(
            r#"<a class="vol-card" href="?id={id}&page={page}">
            <h3>{title}</h3>
            <p>{short_desc}</p>
            <div class="vol-meta">{location} • {timeframe}</div>
        </a>"#,
            id = urlencoding::encode(record.id.as_str()),
            page = current_page,
            title = escape_html(&record.title),
            short_desc = short_desc,
            location = escape_html(&record.location),
            timeframe = escape_html(&record.timeframe),
        )
    }

    fn render_pagination(&self, current: usize, total: usize) -> String {
        let links = (1..=total)
            .map(|p| {
                let class = if p == current {
                    "page-num active"
                } else {
                    "page-num"
                };
                format!(r#"<a class="{class}" href="?page={p}">{p}</a>"#)
            })
            .collect::<String>();
        format!(r#"<nav class="pagination">{links}</nav>"#)
    }

    /// Wrap a view body in the layout shell and finish the page.
    ///
    /// Debug builds keep the output readable; release builds minify it.
    fn render_page(&self, view: &'static str, body: &str) -> String {
        let html = format!(
            r##"<!DOCTYPE html>
<html lang="en" class="{theme_class}">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <meta name="generator" content="vh-render {version}">
    <style>
        /* Base styles */
        :root {{
            --bg-primary: #ffffff;
            --bg-secondary: #f9fafb;
            --text-primary: #111827;
            --text-secondary: #6b7280;
            --border-color: #e5e7eb;
            --accent-color: #0d6efd;
        }}
        .dark {{
            --bg-primary: #111827;
            --bg-secondary: #1f2937;
            --text-primary: #f9fafb;
            --text-secondary: #9ca3af;
            --border-color: #374151;
            --accent-color: #60a5fa;
        }}
        @media (prefers-color-scheme: dark) {{
            :root:not(.light) {{
                --bg-primary: #111827;
                --bg-secondary: #1f2937;
                --text-primary: #f9fafb;
                --text-secondary: #9ca3af;
                --border-color: #374151;
                --accent-color: #60a5fa;
            }}
        }}
        body {{
            background-color: var(--bg-primary);
            color: var(--text-primary);
            font-family: ui-sans-serif, system-ui, sans-serif;
            line-height: 1.5;
            margin: 0;
        }}
        a {{
            color: inherit;
            text-decoration: none;
        }}
        .wrap {{
            max-width: 960px;
            margin: 0 auto;
            padding: 32px 16px;
        }}
        header h1 {{
            margin: 0 0 4px 0;
        }}
        .tagline {{
            margin: 0 0 24px 0;
            color: var(--text-secondary);
            font-size: 0.9rem;
        }}
        .vol-banner {{
            border: 1px solid #ef4444;
            background: rgba(239, 68, 68, 0.08);
            border-radius: 10px;
            padding: 12px 16px;
            margin: 0 0 18px 0;
        }}
        .vol-grid {{
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 20px;
            padding: 0;
            margin: 0;
        }}
        .vol-card {{
            border: 1px solid var(--border-color);
            border-radius: 10px;
            padding: 16px;
            min-height: 140px;
            display: flex;
            flex-direction: column;
            justify-content: space-between;
            background-color: var(--bg-secondary);
        }}
        .vol-card h3 {{
            margin: 0 0 8px 0;
            font-size: 1.05rem;
        }}
        .vol-card p {{
            margin: 0 0 12px 0;
            color: var(--text-secondary);
        }}
        .vol-meta {{
            font-size: 0.85rem;
            color: var(--text-secondary);
        }}
        .pagination {{
            display: flex;
            justify-content: center;
            gap: 8px;
            margin-top: 18px;
        }}
        .page-num {{
            padding: 6px 10px;
            border-radius: 6px;
            border: 1px solid var(--border-color);
        }}
        .page-num.active {{
            background: var(--accent-color);
            color: #ffffff;
            border-color: var(--accent-color);
        }}
        .vol-detail h2 {{
            margin: 0 0 12px 0;
        }}
        .vol-detail p {{
            margin: 0 0 12px 0;
        }}
        .vol-field {{
            margin: 0 0 8px 0;
        }}
        .vol-field a {{
            color: var(--accent-color);
            text-decoration: underline;
        }}
        .vol-requirements {{
            margin: 0 0 12px 0;
            padding-left: 24px;
        }}
        .vol-back {{
            display: inline-block;
            margin-top: 18px;
            padding: 6px 10px;
            border: 1px solid var(--border-color);
            border-radius: 6px;
        }}
        .vol-footer {{
            margin-top: 32px;
            padding-top: 16px;
            border-top: 1px solid var(--border-color);
            text-align: center;
            font-size: 0.85rem;
            color: var(--text-secondary);
        }}
        .vol-footer p {{
            margin: 0;
        }}
    </style>
</head>
<body>
    <div class="wrap">
        <!-- Header -->
        <header>
            <h1>{title}</h1>
            <p class="tagline">{tagline}</p>
        </header>

        <main>
            {body}
        </main>

        <!-- Footer -->
        <footer class="vol-footer">
            <p>{title} v{version}</p>
        </footer>
    </div>
</body>
</html>"##,
            theme_class = self.config.theme.css_class(),
            title = escape_html(&self.config.title),
            tagline = escape_html(&self.config.tagline),
            version = env!("CARGO_PKG_VERSION"),
            body = body,
        );

        let output = if cfg!(debug_assertions) {
            html
        } else {
            let cfg = minify_html::Cfg {
                minify_css: true,
                ..Default::default()
            };
            String::from_utf8(minify_html::minify(html.as_bytes(), &cfg)).unwrap_or(html)
        };

        debug!(bytes = output.len(), view, "page rendered");
        output
    }
}

impl Default for PageGenerator {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

fn render_banner(banner: Option<&str>) -> String {
    match banner {
        Some(message) => format!(r#"<div class="vol-banner">{}</div>"#, escape_html(message)),
        None => String::new(),
    }
}

/// Description text as escaped paragraphs, split on blank lines.
fn render_description(text: &str) -> String {
    text.split("\n\n")
        .filter(|para| !para.trim().is_empty())
        .map(|para| format!("<p>{}</p>", escape_html(para.trim())))
        .collect()
}

/// Organization line. Only http(s) URLs become hyperlinks; anything else is
/// shown as plain escaped text. An empty URL drops the line entirely.
fn render_organization(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }
    let escaped = escape_html(url);
    if url.starts_with("http://") || url.starts_with("https://") {
        format!(
            r#"<p class="vol-field"><strong>Organization:</strong> <a href="{escaped}" target="_blank" rel="noopener">{escaped}</a></p>"#
        )
    } else {
        format!(r#"<p class="vol-field"><strong>Organization:</strong> {escaped}</p>"#)
    }
}

/// Requirement strings as list items; an empty list renders no bullets.
fn render_requirements(requirements: &[String]) -> String {
    if requirements.is_empty() {
        return String::new();
    }
    let items = requirements
        .iter()
        .map(|req| format!("<li>{}</li>", escape_html(req)))
        .collect::<String>();
    format!(r#"<ul class="vol-requirements">{items}</ul>"#)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vh_catalog::{paginate, PAGE_SIZE};

    fn record(id: &str, title: &str) -> Opportunity {
        Opportunity {
            id: id.into(),
            title: title.to_string(),
            description: "Help out.".to_string(),
            organization_url: "https://example.org".to_string(),
            location: "Riverside".to_string(),
            timeframe: "Weekends".to_string(),
            requirements: vec!["Boots".to_string()],
        }
    }

    #[test]
    fn empty_catalog_renders_the_shell() {
        let generator = PageGenerator::default();
        let records: Vec<Opportunity> = Vec::new();
        let page = paginate(&records, 1, PAGE_SIZE);
        let html = generator.render_list(&page, None);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("Volunteer Hub"));
        assert!(html.contains(r#"class="vol-grid""#));
        assert!(html.contains("page-num active"));
        assert!(
            !html.contains(r#"class="vol-card""#),
            "no cards for an empty catalog"
        );
    }

    #[test]
    fn card_links_carry_id_and_page() {
        let generator = PageGenerator::default();
        let records: Vec<Opportunity> = (0..15)
            .map(|i| record(&format!("vol-{i:03}"), &format!("Job {i}")))
            .collect();
        let page = paginate(&records, 2, PAGE_SIZE);
        let html = generator.render_list(&page, None);
        assert!(html.contains(r#"href="?id=vol-009&page=2""#));
        assert!(!html.contains("vol-000"), "page 1 cards stay off page 2");
    }

    #[test]
    fn detail_back_link_restores_the_page() {
        let generator = PageGenerator::default();
        let html = generator.render_detail(&record("vol-1", "Trail Repair"), 3, None);
        assert!(html.contains("Trail Repair"));
        assert!(html.contains(r#"href="?page=3""#));
        assert!(html.contains("Back to list"));
        assert!(html.contains("Riverside"));
        assert!(html.contains("<li>Boots</li>"));
    }

    #[test]
    fn not_found_keeps_the_back_page() {
        let generator = PageGenerator::default();
        let html = generator.render_not_found(4, None);
        assert!(html.contains("Opportunity not found."));
        assert!(html.contains(r#"href="?page=4""#));
    }

    #[test]
    fn banner_text_is_escaped() {
        let generator = PageGenerator::default();
        let records: Vec<Opportunity> = Vec::new();
        let page = paginate(&records, 1, PAGE_SIZE);
        let html = generator.render_list(&page, Some("Data file not found: <bad&path>"));
        assert!(html.contains("Data file not found: &lt;bad&amp;path&gt;"));
        assert!(!html.contains("<bad&path>"));
    }

    #[test]
    fn card_ids_are_percent_encoded() {
        let generator = PageGenerator::default();
        let records = vec![record("needs encoding/slash", "Odd Id")];
        let page = paginate(&records, 1, PAGE_SIZE);
        let html = generator.render_list(&page, None);
        assert!(html.contains("?id=needs%20encoding%2Fslash&page=1"));
    }
}
