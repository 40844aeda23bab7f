//! Standalone HTML rendering of a [`Dashboard`].
//!
//! The page pulls vega, vega-lite and vega-embed from jsDelivr and embeds
//! each chart spec inline, so the output file needs no server.

use crate::content::Dashboard;
use crate::markup::escape_html;
use serde_json::Value;

pub const VEGA_JS: &str = "https://cdn.jsdelivr.net/npm/vega@5";
pub const VEGA_LITE_JS: &str = "https://cdn.jsdelivr.net/npm/vega-lite@5";
pub const VEGA_EMBED_JS: &str = "https://cdn.jsdelivr.net/npm/vega-embed@6";

const PAGE_STYLE: &str = "\
body { max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; color: #262730; }
h1 { font-size: 32px; margin: 24px 0 8px 0; }
h2 { font-size: 24px; margin: 32px 0 8px 0; padding-top: 8px; border-top: 1px solid #e0e0e0; }
p, li { font-size: 15px; line-height: 1.5; }
.chart { margin: 12px 0; min-height: 380px; }
pre.code { background: #f6f8fa; padding: 12px; border-radius: 4px; font-size: 13px; overflow-x: auto; }
";

/// Serialize a spec for use inside a `<script>` element.
///
/// `</` is escaped so that string values cannot close the script tag.
pub fn script_json(spec: &Value) -> String {
    spec.to_string().replace("</", "<\\/")
}

/// Full HTML document for the dashboard.
pub fn render_html(dashboard: &Dashboard) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n");
    html.push_str("<html lang=\"en\">\n");
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"UTF-8\">\n");
    html.push_str("  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("  <title>{}</title>\n", escape_html(dashboard.title())));
    html.push_str(&format!("  <script src=\"{}\"></script>\n", VEGA_JS));
    html.push_str(&format!("  <script src=\"{}\"></script>\n", VEGA_LITE_JS));
    html.push_str(&format!("  <script src=\"{}\"></script>\n", VEGA_EMBED_JS));
    html.push_str("  <style>\n");
    html.push_str(PAGE_STYLE);
    html.push_str("  </style>\n");
    html.push_str("</head>\n");
    html.push_str("<body>\n");

    for section in &dashboard.sections {
        html.push_str(&format!("<section id=\"{}\">\n", section.id));
        for block in &section.blocks {
            html.push_str(&block.to_html());
        }
        html.push_str("</section>\n");
    }

    html.push_str("<script>\n");
    for (name, spec) in dashboard.charts() {
        html.push_str(&format!(
            "vegaEmbed('#{}', {}, {{\"actions\": false}}).catch(console.error);\n",
            name.slug(),
            script_json(spec)
        ));
    }
    html.push_str("</script>\n");

    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
