use crate::charts::{housing_data, ChartName};
use crate::markup::{escape_html, render_inline};
use crate::sections;
use mhv_data::Dataset;
use mhv_vega::VegaError;
use serde_json::Value;

/// One displayable element of a section.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Header(String),
    /// A paragraph with inline `**strong**` / `*emphasis*` markup.
    Text(String),
    Bullets {
        intro: Option<String>,
        items: Vec<String>,
    },
    /// Source listing echoed under a chart.
    Code(String),
    Chart {
        name: ChartName,
        spec: Value,
    },
}

impl Block {
    pub fn text(s: &str) -> Self {
        Block::Text(s.to_string())
    }

    pub fn bullets(intro: Option<&str>, items: &[&str]) -> Self {
        Block::Bullets {
            intro: intro.map(String::from),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// HTML fragment. Chart blocks become empty containers for `vegaEmbed`.
    pub fn to_html(&self) -> String {
        match self {
            Block::Title(t) => format!("<h1>{}</h1>\n", escape_html(t)),
            Block::Header(h) => format!("<h2>{}</h2>\n", escape_html(h)),
            Block::Text(t) => format!("<p>{}</p>\n", render_inline(t)),
            Block::Bullets { intro, items } => {
                let mut html = String::new();
                if let Some(intro) = intro {
                    html.push_str(&format!("<p>{}</p>\n", render_inline(intro)));
                }
                html.push_str("<ul>\n");
                for item in items {
                    html.push_str(&format!("<li>{}</li>\n", render_inline(item)));
                }
                html.push_str("</ul>\n");
                html
            }
            Block::Code(src) => format!("<pre class=\"code\"><code>{}</code></pre>\n", escape_html(src)),
            Block::Chart { name, .. } => {
                format!("<div class=\"chart\" id=\"{}\"></div>\n", name.slug())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub blocks: Vec<Block>,
}

impl Section {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            blocks: Vec::new(),
        }
    }

    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// A chart followed by the code that built it.
    pub fn echo_chart(self, name: ChartName, spec: Value) -> Self {
        self.push(Block::Chart { name, spec })
            .push(Block::Code(name.source()))
    }
}

/// The whole page: title/intro, static chart, interactive charts, closing remarks.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub sections: Vec<Section>,
}

impl Dashboard {
    pub fn build(dataset: &Dataset) -> Result<Self, VegaError> {
        let data = housing_data(dataset)?;
        let dashboard = Self {
            sections: vec![
                sections::head_title(),
                sections::exploratory_analysis(&data)?,
                sections::interactive_plots(&data)?,
                sections::final_analysis(&data)?,
            ],
        };
        log::debug!(
            "dashboard: built {} sections over {} rows",
            dashboard.sections.len(),
            dataset.len()
        );
        Ok(dashboard)
    }

    /// The first title block, used as the page title.
    pub fn title(&self) -> &str {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .find_map(|b| match b {
                Block::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .unwrap_or("Dashboard")
    }

    pub fn charts(&self) -> impl Iterator<Item = (ChartName, &Value)> {
        self.sections
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Chart { name, spec } => Some((*name, spec)),
                _ => None,
            })
    }
}
