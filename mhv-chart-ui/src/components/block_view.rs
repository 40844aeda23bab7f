//! Renders one dashboard [`Block`].
//!
//! Prose goes through the same inline markup renderer as the static HTML
//! page; chart blocks become an empty container that `js_bridge` fills.

use crate::components::ChartContainer;
use dioxus::prelude::*;
use mhv_dashboard::markup::render_inline;
use mhv_dashboard::Block;

#[derive(Props, Clone, PartialEq)]
pub struct BlockViewProps {
    pub block: Block,
}

#[component]
pub fn BlockView(props: BlockViewProps) -> Element {
    match props.block {
        Block::Title(title) => rsx! {
            h1 { style: "font-size: 30px; margin: 24px 0 8px 0;", "{title}" }
        },
        Block::Header(header) => rsx! {
            h2 {
                style: "font-size: 22px; margin: 28px 0 8px 0; padding-top: 8px; border-top: 1px solid #e0e0e0;",
                "{header}"
            }
        },
        Block::Text(text) => {
            let html = render_inline(&text);
            rsx! {
                p { style: "line-height: 1.5;", dangerous_inner_html: "{html}" }
            }
        }
        Block::Bullets { intro, items } => {
            let intro_html = intro.as_deref().map(render_inline);
            let item_html: Vec<String> = items.iter().map(|i| render_inline(i)).collect();
            rsx! {
                if let Some(intro_html) = intro_html {
                    p { style: "line-height: 1.5;", dangerous_inner_html: "{intro_html}" }
                }
                ul {
                    for (i, item) in item_html.into_iter().enumerate() {
                        li { key: "{i}", dangerous_inner_html: "{item}" }
                    }
                }
            }
        }
        Block::Code(source) => rsx! {
            pre {
                style: "background: #f6f8fa; padding: 12px; border-radius: 4px; font-size: 13px; overflow-x: auto;",
                code { "{source}" }
            }
        },
        Block::Chart { name, .. } => rsx! {
            ChartContainer { id: name.slug().to_string() }
        },
    }
}
