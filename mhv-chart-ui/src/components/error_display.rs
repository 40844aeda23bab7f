//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Optional follow-up shown under the message
    #[props(default = String::new())]
    pub hint: String,
}

/// Displays a loader or chart error in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
            if !props.hint.is_empty() {
                p {
                    style: "margin: 6px 0 0 0; font-size: 12px; color: #8E2424;",
                    "{props.hint}"
                }
            }
        }
    }
}
