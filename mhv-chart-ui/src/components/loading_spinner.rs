//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Sampling listings...".to_string())]
    pub message: String,
}

#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "{props.message}"
        }
    }
}
