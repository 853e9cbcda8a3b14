use dioxus::prelude::*;

/// Placeholder blocks shown while the statistics document is loading.
/// Rendered inside the page container, so it carries no width/padding
/// classes of its own.
#[allow(non_snake_case)]
#[component]
pub fn SkeletonLoader(dark: bool) -> Element {
    let block_cls = if dark { "bg-gray-800" } else { "bg-gray-200" };
    rsx! {
        div { class: "animate-pulse space-y-8",
            div { class: "h-9 w-64 mx-auto rounded {block_cls}" }
            div { class: "h-10 w-72 mx-auto rounded-lg {block_cls}" }
            div { class: "grid md:grid-cols-2 gap-6",
                div { class: "h-48 rounded-xl {block_cls}" }
                div { class: "h-48 rounded-xl {block_cls}" }
            }
            div { class: "h-72 rounded-xl {block_cls}" }
            div { class: "h-64 rounded-xl {block_cls}" }
        }
    }
}
