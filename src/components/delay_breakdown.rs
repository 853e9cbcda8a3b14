use dioxus::prelude::*;

use crate::shared::types::DelayCounts;
use crate::utils::format::format_percent;
use crate::viewmodel::DelayBucket;

/// The four bucket percentages for the selected direction, one colored tile
/// per bucket.
#[allow(non_snake_case)]
#[component]
pub fn DelayBreakdown(delays: DelayCounts, dark: bool) -> Element {
    let card_cls = if dark { "bg-gray-800" } else { "bg-white" };
    let title_cls = if dark { "text-white" } else { "text-gray-900" };
    let label_cls = if dark { "text-gray-400" } else { "text-gray-500" };
    rsx! {
        div { class: "p-6 rounded-xl {card_cls} shadow-sm",
            h2 { class: "text-xl font-semibold mb-4 {title_cls}", "⏱️ Delay Breakdown" }
            div { class: "grid grid-cols-2 gap-4",
                for bucket in DelayBucket::ALL {
                    div { key: "{bucket.label()}",
                        div { class: "flex items-center mb-1",
                            div {
                                class: "w-4 h-4 rounded mr-2",
                                style: "background-color: {bucket.fill()}",
                            }
                            p { class: "text-sm {label_cls}", "{bucket.label()}" }
                        }
                        p {
                            class: "text-2xl font-bold",
                            style: "color: {bucket.fill()}",
                            "{format_percent(delays.get(bucket))}"
                        }
                    }
                }
            }
        }
    }
}
