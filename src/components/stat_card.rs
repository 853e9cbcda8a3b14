use dioxus::prelude::*;

#[allow(non_snake_case)]
#[component]
pub fn StatCard(label: String, value: String, icon: String, dark: bool) -> Element {
    let label_cls = if dark { "text-gray-400" } else { "text-gray-500" };
    let value_cls = if dark { "text-white" } else { "text-gray-900" };
    rsx! {
        div {
            p { class: "text-sm {label_cls}", "{icon} {label}" }
            p { class: "text-2xl font-bold {value_cls}", "{value}" }
        }
    }
}
