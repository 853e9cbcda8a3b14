use dioxus::prelude::*;

use crate::components::BucketLegend;
use crate::utils::format::format_minutes;
use crate::viewmodel::{classify_delay, HeatMatrix, TimeSlot, Zone};

/// Zone x time-slot grid of average delay minutes, each cell colored by the
/// delay classification. Wide screens get the landscape grid (slots across),
/// narrow screens a transposed layout with one column per zone.
#[allow(non_snake_case)]
#[component]
pub fn DelayHeatMap(matrix: HeatMatrix, dark: bool) -> Element {
    let card_cls = if dark { "bg-gray-800" } else { "bg-white" };
    let title_cls = if dark { "text-white" } else { "text-gray-900" };
    let desc_cls = if dark { "text-gray-400" } else { "text-gray-500" };
    rsx! {
        div { class: "p-4 sm:p-6 rounded-xl {card_cls} shadow-sm mb-8",
            h2 { class: "text-xl font-semibold mb-2 {title_cls}", "🌡️ Delay Heat Map" }
            p { class: "text-sm mb-4 {desc_cls}",
                "Average delays by time of day and Schengen status of destination/origin city."
            }
            LandscapeHeatMap { matrix, dark }
            PortraitHeatMap { matrix, dark }
            BucketLegend { dark }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn LandscapeHeatMap(matrix: HeatMatrix, dark: bool) -> Element {
    let axis_cls = if dark { "text-gray-400" } else { "text-gray-600" };
    rsx! {
        div { class: "hidden sm:block w-full",
            div { class: "flex flex-col items-center",
                // header row
                div { class: "flex w-full max-w-3xl",
                    div { class: "w-32 shrink-0" }
                    for slot in TimeSlot::ALL {
                        div { key: "{slot.label()}", class: "w-32 p-2 text-center text-sm shrink-0 {axis_cls}",
                            "{slot.label()}"
                        }
                    }
                }
                for zone in Zone::ALL {
                    div { key: "{zone.label()}", class: "flex w-full max-w-3xl",
                        div { class: "w-32 p-2 text-sm flex items-center shrink-0 {axis_cls}",
                            "{zone.label()}"
                        }
                        for slot in TimeSlot::ALL {
                            HeatMapCell {
                                key: "{zone.label()}-{slot.label()}",
                                minutes: matrix.get(zone, slot),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn PortraitHeatMap(matrix: HeatMatrix, dark: bool) -> Element {
    let axis_cls = if dark { "text-gray-400" } else { "text-gray-600" };
    rsx! {
        div { class: "block sm:hidden w-full",
            div { class: "flex justify-center",
                div { class: "flex",
                    // slot labels down the left edge
                    div { class: "flex flex-col",
                        div { class: "h-20 p-2 flex items-center justify-end",
                            div { class: "text-sm {axis_cls}", "Time of Day" }
                        }
                        for slot in TimeSlot::ALL {
                            div { key: "{slot.label()}",
                                class: "h-20 p-2 flex items-center justify-end text-sm {axis_cls}",
                                "{slot.label()}"
                            }
                        }
                    }
                    for zone in Zone::ALL {
                        div { key: "{zone.label()}", class: "flex flex-col",
                            div { class: "h-20 p-2 flex items-center justify-center text-sm {axis_cls}",
                                "{zone.label()}"
                            }
                            for slot in TimeSlot::ALL {
                                HeatMapCell {
                                    key: "{zone.label()}-{slot.label()}",
                                    minutes: matrix.get(zone, slot),
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn HeatMapCell(minutes: f64) -> Element {
    let style = classify_delay(minutes);
    rsx! {
        div {
            class: "w-32 h-24 p-2 m-1 rounded-lg flex items-center justify-center transition-colors duration-200 shrink-0",
            style: "background-color: {style.fill}; color: {style.text}",
            span { class: "font-bold text-lg", "{format_minutes(minutes)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::DirectionStats;
    use crate::viewmodel::heat_matrix;

    fn sample_matrix() -> HeatMatrix {
        let stats: DirectionStats = serde_json::from_value(serde_json::json!({
            "heatmap": {
                "schengen": {"early": 4, "morning": 12, "afternoon": 22, "evening": 35},
                "nonSchengen": {"early": 10, "morning": 18, "afternoon": 40, "evening": 70}
            }
        }))
        .unwrap();
        heat_matrix(&stats)
    }

    #[test]
    fn renders_landscape_and_portrait_variants() {
        let matrix = sample_matrix();
        let html = dioxus_ssr::render_element(rsx! {
            DelayHeatMap { matrix, dark: true }
        });
        // wide screens: slots across; narrow screens: transposed zone columns
        assert!(html.contains("hidden sm:block"));
        assert!(html.contains("block sm:hidden"));
        // both variants draw every cell
        assert_eq!(html.matches("70m").count(), 2);
    }

    #[test]
    fn cells_carry_classified_colors() {
        let matrix = sample_matrix();
        let html = dioxus_ssr::render_element(rsx! {
            DelayHeatMap { matrix, dark: false }
        });
        // 4m cell is on-time green, 70m cell major red with light text
        assert!(html.contains("#10B981"));
        assert!(html.contains("#EF4444"));
        assert!(html.contains("color: #FFFFFF"));
    }
}
