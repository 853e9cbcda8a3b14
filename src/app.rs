use dioxus::prelude::*;

use crate::api::flight_stats;
use crate::components::{
    ChartSection, DelayBreakdown, DelayHeatMap, Orientation, SkeletonLoader, StackedBarChart,
    StatCard,
};
use crate::shared::types::{FetchError, FlightStatsDto};
use crate::state::{FetchPhase, ViewState};
use crate::utils::format::{format_local, format_minutes, format_percent};
use crate::viewmodel::{select_direction, Direction, ViewModel};
use crate::TAILWIND_CSS;

#[allow(non_snake_case)]
#[component]
pub fn App() -> Element {
    let mut view = use_signal(ViewState::new);

    // One fetch per page load; switching direction re-derives from the
    // already-fetched document.
    let stats = use_server_future(flight_stats)?;
    let stats_v = stats.read_unchecked();

    // Fold the resource outcome into the view state; rendering below is
    // driven by the fetch phase.
    use_effect(move || {
        let current = stats.read();
        match &*current {
            Some(Ok(Some(_))) => view.write().data_fetched(),
            Some(Ok(None)) => view.write().data_fetch_failed(FetchError::DataUnavailable),
            Some(Err(_)) => view.write().data_fetch_failed(FetchError::FetchFailed),
            None => {}
        }
    });

    // Force one rerender after hydration so client formatting can apply
    let hydrated = use_signal(|| false);
    #[cfg(feature = "web")]
    {
        use_effect({
            let mut hydrated = hydrated.clone();
            move || {
                hydrated.set(true); // runs once on the client after hydration
            }
        });
    }

    let dark = view.read().is_dark();
    let direction = view.read().direction;
    let page_cls = if dark { "bg-gray-900" } else { "bg-gray-50" };
    let title_cls = if dark { "text-white" } else { "text-gray-900" };
    let subtitle_cls = if dark { "text-gray-400" } else { "text-gray-600" };
    let toggle_cls = if dark {
        "bg-gray-800 text-yellow-400"
    } else {
        "bg-gray-100 text-gray-600"
    };
    let toggle_glyph = if dark { "🌙" } else { "☀️" };

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Meta { name: "color-scheme", content: "light dark" }
        div { class: "min-h-screen transition-colors duration-200 {page_cls}",
            div { class: "max-w-7xl mx-auto px-4 py-8",
                // Header: title plus theme toggle; stays interactive in every
                // fetch state.
                div { class: "flex justify-between items-center mb-8",
                    div { class: "flex-grow text-center",
                        h1 { class: "text-3xl font-bold {title_cls}", "✈️ Lisb-On Time" }
                        p { class: "text-sm {subtitle_cls}", "Airport delay trends at LIS" }
                    }
                    button {
                        class: "p-2 rounded-full {toggle_cls}",
                        onclick: move |_| view.write().toggle_theme(),
                        "{toggle_glyph}"
                    }
                }

                {
                    match view.read().fetch {
                        FetchPhase::Ready => match &*stats_v {
                            Some(Ok(Some(dto))) => rsx! {
                                DirectionToggle { view, dark }
                                MainContent {
                                    dto: dto.clone(),
                                    direction,
                                    dark,
                                    hydrated: *hydrated.read(),
                                }
                            },
                            // phase says ready but the resource is mid-restart
                            _ => rsx! {
                                SkeletonLoader { dark }
                            },
                        },
                        FetchPhase::Failed(error) => rsx! {
                            ErrorPanel { error }
                        },
                        // Outstanding fetch: skeleton until it settles.
                        FetchPhase::Loading => rsx! {
                            SkeletonLoader { dark }
                        },
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn DirectionToggle(view: Signal<ViewState>, dark: bool) -> Element {
    let mut view = view;
    let selected = view.read().direction;
    let group_cls = if dark { "bg-gray-800" } else { "bg-gray-100" };
    let button_cls = move |dir: Direction| {
        if selected == dir {
            if dark {
                "bg-blue-600 text-white"
            } else {
                "bg-white shadow-sm text-blue-600"
            }
        } else if dark {
            "text-gray-400"
        } else {
            "text-gray-600"
        }
    };
    rsx! {
        div { class: "flex justify-center mb-8",
            div { class: "inline-flex rounded-lg {group_cls} p-1",
                button {
                    class: "flex items-center px-4 py-2 rounded-md transition-colors {button_cls(Direction::Arrivals)}",
                    onclick: move |_| view.write().select_direction(Direction::Arrivals),
                    "🛬 {Direction::Arrivals.label()}"
                }
                button {
                    class: "flex items-center px-4 py-2 rounded-md transition-colors {button_cls(Direction::Departures)}",
                    onclick: move |_| view.write().select_direction(Direction::Departures),
                    "🛫 {Direction::Departures.label()}"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ErrorPanel(error: FetchError) -> Element {
    rsx! {
        div { class: "min-h-[50vh] flex items-center justify-center",
            div { class: "text-red-500 text-xl", "{error}" }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn MainContent(dto: FlightStatsDto, direction: Direction, dark: bool, hydrated: bool) -> Element {
    let stats = select_direction(&dto.document, direction);
    let vm = ViewModel::build(stats);

    let card_cls = if dark { "bg-gray-800" } else { "bg-white" };
    let heading_cls = if dark { "text-white" } else { "text-gray-900" };
    let footer_cls = if dark {
        "border-gray-800 text-gray-400"
    } else {
        "border-gray-200 text-gray-600"
    };
    let shown_time = if hydrated {
        format_local(&dto.fetched_at)
    } else {
        dto.fetched_at.clone()
    };

    rsx! {
        // Summary stats
        div { class: "grid md:grid-cols-2 gap-6 mb-8",
            div { class: "p-6 rounded-xl {card_cls} shadow-sm",
                h2 { class: "text-xl font-semibold mb-4 {heading_cls}", "🛫 Flight Statistics" }
                div { class: "grid grid-cols-2 gap-4",
                    StatCard {
                        label: "Flights per Day",
                        value: vm.flights_per_day.to_string(),
                        icon: "✈️",
                        dark,
                    }
                    StatCard {
                        label: "Days Tracked",
                        value: vm.days_tracked.to_string(),
                        icon: "📅",
                        dark,
                    }
                    StatCard {
                        label: "Flights On Time",
                        value: format_percent(vm.delays.on_time),
                        icon: "✅",
                        dark,
                    }
                    StatCard {
                        label: "Average Delay",
                        value: format_minutes(vm.average_delay),
                        icon: "⏱️",
                        dark,
                    }
                }
            }
            DelayBreakdown { delays: vm.delays, dark }
        }

        ChartSection {
            title: "🕒 Time of Day Trends",
            description: "How does the time of day impact your delay?",
            dark,
            StackedBarChart {
                rows: vm.time_of_day.clone(),
                orientation: Orientation::Rows,
                dark,
            }
        }

        ChartSection {
            title: "🌍 Schengen vs Non-Schengen",
            description: "How do delays compare between Schengen and non-Schengen flights?",
            dark,
            StackedBarChart {
                rows: vm.schengen.to_vec(),
                orientation: Orientation::Rows,
                dark,
            }
        }

        DelayHeatMap { matrix: vm.heat, dark }

        ChartSection {
            title: "📊 Weekly Trends",
            description: "Are delays getting better or worse over time?",
            dark,
            StackedBarChart {
                rows: vm.weekly.clone(),
                orientation: Orientation::Columns,
                dark,
            }
        }

        footer { class: "text-center py-4 border-t {footer_cls}",
            p { class: "text-sm",
                time { datetime: "{dto.fetched_at}", "Data as of {shown_time}" }
            }
        }
    }
}
