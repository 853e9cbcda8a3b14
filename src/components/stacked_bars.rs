use dioxus::prelude::*;

use crate::utils::format::format_percent;
use crate::viewmodel::{DelayBucket, SeriesRow};

/// How a series is laid out: `Rows` draws one horizontal 100%-stacked bar per
/// entry (time-of-day, zones), `Columns` draws stacked vertical columns with
/// a hover tooltip (weekly trends).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Rows,
    Columns,
}

/// Card wrapper shared by every chart on the page.
#[allow(non_snake_case)]
#[component]
pub fn ChartSection(title: String, description: String, dark: bool, children: Element) -> Element {
    let card_cls = if dark { "bg-gray-800" } else { "bg-white" };
    let title_cls = if dark { "text-white" } else { "text-gray-900" };
    let desc_cls = if dark { "text-gray-400" } else { "text-gray-500" };
    rsx! {
        div { class: "p-4 sm:p-6 rounded-xl {card_cls} shadow-sm mb-8",
            h2 { class: "text-xl font-semibold mb-2 {title_cls}", "{title}" }
            p { class: "text-sm mb-4 {desc_cls}", "{description}" }
            {children}
        }
    }
}

#[allow(non_snake_case)]
#[component]
pub fn StackedBarChart(rows: Vec<SeriesRow>, orientation: Orientation, dark: bool) -> Element {
    match orientation {
        Orientation::Rows => rsx! { StackedRows { rows, dark } },
        Orientation::Columns => rsx! { StackedColumns { rows, dark } },
    }
}

#[allow(non_snake_case)]
#[component]
fn StackedRows(rows: Vec<SeriesRow>, dark: bool) -> Element {
    let width = 640.0f32;
    let label_w = 96.0f32;
    let bar_h = 28.0f32;
    let gap = 12.0f32;
    let pad = 8.0f32;
    let plot_w = width - label_w - pad;
    let height = pad * 2.0 + (rows.len() as f32) * (bar_h + gap) - gap;
    let view_box = format!("0 0 {} {}", width, height.max(bar_h));
    let label_fill = if dark { "#9CA3AF" } else { "#6B7280" };

    rsx! {
        div { class: "w-full overflow-x-auto",
            svg { class: "block min-w-full", view_box: "{view_box}", width: "100%",
                {
                    rows.iter().enumerate().map(|(i, row)| {
                        let y = pad + (i as f32) * (bar_h + gap);
                        let mut x = label_w;
                        let segments = DelayBucket::ALL.iter().map(|bucket| {
                            let value = row.values.get(*bucket);
                            let w = ((value / 100.0) as f32) * plot_w;
                            let seg_x = x;
                            x += w;
                            let show_label = w > 36.0;
                            let text_x = seg_x + w / 2.0;
                            let text_fill = bucket.text();
                            let pct = format_percent(value);
                            rsx! {
                                g { key: "{bucket.short_label()}",
                                    rect { x: "{seg_x}", y: "{y}", width: "{w}", height: "{bar_h}", fill: "{bucket.fill()}" }
                                    if show_label {
                                        text {
                                            x: "{text_x}", y: "{y + bar_h / 2.0 + 4.0}",
                                            text_anchor: "middle", font_size: "12", fill: "{text_fill}",
                                            "{pct}"
                                        }
                                    }
                                }
                            }
                        }).collect::<Vec<_>>();
                        rsx! {
                            g { key: "{row.label}",
                                text {
                                    x: "{label_w - 8.0}", y: "{y + bar_h / 2.0 + 4.0}",
                                    text_anchor: "end", font_size: "13", fill: "{label_fill}",
                                    "{row.label}"
                                }
                                {segments.into_iter()}
                            }
                        }
                    })
                }
            }
            BucketLegend { dark }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn StackedColumns(rows: Vec<SeriesRow>, dark: bool) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);
    let col_w = 44.0f32;
    let col_gap = 20.0f32;
    let pad = 20.0f32;
    let plot_h = 220.0f32;
    let n = rows.len().max(1) as f32;
    let width = pad * 2.0 + n * (col_w + col_gap) - col_gap;
    let height = plot_h + pad * 2.0 + 16.0;
    let view_box = format!("0 0 {} {}", width, height);
    let label_fill = if dark { "#9CA3AF" } else { "#6B7280" };
    let axis_stroke = if dark { "#1f2937" } else { "#e5e7eb" };

    rsx! {
        div { class: "w-full overflow-x-auto",
            svg { class: "block min-w-full", view_box: "{view_box}", width: "100%", height: "{height}",
                line {
                    x1: "{pad}", y1: "{pad + plot_h}", x2: "{width - pad}", y2: "{pad + plot_h}",
                    stroke: "{axis_stroke}", stroke_width: "1",
                }
                {
                    rows.iter().enumerate().map(|(i, row)| {
                        let x = pad + (i as f32) * (col_w + col_gap);
                        let mut y = pad + plot_h;
                        let segments = DelayBucket::ALL.iter().map(|bucket| {
                            let value = row.values.get(*bucket);
                            let h = ((value / 100.0) as f32) * plot_h;
                            y -= h;
                            let seg_y = y;
                            rsx! {
                                rect {
                                    key: "{bucket.short_label()}",
                                    x: "{x}", y: "{seg_y}", width: "{col_w}", height: "{h}",
                                    fill: "{bucket.fill()}",
                                }
                            }
                        }).collect::<Vec<_>>();
                        rsx! {
                            g { key: "{row.label}",
                                onmouseenter: move |_| *hovered.write() = Some(i),
                                onmouseleave: move |_| *hovered.write() = None,
                                {segments.into_iter()}
                                text {
                                    x: "{x + col_w / 2.0}", y: "{pad + plot_h + 14.0}",
                                    text_anchor: "middle", font_size: "11", fill: "{label_fill}",
                                    "{row.label}"
                                }
                            }
                        }
                    })
                }
                {
                    match *hovered.read() {
                        Some(i) if i < rows.len() => {
                            let row = &rows[i];
                            let x = pad + (i as f32) * (col_w + col_gap) + col_w / 2.0;
                            let lines: Vec<String> = std::iter::once(row.label.clone())
                                .chain(DelayBucket::ALL.iter().map(|b| {
                                    format!("{}: {}", b.short_label(), format_percent(row.values.get(*b)))
                                }))
                                .collect();
                            let cw = 7.0f32; // approx char width at 11px
                            let content_w = lines.iter().map(|l| l.len()).max().unwrap_or(0) as f32 * cw + 16.0;
                            let tip_w = content_w.max(60.0).min(width - pad * 2.0);
                            let tip_h = 14.0 * lines.len() as f32 + 10.0;
                            let tip_x = (x - tip_w / 2.0).clamp(pad, (width - pad) - tip_w);
                            let tip_y = 6.0f32;
                            let (tip_fill, tip_stroke, tip_text) = if dark {
                                ("#0f172a", "#334155", "#e5e7eb")
                            } else {
                                ("#ffffff", "#d1d5db", "#1f2937")
                            };
                            rsx! {
                                g { key: "tooltip",
                                    rect {
                                        x: "{tip_x}", y: "{tip_y}", width: "{tip_w}", height: "{tip_h}",
                                        rx: "6", fill: "{tip_fill}", stroke: "{tip_stroke}", stroke_width: "1",
                                    }
                                    {
                                        lines.iter().enumerate().map(|(li, line)| {
                                            let ly = tip_y + 14.0 + (li as f32) * 14.0;
                                            rsx! {
                                                text {
                                                    key: "{li}",
                                                    x: "{tip_x + 8.0}", y: "{ly}",
                                                    font_size: "11", fill: "{tip_text}",
                                                    "{line}"
                                                }
                                            }
                                        })
                                    }
                                }
                            }
                        }
                        _ => rsx!( Fragment {} ),
                    }
                }
            }
            BucketLegend { dark }
        }
    }
}

/// Swatch + short label for each delay bucket, shared by charts and heat map.
#[allow(non_snake_case)]
#[component]
pub fn BucketLegend(dark: bool) -> Element {
    let label_cls = if dark { "text-gray-400" } else { "text-gray-600" };
    rsx! {
        div { class: "mt-4 flex flex-wrap justify-center gap-x-4 gap-y-2",
            for bucket in DelayBucket::ALL {
                div { key: "{bucket.short_label()}", class: "flex items-center",
                    div {
                        class: "w-4 h-4 rounded mr-2",
                        style: "background-color: {bucket.fill()}",
                    }
                    span { class: "text-sm {label_cls}", "{bucket.short_label()}" }
                }
            }
        }
    }
}
