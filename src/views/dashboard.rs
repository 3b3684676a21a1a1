use crate::charts::{pie_slices, polyline_points, scale_heights};
use dioxus::prelude::*;

// Fixed demo data; nothing here is live.

struct MonthlySample {
    month: &'static str,
    revenue: f64,
    users: f64,
}

const SALES_DATA: &[MonthlySample] = &[
    MonthlySample { month: "Jan", revenue: 45000.0, users: 1200.0 },
    MonthlySample { month: "Feb", revenue: 52000.0, users: 1350.0 },
    MonthlySample { month: "Mar", revenue: 48000.0, users: 1280.0 },
    MonthlySample { month: "Apr", revenue: 61000.0, users: 1520.0 },
    MonthlySample { month: "May", revenue: 67000.0, users: 1680.0 },
    MonthlySample { month: "Jun", revenue: 74000.0, users: 1850.0 },
];

struct PlatformShare {
    name: &'static str,
    value: f64,
    color: &'static str,
}

const PLATFORM_SPLIT: &[PlatformShare] = &[
    PlatformShare { name: "Web App", value: 45.0, color: "#3b82f6" },
    PlatformShare { name: "Mobile", value: 30.0, color: "#8b5cf6" },
    PlatformShare { name: "Desktop", value: 15.0, color: "#06b6d4" },
    PlatformShare { name: "Other", value: 10.0, color: "#10b981" },
];

struct Metric {
    title: &'static str,
    value: &'static str,
    change: &'static str,
    trend_up: bool,
}

const METRICS: &[Metric] = &[
    Metric { title: "Total Revenue", value: "$347K", change: "+12.5%", trend_up: true },
    Metric { title: "Active Users", value: "1,850", change: "+8.2%", trend_up: true },
    Metric { title: "Conversion Rate", value: "3.24%", change: "-2.1%", trend_up: false },
    Metric { title: "Avg. Session", value: "4m 32s", change: "+5.4%", trend_up: true },
];

struct ActivityEntry {
    user: &'static str,
    action: &'static str,
    time: &'static str,
    kind: &'static str,
}

const RECENT_ACTIVITIES: &[ActivityEntry] = &[
    ActivityEntry { user: "Sarah Johnson", action: "Completed project milestone", time: "2 min ago", kind: "success" },
    ActivityEntry { user: "Mike Chen", action: "Updated dashboard settings", time: "5 min ago", kind: "info" },
    ActivityEntry { user: "Emily Davis", action: "Generated monthly report", time: "12 min ago", kind: "info" },
    ActivityEntry { user: "Alex Thompson", action: "Fixed critical bug", time: "18 min ago", kind: "warning" },
    ActivityEntry { user: "Lisa Wang", action: "Added new team member", time: "25 min ago", kind: "success" },
];

const DASHBOARD_TABS: &[&str] = &["Overview", "Analytics", "Reports"];

const PLOT_WIDTH: f64 = 320.0;
const PLOT_HEIGHT: f64 = 180.0;

#[component]
pub fn DashboardDemo() -> Element {
    let mut active_tab = use_signal(|| DASHBOARD_TABS[0]);

    rsx! {
        section { id: "dashboard-demo", class: "section",
            div { class: "section-heading",
                h2 { class: "section-title neon-text", "SaaS Dashboard Demo" }
                p { class: "section-subtitle",
                    "Interactive dashboard showcasing my UI/UX design and data visualization skills"
                }
            }

            div { class: "card glass dashboard-header",
                div {
                    h3 { "Analytics Dashboard" }
                    p { class: "text-muted", "Monitor your business performance in real-time" }
                }
                div { class: "filter-row",
                    for tab in DASHBOARD_TABS.iter().copied() {
                        button {
                            class: if active_tab() == tab { "btn btn-primary neon-glow" } else { "btn btn-outline glass" },
                            r#type: "button",
                            onclick: move |_| active_tab.set(tab),
                            "{tab}"
                        }
                    }
                }
            }

            div { class: "metrics-grid",
                for metric in METRICS {
                    div { class: "card glass metric-card",
                        p { class: "text-muted", "{metric.title}" }
                        p { class: "metric-value", "{metric.value}" }
                        span {
                            class: if metric.trend_up { "trend trend-up" } else { "trend trend-down" },
                            {if metric.trend_up { "▲ " } else { "▼ " }}
                            "{metric.change}"
                        }
                    }
                }
            }

            div { class: "charts-grid",
                div { class: "card glass",
                    h3 { "Revenue Overview" }
                    p { class: "text-muted", "Monthly revenue and user growth" }
                    RevenueBarChart {}
                }
                div { class: "card glass",
                    h3 { "User Growth" }
                    p { class: "text-muted", "Active users over time" }
                    UserGrowthLineChart {}
                }
            }

            div { class: "dashboard-bottom-grid",
                div { class: "card glass",
                    h3 { "Platform Distribution" }
                    PlatformPieChart {}
                }
                div { class: "card glass activity-card",
                    h3 { "Recent Activity" }
                    p { class: "text-muted", "Latest team activities and updates" }
                    div { class: "activity-list",
                        for activity in RECENT_ACTIVITIES {
                            div { class: "activity-row glass",
                                span { class: "activity-dot {activity.kind}" }
                                div { class: "activity-text",
                                    p { class: "strong", "{activity.user}" }
                                    p { class: "text-muted", "{activity.action}" }
                                }
                                span { class: "badge badge-secondary", "{activity.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct BarGeometry {
    x: String,
    y: String,
    width: String,
    height: String,
    label_x: String,
    month: &'static str,
}

fn revenue_bars() -> Vec<BarGeometry> {
    let revenues: Vec<f64> = SALES_DATA.iter().map(|s| s.revenue).collect();
    let heights = scale_heights(&revenues, PLOT_HEIGHT);
    let slot = PLOT_WIDTH / SALES_DATA.len() as f64;
    let bar_width = slot * 0.55;
    heights
        .iter()
        .zip(SALES_DATA)
        .enumerate()
        .map(|(i, (height, sample))| BarGeometry {
            x: format!("{:.1}", i as f64 * slot + (slot - bar_width) / 2.0),
            y: format!("{:.1}", PLOT_HEIGHT - height),
            width: format!("{bar_width:.1}"),
            height: format!("{height:.1}"),
            label_x: format!("{:.1}", i as f64 * slot + slot / 2.0),
            month: sample.month,
        })
        .collect()
}

#[component]
fn RevenueBarChart() -> Element {
    let bars = revenue_bars();
    let view_box = format!("0 0 {PLOT_WIDTH} {}", PLOT_HEIGHT + 20.0);
    let label_y = format!("{}", PLOT_HEIGHT + 14.0);

    rsx! {
        svg { class: "chart", view_box: "{view_box}",
            for bar in bars {
                rect {
                    class: "chart-bar",
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    rx: "4",
                }
                text {
                    class: "chart-label",
                    x: "{bar.label_x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{bar.month}"
                }
            }
        }
    }
}

struct AxisLabel {
    x: String,
    month: &'static str,
}

fn growth_axis_labels() -> Vec<AxisLabel> {
    let slot = if SALES_DATA.len() > 1 {
        PLOT_WIDTH / (SALES_DATA.len() - 1) as f64
    } else {
        0.0
    };
    SALES_DATA
        .iter()
        .enumerate()
        .map(|(i, sample)| AxisLabel {
            x: format!("{:.1}", i as f64 * slot),
            month: sample.month,
        })
        .collect()
}

#[component]
fn UserGrowthLineChart() -> Element {
    let users: Vec<f64> = SALES_DATA.iter().map(|s| s.users).collect();
    let points = polyline_points(&users, PLOT_WIDTH, PLOT_HEIGHT);
    let labels = growth_axis_labels();
    let view_box = format!("-10 -10 {} {}", PLOT_WIDTH + 20.0, PLOT_HEIGHT + 30.0);
    let label_y = format!("{}", PLOT_HEIGHT + 14.0);

    rsx! {
        svg { class: "chart", view_box: "{view_box}",
            polyline { class: "chart-line", points: "{points}", fill: "none" }
            for label in labels {
                text {
                    class: "chart-label",
                    x: "{label.x}",
                    y: "{label_y}",
                    text_anchor: "middle",
                    "{label.month}"
                }
            }
        }
    }
}

#[component]
fn PlatformPieChart() -> Element {
    let values: Vec<f64> = PLATFORM_SPLIT.iter().map(|p| p.value).collect();
    let slices = pie_slices(&values, 100.0, 100.0, 80.0, 40.0);

    rsx! {
        svg { class: "chart pie-chart", view_box: "0 0 200 200",
            for (slice, share) in slices.iter().zip(PLATFORM_SPLIT) {
                path { d: "{slice.path}", fill: "{share.color}" }
            }
        }
        div { class: "pie-legend",
            for share in PLATFORM_SPLIT {
                div { class: "pie-legend-row",
                    span {
                        class: "pie-legend-swatch",
                        style: "background-color: {share.color};",
                    }
                    span { "{share.name}" }
                    span { class: "pie-legend-value", "{share.value}%" }
                }
            }
        }
    }
}
