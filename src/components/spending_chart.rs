//! Spending Chart Component
//!
//! Static bar chart; bar heights are fractions of the plot area.

use leptos::prelude::*;
use wallet_flow::catalog::{self, Icon};

#[component]
pub fn SpendingChart() -> impl IntoView {
    view! {
        <div class="chart-card">
            <div class="chart-filter">
                <span>{catalog::CHART_PERIOD}</span>
                <span aria-hidden="true">{Icon::ChevronDown.glyph()}</span>
            </div>
            <div class="chart-bars">
                {catalog::CHART
                    .iter()
                    .map(|bar| {
                        let style = format!("height: {:.0}%", bar.height * 100.0);
                        let class = format!("chart-bar {}", bar.tone.css_class());
                        view! {
                            <div class="chart-column">
                                <div class="chart-plot">
                                    <div class=class style=style></div>
                                </div>
                                <span class="chart-label">{bar.label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
