//! Pure Yew view components for the blind timer UI.
//!
//! This module contains stateless components that render based on props,
//! making them easy to test and reuse.

use blind_timer::chips::{payment_options, Chip, PaymentOption};
use yew::prelude::*;

/// Coloured chip circle; the colour comes from the CSS class.
fn chip_circle(chip: Chip) -> Html {
    html! { <div class={classes!("chip-circle", chip.as_str())} /> }
}

/// Every single-colour way to pay one blind, separated by "OR".
#[derive(Properties, PartialEq)]
pub struct ChipBreakdownProps {
    pub options: Vec<PaymentOption>,
}

#[function_component(ChipBreakdown)]
pub fn chip_breakdown(props: &ChipBreakdownProps) -> Html {
    // Early return for empty options
    if props.options.is_empty() {
        return html! {
            <div class="breakdown">
                <span class="no-chips">{ "No chips needed" }</span>
            </div>
        };
    }

    html! {
        <div class="breakdown">
            { props.options.iter().enumerate().map(|(idx, option)| html! {
                <div key={option.chip.as_str()} class="payment-option">
                    if idx > 0 {
                        <div class="or-divider">{ "OR" }</div>
                    }
                    <div class="chip-count">
                        { chip_circle(option.chip) }
                        <span>{ format!("× {}", option.count) }</span>
                    </div>
                </div>
            }).collect::<Html>() }
        </div>
    }
}

/// Blind heading plus its chip breakdown.
#[derive(Properties, PartialEq)]
pub struct BlindInfoProps {
    pub label: AttrValue,
    pub amount: u64,
}

#[function_component(BlindInfo)]
pub fn blind_info(props: &BlindInfoProps) -> Html {
    html! {
        <div class="blind-info">
            <h2>{ format!("{}: {}", props.label, props.amount) }</h2>
            <ChipBreakdown options={payment_options(props.amount)} />
        </div>
    }
}

/// Legend mapping each chip colour to its value.
#[function_component(ChipLegend)]
pub fn chip_legend() -> Html {
    html! {
        <section class="legend-section">
            <h3>{ "CHIP VALUES" }</h3>
            <div class="chip-legend">
                { Chip::ALL.iter().map(|&chip| html! {
                    <div key={chip.as_str()} class="chip">
                        { chip_circle(chip) }
                        <span>{ format!("= {}", chip.value()) }</span>
                    </div>
                }).collect::<Html>() }
            </div>
        </section>
    }
}

/// Progress bar showing how much of the level is left.
#[derive(Properties, PartialEq)]
pub struct BurnBarProps {
    pub percent: f64,
}

#[function_component(BurnBar)]
pub fn burn_bar(props: &BurnBarProps) -> Html {
    html! {
        <div class="burn-bar">
            <div class="burn-fill" style={format!("width: {:.1}%", props.percent)} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render_breakdown(options: Vec<PaymentOption>) -> String {
        ServerRenderer::<ChipBreakdown>::with_props(move || ChipBreakdownProps { options })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn alternatives_are_separated_by_or() {
        let html = render_breakdown(payment_options(6)).await;

        assert_eq!(html.matches(r#"class="or-divider""#).count(), 1);
        let red = html.find("chip-circle red").unwrap();
        let or = html.find(">OR<").unwrap();
        let green = html.find("chip-circle green").unwrap();
        assert!(red < or && or < green);
        assert!(html.contains("× 6"));
        assert!(html.contains("× 3"));
        assert!(!html.contains("No chips needed"));
    }

    #[tokio::test]
    async fn single_option_has_no_separator() {
        let html = render_breakdown(payment_options(1)).await;

        assert!(!html.contains("or-divider"));
        assert!(html.contains("chip-circle red"));
        assert!(html.contains("× 1"));
    }

    #[tokio::test]
    async fn empty_options_show_placeholder() {
        let html = render_breakdown(Vec::new()).await;

        assert!(html.contains("No chips needed"));
        assert!(!html.contains("payment-option"));
    }
}
