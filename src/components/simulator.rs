//! White-label simulator.
//!
//! The visitor renames the product and picks an identity color; the mock
//! dashboard on the right repaints with both. State is local to the
//! section and forgotten on reload.

use dioxus::prelude::*;
use landing_core::content::{
    Icon, Tone, CHART_MONTHS, DASHBOARD_NAV, DASHBOARD_STATS, WHITE_LABEL_PERKS,
};
use landing_core::BrandProfile;
use landing_ui::{CheckList, ColorSwatches, IconGlyph, Input};

use crate::context::use_settings;
use crate::theme::colors::{SERIES_AMBER, SERIES_BLUE, SLATE_100, SLATE_200};

#[component]
pub fn WhiteLabelSimulator() -> Element {
    let settings = use_settings();
    let mut brand = use_signal(|| settings.brand.clone());

    let current = brand.read().clone();

    rsx! {
        section { id: "oportunidade", class: "section section-tint",
            div { class: "container simulator",
                div { class: "simulator-controls",
                    span { class: "eyebrow", "Oportunidade de Negócio" }
                    h2 { class: "section-title",
                        "Seja Dono da Tecnologia + "
                        br {}
                        span { class: "text-gradient", "Lucro de Revenda 100% Seu" }
                    }

                    div { class: "control-card",
                        div { class: "control-card-header",
                            span { class: "eyebrow", "Simulador White-Label" }
                            h3 { "Personalize seu Sistema" }
                        }
                        Input {
                            value: current.name().to_string(),
                            oninput: move |name: String| brand.write().set_name(name),
                            label: "Nome da Sua Marca".to_string(),
                            placeholder: "Digite o nome da marca...".to_string(),
                            id: "brand-name".to_string(),
                        }
                        div { class: "form-field",
                            span { class: "input-label", "Cor de Identidade" }
                            ColorSwatches {
                                colors: BrandProfile::palette(),
                                selected: current.color().clone(),
                                on_select: move |color| brand.write().set_color(color),
                            }
                        }
                    }

                    CheckList {
                        items: WHITE_LABEL_PERKS.iter().map(|(title, _)| title.to_string()).collect::<Vec<_>>(),
                        details: WHITE_LABEL_PERKS.iter().map(|(_, desc)| desc.to_string()).collect::<Vec<_>>(),
                    }
                }

                MockDashboard { brand: current }
            }
        }
    }
}

/// The product dashboard, painted with the visitor's brand.
#[component]
pub fn MockDashboard(brand: BrandProfile) -> Element {
    let color = brand.color().as_str().to_string();
    let fill = format!("background-color: {};", color);
    let name = brand.name().to_string();
    let search = brand.search_placeholder();
    let domain = brand.domain_preview();
    let performance_svg = performance_chart(&brand);
    let mix_svg = revenue_mix_chart(&brand);

    rsx! {
        div { class: "mock-wrapper",
            div { class: "mock-app",
                aside { class: "mock-sidebar",
                    div { class: "mock-brand",
                        div { class: "mock-brand-mark", style: "{fill}",
                            IconGlyph { icon: Icon::Trending }
                        }
                        span { class: "mock-brand-name", "{name}" }
                    }
                    nav { class: "mock-nav",
                        for (i, (icon, label)) in DASHBOARD_NAV.iter().enumerate() {
                            div {
                                class: if i == 0 { "mock-nav-item active" } else { "mock-nav-item" },
                                style: if i == 0 { fill.clone() } else { String::new() },
                                IconGlyph { icon: *icon }
                                span { "{label}" }
                            }
                        }
                    }
                    div { class: "mock-sidebar-footer",
                        div { class: "mock-whatsapp",
                            p { class: "mock-caption", "Status WhatsApp" }
                            div { class: "mock-status",
                                span { class: "status-dot offline" }
                                span { "Desconectado" }
                            }
                        }
                        div { class: "mock-logout", "\u{21AA} Encerrar Sessão" }
                    }
                }

                div { class: "mock-main",
                    header { class: "mock-header",
                        div { class: "mock-search", "\u{1F50D} {search}" }
                        div { class: "mock-user",
                            span { class: "mock-bell", "\u{1F514}" }
                            div {
                                p { class: "mock-user-name", "Eduardo Mendes" }
                                p { class: "mock-caption", "Sócio Fundador" }
                            }
                        }
                    }

                    div { class: "mock-body",
                        div { class: "mock-title-row",
                            div {
                                h2 { "Seu Negócio em Números" }
                                p { class: "mock-caption", "Dados em tempo real alimentados por IA e integrações n8n." }
                            }
                            button { class: "mock-action", style: "{fill}", "+ Registrar Movimento" }
                        }

                        div { class: "mock-stats",
                            for stat in DASHBOARD_STATS {
                                {
                                    let featured = stat.tone == Tone::Featured;
                                    let detail_class = format!("mock-stat-detail {}", tone_class(stat.tone));
                                    rsx! {
                                        div {
                                            class: if featured { "mock-stat featured" } else { "mock-stat" },
                                            style: if featured { fill.clone() } else { String::new() },
                                            p { class: "mock-stat-label", "{stat.label}" }
                                            p { class: "mock-stat-value", "{stat.value}" }
                                            p { class: "{detail_class}", "{stat.detail}" }
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "mock-charts",
                            div { class: "mock-chart wide",
                                div { class: "mock-chart-head",
                                    p { "Performance Financeira" }
                                    div { class: "mock-legend",
                                        span { class: "legend-dot", style: "{fill}" }
                                        span { "Entradas" }
                                        span { class: "legend-dot muted" }
                                        span { "Saídas" }
                                    }
                                }
                                div { class: "chart-svg", dangerous_inner_html: "{performance_svg}" }
                                div { class: "chart-months",
                                    for month in CHART_MONTHS {
                                        span { "{month}" }
                                    }
                                }
                            }
                            div { class: "mock-chart",
                                p { "Mix de Receita" }
                                div { class: "chart-svg donut", dangerous_inner_html: "{mix_svg}" }
                                div { class: "mock-legend",
                                    span { class: "legend-dot", style: "{fill}" }
                                    span { "Recorrência (MRR)" }
                                    span { class: "legend-value", style: "color: {color};", "65%" }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "mock-footer",
                p { "\u{2728} Sistema 100% White-Label" }
                p { class: "mock-domain", "Domínio atual: {domain}" }
            }
        }
    }
}

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Positive => "tone-positive",
        Tone::Negative => "tone-negative",
        Tone::Info => "tone-info",
        Tone::Featured => "tone-featured",
    }
}

/// Line chart of income vs. expenses, stroked and filled with the brand color.
fn performance_chart(brand: &BrandProfile) -> String {
    let color = brand.color().as_str();
    let gradient = brand.gradient_id();
    format!(
        r##"<svg viewBox="0 0 400 100" preserveAspectRatio="none" width="100%" height="100%">
<defs><linearGradient id="{gradient}" x1="0%" y1="0%" x2="0%" y2="100%">
<stop offset="0%" style="stop-color:{color};stop-opacity:1"/>
<stop offset="100%" style="stop-color:{color};stop-opacity:0"/>
</linearGradient></defs>
<path d="M0,80 Q50,75 100,85 T200,88 T300,82 T400,20" fill="none" stroke="{color}" stroke-width="3" stroke-linecap="round"/>
<path d="M0,80 Q50,75 100,85 T200,88 T300,82 T400,20 L400,100 L0,100 Z" fill="url(#{gradient})" opacity="0.1"/>
<path d="M0,90 Q80,95 160,80 T320,85 T400,60" fill="none" stroke="{muted}" stroke-width="2" stroke-dasharray="4"/>
</svg>"##,
        gradient = gradient,
        color = color,
        muted = SLATE_200,
    )
}

/// Donut of revenue mix; the recurring slice uses the brand color.
fn revenue_mix_chart(brand: &BrandProfile) -> String {
    let ring = |stroke: &str, offset: &str| {
        format!(
            r#"<circle cx="56" cy="56" r="48" fill="none" stroke="{stroke}" stroke-width="12" stroke-dasharray="301.59" stroke-dashoffset="{offset}" stroke-linecap="round"/>"#
        )
    };
    format!(
        r#"<svg viewBox="0 0 112 112" width="112" height="112" style="transform:rotate(-90deg)"><circle cx="56" cy="56" r="48" fill="none" stroke="{track}" stroke-width="12"/>{mrr}{blue}{amber}</svg>"#,
        track = SLATE_100,
        mrr = ring(brand.color().as_str(), "105.5"),
        blue = ring(SERIES_BLUE, "240.5"),
        amber = ring(SERIES_AMBER, "270.5"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use landing_core::BrandColor;

    fn violet() -> BrandProfile {
        BrandProfile::new("Acme", BrandColor::parse("#8b5cf6").unwrap())
    }

    #[test]
    fn test_performance_chart_uses_brand_color() {
        let svg = performance_chart(&violet());
        assert!(svg.contains(r##"stroke="#8b5cf6""##));
        assert!(svg.contains(r#"id="gradient-8b5cf6""#));
        assert!(svg.contains("url(#gradient-8b5cf6)"));
    }

    #[test]
    fn test_revenue_mix_has_three_slices() {
        let svg = revenue_mix_chart(&violet());
        assert_eq!(svg.matches("stroke-dashoffset").count(), 3);
        assert!(svg.contains(r##"stroke="#8b5cf6""##));
        assert!(svg.contains(SERIES_BLUE));
        assert!(svg.contains(SERIES_AMBER));
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(tone_class(Tone::Positive), "tone-positive");
        assert_eq!(tone_class(Tone::Featured), "tone-featured");
    }
}
