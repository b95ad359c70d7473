//! Color Swatches Component
//!
//! Row of selectable identity colors for the white-label simulator.
//! The selected swatch is scaled up with a dark border.

use dioxus::prelude::*;
use landing_core::BrandColor;

/// Properties for the ColorSwatches component
#[derive(Clone, PartialEq, Props)]
pub struct ColorSwatchesProps {
    /// Available colors
    pub colors: Vec<BrandColor>,
    /// Currently selected color
    pub selected: BrandColor,
    /// Handler called when a swatch is clicked
    pub on_select: EventHandler<BrandColor>,
}

/// Displays a row of color swatches as a radio group
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ColorSwatches {
///         colors: BrandProfile::palette(),
///         selected: brand.read().color().clone(),
///         on_select: move |c| brand.write().set_color(c)
///     }
/// }
/// ```
#[component]
pub fn ColorSwatches(props: ColorSwatchesProps) -> Element {
    let selected = props.selected.clone();

    rsx! {
        div {
            class: "color-swatches",
            role: "radiogroup",
            "aria-label": "Cor de identidade",
            for color in props.colors.iter() {
                {
                    let color_clone = color.clone();
                    let is_selected = selected == *color;
                    let on_select = props.on_select;
                    rsx! {
                        button {
                            class: swatch_class(is_selected),
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "aria-label": "{color}",
                            style: "background-color: {color};",
                            onclick: move |_| {
                                tracing::debug!("Swatch selected: {}", color_clone);
                                on_select.call(color_clone.clone());
                            },
                        }
                    }
                }
            }
        }
    }
}

fn swatch_class(selected: bool) -> &'static str {
    if selected {
        "swatch selected"
    } else {
        "swatch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swatch_class_marks_selection() {
        assert_eq!(swatch_class(true), "swatch selected");
        assert_eq!(swatch_class(false), "swatch");
    }
}
