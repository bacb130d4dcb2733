//! Inline styles for the navigation bar.
//!
//! Each function returns the `style` attribute for one node of the bar.
//! Pixel values are fixed; colors and fonts come from the theme and the
//! item being drawn.

use crate::nav_item::LabelFont;
use crate::theme::Theme;

pub const BAR_WIDTH: u32 = 393;
pub const BAR_HEIGHT: u32 = 113;
pub const BAR_BOTTOM_OFFSET: u32 = 10;
pub const BAR_Z_INDEX: u32 = 1000;

pub const ROW_HEIGHT: u32 = 75;

pub const ICON_SIZE: u32 = 24;
pub const LABEL_FONT_SIZE: u32 = 12;

pub const SPECIAL_DIAMETER: u32 = 56;
/// How far the special circle rises above the row
pub const SPECIAL_RAISE: u32 = 50;
pub const SPECIAL_SHADOW: &str = "#853536";

/// Outer box, pinned to the bottom-left of the viewport above all content
pub fn bar_style() -> String {
    format!(
        "position: fixed; bottom: {BAR_BOTTOM_OFFSET}px; left: 0; \
         width: {BAR_WIDTH}px; height: {BAR_HEIGHT}px; \
         display: flex; justify-content: space-around; align-items: center; \
         z-index: {BAR_Z_INDEX};"
    )
}

/// Layer holding the background graphic, under every control
pub fn background_style() -> &'static str {
    "position: absolute; bottom: 0; left: 0; width: 100%; height: 100%; z-index: 0;"
}

pub fn row_style() -> String {
    format!(
        "height: {ROW_HEIGHT}px; width: {BAR_WIDTH}px; display: flex; \
         flex-direction: row; align-items: center; justify-content: space-around; \
         margin-bottom: -10px;"
    )
}

/// One column: control on top, label underneath
pub fn column_style() -> String {
    format!(
        "position: relative; height: {ROW_HEIGHT}px; z-index: 1; display: flex; \
         flex-direction: column; align-items: center; justify-content: center;"
    )
}

pub fn link_style() -> &'static str {
    "display: flex; justify-content: center; text-decoration: none; color: inherit;"
}

/// Standard item button, tinted with the theme's primary color
pub fn icon_button_style(tint: &str) -> String {
    format!(
        "color: {}; background: transparent; border: none; padding: 8px; \
         border-radius: 50%; display: inline-flex; cursor: pointer;",
        tint
    )
}

/// Wrapper lifting the special circle out of the row
pub fn special_wrapper_style() -> String {
    format!(
        "position: relative; bottom: {SPECIAL_RAISE}px; width: 100%; height: 100%; \
         display: flex; justify-content: center;"
    )
}

pub fn special_circle_style(theme: &Theme) -> String {
    format!(
        "width: {SPECIAL_DIAMETER}px; height: {SPECIAL_DIAMETER}px; \
         background-color: {}; box-shadow: 0px 4px 12px {SPECIAL_SHADOW}; \
         border-radius: 50%; display: flex; justify-content: center; \
         align-items: center; position: absolute; z-index: 2; cursor: pointer;",
        theme.primary
    )
}

/// Label under a control.
///
/// Whitespace is preserved so a blank label still takes one line. The
/// family is quoted so names with digits or punctuation stay valid CSS.
pub fn label_style(font: &LabelFont, theme: &Theme) -> String {
    format!(
        "color: {}; font-size: {LABEL_FONT_SIZE}px; font-family: '{}'; \
         font-weight: {}; margin-top: 5px; white-space: pre;",
        theme.primary, font.family, font.weight
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav_item::default_items;
    use proptest::prelude::*;

    #[test]
    fn bar_is_pinned_bottom_left() {
        let style = bar_style();
        assert!(style.contains("position: fixed;"));
        assert!(style.contains("bottom: 10px;"));
        assert!(style.contains("left: 0;"));
        assert!(style.contains("width: 393px;"));
        assert!(style.contains("height: 113px;"));
        assert!(style.contains("z-index: 1000;"));
    }

    #[test]
    fn special_circle_geometry() {
        let theme = Theme::default();
        let circle = special_circle_style(&theme);
        assert!(circle.contains("width: 56px; height: 56px;"));
        assert!(circle.contains("box-shadow: 0px 4px 12px #853536;"));
        assert!(circle.contains(&format!("background-color: {};", theme.primary)));
        assert!(special_wrapper_style().contains("bottom: 50px;"));
    }

    #[test]
    fn icon_button_uses_primary() {
        assert!(icon_button_style("#abcdef").starts_with("color: #abcdef;"));
    }

    #[test]
    fn label_style_uses_each_items_font() {
        let theme = Theme::default();
        let items = default_items();
        let styles: Vec<String> = items.iter().map(|i| label_style(i.font(), &theme)).collect();

        assert!(styles[0].contains("font-family: 'SF Pro Text';"));
        assert!(styles[1].contains("font-family: 'Helvetica';"));
        assert!(styles[4].contains("font-family: 'SF Pro Text';"));
        assert!(styles.iter().all(|s| s.contains("font-weight: 400;")));
        assert!(styles.iter().all(|s| s.contains("white-space: pre;")));
    }

    #[test]
    fn label_family_with_digits_is_quoted() {
        let style = label_style(&LabelFont::new("Font Awesome 6", "900"), &Theme::default());
        assert!(style.contains("font-family: 'Font Awesome 6';"));
    }

    proptest! {
        #[test]
        fn label_styles_do_not_leak_between_items(
            fonts in prop::collection::vec(("[A-Za-z ]{1,16}", "[1-9]00"), 1..8)
        ) {
            let theme = Theme::default();
            for (family, weight) in &fonts {
                let font = LabelFont::new(family.clone(), weight.clone());
                let style = label_style(&font, &theme);
                let expected_family = format!("font-family: '{}';", family);
                let expected_weight = format!("font-weight: {};", weight);
                prop_assert!(style.contains(&expected_family));
                prop_assert!(style.contains(&expected_weight));
                prop_assert_eq!(style.matches("font-family:").count(), 1);
                prop_assert_eq!(style.matches("font-weight:").count(), 1);
            }
        }
    }
}
