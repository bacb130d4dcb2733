//! Navigation item model.
//!
//! The bar's content is an ordered list of [`NavItem`]s. Standard items
//! carry their own icon and report activation through the selection
//! callback. The special item is the raised scan control: it has a fixed
//! icon and navigates without reporting.

use crate::components::IconName;
use crate::error::NavError;

/// Icon rendered inside the special item's circle
pub const SPECIAL_ICON: IconName = IconName::UserScan;

/// Font applied to an item's label
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LabelFont {
    pub family: String,
    pub weight: String,
}

impl LabelFont {
    pub fn new(family: impl Into<String>, weight: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            weight: weight.into(),
        }
    }
}

/// One entry of the navigation bar
#[derive(Clone, PartialEq, Debug)]
pub enum NavItem {
    /// Icon button that reports its label when activated
    Standard {
        label: String,
        icon: IconName,
        route: String,
        font: LabelFont,
    },
    /// Raised circular control that never reports through the callback
    Special {
        label: String,
        route: String,
        font: LabelFont,
    },
}

impl NavItem {
    pub fn standard(
        label: impl Into<String>,
        icon: IconName,
        route: impl Into<String>,
        font: LabelFont,
    ) -> Self {
        NavItem::Standard {
            label: label.into(),
            icon,
            route: route.into(),
            font,
        }
    }

    pub fn special(label: impl Into<String>, route: impl Into<String>, font: LabelFont) -> Self {
        NavItem::Special {
            label: label.into(),
            route: route.into(),
            font,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            NavItem::Standard { label, .. } | NavItem::Special { label, .. } => label,
        }
    }

    pub fn route(&self) -> &str {
        match self {
            NavItem::Standard { route, .. } | NavItem::Special { route, .. } => route,
        }
    }

    pub fn font(&self) -> &LabelFont {
        match self {
            NavItem::Standard { font, .. } | NavItem::Special { font, .. } => font,
        }
    }

    /// Icon drawn for this item. Special items always draw [`SPECIAL_ICON`].
    pub fn icon(&self) -> IconName {
        match self {
            NavItem::Standard { icon, .. } => *icon,
            NavItem::Special { .. } => SPECIAL_ICON,
        }
    }

    pub fn is_special(&self) -> bool {
        matches!(self, NavItem::Special { .. })
    }

    /// Label reported to the selection callback, if this item reports at all
    pub fn selection_label(&self) -> Option<&str> {
        match self {
            NavItem::Standard { label, .. } => Some(label),
            NavItem::Special { .. } => None,
        }
    }

    /// Router path for this item.
    ///
    /// Routes are written relative to the application root (`./home`) and
    /// resolve to absolute paths (`/home`).
    pub fn href(&self) -> String {
        let route = self.route();
        let trimmed = route.strip_prefix('.').unwrap_or(route);
        if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{}", trimmed)
        }
    }

    /// Handle a tap on this item.
    ///
    /// Standard items call `on_select` once with their label. Special items
    /// never call it. Returns the route navigation proceeds to.
    pub fn activate<F: FnOnce(String)>(&self, on_select: Option<F>) -> &str {
        match (self.selection_label(), on_select) {
            (Some(label), Some(notify)) => {
                tracing::debug!(label = %label, route = %self.route(), "Navigation item selected");
                notify(label.to_string());
            }
            _ => {
                tracing::debug!(route = %self.route(), "Navigation item activated without notification");
            }
        }
        self.route()
    }
}

/// The fixed five-item set: Home, Search, Scan, Chat, Social
pub fn default_items() -> Vec<NavItem> {
    vec![
        NavItem::standard(
            "Home",
            IconName::Home,
            "./home",
            LabelFont::new("SF Pro Text", "400"),
        ),
        NavItem::standard(
            "Search",
            IconName::Search,
            "./search",
            LabelFont::new("Helvetica", "400"),
        ),
        // Blank label keeps the label row the same height as its neighbours
        NavItem::special(" ", "./scan", LabelFont::new("Helvetica", "400")),
        NavItem::standard(
            "Chat",
            IconName::Chat,
            "./chat",
            LabelFont::new("Helvetica", "400"),
        ),
        NavItem::standard(
            "Social",
            IconName::Community,
            "./social",
            LabelFont::new("SF Pro Text", "400"),
        ),
    ]
}

/// Check a list against the bar's layout rules: an odd, non-empty row with
/// exactly one special item at its center.
pub fn check_items(items: &[NavItem]) -> Result<(), NavError> {
    if items.is_empty() {
        return Err(NavError::Empty);
    }
    if items.len() % 2 == 0 {
        return Err(NavError::EvenLength(items.len()));
    }

    let specials: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_special())
        .map(|(index, _)| index)
        .collect();

    if specials.len() != 1 {
        return Err(NavError::SpecialCount(specials.len()));
    }

    let center = items.len() / 2;
    if specials[0] != center {
        return Err(NavError::SpecialOffCenter {
            index: specials[0],
            center,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn plain(label: &str) -> NavItem {
        NavItem::standard(label, IconName::Home, "./x", LabelFont::new("Helvetica", "400"))
    }

    fn scan() -> NavItem {
        NavItem::special(" ", "./scan", LabelFont::new("Helvetica", "400"))
    }

    #[test]
    fn default_set_has_single_centered_special() {
        let items = default_items();
        assert_eq!(items.len(), 5);
        let specials: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, i)| i.is_special())
            .map(|(n, _)| n)
            .collect();
        assert_eq!(specials, vec![2]);
        assert!(check_items(&items).is_ok());
    }

    #[test]
    fn default_set_labels_and_routes() {
        let items = default_items();
        let labels: Vec<&str> = items.iter().map(NavItem::label).collect();
        assert_eq!(labels, ["Home", "Search", " ", "Chat", "Social"]);

        let routes: Vec<&str> = items.iter().map(NavItem::route).collect();
        assert_eq!(routes, ["./home", "./search", "./scan", "./chat", "./social"]);
    }

    #[test]
    fn default_set_fonts() {
        let items = default_items();
        assert_eq!(items[0].font().family, "SF Pro Text");
        assert_eq!(items[1].font().family, "Helvetica");
        assert_eq!(items[4].font().family, "SF Pro Text");
        assert!(items.iter().all(|i| i.font().weight == "400"));
    }

    #[test]
    fn special_item_draws_fixed_icon() {
        let items = default_items();
        assert_eq!(items[2].icon(), SPECIAL_ICON);
        assert_eq!(items[0].icon(), IconName::Home);
        assert_eq!(items[3].icon(), IconName::Chat);
    }

    #[test]
    fn standard_activation_reports_label_once() {
        let calls = RefCell::new(Vec::new());
        let items = default_items();
        let item = &items[0];

        let route = item.activate(Some(|label: String| calls.borrow_mut().push(label)));

        assert_eq!(route, "./home");
        assert_eq!(*calls.borrow(), vec!["Home".to_string()]);
    }

    #[test]
    fn special_activation_is_silent() {
        let calls = RefCell::new(0);
        let items = default_items();
        let item = &items[2];

        let route = item.activate(Some(|_: String| *calls.borrow_mut() += 1));

        assert_eq!(route, "./scan");
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(item.selection_label(), None);
    }

    #[test]
    fn activation_without_callback_still_routes() {
        let items = default_items();
        let item = &items[1];
        assert_eq!(item.activate(None::<fn(String)>), "./search");
    }

    #[test]
    fn href_resolves_against_root() {
        assert_eq!(default_items()[1].href(), "/search");
        assert_eq!(plain("a").href(), "/x");
        let absolute = NavItem::standard("a", IconName::Home, "/abs", LabelFont::new("a", "1"));
        assert_eq!(absolute.href(), "/abs");
        let bare = NavItem::standard("a", IconName::Home, "bare", LabelFont::new("a", "1"));
        assert_eq!(bare.href(), "/bare");
    }

    #[test]
    fn check_rejects_bad_lists() {
        assert_eq!(check_items(&[]), Err(NavError::Empty));
        assert_eq!(
            check_items(&[plain("a"), scan()]),
            Err(NavError::EvenLength(2))
        );
        assert_eq!(
            check_items(&[plain("a"), plain("b"), plain("c")]),
            Err(NavError::SpecialCount(0))
        );
        assert_eq!(
            check_items(&[scan(), scan(), scan()]),
            Err(NavError::SpecialCount(3))
        );
        assert_eq!(
            check_items(&[scan(), plain("b"), plain("c")]),
            Err(NavError::SpecialOffCenter { index: 0, center: 1 })
        );
        assert!(check_items(&[scan()]).is_ok());
    }
}
