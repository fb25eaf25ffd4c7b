//! Dropdown menu whose only state is open/closed.

use super::html::escape;

/// A dropdown of labels with a toggle button showing the current one.
///
/// Selecting an option hands the label to the callback and closes the menu.
/// When rendered server-side each option is a link, so choosing one reloads
/// the page.
///
/// ```rust
/// use shopify_storefront::components::SelectMenu;
///
/// let mut picked = Vec::new();
/// let mut menu = SelectMenu::new(["Featured", "Price L-H"], "Featured", |label: &str| {
///     picked.push(label.to_string());
/// });
/// menu.toggle();
/// assert!(menu.is_open());
/// menu.select("Price L-H");
/// assert!(!menu.is_open());
/// drop(menu);
/// assert_eq!(picked, ["Price L-H"]);
/// ```
pub struct SelectMenu<F> {
    options: Vec<String>,
    selected: String,
    open: bool,
    on_select: F,
}

impl<F: FnMut(&str)> SelectMenu<F> {
    /// Creates a closed menu.
    pub fn new<I>(options: I, selected: impl Into<String>, on_select: F) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            selected: selected.into(),
            open: false,
            on_select,
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The label shown on the toggle button.
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    /// Chooses `label`, invoking the callback and closing the menu.
    pub fn select(&mut self, label: &str) {
        self.selected = label.to_string();
        self.open = false;
        (self.on_select)(label);
    }

    /// Renders the menu; `href_for` gives each option's link, if any.
    pub fn render(&self, href_for: impl Fn(&str) -> Option<String>) -> String {
        let state = if self.open { "menuOpen" } else { "menuClose" };
        let mut html = format!(
            "<div class=\"menuWrapper\">\n<button type=\"button\" data-menu-toggle \
             aria-expanded=\"{}\">{}</button>\n<div class=\"{state}\">\n",
            self.open,
            escape(&self.selected)
        );
        for option in &self.options {
            let label = escape(option);
            let item = match href_for(option) {
                Some(href) => format!(
                    "<a class=\"menuOption\" role=\"button\" href=\"{}\">{label}</a>\n",
                    escape(&href)
                ),
                None => format!("<button type=\"button\" disabled>{label}</button>\n"),
            };
            html.push_str(&item);
        }
        html.push_str("</div>\n</div>");
        html
    }
}

impl<F> std::fmt::Debug for SelectMenu<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectMenu")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}
