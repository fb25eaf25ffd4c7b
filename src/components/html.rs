//! HTML text helpers and the page layout.

/// Escapes text for use in element content and quoted attributes.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// Flips a `.menuWrapper` between `menuOpen` and `menuClose`.
const MENU_TOGGLE_SCRIPT: &str = r"document.addEventListener('click', (event) => {
  const toggle = event.target.closest('[data-menu-toggle]');
  if (!toggle) return;
  const menu = toggle.parentElement.querySelector('.menuOpen, .menuClose');
  if (!menu) return;
  const open = menu.classList.toggle('menuOpen');
  menu.classList.toggle('menuClose', !open);
  toggle.setAttribute('aria-expanded', String(open));
});";

/// Wraps `body` in a complete HTML document titled `title`.
#[must_use]
pub fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width,initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n<main>\n{body}\n</main>\n\
         <script>{MENU_TOGGLE_SCRIPT}</script>\n</body>\n</html>\n",
        escape(title)
    )
}
