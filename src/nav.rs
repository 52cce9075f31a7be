//! Sidebar navigation block rendering.
//!
//! The block is built as plain text so its layout matches the hand-written
//! pages it replaces content in:
//!
//! ```text
//! <nav class="sidebar-nav">
//!                 <ul>
//!                     <li><a href="index.html" class="nav-link">HOME</a></li>
//!                     <li><a href="contact.html" class="nav-link active">CONTACT</a></li>
//!                 </ul>
//!             </nav>
//! ```
//!
//! The first line carries no indentation: the updater replaces only the
//! matched `<nav ...>...</nav>` text, so whatever indentation precedes it in
//! the page stays where it is.

use crate::config::NavigationConfig;

const LIST_INDENT: &str = "                ";
const ITEM_INDENT: &str = "                    ";
const CLOSE_INDENT: &str = "            ";

/// Render the navigation template with no entry marked active.
pub fn render_template(nav: &NavigationConfig) -> String {
    let mut out = format!("<nav class=\"{}\">\n", nav.class);
    out.push_str(LIST_INDENT);
    out.push_str("<ul>\n");
    for link in &nav.links {
        out.push_str(ITEM_INDENT);
        out.push_str(&format!(
            "{}{}</a></li>\n",
            link_open_tag(&link.href, &nav.link_class),
            link.label
        ));
    }
    out.push_str(LIST_INDENT);
    out.push_str("</ul>\n");
    out.push_str(CLOSE_INDENT);
    out.push_str("</nav>");
    out
}

/// Render the navigation block for `current`, marking its entry active.
///
/// Marking is a literal replacement of that entry's opening `<li><a ...>`
/// on a freshly rendered template, so the active token is applied once no
/// matter how often pages are updated.
pub fn render_for_page(nav: &NavigationConfig, current: &str) -> String {
    let template = render_template(nav);
    let plain = link_open_tag(current, &nav.link_class);
    let active = link_open_tag(current, &format!("{} {}", nav.link_class, nav.active_class));
    template.replace(&plain, &active)
}

/// Label of the link pointing at `href`, if any.
pub fn label_for<'a>(nav: &'a NavigationConfig, href: &str) -> Option<&'a str> {
    nav.links
        .iter()
        .find(|l| l.href == href)
        .map(|l| l.label.as_str())
}

fn link_open_tag(href: &str, class: &str) -> String {
    format!("<li><a href=\"{href}\" class=\"{class}\">")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavLink;

    fn small_nav() -> NavigationConfig {
        NavigationConfig {
            class: "sidebar-nav".to_string(),
            link_class: "nav-link".to_string(),
            active_class: "active".to_string(),
            links: vec![
                NavLink::new("index.html", "HOME"),
                NavLink::new("contact.html", "CONTACT"),
            ],
        }
    }

    #[test]
    fn template_layout() {
        let expected = [
            "<nav class=\"sidebar-nav\">".to_string(),
            format!("{}<ul>", " ".repeat(16)),
            format!(
                "{}<li><a href=\"index.html\" class=\"nav-link\">HOME</a></li>",
                " ".repeat(20)
            ),
            format!(
                "{}<li><a href=\"contact.html\" class=\"nav-link\">CONTACT</a></li>",
                " ".repeat(20)
            ),
            format!("{}</ul>", " ".repeat(16)),
            format!("{}</nav>", " ".repeat(12)),
        ]
        .join("\n");
        assert_eq!(render_template(&small_nav()), expected);
    }

    #[test]
    fn template_has_no_active_entry() {
        let html = render_template(&NavigationConfig::default());
        assert!(!html.contains("active"));
        assert_eq!(html.matches("class=\"nav-link\"").count(), 8);
    }

    #[test]
    fn page_entry_marked_active() {
        let html = render_for_page(&small_nav(), "contact.html");
        assert!(
            html.contains(r#"<li><a href="contact.html" class="nav-link active">CONTACT</a></li>"#)
        );
        assert!(html.contains(r#"<li><a href="index.html" class="nav-link">HOME</a></li>"#));
    }

    #[test]
    fn exactly_one_active_entry_for_each_default_link() {
        let nav = NavigationConfig::default();
        for link in &nav.links {
            let html = render_for_page(&nav, &link.href);
            assert_eq!(html.matches("nav-link active").count(), 1, "{}", link.href);
            let expected = format!(
                "<li><a href=\"{}\" class=\"nav-link active\">{}</a></li>",
                link.href, link.label
            );
            assert!(html.contains(&expected));
        }
    }

    #[test]
    fn unknown_page_marks_nothing() {
        let html = render_for_page(&small_nav(), "blog.html");
        assert_eq!(html, render_template(&small_nav()));
    }

    #[test]
    fn custom_active_class() {
        let mut nav = small_nav();
        nav.active_class = "current".to_string();
        let html = render_for_page(&nav, "index.html");
        assert!(html.contains(r#"class="nav-link current">HOME"#));
    }

    #[test]
    fn repeated_rendering_does_not_compound() {
        let nav = small_nav();
        let first = render_for_page(&nav, "contact.html");
        let second = render_for_page(&nav, "contact.html");
        assert_eq!(first, second);
        assert!(!second.contains("active active"));
    }

    #[test]
    fn label_lookup() {
        let nav = small_nav();
        assert_eq!(label_for(&nav, "contact.html"), Some("CONTACT"));
        assert_eq!(label_for(&nav, "blog.html"), None);
    }
}
