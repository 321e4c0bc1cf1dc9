use crate::core::controller::{Command, NavTarget};
use crate::core::view::{ErrorView, LoadingView, Section, View};
use crate::render::{render, Markup, RenderSettings};
use crate::utils::text::escape_html;

pub const LANDING_TITLE: &str = "Welcome to Runeterra";

const STYLE: &str = r#"
body { font-family: sans-serif; background: #0a1428; color: #f0e6d2; margin: 0; }
nav { display: flex; gap: 8px; padding: 12px; background: #010a13; }
main { padding: 16px; }
.nav-button { background: #1e2328; color: #c8aa6e; border: 1px solid #785a28; padding: 6px 12px; cursor: pointer; }
.nav-button.active { background: #c8aa6e; color: #010a13; }
#item-list-content, #champion-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 12px; }
.item-card, .champion-card { background: #1e2328; padding: 12px; border-radius: 4px; }
.item-icon, .champion-icon { width: 48px; height: 48px; }
.champion-splash-image { width: 100%; max-height: 420px; object-fit: cover; }
.error, .loading { text-align: center; }
"#;

pub fn landing() -> Markup {
    let mut markup = Markup::default();
    markup.html = format!(
        concat!(
            r#"<section id="landing-section" class="content-section">"#,
            "<h1>{}</h1>",
            "<p>Browse every item of the current patch or meet the champions of the League.</p>",
            r#"<button id="landing-items-link" class="nav-button">Explore Items</button>"#,
            r#"<button id="landing-champions-link" class="nav-button">Discover Champions</button>"#,
            "</section>\n"
        ),
        LANDING_TITLE
    );
    markup.bind("landing-items-link", Command::Show(NavTarget::Items));
    markup.bind("landing-champions-link", Command::Show(NavTarget::Champions));
    markup
}

pub fn loading(view: &LoadingView) -> Markup {
    Markup {
        html: format!(
            r#"<section id="{}-section" class="content-section loading"><p>{}</p></section>{}"#,
            view.section.as_str(),
            escape_html(&view.message),
            "\n"
        ),
        bindings: Vec::new(),
    }
}

fn retry_hint(section: Section) -> &'static str {
    match section {
        Section::ChampionDetail => "Go back and open the champion again to retry.",
        _ => "Select the section again to retry.",
    }
}

pub fn error(view: &ErrorView) -> Markup {
    let hint = if view.retryable {
        format!(r#"<p class="error-hint">{}</p>"#, retry_hint(view.section))
    } else {
        String::new()
    };

    Markup {
        html: format!(
            concat!(
                r#"<section id="{}-section" class="content-section error">"#,
                "<h2>{}</h2><p>{}</p>",
                r#"<p class="error-cause">{}</p>"#,
                "{}",
                "</section>\n"
            ),
            view.section.as_str(),
            escape_html(&view.title),
            escape_html(&view.message),
            escape_html(&view.cause),
            hint
        ),
        bindings: Vec::new(),
    }
}

fn nav_bar(active: Section, markup: &mut Markup) -> String {
    let entries = [
        ("nav-landing", "Home", NavTarget::Landing, active == Section::Landing),
        ("nav-items", "Items", NavTarget::Items, active == Section::Items),
        (
            "nav-champions",
            "Champions",
            NavTarget::Champions,
            matches!(active, Section::Champions | Section::ChampionDetail),
        ),
    ];

    let mut html = String::from("<nav>");
    for (id, label, target, is_active) in entries {
        let class = if is_active { "nav-button active" } else { "nav-button" };
        html.push_str(&format!(r#"<button id="{}" class="{}">{}</button>"#, id, class, label));
        markup.bind(id, Command::Show(target));
    }
    html.push_str("</nav>\n");
    html
}

/// Full HTML document: navigation bar plus the fragment for `view`.
pub fn render_page(view: &View, settings: &RenderSettings) -> Markup {
    let mut markup = Markup::default();
    let nav = nav_bar(view.section(), &mut markup);
    let body = render(view, settings);

    markup.html = format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="{lang}">"#,
            "\n<head>\n",
            r#"<meta charset="utf-8">"#,
            "\n<title>Runeterra Explorer</title>\n<style>{style}</style>\n</head>\n<body>\n",
            "{nav}<main>\n{body}</main>\n</body>\n</html>\n"
        ),
        lang = escape_html(&settings.language),
        style = STYLE,
        nav = nav,
        body = body.html,
    );
    markup.bindings.extend(body.bindings);
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{FetchFailure, ItemsView};
    use crate::core::pipeline::SortKey;
    use crate::domain::model::Version;
    use crate::render::test_support::settings;
    use crate::utils::error::CatalogError;

    #[test]
    fn test_page_shell_has_nav_and_body() {
        let markup = render_page(&View::Landing, &settings());
        assert!(markup.html.starts_with("<!DOCTYPE html>"));
        assert!(markup.html.contains(r#"<html lang="pt-BR">"#));
        assert!(markup.html.contains(r#"id="nav-landing" class="nav-button active""#));
        assert!(markup.html.contains(LANDING_TITLE));
        assert_eq!(
            markup.command_for("nav-champions"),
            Some(&Command::Show(NavTarget::Champions))
        );
        assert_eq!(
            markup.command_for("landing-items-link"),
            Some(&Command::Show(NavTarget::Items))
        );
    }

    #[test]
    fn test_page_keeps_section_bindings() {
        let view = View::Items(ItemsView {
            version: Version::from("14.1.1"),
            items: vec![],
            sort: SortKey::NameAsc,
        });
        let markup = render_page(&view, &settings());
        assert!(markup.html.contains(r#"id="nav-items" class="nav-button active""#));
        assert_eq!(markup.bindings.len(), 3 + SortKey::ALL.len());
    }

    #[test]
    fn test_loading_and_error_fragments() {
        let loading = loading(&LoadingView::for_list(Section::Items, None));
        assert!(loading.html.contains("Fetching the latest game version for items..."));

        let failure = FetchFailure::Data(CatalogError::shape("bad <payload>"));
        let error = error(&ErrorView::from_failure(Section::Items, None, &failure));
        assert!(error.html.contains("<h2>Error Loading Items</h2>"));
        assert!(!error.html.contains("<payload>"));
    }

    #[test]
    fn test_error_hint_only_for_retryable_failures() {
        let network = FetchFailure::Data(CatalogError::HttpStatusError {
            status: 503,
            url: "https://cdn.test/cdn/14.1.1/data/pt_BR/item.json".to_string(),
        });
        let view = ErrorView::from_failure(Section::Items, None, &network);
        assert!(view.retryable);
        assert!(error(&view)
            .html
            .contains(r#"<p class="error-hint">Select the section again to retry.</p>"#));

        let config = FetchFailure::Version(CatalogError::MissingConfigError {
            field: "source.realms_url".to_string(),
        });
        let view = ErrorView::from_failure(Section::Champions, None, &config);
        assert!(!view.retryable);
        assert!(!error(&view).html.contains("error-hint"));
    }
}
