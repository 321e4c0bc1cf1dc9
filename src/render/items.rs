use crate::core::controller::Command;
use crate::core::pipeline::SortKey;
use crate::core::view::ItemsView;
use crate::domain::model::Item;
use crate::render::{Markup, RenderSettings};
use crate::utils::text::escape_html;

const NO_PLAINTEXT: &str = "No detailed stats available.";

fn sort_label(key: SortKey) -> &'static str {
    match key {
        SortKey::NameAsc => "Name (A-Z)",
        SortKey::NameDesc => "Name (Z-A)",
        SortKey::CostAsc => "Cost (Ascending)",
        SortKey::CostDesc => "Cost (Descending)",
    }
}

pub fn heading(view: &ItemsView) -> String {
    format!(
        "Item Catalog (Total: {}, Version {})",
        view.items.len(),
        view.version
    )
}

fn cost_line(item: &Item) -> String {
    match item.cost {
        Some(cost) if cost > 0 => format!("Total Cost: {} gold", cost),
        _ => "Cost not specified.".to_string(),
    }
}

fn item_card(item: &Item, view: &ItemsView, settings: &RenderSettings) -> String {
    let icon_url = if item.icon.is_empty() {
        settings.placeholder_image.clone()
    } else {
        format!(
            "{}{}/img/item/{}",
            settings.cdn_base_url, view.version, item.icon
        )
    };
    let plaintext = item.plaintext.as_deref().unwrap_or(NO_PLAINTEXT);

    format!(
        concat!(
            r#"<div class="item-card" data-id="{id}">"#,
            r#"<div class="item-header">{icon}<h3>{name}</h3></div>"#,
            r#"<div class="item-details">"#,
            r#"<p class="item-summary">{summary}</p>"#,
            r#"<div class="item-stats"><p><strong>Main Effects:</strong></p><p>{plaintext}</p>"#,
            r#"<p class="item-cost">{cost}</p></div>"#,
            "</div></div>\n"
        ),
        id = escape_html(&item.id),
        icon = settings.image_tag(&icon_url, &format!("Icon {}", item.name), "item-icon"),
        name = escape_html(&item.name),
        summary = escape_html(&item.description),
        plaintext = escape_html(plaintext),
        cost = cost_line(item),
    )
}

pub fn render_items(view: &ItemsView, settings: &RenderSettings) -> Markup {
    let mut markup = Markup::default();
    let mut html = String::new();

    html.push_str(r#"<section id="items-section" class="content-section">"#);
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&heading(view))));

    html.push_str(r#"<div id="sort-options-container"><h3>Sort Items:</h3><div id="sort-options">"#);
    for key in SortKey::ALL {
        let element_id = format!("sort-{}", key);
        let active = if key == view.sort { " active" } else { "" };
        html.push_str(&format!(
            r#"<button id="{}" class="nav-button sort-button{}" data-sort="{}">{}</button>"#,
            element_id,
            active,
            key,
            sort_label(key)
        ));
        markup.bind(element_id, Command::SortItems(key));
    }
    html.push_str("</div></div>\n");

    html.push_str("<div id=\"item-list-content\">\n");
    for item in &view.items {
        html.push_str(&item_card(item, view, settings));
    }
    html.push_str("</div></section>\n");

    markup.html = html;
    markup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Version;
    use crate::render::test_support::settings;
    use std::collections::BTreeSet;

    fn view(items: Vec<Item>, sort: SortKey) -> ItemsView {
        ItemsView {
            version: Version::from("14.1.1"),
            items,
            sort,
        }
    }

    fn item(name: &str, description: &str, plaintext: Option<&str>) -> Item {
        Item {
            id: "3031".to_string(),
            name: name.to_string(),
            description: description.to_string(),
            plaintext: plaintext.map(str::to_string),
            cost: Some(3400),
            icon: "3031.png".to_string(),
            maps: BTreeSet::from(["11".to_string()]),
        }
    }

    #[test]
    fn test_heading_shows_total_and_version() {
        let markup = render_items(
            &view(vec![item("Gume", "Crit", None), item("Botas", "Speed", None)], SortKey::NameAsc),
            &settings(),
        );
        assert!(markup
            .html
            .contains("<h2>Item Catalog (Total: 2, Version 14.1.1)</h2>"));
    }

    #[test]
    fn test_item_text_is_escaped() {
        let markup = render_items(
            &view(
                vec![item("<script>x</script>", "a & b", Some("<img onerror=1>"))],
                SortKey::NameAsc,
            ),
            &settings(),
        );
        assert!(!markup.html.contains("<script>"));
        assert!(markup.html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(markup.html.contains("a &amp; b"));
        assert!(markup.html.contains("&lt;img onerror=1&gt;"));
    }

    #[test]
    fn test_card_contents_and_fallbacks() {
        let markup = render_items(&view(vec![item("Gume", "Crit", None)], SortKey::NameAsc), &settings());
        assert!(markup
            .html
            .contains(r#"src="https://cdn.test/cdn/14.1.1/img/item/3031.png""#));
        assert!(markup.html.contains("this.src=&#39;https://img.test/na.png&#39;"));
        assert!(markup.html.contains(NO_PLAINTEXT));
        assert!(markup.html.contains("Total Cost: 3400 gold"));
    }

    #[test]
    fn test_item_without_icon_uses_placeholder() {
        let mut iconless = item("Gume", "Crit", None);
        iconless.icon.clear();
        let markup = render_items(&view(vec![iconless], SortKey::NameAsc), &settings());
        assert!(markup.html.contains(r#"src="https://img.test/na.png""#));
        assert!(!markup.html.contains("/img/item/\""));
    }

    #[test]
    fn test_sort_buttons_are_bound_and_active_marked() {
        let markup = render_items(&view(vec![], SortKey::CostDesc), &settings());
        assert_eq!(markup.bindings.len(), 4);
        assert_eq!(
            markup.command_for("sort-cost-asc"),
            Some(&Command::SortItems(SortKey::CostAsc))
        );
        assert!(markup
            .html
            .contains(r#"id="sort-cost-desc" class="nav-button sort-button active""#));
        assert!(markup
            .html
            .contains(r#"id="sort-name-asc" class="nav-button sort-button""#));
    }
}
