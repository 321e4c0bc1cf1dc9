use crate::core::controller::Command;
use crate::core::pipeline::{ClassFilter, SortKey};
use crate::core::view::ChampionsView;
use crate::domain::model::ChampionSummary;
use crate::render::{Markup, RenderSettings};
use crate::utils::text::{element_token, escape_html};

const ALL_LABEL: &str = "All Champions";

pub fn filter_label(filter: &ClassFilter, settings: &RenderSettings) -> String {
    match filter {
        ClassFilter::All => ALL_LABEL.to_string(),
        ClassFilter::Tag(tag) => settings.tag_label(tag).to_string(),
    }
}

pub fn heading(view: &ChampionsView, settings: &RenderSettings) -> String {
    format!(
        "Champions: {} (Total: {}, Version {})",
        filter_label(&view.filter, settings),
        view.champions.len(),
        view.version
    )
}

fn card_element_id(champion: &ChampionSummary) -> String {
    format!("champion-card-{}", element_token(champion.id.as_str()))
}

fn champion_card(champion: &ChampionSummary, view: &ChampionsView, settings: &RenderSettings) -> String {
    let icon_url = format!(
        "{}{}/img/champion/{}",
        settings.cdn_base_url, view.version, champion.icon
    );

    format!(
        concat!(
            r#"<div id="{element_id}" class="champion-card" data-id="{id}">"#,
            "{icon}<h4>{name}</h4>",
            r#"<p class="champion-tags">{tags}</p>"#,
            r#"<p class="champion-title">{title}</p>"#,
            "</div>\n"
        ),
        element_id = card_element_id(champion),
        id = escape_html(champion.id.as_str()),
        icon = settings.image_tag(&icon_url, &champion.name, "champion-icon"),
        name = escape_html(&champion.name),
        tags = escape_html(&settings.translate_tags(&champion.tags)),
        title = escape_html(&champion.title),
    )
}

fn filter_controls(view: &ChampionsView, settings: &RenderSettings, markup: &mut Markup) -> String {
    let mut html = String::from(
        r#"<div class="class-filter"><span>Filter by class:</span>"#,
    );

    let active = |filter: &ClassFilter| if *filter == view.filter { " active" } else { "" };

    html.push_str(&format!(
        r#"<button id="filter-all" class="nav-button filter-option{}" data-filter="all">All Classes</button>"#,
        active(&ClassFilter::All)
    ));
    markup.bind("filter-all", Command::FilterChampions(ClassFilter::All));

    for label in &settings.tag_labels {
        let filter = ClassFilter::Tag(label.tag.clone());
        let element_id = format!("filter-{}", element_token(&label.tag));
        html.push_str(&format!(
            r#"<button id="{id}" class="nav-button filter-option{active}" data-filter="{tag}">{label}</button>"#,
            id = element_id,
            active = active(&filter),
            tag = escape_html(&label.tag),
            label = escape_html(&label.label),
        ));
        markup.bind(element_id, Command::FilterChampions(filter));
    }
    html.push_str("</div>");
    html
}

fn sort_controls(view: &ChampionsView, markup: &mut Markup) -> String {
    let mut html = String::from(r#"<div class="champion-sort"><span>Sort by:</span>"#);
    for (key, label) in [(SortKey::NameAsc, "Name (A-Z)"), (SortKey::NameDesc, "Name (Z-A)")] {
        let element_id = format!("champion-sort-{}", key);
        let active = if key == view.sort { " active" } else { "" };
        html.push_str(&format!(
            r#"<button id="{}" class="nav-button sort-button{}" data-sort="{}">{}</button>"#,
            element_id, active, key, label
        ));
        markup.bind(element_id, Command::SortChampions(key));
    }
    html.push_str("</div>");
    html
}

pub fn render_champions(view: &ChampionsView, settings: &RenderSettings) -> Markup {
    let mut markup = Markup::default();
    let mut html = String::new();

    html.push_str(r#"<section id="champions-section" class="content-section">"#);
    html.push_str(&format!("<h2>{}</h2>\n", escape_html(&heading(view, settings))));

    html.push_str(r#"<div id="champion-filter-and-sort-container"><h3>Filters and Sorting:</h3>"#);
    html.push_str(&filter_controls(view, settings, &mut markup));
    html.push_str(&sort_controls(view, &mut markup));
    html.push_str("</div>\n");

    if view.champions.is_empty() {
        html.push_str(r#"<p class="no-results">No champions found for the selected class.</p>"#);
        html.push('\n');
    } else {
        html.push_str("<div id=\"champion-grid\">\n");
        for champion in &view.champions {
            html.push_str(&champion_card(champion, view, settings));
            markup.bind(
                card_element_id(champion),
                Command::OpenChampion(champion.id.clone()),
            );
        }
        html.push_str("</div>\n");
    }
    html.push_str("</section>\n");

    markup.html = html;
    markup
}
