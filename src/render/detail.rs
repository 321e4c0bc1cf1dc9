use crate::core::controller::Command;
use crate::core::view::DetailView;
use crate::render::{Markup, RenderSettings};
use crate::utils::text::escape_html;

const STAR: &str = "\u{2b50}";
const NO_TIPS: &str = "No tips available.";

/// A 0-10 rating as a row of stars.
pub fn stars(rating: u8) -> String {
    STAR.repeat(rating.min(10) as usize)
}

pub fn splash_url(settings: &RenderSettings, view: &DetailView) -> String {
    format!(
        "{}img/champion/splash/{}_0.jpg",
        settings.cdn_base_url, view.champion.summary.id
    )
}

fn back_button(id: &str, markup: &mut Markup) -> String {
    markup.bind(id, Command::Back);
    format!(
        r#"<button id="{}" class="nav-button back-button">&larr; Back to Champion List</button>"#,
        id
    )
}

pub fn render_detail(view: &DetailView, settings: &RenderSettings) -> Markup {
    let mut markup = Markup::default();
    let champion = &view.champion;
    let summary = &champion.summary;
    let ratings = &champion.ratings;

    let mut html = String::new();
    html.push_str(r#"<section id="champion-detail-section" class="content-section">"#);
    html.push_str(&back_button("back-to-list-top", &mut markup));

    html.push_str(r#"<div class="champion-splash">"#);
    html.push_str(&settings.image_tag(
        &splash_url(settings, view),
        &format!("{} splash art", summary.name),
        "champion-splash-image",
    ));
    html.push_str(&format!(
        "<h1>{}</h1><h3>&quot;{}&quot;</h3></div>\n",
        escape_html(&summary.name),
        escape_html(&summary.title)
    ));

    html.push_str(&format!(
        concat!(
            r#"<div class="champion-info"><h2>Lore</h2><p class="champion-lore">{lore}</p>"#,
            "<h3>Classes:</h3><p>{tags}</p></div>\n"
        ),
        lore = escape_html(&champion.lore),
        tags = escape_html(&settings.translate_tags(&summary.tags)),
    ));

    html.push_str(&format!(
        concat!(
            r#"<div class="champion-stats"><h3>Main Stats</h3>"#,
            "<p>Attack: {}</p><p>Defense: {}</p><p>Magic: {}</p><p>Difficulty: {}</p>"
        ),
        stars(ratings.attack),
        stars(ratings.defense),
        stars(ratings.magic),
        stars(ratings.difficulty),
    ));

    html.push_str("<h3>Gameplay Tips</h3>");
    if champion.ally_tips.is_empty() {
        html.push_str(&format!("<p>{}</p>", NO_TIPS));
    } else {
        html.push_str("<ul>");
        for tip in &champion.ally_tips {
            html.push_str(&format!("<li>{}</li>", escape_html(tip)));
        }
        html.push_str("</ul>");
    }
    html.push_str("</div>\n");

    html.push_str(&back_button("back-to-list-bottom", &mut markup));
    html.push_str("</section>\n");

    markup.html = html;
    markup
}
