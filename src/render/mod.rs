//! HTML rendering of controller views.
//!
//! Rendering is pure: a [`View`] goes in, a [`Markup`] fragment plus the interaction
//! [`Binding`]s of its clickable elements comes out. Every string that originates from the
//! data service is escaped before it is embedded.

pub mod champions;
pub mod detail;
pub mod items;
pub mod page;

use crate::core::controller::Command;
use crate::core::view::View;
use crate::domain::model::TagLabel;
use crate::domain::ports::ConfigProvider;
use crate::utils::text::escape_html;

pub use page::render_page;

/// Clickable element id and the command a click dispatches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub command: Command,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub html: String,
    pub bindings: Vec<Binding>,
}

impl Markup {
    pub fn command_for(&self, element_id: &str) -> Option<&Command> {
        self.bindings
            .iter()
            .find(|binding| binding.element_id == element_id)
            .map(|binding| &binding.command)
    }

    pub(crate) fn bind(&mut self, element_id: impl Into<String>, command: Command) {
        self.bindings.push(Binding {
            element_id: element_id.into(),
            command,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub cdn_base_url: String,
    pub placeholder_image: String,
    pub tag_labels: Vec<TagLabel>,
    pub language: String,
}

impl RenderSettings {
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            cdn_base_url: config.cdn_base_url().to_string(),
            placeholder_image: config.placeholder_image().to_string(),
            tag_labels: config.tag_labels().to_vec(),
            language: config.locale().replace('_', "-"),
        }
    }

    pub fn tag_label<'a>(&'a self, tag: &'a str) -> &'a str {
        self.tag_labels
            .iter()
            .find(|label| label.tag == tag)
            .map(|label| label.label.as_str())
            .unwrap_or(tag)
    }

    pub fn translate_tags(&self, tags: &[String]) -> String {
        tags.iter()
            .map(|tag| self.tag_label(tag))
            .collect::<Vec<_>>()
            .join(" / ")
    }

    /// `onerror` handler swapping a broken image for the placeholder.
    pub(crate) fn image_fallback(&self) -> String {
        let literal = self.placeholder_image.replace('\\', "\\\\").replace('\'', "\\'");
        escape_html(&format!("this.onerror=null;this.src='{}'", literal))
    }

    pub(crate) fn image_tag(&self, src: &str, alt: &str, class: &str) -> String {
        format!(
            r#"<img src="{}" alt="{}" class="{}" onerror="{}">"#,
            escape_html(src),
            escape_html(alt),
            class,
            self.image_fallback()
        )
    }
}

/// Renders the section fragment for `view`.
pub fn render(view: &View, settings: &RenderSettings) -> Markup {
    match view {
        View::Landing => page::landing(),
        View::Loading(loading) => page::loading(loading),
        View::Error(error) => page::error(error),
        View::Items(items) => items::render_items(items, settings),
        View::Champions(champions) => champions::render_champions(champions, settings),
        View::ChampionDetail(detail) => detail::render_detail(detail, settings),
    }
}

/// One-line plain-text summary of a view, matching its on-page heading.
pub fn headline(view: &View, settings: &RenderSettings) -> String {
    match view {
        View::Landing => page::LANDING_TITLE.to_string(),
        View::Loading(loading) => loading.message.clone(),
        View::Error(error) => format!("{}: {}", error.title, error.message),
        View::Items(items) => items::heading(items),
        View::Champions(champions) => champions::heading(champions, settings),
        View::ChampionDetail(detail) => format!(
            "{} - {}",
            detail.champion.summary.name, detail.champion.summary.title
        ),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::RenderSettings;
    use crate::config::default_tag_labels;

    pub fn settings() -> RenderSettings {
        RenderSettings {
            cdn_base_url: "https://cdn.test/cdn/".to_string(),
            placeholder_image: "https://img.test/na.png".to_string(),
            tag_labels: default_tag_labels(),
            language: "pt-BR".to_string(),
        }
    }
}
