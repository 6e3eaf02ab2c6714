mod document;
mod format;
mod html;
mod node;

pub use document::{Document, MemoryDocument};
pub use format::{alumni_line, build_icon_set, format_period, Icon};
pub use html::to_html;
pub use node::{Element, Node};

use format::non_empty;
use labroster_people::PersonRecord;

/// Portrait shown for records that don't bring their own image.
pub const PLACEHOLDER_PORTRAIT: &str = "images/people/placeholder.jpg";

/// Fills a grid container with one card per person, replacing whatever the
/// container held before. Does nothing when the container doesn't exist.
pub fn render_grid(document: &mut dyn Document, container_id: &str, people: &[PersonRecord]) {
    if !document.has_container(container_id) {
        return;
    }
    let cards = people
        .iter()
        .map(|person| person_card(person).into())
        .collect();
    document.replace_content(container_id, cards);
}

/// Fills a list container with one text line per person. Does nothing when
/// the container doesn't exist.
pub fn render_alumni_list(
    document: &mut dyn Document,
    container_id: &str,
    people: &[&PersonRecord],
) {
    if !document.has_container(container_id) {
        return;
    }
    let lines = people
        .iter()
        .map(|person| {
            Element::new("li")
                .class("alumni-item")
                .text(alumni_line(person))
                .into()
        })
        .collect();
    document.replace_content(container_id, lines);
}

/// Builds one person card: portrait, linked name, icon row, then the
/// optional co-advisor and period lines.
pub fn person_card(person: &PersonRecord) -> Element {
    let portrait = Element::new("img")
        .class("avatar")
        .attr(
            "src",
            non_empty(person.img.as_deref()).unwrap_or(PLACEHOLDER_PORTRAIT),
        )
        .attr("alt", format!("Portrait of {}", person.name))
        .attr("loading", "lazy")
        .attr("decoding", "async");

    let name_href = non_empty(person.website.as_deref())
        .filter(|w| *w != "#")
        .unwrap_or("#");
    let heading = Element::new("h3").class("person-name").child(
        Element::new("a")
            .attr("href", name_href)
            .text(&person.name),
    );

    let mut links = Element::new("div")
        .class("person-links")
        .attr("aria-label", format!("Links for {}", person.name));
    for icon in build_icon_set(person) {
        links = links.child(icon_element(icon));
    }

    let mut card = Element::new("article")
        .class("person-card")
        .child(portrait)
        .child(heading)
        .child(links);

    if let Some(co_advisor) = non_empty(person.co_advisor.as_deref()) {
        card = card.child(
            Element::new("p")
                .class("person-meta")
                .text(format!("Co-advised with {co_advisor}")),
        );
    }

    let period = format_period(person.start.as_deref(), person.end.as_deref());
    if !period.is_empty() {
        card = card.child(Element::new("p").class("person-meta").text(period));
    }

    card
}

fn icon_element(icon: Icon) -> Element {
    let mut link = Element::new("a")
        .class("icon-btn")
        .attr("aria-label", icon.label)
        .attr("href", icon.href)
        .text(icon.glyph);
    if icon.external {
        link = link
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer");
    }
    link
}
