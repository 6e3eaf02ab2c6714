use labroster_people::PersonRecord;

/// One contact link in a person card's icon row.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub href: String,
    pub label: &'static str,
    pub glyph: &'static str,
    /// Whether the link leaves the page over http(s) and should open in a
    /// new browsing context with `rel="noopener noreferrer"`.
    pub external: bool,
}

impl Icon {
    fn new(href: String, label: &'static str, glyph: &'static str) -> Self {
        let external = is_http(&href);
        Icon {
            href,
            label,
            glyph,
            external,
        }
    }
}

/// Joins the start and end tokens of a study period. A trailing dash with
/// no end token marks the period as ongoing.
pub fn format_period(start: Option<&str>, end: Option<&str>) -> String {
    let s = start.unwrap_or("").trim();
    let e = end.unwrap_or("").trim();
    match (s.is_empty(), e.is_empty()) {
        (true, true) => String::new(),
        (false, true) => format!("{s} - "),
        (false, false) => format!("{s} - {e}"),
        (true, false) => format!("- {e}"),
    }
}

/// Collects the icon row for one person, in fixed order: email, scholar
/// profile, GitHub, homepage. Channels that are unset or still carry the
/// `"#"` placeholder are skipped.
pub fn build_icon_set(person: &PersonRecord) -> Vec<Icon> {
    let mut icons = Vec::new();
    if let Some(address) = channel(person.email.as_deref()) {
        icons.push(Icon::new(mailto(address), "Email", "✉︎"));
    }
    if let Some(href) = channel(person.scholar.as_deref()) {
        icons.push(Icon::new(href.to_owned(), "Google Scholar", "🎓"));
    }
    if let Some(href) = channel(person.github.as_deref()) {
        icons.push(Icon::new(href.to_owned(), "GitHub", "🐙"));
    }
    if let Some(href) = channel(person.website.as_deref()) {
        icons.push(Icon::new(href.to_owned(), "Homepage", "🏠"));
    }
    icons
}

/// One-line summary for an alumni list entry:
/// `"Name (Degree): period, Co-advisor: X, First Employment: Y"`, with
/// every segment after the colon optional.
pub fn alumni_line(person: &PersonRecord) -> String {
    let period = format_period(person.start.as_deref(), person.end.as_deref());

    let mut line = person.name.clone();
    if let Some(degree) = non_empty(person.degree.as_deref()) {
        line.push_str(&format!(" ({degree})"));
    }
    line.push(':');
    if !period.is_empty() {
        line.push(' ');
        line.push_str(&period);
    }

    for (label, value) in [
        ("Co-advisor", person.co_advisor.as_deref()),
        ("First Employment", person.first_employment.as_deref()),
    ] {
        if let Some(value) = non_empty(value) {
            line.push_str(&format!(", {label}: {value}"));
        }
    }
    line
}

/// Empty strings in the data file mean the same as an absent field.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn channel(value: Option<&str>) -> Option<&str> {
    non_empty(value).filter(|v| *v != "#")
}

fn mailto(address: &str) -> String {
    if has_prefix(address, "mailto:") {
        address.to_owned()
    } else {
        format!("mailto:{address}")
    }
}

fn is_http(href: &str) -> bool {
    has_prefix(href, "http://") || has_prefix(href, "https://")
}

fn has_prefix(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
