use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Degree levels an alumni record can be grouped under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Phd,
    Ms,
    Ug,
}

static SYNONYMS: Lazy<HashMap<&'static str, Level>> = Lazy::new(|| {
    HashMap::from([
        ("phd", Level::Phd),
        ("ph.d.", Level::Phd),
        ("ph.d", Level::Phd),
        ("ms", Level::Ms),
        ("m.s.", Level::Ms),
        ("m.s", Level::Ms),
        ("masters", Level::Ms),
        ("ug", Level::Ug),
        ("undergrad", Level::Ug),
        ("undergraduate", Level::Ug),
    ])
});

impl Level {
    /// Case-insensitive lookup against the synonym table. Values the table
    /// doesn't know get `None`.
    pub fn parse(raw: &str) -> Option<Level> {
        SYNONYMS.get(raw.to_lowercase().as_str()).copied()
    }
}
