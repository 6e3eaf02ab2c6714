mod level;

pub use level::Level;

/// One entry in the people data file. Only the name is guaranteed to be
/// present; every other field depends on how much of the record was filled
/// in by whoever maintains the data.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PersonRecord {
    pub name: String,
    pub degree: Option<String>,
    pub level: Option<String>,
    pub co_advisor: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub first_employment: Option<String>,
    pub email: Option<String>,
    pub scholar: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub img: Option<String>,
}

/// The shape of the data file: three groups of current students plus the
/// alumni roll. Any key missing from the document is an empty group.
#[derive(Debug, Default, serde::Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub phd_students: Vec<PersonRecord>,
    #[serde(default)]
    pub ms_students: Vec<PersonRecord>,
    #[serde(default)]
    pub ug_students: Vec<PersonRecord>,
    #[serde(default)]
    pub alumni: Vec<PersonRecord>,
}

/// Alumni partitioned by degree level, in source order.
#[derive(Debug, Default)]
pub struct AlumniBuckets<'a> {
    pub phd: Vec<&'a PersonRecord>,
    pub ms: Vec<&'a PersonRecord>,
    pub ug: Vec<&'a PersonRecord>,
}

/// Groups alumni by their `level` field. Records whose level matches no
/// known synonym end up in no bucket at all.
pub fn bucket_alumni(alumni: &[PersonRecord]) -> AlumniBuckets<'_> {
    let mut buckets = AlumniBuckets::default();
    for person in alumni {
        match person.level.as_deref().and_then(Level::parse) {
            Some(Level::Phd) => buckets.phd.push(person),
            Some(Level::Ms) => buckets.ms.push(person),
            Some(Level::Ug) => buckets.ug.push(person),
            None => {}
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alum(name: &str, level: &str) -> PersonRecord {
        PersonRecord {
            name: name.to_owned(),
            level: Some(level.to_owned()),
            ..Default::default()
        }
    }

    #[test]
    fn levels_match_case_insensitively() {
        assert_eq!(Level::parse("Ph.D."), Some(Level::Phd));
        assert_eq!(Level::parse("phd"), Some(Level::Phd));
        assert_eq!(Level::parse("MASTERS"), Some(Level::Ms));
        assert_eq!(Level::parse("m.s"), Some(Level::Ms));
        assert_eq!(Level::parse("Undergraduate"), Some(Level::Ug));
        assert_eq!(Level::parse("UG"), Some(Level::Ug));
    }

    #[test]
    fn unknown_levels_are_dropped() {
        let alumni = vec![alum("A", "postdoc"), alum("B", "phd")];
        let buckets = bucket_alumni(&alumni);
        assert_eq!(buckets.phd.len(), 1);
        assert_eq!(buckets.phd[0].name, "B");
        assert!(buckets.ms.is_empty());
        assert!(buckets.ug.is_empty());
    }

    #[test]
    fn records_without_a_level_go_nowhere() {
        let alumni = vec![PersonRecord {
            name: "A".to_owned(),
            ..Default::default()
        }];
        let buckets = bucket_alumni(&alumni);
        assert!(buckets.phd.is_empty());
        assert!(buckets.ms.is_empty());
        assert!(buckets.ug.is_empty());
    }

    #[test]
    fn buckets_keep_source_order() {
        let alumni = vec![alum("A", "M.S."), alum("B", "ms"), alum("C", "Masters")];
        let buckets = bucket_alumni(&alumni);
        let names: Vec<_> = buckets.ms.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
    }

    #[test]
    fn missing_sequences_default_to_empty() {
        let data: Dataset = serde_json::from_str(r#"{"alumni": [{"name": "A"}]}"#).unwrap();
        assert!(data.phd_students.is_empty());
        assert!(data.ms_students.is_empty());
        assert!(data.ug_students.is_empty());
        assert_eq!(data.alumni.len(), 1);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let data: Dataset = serde_json::from_str(
            r#"{"phd_students": [{"name": "A", "office": "B-12"}], "advisor": "X"}"#,
        )
        .unwrap();
        assert_eq!(data.phd_students[0].name, "A");
    }
}
