mod load;

pub use load::{DataSource, HttpSource, LoadError};

use labroster_people::{bucket_alumni, Dataset};
use labroster_render::{render_alumni_list, render_grid, Document, Element, Node};
use tracing::error;

pub const PHD_GRID: &str = "phd-grid";
pub const MS_GRID: &str = "ms-grid";
pub const UG_GRID: &str = "ug-grid";
pub const ALUMNI_PHD_LIST: &str = "alumni-phd-list";
pub const ALUMNI_MS_LIST: &str = "alumni-ms-list";
pub const ALUMNI_UG_LIST: &str = "alumni-ug-list";

/// The six containers the host page is expected to provide.
pub const CONTAINER_IDS: [&str; 6] = [
    PHD_GRID,
    MS_GRID,
    UG_GRID,
    ALUMNI_PHD_LIST,
    ALUMNI_MS_LIST,
    ALUMNI_UG_LIST,
];

/// Runs the whole pipeline once: fetch the data file, then fill the six
/// containers. On load failure every container gets a visible notice
/// instead; the error never reaches the caller.
pub async fn initialize(document: &mut dyn Document, source: &dyn DataSource) {
    match source.fetch().await {
        Ok(data) => render_dataset(document, &data),
        Err(err) => {
            error!("people data load failed: {err}");
            render_fallback(document);
        }
    }
}

fn render_dataset(document: &mut dyn Document, data: &Dataset) {
    render_grid(document, PHD_GRID, &data.phd_students);
    render_grid(document, MS_GRID, &data.ms_students);
    render_grid(document, UG_GRID, &data.ug_students);

    let buckets = bucket_alumni(&data.alumni);
    render_alumni_list(document, ALUMNI_PHD_LIST, &buckets.phd);
    render_alumni_list(document, ALUMNI_MS_LIST, &buckets.ms);
    render_alumni_list(document, ALUMNI_UG_LIST, &buckets.ug);
}

fn render_fallback(document: &mut dyn Document) {
    for id in [PHD_GRID, MS_GRID, UG_GRID] {
        if document.has_container(id) {
            document.replace_content(id, vec![notice("p", "Could not load data. Check ")]);
        }
    }
    for id in [ALUMNI_PHD_LIST, ALUMNI_MS_LIST, ALUMNI_UG_LIST] {
        if document.has_container(id) {
            document.replace_content(id, vec![notice("li", "Could not load alumni. Check ")]);
        }
    }
}

fn notice(tag: &'static str, lead: &str) -> Node {
    Element::new(tag)
        .class("muted")
        .text(lead)
        .child(Element::new("code").text("students.json"))
        .text(".")
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use labroster_render::{to_html, MemoryDocument};

    struct JsonSource(&'static str);

    #[async_trait]
    impl DataSource for JsonSource {
        async fn fetch(&self) -> Result<Dataset, LoadError> {
            Ok(serde_json::from_str(self.0)?)
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        async fn fetch(&self) -> Result<Dataset, LoadError> {
            Err(LoadError::Status(404))
        }
    }

    fn page() -> MemoryDocument {
        MemoryDocument::with_containers(CONTAINER_IDS)
    }

    #[tokio::test]
    async fn one_student_and_one_alumnus_land_in_their_containers() {
        let source = JsonSource(
            r#"{
                "phd_students": [{"name": "A"}],
                "alumni": [{"name": "B", "level": "M.S."}]
            }"#,
        );
        let mut document = page();
        initialize(&mut document, &source).await;

        assert_eq!(document.content(PHD_GRID).unwrap().len(), 1);
        assert_eq!(document.content(ALUMNI_MS_LIST).unwrap().len(), 1);
        for id in [MS_GRID, UG_GRID, ALUMNI_PHD_LIST, ALUMNI_UG_LIST] {
            assert!(document.content(id).unwrap().is_empty(), "{id}");
        }
    }

    #[tokio::test]
    async fn reinitializing_replaces_earlier_content() {
        let mut document = page();
        initialize(&mut document, &JsonSource(r#"{"phd_students": [{"name": "A"}, {"name": "B"}]}"#)).await;
        initialize(&mut document, &JsonSource(r#"{"phd_students": [{"name": "C"}]}"#)).await;

        let html = to_html(document.content(PHD_GRID).unwrap());
        assert!(html.contains("Portrait of C"));
        assert!(!html.contains("Portrait of A"));
    }

    #[tokio::test]
    async fn load_failure_fills_every_container_with_a_notice() {
        let mut document = page();
        initialize(&mut document, &FailingSource).await;

        for id in [PHD_GRID, MS_GRID, UG_GRID] {
            let html = to_html(document.content(id).unwrap());
            assert_eq!(
                html,
                r#"<p class="muted">Could not load data. Check <code>students.json</code>.</p>"#,
                "{id}"
            );
        }
        for id in [ALUMNI_PHD_LIST, ALUMNI_MS_LIST, ALUMNI_UG_LIST] {
            let html = to_html(document.content(id).unwrap());
            assert_eq!(
                html,
                r#"<li class="muted">Could not load alumni. Check <code>students.json</code>.</li>"#,
                "{id}"
            );
        }
    }

    #[tokio::test]
    async fn containers_missing_from_the_page_are_skipped() {
        let mut document = MemoryDocument::with_containers([PHD_GRID]);
        initialize(&mut document, &FailingSource).await;

        assert_eq!(document.content(PHD_GRID).unwrap().len(), 1);
        assert!(document.content(MS_GRID).is_none());
    }
}
