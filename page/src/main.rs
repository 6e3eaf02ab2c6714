use anyhow::{Context, Result};
use labroster_page::{initialize, HttpSource, CONTAINER_IDS};
use labroster_render::{to_html, MemoryDocument};

/// Headless stand-in for the host page: fetches the data file, renders
/// every container, prints the resulting markup.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let url = std::env::args()
        .nth(1)
        .context("usage: labroster-page <people-data-url>")?;

    println!("Fetching people data from {url}...");

    let mut document = MemoryDocument::with_containers(CONTAINER_IDS);
    initialize(&mut document, &HttpSource::new(url)).await;

    for id in CONTAINER_IDS {
        println!("#{id}");
        match document.content(id) {
            Some(nodes) if !nodes.is_empty() => println!("{}", to_html(nodes)),
            _ => println!("(empty)"),
        }
    }

    Ok(())
}
