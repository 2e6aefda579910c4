//! Content loading tests against a site tree on disk.

use folio_render::{ContentLoader, FsStore};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn site_tree(root: &Path) {
    write(root, "content/work/work-de.md", "# Arbeit\n\n- Linux\n- Netzwerke\n");
    write(root, "content/work/work-en.md", "# Work\n\n- Linux\n- Networks\n");
    write(
        root,
        "content/news/news-work-de.md",
        "2024-01-01\nNeue Website\n\n2024-02-01\nVortrag\n",
    );
    write(root, "content/imprint/imprint-de.md", "## Impressum\nMax Mustermann");
    write(root, "content/imprint/imprint-en.md", "## Imprint\nMax Mustermann");
}

#[test]
fn test_catalog_from_disk() {
    let dir = tempdir().unwrap();
    site_tree(dir.path());

    let loader = ContentLoader::new(FsStore::new(dir.path()));
    let catalog = loader.load_catalog(&["work", "politics"], &["de", "en"]);

    assert_eq!(
        catalog.content("work", "de"),
        Some("<h1>Arbeit</h1>\n\n<ul><li>Linux</li>\n<li>Netzwerke</li></ul>\n")
    );
    assert_eq!(
        catalog.content("politics", "de"),
        Some("<p>Fehler beim Laden des Inhalts.</p>")
    );
    assert_eq!(
        catalog.news("work", "en"),
        Some("<p>Failed to load news.</p>")
    );
    assert_eq!(
        catalog.imprint("en"),
        Some("<h2>Imprint</h2>\n<p>Max Mustermann</p>")
    );
    assert_eq!(
        catalog
            .news("work", "de")
            .unwrap()
            .matches("feed-item")
            .count(),
        2
    );
}

#[test]
fn test_catalog_serializes_by_mode_then_language() {
    let dir = tempdir().unwrap();
    site_tree(dir.path());

    let loader = ContentLoader::new(FsStore::new(dir.path()));
    let catalog = loader.load_catalog(&["work"], &["en"]);
    let json = serde_json::to_value(&catalog).unwrap();

    assert_eq!(
        json["content"]["work"]["en"],
        "<h1>Work</h1>\n\n<ul><li>Linux</li>\n<li>Networks</li></ul>\n"
    );
    assert_eq!(json["imprint"]["en"], "<h2>Imprint</h2>\n<p>Max Mustermann</p>");
    assert!(json["news"]["work"]["en"].is_string());
}
