//! Demo app catalog — the 25 cards shown on the list screen.

/// One entry in the store catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub app_name: String,
    pub card_title: String,
    pub file_url: String,
    /// One-line body shown inside the card.
    pub card_body: String,
    /// Long text for the detail screen; padded so the screen scrolls.
    pub description: String,
}

/// Number of entries in the demo catalog.
pub const CATALOG_LEN: usize = 25;

/// Build the demo catalog. Entry `i` (0-based) is `App {i+1}`.
pub fn demo_catalog() -> Vec<CatalogEntry> {
    (1..=CATALOG_LEN)
        .map(|n| {
            let app_name = format!("App {n}");
            CatalogEntry {
                card_title: format!("Card Title {n}"),
                file_url: format!("https://example.com/files/app{n}.apk"),
                card_body: format!("This is the content for {app_name}."),
                description: long_description(&app_name),
                app_name,
            }
        })
        .collect()
}

fn long_description(app_name: &str) -> String {
    format!(
        "This is a detailed description for {app_name}. It explains what the app \
         does, its features, and why you should download it. This section can be \
         quite long to demonstrate scrolling. More details here to make the list \
         scrollable and test the crown input. Add even more text to ensure it \
         overflows and requires scrolling. Final line of description for {app_name}."
    )
}
