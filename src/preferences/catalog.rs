use std::sync::LazyLock;

use strsim::jaro_winkler;

/// A cuisine that can be chosen for a meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuisineEntry {
    pub id: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Every cuisine the wizard offers, in display order.
pub static CUISINE_CATALOG: LazyLock<Vec<CuisineEntry>> = LazyLock::new(|| {
    let entry = |id, glyph, color| CuisineEntry { id, glyph, color };
    vec![
        entry("Spanish", "🇪🇸", "#FF6B6B"),
        entry("Korean", "🇰🇷", "#4ECDC4"),
        entry("Mexican", "🇲🇽", "#FFD166"),
        entry("Lebanese", "🇱🇧", "#06D6A0"),
        entry("Thai", "🇹🇭", "#118AB2"),
        entry("Chinese", "🇨🇳", "#EF476F"),
        entry("Italian", "🇮🇹", "#073B4C"),
        entry("Greek", "🇬🇷", "#7209B7"),
        entry("French", "🇫🇷", "#3A0CA3"),
        entry("Vietnamese", "🇻🇳", "#4CC9F0"),
        entry("American", "🇺🇸", "#F72585"),
        entry("Japanese", "🇯🇵", "#4895EF"),
        entry("Indian", "🇮🇳", "#3F37C9"),
        entry("Fruit", "🍎", "#4CAF50"),
    ]
});

pub fn catalog() -> &'static [CuisineEntry] {
    &CUISINE_CATALOG
}

/// Look up a cuisine by its exact identifier.
pub fn find_cuisine(id: &str) -> Option<&'static CuisineEntry> {
    catalog().iter().find(|c| c.id == id)
}

/// Catalog entries whose name contains a query, ignoring case.
///
/// The view holds no selection state; `iter` can be called any number of times.
#[derive(Debug, Clone)]
pub struct CatalogView {
    query: String,
}

impl CatalogView {
    pub fn iter(&self) -> impl Iterator<Item = &'static CuisineEntry> + '_ {
        catalog()
            .iter()
            .filter(move |c| self.query.is_empty() || c.id.to_lowercase().contains(&self.query))
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

pub fn filter_by_query(query: &str) -> CatalogView {
    CatalogView {
        query: query.to_lowercase(),
    }
}

/// Closest cuisine to a query, for queries that match nothing.
pub fn suggest(query: &str) -> Option<&'static CuisineEntry> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    catalog()
        .iter()
        .map(|c| (c, jaro_winkler(&c.id.to_lowercase(), &query)))
        .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(c, _)| c)
}
