use dashmap::DashMap;
use pulldown_cmark::{html, Options, Parser};
use std::sync::Arc;
use uuid::Uuid;

/// Rendered-HTML cache keyed by post id, invalidated whenever a post is
/// edited or removed.
pub struct MarkdownCache {
    cache: Arc<DashMap<Uuid, String>>,
}

impl MarkdownCache {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
        }
    }

    /// Renders through the cache: a hit returns the stored HTML, a miss
    /// renders and stores it.
    pub fn render(&self, id: Uuid, markdown: &str) -> String {
        if let Some(cached) = self.cache.get(&id) {
            return cached.clone();
        }

        let rendered = render_markdown(markdown);
        self.cache.insert(id, rendered.clone());
        rendered
    }

    pub fn invalidate(&self, id: &Uuid) {
        self.cache.remove(id);
    }
}

impl Default for MarkdownCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Render markdown to HTML
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}
