//! HTTP Page Loader
//!
//! Fetches Markdown page sources with `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::Request;

use inkpot::routing::RouteMatch;
use inkpot::shell::{LoadError, Page, PageLoader};

/// Loads `<base>/<source>` from the asset server
#[derive(Debug, Clone)]
pub struct HttpPageLoader {
    base: String,
}

impl HttpPageLoader {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url_for(&self, source: &str) -> String {
        format!("{}/{}", self.base, source.trim_start_matches('/'))
    }
}

#[async_trait(?Send)]
impl PageLoader for HttpPageLoader {
    async fn load(&self, route: &RouteMatch) -> Result<Page, LoadError> {
        let url = self.url_for(&route.source);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        if response.status() == 404 {
            return Err(LoadError::NotFound(route.source.clone()));
        }
        if !response.ok() {
            return Err(LoadError::Http {
                status: response.status(),
                url,
            });
        }

        // Single-page dev servers answer unknown files with index.html.
        let is_html = response
            .headers()
            .get("content-type")
            .map_or(false, |t| t.starts_with("text/html"));
        if is_html {
            return Err(LoadError::NotFound(route.source.clone()));
        }

        let markdown = response
            .text()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        Ok(Page::from_markdown(&route.source, &markdown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let loader = HttpPageLoader::new("/content/");
        assert_eq!(loader.url_for("blogs.md"), "/content/blogs.md");
        assert_eq!(loader.url_for("/posts/a.md"), "/content/posts/a.md");

        let remote = HttpPageLoader::new("https://cdn.example.com/pages");
        assert_eq!(remote.url_for("index.md"), "https://cdn.example.com/pages/index.md");
    }
}
