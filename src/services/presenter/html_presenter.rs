use std::sync::Arc;

use askama::Template;
use urlencoding::encode;

use crate::types::{
    rendered::ErrorPlaceholder,
    table_view::{CellContent, TableView, View},
};

use super::Presenter;

pub const DEFAULT_BASE_PATH: &str = "/mbta";

#[derive(Template)]
#[template(path = "table.html")]
struct TableTemplate {
    caption: String,
    header: Vec<String>,
    rows: Vec<Vec<CellView>>,
}

struct CellView {
    text: String,
    href: String,
    style: String,
}

#[derive(Template)]
#[template(path = "placeholder.html")]
struct PlaceholderTemplate<'a> {
    message: &'a str,
}

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    fragments: &'a [String],
}

pub type Translator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Renders tables as HTML with links under `base_path`.
#[derive(Clone)]
pub struct HtmlPresenter {
    base_path: String,
    translator: Option<Translator>,
}

impl HtmlPresenter {
    pub fn new(base_path: &str) -> Self {
        HtmlPresenter {
            base_path: base_path.trim_end_matches('/').to_string(),
            translator: None,
        }
    }

    /// Translate header labels before rendering.
    pub fn with_translator(
        mut self,
        translator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    fn param<'a>(params: &'a [(String, String)], key: &str) -> &'a str {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default()
    }
}

impl Default for HtmlPresenter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_PATH)
    }
}

impl Presenter for HtmlPresenter {
    fn translate(&self, text: &str) -> String {
        match &self.translator {
            Some(translator) => translator(text),
            None => text.to_string(),
        }
    }

    fn build_link(&self, view: View, params: &[(String, String)]) -> String {
        match view {
            View::RouteDetail => format!(
                "{}/route/{}",
                self.base_path,
                encode(Self::param(params, "name"))
            ),
            View::ScheduleDetail => format!(
                "{}/schedule/{}/{}",
                self.base_path,
                encode(Self::param(params, "route")),
                encode(Self::param(params, "stop"))
            ),
        }
    }

    fn render_table(&self, table: &TableView) -> askama::Result<String> {
        let rows = table
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| CellView {
                        text: cell.label().to_string(),
                        href: match &cell.content {
                            CellContent::Text(_) => String::new(),
                            CellContent::Link(link) => self.build_link(link.view, &link.params),
                        },
                        style: cell.style.clone().unwrap_or_default(),
                    })
                    .collect()
            })
            .collect();

        TableTemplate {
            caption: table.caption.clone(),
            header: table.header.iter().map(|h| self.translate(h)).collect(),
            rows,
        }
        .render()
    }

    fn render_placeholder(&self, placeholder: &ErrorPlaceholder) -> askama::Result<String> {
        PlaceholderTemplate {
            message: &placeholder.message,
        }
        .render()
    }

    fn render_page(&self, title: &str, fragments: &[String]) -> askama::Result<String> {
        PageTemplate { title, fragments }.render()
    }
}
