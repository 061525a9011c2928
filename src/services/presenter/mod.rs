//! Turns table views into host-renderable output.

pub mod html_presenter;

use crate::types::{
    rendered::{ErrorPlaceholder, Rendered},
    table_view::{TableSet, TableView, View},
};

pub trait Presenter: Send + Sync {
    /// Translation hook for fixed labels.
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }

    /// Resolve a link target to an href.
    fn build_link(&self, view: View, params: &[(String, String)]) -> String;

    fn render_table(&self, table: &TableView) -> askama::Result<String>;

    fn render_placeholder(&self, placeholder: &ErrorPlaceholder) -> askama::Result<String>;

    fn render_page(&self, title: &str, fragments: &[String]) -> askama::Result<String>;
}

/// Render either outcome of an operation as a full page.
pub fn render_rendered<T: TableSet>(
    presenter: &dyn Presenter,
    title: &str,
    rendered: &Rendered<T>,
) -> askama::Result<String> {
    let fragments = match rendered {
        Rendered::Tables(tables) => tables
            .tables()
            .into_iter()
            .map(|t| presenter.render_table(t))
            .collect::<askama::Result<Vec<String>>>()?,
        Rendered::Error(placeholder) => vec![presenter.render_placeholder(placeholder)?],
    };

    presenter.render_page(title, &fragments)
}
