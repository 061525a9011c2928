use serde::{Deserialize, Serialize};

/// Internal pages a table cell can link to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    RouteDetail,
    ScheduleDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub label: String,
    pub view: View,
    pub params: Vec<(String, String)>,
}

impl LinkDescriptor {
    pub fn new(label: impl Into<String>, view: View) -> Self {
        Self {
            label: label.into(),
            view,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.push((key.to_string(), value.into()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellContent {
    Text(String),
    Link(LinkDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub content: CellContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Cell {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: CellContent::Text(text.into()),
            style: None,
        }
    }

    pub fn link(link: LinkDescriptor) -> Self {
        Self {
            content: CellContent::Link(link),
            style: None,
        }
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    /// Visible text of the cell, whether plain or linked.
    pub fn label(&self) -> &str {
        match &self.content {
            CellContent::Text(text) => text,
            CellContent::Link(link) => &link.label,
        }
    }
}

/// Caption, header and rows of one rendered table.
///
/// Rows always have exactly as many cells as the header has labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    pub caption: String,
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl TableView {
    pub fn new(caption: impl Into<String>, header: &[&str]) -> Self {
        Self {
            caption: caption.into(),
            header: header.iter().map(|label| label.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.header.len(), "row width must match header");
        self.rows.push(row);
    }
}

/// Anything the presenter can lay out as a sequence of tables.
pub trait TableSet {
    fn tables(&self) -> Vec<&TableView>;
}

impl TableSet for TableView {
    fn tables(&self) -> Vec<&TableView> {
        vec![self]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteGroup {
    pub description: String,
    pub table: TableView,
}

/// Route tables keyed by description, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTables {
    pub groups: Vec<RouteGroup>,
}

impl RouteTables {
    pub fn get(&self, description: &str) -> Option<&TableView> {
        self.groups
            .iter()
            .find(|g| g.description == description)
            .map(|g| &g.table)
    }

    pub fn row_count(&self) -> usize {
        self.groups.iter().map(|g| g.table.rows.len()).sum()
    }
}

impl TableSet for RouteTables {
    fn tables(&self) -> Vec<&TableView> {
        self.groups.iter().map(|g| &g.table).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTables {
    pub direction0: TableView,
    pub direction1: TableView,
}

impl TableSet for ScheduleTables {
    fn tables(&self) -> Vec<&TableView> {
        vec![&self.direction0, &self.direction1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_cell_label_is_link_text() {
        let cell = Cell::link(LinkDescriptor::new("Red", View::RouteDetail).param("name", "Red"))
            .with_style("color: #FFFFFF;");

        assert_eq!(cell.label(), "Red");
        assert_eq!(cell.style.as_deref(), Some("color: #FFFFFF;"));
    }

    #[test]
    fn route_tables_lookup_and_count() {
        let mut subway = TableView::new("Subway", &["a", "b", "c"]);
        subway.push_row(vec![Cell::text("1"), Cell::text("2"), Cell::text("3")]);
        subway.push_row(vec![Cell::text("4"), Cell::text("5"), Cell::text("6")]);
        let bus = TableView::new("Bus", &["a", "b", "c"]);

        let tables = RouteTables {
            groups: vec![
                RouteGroup {
                    description: "Subway".to_string(),
                    table: subway,
                },
                RouteGroup {
                    description: "Bus".to_string(),
                    table: bus,
                },
            ],
        };

        assert_eq!(tables.row_count(), 2);
        assert_eq!(tables.get("Subway").map(|t| t.rows.len()), Some(2));
        assert!(tables.get("Ferry").is_none());
        assert_eq!(tables.tables().len(), 2);
    }

    #[test]
    fn cell_serializes_with_tagged_content() {
        let json = serde_json::to_value(Cell::text("Red Line")).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "content": { "type": "text", "value": "Red Line" } })
        );
    }
}
