use crate::markup::content::*;
use crate::markup::tree::*;
use crate::renderer::traits::*;

/// Column labels of a summary table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    cells: Vec<Content>,
}

impl TableHeader {
    pub fn new<C: Into<Content>>(cells: impl IntoIterator<Item = C>) -> Self {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[Content] {
        &self.cells
    }
}

/// Summary table descriptor: caption, header, column styles and the
/// column whose cells act as row headers. Rows are appended per member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    style: HtmlStyle,
    caption: Option<Content>,
    header: Option<TableHeader>,
    column_styles: Vec<HtmlStyle>,
    row_scope_column: usize,
    rows: Vec<Vec<Content>>,
}

impl Table {
    pub fn new(style: HtmlStyle) -> Self {
        Self {
            style,
            caption: None,
            header: None,
            column_styles: Vec::new(),
            row_scope_column: 0,
            rows: Vec::new(),
        }
    }

    pub fn set_caption(mut self, caption: impl Into<Content>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn set_header(mut self, header: TableHeader) -> Self {
        self.header = Some(header);
        self
    }

    pub fn set_column_styles(mut self, styles: impl IntoIterator<Item = HtmlStyle>) -> Self {
        self.column_styles = styles.into_iter().collect();
        self
    }

    pub fn set_row_scope_column(mut self, column: usize) -> Self {
        self.row_scope_column = column;
        self
    }

    pub fn add_row(&mut self, cells: Vec<Content>) {
        self.rows.push(cells);
    }

    pub fn caption(&self) -> Option<&Content> {
        self.caption.as_ref()
    }

    pub fn header(&self) -> Option<&TableHeader> {
        self.header.as_ref()
    }

    pub fn column_styles(&self) -> &[HtmlStyle] {
        &self.column_styles
    }

    pub fn row_scope_column(&self) -> usize {
        self.row_scope_column
    }

    pub fn rows(&self) -> &[Vec<Content>] {
        &self.rows
    }

    fn cell(&self, tag: TagName, column: usize, content: Content, scope: &str) -> HtmlTree {
        let cell = HtmlTree::with(tag, content).put("scope", scope);
        match self.column_styles.get(column) {
            Some(style) => cell.set_style(*style),
            None => cell,
        }
    }

    pub fn to_content(&self) -> Content {
        let mut table = HtmlTree::new(TagName::Table).set_style(self.style);

        if let Some(caption) = &self.caption {
            table.add(HtmlTree::with(
                TagName::Caption,
                HtmlTree::with(TagName::Span, caption.clone()),
            ));
        }

        if let Some(header) = &self.header {
            let mut row = HtmlTree::new(TagName::Tr);
            for (i, label) in header.cells.iter().enumerate() {
                row.add(self.cell(TagName::Th, i, label.clone(), "col"));
            }
            table.add(row);
        }

        for (n, cells) in self.rows.iter().enumerate() {
            let stripe = if n % 2 == 0 {
                HtmlStyle::AltColor
            } else {
                HtmlStyle::RowColor
            };
            let mut row = HtmlTree::new(TagName::Tr).set_style(stripe);
            for (i, content) in cells.iter().enumerate() {
                if i == self.row_scope_column {
                    row.add(self.cell(TagName::Th, i, content.clone(), "row"));
                } else {
                    let cell = HtmlTree::with(TagName::Td, content.clone());
                    row.add(match self.column_styles.get(i) {
                        Some(style) => cell.set_style(*style),
                        None => cell,
                    });
                }
            }
            table.add(row);
        }

        table.into()
    }
}

impl Render for Table {
    fn render(&self, context: &RenderContext) -> String {
        self.to_content().render(context)
    }
}
