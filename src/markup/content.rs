use html_escape::encode_text;

use crate::markup::html;
use crate::markup::tree::HtmlTree;
use crate::renderer::traits::*;

/// Character entities the writers insert between labels and links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    NoBreakSpace,
}

impl Entity {
    fn html(self) -> &'static str {
        match self {
            Entity::NoBreakSpace => "&nbsp;",
        }
    }

    fn text(self) -> &'static str {
        match self {
            Entity::NoBreakSpace => " ",
        }
    }
}

/// A node of renderable markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Plain text, escaped on output
    Text(String),
    /// Pre-rendered HTML such as a documentation body
    Raw(String),
    Comment(String),
    Entity(Entity),
    Tree(HtmlTree),
    Builder(ContentBuilder),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Content::Raw(html.into())
    }

    pub fn comment(text: impl Into<String>) -> Self {
        Content::Comment(text.into())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) | Content::Raw(s) => s.is_empty(),
            Content::Comment(_) | Content::Entity(_) | Content::Tree(_) => false,
            Content::Builder(b) => b.is_empty(),
        }
    }

    /// Whether this node starts on its own line when rendered
    pub fn is_block(&self) -> bool {
        match self {
            Content::Comment(_) => true,
            Content::Tree(tree) => tree.is_block(),
            Content::Builder(b) => b.iter().any(Content::is_block),
            _ => false,
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<Entity> for Content {
    fn from(entity: Entity) -> Self {
        Content::Entity(entity)
    }
}

impl From<HtmlTree> for Content {
    fn from(tree: HtmlTree) -> Self {
        Content::Tree(tree)
    }
}

impl From<ContentBuilder> for Content {
    fn from(builder: ContentBuilder) -> Self {
        Content::Builder(builder)
    }
}

/// Append-only accumulator handed to the writers as a render target
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentBuilder {
    items: Vec<Content>,
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, content: impl Into<Content>) -> &mut Self {
        let content = content.into();
        if !content.is_empty() {
            self.items.push(content);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Content> {
        self.items.iter()
    }
}

impl<C: Into<Content>> FromIterator<C> for ContentBuilder {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut builder = ContentBuilder::new();
        for content in iter {
            builder.add(content);
        }
        builder
    }
}

fn flatten<'a>(items: &'a [Content], out: &mut Vec<&'a Content>) {
    for item in items {
        match item {
            Content::Builder(b) => flatten(&b.items, out),
            other => out.push(other),
        }
    }
}

/// Renders a child list: inline runs share a line, blocks get their own.
/// Returns whether any block child forced line-oriented layout.
pub(crate) fn render_children(items: &[Content], context: &RenderContext) -> (String, bool) {
    let mut flat = Vec::new();
    flatten(items, &mut flat);

    if !flat.iter().any(|c| c.is_block()) {
        let inline: String = flat.iter().map(|c| c.render(context)).collect();
        return (inline, false);
    }

    let mut output = String::new();
    let mut run = String::new();
    for item in flat {
        if item.is_block() {
            if !run.is_empty() {
                output.push_str(&format!("{}{}\n", context.indent(), run));
                run.clear();
            }
            output.push_str(&item.render(context));
        } else {
            run.push_str(&item.render(context));
        }
    }
    if !run.is_empty() {
        output.push_str(&format!("{}{}\n", context.indent(), run));
    }
    (output, true)
}

impl Render for Content {
    fn render(&self, context: &RenderContext) -> String {
        let as_html = matches!(context.format, OutputFormat::Html);
        match self {
            Content::Text(text) if as_html => encode_text(text).into_owned(),
            Content::Text(text) => text.clone(),
            Content::Raw(raw) if as_html => raw.clone(),
            Content::Raw(raw) => html::to_text(raw),
            Content::Comment(text) if as_html => format!("{}<!-- {} -->\n", context.indent(), text),
            Content::Comment(_) => String::new(),
            Content::Entity(entity) if as_html => entity.html().to_string(),
            Content::Entity(entity) => entity.text().to_string(),
            Content::Tree(tree) => tree.render(context),
            Content::Builder(builder) => builder.render(context),
        }
    }
}

impl Render for ContentBuilder {
    fn render(&self, context: &RenderContext) -> String {
        render_children(&self.items, context).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_escaped() {
        let content = Content::text("List<T> & more");
        assert_eq!(
            content.render(&RenderContext::new()),
            "List&lt;T&gt; &amp; more"
        );
    }

    #[test]
    fn test_raw_is_verbatim_in_html_and_stripped_in_text() {
        let content = Content::raw("<p>The <b>color</b>.</p>");
        assert_eq!(content.render(&RenderContext::new()), "<p>The <b>color</b>.</p>");
        assert_eq!(content.render(&RenderContext::text()), "The color.");
    }

    #[test]
    fn test_raw_text_decodes_entities() {
        let content = Content::raw(r#"a &lt; b and <a title="x>y">link</a>"#);
        assert_eq!(content.render(&RenderContext::text()), "a < b and link");
    }

    #[test]
    fn test_empty_content_is_not_appended() {
        let mut builder = ContentBuilder::new();
        builder.add("").add(Content::raw(""));
        assert!(builder.is_empty());
        builder.add("x");
        assert_eq!(builder.len(), 1);
    }
}
