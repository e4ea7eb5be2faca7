use html_escape::encode_double_quoted_attribute;

use crate::markup::content::*;
use crate::renderer::traits::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    A,
    Caption,
    Code,
    Dd,
    Div,
    Dl,
    Dt,
    H2,
    H3,
    Li,
    Section,
    Span,
    Strong,
    Table,
    Td,
    Th,
    Tr,
    Ul,
}

impl TagName {
    pub fn as_str(self) -> &'static str {
        match self {
            TagName::A => "a",
            TagName::Caption => "caption",
            TagName::Code => "code",
            TagName::Dd => "dd",
            TagName::Div => "div",
            TagName::Dl => "dl",
            TagName::Dt => "dt",
            TagName::H2 => "h2",
            TagName::H3 => "h3",
            TagName::Li => "li",
            TagName::Section => "section",
            TagName::Span => "span",
            TagName::Strong => "strong",
            TagName::Table => "table",
            TagName::Td => "td",
            TagName::Th => "th",
            TagName::Tr => "tr",
            TagName::Ul => "ul",
        }
    }

    pub fn is_block(self) -> bool {
        !matches!(
            self,
            TagName::A | TagName::Code | TagName::Span | TagName::Strong
        )
    }
}

/// CSS classes the member writers attach to generated markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlStyle {
    AltColor,
    Block,
    BlockList,
    ColFirst,
    ColLast,
    ColSecond,
    CopiedFromLink,
    DeprecatedList,
    DeprecatedSince,
    DescfrmTypeLabel,
    Detail,
    InheritedList,
    MemberLink,
    MemberName,
    MemberNameLink,
    MemberSignature,
    MemberSummary,
    Modifiers,
    Notes,
    PropertyDetails,
    PropertySummary,
    ReturnType,
    RowColor,
}

impl HtmlStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            HtmlStyle::AltColor => "alt-color",
            HtmlStyle::Block => "block",
            HtmlStyle::BlockList => "block-list",
            HtmlStyle::ColFirst => "col-first",
            HtmlStyle::ColLast => "col-last",
            HtmlStyle::ColSecond => "col-second",
            HtmlStyle::CopiedFromLink => "copied-from-link",
            HtmlStyle::DeprecatedList => "deprecated-list",
            HtmlStyle::DeprecatedSince => "deprecated-since",
            HtmlStyle::DescfrmTypeLabel => "descfrm-type-label",
            HtmlStyle::Detail => "detail",
            HtmlStyle::InheritedList => "inherited-list",
            HtmlStyle::MemberLink => "member-link",
            HtmlStyle::MemberName => "member-name",
            HtmlStyle::MemberNameLink => "member-name-link",
            HtmlStyle::MemberSignature => "member-signature",
            HtmlStyle::MemberSummary => "summary-table",
            HtmlStyle::Modifiers => "modifiers",
            HtmlStyle::Notes => "notes",
            HtmlStyle::PropertyDetails => "property-details",
            HtmlStyle::PropertySummary => "property-summary",
            HtmlStyle::ReturnType => "return-type",
            HtmlStyle::RowColor => "row-color",
        }
    }
}

/// An element with attributes and child content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTree {
    pub tag: TagName,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Content>,
}

impl HtmlTree {
    pub fn new(tag: TagName) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with(tag: TagName, content: impl Into<Content>) -> Self {
        let mut tree = Self::new(tag);
        tree.add(content);
        tree
    }

    pub fn styled(tag: TagName, style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::with(tag, content).set_style(style)
    }

    pub fn heading(tag: TagName, content: impl Into<Content>) -> Self {
        Self::with(tag, content)
    }

    pub fn section(style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::styled(TagName::Section, style, content)
    }

    pub fn div(style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::styled(TagName::Div, style, content)
    }

    pub fn span(style: HtmlStyle, content: impl Into<Content>) -> Self {
        Self::styled(TagName::Span, style, content)
    }

    pub fn code(content: impl Into<Content>) -> Self {
        Self::with(TagName::Code, content)
    }

    pub fn link(href: impl Into<String>, content: impl Into<Content>) -> Self {
        Self::with(TagName::A, content).put("href", href)
    }

    pub fn add(&mut self, content: impl Into<Content>) -> &mut Self {
        let content = content.into();
        if !content.is_empty() {
            self.children.push(content);
        }
        self
    }

    pub fn put(mut self, attr: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attrs.iter_mut().find(|(name, _)| *name == attr) {
            Some(existing) => existing.1 = value,
            None => self.attrs.push((attr, value)),
        }
        self
    }

    pub fn set_id(self, id: impl Into<String>) -> Self {
        self.put("id", id)
    }

    pub fn set_style(self, style: HtmlStyle) -> Self {
        self.put("class", style.as_str())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn children(&self) -> &[Content] {
        &self.children
    }

    pub fn is_block(&self) -> bool {
        self.tag.is_block()
    }

    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.tag.as_str());
        for (name, value) in &self.attrs {
            tag.push_str(&format!(" {}=\"{}\"", name, encode_double_quoted_attribute(value)));
        }
        tag.push('>');
        tag
    }
}

impl Render for HtmlTree {
    fn render(&self, context: &RenderContext) -> String {
        let (children, nested) = render_children(&self.children, &context.with_depth(context.depth + 1));

        if context.format == OutputFormat::Text {
            return if self.is_block() && !nested {
                format!("{}\n", children)
            } else {
                children
            };
        }

        let mut output = String::new();
        if self.is_block() {
            output.push_str(&context.indent());
        }
        output.push_str(&self.open_tag());
        if nested {
            output.push('\n');
            output.push_str(&children);
            output.push_str(&context.indent());
        } else {
            output.push_str(&children);
        }
        output.push_str(&format!("</{}>", self.tag.as_str()));
        if self.is_block() {
            output.push('\n');
        }
        output
    }
}
