use crate::markup::*;
use crate::model::*;
use crate::utils::ElementClassifier;

/// Where a link is being generated; only changes styling, never the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    Member,
    MemberSummary,
    PropertyCopy,
    Deprecated,
}

impl LinkKind {
    fn style(self) -> Option<HtmlStyle> {
        match self {
            LinkKind::Member | LinkKind::MemberSummary => Some(HtmlStyle::MemberLink),
            LinkKind::PropertyCopy => Some(HtmlStyle::CopiedFromLink),
            LinkKind::Deprecated => None,
        }
    }
}

/// Builds cross-references between documentation pages
#[cfg_attr(test, mockall::automock)]
pub trait LinkResolver {
    /// Link to `member` on the page of `owner`; name-only when that page does not exist
    fn doc_link(
        &self,
        kind: LinkKind,
        owner: &TypeElement,
        member: &Member,
        label: Content,
        strong: bool,
    ) -> Content;

    /// Package-qualified link to a type page
    fn class_link(&self, kind: LinkKind, ty: &TypeElement) -> Content;

    fn type_link(&self, ty: &TypeRef) -> Content;

    /// Turns an arbitrary name into a valid fragment identifier
    fn anchor_name(&self, name: &str) -> String;
}

pub struct HtmlLinks<'a> {
    utils: &'a dyn ElementClassifier,
}

impl<'a> HtmlLinks<'a> {
    pub fn new(utils: &'a dyn ElementClassifier) -> Self {
        Self { utils }
    }
}

impl LinkResolver for HtmlLinks<'_> {
    fn doc_link(
        &self,
        kind: LinkKind,
        owner: &TypeElement,
        member: &Member,
        label: Content,
        strong: bool,
    ) -> Content {
        let label = if strong {
            HtmlTree::with(TagName::Strong, label).into()
        } else {
            label
        };

        let page = if self.utils.is_linkable(owner) {
            self.utils.type_page(&owner.name)
        } else {
            None
        };
        let Some(page) = page else {
            return label;
        };

        let link = HtmlTree::link(
            format!("{}#{}", page, self.anchor_name(&member.name)),
            label,
        );
        match kind.style() {
            Some(style) => link.set_style(style).into(),
            None => link.into(),
        }
    }

    fn class_link(&self, kind: LinkKind, ty: &TypeElement) -> Content {
        let page = if self.utils.is_linkable(ty) {
            self.utils.type_page(&ty.name)
        } else {
            None
        };
        let Some(page) = page else {
            return Content::text(ty.name.clone());
        };

        let mut content = ContentBuilder::new();
        if !ty.package().is_empty() {
            content.add(format!("{}.", ty.package()));
        }
        let link = HtmlTree::link(page, ty.simple_name()).put("title", ty.name.clone());
        content.add(match kind.style() {
            Some(style) => link.set_style(style),
            None => link,
        });
        content.into()
    }

    fn type_link(&self, ty: &TypeRef) -> Content {
        match ty {
            TypeRef::Primitive(name) | TypeRef::Variable(name) => Content::text(name.clone()),
            TypeRef::Array(inner) => {
                let mut content = ContentBuilder::new();
                content.add(self.type_link(inner)).add("[]");
                content.into()
            }
            TypeRef::Declared { name, args } => {
                let simple = name.rsplit('.').next().unwrap_or(name);
                let mut content = ContentBuilder::new();
                match self.utils.type_page(name) {
                    Some(page) => content.add(HtmlTree::link(page, simple).put("title", name.clone())),
                    None => content.add(simple),
                };
                if !args.is_empty() {
                    content.add("<");
                    for (i, arg) in args.iter().enumerate() {
                        if i > 0 {
                            content.add(", ");
                        }
                        content.add(self.type_link(arg));
                    }
                    content.add(">");
                }
                content.into()
            }
        }
    }

    fn anchor_name(&self, name: &str) -> String {
        name.chars()
            .filter_map(|c| match c {
                c if c.is_alphanumeric() => Some(c),
                '-' | '_' | '.' | ':' => Some(c),
                c if c.is_whitespace() => Some('-'),
                _ => None,
            })
            .collect()
    }
}
