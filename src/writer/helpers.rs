use crate::config::RenderOptions;
use crate::links::LinkResolver;
use crate::markup::html;
use crate::markup::*;
use crate::model::*;
use crate::renderer::components::*;
use crate::resources::TextProvider;
use crate::utils::ElementClassifier;

/// Rendering pieces shared by every member writer
pub struct MemberWriterHelpers<'a> {
    pub utils: &'a dyn ElementClassifier,
    pub links: &'a dyn LinkResolver,
    pub resources: &'a dyn TextProvider,
    pub options: &'a RenderOptions,
}

impl<'a> MemberWriterHelpers<'a> {
    pub fn new(
        utils: &'a dyn ElementClassifier,
        links: &'a dyn LinkResolver,
        resources: &'a dyn TextProvider,
        options: &'a RenderOptions,
    ) -> Self {
        Self {
            utils,
            links,
            resources,
            options,
        }
    }

    pub fn member_tree(&self, content: impl Into<Content>) -> HtmlTree {
        HtmlTree::styled(TagName::Li, HtmlStyle::BlockList, content)
    }

    pub fn member_tree_header(&self) -> HtmlTree {
        HtmlTree::new(TagName::Ul).set_style(HtmlStyle::BlockList)
    }

    pub fn add_member_tree(
        &self,
        style: HtmlStyle,
        section: SectionName,
        summary_tree: &mut ContentBuilder,
        member_tree: ContentBuilder,
    ) {
        let section = HtmlTree::section(style, member_tree).set_id(section.name());
        summary_tree.add(self.member_tree(section));
    }

    pub fn add_inline_comment(&self, member: &Member, target: &mut HtmlTree) {
        let body = self.utils.full_body(member);
        if !body.is_empty() {
            target.add(HtmlTree::div(HtmlStyle::Block, Content::raw(body)));
        }
    }

    pub fn add_summary_comment(&self, member: &Member, target: &mut ContentBuilder) {
        let sentence = html::first_sentence(self.utils.full_body(member));
        if !sentence.is_empty() {
            target.add(HtmlTree::div(HtmlStyle::Block, Content::raw(sentence)));
        }
    }

    pub fn add_tags_info(&self, member: &Member, target: &mut HtmlTree) {
        let doc_renderer = DocRenderer;
        let groups = doc_renderer.group_tags(&member.tags);
        if groups.is_empty() {
            return;
        }

        let mut notes = HtmlTree::new(TagName::Dl).set_style(HtmlStyle::Notes);
        for (name, texts) in groups {
            let label = match doc_renderer.tag_key(name) {
                Some(key) => self.resources.text(key),
                None => doc_renderer.fallback_tag_label(name),
            };
            notes.add(HtmlTree::with(TagName::Dt, label));
            notes.add(HtmlTree::with(TagName::Dd, Content::raw(texts.join(", "))));
        }
        target.add(notes);
    }

    pub fn add_modifier_and_type(&self, member: &Member, ty: &TypeRef, target: &mut ContentBuilder) {
        let mut code = HtmlTree::new(TagName::Code);
        let modifiers = TypeRenderer.render_modifiers(&member.modifiers);
        if !modifiers.is_empty() {
            code.add(modifiers);
            code.add(Entity::NoBreakSpace);
        }
        code.add(self.links.type_link(ty));
        target.add(code);
    }

    pub fn member_signature(&self, member: &Member, ty: &TypeRef) -> Content {
        let mut signature = HtmlTree::new(TagName::Div).set_style(HtmlStyle::MemberSignature);
        let modifiers = TypeRenderer.render_modifiers(&member.modifiers);
        if !modifiers.is_empty() {
            signature.add(HtmlTree::span(HtmlStyle::Modifiers, modifiers));
            signature.add(Entity::NoBreakSpace);
        }
        signature.add(HtmlTree::span(HtmlStyle::ReturnType, self.links.type_link(ty)));
        signature.add(Entity::NoBreakSpace);
        signature.add(HtmlTree::span(HtmlStyle::MemberName, member.name.clone()));
        signature.into()
    }
}
