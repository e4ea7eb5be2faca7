use tracing::debug;

use crate::links::LinkKind;
use crate::markup::*;
use crate::model::*;
use crate::resources::TextKey;
use crate::writer::helpers::MemberWriterHelpers;
use crate::writer::member_writer::*;

/// Properties shown for one type, split by where they are documented
#[derive(Debug, Default)]
pub struct VisibleProperties<'a> {
    /// Documented on this type's page: its own, plus those inherited from
    /// supertypes that get no page of their own
    pub local: Vec<&'a Member>,
    /// Inherited from linkable supertypes, nearest supertype first
    pub inherited: Vec<(&'a TypeElement, Vec<&'a Member>)>,
}

// Private members stay on their declaring type's page
fn is_inherited(member: &Member) -> bool {
    !member.modifiers.iter().any(|m| m == "private")
}

/// Drives a member writer over one type in page order
pub struct PropertySectionBuilder<'a, W> {
    writer: &'a W,
    helpers: &'a MemberWriterHelpers<'a>,
    model: &'a Model,
    type_element: &'a TypeElement,
}

impl<'a, W> PropertySectionBuilder<'a, W>
where
    W: MemberSummaryWriter + PropertyDetailsWriter,
{
    pub fn new(
        writer: &'a W,
        helpers: &'a MemberWriterHelpers<'a>,
        model: &'a Model,
        type_element: &'a TypeElement,
    ) -> Self {
        Self {
            writer,
            helpers,
            model,
            type_element,
        }
    }

    pub fn visible_properties(&self) -> VisibleProperties<'a> {
        let utils = self.helpers.utils;
        let mut visible = VisibleProperties::default();
        let mut seen: Vec<&str> = Vec::new();

        for member in &self.type_element.members {
            if !seen.contains(&member.name.as_str()) {
                seen.push(&member.name);
                visible.local.push(member);
            }
        }

        for sup in self.model.supertypes_of(self.type_element) {
            let fresh: Vec<&Member> = sup
                .members
                .iter()
                .filter(|m| is_inherited(m) && !seen.contains(&m.name.as_str()))
                .collect();
            seen.extend(fresh.iter().copied().map(|m| m.name.as_str()));

            if fresh.is_empty() {
                continue;
            }
            if utils.is_linkable(sup) {
                visible.inherited.push((sup, fresh));
            } else {
                visible.local.extend(fresh);
            }
        }

        debug!(
            owner = %self.type_element.name,
            local = visible.local.len(),
            inherited = visible.inherited.len(),
            "collected visible properties"
        );
        visible
    }

    /// Appends the property summary region; nothing when there are no properties
    pub fn build_summary(&self, summary_tree: &mut ContentBuilder) {
        let visible = self.visible_properties();
        if visible.local.is_empty() && visible.inherited.is_empty() {
            return;
        }

        let mut member_tree = self
            .writer
            .member_summary_header(self.type_element, summary_tree);

        if !visible.local.is_empty() {
            let mut table = self.writer.create_summary_table();
            for member in &visible.local {
                table.add_row(self.summary_row(member));
            }
            member_tree.add(table.to_content());
        }

        for (sup, members) in &visible.inherited {
            let mut inherited_tree = ContentBuilder::new();
            self.writer.add_inherited_summary_label(sup, &mut inherited_tree);

            let mut code = HtmlTree::new(TagName::Code);
            for (i, member) in members.iter().enumerate() {
                if i > 0 {
                    code.add(", ");
                }
                let mut link = ContentBuilder::new();
                self.writer.add_inherited_summary_link(sup, member, &mut link);
                code.add(link);
            }
            inherited_tree.add(code);
            member_tree.add(HtmlTree::div(HtmlStyle::InheritedList, inherited_tree));
        }

        self.writer.add_member_tree(summary_tree, member_tree);
    }

    fn summary_row(&self, member: &Member) -> Vec<Content> {
        let mut type_cell = ContentBuilder::new();
        self.writer.add_summary_type(member, &mut type_cell);

        let mut name_cell = ContentBuilder::new();
        self.writer
            .add_summary_link(LinkKind::MemberSummary, self.type_element, member, &mut name_cell);

        let mut description_cell = ContentBuilder::new();
        self.helpers.add_summary_comment(member, &mut description_cell);

        vec![type_cell.into(), name_cell.into(), description_cell.into()]
    }

    /// Appends the property details region; nothing when there are no local properties
    pub fn build_details(&self, details_tree: &mut ContentBuilder) {
        let visible = self.visible_properties();
        if visible.local.is_empty() {
            return;
        }

        let header = self.writer.property_details_tree_header(details_tree);
        let mut body = self.writer.member_tree_header();
        for property in &visible.local {
            let mut doc_tree = self.writer.property_doc_tree_header(property);
            doc_tree.add(self.writer.signature(property));
            self.writer.add_deprecated(property, &mut doc_tree);
            self.writer.add_comments(property, &mut doc_tree);
            self.writer.add_tags(property, &mut doc_tree);
            body.add(self.writer.property_doc(doc_tree));
        }
        self.writer
            .add_property_details(header, body.into(), details_tree);
    }

    /// Appends the list of deprecated local properties, for the deprecated-API index
    pub fn build_deprecated(&self, target: &mut ContentBuilder) {
        let visible = self.visible_properties();
        let deprecated: Vec<(&Member, &Deprecation)> = visible
            .local
            .iter()
            .filter_map(|m| m.deprecation.as_ref().map(|d| (*m, d)))
            .collect();
        if deprecated.is_empty() {
            return;
        }

        let label = self.helpers.resources.text(TextKey::DeprecatedProperties);
        target.add(HtmlTree::heading(headings::SUMMARY_HEADING, label));

        let since_label = self.helpers.resources.text(TextKey::Since);
        let mut list = HtmlTree::new(TagName::Ul).set_style(HtmlStyle::DeprecatedList);
        for (member, deprecation) in deprecated {
            let mut item = HtmlTree::with(TagName::Li, self.writer.deprecated_link(member));
            if let Some(since) = &deprecation.since {
                let mut label = HtmlTree::span(HtmlStyle::DeprecatedSince, since_label.clone());
                label.add(Entity::NoBreakSpace);
                label.add(since.clone());
                item.add(Entity::NoBreakSpace);
                item.add(label);
            }
            if let Some(note) = &deprecation.note {
                item.add(HtmlTree::div(HtmlStyle::Block, Content::raw(note.clone())));
            }
            list.add(item);
        }
        target.add(list);
    }
}
