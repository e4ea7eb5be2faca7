use tracing::{debug, trace};

use crate::links::LinkKind;
use crate::markup::*;
use crate::model::*;
use crate::resources::TextKey;
use crate::writer::helpers::MemberWriterHelpers;
use crate::writer::member_writer::*;

/// Writes property documentation for the members listed on one type's page
pub struct PropertyWriter<'a> {
    helpers: &'a MemberWriterHelpers<'a>,
    type_element: &'a TypeElement,
}

impl<'a> PropertyWriter<'a> {
    pub fn new(helpers: &'a MemberWriterHelpers<'a>, type_element: &'a TypeElement) -> Self {
        Self {
            helpers,
            type_element,
        }
    }
}

impl MemberSummaryWriter for PropertyWriter<'_> {
    fn member_summary_header(&self, _owner: &TypeElement, summary_tree: &mut ContentBuilder) -> ContentBuilder {
        summary_tree.add(Content::comment(MarkerComments::START_OF_PROPERTY_SUMMARY));
        let mut member_tree = ContentBuilder::new();
        self.add_summary_label(&mut member_tree);
        member_tree
    }

    fn add_member_tree(&self, summary_tree: &mut ContentBuilder, member_tree: ContentBuilder) {
        self.helpers.add_member_tree(
            HtmlStyle::PropertySummary,
            SectionName::PropertySummary,
            summary_tree,
            member_tree,
        );
    }

    fn add_summary_label(&self, member_tree: &mut ContentBuilder) {
        let label = self.helpers.resources.text(TextKey::PropertySummary);
        member_tree.add(HtmlTree::heading(headings::SUMMARY_HEADING, label));
    }

    fn summary_table_header(&self) -> TableHeader {
        let resources = self.helpers.resources;
        TableHeader::new([
            resources.text(TextKey::TypeLabel),
            resources.text(TextKey::PropertyLabel),
            resources.text(TextKey::DescriptionLabel),
        ])
    }

    fn create_summary_table(&self) -> Table {
        trace!(owner = %self.type_element.name, "creating property summary table");
        Table::new(HtmlStyle::MemberSummary)
            .set_caption(self.helpers.resources.text(TextKey::Properties))
            .set_header(self.summary_table_header())
            .set_column_styles([HtmlStyle::ColFirst, HtmlStyle::ColSecond, HtmlStyle::ColLast])
            .set_row_scope_column(1)
    }

    fn add_inherited_summary_label(&self, owner: &TypeElement, inherited_tree: &mut ContentBuilder) {
        let helpers = self.helpers;
        let is_class = helpers.utils.is_class(owner);
        let key = match (helpers.options.summarize_overridden_methods, is_class) {
            (true, true) => TextKey::PropertiesDeclaredInClass,
            (true, false) => TextKey::PropertiesDeclaredInInterface,
            (false, true) => TextKey::PropertiesInheritedFromClass,
            (false, false) => TextKey::PropertiesInheritedFromInterface,
        };
        debug!(owner = %owner.name, ?key, "inherited property label");

        let id = format!(
            "{}{}",
            SectionName::PropertiesInheritance.name(),
            helpers.links.anchor_name(&owner.name)
        );
        let mut heading = HtmlTree::heading(headings::INHERITED_SUMMARY_HEADING, helpers.resources.text(key))
            .set_id(id);
        heading.add(Entity::NoBreakSpace);
        heading.add(helpers.links.class_link(LinkKind::Member, owner));
        inherited_tree.add(heading);
    }

    fn add_summary_link(&self, kind: LinkKind, owner: &TypeElement, member: &Member, target: &mut ContentBuilder) {
        let helpers = self.helpers;
        let label = helpers.utils.property_label(&member.name);
        let link = helpers.links.doc_link(kind, owner, member, Content::text(label), false);
        let member_link = HtmlTree::span(HtmlStyle::MemberNameLink, link);
        target.add(HtmlTree::code(member_link));
    }

    fn add_inherited_summary_link(&self, owner: &TypeElement, member: &Member, links_tree: &mut ContentBuilder) {
        let utils = self.helpers.utils;
        let label = if utils.is_property(&member.name) {
            utils.property_name(&member.name)
        } else {
            member.name.clone()
        };
        let link = self
            .helpers
            .links
            .doc_link(LinkKind::Member, owner, member, Content::text(label), false);
        links_tree.add(link);
    }

    fn add_summary_type(&self, member: &Member, target: &mut ContentBuilder) {
        let ty = self.helpers.utils.return_type(self.type_element, member);
        self.helpers.add_modifier_and_type(member, &ty, target);
    }

    fn deprecated_link(&self, member: &Member) -> Content {
        let utils = self.helpers.utils;
        let holder = utils.declaring_type(member);
        let label = Content::text(utils.fully_qualified_name(member));
        self.helpers
            .links
            .doc_link(LinkKind::Deprecated, holder, member, label, false)
    }

    fn member_tree_header(&self) -> HtmlTree {
        self.helpers.member_tree_header()
    }
}

impl PropertyDetailsWriter for PropertyWriter<'_> {
    fn property_details_tree_header(&self, details_tree: &mut ContentBuilder) -> ContentBuilder {
        details_tree.add(Content::comment(MarkerComments::START_OF_PROPERTY_DETAILS));
        let mut header = ContentBuilder::new();
        let label = self.helpers.resources.text(TextKey::PropertyDetails);
        header.add(HtmlTree::heading(headings::DETAILS_HEADING, label));
        header
    }

    fn property_doc_tree_header(&self, property: &Member) -> HtmlTree {
        let label = self.helpers.utils.property_label(&property.name);
        let heading = HtmlTree::heading(headings::MEMBER_HEADING, label);
        HtmlTree::section(HtmlStyle::Detail, heading).set_id(property.name.clone())
    }

    fn signature(&self, property: &Member) -> Content {
        let ty = self.helpers.utils.return_type(self.type_element, property);
        self.helpers.member_signature(property, &ty)
    }

    fn add_deprecated(&self, _property: &Member, _doc_tree: &mut HtmlTree) {}

    fn add_comments(&self, property: &Member, doc_tree: &mut HtmlTree) {
        let helpers = self.helpers;
        let utils = helpers.utils;
        if utils.full_body(property).is_empty() {
            trace!(property = %property.name, "no documentation body");
            return;
        }

        let holder = utils.declaring_type(property);
        if holder.name == self.type_element.name || !utils.is_public(holder) || utils.is_linkable(holder) {
            helpers.add_inline_comment(property, doc_tree);
            return;
        }

        // The declaring type gets no page, so the text is copied with attribution
        debug!(property = %property.name, holder = %holder.name, "copying inherited description");
        let holder_name = if utils.is_included(holder) {
            holder.simple_name()
        } else {
            holder.name.as_str()
        };
        let link = helpers.links.doc_link(
            LinkKind::PropertyCopy,
            holder,
            property,
            Content::text(holder_name),
            false,
        );
        let key = if utils.is_class(holder) {
            TextKey::DescriptionFromClass
        } else {
            TextKey::DescriptionFromInterface
        };
        let mut descfrm_label = HtmlTree::span(HtmlStyle::DescfrmTypeLabel, helpers.resources.text(key));
        descfrm_label.add(Entity::NoBreakSpace);
        descfrm_label.add(HtmlTree::code(link));
        doc_tree.add(HtmlTree::div(HtmlStyle::Block, descfrm_label));
        helpers.add_inline_comment(property, doc_tree);
    }

    fn add_tags(&self, property: &Member, doc_tree: &mut HtmlTree) {
        self.helpers.add_tags_info(property, doc_tree);
    }

    fn add_property_details(&self, header: ContentBuilder, body: Content, details_tree: &mut ContentBuilder) {
        let mut details = header;
        details.add(body);
        let section = HtmlTree::section(HtmlStyle::PropertyDetails, details)
            .set_id(SectionName::PropertyDetail.name());
        details_tree.add(self.helpers.member_tree(section));
    }

    fn property_doc(&self, doc_tree: HtmlTree) -> Content {
        self.helpers.member_tree(doc_tree).into()
    }
}
