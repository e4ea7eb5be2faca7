use crate::links::LinkKind;
use crate::markup::*;
use crate::model::*;

/// Summary-table rendering for one kind of member
pub trait MemberSummaryWriter {
    /// Emits the summary marker into `summary_tree` and returns a fresh tree for the rows
    fn member_summary_header(&self, owner: &TypeElement, summary_tree: &mut ContentBuilder) -> ContentBuilder;

    /// Merges a filled member tree into the page summary region
    fn add_member_tree(&self, summary_tree: &mut ContentBuilder, member_tree: ContentBuilder);

    fn add_summary_label(&self, member_tree: &mut ContentBuilder);

    fn summary_table_header(&self) -> TableHeader;

    fn create_summary_table(&self) -> Table;

    fn add_inherited_summary_label(&self, owner: &TypeElement, inherited_tree: &mut ContentBuilder);

    fn add_summary_link(&self, kind: LinkKind, owner: &TypeElement, member: &Member, target: &mut ContentBuilder);

    fn add_inherited_summary_link(&self, owner: &TypeElement, member: &Member, links_tree: &mut ContentBuilder);

    fn add_summary_type(&self, member: &Member, target: &mut ContentBuilder);

    fn deprecated_link(&self, member: &Member) -> Content;

    fn member_tree_header(&self) -> HtmlTree;
}

/// Detail-section rendering for properties
pub trait PropertyDetailsWriter {
    /// Emits the details marker and returns the section heading
    fn property_details_tree_header(&self, details_tree: &mut ContentBuilder) -> ContentBuilder;

    /// Per-property section, identified by the raw member name
    fn property_doc_tree_header(&self, property: &Member) -> HtmlTree;

    fn signature(&self, property: &Member) -> Content;

    fn add_deprecated(&self, property: &Member, doc_tree: &mut HtmlTree);

    fn add_comments(&self, property: &Member, doc_tree: &mut HtmlTree);

    fn add_tags(&self, property: &Member, doc_tree: &mut HtmlTree);

    /// Wraps the heading and all property bodies into the identified details section
    fn add_property_details(&self, header: ContentBuilder, body: Content, details_tree: &mut ContentBuilder);

    fn property_doc(&self, doc_tree: HtmlTree) -> Content;
}
