use crate::markup::tree::TagName;

/// Heading levels used on a type page
pub mod headings {
    use super::TagName;

    pub const SUMMARY_HEADING: TagName = TagName::H2;
    pub const DETAILS_HEADING: TagName = TagName::H2;
    pub const MEMBER_HEADING: TagName = TagName::H3;
    pub const INHERITED_SUMMARY_HEADING: TagName = TagName::H3;
}

/// Fixed section identifiers, used as in-page anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionName {
    PropertySummary,
    PropertyDetail,
    PropertiesInheritance,
}

impl SectionName {
    pub fn name(self) -> &'static str {
        match self {
            SectionName::PropertySummary => "property-summary",
            SectionName::PropertyDetail => "property-detail",
            SectionName::PropertiesInheritance => "properties-inherited-from-class-",
        }
    }
}

/// Marker comments delimiting the generated regions
pub struct MarkerComments;

impl MarkerComments {
    pub const START_OF_PROPERTY_SUMMARY: &'static str = "=========== PROPERTY SUMMARY ===========";
    pub const START_OF_PROPERTY_DETAILS: &'static str = "============ PROPERTY DETAIL ===========";
}
