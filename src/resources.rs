use std::collections::HashMap;

/// Message keys for every label the property writer emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    PropertiesDeclaredInClass,
    PropertiesDeclaredInInterface,
    PropertiesInheritedFromClass,
    PropertiesInheritedFromInterface,
    DescriptionFromClass,
    DescriptionFromInterface,
    PropertySummary,
    PropertyDetails,
    Properties,
    TypeLabel,
    PropertyLabel,
    DescriptionLabel,
    DeprecatedProperties,
    Since,
    SeeAlso,
    Returns,
    DefaultValue,
}

impl TextKey {
    /// Stable resource identifier, as used by translated bundles
    pub fn id(self) -> &'static str {
        match self {
            TextKey::PropertiesDeclaredInClass => "doclet.Properties_Declared_In_Class",
            TextKey::PropertiesDeclaredInInterface => "doclet.Properties_Declared_In_Interface",
            TextKey::PropertiesInheritedFromClass => "doclet.Properties_Inherited_From_Class",
            TextKey::PropertiesInheritedFromInterface => {
                "doclet.Properties_Inherited_From_Interface"
            }
            TextKey::DescriptionFromClass => "doclet.Description_From_Class",
            TextKey::DescriptionFromInterface => "doclet.Description_From_Interface",
            TextKey::PropertySummary => "doclet.Property_Summary",
            TextKey::PropertyDetails => "doclet.Property_Detail",
            TextKey::Properties => "doclet.Properties",
            TextKey::TypeLabel => "doclet.Type",
            TextKey::PropertyLabel => "doclet.Property",
            TextKey::DescriptionLabel => "doclet.Description",
            TextKey::DeprecatedProperties => "doclet.Deprecated_Properties",
            TextKey::Since => "doclet.Since",
            TextKey::SeeAlso => "doclet.See_Also",
            TextKey::Returns => "doclet.Returns",
            TextKey::DefaultValue => "doclet.DefaultValue",
        }
    }

    fn english(self) -> &'static str {
        match self {
            TextKey::PropertiesDeclaredInClass => "Properties declared in class",
            TextKey::PropertiesDeclaredInInterface => "Properties declared in interface",
            TextKey::PropertiesInheritedFromClass => "Properties inherited from class",
            TextKey::PropertiesInheritedFromInterface => "Properties inherited from interface",
            TextKey::DescriptionFromClass => "Description copied from class:",
            TextKey::DescriptionFromInterface => "Description copied from interface:",
            TextKey::PropertySummary => "Property Summary",
            TextKey::PropertyDetails => "Property Details",
            TextKey::Properties => "Properties",
            TextKey::TypeLabel => "Type",
            TextKey::PropertyLabel => "Property",
            TextKey::DescriptionLabel => "Description",
            TextKey::DeprecatedProperties => "Deprecated Properties",
            TextKey::Since => "Since:",
            TextKey::SeeAlso => "See Also:",
            TextKey::Returns => "Returns:",
            TextKey::DefaultValue => "Default value:",
        }
    }
}

/// Localized label lookup
#[cfg_attr(test, mockall::automock)]
pub trait TextProvider {
    fn text(&self, key: TextKey) -> String;
}

/// English label table with optional per-key replacements
#[derive(Debug, Clone, Default)]
pub struct Resources {
    overrides: HashMap<TextKey, String>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_override(mut self, key: TextKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }
}

impl TextProvider for Resources {
    fn text(&self, key: TextKey) -> String {
        self.overrides
            .get(&key)
            .cloned()
            .unwrap_or_else(|| key.english().to_string())
    }
}
