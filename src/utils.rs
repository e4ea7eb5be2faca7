use crate::config::*;
use crate::model::*;

const ACCESSOR_PREFIXES: [&str; 3] = ["get", "set", "is"];
const PROPERTY_SUFFIX: &str = "Property";

impl PropertyConvention {
    /// Derived property name, or `None` when `name` is not an accessor
    pub fn property_name(self, name: &str) -> Option<String> {
        match self {
            PropertyConvention::Accessor => {
                for prefix in ACCESSOR_PREFIXES {
                    let Some(rest) = name.strip_prefix(prefix) else {
                        continue;
                    };
                    if let Some(snake) = rest.strip_prefix('_') {
                        if snake.starts_with(|c: char| c.is_ascii_lowercase()) {
                            return Some(snake.to_string());
                        }
                    } else if rest.starts_with(|c: char| c.is_uppercase()) {
                        return Some(decapitalize(rest));
                    }
                }
                None
            }
            PropertyConvention::Javafx => name
                .strip_suffix(PROPERTY_SUFFIX)
                .filter(|base| !base.is_empty())
                .map(str::to_string),
        }
    }
}

/// Lower-cases the first character unless the name opens with an acronym
/// (`Color` -> `color`, `URL` -> `URL`)
fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    if chars.next().is_some_and(char::is_uppercase) && first.is_uppercase() {
        return name.to_string();
    }
    let mut result: String = first.to_lowercase().collect();
    result.push_str(&name[first.len_utf8()..]);
    result
}

/// Predicates and derivations over language elements
pub trait ElementClassifier {
    fn is_class(&self, ty: &TypeElement) -> bool;
    fn is_public(&self, ty: &TypeElement) -> bool;
    /// True when the output will contain a page for `ty`
    fn is_linkable(&self, ty: &TypeElement) -> bool;
    fn is_included(&self, ty: &TypeElement) -> bool;
    /// URL of the page documenting the named type, if there is one
    fn type_page(&self, qualified_name: &str) -> Option<String>;
    fn declaring_type(&self, member: &Member) -> &TypeElement;
    fn full_body<'m>(&self, member: &'m Member) -> &'m str;
    fn is_property(&self, name: &str) -> bool;
    fn property_name(&self, name: &str) -> String;
    fn property_label(&self, name: &str) -> String;
    fn fully_qualified_name(&self, member: &Member) -> String;
    /// Return type of `member` as seen from `owner`, with type arguments substituted
    fn return_type(&self, owner: &TypeElement, member: &Member) -> TypeRef;
}

/// Classifier backed by the loaded model and the run's options
pub struct Utils<'a> {
    model: &'a Model,
    options: &'a RenderOptions,
}

impl<'a> Utils<'a> {
    pub fn new(model: &'a Model, options: &'a RenderOptions) -> Self {
        Self { model, options }
    }

    fn is_external(&self, ty: &TypeElement) -> bool {
        self.options.extern_base(&ty.name).is_some()
            && matches!(ty.visibility, Visibility::Public | Visibility::Protected)
    }
}

fn page_path(qualified_name: &str) -> String {
    format!("{}.html", qualified_name.replace('.', "/"))
}

impl ElementClassifier for Utils<'_> {
    fn is_class(&self, ty: &TypeElement) -> bool {
        ty.kind == TypeKind::Class
    }

    fn is_public(&self, ty: &TypeElement) -> bool {
        ty.visibility == Visibility::Public
    }

    fn is_linkable(&self, ty: &TypeElement) -> bool {
        self.is_included(ty) || self.is_external(ty)
    }

    fn is_included(&self, ty: &TypeElement) -> bool {
        ty.included
    }

    fn type_page(&self, qualified_name: &str) -> Option<String> {
        match self.model.get(qualified_name) {
            Some(ty) if self.is_included(ty) => Some(page_path(qualified_name)),
            Some(ty) if !self.is_external(ty) => None,
            _ => self.options.extern_base(qualified_name).map(|base| {
                format!("{}/{}", base.trim_end_matches('/'), page_path(qualified_name))
            }),
        }
    }

    fn declaring_type(&self, member: &Member) -> &TypeElement {
        self.model.get(&member.owner).unwrap_or_else(|| {
            panic!(
                "member `{}` has no enclosing type `{}` in the model",
                member.name, member.owner
            )
        })
    }

    fn full_body<'m>(&self, member: &'m Member) -> &'m str {
        member.body.trim()
    }

    fn is_property(&self, name: &str) -> bool {
        self.options.property_convention.property_name(name).is_some()
    }

    fn property_name(&self, name: &str) -> String {
        self.options
            .property_convention
            .property_name(name)
            .unwrap_or_else(|| name.to_string())
    }

    fn property_label(&self, name: &str) -> String {
        self.property_name(name)
    }

    fn fully_qualified_name(&self, member: &Member) -> String {
        format!("{}.{}", member.owner, member.name)
    }

    fn return_type(&self, owner: &TypeElement, member: &Member) -> TypeRef {
        if owner.name == member.owner {
            return member.return_type.clone();
        }
        match self.model.bindings(owner, &member.owner) {
            Some(bindings) => member.return_type.substitute(&bindings),
            None => member.return_type.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessor_convention() {
        let convention = PropertyConvention::Accessor;
        assert_eq!(convention.property_name("getColor").as_deref(), Some("color"));
        assert_eq!(convention.property_name("isEnabled").as_deref(), Some("enabled"));
        assert_eq!(convention.property_name("setURL").as_deref(), Some("URL"));
        assert_eq!(convention.property_name("get_color").as_deref(), Some("color"));
        assert_eq!(convention.property_name("getter"), None);
        assert_eq!(convention.property_name("get"), None);
        assert_eq!(convention.property_name("island"), None);
        assert_eq!(convention.property_name("color"), None);
    }

    #[test]
    fn test_javafx_convention() {
        let convention = PropertyConvention::Javafx;
        assert_eq!(convention.property_name("colorProperty").as_deref(), Some("color"));
        assert_eq!(convention.property_name("Property"), None);
        assert_eq!(convention.property_name("getColor"), None);
    }

    #[test]
    fn test_property_name_falls_back_to_raw_name() {
        let model = Model::default();
        let options = RenderOptions::default();
        let utils = Utils::new(&model, &options);
        assert_eq!(utils.property_name("isEnabled"), "enabled");
        assert_eq!(utils.property_name("toString"), "toString");
        assert!(!utils.is_property("toString"));
    }

    #[test]
    fn test_type_page_for_included_and_external_types() {
        let model = Model::from_json(
            r#"{"types": [
                {"name": "geom.Shape", "kind": "class"},
                {"name": "geom.Hidden", "kind": "class", "included": false},
                {"name": "ext.Base", "kind": "class", "included": false}
            ]}"#,
        )
        .unwrap();
        let options: RenderOptions =
            serde_json::from_str(r#"{"extern_links": {"ext": "https://docs.example/api/"}}"#).unwrap();
        let utils = Utils::new(&model, &options);

        assert_eq!(utils.type_page("geom.Shape").as_deref(), Some("geom/Shape.html"));
        assert_eq!(utils.type_page("geom.Hidden"), None);
        assert_eq!(
            utils.type_page("ext.Base").as_deref(),
            Some("https://docs.example/api/ext/Base.html")
        );
        assert!(utils.is_linkable(model.get("ext.Base").unwrap()));
        assert!(!utils.is_linkable(model.get("geom.Hidden").unwrap()));
    }

    #[test]
    #[should_panic(expected = "no enclosing type")]
    fn test_declaring_type_panics_on_orphan_member() {
        let model = Model::default();
        let options = RenderOptions::default();
        let utils = Utils::new(&model, &options);
        let orphan = Member {
            name: "getColor".to_string(),
            owner: "geom.Missing".to_string(),
            return_type: TypeRef::Primitive("int".to_string()),
            modifiers: vec![],
            body: String::new(),
            tags: vec![],
            deprecation: None,
        };
        utils.declaring_type(&orphan);
    }
}
