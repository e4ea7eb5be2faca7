use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deprecation {
    #[serde(default)]
    pub since: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// A block tag attached to a member's documentation (`@since`, `@see`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTag {
    pub name: String,
    pub text: String,
}

/// A reference to a type as written in a signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(String),
    Variable(String),
    Declared {
        name: String,
        #[serde(default)]
        args: Vec<TypeRef>,
    },
    Array(Box<TypeRef>),
}

impl TypeRef {
    pub fn declared(name: impl Into<String>) -> Self {
        TypeRef::Declared {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Replaces type variables found in `bindings`, leaving unbound ones as-is.
    pub fn substitute(&self, bindings: &[(String, TypeRef)]) -> TypeRef {
        match self {
            TypeRef::Variable(var) => bindings
                .iter()
                .find(|(name, _)| name == var)
                .map(|(_, bound)| bound.clone())
                .unwrap_or_else(|| self.clone()),
            TypeRef::Declared { name, args } => TypeRef::Declared {
                name: name.clone(),
                args: args.iter().map(|a| a.substitute(bindings)).collect(),
            },
            TypeRef::Array(inner) => TypeRef::Array(Box::new(inner.substitute(bindings))),
            TypeRef::Primitive(_) => self.clone(),
        }
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeRef::Primitive(name) => write!(f, "{}", name),
            TypeRef::Variable(name) => write!(f, "{}", name),
            TypeRef::Declared { name, args } => {
                let simple = name.rsplit('.').next().unwrap_or(name);
                if args.is_empty() {
                    write!(f, "{}", simple)
                } else {
                    let arg_strs: Vec<String> = args.iter().map(|a| a.to_string()).collect();
                    write!(f, "{}<{}>", simple, arg_strs.join(", "))
                }
            }
            TypeRef::Array(inner) => write!(f, "{}[]", inner),
        }
    }
}

/// A property accessor declared on some type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    /// Qualified name of the declaring type
    pub owner: String,
    pub return_type: TypeRef,
    #[serde(default)]
    pub modifiers: Vec<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<DocTag>,
    #[serde(default)]
    pub deprecation: Option<Deprecation>,
}

fn default_included() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeElement {
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub visibility: Visibility,
    /// Whether this run generates a page for the type
    #[serde(default = "default_included")]
    pub included: bool,
    #[serde(default)]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub supertypes: Vec<TypeRef>,
    #[serde(default)]
    pub members: Vec<Member>,
}

impl TypeElement {
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    pub fn package(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) => &self.name[..idx],
            None => "",
        }
    }
}
