use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::model::types::*;

// On-disk layout of a symbol model
#[derive(Debug, Deserialize)]
struct RawModel {
    types: Vec<TypeElement>,
}

/// Validated symbol model: every type indexed by qualified name
#[derive(Debug, Clone, Default)]
pub struct Model {
    types: Vec<TypeElement>,
    index: HashMap<String, usize>,
}

impl Model {
    pub fn new(types: Vec<TypeElement>) -> Result<Self> {
        let mut index = HashMap::new();
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.name.clone(), i).is_some() {
                bail!("duplicate type `{}` in model", ty.name);
            }
        }

        for ty in &types {
            for member in &ty.members {
                if member.owner != ty.name {
                    bail!(
                        "member `{}` listed under `{}` declares owner `{}`",
                        member.name,
                        ty.name,
                        member.owner
                    );
                }
            }
        }

        debug!(types = types.len(), "model indexed");
        Ok(Self { types, index })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawModel = serde_json::from_str(json).context("failed to parse model JSON")?;
        Self::new(raw.types)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read model {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("invalid model {}", path.display()))
    }

    pub fn get(&self, name: &str) -> Option<&TypeElement> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    pub fn types(&self) -> &[TypeElement] {
        &self.types
    }

    /// Supertypes reachable from `ty`, nearest first, each visited once
    pub fn supertypes_of(&self, ty: &TypeElement) -> Vec<&TypeElement> {
        let mut seen: Vec<&str> = vec![ty.name.as_str()];
        let mut queue: Vec<&TypeElement> = vec![ty];
        let mut result = Vec::new();
        let mut cursor = 0;

        while cursor < queue.len() {
            let current = queue[cursor];
            cursor += 1;
            for sup in &current.supertypes {
                let TypeRef::Declared { name, .. } = sup else {
                    continue;
                };
                if seen.contains(&name.as_str()) {
                    continue;
                }
                seen.push(name);
                if let Some(found) = self.get(name) {
                    queue.push(found);
                    result.push(found);
                }
            }
        }

        result
    }

    /// Type-variable bindings that map `target`'s parameters into `from`'s view
    pub fn bindings(&self, from: &TypeElement, target: &str) -> Option<Vec<(String, TypeRef)>> {
        self.bindings_with(from, target, &[], &mut Vec::new())
    }

    fn bindings_with<'a>(
        &'a self,
        from: &'a TypeElement,
        target: &str,
        outer: &[(String, TypeRef)],
        visiting: &mut Vec<&'a str>,
    ) -> Option<Vec<(String, TypeRef)>> {
        if from.name == target {
            return Some(outer.to_vec());
        }
        if visiting.contains(&from.name.as_str()) {
            return None;
        }
        visiting.push(&from.name);

        for sup in &from.supertypes {
            let TypeRef::Declared { name, args } = sup else {
                continue;
            };
            let Some(sup_ty) = self.get(name) else {
                continue;
            };
            let bound: Vec<(String, TypeRef)> = sup_ty
                .type_params
                .iter()
                .zip(args.iter())
                .map(|(param, arg)| (param.clone(), arg.substitute(outer)))
                .collect();
            if let Some(found) = self.bindings_with(sup_ty, target, &bound, visiting) {
                return Some(found);
            }
        }

        visiting.pop();
        None
    }
}
