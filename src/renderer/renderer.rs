use anyhow::{anyhow, Result};
use tracing::info;

use crate::config::RenderOptions;
use crate::links::HtmlLinks;
use crate::markup::*;
use crate::model::*;
use crate::renderer::traits::*;
use crate::resources::TextProvider;
use crate::utils::Utils;
use crate::writer::*;

/// Renders the property regions of a type page from a loaded model
pub struct PageRenderer<'a> {
    model: &'a Model,
    options: &'a RenderOptions,
    resources: &'a dyn TextProvider,
}

impl<'a> PageRenderer<'a> {
    pub fn new(model: &'a Model, options: &'a RenderOptions, resources: &'a dyn TextProvider) -> Self {
        Self {
            model,
            options,
            resources,
        }
    }

    /// Summary region, then details region, then (optionally) the deprecated list
    pub fn build(&self, ty: &TypeElement, include_deprecated: bool) -> ContentBuilder {
        let utils = Utils::new(self.model, self.options);
        let links = HtmlLinks::new(&utils);
        let helpers = MemberWriterHelpers::new(&utils, &links, self.resources, self.options);
        let writer = PropertyWriter::new(&helpers, ty);
        let builder = PropertySectionBuilder::new(&writer, &helpers, self.model, ty);

        let mut page = ContentBuilder::new();

        let mut summary = ContentBuilder::new();
        builder.build_summary(&mut summary);
        page.add(summary);

        let mut details = ContentBuilder::new();
        builder.build_details(&mut details);
        page.add(details);

        if include_deprecated {
            let mut deprecated = ContentBuilder::new();
            builder.build_deprecated(&mut deprecated);
            page.add(deprecated);
        }

        page
    }

    pub fn render(&self, type_name: &str, include_deprecated: bool, context: &RenderContext) -> Result<String> {
        let ty = self
            .model
            .get(type_name)
            .ok_or_else(|| anyhow!("type `{}` not found in model", type_name))?;

        info!(type_name, "rendering property sections");
        Ok(self.build(ty, include_deprecated).render(context))
    }
}
