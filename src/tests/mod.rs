#[cfg(test)]
mod writer_tests {
    use mockall::predicate::eq;

    use crate::{
        Content, ContentBuilder, HtmlLinks, HtmlTree, LinkKind, MemberSummaryWriter, MemberWriterHelpers,
        MockLinkResolver, MockTextProvider, Model, PropertyDetailsWriter, PropertyWriter, Render,
        RenderContext, RenderOptions, TextKey, Utils,
    };

    const MODEL: &str = r#"{
        "types": [
            {"name": "lib.Base", "kind": "class", "included": false,
             "members": [
                {"name": "getLabel", "owner": "lib.Base", "return_type": {"declared": {"name": "java.lang.String"}},
                 "body": "The label shown next to the widget."}
             ]},
            {"name": "lib.Source", "kind": "interface",
             "members": [
                {"name": "isActive", "owner": "lib.Source", "return_type": {"primitive": "boolean"}}
             ]},
            {"name": "lib.Widget", "kind": "class",
             "supertypes": [{"declared": {"name": "lib.Base"}}, {"declared": {"name": "lib.Source"}}]}
        ]
    }"#;

    fn model() -> Model {
        Model::from_json(MODEL).unwrap()
    }

    fn inherited_label_key(summarize: bool, owner: &str) -> TextKey {
        match (summarize, owner) {
            (true, "lib.Base") => TextKey::PropertiesDeclaredInClass,
            (true, _) => TextKey::PropertiesDeclaredInInterface,
            (false, "lib.Base") => TextKey::PropertiesInheritedFromClass,
            (false, _) => TextKey::PropertiesInheritedFromInterface,
        }
    }

    #[test]
    fn test_inherited_label_selects_text_key() {
        let model = model();
        let widget = model.get("lib.Widget").unwrap();

        for summarize in [true, false] {
            for owner in ["lib.Base", "lib.Source"] {
                let options = RenderOptions {
                    summarize_overridden_methods: summarize,
                    ..RenderOptions::default()
                };
                let utils = Utils::new(&model, &options);
                let links = HtmlLinks::new(&utils);
                let mut resources = MockTextProvider::new();
                resources
                    .expect_text()
                    .with(eq(inherited_label_key(summarize, owner)))
                    .times(1)
                    .return_const("LABEL".to_string());
                let helpers = MemberWriterHelpers::new(&utils, &links, &resources, &options);
                let writer = PropertyWriter::new(&helpers, widget);

                let mut inherited = ContentBuilder::new();
                writer.add_inherited_summary_label(model.get(owner).unwrap(), &mut inherited);

                let html = inherited.render(&RenderContext::new());
                assert!(html.starts_with("<h3 id=\"properties-inherited-from-class-"));
                assert!(html.contains("LABEL&nbsp;"));
            }
        }
    }

    #[test]
    fn test_copied_description_links_to_declaring_type() {
        let model = model();
        let options = RenderOptions::default();
        let utils = Utils::new(&model, &options);
        let mut links = MockLinkResolver::new();
        links
            .expect_doc_link()
            .withf(|kind, owner, member, _label, strong| {
                *kind == LinkKind::PropertyCopy
                    && owner.name == "lib.Base"
                    && member.name == "getLabel"
                    && !*strong
            })
            .times(1)
            .returning(|_, _, _, label, _| label);
        let mut resources = MockTextProvider::new();
        resources
            .expect_text()
            .with(eq(TextKey::DescriptionFromClass))
            .times(1)
            .return_const("Copied from class:".to_string());
        let helpers = MemberWriterHelpers::new(&utils, &links, &resources, &options);
        let writer = PropertyWriter::new(&helpers, model.get("lib.Widget").unwrap());

        let member = &model.get("lib.Base").unwrap().members[0];
        let mut doc_tree = writer.property_doc_tree_header(member);
        writer.add_comments(member, &mut doc_tree);

        let text = doc_tree.render(&RenderContext::text());
        assert!(text.contains("Copied from class: lib.Base"));
        assert!(text.contains("The label shown next to the widget."));
    }

    #[test]
    fn test_summary_link_uses_property_label() {
        let model = model();
        let options = RenderOptions::default();
        let utils = Utils::new(&model, &options);
        let mut links = MockLinkResolver::new();
        links
            .expect_doc_link()
            .withf(|kind, _, _, label, _| {
                *kind == LinkKind::MemberSummary && *label == Content::text("label")
            })
            .times(1)
            .returning(|_, _, _, label, _| label);
        let resources = MockTextProvider::new();
        let helpers = MemberWriterHelpers::new(&utils, &links, &resources, &options);
        let widget = model.get("lib.Widget").unwrap();
        let writer = PropertyWriter::new(&helpers, widget);

        let mut cell = ContentBuilder::new();
        writer.add_summary_link(
            LinkKind::MemberSummary,
            widget,
            &model.get("lib.Base").unwrap().members[0],
            &mut cell,
        );
        assert_eq!(
            cell.render(&RenderContext::new()),
            "<code><span class=\"member-name-link\">label</span></code>"
        );
    }

    #[test]
    fn test_add_deprecated_leaves_doc_tree_untouched() {
        let model = model();
        let options = RenderOptions::default();
        let utils = Utils::new(&model, &options);
        let links = MockLinkResolver::new();
        let resources = MockTextProvider::new();
        let helpers = MemberWriterHelpers::new(&utils, &links, &resources, &options);
        let writer = PropertyWriter::new(&helpers, model.get("lib.Widget").unwrap());

        let member = &model.get("lib.Source").unwrap().members[0];
        let mut doc_tree = writer.property_doc_tree_header(member);
        let before: HtmlTree = doc_tree.clone();
        writer.add_deprecated(member, &mut doc_tree);
        assert_eq!(doc_tree, before);
    }
}
