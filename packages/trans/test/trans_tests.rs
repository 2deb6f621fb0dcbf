//! Trans Renderer Tests
//!
//! Components mode, text children, element children and the behavior
//! without a markup parser.

use i18lite::resource::resource_from_json;
use i18lite::{I18n, InitOptions, LogLevel, MemoryLogger, TOptions};
use i18lite_trans::markup::ParseResult;
use i18lite_trans::{
    MarkupNode, MarkupParser, Trans, TransComponent, TransError, TransProps, ViewElement, ViewNode,
};
use serde_json::json;
use std::rc::Rc;

fn i18n() -> I18n {
    let mut i18n = I18n::new();
    i18n.init(
        InitOptions::new().with_lng("lt").with_resources(
            resource_from_json(json!({
                "lt": {
                    "translation": {
                        "greeting": "Sveiki!",
                        "profile_link": "<0>Sveiki, {{fullName}}! </0><1>Tavo profilis</1>.",
                        "nav": "Eiti į <0>profilį</0> arba <1>nustatymus</1>, <2>kitur</2>",
                        "read_more": "<0>Skaityti <b>daugiau</b></0> &amp; kita",
                        "broken": "<0>oops</1>",
                        "Hello {{fullName}}!": "Labas, {{fullName}}!"
                    }
                },
                "en": { "translation": {} }
            }))
            .unwrap(),
        ),
    );
    i18n.set_logger(Rc::new(MemoryLogger::new(LogLevel::Debug)));
    i18n
}

fn full_name() -> TOptions {
    TOptions::new().with("fullName", "John Doe")
}

fn profile_children() -> Vec<ViewNode> {
    vec![
        ViewNode::text("Hello {{ fullName }}! "),
        ViewElement::new("a")
            .with_attr("href", "/profile")
            .with_text("Your Profile")
            .into(),
        ViewNode::text("."),
    ]
}

mod text_children {
    use super::*;

    #[test]
    fn should_use_children_as_default_value() {
        let i18n = i18n();
        let result = Trans::new(&i18n).render(&TransProps::new("missing").with_text("Fallback"));
        assert_eq!(result.nodes, vec![ViewNode::text("Fallback")]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn should_prefer_translation_over_children() {
        let i18n = i18n();
        let result = Trans::new(&i18n).render(&TransProps::new("greeting").with_text("Hello!"));
        assert_eq!(result.text_content(), "Sveiki!");
    }
}

#[cfg(feature = "html-parser")]
mod element_children {
    use super::*;

    #[test]
    fn should_map_tags_onto_children() {
        let i18n = i18n();
        let props = TransProps::new("profile_link")
            .with_options(full_name())
            .with_children(profile_children());
        let result = Trans::new(&i18n).render(&props);

        assert!(result.errors.is_empty());
        assert_eq!(
            result.nodes,
            vec![
                ViewNode::text("Sveiki, John Doe! "),
                ViewElement::new("a")
                    .with_attr("href", "/profile")
                    .with_text("Tavo profilis")
                    .into(),
                ViewNode::text("."),
            ]
        );
    }

    #[test]
    fn should_interpolate_children_when_untranslated() {
        let mut i18n = i18n();
        let _ = i18n.change_language("en");
        let props = TransProps::new("profile_link")
            .with_options(full_name())
            .with_children(profile_children());
        let result = Trans::new(&i18n).render(&props);

        assert_eq!(
            result.nodes,
            vec![
                ViewNode::text("Hello John Doe! "),
                ViewElement::new("a")
                    .with_attr("href", "/profile")
                    .with_text("Your Profile")
                    .into(),
                ViewNode::text("."),
            ]
        );
    }

    #[test]
    fn should_use_child_text_as_key() {
        let i18n = i18n();
        let props = TransProps::new("not_there")
            .with_options(full_name())
            .with_children(vec![
                ViewElement::new("p").with_text("Hello {{fullName}}!").into(),
                ViewNode::text("static"),
            ]);
        let result = Trans::new(&i18n).render(&props);
        assert_eq!(
            result.nodes,
            vec![
                ViewElement::new("p").with_text("Labas, John Doe!").into(),
                ViewNode::text("static"),
            ]
        );
    }

    #[test]
    fn should_serialize_rendered_nodes() {
        let i18n = i18n();
        let props = TransProps::new("profile_link")
            .with_options(full_name())
            .with_children(profile_children());
        assert_eq!(
            Trans::new(&i18n).render(&props).to_markup(),
            "Sveiki, John Doe! <a href=\"/profile\">Tavo profilis</a>."
        );
    }
}

#[cfg(feature = "html-parser")]
mod components {
    use super::*;

    fn link(children: String) -> ViewNode {
        ViewElement::new("a")
            .with_attr("href", "/profile")
            .with_text(children)
            .into()
    }

    #[test]
    fn should_replace_mapped_tags() {
        let i18n = i18n();
        let props = TransProps::new("nav")
            .with_component("0", TransComponent::render(link))
            .with_component(
                "1",
                TransComponent::element(ViewElement::new("button").with_text("Settings")),
            );
        let result = Trans::new(&i18n).render(&props);

        assert!(result.errors.is_empty());
        assert_eq!(
            result.nodes,
            vec![
                ViewNode::text("Eiti į "),
                link("profilį".to_string()),
                ViewNode::text(" arba "),
                ViewElement::new("button").with_text("Settings").into(),
                ViewNode::text(", "),
                // unmapped tags collapse to their text
                ViewNode::text("kitur"),
            ]
        );
    }

    #[test]
    fn should_pass_inner_markup_to_render_components() {
        let i18n = i18n();
        let props = TransProps::new("read_more")
            .with_component("0", TransComponent::render(ViewNode::Text));
        let result = Trans::new(&i18n).render(&props);
        assert_eq!(
            result.nodes,
            vec![
                ViewNode::text("Skaityti <b>daugiau</b>"),
                ViewNode::text(" & kita"),
            ]
        );
    }

    #[test]
    fn should_report_malformed_markup() {
        let i18n = i18n();
        let props = TransProps::new("broken")
            .with_component("0", TransComponent::render(ViewNode::Text));
        let result = Trans::new(&i18n).render(&props);
        assert!(!result.errors.is_empty());
        assert!(result
            .errors
            .iter()
            .all(|err| matches!(err, TransError::Markup { key, .. } if key == "broken")));
        assert_eq!(result.nodes, vec![ViewNode::text("oops")]);
    }
}

mod missing_parser {
    use super::*;

    #[test]
    fn should_strip_tags_in_components_mode() {
        let i18n = i18n();
        let props = TransProps::new("nav")
            .with_component("0", TransComponent::render(ViewNode::Text));
        let result = Trans::without_parser(&i18n).render(&props);

        assert_eq!(
            result.nodes,
            vec![ViewNode::text("Eiti į profilį arba nustatymus, kitur")]
        );
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].is_missing_dependency());
    }

    #[test]
    fn should_fall_back_to_interpolation_for_children() {
        let i18n = i18n();
        let props = TransProps::new("profile_link")
            .with_options(full_name())
            .with_children(profile_children());
        let result = Trans::without_parser(&i18n).render(&props);

        assert_eq!(result.nodes[0], ViewNode::text("Hello John Doe! "));
        assert_eq!(result.nodes[2], ViewNode::text("."));
        assert!(result.errors[0].is_missing_dependency());
    }

    #[test]
    fn should_warn_through_the_instance_logger() {
        let mut i18n = i18n();
        let logger = Rc::new(MemoryLogger::new(LogLevel::Warn));
        i18n.set_logger(logger.clone());
        let props = TransProps::new("nav")
            .with_component("0", TransComponent::render(ViewNode::Text));
        Trans::without_parser(&i18n).render(&props);
        assert!(logger.contains(LogLevel::Warn, "markup parser is not available"));
    }

    #[test]
    fn should_not_need_a_parser_for_text_children() {
        let i18n = i18n();
        let result =
            Trans::without_parser(&i18n).render(&TransProps::new("greeting").with_text("x"));
        assert!(result.errors.is_empty());
        assert_eq!(result.text_content(), "Sveiki!");
    }
}

mod injected_parser {
    use super::*;

    /// Treats the whole input as one `<0>` element with a single text child
    struct FlatParser;

    impl MarkupParser for FlatParser {
        fn parse(&self, markup: &str) -> ParseResult {
            ParseResult::new(
                vec![MarkupNode::element(
                    "0",
                    vec![MarkupNode::text(markup.to_uppercase())],
                )],
                vec![],
            )
        }
    }

    #[test]
    fn should_use_the_injected_parser() {
        let i18n = i18n();
        let trans = Trans::with_parser(&i18n, Box::new(FlatParser));
        assert!(trans.has_parser());
        let props = TransProps::new("greeting")
            .with_component("x", TransComponent::render(ViewNode::Text));
        let result = trans.render(&props);
        assert_eq!(result.nodes, vec![ViewNode::text("<0>SVEIKI!</0>")]);
    }
}
