//! Element construction and rendering through the public API.

use indoc::indoc;
use markupify::tags::{
    TagDescriptor, br, button, div, form, h1, hr, input, label, li, p, script, span, style, ul,
};
use markupify::{
    Attributes, ErrorKind, HtmlWriter, Markup, MarkupError, Node, SerializeOptions,
    create_element, to_string, to_string_pretty,
};

const NO_ATTRS: [(&str, &str); 0] = [];

#[test]
fn empty_anchor() {
    markupify_testhelpers::setup();

    let a = create_element("a", (), NO_ATTRS, false).unwrap();
    insta::assert_snapshot!(a.render(), @"<a></a>");
}

#[test]
fn void_rule_has_no_closing_tag() {
    markupify_testhelpers::setup();

    let rule = create_element("hr", (), NO_ATTRS, true).unwrap();
    insta::assert_snapshot!(rule.render(), @"<hr />");
    assert_eq!(rule.render(), hr().render());
}

#[test]
fn void_elements_refuse_children() {
    markupify_testhelpers::setup();

    let mut line_break = br();
    let err = line_break.add_child(span("x")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Structural);
    assert!(matches!(err, MarkupError::VoidContent { ref tag } if tag == "br"));
    assert!(line_break.children().is_empty());
    assert_eq!(line_break.render(), "<br />");

    let err = create_element("img", "caption", NO_ATTRS, true).unwrap_err();
    assert!(err.is_structural());

    let err = br().with_children("text").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn empty_content_on_void_is_fine() {
    markupify_testhelpers::setup();

    let mut rule = hr();
    rule.add_content(()).unwrap();
    rule.add_content(Vec::<Node>::new()).unwrap();
    assert_eq!(rule.render(), "<hr />");
}

#[test]
fn collision_marker_and_hyphenation() {
    markupify_testhelpers::setup();

    let el = div("x")
        .with_attrs([("_class", "card"), ("data_user_id", "7"), ("_for", "f")])
        .unwrap();
    insta::assert_snapshot!(el.render(), @r#"<div class="card" data-user-id="7" for="f">x</div>"#);
}

#[test]
fn reserved_words_are_accepted_directly() {
    markupify_testhelpers::setup();

    let el = label("Name").with_attr("for", "name").unwrap();
    assert_eq!(el.render(), r#"<label for="name">Name</label>"#);
}

#[test]
fn malformed_keys_are_attribute_errors() {
    markupify_testhelpers::setup();

    let err = div(()).with_attr("bad key", "x").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeKey);

    let err = create_element("p", (), [("", "x")], false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeKey);
}

#[test]
fn invalid_tag_names_are_rejected() {
    markupify_testhelpers::setup();

    for name in ["", "two words", "a>b", "x/y"] {
        let err = create_element(name, (), NO_ATTRS, false).unwrap_err();
        assert!(matches!(err, MarkupError::InvalidTagName { .. }), "{name:?}");
    }
}

#[test]
fn compact_form() {
    markupify_testhelpers::setup();

    let form = form(vec![
        label("Name").with_attr("_for", "name").unwrap(),
        input()
            .with_attrs([("_type", "text"), ("id", "name"), ("name", "name")])
            .unwrap()
            .with_attr("required", true)
            .unwrap()
            .with_attr("hidden", false)
            .unwrap(),
        button("Send").with_attr("_type", "submit").unwrap(),
    ])
    .with_attrs([("action", "/submit"), ("method", "post")])
    .unwrap();

    insta::assert_snapshot!(
        form.render(),
        @r#"<form action="/submit" method="post"><label for="name">Name</label><input type="text" id="name" name="name" required /><button type="submit">Send</button></form>"#
    );
}

#[test]
fn pretty_nested_list() {
    markupify_testhelpers::setup();

    let list = ul(vec![li("one"), li(span("two"))])
        .with_attr("id", "items")
        .unwrap();

    let expected = indoc! {r#"
        <ul id="items">
         <li>
          one
         </li>
         <li>
          <span>
           two
          </span>
         </li>
        </ul>
    "#};
    assert_eq!(list.render_pretty(), expected);
}

#[test]
fn pretty_keeps_style_contents_on_one_line() {
    markupify_testhelpers::setup();

    let el = div(style("p > a { color: red; }"));
    let expected = indoc! {"
        <div>
         <style>p > a { color: red; }</style>
        </div>
    "};
    assert_eq!(el.render_pretty(), expected);
}

#[test]
fn inline_styles_accumulate() {
    markupify_testhelpers::setup();

    let mut el = p("hi").with_style("color", "red").unwrap();
    el.add_styles([("font_size", "12px"), ("margin", "0")])
        .unwrap();
    insta::assert_snapshot!(el.render(), @r#"<p style="color: red;font-size: 12px;margin: 0;">hi</p>"#);
}

#[test]
fn html_style_void_elements() {
    markupify_testhelpers::setup();

    let options = SerializeOptions::new().self_closing_void(false);
    let el = div(vec![p("a"), br(), p("b")]);
    assert_eq!(
        el.render_with_options(&options),
        "<div><p>a</p><br><p>b</p></div>"
    );
}

#[test]
fn text_is_escaped_unless_disabled() {
    markupify_testhelpers::setup();

    let el = p("fish & chips <3");
    assert_eq!(el.render(), "<p>fish &amp; chips &lt;3</p>");

    let raw = SerializeOptions::new().escape(false);
    assert_eq!(el.render_with_options(&raw), "<p>fish & chips <3</p>");
}

#[test]
fn custom_descriptor_restricts_attributes() {
    markupify_testhelpers::setup();

    const BADGE: TagDescriptor = TagDescriptor::element("x-badge").allow(&["tone"]);

    let badge = BADGE
        .create("new", [("tone", "info"), ("_class", "pill"), ("data_id", "3")])
        .unwrap();
    assert_eq!(
        badge.render(),
        r#"<x-badge tone="info" class="pill" data-id="3">new</x-badge>"#
    );

    let err = BADGE.create((), [("href", "/")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AttributeKey);
    assert!(matches!(
        err,
        MarkupError::AttributeNotAllowed { ref tag, ref key } if tag == "x-badge" && key == "href"
    ));
}

#[test]
fn headings_by_level() {
    markupify_testhelpers::setup();

    let heading = markupify::tags::h(2, "Section").unwrap();
    assert_eq!(heading.render(), "<h2>Section</h2>");
    assert_eq!(h1("x").render(), "<h1>x</h1>");
    assert!(markupify::tags::h(9, "x").is_err());
}

#[test]
fn user_text_cannot_break_out_of_its_construct() {
    markupify_testhelpers::setup();

    let el = div(vec![
        Node::comment("end --> <b>x</b>"),
        script("document.write('</script>');").into(),
    ]);
    let html = el.render();
    assert_eq!(html.matches("-->").count(), 1);
    assert_eq!(html.matches("</script>").count(), 1);
    insta::assert_snapshot!(html, @r"<div><!-- end - -> <b>x</b> --><script>document.write('<\/script>');</script></div>");
}

#[test]
fn pretty_block_comment_and_multiline_text() {
    markupify_testhelpers::setup();

    let el = div(vec![
        Node::block_comment("generated\ndo not edit"),
        p("first line\nsecond line").into(),
    ]);
    let expected = indoc! {"
        <div>
         <!--
          generated
          do not edit
         -->
         <p>
          first line
          second line
         </p>
        </div>
    "};
    assert_eq!(el.render_pretty(), expected);
}

struct Breadcrumbs<'a>(&'a [&'a str]);

impl Markup for Breadcrumbs<'_> {
    fn write_markup(&self, writer: &mut HtmlWriter) {
        let mut attrs = Attributes::new();
        attrs.set("aria_label", "breadcrumb").unwrap();
        writer.write_element_with("nav", &attrs, false, |w| {
            for (i, item) in self.0.iter().enumerate() {
                if i > 0 {
                    w.write_text("/");
                }
                w.write_text(item);
            }
        });
    }
}

#[test]
fn custom_markup_types_share_the_writer() {
    markupify_testhelpers::setup();

    let crumbs = Breadcrumbs(&["Home", "Docs"]);
    insta::assert_snapshot!(to_string(&crumbs), @r#"<nav aria-label="breadcrumb">Home/Docs</nav>"#);
    assert_eq!(
        to_string_pretty(&crumbs),
        "<nav aria-label=\"breadcrumb\">\n Home\n /\n Docs\n</nav>\n"
    );
}
