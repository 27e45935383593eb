//! Rule tests over whole elements and trees
//!
//! Valid/invalid element corpora per rule, plus end-to-end runs of the
//! default rule set.

use fos_lint::rules::{AriaUnsupportedElements, ControlHasAssociatedLabel, OnClickHasFocus};
use fos_lint::{ControlLabelOptions, LintConfig, Linter, Rule, Target, Verdict};
use fos_markup::{BinaryOp, ElementNode, Expr, MarkupDocument, UnaryOp};

const FOCUS_MESSAGE: &str = "An non-interactive element with an onClick handler and an \
    interactive role must be focusable. Either set the tabIndex property to a valid value \
    (usually 0) or use an element type which is inherently focusable such as `button`.";

fn el(name: &str) -> ElementNode {
    ElementNode::new(name)
}

/// `<name onClick={() => void 0}>`
fn clicky(name: &str) -> ElementNode {
    el(name).attr("onClick", Expr::Function)
}

fn fails(rule: &dyn Rule, element: &ElementNode) -> bool {
    rule.check(element).unwrap().is_fail()
}

fn rule_names(report: &fos_lint::LintReport) -> Vec<&'static str> {
    report.diagnostics.iter().map(|d| d.rule).collect()
}

// ============================================================================
// ONCLICK-HAS-FOCUS
// ============================================================================

#[test]
fn test_onclick_valid_corpus() {
    let minus_one = Expr::unary(UnaryOp::Minus, Expr::num(1.0));
    let compare = |op, left, right| Expr::binary(op, left, right);

    let valid = vec![
        el("div"),
        clicky("div").flag("aria-hidden"),
        clicky("div").attr("aria-hidden", compare(BinaryOp::LooseEq, Expr::bool(true), Expr::bool(true))),
        clicky("div").attr("aria-hidden", compare(BinaryOp::StrictEq, Expr::bool(true), Expr::bool(true))),
        clicky("div").attr("aria-hidden", compare(BinaryOp::StrictNe, Expr::ident("hidden"), Expr::bool(false))),
        clicky("div").attr("aria-hidden", compare(BinaryOp::Lt, Expr::num(1.0), Expr::num(2.0))),
        clicky("div").attr("aria-hidden", compare(BinaryOp::Ge, Expr::num(2.0), Expr::num(1.0))),
        clicky("div"),
        clicky("div").attr("tabIndex", Expr::Undefined),
        clicky("div").str_attr("tabIndex", "bad"),
        clicky("div").attr("role", Expr::Undefined),
        clicky("div").str_attr("role", "section"),
        clicky("div").attr("aria-hidden", Expr::bool(false)),
        clicky("div").spread(Expr::ident("props")),
        clicky("input").str_attr("type", "text"),
        clicky("input").str_attr("type", "hidden").str_attr("tabIndex", "-1"),
        clicky("input").str_attr("type", "hidden").attr("tabIndex", minus_one),
        clicky("input"),
        clicky("input").str_attr("role", "combobox"),
        clicky("button").str_attr("className", "foo"),
        clicky("option").str_attr("className", "foo"),
        clicky("select").str_attr("className", "foo"),
        clicky("area").str_attr("href", "#"),
        clicky("area"),
        clicky("textarea"),
        el("a").str_attr("onClick", "showNextPage();").text("Next page"),
        clicky("a"),
        clicky("a").str_attr("tabIndex", "0"),
        clicky("a").attr("tabIndex", Expr::ident("dynamicTabIndex")),
        clicky("a").str_attr("role", "button").str_attr("href", "#"),
        clicky("a").str_attr("href", "http://x.y.z").str_attr("role", "button"),
        el("TestComponent").attr("onClick", Expr::ident("doFoo")),
        el("span").str_attr("onClick", "submitForm();").text("Submit"),
        el("span").str_attr("onClick", "doSomething();").str_attr("tabIndex", "-1"),
        clicky("section"),
        clicky("main"),
        clicky("div").str_attr("role", "button").str_attr("tabIndex", "0"),
        clicky("div").str_attr("role", "checkbox").str_attr("tabIndex", "0"),
        clicky("div").str_attr("role", "textbox").str_attr("tabIndex", "0"),
        clicky("div").str_attr("role", "button").spread(Expr::ident("props")),
        clicky("Foo.Bar").attr("aria-hidden", Expr::bool(false)),
        clicky("Input").str_attr("type", "hidden"),
    ];

    for element in &valid {
        assert!(!fails(&OnClickHasFocus, element), "unexpected diagnostic for {:?}", element);
    }
}

#[test]
fn test_onclick_invalid_corpus() {
    let mut invalid = vec![clicky("span").str_attr("role", "button"), clicky("a").str_attr("role", "button")];
    for role in [
        "button", "checkbox", "link", "gridcell", "menuitem", "menuitemcheckbox", "menuitemradio",
        "option", "radio", "searchbox", "slider", "spinbutton", "switch", "tab", "textbox", "treeitem",
    ] {
        invalid.push(clicky("div").str_attr("role", role));
    }

    for element in &invalid {
        let diagnostics = OnClickHasFocus.check(element).unwrap().into_diagnostics();
        assert_eq!(diagnostics.len(), 1, "expected one diagnostic for {:?}", element);
        assert_eq!(diagnostics[0].message, FOCUS_MESSAGE);
        assert_eq!(diagnostics[0].target, Target::OpeningElement);
    }
}

// ============================================================================
// ARIA-UNSUPPORTED-ELEMENTS
// ============================================================================

#[test]
fn test_reserved_elements_reject_aria() {
    for tag in fos_a11y::dom::reserved_elements() {
        let element = el(tag).str_attr("aria-hidden", "true").str_attr("ROLE", "button").str_attr("data-x", "1");
        let diagnostics = AriaUnsupportedElements.check(&element).unwrap().into_diagnostics();
        assert_eq!(diagnostics.len(), 2, "<{}>", tag);
        assert_eq!(diagnostics[0].target, Target::Attribute("aria-hidden".into()));
        assert_eq!(diagnostics[1].target, Target::Attribute("ROLE".into()));
    }
}

#[test]
fn test_reserved_elements_accept_other_attributes() {
    let verdict = AriaUnsupportedElements.check(&el("meta").str_attr("data-x", "1")).unwrap();
    assert_eq!(verdict, Verdict::Pass);
    assert_eq!(
        AriaUnsupportedElements.check(&el("div").str_attr("aria-hidden", "true")).unwrap(),
        Verdict::NotApplicable
    );
}

// ============================================================================
// CONTROL-HAS-ASSOCIATED-LABEL
// ============================================================================

#[test]
fn test_control_label_corpus() {
    let rule = ControlHasAssociatedLabel::new(ControlLabelOptions::default());

    let valid = [
        el("button").text("Save"),
        el("button").attr("aria-label", Expr::ident("dynamicLabel")),
        el("button").spread(Expr::ident("props")),
        el("button").str_attr("aria-label", "false"),
        el("button").child(el("span").text("Save")),
        el("input").str_attr("type", "hidden"),
        el("div").str_attr("role", "button").str_attr("title", "Save"),
        el("img").str_attr("alt", "Logo"),
        el("Button"),
    ];
    for element in &valid {
        assert!(!fails(&rule, element), "unexpected diagnostic for {:?}", element);
    }

    let invalid = [
        el("button"),
        el("button").text("  "),
        el("input"),
        el("textarea"),
        el("div").str_attr("role", "checkbox"),
        el("button").child(el("span").child(el("span").child(el("span").text("Save")))),
    ];
    for element in &invalid {
        assert!(fails(&rule, element), "expected diagnostic for {:?}", element);
    }
}

#[test]
fn test_control_label_depth_clamp() {
    let mut deep = el("span").text("deep");
    for _ in 0..30 {
        deep = el("span").child(deep);
    }
    let control = el("button").child(deep);

    let verdict = |depth| {
        ControlHasAssociatedLabel::new(ControlLabelOptions { depth: Some(depth), ..Default::default() })
            .check(&control)
            .unwrap()
    };
    assert_eq!(verdict(1000), verdict(25));
    assert!(verdict(1000).is_fail());
}

// ============================================================================
// END TO END
// ============================================================================

#[test]
fn test_end_to_end_role_button_div() {
    let linter = Linter::default();

    let report = linter.lint_tree(&clicky("div").str_attr("role", "button"));
    assert_eq!(rule_names(&report), ["control-has-associated-label", "onclick-has-focus"]);

    let report = linter.lint_tree(&clicky("div").str_attr("role", "button").str_attr("tabIndex", "0"));
    assert_eq!(rule_names(&report), ["control-has-associated-label"]);

    let report = linter.lint_tree(&clicky("a").str_attr("href", "#").text("Home"));
    assert!(report.is_clean());

    let report = linter.lint_tree(&el("span").str_attr("onClick", "x()"));
    assert!(report.is_clean());
}

#[test]
fn test_end_to_end_document() {
    let json = r##"{
        "source": "Page.jsx",
        "elements": [{
            "name": "html",
            "attributes": [{"type": "attribute", "name": "aria-hidden", "value": {"type": "string", "value": "true"}}],
            "children": [
                {"type": "text", "value": "\n"},
                {
                    "type": "element",
                    "name": "div",
                    "attributes": [
                        {"type": "attribute", "name": "role", "value": {"type": "string", "value": "button"}},
                        {"type": "attribute", "name": "onClick", "value": {"type": "function"}},
                        {"type": "attribute", "name": "aria-pressed", "value": {"type": "string", "value": "sometimes"}}
                    ],
                    "children": [{"type": "text", "value": "Toggle"}],
                    "span": {"start": 10, "end": 60}
                }
            ]
        }]
    }"##;
    let document = MarkupDocument::from_json(json).unwrap();
    let report = Linter::default().lint_document(&document);

    assert_eq!(report.elements_checked, 2);
    assert_eq!(
        rule_names(&report),
        ["aria-unsupported-elements", "onclick-has-focus", "aria-proptypes"]
    );
    assert!(report.diagnostics.iter().all(|d| d.source.as_deref() == Some("Page.jsx")));
    assert_eq!(
        report.diagnostics[2].message,
        "The value for aria-pressed must be a boolean or the string \"mixed\"."
    );
}

#[test]
fn test_config_disables_rules() {
    let config = LintConfig::from_json(r#"{"onclick-has-focus": {"enabled": false}}"#).unwrap();
    let report = Linter::new(&config).lint_tree(&clicky("div").str_attr("role", "button").text("Go"));
    assert!(report.is_clean());
}

#[test]
fn test_results_are_idempotent() {
    let linter = Linter::default();
    let tree = el("div")
        .child(clicky("div").str_attr("role", "button"))
        .child(el("meta").str_attr("role", "button"));
    assert_eq!(linter.lint_tree(&tree), linter.lint_tree(&tree));
}
