//! ARIA Roles
//!
//! Role table: abstract roles (never valid in markup) and interactive
//! roles. Interactive roles are the concrete descendants of `widget`,
//! except `progressbar` (its value is always read-only), plus `toolbar`
//! (it manages `aria-activedescendant` like a composite widget).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Role definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleDefinition {
    pub name: &'static str,
    pub abstract_role: bool,
    pub interactive: bool,
}

const fn abstract_role(name: &'static str) -> RoleDefinition {
    RoleDefinition { name, abstract_role: true, interactive: false }
}

const fn widget(name: &'static str) -> RoleDefinition {
    RoleDefinition { name, abstract_role: false, interactive: true }
}

const fn role(name: &'static str) -> RoleDefinition {
    RoleDefinition { name, abstract_role: false, interactive: false }
}

const ROLES: &[RoleDefinition] = &[
    // Abstract
    abstract_role("command"),
    abstract_role("composite"),
    abstract_role("input"),
    abstract_role("landmark"),
    abstract_role("range"),
    abstract_role("roletype"),
    abstract_role("section"),
    abstract_role("sectionhead"),
    abstract_role("select"),
    abstract_role("structure"),
    abstract_role("widget"),
    abstract_role("window"),
    // Widgets
    widget("button"),
    widget("checkbox"),
    widget("columnheader"),
    widget("combobox"),
    widget("grid"),
    widget("gridcell"),
    widget("link"),
    widget("listbox"),
    widget("menu"),
    widget("menubar"),
    widget("menuitem"),
    widget("menuitemcheckbox"),
    widget("menuitemradio"),
    widget("option"),
    widget("radio"),
    widget("radiogroup"),
    widget("row"),
    widget("rowheader"),
    widget("scrollbar"),
    widget("searchbox"),
    widget("separator"),
    widget("slider"),
    widget("spinbutton"),
    widget("switch"),
    widget("tab"),
    widget("tablist"),
    widget("textbox"),
    widget("toolbar"),
    widget("tree"),
    widget("treegrid"),
    widget("treeitem"),
    widget("doc-backlink"),
    widget("doc-biblioref"),
    widget("doc-glossref"),
    widget("doc-noteref"),
    // Document structure, landmarks, live regions, windows
    role("alert"),
    role("alertdialog"),
    role("application"),
    role("article"),
    role("banner"),
    role("blockquote"),
    role("caption"),
    role("cell"),
    role("code"),
    role("complementary"),
    role("contentinfo"),
    role("definition"),
    role("deletion"),
    role("dialog"),
    role("directory"),
    role("document"),
    role("emphasis"),
    role("feed"),
    role("figure"),
    role("form"),
    role("generic"),
    role("group"),
    role("heading"),
    role("img"),
    role("insertion"),
    role("list"),
    role("listitem"),
    role("log"),
    role("main"),
    role("mark"),
    role("marquee"),
    role("math"),
    role("meter"),
    role("navigation"),
    role("none"),
    role("note"),
    role("paragraph"),
    role("presentation"),
    role("progressbar"),
    role("region"),
    role("rowgroup"),
    role("search"),
    role("status"),
    role("strong"),
    role("subscript"),
    role("superscript"),
    role("table"),
    role("tabpanel"),
    role("term"),
    role("time"),
    role("timer"),
    role("tooltip"),
    // Digital publishing
    role("doc-abstract"),
    role("doc-acknowledgments"),
    role("doc-afterword"),
    role("doc-appendix"),
    role("doc-biblioentry"),
    role("doc-bibliography"),
    role("doc-chapter"),
    role("doc-colophon"),
    role("doc-conclusion"),
    role("doc-cover"),
    role("doc-credit"),
    role("doc-credits"),
    role("doc-dedication"),
    role("doc-endnote"),
    role("doc-endnotes"),
    role("doc-epigraph"),
    role("doc-epilogue"),
    role("doc-errata"),
    role("doc-example"),
    role("doc-footnote"),
    role("doc-foreword"),
    role("doc-glossary"),
    role("doc-index"),
    role("doc-introduction"),
    role("doc-notice"),
    role("doc-pagebreak"),
    role("doc-pagelist"),
    role("doc-part"),
    role("doc-preface"),
    role("doc-prologue"),
    role("doc-pullquote"),
    role("doc-qna"),
    role("doc-subtitle"),
    role("doc-tip"),
    role("doc-toc"),
    // Graphics
    role("graphics-document"),
    role("graphics-object"),
    role("graphics-symbol"),
];

static ROLE_TABLE: Lazy<HashMap<&'static str, &'static RoleDefinition>> =
    Lazy::new(|| ROLES.iter().map(|role| (role.name, role)).collect());

/// Look up a single role name (case-insensitive)
pub fn role_definition(name: &str) -> Option<&'static RoleDefinition> {
    ROLE_TABLE.get(name.to_ascii_lowercase().as_str()).copied()
}

pub fn is_abstract_role(name: &str) -> bool {
    role_definition(name).is_some_and(|role| role.abstract_role)
}

/// Unknown roles are not interactive
pub fn is_interactive_role_name(name: &str) -> bool {
    role_definition(name).is_some_and(|role| role.interactive)
}

/// First known role of a space-separated role fallback list. Abstract
/// roles are not valid in markup and fall through to the next token.
pub fn first_known_role(value: &str) -> Option<&'static RoleDefinition> {
    value
        .split_whitespace()
        .filter(|token| !is_abstract_role(token))
        .find_map(role_definition)
}
