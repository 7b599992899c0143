//! Page assembly for the debug and release documents.

use lamina_markup::{Child, Element};

use crate::config::AppConfig;

/// Path prefix from the debug output directory to the source directory,
/// assumed to be siblings.
const DEBUG_SRC_PREFIX: &str = "../src/";

/// External script reference element.
fn script_ref(url: &str) -> Element {
    Element::new("script")
        .attr("type", "text/javascript")
        .attr("src", url)
}

/// Shared document shell: a head holding the configured title, and a body
/// holding the dependency script references followed by the variant
/// content.
pub fn page_shell(config: &AppConfig, content: impl Into<Child>) -> Element {
    let dependencies: Vec<Element> = config
        .dependencies
        .iter()
        .map(|url| script_ref(url))
        .collect();

    Element::new("html")
        .append(Element::new("head").append(Element::new("title").text(config.app_title.clone())))
        .append(Element::new("body").append(dependencies).append(content))
}

/// Debug document: one external script reference per source file, in
/// listing order.
pub fn debug_document(config: &AppConfig, sources: &[String]) -> Element {
    let scripts: Vec<Element> = sources
        .iter()
        .map(|file| script_ref(&format!("{DEBUG_SRC_PREFIX}{file}")))
        .collect();

    page_shell(config, scripts)
}

/// Release document: a single embedded script inlining the source
/// contents joined by one newline, in listing order. With no sources the
/// shell is emitted without an inline script.
pub fn release_document(config: &AppConfig, contents: &[String]) -> Element {
    let script = (!contents.is_empty()).then(|| {
        Element::new("script")
            .attr("type", "text/javascript")
            .text(contents.join("\n"))
    });

    page_shell(config, script)
}
