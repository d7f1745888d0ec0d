//! Forest → static markup.

use pagewright_tree::{Forest, Payload, PlacedInstance};

use crate::export::{ExportConfig, SCRIPT_FILE, STYLESHEET_FILE};

/// Serialize every container, in forest order, as concatenated fragments.
///
/// An empty forest, or one whose containers are all empty, yields `""`.
pub fn serialize(forest: &Forest) -> String {
    let mut out = String::new();
    for (_, nodes) in forest.containers() {
        for node in nodes {
            write_node(&mut out, node);
        }
    }
    out
}

fn write_node(out: &mut String, node: &PlacedInstance) {
    let shape = node.kind().shape();
    let element = shape.element();

    out.push('<');
    out.push_str(element);
    out.push('>');

    if !shape.wraps_children() {
        write_payload(out, node.payload());
    }
    // Leaves normally have no children; if a loaded snapshot gives them some,
    // they still nest one level down.
    for child in node.children() {
        write_node(out, child);
    }

    out.push_str("</");
    out.push_str(element);
    out.push('>');
}

fn write_payload(out: &mut String, payload: &Payload) {
    match payload {
        Payload::Text(text) => out.push_str(&escape_html(text)),
        Payload::Markup(markup) => out.push_str(markup),
        Payload::Empty => {}
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Full HTML document around the serialized fragments.
///
/// Links the stylesheet and script only when the config exports them.
pub fn document(forest: &Forest, config: &ExportConfig) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>");
    out.push_str(&escape_html(&config.title));
    out.push_str("</title>\n");
    if config.stylesheet {
        out.push_str(&format!("<link rel=\"stylesheet\" href=\"{STYLESHEET_FILE}\">\n"));
    }
    out.push_str("</head>\n<body>\n");
    out.push_str(&serialize(forest));
    out.push('\n');
    if config.script {
        out.push_str(&format!("<script src=\"{SCRIPT_FILE}\"></script>\n"));
    }
    out.push_str("</body>\n</html>\n");
    out
}

/// Base stylesheet for the exported elements.
///
/// Banners serialize as a bare `<div>`, so they are styled by element rather
/// than by class. Section rules mirror the builder's drop-zone look.
pub fn stylesheet() -> &'static str {
    r#"body {
  font-family: Arial, sans-serif;
  margin: 0;
  padding: 0;
}
header {
  background-color: #4caf50;
  color: white;
  padding: 20px;
  border-radius: 8px;
}
footer {
  background-color: #2ecc71;
  color: white;
  padding: 20px;
  border-radius: 8px;
}
div {
  background-color: #e74c3c;
  color: white;
  padding: 20px;
  border-radius: 8px;
}
section {
  display: flex;
  flex-direction: column;
  padding: 20px;
  border: 1px dashed #ccc;
}
"#
}

/// Page-load script stub.
pub fn script() -> &'static str {
    "// Page behaviour goes here.\ndocument.addEventListener(\"DOMContentLoaded\", () => {\n  console.log(\"page loaded\");\n});\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagewright_tree::{place_in, BlockCatalog, BlockKind, NodeId};

    fn drop(forest: &mut Forest, catalog: &BlockCatalog, kind: BlockKind, target: &str) -> NodeId {
        place_in(forest, catalog, kind, target).unwrap().inserted().unwrap()
    }

    #[test]
    fn test_empty_forest() {
        assert_eq!(serialize(&Forest::new()), "");
        assert_eq!(serialize(&Forest::with_containers(["a", "b"])), "");
    }

    #[test]
    fn test_reference_scenario() {
        let catalog = BlockCatalog::standard();
        let mut forest = Forest::with_containers(["root"]);
        drop(&mut forest, &catalog, BlockKind::Header, "root");
        let s = drop(&mut forest, &catalog, BlockKind::Section, "root");
        drop(&mut forest, &catalog, BlockKind::Banner, &s.to_string());

        assert_eq!(
            serialize(&forest),
            "<header>Header</header><section><div>Banner</div></section>"
        );
    }

    #[test]
    fn test_empty_section_not_omitted() {
        let catalog = BlockCatalog::standard();
        let mut forest = Forest::with_containers(["root"]);
        drop(&mut forest, &catalog, BlockKind::Section, "root");
        assert_eq!(serialize(&forest), "<section></section>");
    }

    #[test]
    fn test_containers_in_forest_order() {
        let catalog = BlockCatalog::standard();
        let mut forest = Forest::with_containers(["second", "first"]);
        drop(&mut forest, &catalog, BlockKind::Footer, "first");
        drop(&mut forest, &catalog, BlockKind::Header, "second");
        assert_eq!(serialize(&forest), "<header>Header</header><footer>Footer</footer>");
    }

    #[test]
    fn test_text_escaped_markup_verbatim() {
        let catalog = BlockCatalog::standard()
            .with_payload(BlockKind::Header, Payload::Text("Fish & <Chips>".into()))
            .with_payload(BlockKind::Banner, Payload::Markup("<em>Sale</em>".into()));
        let mut forest = Forest::with_containers(["root"]);
        drop(&mut forest, &catalog, BlockKind::Header, "root");
        drop(&mut forest, &catalog, BlockKind::Banner, "root");
        assert_eq!(
            serialize(&forest),
            "<header>Fish &amp; &lt;Chips&gt;</header><div><em>Sale</em></div>"
        );
    }

    #[test]
    fn test_serialize_is_pure() {
        let catalog = BlockCatalog::standard();
        let mut forest = Forest::with_containers(["root"]);
        drop(&mut forest, &catalog, BlockKind::Banner, "root");
        let before = forest.clone();
        assert_eq!(serialize(&forest), serialize(&forest));
        assert_eq!(forest, before);
    }

    #[test]
    fn test_document_links() {
        let forest = Forest::with_containers(["root"]);
        let config = ExportConfig {
            title: "A & B".into(),
            document: true,
            stylesheet: true,
            script: false,
        };
        let html = document(&forest, &config);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>A &amp; B</title>"));
        assert!(html.contains("href=\"styles.css\""));
        assert!(!html.contains("script.js"));
    }

    #[test]
    fn test_stylesheet_covers_exported_elements() {
        let css = stylesheet();
        for (selector, color) in [
            ("header {", "#4caf50"),
            ("footer {", "#2ecc71"),
            ("div {", "#e74c3c"),
        ] {
            let rule = &css[css.find(selector).unwrap()..];
            let rule = &rule[..rule.find('}').unwrap()];
            assert!(rule.contains(color), "{selector} should use {color}");
            assert!(rule.contains("padding: 20px;"));
        }
        assert!(css.contains("border: 1px dashed #ccc;"));
    }
}
