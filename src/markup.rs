//! Termynal HTML markup loader.
//!
//! Reads the same markup the browser widget consumes:
//!
//! ```html
//! <div class="termynal" data-ty-typeDelay="40">
//!     <span data-ty="input">pip install termynal</span>
//!     <span data-ty="progress"></span>
//!     <span data-ty>Successfully installed termynal</span>
//! </div>
//! ```

use scraper::{ElementRef, Html, Node as HtmlNode, Selector};

use crate::sequencer::{AttrNames, Attributes, LineElement, Node};
use crate::source::{SourceError, TerminalSource};

/// Default selector for terminal containers.
pub const DEFAULT_SELECTOR: &str = ".termynal";

/// Parse every container matching `selector` out of an HTML document.
///
/// Lines are the container's descendants carrying the bare prefix
/// attribute, in document order.
pub fn parse_document(
    html: &str,
    selector: &str,
    prefix: &str,
) -> Result<Vec<TerminalSource>, SourceError> {
    let container_selector =
        Selector::parse(selector).map_err(|e| SourceError::InvalidSelector {
            selector: selector.to_string(),
            message: e.to_string(),
        })?;
    let names = AttrNames::new(prefix);
    let document = Html::parse_document(html);

    let terminals = document
        .select(&container_selector)
        .map(|container| TerminalSource {
            attributes: element_attributes(&container),
            lines: declared_lines(&container, &names),
            ..TerminalSource::default()
        })
        .collect();

    Ok(terminals)
}

/// Parse a markup fragment (such as a line data `value`) into line nodes.
pub fn fragment_nodes(html: &str) -> Vec<Node> {
    let fragment = Html::parse_fragment(html);
    child_nodes(&fragment.root_element())
}

fn declared_lines(container: &ElementRef<'_>, names: &AttrNames) -> Vec<LineElement> {
    container
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter_map(|element| {
            let attributes = element_attributes(&element);
            if !attributes.contains(names.kind()) {
                return None;
            }
            Some(LineElement {
                class: element.value().attr("class").map(str::to_string),
                nodes: child_nodes(&element),
                attributes,
            })
        })
        .collect()
}

fn element_attributes(element: &ElementRef<'_>) -> Attributes {
    element.value().attrs().collect()
}

/// Direct children as text-bearing nodes. Element children are flattened
/// to their text content and keep their class.
fn child_nodes(element: &ElementRef<'_>) -> Vec<Node> {
    let mut nodes: Vec<Node> = element
        .children()
        .filter_map(|child| match child.value() {
            HtmlNode::Text(text) => Some(Node::text(&**text)),
            HtmlNode::Element(el) => {
                let child_ref = ElementRef::wrap(child)?;
                let text: String = child_ref.text().collect();
                Some(match el.attr("class") {
                    Some(class) => Node::styled(text, class),
                    None => Node::text(text),
                })
            }
            _ => None,
        })
        .collect();

    trim_edges(&mut nodes);
    nodes
}

/// Drop whitespace-only edge nodes and trim the outer edges of the line.
/// Interior whitespace (the space between two spans) is content.
fn trim_edges(nodes: &mut Vec<Node>) {
    while nodes
        .first()
        .is_some_and(|n| n.class.is_none() && n.text.trim().is_empty())
    {
        nodes.remove(0);
    }
    while nodes
        .last()
        .is_some_and(|n| n.class.is_none() && n.text.trim().is_empty())
    {
        nodes.pop();
    }
    if let Some(first) = nodes.first_mut() {
        first.text = first.text.trim_start().to_string();
    }
    if let Some(last) = nodes.last_mut() {
        last.text = last.text.trim_end().to_string();
    }
}
