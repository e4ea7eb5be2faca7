//! Documentation bodies are HTML fragments. These helpers parse them into a
//! DOM so that text extraction and sentence truncation see real elements,
//! decoded entities and quoted attribute values.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html_escape::{encode_double_quoted_attribute, encode_text};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

const VOID_ELEMENTS: [&str; 6] = ["br", "hr", "img", "input", "meta", "wbr"];

fn parse_body(html: &str) -> Option<Handle> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    find_element(&dom.document, "body")
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if let NodeData::Element { name, .. } = &child.data {
            if &*name.local == tag {
                return Some(child.clone());
            }
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Visible text of an HTML fragment, with entities decoded
pub fn to_text(html: &str) -> String {
    let mut text = String::new();
    if let Some(body) = parse_body(html) {
        collect_text(&body, &mut text);
    }
    text
}

fn collect_text(handle: &Handle, out: &mut String) {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push_str(&contents.borrow()),
            NodeData::Element { .. } => collect_text(child, out),
            _ => {}
        }
    }
}

/// Offset just past the first period followed by whitespace
fn sentence_end(text: &str) -> Option<usize> {
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '.' && chars.peek().is_some_and(|(_, next)| next.is_whitespace()) {
            return Some(i + 1);
        }
    }
    None
}

/// Leading sentence of an HTML fragment, re-serialized with every element
/// that was open at the cut closed again
pub fn first_sentence(html: &str) -> String {
    let mut out = String::new();
    if let Some(body) = parse_body(html) {
        write_until_sentence_end(&body, &mut out);
    }
    out.trim().to_string()
}

// Returns true once the sentence has ended
fn write_until_sentence_end(handle: &Handle, out: &mut String) -> bool {
    for child in handle.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                let text: &str = &contents;
                if let Some(end) = sentence_end(text) {
                    out.push_str(&encode_text(&text[..end]));
                    return true;
                }
                out.push_str(&encode_text(text));
            }
            NodeData::Element { name, attrs, .. } => {
                let tag: &str = &name.local;
                out.push('<');
                out.push_str(tag);
                for attr in attrs.borrow().iter() {
                    let value: &str = &attr.value;
                    out.push_str(&format!(
                        " {}=\"{}\"",
                        &*attr.name.local,
                        encode_double_quoted_attribute(value)
                    ));
                }
                out.push('>');
                if VOID_ELEMENTS.contains(&tag) {
                    continue;
                }
                let ended = write_until_sentence_end(child, out);
                out.push_str(&format!("</{}>", tag));
                if ended {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}
