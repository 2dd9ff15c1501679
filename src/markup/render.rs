//! Indentation-aware rendering
//!
//! Rendering is a single recursive walk. Each element renders its children
//! first, then decides how to lay them out:
//!
//! - Text-only elements collapse onto one line with their text trimmed:
//!   `<li>3</li>`
//! - Elements with at least one element child open a block. The opening tag
//!   ends the line, children sit one level deeper, and the closing tag returns
//!   to the element's own indentation.
//! - Anonymous elements emit only their (right-trimmed) contents.
//!
//! Closing tags always end with a newline, in both layouts. Text children
//! are indented at their parent's level, not one deeper.
//!
//! ## Example
//!
//! ```text
//! <ul>
//!   <li>0</li>
//!   <li>1</li>
//! </ul>
//! ```

use super::config::RenderOptions;
use super::element::{Content, Element};
use super::error::RenderError;
use super::template::Namespace;

/// Renders element trees with a fixed set of [`RenderOptions`]
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render `element` starting at the configured root level
    pub fn render(&self, element: &Element, namespace: &Namespace) -> Result<String, RenderError> {
        self.render_at(element, self.options.root_level, namespace)
    }

    /// Render `element` as if it sat at indentation `level`
    pub fn render_at(
        &self,
        element: &Element,
        level: isize,
        namespace: &Namespace,
    ) -> Result<String, RenderError> {
        let result = self.render_element(element, level, namespace);
        if let Err(err) = &result {
            tracing::debug!("render aborted: {}", err);
        }
        result
    }

    fn render_element(
        &self,
        element: &Element,
        level: isize,
        namespace: &Namespace,
    ) -> Result<String, RenderError> {
        tracing::trace!(
            name = element.name().unwrap_or("<anonymous>"),
            level,
            children = element.children().len(),
            "rendering element"
        );

        let mut contents = String::new();
        for item in element.children() {
            match item {
                Content::Element(child) => {
                    contents.push_str(&self.render_element(child, level + 1, namespace)?);
                }
                Content::Text(text) => {
                    contents.push_str(&self.options.indentation(level));
                    contents.push_str(&namespace.substitute(text)?);
                }
                Content::Empty => {}
            }
        }

        let multi_line = element.is_multi_line();
        let contents = if multi_line {
            contents.trim_end()
        } else {
            contents.trim()
        };

        let Some(name) = element.name() else {
            return Ok(contents.to_string());
        };

        let mut out = self.open_tag(element, name, level, namespace)?;
        out.push_str(contents);
        if multi_line {
            out.push('\n');
            out.push_str(&self.options.indentation(level));
        }
        out.push_str("</");
        out.push_str(name);
        out.push_str(">\n");
        Ok(out)
    }

    fn open_tag(
        &self,
        element: &Element,
        name: &str,
        level: isize,
        namespace: &Namespace,
    ) -> Result<String, RenderError> {
        let mut tag = self.options.indentation(level);
        tag.push('<');
        tag.push_str(name);
        for (attribute, value) in element.attributes() {
            tag.push(' ');
            tag.push_str(attribute);
            tag.push_str("=\"");
            tag.push_str(&namespace.substitute(value)?);
            tag.push('"');
        }
        tag.push('>');
        if element.is_multi_line() {
            tag.push('\n');
        }
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Namespace {
        Namespace::new()
    }

    #[test]
    fn test_text_only_element_collapses_to_one_line() {
        let mut p = Element::new("p");
        p.append("  hello  ");
        assert_eq!(p.render_at(0, &empty()).unwrap(), "<p>hello</p>\n");
    }

    #[test]
    fn test_single_line_element_is_indented_at_its_level() {
        let mut li = Element::new("li");
        li.append("3");
        assert_eq!(li.render_at(2, &empty()).unwrap(), "    <li>3</li>\n");
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(Element::new("br").render_at(0, &empty()).unwrap(), "<br></br>\n");
    }

    #[test]
    fn test_block_layout_for_element_children() {
        let mut ul = Element::new("ul");
        ul.child("li").append("0");
        ul.child("li").append("1");

        assert_eq!(
            ul.render_at(0, &empty()).unwrap(),
            "<ul>\n  <li>0</li>\n  <li>1</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_nested_block_closing_tag_returns_to_own_indentation() {
        let mut body = Element::new("body");
        body.child("div").child("span").append("x");

        assert_eq!(
            body.render_at(1, &empty()).unwrap(),
            "  <body>\n    <div>\n      <span>x</span>\n    </div>\n  </body>\n"
        );
    }

    #[test]
    fn test_text_in_block_uses_parent_level() {
        let mut p = Element::new("p");
        p.append("Inline");
        p.child("b").class("bold");

        assert_eq!(
            p.render_at(1, &empty()).unwrap(),
            "  <p>\n  Inline    <b class=\"bold\"></b>\n  </p>\n"
        );
    }

    #[test]
    fn test_attributes_render_in_order_without_escaping() {
        let mut a = Element::new("a");
        a.attr("href", "/x?a=1&b=2")
            .attr("title", "say \"hi\"")
            .append("link");

        assert_eq!(
            a.render_at(0, &empty()).unwrap(),
            "<a href=\"/x?a=1&b=2\" title=\"say \"hi\"\">link</a>\n"
        );
    }

    #[test]
    fn test_attribute_values_are_substituted() {
        let mut head = Element::new("head");
        head.attr("title", "Good morning ${name}!");
        let namespace = Namespace::new().with("name", "Clio");

        assert_eq!(
            head.render_at(0, &namespace).unwrap(),
            "<head title=\"Good morning Clio!\"></head>\n"
        );
    }

    #[test]
    fn test_anonymous_root_emits_only_contents() {
        let mut root = Element::root();
        root.child("p").append("x");
        assert_eq!(root.render(&empty()).unwrap(), "<p>x</p>");
    }

    #[test]
    fn test_empty_entries_are_skipped() {
        let mut p = Element::new("p");
        p.append("a").append(None::<&str>).append("b");
        assert_eq!(p.render_at(0, &empty()).unwrap(), "<p>ab</p>\n");
    }

    #[test]
    fn test_missing_variable_aborts_render() {
        let mut root = Element::root();
        root.child("html").child("p").append("Hello ${name}!");

        let err = root.render(&empty()).unwrap_err();
        assert_eq!(err, RenderError::MissingVariable("name".to_string()));
    }

    #[test]
    fn test_missing_variable_in_attribute() {
        let mut div = Element::new("div");
        div.attr("id", "${slot}");
        let err = div.render_at(0, &empty()).unwrap_err();
        assert_eq!(err, RenderError::MissingVariable("slot".to_string()));
    }

    #[test]
    fn test_invalid_placeholder_is_a_syntax_error() {
        let mut p = Element::new("p");
        p.append("costs $5");
        let err = p.render_at(0, &empty()).unwrap_err();
        assert_eq!(err, RenderError::TemplateSyntax { line: 1, column: 7 });
    }

    #[test]
    fn test_custom_indent_unit() {
        let renderer = Renderer::new(RenderOptions {
            indent: "\t".to_string(),
            root_level: 0,
        });
        let mut ul = Element::new("ul");
        ul.child("li").append("0");

        assert_eq!(
            renderer.render(&ul, &empty()).unwrap(),
            "<ul>\n\t<li>0</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_render_does_not_mutate_tree() {
        let mut root = Element::root();
        root.child("div").child("p").append("x");
        let before = root.clone();

        let first = root.render(&empty()).unwrap();
        let second = root.render(&empty()).unwrap();
        assert_eq!(first, second);
        assert_eq!(root, before);
    }
}
