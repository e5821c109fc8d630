//! # Preview Renderer
//!
//! Turns a bit's three source fields into one self-contained HTML document
//! and presents it on a [`RenderSurface`]. The composed document is the
//! isolation boundary: it runs as its own page in whatever browser opens
//! it, sharing no DOM and no global scope with anything else, while its
//! scripts stay fully enabled.
//!
//! Every change to the input triple discards the previous output and
//! rebuilds the document from scratch—there is no diffing and no caching
//! of render output. A thrown snippet script is caught inside the
//! document itself: the error goes to the rendered context's console and
//! a red banner is appended to the body, so the preview never goes blank
//! on bad user code.

use crate::error::Result;
use crate::model::Bit;

mod surface;

pub use surface::{FileSurface, RenderSurface};

#[cfg(any(test, feature = "test_utils"))]
pub use surface::MemorySurface;

/// The source triple a preview is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewInput {
    pub html: String,
    pub css: String,
    pub javascript: String,
}

impl PreviewInput {
    pub fn new(
        html: impl Into<String>,
        css: impl Into<String>,
        javascript: impl Into<String>,
    ) -> Self {
        Self {
            html: html.into(),
            css: css.into(),
            javascript: javascript.into(),
        }
    }
}

impl From<&Bit> for PreviewInput {
    fn from(bit: &Bit) -> Self {
        Self::new(bit.html.clone(), bit.css.clone(), bit.javascript.clone())
    }
}

/// Composes the full standalone preview document.
///
/// The shell embeds the snippet CSS in a style block after a neutral body
/// reset, the snippet HTML as the body content, and the snippet script in
/// a try/catch that reports to the console and appends the error banner.
pub fn compose_document(input: &PreviewInput) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Preview</title>
  <style>
    body {{
      margin: 0;
      padding: 16px;
      font-family: system-ui, -apple-system, sans-serif;
    }}
    {css}
  </style>
</head>
<body>
  {html}
  <script>
    try {{
      {javascript}
    }} catch (error) {{
      console.error('JavaScript Error:', error);
      document.body.innerHTML += '<div style="color: red; background: #fee; padding: 10px; margin: 10px 0; border-radius: 4px; border: 1px solid #fcc;"><strong>JavaScript Error:</strong> ' + error.message + '</div>';
    }}
  </script>
</body>
</html>
"#,
        css = input.css,
        html = input.html,
        javascript = input.javascript,
    )
}

/// Re-renders a surface whenever the input triple changes.
///
/// Holds the last rendered triple; [`render`] compares by value and is a
/// no-op for unchanged input. Callers must not assume the surface is
/// visible synchronously—the file is picked up whenever the browser
/// (re)loads it.
///
/// [`render`]: PreviewRenderer::render
pub struct PreviewRenderer<T: RenderSurface> {
    surface: T,
    last: Option<PreviewInput>,
}

impl<T: RenderSurface> PreviewRenderer<T> {
    pub fn new(surface: T) -> Self {
        Self {
            surface,
            last: None,
        }
    }

    /// Rebuilds and presents the document when `input` differs from the
    /// last rendered triple. Returns whether a render happened.
    pub fn render(&mut self, input: &PreviewInput) -> Result<bool> {
        if self.last.as_ref() == Some(input) {
            return Ok(false);
        }
        let document = compose_document(input);
        self.surface.present(&document)?;
        self.last = Some(input.clone());
        Ok(true)
    }

    pub fn surface(&self) -> &T {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_embeds_all_three_sources() {
        let input = PreviewInput::new(
            r#"<p id=x>hi</p>"#,
            "#x{color:red}",
            "document.getElementById('x').textContent='bye'",
        );
        let doc = compose_document(&input);

        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<p id=x>hi</p>"#));
        assert!(doc.contains("#x{color:red}"));
        assert!(doc.contains("document.getElementById('x').textContent='bye'"));
        // Script is wrapped, not bare.
        let script_pos = doc.find("try {").unwrap();
        assert!(doc.find("getElementById").unwrap() > script_pos);
    }

    #[test]
    fn throwing_script_still_renders_body_and_banner_handler() {
        let input = PreviewInput::new("<h1>kept</h1>", "", "throw new Error('boom')");
        let doc = compose_document(&input);

        // The static body content precedes the script, so it renders even
        // when the script throws.
        assert!(doc.find("<h1>kept</h1>").unwrap() < doc.find("throw new Error").unwrap());
        assert!(doc.contains("catch (error)"));
        assert!(doc.contains("console.error('JavaScript Error:', error)"));
        assert!(doc.contains("background: #fee"));
        assert!(doc.contains("' + error.message + '"));
    }

    #[test]
    fn renderer_skips_unchanged_input() {
        let mut renderer = PreviewRenderer::new(MemorySurface::new());
        let input = PreviewInput::new("<p>a</p>", "", "");

        assert!(renderer.render(&input).unwrap());
        assert!(!renderer.render(&input).unwrap());
        assert_eq!(renderer.surface().presented.len(), 1);
    }

    #[test]
    fn renderer_rebuilds_on_any_field_change() {
        let mut renderer = PreviewRenderer::new(MemorySurface::new());
        renderer
            .render(&PreviewInput::new("<p>a</p>", "", ""))
            .unwrap();
        renderer
            .render(&PreviewInput::new("<p>a</p>", "p{}", ""))
            .unwrap();
        renderer
            .render(&PreviewInput::new("<p>a</p>", "p{}", "1;"))
            .unwrap();

        let presented = &renderer.surface().presented;
        assert_eq!(presented.len(), 3);
        // Full rebuild each time: the latest document is complete on its own.
        assert!(presented[2].starts_with("<!DOCTYPE html>"));
        assert!(presented[2].contains("1;"));
    }
}
