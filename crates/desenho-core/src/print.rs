//! Printable page for a generated drawing.
//!
//! The page fits the image on an A4 sheet with 20 mm margins, opens the print
//! dialog once the image has loaded and then closes its own window.

/// Delay between the print dialog returning and the window closing.
pub const CLOSE_DELAY_MS: u32 = 100;

/// Escape text for use inside a double-quoted HTML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// HTML document that prints `image_url` on A4.
pub fn print_document(image_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <title>Imprimir Desenho</title>
    <style>
      @page {{ size: A4; margin: 20mm; }}
      body {{ margin: 0; padding: 0; display: flex; justify-content: center; align-items: center; height: 100vh; }}
      img {{ max-width: 100%; max-height: 100%; object-fit: contain; }}
    </style>
  </head>
  <body>
    <img src="{src}" onload="window.print(); setTimeout(function(){{ window.close(); }}, {delay});" />
  </body>
</html>
"#,
        src = escape_attr(image_url),
        delay = CLOSE_DELAY_MS,
    )
}
