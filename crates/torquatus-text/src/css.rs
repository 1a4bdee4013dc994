//! Inline declaration parsing using the `cssparser` crate.
//!
//! Turns strings such as `font-family: 'Arial'; font-size: 12pt;` into a
//! [`StyleMap`]. Values are kept verbatim (trimmed), so unknown properties
//! survive a parse/serialize cycle unchanged.

use cssparser::{Delimiter, ParseError as CssParseError, Parser, ParserInput};

use torquatus_core::logging::targets;

use crate::style_map::StyleMap;

/// Parse an inline declaration list into a style map.
///
/// Malformed declarations are skipped with a warning; parsing resumes after
/// the next `;`. A property declared twice keeps its last value.
///
/// ```
/// use torquatus_text::css::parse_inline_style;
///
/// let style = parse_inline_style("font-weight: bold; underline: true;");
/// assert_eq!(style.get("font-weight"), Some("bold"));
/// ```
pub fn parse_inline_style(css: &str) -> StyleMap {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut style = StyleMap::new();

    loop {
        parser.skip_whitespace();

        if parser.is_exhausted() {
            break;
        }

        let declaration = parser.parse_until_after(Delimiter::Semicolon, |p| {
            parse_declaration(p)
        });

        match declaration {
            Ok((name, value)) => {
                style.set(name, value);
            }
            Err(e) => {
                tracing::warn!(target: targets::STYLE_PARSE, "skipping malformed declaration: {:?}", e.kind);
            }
        }
    }

    style
}

/// Parse `name: value` up to (not including) the delimiting semicolon.
fn parse_declaration<'i>(
    parser: &mut Parser<'i, '_>,
) -> Result<(String, String), CssParseError<'i, ()>> {
    let name = parser.expect_ident()?.to_string();
    parser.expect_colon()?;
    parser.skip_whitespace();

    let start = parser.position();
    while parser.next_including_whitespace().is_ok() {}
    let value = parser.slice_from(start).trim();

    if value.is_empty() {
        return Err(parser.new_custom_error(()));
    }

    Ok((name, value.to_string()))
}
