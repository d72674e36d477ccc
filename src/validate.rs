use crate::parser::{ends_literal, indent_width, opens_literal, ParseError, ParseOptions};

/// Check that every line outside a literal block is indented in whole
/// multiples of the configured unit.
///
/// Literal-block bodies (for example banner text or inline certificate
/// material) are exempt: from a line matching one of the configured opener
/// prefixes through the terminator sentinel, indentation is not inspected.
/// Fails on the first offending line with its raw text and measured width.
pub fn validate(text: &str, opts: &ParseOptions) -> Result<(), ParseError> {
    let mut in_literal = false;

    for raw in text.lines() {
        if in_literal {
            if ends_literal(raw, opts) {
                in_literal = false;
            }
            continue;
        }

        let width = indent_width(raw);
        if width % opts.indent_unit != 0 {
            return Err(ParseError::Indentation {
                line: raw.to_string(),
                width,
                unit: opts.indent_unit,
            });
        }

        if opens_literal(raw, opts) {
            in_literal = true;
        }
    }

    Ok(())
}
