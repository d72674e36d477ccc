use crate::section::Section;

/// Flatten a section tree into the ordered command list a device session
/// would replay: each section's mode-entry line (when non-empty), then its
/// commands, then its children in order.
pub fn flatten(section: &Section) -> Vec<String> {
    let mut out = Vec::new();
    flatten_into(section, &mut out);
    out
}

fn flatten_into(section: &Section, out: &mut Vec<String>) {
    if !section.line.is_empty() {
        out.push(section.line.clone());
    }
    out.extend(section.commands.iter().cloned());
    for child in &section.children {
        flatten_into(child, out);
    }
}

/// Render a section tree back to indented configuration text at the given
/// indentation unit.
pub fn format_text(section: &Section, indent_unit: usize) -> String {
    let mut lines = Vec::new();
    render(section, 0, indent_unit, &mut lines);
    lines.join("\n")
}

fn render(section: &Section, depth: usize, indent_unit: usize, lines: &mut Vec<String>) {
    let mut body_depth = depth;
    if !section.line.is_empty() {
        lines.push(format!("{}{}", " ".repeat(depth * indent_unit), section.line));
        body_depth += 1;
    }

    for command in &section.commands {
        // Literal blocks carry their own internal layout; emit them as-is.
        if command.contains('\n') {
            lines.push(command.clone());
        } else {
            lines.push(format!(
                "{}{}",
                " ".repeat(body_depth * indent_unit),
                command
            ));
        }
    }

    for child in &section.children {
        render(child, body_depth, indent_unit, lines);
    }
}
