use crate::section::Section;

/// Compute the one-sided structural difference: everything `left` contains
/// that `right` lacks, as a freshly allocated tree rooted at the shared
/// mode-entry line.
///
/// A child of `left` with no counterpart in `right` is deep-copied whole,
/// and its mode-entry line is added to the result's commands because
/// entering that mode is itself part of expressing the difference. A child
/// with a matching counterpart is compared recursively and included, again
/// with its mode-entry line, only when the nested result is non-empty.
/// Children only present in `right` do not appear here; they belong to the
/// reverse-direction result.
///
/// # Panics
///
/// Panics when the two sections do not enter the same mode. Comparing
/// unrelated sections is a programming error, not a runtime condition.
pub fn compare_one_sided(left: &Section, right: &Section) -> Section {
    assert_eq!(
        left.line, right.line,
        "compared sections must enter the same configuration mode"
    );

    let mut result = Section::new(left.line.clone());

    for command in &left.commands {
        if !right.commands.iter().any(|c| c == command) {
            result.commands.push(command.clone());
        }
    }

    for child in &left.children {
        match right.get_child(&child.line) {
            None => {
                result.add_command(child.line.clone());
                result.children.push(child.clone());
            }
            Some(counterpart) => {
                let nested = compare_one_sided(child, counterpart);
                if !nested.is_empty() {
                    result.add_command(nested.line.clone());
                    result.children.push(nested);
                }
            }
        }
    }

    result
}

/// Compare two section trees rooted at the same mode.
///
/// Returns `(what left has that right lacks, what right has that left
/// lacks)`. The two directions are computed independently.
pub fn compare(left: &Section, right: &Section) -> (Section, Section) {
    (
        compare_one_sided(left, right),
        compare_one_sided(right, left),
    )
}
