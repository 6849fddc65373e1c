//! Product description parsing.
//!
//! Descriptions are free text, but staff often append `label: value` spec
//! lines ("Fabric: 100% silk"). The detail view splits those out so the
//! renderer can show prose and a spec table separately.

/// A single `label: value` line pulled out of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLine {
    pub label: String,
    pub value: String,
}

/// Split a description into prose and spec lines.
///
/// A line counts as a spec line when it contains a colon with non-empty
/// text on both sides and the label stays short enough to be a label
/// rather than a sentence. Everything else is prose, joined back with
/// newlines in original order.
#[must_use]
pub fn split_description(description: &str) -> (String, Vec<SpecLine>) {
    const MAX_LABEL_LEN: usize = 24;

    let mut prose: Vec<&str> = Vec::new();
    let mut specs: Vec<SpecLine> = Vec::new();

    for line in description.lines() {
        let trimmed = line.trim();
        match trimmed.split_once(':') {
            Some((label, value)) => {
                let label = label.trim();
                let value = value.trim();
                if !label.is_empty()
                    && !value.is_empty()
                    && label.len() <= MAX_LABEL_LEN
                    && !label.contains(' ')
                {
                    specs.push(SpecLine {
                        label: label.to_string(),
                        value: value.to_string(),
                    });
                } else if !trimmed.is_empty() {
                    prose.push(trimmed);
                }
            }
            None => {
                if !trimmed.is_empty() {
                    prose.push(trimmed);
                }
            }
        }
    }

    (prose.join("\n"), specs)
}
