use crate::error::SlugError;
use crate::slug::SlugStyle;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    pub label: String,
    pub slug: String,
    pub count: usize,
}

// `category: '<label>',` with `price:` on the very next line. The leading
// whitespace of the price line is captured so it can be written back as is.
fn adjacency_pattern(label: &str) -> Result<Regex, SlugError> {
    let pattern = format!(r"(category:\s*'{}',)\n(\s+price:)", regex::escape(label));
    Regex::new(&pattern).map_err(|source| SlugError::Pattern { label: label.to_string(), source })
}

/// Insert `categorySlug` between every adjacent `category`/`price` pair for
/// one label. Returns the rewritten text and the number of records touched;
/// the text is borrowed unchanged when nothing matched.
pub fn insert_slug<'a>(content: &'a str, label: &str, slug: &str) -> Result<(Cow<'a, str>, usize), SlugError> {
    let re = adjacency_pattern(label)?;
    let count = re.find_iter(content).count();
    if count == 0 {
        return Ok((Cow::Borrowed(content), 0));
    }
    let updated = re.replace_all(content, |caps: &Captures| {
        format!("{}\n    categorySlug: '{}',\n{}", &caps[1], slug, &caps[2])
    });
    Ok((updated, count))
}

/// Run `insert_slug` for every label in order. Only labels that produced at
/// least one replacement appear in the returned list.
pub fn insert_all(
    mut content: String,
    labels: &BTreeSet<String>,
    style: SlugStyle,
) -> Result<(String, Vec<Insertion>), SlugError> {
    let mut insertions = Vec::new();
    for label in labels {
        let slug = style.derive(label);
        let (updated, count) = insert_slug(&content, label, &slug)?;
        log::debug!("label '{}' -> slug '{}': {} match(es)", label, slug, count);
        if count > 0 {
            content = updated.into_owned();
            insertions.push(Insertion { label: label.clone(), slug, count });
        }
    }
    Ok((content, insertions))
}
