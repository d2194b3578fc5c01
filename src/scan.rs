use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"category:\s*'([^']+)'").expect("category pattern is valid"));

/// Distinct category labels in lexicographic order.
pub fn extract_categories(content: &str) -> BTreeSet<String> {
    CATEGORY_RE
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_sorted_distinct_labels() {
        let src = "\
  {
    category: 'tvs',
    price: 1999,
  },
  {
    category: 'fogoes',
    price: 899,
  },
  {
    category:'tvs',
    price: 2499,
  },
";
        let labels: Vec<String> = extract_categories(src).into_iter().collect();
        assert_eq!(labels, vec!["fogoes".to_string(), "tvs".to_string()]);
    }

    #[test]
    fn ignores_other_quoting_and_fields() {
        let src = "category: \"Shoes\",\ncategorySlug: 'Shoes',\nname: 'x',\n";
        // `categorySlug: 'Shoes'` does not contain `category:` so nothing matches.
        assert!(extract_categories(src).is_empty());
    }

    #[test]
    fn empty_label_is_skipped() {
        assert!(extract_categories("category: '',\nprice: 1").is_empty());
    }
}
