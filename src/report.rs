use crate::insert::Insertion;
use std::collections::BTreeSet;
use std::path::Path;

pub const TAG: &str = "[category-slug]";

pub fn categories_found(labels: &BTreeSet<String>) -> String {
    let joined: Vec<&str> = labels.iter().map(String::as_str).collect();
    format!("{} Categories found: {}", TAG, joined.join(", "))
}

pub fn added(insertion: &Insertion) -> String {
    format!(
        "{} Added categorySlug for '{}': {} products",
        TAG, insertion.label, insertion.count
    )
}

pub fn reserved_warning(insertion: &Insertion) -> String {
    format!(
        "{} Warning: slug '{}' for category '{}' is a reserved route name",
        TAG, insertion.slug, insertion.label
    )
}

pub fn updated(path: &Path) -> String {
    format!("{} Successfully updated {}", TAG, path.display())
}

pub fn dry_run(path: &Path) -> String {
    format!("{} Dry run: {} not modified", TAG, path.display())
}

pub fn failure(err: &anyhow::Error) -> String {
    format!("{} {:#}", TAG, err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_carry_the_tag() {
        let labels: BTreeSet<String> = ["tvs", "fogoes"].iter().map(|s| s.to_string()).collect();
        assert_eq!(categories_found(&labels), "[category-slug] Categories found: fogoes, tvs");
        let ins = Insertion { label: "Bags".into(), slug: "Bags".into(), count: 2 };
        assert_eq!(added(&ins), "[category-slug] Added categorySlug for 'Bags': 2 products");
        assert_eq!(
            updated(Path::new("data/products.ts")),
            "[category-slug] Successfully updated data/products.ts"
        );
    }
}
