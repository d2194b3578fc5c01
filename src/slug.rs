use crate::error::SlugError;
use std::str::FromStr;

/// Route segments the storefront claims for itself.
pub const RESERVED_SLUGS: &[&str] = &[
    "admin", "api", "login", "logout", "register", "dashboard",
    "static", "public", "_next", "favicon", "robots",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugStyle {
    /// The label is used verbatim.
    #[default]
    Raw,
    /// Lowercase, dash-separated.
    Kebab,
}

impl FromStr for SlugStyle {
    type Err = SlugError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(SlugStyle::Raw),
            "kebab" => Ok(SlugStyle::Kebab),
            other => Err(SlugError::Usage(format!(
                "Unknown slug style '{}' (expected 'raw' or 'kebab')",
                other
            ))),
        }
    }
}

impl SlugStyle {
    pub fn derive(self, label: &str) -> String {
        match self {
            SlugStyle::Raw => label.to_string(),
            SlugStyle::Kebab => {
                let slug = kebab_case(label);
                if slug.is_empty() {
                    log::warn!("label '{}' has no alphanumeric characters, keeping it as the slug", label);
                    label.to_string()
                } else {
                    slug
                }
            }
        }
    }
}

// Runs of anything non-alphanumeric become a single '-'; no leading or trailing '-'.
fn kebab_case(input: &str) -> String {
    let mut out = String::new();
    let mut pending_dash = false;
    for ch in input.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            out.extend(ch.to_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    out
}

pub fn is_reserved(slug: &str) -> bool {
    RESERVED_SLUGS.contains(&slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_keeps_label() {
        assert_eq!(SlugStyle::Raw.derive("Ar Condicionado"), "Ar Condicionado");
        assert_eq!(SlugStyle::default(), SlugStyle::Raw);
    }

    #[test]
    fn kebab_normalizes() {
        assert_eq!(SlugStyle::Kebab.derive("Ar Condicionado"), "ar-condicionado");
        assert_eq!(SlugStyle::Kebab.derive("  Máquinas de Lavar "), "máquinas-de-lavar");
        assert_eq!(SlugStyle::Kebab.derive("micro--ondas"), "micro-ondas");
        assert_eq!(SlugStyle::Kebab.derive("4K_TVs"), "4k-tvs");
    }

    #[test]
    fn kebab_falls_back_to_label() {
        assert_eq!(SlugStyle::Kebab.derive("--"), "--");
    }

    #[test]
    fn parses_style_names() {
        assert_eq!("raw".parse::<SlugStyle>().unwrap(), SlugStyle::Raw);
        assert_eq!("kebab".parse::<SlugStyle>().unwrap(), SlugStyle::Kebab);
        assert!(matches!("snake".parse::<SlugStyle>(), Err(SlugError::Usage(_))));
    }

    #[test]
    fn reserved_names() {
        assert!(is_reserved("admin"));
        assert!(is_reserved("_next"));
        assert!(!is_reserved("geladeiras"));
    }
}
