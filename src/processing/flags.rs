//! Query flags derived from the request URL.

/// Boolean switches recognized in the query string.
///
/// A flag is on only when its value is exactly `true`. When a parameter is
/// repeated, the first occurrence decides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryFlags {
    /// Include `mfo_code` in every entry.
    pub mfo: bool,
    /// Keep only banks in normal state and include `state_code`.
    pub normal: bool,
}

impl QueryFlags {
    /// Parse the raw query string (without the leading `?`).
    pub fn from_query(query: Option<&str>) -> Self {
        let Some(query) = query else {
            return Self::default();
        };

        let mut mfo = None;
        let mut normal = None;

        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            let slot = match key.as_ref() {
                "mfo" => &mut mfo,
                "normal" => &mut normal,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value == "true");
            }
        }

        Self {
            mfo: mfo.unwrap_or(false),
            normal: normal.unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_query() {
        assert_eq!(QueryFlags::from_query(None), QueryFlags::default());
        assert_eq!(QueryFlags::from_query(Some("")), QueryFlags::default());
    }

    #[test]
    fn test_both_flags() {
        let flags = QueryFlags::from_query(Some("mfo=true&normal=true"));
        assert_eq!(flags, QueryFlags { mfo: true, normal: true });
    }

    #[test]
    fn test_only_exact_true_enables() {
        for value in ["1", "TRUE", "yes", "", "false", "true "] {
            let query = format!("mfo={value}&normal={value}");
            assert_eq!(
                QueryFlags::from_query(Some(&query)),
                QueryFlags::default(),
                "value {value:?} should not enable flags"
            );
        }
        assert_eq!(QueryFlags::from_query(Some("mfo&normal")), QueryFlags::default());
    }

    #[test]
    fn test_unknown_parameters_ignored() {
        let flags = QueryFlags::from_query(Some("page=2&normal=true&sort=name"));
        assert_eq!(flags, QueryFlags { mfo: false, normal: true });
    }

    #[test]
    fn test_first_occurrence_wins() {
        let flags = QueryFlags::from_query(Some("mfo=true&mfo=false&normal=no&normal=true"));
        assert_eq!(flags, QueryFlags { mfo: true, normal: false });
    }

    #[test]
    fn test_percent_encoded_value() {
        let flags = QueryFlags::from_query(Some("m%66o=%74rue"));
        assert!(flags.mfo);
    }
}
