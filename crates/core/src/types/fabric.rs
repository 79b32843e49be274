//! Fabric tags used to categorise and filter products.
//!
//! Tags are compared exactly as written in the page's `data-fabric` and
//! `data-filter` attributes. The four fabrics the catalog sells have named
//! variants; any other tag is kept as [`Fabric::Other`].

use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned for an empty fabric tag.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("fabric tag cannot be empty")]
pub struct ParseFabricError;

/// Fabric a product is made from.
///
/// Serialized as its tag, matching the `data-fabric` attribute on product
/// cards. Two fabrics are equal when their tags are, so `Other("silk")`
/// equals `Silk`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Fabric {
    Cotton,
    Silk,
    Linen,
    Wool,
    /// Any other tag, verbatim.
    Other(String),
}

impl Fabric {
    /// The fabrics with named variants.
    pub const KNOWN: [Self; 4] = [Self::Cotton, Self::Silk, Self::Linen, Self::Wool];

    /// The tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cotton => "cotton",
            Self::Silk => "silk",
            Self::Linen => "linen",
            Self::Wool => "wool",
            Self::Other(tag) => tag,
        }
    }
}

impl PartialEq for Fabric {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Fabric {}

impl Hash for Fabric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Fabric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Fabric {
    type Err = ParseFabricError;

    /// Exact, case-sensitive match. Only the empty tag is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseFabricError);
        }
        Ok(Self::KNOWN
            .into_iter()
            .find(|fabric| fabric.as_str() == s)
            .unwrap_or_else(|| Self::Other(s.to_owned())))
    }
}

impl TryFrom<String> for Fabric {
    type Error = ParseFabricError;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<Fabric> for String {
    fn from(fabric: Fabric) -> Self {
        match fabric {
            Fabric::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

/// The fabric filter selected on the catalog.
///
/// `All` is the `"all"` sentinel and the default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FabricFilter {
    #[default]
    All,
    Only(Fabric),
}

impl FabricFilter {
    /// Sentinel value used by filter buttons to show every product.
    pub const ALL_TAG: &'static str = "all";

    /// Whether a product tagged `fabric` passes this filter.
    ///
    /// Untagged products only pass the `All` filter.
    #[must_use]
    pub fn matches(&self, fabric: Option<&Fabric>) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => fabric == Some(wanted),
        }
    }
}

impl fmt::Display for FabricFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL_TAG),
            Self::Only(fabric) => fabric.fmt(f),
        }
    }
}

impl FromStr for FabricFilter {
    type Err = ParseFabricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_TAG {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("silk".parse::<Fabric>().unwrap(), Fabric::Silk);
        assert!(matches!("linen".parse::<Fabric>().unwrap(), Fabric::Linen));
        assert_eq!("".parse::<Fabric>(), Err(ParseFabricError));
    }

    #[test]
    fn test_parse_other_tags_verbatim() {
        let denim: Fabric = "denim".parse().unwrap();
        assert_eq!(denim, Fabric::Other("denim".to_owned()));
        assert_eq!(denim.as_str(), "denim");

        // Tags are case-sensitive, as in the markup.
        let upper: Fabric = "Silk".parse().unwrap();
        assert_ne!(upper, Fabric::Silk);
        assert_eq!(upper.as_str(), "Silk");
    }

    #[test]
    fn test_other_equals_named_variant_with_same_tag() {
        assert_eq!(Fabric::Other("wool".to_owned()), Fabric::Wool);
    }

    #[test]
    fn test_filter_all_sentinel() {
        assert_eq!("all".parse::<FabricFilter>().unwrap(), FabricFilter::All);
        assert_eq!(FabricFilter::default(), FabricFilter::All);
        assert_eq!(FabricFilter::All.to_string(), "all");
        assert_eq!(
            "All".parse::<FabricFilter>().unwrap(),
            FabricFilter::Only(Fabric::Other("All".to_owned()))
        );
    }

    #[test]
    fn test_filter_matches() {
        let silk = FabricFilter::Only(Fabric::Silk);
        assert!(silk.matches(Some(&Fabric::Silk)));
        assert!(!silk.matches(Some(&Fabric::Cotton)));
        assert!(!silk.matches(None));
        assert!(FabricFilter::All.matches(None));

        let denim: FabricFilter = "denim".parse().unwrap();
        assert!(denim.matches(Some(&Fabric::Other("denim".to_owned()))));
        assert!(!denim.matches(Some(&Fabric::Cotton)));
    }

    #[test]
    fn test_serde_as_tag() {
        assert_eq!(serde_json::to_string(&Fabric::Cotton).unwrap(), "\"cotton\"");
        assert_eq!(
            serde_json::to_string(&Fabric::Other("denim".to_owned())).unwrap(),
            "\"denim\""
        );
        let parsed: Fabric = serde_json::from_str("\"linen\"").unwrap();
        assert!(matches!(parsed, Fabric::Linen));
        assert!(serde_json::from_str::<Fabric>("\"\"").is_err());
    }
}
