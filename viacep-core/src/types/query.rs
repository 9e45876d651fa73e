//! Query and cache key types.

use std::fmt;

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════════
// ADDRESS QUERY
// ═══════════════════════════════════════════════════════════════════════════════

/// An address-fragment query: state (UF), city and street.
///
/// The core performs no shape validation; the API layer checks lengths
/// before a query reaches the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressQuery {
    /// Two-letter state code (UF)
    pub state: String,
    /// City name
    pub city: String,
    /// Street name (logradouro)
    pub street: String,
}

impl AddressQuery {
    /// Creates a query from its three fields.
    pub fn new(
        state: impl Into<String>,
        city: impl Into<String>,
        street: impl Into<String>,
    ) -> Self {
        Self {
            state: state.into(),
            city: city.into(),
            street: street.into(),
        }
    }

    /// Derives the cache key for this query.
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::from_parts(&self.state, &self.city, &self.street)
    }
}

impl fmt::Display for AddressQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.state, self.city, self.street)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE KEY
// ═══════════════════════════════════════════════════════════════════════════════

/// Cache key for a query.
///
/// State is uppercased, city and street are lowercased, and the three are
/// concatenated without separators. Queries differing only in letter case
/// map to the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds a key from raw query fields.
    pub fn from_parts(state: &str, city: &str, street: &str) -> Self {
        let mut key = String::with_capacity(state.len() + city.len() + street.len());
        key.push_str(&state.to_uppercase());
        key.push_str(&city.to_lowercase());
        key.push_str(&street.to_lowercase());
        Self(key)
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    #[test_case("sp", "Sao Paulo", "Avenida Paulista" => "SPsao pauloavenida paulista" ; "lowercase state")]
    #[test_case("RJ", "RIO DE JANEIRO", "RUA A" => "RJrio de janeirorua a" ; "uppercase city and street")]
    #[test_case("Df", "Brasília", "Eixo" => "DFbrasíliaeixo" ; "non ascii letters")]
    fn test_key_layout(state: &str, city: &str, street: &str) -> String {
        CacheKey::from_parts(state, city, street).to_string()
    }

    #[test]
    fn test_mixed_case_queries_share_key() {
        let a = AddressQuery::new("sp", "Sao Paulo", "Avenida Paulista");
        let b = AddressQuery::new("SP", "sao paulo", "avenida paulista");
        assert_eq!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_different_streets_differ() {
        let a = AddressQuery::new("RS", "Porto Alegre", "Domingos");
        let b = AddressQuery::new("RS", "Porto Alegre", "Jose");
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_display() {
        let q = AddressQuery::new("MG", "Belo Horizonte", "Rua da Bahia");
        assert_eq!(q.to_string(), "MG/Belo Horizonte/Rua da Bahia");
    }

    proptest! {
        #[test]
        fn prop_key_ignores_case(
            state in "[a-zA-Z]{2}",
            city in "[a-zA-Z ]{2,20}",
            street in "[a-zA-Z0-9 ]{3,30}",
        ) {
            let original = AddressQuery::new(&state, &city, &street);
            let upper = AddressQuery::new(
                state.to_uppercase(),
                city.to_uppercase(),
                street.to_uppercase(),
            );
            let lower = AddressQuery::new(
                state.to_lowercase(),
                city.to_lowercase(),
                street.to_lowercase(),
            );
            prop_assert_eq!(original.cache_key(), upper.cache_key());
            prop_assert_eq!(original.cache_key(), lower.cache_key());
        }
    }
}
