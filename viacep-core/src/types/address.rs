//! Upstream address records.
//!
//! The gateway forwards these without interpreting them. Known ViaCEP fields
//! are typed for convenience; anything else upstream sends is kept in
//! [`AddressResult::extra`] and written back out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One address record as returned by ViaCEP.
///
/// Serialized field names match the upstream JSON, so a record decoded from
/// upstream and re-encoded by the gateway keeps its shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressResult {
    /// Postal code (CEP), e.g. "01310-100"
    #[serde(rename = "cep", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Street (logradouro)
    #[serde(rename = "logradouro", default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Complement, e.g. "de 612 a 1510 - lado par"
    #[serde(rename = "complemento", default, skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    /// Unit
    #[serde(rename = "unidade", default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Neighborhood (bairro)
    #[serde(rename = "bairro", default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    /// City (localidade)
    #[serde(rename = "localidade", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State code (UF)
    #[serde(rename = "uf", default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// State name
    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// Region (regiao)
    #[serde(rename = "regiao", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// IBGE municipality code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ibge: Option<String>,
    /// GIA code (São Paulo only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gia: Option<String>,
    /// Telephone area code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddd: Option<String>,
    /// SIAFI code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub siafi: Option<String>,
    /// Fields not modeled above, passed through as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AddressResult {
    /// Creates a record with just a postal code set.
    pub fn with_postal_code(postal_code: impl Into<String>) -> Self {
        Self {
            postal_code: Some(postal_code.into()),
            ..Default::default()
        }
    }
}
