//! Path parameter checks for address lookups.

use viacep_core::constants::{MIN_CITY_LEN, MIN_STREET_LEN, STATE_CODE_LEN};
use viacep_core::error::{Result, ViaCepError};

use crate::dto::AddressPath;

/// Rejects blank segments and segments outside the accepted lengths.
///
/// Lengths count characters, not bytes, so accented names measure as typed.
pub fn validate_address(path: &AddressPath) -> Result<()> {
    check_not_blank("uf", &path.uf)?;
    check_not_blank("cidade", &path.cidade)?;
    check_not_blank("logradouro", &path.logradouro)?;

    if path.uf.trim().chars().count() != STATE_CODE_LEN {
        return Err(ViaCepError::Validation(format!(
            "uf must have exactly {} characters",
            STATE_CODE_LEN
        )));
    }
    if path.cidade.trim().chars().count() < MIN_CITY_LEN {
        return Err(ViaCepError::Validation(format!(
            "cidade must have at least {} characters",
            MIN_CITY_LEN
        )));
    }
    if path.logradouro.trim().chars().count() < MIN_STREET_LEN {
        return Err(ViaCepError::Validation(format!(
            "logradouro must have at least {} characters",
            MIN_STREET_LEN
        )));
    }

    Ok(())
}

fn check_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ViaCepError::Validation(format!("{} is required", field)));
    }
    Ok(())
}
