use crate::config::CountryCode;
use crate::error::Result;

/// Capabilities the decision engine needs from a personal-code authority.
pub trait IdentityValidator: Send + Sync {
    /// Structural and checksum validity.
    fn is_valid(&self, personal_code: &str) -> bool;

    /// Holder's age in whole months.
    fn age_in_months(&self, personal_code: &str) -> Result<u32>;

    /// Country that issued the code, when the validator can tell.
    fn country_of(&self, _personal_code: &str) -> Option<CountryCode> {
        None
    }
}

pub type IdentityValidatorBox = Box<dyn IdentityValidator>;

impl<V: IdentityValidator + ?Sized> IdentityValidator for Box<V> {
    fn is_valid(&self, personal_code: &str) -> bool {
        (**self).is_valid(personal_code)
    }

    fn age_in_months(&self, personal_code: &str) -> Result<u32> {
        (**self).age_in_months(personal_code)
    }

    fn country_of(&self, personal_code: &str) -> Option<CountryCode> {
        (**self).country_of(personal_code)
    }
}
