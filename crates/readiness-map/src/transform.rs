//! Fixed transformation hints keyed by field identity.

use readiness_model::CoverageStatus;

const ADDRESS_FIELDS: &[&str] = &["cust_street", "cust_city", "cust_state", "zip_code"];

const ADDRESS_HINT: &str = "Normalize address format, handle multi-line addresses";
const EMAIL_HINT: &str = "Normalize to lowercase";
const CUSTOMER_NAME_HINT: &str = "Derive from FirstName + LastName or related Contact";
const SALESPERSON_NAME_HINT: &str = "Join with User object using OwnerId";

/// Transformation needed before a field can feed the layers.
///
/// Address components and email only need one once a source resolved.
/// Customer and salesperson names always need a derivation or join.
pub fn transform_hint(field: &str, status: CoverageStatus) -> Option<&'static str> {
    match field {
        "customer_name" => Some(CUSTOMER_NAME_HINT),
        "salesperson_name" => Some(SALESPERSON_NAME_HINT),
        _ if !status.is_present() => None,
        "email" => Some(EMAIL_HINT),
        _ if ADDRESS_FIELDS.contains(&field) => Some(ADDRESS_HINT),
        _ => None,
    }
}
