//! User Model

use serde::{Deserialize, Serialize};

/// Customer reference attached to a booking
///
/// The booking payload carries more user fields; the admin view only
/// relies on the first name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub firstname: String,
}
