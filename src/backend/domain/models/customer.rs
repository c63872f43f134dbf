use serde::{Deserialize, Serialize};

/// Domain model representing a customer record.
///
/// Serializes to the flat document stored in the collection: four fields,
/// nothing else. The identifier is operator-supplied and never checked for
/// uniqueness; the last name is what update and delete match on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub last_name: String,
    pub district: String,
    pub discount: i32,
}
