use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Professional — a barber/stylist assignable to a booking
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professional {
    pub id: String,
    pub name: String,
}

impl Professional {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
