/// Employee record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    /// Opaque unique identifier assigned by the service on create.
    pub id: String,
    /// Full display name.
    pub first_name: String,
    pub address: String,
}

/// Create payload: an employee that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub first_name: String,
    pub address: String,
}

impl NewEmployee {
    /// Attach the service-assigned id.
    pub fn with_id(self, id: impl Into<String>) -> Employee {
        Employee {
            id: id.into(),
            first_name: self.first_name,
            address: self.address,
        }
    }
}
