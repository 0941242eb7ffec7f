use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::SupplierError;

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Supplier {
    pub fn new(
        name: String,
        address: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, SupplierError> {
        if name.trim().is_empty() {
            return Err(SupplierError::NameEmpty);
        }

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            address: non_blank(address),
            phone: non_blank(phone),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn revise(
        &self,
        name: String,
        address: Option<String>,
        phone: Option<String>,
    ) -> Result<Self, SupplierError> {
        if name.trim().is_empty() {
            return Err(SupplierError::NameEmpty);
        }

        Ok(Self {
            id: self.id,
            name,
            address: non_blank(address),
            phone: non_blank(phone),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        name: String,
        address: Option<String>,
        phone: Option<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            address,
            phone,
            created_at,
            updated_at,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_supplier_when_name_valid() {
        let result = Supplier::new(
            "Green Farms".to_string(),
            Some("12 Orchard Lane".to_string()),
            None,
        );

        assert!(result.is_ok());
        let supplier = result.unwrap();
        assert_eq!(supplier.name, "Green Farms");
        assert_eq!(supplier.address.as_deref(), Some("12 Orchard Lane"));
        assert!(supplier.phone.is_none());
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = Supplier::new("   ".to_string(), None, None);

        assert!(matches!(result.unwrap_err(), SupplierError::NameEmpty));
    }

    #[test]
    fn should_drop_blank_contact_fields() {
        let supplier =
            Supplier::new("Dairy Co".to_string(), Some(" ".to_string()), Some("".to_string()))
                .unwrap();

        assert!(supplier.address.is_none());
        assert!(supplier.phone.is_none());
    }

    #[test]
    fn should_keep_identity_when_revised() {
        let supplier = Supplier::new("Dairy Co".to_string(), None, None).unwrap();

        let revised = supplier
            .revise("Dairy Company".to_string(), None, Some("555-0101".to_string()))
            .unwrap();

        assert_eq!(revised.id, supplier.id);
        assert_eq!(revised.created_at, supplier.created_at);
        assert_eq!(revised.phone.as_deref(), Some("555-0101"));
    }
}
