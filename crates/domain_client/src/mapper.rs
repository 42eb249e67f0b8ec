//! Client translation
//!
//! Clients have no parent record, so both directions are plain field copies.

use crate::client::{Client, NewClient};
use crate::dto::ClientDto;

/// Translates between [`ClientDto`] and the client domain records
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientMapper;

impl ClientMapper {
    /// Converts a transfer record into an unsaved client, dropping any id
    pub fn to_domain(&self, dto: ClientDto) -> NewClient {
        NewClient {
            name: dto.name,
            date_of_birth: dto.date_of_birth,
            address: dto.address,
            contact_information: dto.contact_information,
        }
    }

    /// Converts a persisted client into its transfer record
    pub fn to_dto(&self, client: &Client) -> ClientDto {
        ClientDto {
            id: Some(client.id),
            name: client.name.clone(),
            date_of_birth: client.date_of_birth,
            address: client.address.clone(),
            contact_information: client.contact_information.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::ClientId;

    fn dto() -> ClientDto {
        ClientDto {
            id: Some(ClientId::new(99)),
            name: "John Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            address: "123 Main St".to_string(),
            contact_information: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_to_domain_copies_fields() {
        let new_client = ClientMapper.to_domain(dto());
        assert_eq!(new_client.name, "John Doe");
        assert_eq!(new_client.address, "123 Main St");
        assert_eq!(new_client.contact_information, "9876543210");
    }

    #[test]
    fn test_to_dto_carries_identity() {
        let client = ClientMapper.to_domain(dto()).with_id(ClientId::new(1));
        let back = ClientMapper.to_dto(&client);
        assert_eq!(back.id, Some(ClientId::new(1)));
        assert_eq!(back.name, client.name);
        assert_eq!(back.date_of_birth, client.date_of_birth);
    }
}
