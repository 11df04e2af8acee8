//! Tests for contract domain models.

#[cfg(test)]
mod tests {
    use crate::contracts::{Contract, ContractStatus, ContractUpdate, NewContract, ServiceType};
    use crate::store::Record;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn new_contract() -> NewContract {
        NewContract {
            contract_number: "C010".to_string(),
            client_id: "client-1".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            status: ContractStatus::Active,
            service_type: ServiceType::MilesManagement,
            monthly_fee: dec!(199.90),
            commission_rate: dec!(10),
            notes: None,
        }
    }

    #[test]
    fn test_contract_status_serialization() {
        assert_eq!(
            serde_json::to_string(&ContractStatus::Active).unwrap(),
            r#""active""#
        );
        assert_eq!(
            serde_json::to_string(&ContractStatus::Suspended).unwrap(),
            r#""suspended""#
        );
    }

    #[test]
    fn test_service_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ServiceType::MilesManagement).unwrap(),
            r#""miles_management""#
        );
    }

    #[test]
    fn test_new_contract_has_no_id_and_stamps_timestamps() {
        let contract = Contract::from(new_contract());
        assert!(contract.id().is_empty());
        assert_eq!(contract.created_at, contract.updated_at);
    }

    #[test]
    fn test_empty_patch_leaves_contract_unchanged() {
        let mut contract = Contract::from(new_contract());
        contract.set_id("1".to_string());
        let before = contract.clone();

        contract.apply(ContractUpdate::default());
        assert_eq!(contract, before);
    }

    #[test]
    fn test_patch_overwrites_present_fields_only() {
        let mut contract = Contract::from(new_contract());
        contract.apply(ContractUpdate {
            status: Some(ContractStatus::Suspended),
            monthly_fee: Some(dec!(249.90)),
            ..Default::default()
        });

        assert_eq!(contract.status, ContractStatus::Suspended);
        assert_eq!(contract.monthly_fee, dec!(249.90));
        // Untouched fields keep their prior values.
        assert_eq!(contract.contract_number, "C010");
        assert_eq!(contract.commission_rate, dec!(10));
    }

    #[test]
    fn test_patch_can_clear_notes() {
        let mut contract = Contract::from(NewContract {
            notes: Some("renewal pending".to_string()),
            ..new_contract()
        });

        contract.apply(ContractUpdate {
            notes: Some(None),
            ..Default::default()
        });
        assert_eq!(contract.notes, None);
    }

    #[test]
    fn test_any_status_transition_is_accepted() {
        // The status set is closed but transitions are not validated.
        let mut contract = Contract::from(new_contract());
        contract.apply(ContractUpdate {
            status: Some(ContractStatus::Expired),
            ..Default::default()
        });
        contract.apply(ContractUpdate {
            status: Some(ContractStatus::Active),
            ..Default::default()
        });
        assert_eq!(contract.status, ContractStatus::Active);
    }
}
