//! Tests for movement domain models.

#[cfg(test)]
mod tests {
    use crate::movements::{CurrencyKind, Movement, MovementUpdate, NewMovement, OperationType};
    use crate::store::Record;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn new_movement() -> NewMovement {
        NewMovement {
            date: NaiveDate::from_ymd_opt(2025, 9, 20).unwrap(),
            currency_kind: CurrencyKind::Miles,
            quantity: 10_000,
            program_id: "p1".to_string(),
            operation_type: OperationType::Purchase,
            partner_id: Some("s1".to_string()),
            product_label: Some("Product A".to_string()),
            product_value: Some(dec!(500)),
            conversion_factor: Some("10x1".to_string()),
            paid_value: Some(dec!(200)),
            discount_value: Some(dec!(0)),
            invested_value: Some(dec!(200)),
            total_savings: Some(dec!(300)),
        }
    }

    #[test]
    fn test_operation_type_serialization() {
        assert_eq!(
            serde_json::to_string(&OperationType::SmartPurchase).unwrap(),
            r#""smart_purchase""#
        );
        assert_eq!(
            serde_json::to_string(&OperationType::Exchange).unwrap(),
            r#""exchange""#
        );
    }

    #[test]
    fn test_currency_kind_serialization() {
        assert_eq!(
            serde_json::to_string(&CurrencyKind::Cashback).unwrap(),
            r#""cashback""#
        );
    }

    #[test]
    fn test_operation_labels() {
        assert_eq!(OperationType::SmartPurchase.label(), "Smart Purchase");
        assert_eq!(OperationType::Adjustment.label(), "Adjustment");
    }

    #[test]
    fn test_movement_json_round_trip() {
        let mut movement = Movement::from(new_movement());
        movement.set_id("m1".to_string());

        let json = serde_json::to_string(&movement).unwrap();
        let back: Movement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movement);
    }

    #[test]
    fn test_empty_patch_leaves_movement_unchanged() {
        let mut movement = Movement::from(new_movement());
        movement.set_id("m1".to_string());
        let before = movement.clone();

        movement.apply(MovementUpdate::default());
        assert_eq!(movement, before);
    }

    #[test]
    fn test_patch_merges_field_by_field() {
        let mut movement = Movement::from(new_movement());
        movement.apply(MovementUpdate {
            quantity: Some(12_000),
            operation_type: Some(OperationType::Transfer),
            ..Default::default()
        });

        assert_eq!(movement.quantity, 12_000);
        assert_eq!(movement.operation_type, OperationType::Transfer);
        assert_eq!(movement.program_id, "p1");
        assert_eq!(movement.paid_value, Some(dec!(200)));
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut movement = Movement::from(new_movement());
        movement.apply(MovementUpdate {
            partner_id: Some(None),
            total_savings: Some(None),
            ..Default::default()
        });

        assert_eq!(movement.partner_id, None);
        assert_eq!(movement.total_savings, None);
        // Outer None leaves the field untouched.
        assert_eq!(movement.invested_value, Some(dec!(200)));
    }
}
