//! Tests for the CSV export collaborator.

#[cfg(test)]
mod tests {
    use crate::errors::ExportError;
    use crate::export::export_records;
    use serde_json::json;

    #[test]
    fn test_empty_input_is_refused() {
        let records: Vec<serde_json::Value> = Vec::new();
        let result = export_records(&records, None);
        assert!(matches!(result, Err(ExportError::NothingToExport)));
    }

    #[test]
    fn test_headers_default_to_first_record_keys() {
        let records = vec![json!({"name": "Smiles", "category": "miles"})];
        let csv = export_records(&records, None).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("name,category"));
        assert_eq!(lines.next(), Some("Smiles,miles"));
    }

    #[test]
    fn test_explicit_headers_override_key_set() {
        let records = vec![json!({"name": "Smiles", "category": "miles"})];
        let csv = export_records(&records, Some(&["category"])).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("category"));
        assert_eq!(lines.next(), Some("miles"));
    }

    #[test]
    fn test_comma_in_field_is_quoted() {
        let records = vec![json!({"name": "Azul, TudoAzul"})];
        let csv = export_records(&records, None).unwrap();
        assert!(csv.contains(r#""Azul, TudoAzul""#));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let records = vec![json!({"rule": r#"1 point = "R$ 1,00""#})];
        let csv = export_records(&records, None).unwrap();
        assert!(csv.contains(r#""1 point = ""R$ 1,00""""#));
    }

    #[test]
    fn test_missing_field_renders_as_empty_string() {
        let records = vec![
            json!({"name": "Smiles", "notes": "airline"}),
            json!({"name": "Livelo"}),
        ];
        let csv = export_records(&records, None).unwrap();
        let second_row = csv.lines().nth(2).unwrap();
        assert_eq!(second_row, "Livelo,");
    }

    #[test]
    fn test_null_field_renders_as_empty_string() {
        let records = vec![json!({"name": "Smiles", "notes": null})];
        let csv = export_records(&records, None).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "Smiles,");
    }

    #[test]
    fn test_numeric_fields_render_verbatim() {
        let records = vec![json!({"quantity": 10000, "fee": 199.9})];
        let csv = export_records(&records, None).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, "10000,199.9");
    }
}
