//! End-to-end tests for coordinate extraction over synthetic raw responses
//!
//! These build response texts the shape an embeddings endpoint actually
//! returns (surrounding JSON fields, newlines inside the array) and check
//! extraction, ordering, and the error cases.

use embedscan::parsing::{
    extract_coordinate_strings, parse_response, ExtractError, EXPECTED_DIMENSION,
};

/// Build a raw response holding the given coordinate literals.
fn raw_response(coordinates: &[String]) -> String {
    format!(
        "{{\n  \"object\": \"list\",\n  \"data\": [\n    {{\n      \"object\": \"embedding\",\n      \"index\": 0,\n      \"embedding\": [\n        {}\n      ]\n    }}\n  ],\n  \"model\": \"text-embedding-ada-002\"\n}}",
        coordinates.join(",\n        ")
    )
}

/// Coordinate literals with uneven digit counts, EXPECTED_DIMENSION of them.
fn full_coordinates() -> Vec<String> {
    (0..EXPECTED_DIMENSION)
        .map(|i| format!("-0.{:0width$}", i, width = 3 + i % 5))
        .collect()
}

#[test]
fn test_full_response_round_trips_all_coordinates_in_order() {
    let coordinates = full_coordinates();
    let extracted = extract_coordinate_strings(&raw_response(&coordinates)).unwrap();

    assert_eq!(extracted, coordinates);
}

#[test]
fn test_single_line_response_is_equivalent() {
    let coordinates = full_coordinates();
    let text = format!("{{\"embedding\": [{}]}}", coordinates.join(", "));

    assert_eq!(extract_coordinate_strings(&text).unwrap(), coordinates);
}

#[test]
fn test_response_without_embedding_field() {
    let text = r#"{"error": {"message": "invalid request", "code": 400}}"#;
    assert_eq!(
        extract_coordinate_strings(text),
        Err(ExtractError::CoordinatesNotFound)
    );
}

#[test]
fn test_truncated_response_reports_actual_count() {
    let coordinates = &full_coordinates()[..100];
    let result = extract_coordinate_strings(&raw_response(coordinates));

    assert_eq!(
        result,
        Err(ExtractError::WrongDimension {
            expected: EXPECTED_DIMENSION,
            actual: 100,
        })
    );
}

#[test]
fn test_first_embedding_field_wins() {
    // A second, correctly sized array after a short first one must not rescue
    // the response: only the first match is consulted.
    let short = raw_response(&full_coordinates()[..2].to_vec());
    let full = raw_response(&full_coordinates());
    let text = format!("{} {}", short, full);

    assert_eq!(
        extract_coordinate_strings(&text),
        Err(ExtractError::WrongDimension {
            expected: EXPECTED_DIMENSION,
            actual: 2,
        })
    );
}

#[test]
fn test_parse_response_partitions_the_embedding() {
    let coordinates = full_coordinates();
    let groups = parse_response(&raw_response(&coordinates)).unwrap();

    let grouped: usize = groups.values().map(Vec::len).sum();
    assert_eq!(grouped, EXPECTED_DIMENSION);

    // -0.000 has mantissa length 0, -0.0001000 has 4; both shapes occur.
    assert!(groups.keys().all(|&length| length <= 8));
}
