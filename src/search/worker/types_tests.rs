//! Tests for worker types

use super::*;

#[test]
fn test_request_carries_pairs_in_order() {
    let request = SearchRequest {
        pairs: vec![
            ("tumor_type".to_string(), "lung".to_string()),
            ("therapy".to_string(), "erlotinib".to_string()),
        ],
        request_id: 1,
        cancel_token: CancellationToken::new(),
    };

    assert_eq!(request.pairs[0].0, "tumor_type");
    assert_eq!(request.pairs[1].0, "therapy");
    assert!(!request.cancel_token.is_cancelled());
}
