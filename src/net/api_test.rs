use super::*;

#[test]
fn empty_request_builds_empty_query() {
    assert_eq!(QueueRequest::default().to_query_string(), "");
}

#[test]
fn full_request_orders_parameters() {
    let request = QueueRequest {
        term: Some("spam".to_owned()),
        sort_field: Some("createdAt".to_owned()),
        sort_direction: Some(SortDirection::Desc),
        cursor: Some("abc123".to_owned()),
    };
    assert_eq!(
        request.to_query_string(),
        "term=spam&sortField=createdAt&sortDirection=desc&cursor=abc123"
    );
}

#[test]
fn blank_term_is_omitted() {
    let request = QueueRequest {
        term: Some(String::new()),
        ..QueueRequest::default()
    };
    assert_eq!(request.to_query_string(), "");
}

#[test]
fn term_is_percent_encoded() {
    let request = QueueRequest {
        term: Some("free money".to_owned()),
        ..QueueRequest::default()
    };
    assert_eq!(request.to_query_string(), "term=free%20money");
}
