use crate::endpoints;

#[test]
fn test_plain_ids_are_unchanged() {
    assert_eq!(endpoints::customer("c-1"), "/api/customers/c-1");
    assert_eq!(endpoints::subscription("s_9"), "/api/subscriptions/s_9");
}

#[test]
fn test_reserved_characters_are_percent_encoded() {
    assert_eq!(endpoints::customer("a/b"), "/api/customers/a%2Fb");
    assert_eq!(endpoints::bill("x?y#z"), "/api/bills/x%3Fy%23z");
    assert_eq!(
        endpoints::bill_by_number("INV 7"),
        "/api/bills/number/INV%207"
    );
}
