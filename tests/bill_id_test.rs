use billtext::bill_id::{BillId, BillType};
use billtext::parser::DocumentKind;
use billtext::IngestError;

#[test]
fn parses_type_number_and_congress() {
    let id = BillId::parse("house_bill-30-119").expect("valid id");
    assert_eq!(id.bill_type, BillType::HouseBill);
    assert_eq!(id.number, 30);
    assert_eq!(id.congress, 119);
    assert_eq!(id.bill_type.api_code(), "hr");
}

#[test]
fn maps_every_bill_type_to_its_api_code() {
    let cases = [
        ("house_bill", "hr"),
        ("senate_bill", "s"),
        ("house_concurrent_resolution", "hconres"),
        ("house_joint_resolution", "hjres"),
        ("house_resolution", "hres"),
        ("senate_concurrent_resolution", "sconres"),
        ("senate_joint_resolution", "sjres"),
        ("senate_resolution", "sres"),
    ];
    for (name, code) in cases {
        let id = BillId::parse(&format!("{name}-1-118")).unwrap();
        assert_eq!(id.bill_type.api_code(), code, "{name}");
        assert_eq!(id.bill_type.name(), name);
    }
}

#[test]
fn displays_canonical_form() {
    let id = BillId::parse("senate_resolution-712-118").unwrap();
    assert_eq!(id.to_string(), "senate_resolution-712-118");
}

#[test]
fn joint_resolutions_are_published_as_bills() {
    assert_eq!(
        BillType::HouseJointResolution.expected_kind(),
        DocumentKind::Bill
    );
    assert_eq!(BillType::SenateBill.expected_kind(), DocumentKind::Bill);
    assert_eq!(
        BillType::HouseResolution.expected_kind(),
        DocumentKind::Resolution
    );
    assert_eq!(
        BillType::SenateConcurrentResolution.expected_kind(),
        DocumentKind::Resolution
    );
}

#[test]
fn rejects_malformed_ids() {
    for raw in [
        "house_bill-30",
        "treaty-30-119",
        "house_bill-abc-119",
        "house_bill-0-119",
        "house_bill-30-",
        "",
    ] {
        match BillId::parse(raw) {
            Err(IngestError::InvalidBillId(value)) => assert_eq!(value, raw),
            other => panic!("expected InvalidBillId for {raw:?}, got {other:?}"),
        }
    }
}
