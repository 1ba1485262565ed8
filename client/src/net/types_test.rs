use super::*;

fn identity(display_name: Option<&str>) -> Identity {
    Identity {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        display_name: display_name.map(str::to_owned),
    }
}

#[test]
fn identity_deserializes_without_display_name() {
    let parsed: Identity = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ada@example.com",
    }))
    .unwrap();
    assert_eq!(parsed, identity(None));
}

#[test]
fn identity_reads_display_name() {
    let parsed: Identity = serde_json::from_value(serde_json::json!({
        "id": "u1",
        "email": "ada@example.com",
        "display_name": "Ada Lovelace",
    }))
    .unwrap();
    assert_eq!(parsed, identity(Some("Ada Lovelace")));
}
