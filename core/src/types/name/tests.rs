use super::*;

#[test]
fn role_name_normal_usage() {
    let name = RoleName::try_from("system:bot").unwrap();
    assert_eq!(name.as_str(), "system:bot");
    assert_eq!(name.to_string(), "system:bot");
}

#[test]
fn role_name_rejects_empty_string() {
    let result = RoleName::try_from("");
    result.unwrap_err();
}

#[test]
fn role_name_keeps_surrounding_whitespace() {
    let name = RoleName::try_from(" admin ").unwrap();
    assert_eq!(name.as_str(), " admin ");
}

#[test]
fn role_name_ordering_is_bytewise() {
    const NAMES: [&str; 5] = ["admin", "Admin", "editor", "system:bot", "viewer"];

    for l in NAMES.iter() {
        for r in NAMES.iter() {
            let name_l = RoleName::try_from(*l).unwrap();
            let name_r = RoleName::try_from(*r).unwrap();
            assert_eq!(
                name_l.cmp(&name_r),
                l.as_bytes().cmp(r.as_bytes()),
                "Comparing '{}' and '{}'",
                l,
                r
            );
        }
    }
}

#[test]
fn role_name_deserialize_validates() {
    let ok: RoleName = serde_json::from_str("\"viewer\"").unwrap();
    assert_eq!(ok.as_str(), "viewer");

    serde_json::from_str::<RoleName>("\"\"").unwrap_err();
}
