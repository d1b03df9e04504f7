//! Error categories and atomicity of rejected mutations.

use crate::common::*;
use consolemock::{AddressInput, Command, Error, ObjectKey};

const JSON_PATCH: &str = "application/json-patch+json";

fn patch_space(json_patch: &str, patch_type: &str) -> Command {
    Command::PatchAddressSpace {
        input: ObjectKey::new("mars_as2", "app2_ns"),
        json_patch: json_patch.into(),
        patch_type: patch_type.into(),
    }
}

#[test]
fn unknown_namespace_is_not_found() {
    let mut executor = create_executor();
    let err = executor
        .execute(Command::Addresses {
            namespace: Some("app9_ns".into()),
            address_space: None,
            first: None,
            offset: None,
        })
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(err.to_string().contains("app9_ns"));
}

#[test]
fn patch_type_errors() {
    let mut executor = create_executor();
    let err = executor
        .execute(patch_space("{}", "application/strategic-merge-patch+json"))
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));

    let err = executor
        .execute(patch_space("[]", "text/plain"))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
}

#[test]
fn malformed_patch_fails() {
    let mut executor = create_executor();
    let err = executor
        .execute(patch_space("[{\"op\":", JSON_PATCH))
        .unwrap_err();
    assert!(matches!(err, Error::PatchFailed { .. }));
}

#[test]
fn rejected_patch_leaves_resource_unchanged() {
    let mut executor = create_executor();
    let before = all_spaces(&mut executor).items[2].resource.clone();

    let cases = [
        r#"[{"op":"replace","path":"/Metadata/Namespace","value":"app1_ns"}]"#,
        r#"[{"op":"replace","path":"/Spec/Plan","value":"platinum"}]"#,
        r#"[{"op":"remove","path":"/Spec/Nothing"}]"#,
        r#"[{"op":"replace","path":"/Spec/Type","value":"shared"}]"#,
    ];
    for patch in cases {
        assert!(executor.execute(patch_space(patch, JSON_PATCH)).is_err(), "{}", patch);
    }

    let after = all_spaces(&mut executor).items[2].resource.clone();
    assert_eq!(before, after);
}

#[test]
fn uid_change_is_immutable_field() {
    let mut executor = create_executor();
    let err = executor
        .execute(patch_space(
            r#"[{"op":"replace","path":"/Metadata/Uid","value":"00000000-0000-0000-0000-000000000000"}]"#,
            JSON_PATCH,
        ))
        .unwrap_err();
    assert!(matches!(err, Error::ImmutableField { .. }));
}

#[test]
fn invalid_address_type_rejected_without_side_effects() {
    let mut executor = create_executor();
    let err = executor
        .execute(Command::CreateAddress {
            input: AddressInput::new("mars_as2", "app2_ns", "ares", "brokered-queue", "pipe"),
        })
        .unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(all_addresses(&mut executor).total, 21);
}
