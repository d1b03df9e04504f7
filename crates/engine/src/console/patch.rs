//! Patch application shared by address spaces and addresses
//!
//! A patch runs against the entity's serialized form. The stored entity is
//! only replaced after the patched document passes every check and decodes
//! back into the typed entity.

use consolemock_core::{
    get_at_pointer, get_at_pointer_mut, Error, JsonPatch, JsonPointer, ObjectKey, PatchType,
    Result,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const IMMUTABLE_METADATA: [&str; 4] = ["Name", "Namespace", "Uid", "CreationTimestamp"];

/// Accept only patch types this console can execute
pub(super) fn check_patch_type(patch_type: &str) -> Result<()> {
    match PatchType::from_media_type(patch_type) {
        Some(t) if t.is_supported() => Ok(()),
        Some(t) => Err(Error::unsupported(format!(
            "patch type '{}' is not supported, only '{}' is",
            t,
            PatchType::JsonPatch
        ))),
        None => Err(Error::invalid_argument(format!(
            "unrecognised patch type '{}'",
            patch_type
        ))),
    }
}

fn plan_pointer() -> JsonPointer {
    JsonPointer::root().key("Spec").key("Plan")
}

/// Name of the plan a patched document refers to
///
/// Accepts a bare plan name or a plan object carrying `Metadata.Name`.
fn plan_name(plan: Option<&Value>) -> Option<&str> {
    match plan? {
        Value::String(name) => Some(name),
        other => other.pointer("/Metadata/Name").and_then(Value::as_str),
    }
}

/// Apply `json_patch` to `current`, returning the validated replacement
///
/// `what` names the resource kind in error messages. `resolve_plan` maps a
/// plan name to the catalog plan's serialized form and is only called when
/// the patch changed `Spec.Plan`.
pub(super) fn apply_patch<T, F>(
    what: &str,
    key: &ObjectKey,
    current: &T,
    json_patch: &str,
    patch_type: &str,
    resolve_plan: F,
) -> Result<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(&str) -> Result<Value>,
{
    check_patch_type(patch_type)?;
    let patch: JsonPatch = json_patch.parse()?;

    let original = serde_json::to_value(current)
        .map_err(|e| Error::patch_failed(format!("cannot serialize {} {}: {}", what, key, e)))?;
    let mut patched = patch.apply(&original)?;

    for field in IMMUTABLE_METADATA {
        let pointer = JsonPointer::root().key("Metadata").key(field);
        if get_at_pointer(&patched, &pointer) != get_at_pointer(&original, &pointer) {
            return Err(Error::immutable_field(format!(
                "immutable parts of {} {} cannot be patched",
                what, key
            )));
        }
    }

    let plan = plan_pointer();
    if get_at_pointer(&patched, &plan) != get_at_pointer(&original, &plan) {
        let name = plan_name(get_at_pointer(&patched, &plan)).ok_or_else(|| {
            Error::patch_failed(format!(
                "Spec.Plan of {} {} must be a plan name or a plan object",
                what, key
            ))
        })?;
        let resolved = resolve_plan(name)?;
        if let Some(slot) = get_at_pointer_mut(&mut patched, &plan) {
            *slot = resolved;
        }
    }

    serde_json::from_value(patched)
        .map_err(|e| Error::patch_failed(format!("patched {} {} is not valid: {}", what, key, e)))
}
