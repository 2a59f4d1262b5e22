use crate::exclusion::ExclusionList;
use crate::params::ParameterMap;

/// Replacement value for every excluded parameter.
pub const FILTERED: &str = "[FILTERED]";

/// Copy `form`, replacing the whole value list of every excluded key with
/// a single [`FILTERED`] entry.
///
/// Keys are compared against the list case-insensitively; the first
/// matching entry wins. The input is never modified.
pub fn mask_secrets(form: &ParameterMap, excluded: &ExclusionList) -> ParameterMap {
    let mut copy = ParameterMap::new();
    for (key, values) in form.iter() {
        match excluded.find(key) {
            Some(entry) => {
                tracing::trace!(key, entry, "filtering parameter");
                copy.insert(key, vec![FILTERED.to_string()]);
            }
            None => copy.insert(key, values.to_vec()),
        }
    }
    copy
}
