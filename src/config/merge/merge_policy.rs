//! Merge rules: templates first, database values override per key.

use crate::types::ConfigTree;

/// Overlay `db` on `templates`.
///
/// Every templated namespace starts from its template. Each namespace/key in
/// `db` then replaces the slot it names, so keys the database does not
/// mention keep their template default. Namespaces only present in `db` are
/// copied as-is.
pub fn overlay_on_templates(templates: ConfigTree, db: ConfigTree) -> ConfigTree {
    let mut merged = templates;
    for (namespace, values) in db {
        merged.namespace_entry(namespace).extend(values);
    }
    merged
}
