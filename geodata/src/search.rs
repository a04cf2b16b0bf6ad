use crate::types::RegionCollection;

/// Returns the subset of regions whose name equals `term`, ignoring case.
///
/// Exact equality only, no substring matching and no whitespace trimming.
/// Regions without a name never match. Dataset order is preserved.
pub fn filter_by_name(collection: &RegionCollection, term: &str) -> RegionCollection {
    let needle = term.to_lowercase();

    let regions = collection
        .regions
        .iter()
        .filter(|region| {
            region
                .name()
                .is_some_and(|name| name.to_lowercase() == needle)
        })
        .cloned()
        .collect();

    RegionCollection::new(regions)
}
