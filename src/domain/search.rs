use super::*;

/// Case-insensitive substring match on the contact name, in list order.
/// Each hit comes with its index in `contacts`. An empty term matches every contact.
pub fn search_by_name<'a>(contacts: &'a [Contact], term: &str) -> Vec<(usize, &'a Contact)> {
    let term = term.to_lowercase();

    contacts
        .iter()
        .enumerate()
        .filter(|(_, contact)| contact.name.to_lowercase().contains(&term))
        .collect()
}

/// Orders contacts by name, ignoring case. Equal names keep their relative order.
pub fn sort_by_name(contacts: &mut [Contact]) {
    // sort_by_cached_key is stable
    contacts.sort_by_cached_key(|contact| contact.name.to_lowercase());
}
