use super::*;

#[test]
fn reads_name_from_bare_query() {
    assert_eq!(GuestName::from_query("name=Budi").as_deref(), Some("Budi"));
}

#[test]
fn decodes_plus_and_percent_escapes() {
    let guest = GuestName::from_query("?name=Budi+Santoso%20%26%20Keluarga");
    assert_eq!(guest.as_deref(), Some("Budi Santoso & Keluarga"));
}

#[test]
fn reads_name_from_full_url_and_ignores_fragment() {
    let guest = GuestName::from_query("https://example.test/?lang=id&name=Sari#rsvp");
    assert_eq!(guest.as_deref(), Some("Sari"));
}

#[test]
fn first_name_parameter_wins() {
    let guest = GuestName::from_query("name=Ana&name=Bob");
    assert_eq!(guest.as_deref(), Some("Ana"));
}

#[test]
fn absent_or_blank_name_uses_placeholder() {
    for query in ["", "lang=id", "name=", "name=+++", "https://example.test/"] {
        let guest = GuestName::from_query(query);
        assert!(!guest.is_present(), "{query}");
        assert_eq!(guest.display("Tamu Undangan"), "Tamu Undangan");
    }
}
