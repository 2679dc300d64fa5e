use netname_scheme::{
    DEFAULT_NAME, Error, LATEST, NAMING_SCHEMES, NamingScheme, NamingSchemeFlags, default_scheme,
    from_name, latest,
};

#[test]
fn test_table_order() {
    let names: Vec<_> = NAMING_SCHEMES.iter().map(|s| s.name).collect();
    assert_eq!(
        names,
        vec![
            "v238", "v239", "rhel-8.0", "rhel-8.1", "rhel-8.2", "rhel-8.3", "rhel-8.4",
            "rhel-8.5", "rhel-8.6", "rhel-8.7",
        ]
    );
}

#[test]
fn test_table_flags_never_shrink() {
    for pair in NAMING_SCHEMES.windows(2) {
        assert!(
            pair[1].flags.contains(pair[0].flags),
            "{} drops flags of {}",
            pair[1],
            pair[0]
        );
    }
}

#[test]
fn test_latest_tracks_last_row() {
    assert!(std::ptr::eq(from_name(LATEST).unwrap(), latest()));
    assert!(std::ptr::eq(latest(), &NAMING_SCHEMES[NAMING_SCHEMES.len() - 1]));
}

#[test]
fn test_lookups_share_the_table_across_crates() {
    let last = NAMING_SCHEMES.last().unwrap();
    assert!(std::ptr::eq(NAMING_SCHEMES.iter().last().unwrap(), latest()));
    assert!(std::ptr::eq(from_name("rhel-8.7").unwrap(), last));
    assert!(
        NAMING_SCHEMES
            .iter()
            .any(|row| std::ptr::eq(row, default_scheme()))
    );
}

#[test]
fn test_rhel_8_7_flags() {
    let scheme = from_name("rhel-8.7").unwrap();
    assert_eq!(
        scheme.flags,
        NamingSchemeFlags::SR_IOV_V
            | NamingSchemeFlags::NPAR_ARI
            | NamingSchemeFlags::BRIDGE_NO_SLOT
            | NamingSchemeFlags::SLOT_FUNCTION_ID
            | NamingSchemeFlags::INDEX_16BIT
    );
}

#[test]
fn test_default_resolves() {
    assert_eq!(from_name(DEFAULT_NAME), Some(default_scheme()));
}

#[test]
fn test_parse_unknown_scheme() {
    assert_eq!(
        "v999".parse::<&NamingScheme>(),
        Err(Error::UnknownScheme("v999".to_string()))
    );
}
