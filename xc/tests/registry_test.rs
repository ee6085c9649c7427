use xc::*;

#[test]
fn test_registry_round_trip() {
    let reg = Registry::global();
    assert_eq!(reg.len(), Functional::ALL.len());

    for f in Functional::ALL {
        let name = reg.lookup_by_id(f).unwrap();
        assert_eq!(reg.lookup_by_name(name).unwrap(), f);
        assert_eq!(f.to_string(), name);
        assert_eq!(name.parse::<Functional>().unwrap(), f);
    }

    for (name, f) in reg.iter() {
        assert!(reg.contains_name(name));
        assert!(reg.contains_id(f));
    }
}

#[test]
fn test_registry_names_are_sorted_and_distinct() {
    let names = Registry::global().names();
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();

    assert_eq!(names, sorted);
    assert!(names.contains(&"B3LYP"));
    assert!(names.contains(&"revPBE_X"));
}

#[test]
fn test_registry_lookup_missing() {
    let reg = Registry::global();

    assert!(matches!(reg.lookup_by_name("PBE"), Err(XcError::NotFound(_))));
    assert!(!reg.contains_name("pbe0"));

    let partial = Registry::from_table(&[("SlaterExchange", Functional::SlaterExchange)]).unwrap();
    assert!(matches!(partial.lookup_by_id(Functional::LYP), Err(XcError::NotFound(_))));
}

#[test]
fn test_registry_rejects_duplicates() {
    let dup_name = Registry::from_table(&[
        ("B88", Functional::B88),
        ("B88", Functional::LYP),
    ]);
    assert!(matches!(dup_name, Err(XcError::DuplicateValue(_))));

    let dup_id = Registry::from_table(&[
        ("B88", Functional::B88),
        ("Becke88", Functional::B88),
    ]);
    assert!(matches!(dup_id, Err(XcError::DuplicateValue(_))));
}
