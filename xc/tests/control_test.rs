use std::io::Write as _;
use xc::*;

#[test]
fn test_control_defaults() {
    let ctrl = XcControl::from_str_content("").unwrap();

    assert_eq!(ctrl, XcControl::new());
    assert_eq!(ctrl.get_backend(), Backend::Builtin);
    assert_eq!(ctrl.get_functional(), "PBE0");
    assert_eq!(ctrl.get_spin(), Spin::Unpolarized);
    assert_eq!(ctrl.get_dens_threshold(), None);
    assert_eq!(ctrl.get_parallel_min_len(), 8192);
}

#[test]
fn test_control_key_value() {
    let text = "
        # xc settings
        xc_backend = external
        xc_scheme  = B3LYP      # hybrid
        spin_scheme = spin
        xc_dens_threshold = 1E-10
        xc_parallel_min_len = 64
    ";

    let ctrl = XcControl::from_str_content(text).unwrap();
    assert_eq!(ctrl.get_backend(), Backend::External);
    assert_eq!(ctrl.get_functional(), "B3LYP");
    assert_eq!(ctrl.get_spin(), Spin::Polarized);
    assert_eq!(ctrl.get_dens_threshold(), Some(1E-10));
    assert_eq!(ctrl.get_parallel_min_len(), 64);

    let k = ctrl.build().unwrap();
    assert_eq!(k.functional(), Functional::B3LYP);
    assert_eq!(k.backend(), Backend::External);
    assert!(k.is_polarized());
    assert!(k.is_hyb());
    assert_eq!(k.dens_threshold(), 1E-10);
}

#[test]
fn test_control_rejects_bad_input() {
    let bad = [
        "xc_scheme = PBE",
        "xc_backend = gpu",
        "spin_scheme = collinear",
        "xc_dens_threshold = -1",
        "xc_dens_threshold = abc",
        "xc_parallel_min_len = 0",
        "xc_cutoff = 10",
        "xc_scheme",
    ];

    for text in bad {
        assert!(XcControl::from_str_content(text).is_err(), "{}", text);
    }

    assert!(matches!(
        XcControl::from_str_content("xc_scheme = PBE"),
        Err(XcError::NotFound(_))
    ));
}

#[test]
fn test_control_json() {
    let json = r#"{ "backend": "external", "functional": "revPBE_X", "spin": "polarized" }"#;
    let ctrl = XcControl::from_json(json).unwrap();

    assert_eq!(ctrl.get_backend(), Backend::External);
    assert_eq!(ctrl.get_functional(), "revPBE_X");
    assert_eq!(ctrl.get_spin(), Spin::Polarized);
    assert_eq!(ctrl.get_parallel_min_len(), 8192);

    let k = ctrl.build().unwrap();
    assert_eq!(k.functional(), Functional::RevPBE_X);

    assert!(matches!(
        XcControl::from_json(r#"{ "functional": "SlaterExchange", "colour": 1 }"#),
        Err(XcError::Json(_))
    ));
    assert!(matches!(
        XcControl::from_json(r#"{ "functional": "LDA" }"#),
        Err(XcError::NotFound(_))
    ));
}

#[test]
fn test_spin_spellings_agree_across_formats() {
    let spellings = [
        ("spin", Spin::Polarized),
        ("polarized", Spin::Polarized),
        ("Polarized", Spin::Polarized),
        ("nonspin", Spin::Unpolarized),
        ("unpolarized", Spin::Unpolarized),
        ("NONSPIN", Spin::Unpolarized),
    ];

    for (word, spin) in spellings {
        let text = format!("spin_scheme = {}", word);
        assert_eq!(XcControl::from_str_content(&text).unwrap().get_spin(), spin, "{}", text);

        let json = format!(r#"{{ "spin": "{}" }}"#, word);
        assert_eq!(XcControl::from_json(&json).unwrap().get_spin(), spin, "{}", json);
    }

    let json = r#"{ "backend": "External", "spin": "spin" }"#;
    assert_eq!(XcControl::from_json(json).unwrap().get_backend(), Backend::External);

    assert!(matches!(
        XcControl::from_json(r#"{ "spin": "collinear" }"#),
        Err(XcError::Json(_))
    ));
}

#[test]
fn test_control_from_file() {
    let path = std::env::temp_dir().join(format!("xc-control-{}.in", std::process::id()));

    {
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "xc_scheme = PZ81").unwrap();
        writeln!(f, "spin_scheme = nonspin").unwrap();
    }

    let ctrl = XcControl::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(ctrl.get_functional(), "PZ81");
    assert!(ctrl.build().unwrap().is_lda());

    assert!(matches!(
        XcControl::from_file(&path),
        Err(XcError::Io(_))
    ));
}
