use std::path::PathBuf;

use laudo_cli::cli::CaseArgs;
use laudo_cli::commands::{
    Session, classify_case, list_options, load_catalog, read_case, report_case, settings,
};
use laudo_cli::config::LaudoConfig;
use laudo_core::category::ScaleId;
use laudo_core::models::{Case, CaseUpdate, ContrastUptake, LesionField, ProstateUpdate};
use laudo_export::assemble::ReportFormat;
use laudo_scales::catalog::FallbackCatalog;

fn args(case: Option<PathBuf>, guideline: Option<&str>) -> CaseArgs {
    CaseArgs {
        case,
        catalog: None,
        guideline: guideline.map(str::to_string),
        today: Some("2026-10-16".to_string()),
    }
}

/// Transition-zone lesion with T2 2 and DWI 4: 3 under v2.1, 2 under v2.
fn transition_case() -> Case {
    let mut case = Case::new(ScaleId::Pirads);
    assert!(case.apply(CaseUpdate::Prostate(ProstateUpdate::AddLesion)));
    for change in [
        LesionField::Zone(Some("transition".to_string())),
        LesionField::T2(Some(2)),
        LesionField::Dwi(Some(4)),
        LesionField::Dce(ContrastUptake::Negative),
    ] {
        assert!(case.apply(CaseUpdate::Prostate(ProstateUpdate::Lesion { index: 0, change })));
    }
    case
}

fn write_case(dir: &tempfile::TempDir, case: &Case) -> PathBuf {
    let path = dir.path().join("case.json");
    std::fs::write(&path, serde_json::to_string(case).unwrap()).unwrap();
    path
}

#[test]
fn guideline_flag_overrides_config() {
    let config = LaudoConfig::default();
    assert_eq!(settings(&config, None).unwrap().guideline.version, "2.1");
    assert_eq!(settings(&config, Some("v2")).unwrap().guideline.version, "2");
    assert!(settings(&config, Some("3")).is_err());
}

#[test]
fn classify_reads_case_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_case(&dir, &transition_case());
    let case = read_case(Some(path.as_path())).unwrap();

    let config = LaudoConfig::default();
    let current = Session::open(&config, &args(Some(path.clone()), None)).unwrap();
    let output: serde_json::Value =
        serde_json::from_str(&classify_case(&case, &current).unwrap()).unwrap();
    assert_eq!(output["category"], 3);
    assert_eq!(output["source"], "computed");

    let previous = Session::open(&config, &args(Some(path), Some("2"))).unwrap();
    let output: serde_json::Value =
        serde_json::from_str(&classify_case(&case, &previous).unwrap()).unwrap();
    assert_eq!(output["category"], 2);
}

#[test]
fn report_uses_requested_format() {
    let config = LaudoConfig::default();
    let session = Session::open(&config, &args(None, None)).unwrap();
    let case = transition_case();

    let plain = report_case(&case, &session, true, ReportFormat::PlainText).unwrap();
    assert!(plain.starts_with("ACHADOS:"));
    let html = report_case(&case, &session, false, ReportFormat::Html).unwrap();
    assert!(html.starts_with("<h3>Ressonância magnética multiparamétrica da próstata</h3>"));
    assert!(html.contains("<h3>Técnica</h3>"));
}

#[test]
fn malformed_case_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("case.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(read_case(Some(path.as_path())).is_err());
}

#[test]
fn invalid_reference_date_is_an_error() {
    let mut bad = args(None, None);
    bad.today = Some("31/02/2026".to_string());
    assert!(Session::open(&LaudoConfig::default(), &bad).is_err());
}

#[test]
fn live_catalog_file_is_layered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{ "pirads": { "zone": [ { "value": "peripheral", "label": "na ZP", "associated_category": 1 } ] } }"#,
    )
    .unwrap();

    let catalog = load_catalog(Some(path.as_path())).unwrap();
    let zones = list_options(catalog.as_ref(), "pirads", "zone").unwrap();
    assert!(zones.contains("na ZP"));
    let sectors = list_options(catalog.as_ref(), "pirads", "sector").unwrap();
    assert!(sectors.contains("no terço médio"));
}

#[test]
fn unknown_scale_or_key_is_an_error() {
    assert!(list_options(&FallbackCatalog, "lirads", "density").is_err());
    assert!(list_options(&FallbackCatalog, "birads", "zone").is_err());
    assert!(list_options(&FallbackCatalog, "birads", "colour").is_err());
}
