use laudo_core::category::{Category, ScaleId};
use laudo_core::option::{CatalogKey, CatalogOption};
use laudo_scales::catalog::{FallbackCatalog, LayeredCatalog, OptionCatalog};
use laudo_core::models::{BreastUpdate, Case, CaseUpdate};
use laudo_scales::classify::{ReportContext, classify};
use laudo_scales::{all_scales, scale_for};

#[test]
fn fallback_is_non_empty_for_every_known_key() {
    for scale in all_scales() {
        for key in scale.catalog_keys() {
            assert!(
                !FallbackCatalog.options(scale.id(), *key).is_empty(),
                "{} has no fallback for {key}",
                scale.name()
            );
        }
    }
}

#[test]
fn fallback_categories_belong_to_their_scale() {
    for scale in all_scales() {
        for key in scale.catalog_keys() {
            for option in FallbackCatalog.options(scale.id(), *key).iter() {
                assert!(scale.id().contains(option.associated_category));
            }
        }
    }
}

#[test]
fn every_category_has_label_and_recommendation() {
    for scale in all_scales() {
        for category in scale.id().categories() {
            assert!(!scale.risk_label(category).is_empty());
            assert!(!scale.recommendation(category).is_empty());
        }
    }
}

#[test]
fn scales_declare_their_surface() {
    assert_eq!(scale_for(ScaleId::Birads).exam_title(), "Mamografia digital");
    assert!(scale_for(ScaleId::Pirads).records_technique());
    assert_eq!(
        scale_for(ScaleId::Birads).category_code(Category(4)),
        "BI-RADS® 4"
    );
}

#[test]
fn string_keyed_lookup() {
    assert!(!FallbackCatalog.get_options(ScaleId::Birads, "distribution").is_empty());
    assert!(FallbackCatalog.get_options(ScaleId::Birads, "nope").is_empty());
    assert_eq!(
        FallbackCatalog.label(ScaleId::Birads, CatalogKey::Margins, "spiculated"),
        "espiculadas"
    );
    assert_eq!(
        FallbackCatalog.label(ScaleId::Birads, CatalogKey::Margins, "wavy"),
        "wavy"
    );
}

#[test]
fn live_options_take_precedence() {
    let mut catalog = LayeredCatalog::new();
    catalog.insert(
        ScaleId::Birads,
        CatalogKey::Density,
        vec![CatalogOption::new("x", "padrão X", 2)],
    );
    let options = catalog.options(ScaleId::Birads, CatalogKey::Density);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label, "padrão X");

    let margins = catalog.options(ScaleId::Birads, CatalogKey::Margins);
    assert_eq!(margins, FallbackCatalog.options(ScaleId::Birads, CatalogKey::Margins));
}

#[test]
fn empty_live_list_falls_back() {
    let mut catalog = LayeredCatalog::new();
    catalog.insert(ScaleId::Pirads, CatalogKey::Zone, Vec::new());
    assert!(!catalog.options(ScaleId::Pirads, CatalogKey::Zone).is_empty());
}

#[test]
fn live_catalog_from_json() {
    let json = r#"{
        "birads": {
            "margins": [
                { "value": "spiculated", "label": "espiculadas", "associated_category": 5, "weight": 9 }
            ],
            "unknown_key": []
        },
        "lirads": { "margins": [] }
    }"#;
    let catalog = LayeredCatalog::from_json(json).unwrap();
    assert_eq!(catalog.live_len(), 1);
    let found = catalog
        .find(ScaleId::Birads, CatalogKey::Margins, "spiculated")
        .unwrap();
    assert_eq!(found.weight, 9);
    assert!(!found.uses_laterality);

    assert!(LayeredCatalog::from_json("[1, 2").is_err());
}

#[test]
fn live_options_outside_the_scale_are_dropped() {
    let mut catalog = LayeredCatalog::new();
    catalog.insert(
        ScaleId::Birads,
        CatalogKey::Density,
        vec![
            CatalogOption::new("a", "padrão A", 9),
            CatalogOption::new("b", "padrão B", 2),
        ],
    );
    let options = catalog.options(ScaleId::Birads, CatalogKey::Density);
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "b");
}

#[test]
fn key_with_only_invalid_options_falls_back() {
    let mut catalog = LayeredCatalog::new();
    catalog.insert(
        ScaleId::Birads,
        CatalogKey::Density,
        vec![CatalogOption::new("a", "padrão A", 9)],
    );
    assert_eq!(
        catalog.options(ScaleId::Birads, CatalogKey::Density),
        FallbackCatalog.options(ScaleId::Birads, CatalogKey::Density)
    );

    let mut case = Case::new(ScaleId::Birads);
    assert!(case.apply(CaseUpdate::Breast(BreastUpdate::Density(Some("a".to_string())))));
    let ctx = ReportContext::new(&catalog, jiff::civil::date(2026, 10, 16));
    let result = classify(&case, &ctx);
    assert!(ScaleId::Birads.contains(result.category));
    assert_eq!(result.category, Category(1));
    assert!(!scale_for(ScaleId::Birads).risk_label(result.category).is_empty());
}

#[test]
fn live_catalog_from_json_drops_out_of_range_categories() {
    let json = r#"{
        "pirads": {
            "zone": [
                { "value": "pz", "label": "zona periférica", "associated_category": 0 }
            ]
        }
    }"#;
    let catalog = LayeredCatalog::from_json(json).unwrap();
    assert_eq!(
        catalog.options(ScaleId::Pirads, CatalogKey::Zone),
        FallbackCatalog.options(ScaleId::Pirads, CatalogKey::Zone)
    );
}
