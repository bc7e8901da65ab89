use jiff::civil::{Date, date};
use laudo_core::category::ScaleId;
use laudo_core::models::{
    BreastUpdate, Case, CaseUpdate, ContrastUptake, LesionField, ManualOverride, NoduleField,
    NoteFlag, ProstateUpdate,
};
use laudo_export::assemble::{
    ReportFormat, assemble_full_report, assemble_summary, render_sections, section_order,
};
use laudo_export::sections::SectionKind;
use laudo_scales::catalog::FallbackCatalog;
use laudo_scales::classify::ReportContext;

const TODAY: Date = date(2026, 10, 16);

fn ctx() -> ReportContext<'static> {
    ReportContext::new(&FallbackCatalog, TODAY)
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn peripheral_lesion_case() -> Case {
    let mut case = Case::new(ScaleId::Pirads);
    assert!(case.apply(CaseUpdate::Prostate(ProstateUpdate::AddLesion)));
    for change in [
        LesionField::Zone(some("peripheral")),
        LesionField::T2(Some(3)),
        LesionField::Dwi(Some(3)),
        LesionField::Dce(ContrastUptake::Positive),
    ] {
        assert!(case.apply(CaseUpdate::Prostate(ProstateUpdate::Lesion { index: 0, change })));
    }
    case
}

fn probably_benign_nodule_case() -> Case {
    let mut case = Case::new(ScaleId::Birads);
    assert!(case.apply(CaseUpdate::Breast(BreastUpdate::AddNodule)));
    for change in [
        NoduleField::Shape(some("oval")),
        NoduleField::Margins(some("circumscribed")),
        NoduleField::Side(some("right")),
    ] {
        assert!(case.apply(CaseUpdate::Breast(BreastUpdate::Nodule { index: 0, change })));
    }
    case
}

#[test]
fn upgraded_lesion_drives_impression_and_recommendation() {
    let case = peripheral_lesion_case();
    let report = assemble_full_report(&case, &ctx(), ReportFormat::PlainText).unwrap();

    assert!(report.contains("PI-RADS® categoria 4: alta probabilidade"));
    assert!(report.contains("Lesão índice: lesão 1 na zona periférica."));
    assert!(report.contains("RECOMENDAÇÃO:\nRecomenda-se biópsia dirigida da lesão índice."));
    assert!(report.contains("Escores: T2 3, DWI 3, DCE positivo. Categoria PI-RADS® 4."));
}

#[test]
fn manual_category_keeps_computed_recommendation() {
    let mut case = probably_benign_nodule_case();
    assert!(case.apply(CaseUpdate::CategoryOverride(ManualOverride::new("6"))));

    let report = assemble_full_report(&case, &ctx(), ReportFormat::PlainText).unwrap();
    assert!(report.contains("BI-RADS® categoria 6: malignidade comprovada por biópsia."));
    assert!(report.contains("categoria calculada: 3"));
    assert!(report.contains("Recomenda-se controle mamográfico em curto intervalo (6 meses)."));
}

#[test]
fn manual_recommendation_is_used_verbatim() {
    let mut case = probably_benign_nodule_case();
    assert!(case.apply(CaseUpdate::RecommendationOverride(ManualOverride::new(
        "Correlacionar com ultrassonografia."
    ))));

    let summary = assemble_summary(&case, &ctx(), ReportFormat::PlainText).unwrap();
    assert!(summary.ends_with("RECOMENDAÇÃO:\nCorrelacionar com ultrassonografia."));
}

#[test]
fn empty_case_renders_defaults() {
    let report =
        assemble_full_report(&Case::new(ScaleId::Birads), &ctx(), ReportFormat::PlainText).unwrap();

    assert!(report.starts_with("MAMOGRAFIA DIGITAL\n\nACHADOS:\n"));
    assert!(report.contains("Não foram caracterizados nódulos."));
    assert!(report.contains("Não há calcificações suspeitas."));
    assert!(report.contains("BI-RADS® categoria 1: negativo."));
    assert!(!report.contains("INDICAÇÃO"));
    assert!(!report.contains("COMPARAÇÃO"));
    assert!(!report.contains("TÉCNICA"));
}

#[test]
fn prostate_report_has_technique_after_indication() {
    assert_eq!(
        section_order(ScaleId::Pirads),
        vec![
            SectionKind::Indication,
            SectionKind::Technique,
            SectionKind::Findings,
            SectionKind::Comparison,
            SectionKind::Impression,
            SectionKind::Recommendation,
            SectionKind::Notes,
        ]
    );
    assert!(!section_order(ScaleId::Birads).contains(&SectionKind::Technique));

    let mut case = peripheral_lesion_case();
    assert!(case.apply(CaseUpdate::IndicationKind(some("elevated_psa"))));
    let sections = render_sections(&case, &ctx(), &section_order(ScaleId::Pirads));
    let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
    assert_eq!(&kinds[..3], &[
        SectionKind::Indication,
        SectionKind::Technique,
        SectionKind::Findings
    ]);
}

#[test]
fn summary_has_three_sections() {
    let sections = render_sections(
        &peripheral_lesion_case(),
        &ctx(),
        laudo_export::assemble::SUMMARY_SECTIONS,
    );
    assert_eq!(sections.len(), 3);

    let summary =
        assemble_summary(&peripheral_lesion_case(), &ctx(), ReportFormat::PlainText).unwrap();
    assert!(summary.starts_with("ACHADOS:\n"));
    assert_eq!(summary.matches("\n\n").count(), 2);
}

#[test]
fn assembly_is_idempotent() {
    let case = peripheral_lesion_case();
    for format in [ReportFormat::PlainText, ReportFormat::Html] {
        let first = assemble_full_report(&case, &ctx(), format).unwrap();
        let second = assemble_full_report(&case, &ctx(), format).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn html_escapes_free_text() {
    let mut case = probably_benign_nodule_case();
    assert!(case.apply(CaseUpdate::NoteText(some("<script>alert(1)</script> & mais"))));

    let html = assemble_full_report(&case, &ctx(), ReportFormat::Html).unwrap();
    assert!(html.starts_with("<h3>Mamografia digital</h3>\n<h3>Achados</h3>"));
    assert!(html.contains("<h3>Observações</h3>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&amp; mais"));
    assert!(!html.contains("<script>"));
}

#[test]
fn html_breaks_lines_within_a_section() {
    let html =
        assemble_full_report(&Case::new(ScaleId::Birads), &ctx(), ReportFormat::Html).unwrap();
    assert!(html.contains(
        "<p>Não foram caracterizados nódulos.<br>Não há calcificações suspeitas.<br>"
    ));
}

#[test]
fn control_characters_are_stripped() {
    let mut case = Case::new(ScaleId::Birads);
    assert!(case.apply(CaseUpdate::NoteText(some("linha\u{7} com\u{0} ruído"))));

    let report = assemble_full_report(&case, &ctx(), ReportFormat::PlainText).unwrap();
    assert!(report.contains("OBSERVAÇÕES:\nlinha com ruído"));
}

#[test]
fn notes_follow_the_scale() {
    let mut case = Case::new(ScaleId::Pirads);
    for flag in [NoteFlag::DenseBreastUltrasound, NoteFlag::TargetedBiopsy] {
        assert!(case.apply(CaseUpdate::Note { flag, set: true }));
    }

    let report = assemble_full_report(&case, &ctx(), ReportFormat::PlainText).unwrap();
    assert!(report.contains("biópsia pode ser dirigida por fusão"));
    assert!(!report.contains("Mamas densas"));
}

#[test]
fn full_report_opens_with_the_exam_title() {
    let case = peripheral_lesion_case();
    let plain = assemble_full_report(&case, &ctx(), ReportFormat::PlainText).unwrap();
    assert!(plain.starts_with("RESSONÂNCIA MAGNÉTICA MULTIPARAMÉTRICA DA PRÓSTATA\n\n"));
    assert_eq!(plain.matches("RESSONÂNCIA MAGNÉTICA").count(), 1);

    let html = assemble_full_report(&case, &ctx(), ReportFormat::Html).unwrap();
    assert!(html.starts_with("<h3>Ressonância magnética multiparamétrica da próstata</h3>\n"));

    let summary = assemble_summary(&case, &ctx(), ReportFormat::Html).unwrap();
    assert!(summary.starts_with("<h3>Achados</h3>"));
    assert!(!summary.contains("Ressonância magnética multiparamétrica"));
}
