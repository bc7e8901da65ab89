use laudo_core::category::Category;
use laudo_core::models::{ContrastUptake, Lesion};
use laudo_scales::error::ScoringError;
use laudo_scales::scoring::{Guideline, PIRADS_V2, PIRADS_V2_1, Sequence, score_lesion};

fn lesion(zone: &str, t2: Option<u8>, dwi: Option<u8>, dce: ContrastUptake) -> Lesion {
    Lesion {
        zone: Some(zone.to_string()),
        t2,
        dwi,
        dce,
        ..Lesion::new()
    }
}

#[test]
fn peripheral_dwi_three_with_positive_contrast_is_upgraded() {
    let l = lesion("peripheral", Some(2), Some(3), ContrastUptake::Positive);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(4)));
}

#[test]
fn peripheral_without_positive_contrast_keeps_dwi() {
    for dce in [ContrastUptake::Negative, ContrastUptake::NotAssessed] {
        let l = lesion("peripheral", Some(5), Some(3), dce);
        assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(3)));
    }
}

#[test]
fn contrast_only_matters_at_the_boundary() {
    let l = lesion("peripheral", None, Some(4), ContrastUptake::Positive);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(4)));
    let l = lesion("peripheral", None, Some(5), ContrastUptake::Positive);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(5)));
}

#[test]
fn transition_zone_follows_t2_with_dwi_adjustment() {
    let l = lesion("transition", Some(3), Some(5), ContrastUptake::NotAssessed);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(4)));

    let l = lesion("transition", Some(3), Some(4), ContrastUptake::Positive);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(3)));

    let l = lesion("transition", Some(4), Some(5), ContrastUptake::NotAssessed);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(4)));
}

#[test]
fn guideline_versions_differ_on_transition_t2_two() {
    let l = lesion("transition", Some(2), Some(4), ContrastUptake::NotAssessed);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(3)));
    assert_eq!(score_lesion(&l, &PIRADS_V2), Ok(Category(2)));
}

#[test]
fn central_and_stromal_zones_take_the_higher_sequence() {
    let l = lesion("central", Some(2), Some(4), ContrastUptake::Positive);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(4)));

    let l = lesion("anterior_stroma", Some(3), None, ContrastUptake::NotAssessed);
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Ok(Category(3)));
}

#[test]
fn out_of_range_sub_score_is_rejected() {
    let l = lesion("peripheral", Some(2), Some(6), ContrastUptake::Negative);
    assert_eq!(
        score_lesion(&l, &PIRADS_V2_1),
        Err(ScoringError::OutOfRangeScore {
            sequence: Sequence::Dwi,
            value: 6
        })
    );

    let l = lesion("transition", Some(0), Some(3), ContrastUptake::Negative);
    assert!(matches!(
        score_lesion(&l, &PIRADS_V2_1),
        Err(ScoringError::OutOfRangeScore {
            sequence: Sequence::T2,
            ..
        })
    ));
}

#[test]
fn unset_or_unknown_zone_is_rejected() {
    let mut l = lesion("peripheral", Some(3), Some(3), ContrastUptake::Negative);
    l.zone = None;
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Err(ScoringError::MissingZone));

    l.zone = Some("seminal".to_string());
    assert_eq!(score_lesion(&l, &PIRADS_V2_1), Err(ScoringError::MissingZone));
}

#[test]
fn unset_dominant_sequence_is_reported() {
    let l = lesion("peripheral", Some(4), None, ContrastUptake::Positive);
    assert_eq!(
        score_lesion(&l, &PIRADS_V2_1),
        Err(ScoringError::MissingScore(Sequence::Dwi))
    );
}

#[test]
fn scores_stay_in_range_and_move_at_most_one_step() {
    let dces = [
        ContrastUptake::Positive,
        ContrastUptake::Negative,
        ContrastUptake::NotAssessed,
    ];
    for guideline in [&PIRADS_V2_1, &PIRADS_V2] {
        for zone in ["peripheral", "transition", "central", "anterior_stroma"] {
            for t2 in 1..=5u8 {
                for dwi in 1..=5u8 {
                    for dce in dces {
                        let l = lesion(zone, Some(t2), Some(dwi), dce);
                        let score = score_lesion(&l, guideline).unwrap().value();
                        assert!((1..=5).contains(&score));
                        let dominant = match zone {
                            "peripheral" => dwi,
                            "transition" => t2,
                            _ => t2.max(dwi),
                        };
                        assert!(score >= dominant && score <= dominant + 1);
                    }
                }
            }
        }
    }
}

#[test]
fn guidelines_resolve_by_version() {
    assert_eq!(Guideline::by_version("2.1").unwrap().version, "2.1");
    assert_eq!(Guideline::by_version("v2").unwrap().version, "2");
    assert!(Guideline::by_version("3").is_none());
}
