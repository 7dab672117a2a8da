use crate::score::*;

#[test]
fn test_creation() {
    let score = HardSoftScore::of(-2, -100);
    assert_eq!(score.hard(), -2);
    assert_eq!(score.soft(), -100);
    assert_eq!(HardSoftScore::of_hard(-3), HardSoftScore::of(-3, 0));
    assert_eq!(HardSoftScore::of_soft(-7), HardSoftScore::of(0, -7));
    assert_eq!(score.level(ScoreLevel::Soft), -100);
}

#[test]
fn test_feasibility() {
    assert!(HardSoftScore::of(0, -1000).is_feasible());
    assert!(HardSoftScore::ZERO.is_feasible());
    assert!(!HardSoftScore::ONE_HARD.is_feasible());
}

#[test]
fn test_hard_level_dominates() {
    let overlapping = HardSoftScore::of(-1, 0);
    let far_from_hint = HardSoftScore::of(0, -1000);
    assert!(far_from_hint > overlapping);
    assert!(far_from_hint.is_better_than(&overlapping));

    assert!(HardSoftScore::of(0, -50) > HardSoftScore::of(0, -100));
    assert!(HardSoftScore::of(-1, -1000) > HardSoftScore::of(-2, 0));
}

#[test]
fn test_arithmetic() {
    let s1 = HardSoftScore::of(-1, -100);
    let s2 = HardSoftScore::of(-1, -50);

    assert_eq!(s1 + s2, HardSoftScore::of(-2, -150));
    assert_eq!(s1 - s2, HardSoftScore::of(0, -50));
    assert_eq!(-s1, HardSoftScore::of(1, 100));
    assert_eq!(HardSoftScore::ONE_HARD.scaled(3), HardSoftScore::of_hard(-3));

    let total: HardSoftScore = [HardSoftScore::ONE_HARD, HardSoftScore::ONE_SOFT]
        .into_iter()
        .sum();
    assert_eq!(total, HardSoftScore::of(-1, -1));
    assert_eq!(HardSoftScore::zero(), HardSoftScore::ZERO);
}

#[test]
fn test_parse() {
    assert_eq!("0hard/-100soft".parse(), Ok(HardSoftScore::of(0, -100)));
    assert_eq!(" -1hard/0soft ".parse(), Ok(HardSoftScore::of(-1, 0)));
    assert_eq!(
        "-1hard".parse::<HardSoftScore>(),
        Err(ScoreParseError::Format("-1hard".to_string()))
    );
    assert!(matches!(
        "xhard/0soft".parse::<HardSoftScore>(),
        Err(ScoreParseError::Number { level: "hard", .. })
    ));
}

#[test]
fn test_display_round_trips_through_parse() {
    let score = HardSoftScore::of(-1, -100);
    assert_eq!(score.to_string(), "-1hard/-100soft");
    assert_eq!(format!("{:?}", score), "HardSoftScore(-1, -100)");
    assert_eq!(score.to_string().parse(), Ok(score));
}
