use super::mock_generator::{
    fill_placeholders, generate_answer, weighted_pick, QuestionnaireGenerator,
    QUESTION_STATUS_WEIGHTS,
};
use crate::domain::validation::PoolValidator;
use crate::domain::{QuestionId, QuestionStatus, QuestionnaireStatus};
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;

fn anchor() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_weighted_pick_converges_to_weights() {
    let mut rng = StdRng::seed_from_u64(7);
    let draws = 130_000;
    let mut counts: HashMap<QuestionStatus, usize> = HashMap::new();

    for _ in 0..draws {
        let status = weighted_pick(&QUESTION_STATUS_WEIGHTS, &mut rng).unwrap();
        *counts.entry(*status).or_default() += 1;
    }

    let total_weight: f64 = QUESTION_STATUS_WEIGHTS.iter().map(|(_, w)| w).sum();
    for (status, weight) in QUESTION_STATUS_WEIGHTS {
        let observed = counts[&status] as f64 / draws as f64;
        let expected = weight / total_weight;
        assert!(
            (observed - expected).abs() < 0.01,
            "{:?}: observed {} expected {}",
            status,
            observed,
            expected
        );
    }
}

#[test]
fn test_weighted_pick_edge_cases() {
    let mut rng = StdRng::seed_from_u64(1);
    let empty: [(u8, f64); 0] = [];
    assert!(weighted_pick(&empty, &mut rng).is_none());

    let single = [("only", 5.0)];
    assert_eq!(weighted_pick(&single, &mut rng), Some(&"only"));

    // Zero total weight leaves the draw outside every interval.
    let zeros = [("a", 0.0), ("b", 0.0)];
    assert_eq!(weighted_pick(&zeros, &mut rng), Some(&"b"));
}

#[test]
fn test_fill_placeholders_leaves_no_braces() {
    let mut rng = StdRng::seed_from_u64(3);
    let text = fill_placeholders(
        "Are {subject} documented according to {standard} requirements?",
        &mut rng,
    );
    assert!(!text.contains('{'));
    assert!(text.starts_with("Are "));
}

#[test]
fn test_generate_answer_by_status() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(generate_answer(QuestionStatus::UnAnswered, &mut rng).is_none());
    let flagged = generate_answer(QuestionStatus::Flagged, &mut rng).unwrap();
    assert!(["Requires clarification", "Discrepancy found"].contains(&flagged.as_str()));
}

#[test]
fn test_unanswered_iff_answer_absent() {
    let mut generator = QuestionnaireGenerator::seeded(11, anchor());
    for i in 1..=500 {
        let question = generator.generate_question(i);
        assert_eq!(
            question.status == QuestionStatus::UnAnswered,
            !question.has_answer(),
            "question {}",
            question.id
        );
        match &question.id {
            QuestionId::Text(id) => assert!(id.starts_with(&format!("QID-{}", i))),
            other => panic!("unexpected id {:?}", other),
        }
    }
}

#[test]
fn test_question_count_in_range() {
    let mut generator = QuestionnaireGenerator::seeded(5, anchor());
    for _ in 0..20 {
        let q = generator.generate_base_questionnaire();
        assert!((50..=100).contains(&q.questions.len()));
        assert!(q.progress <= 100);
        assert!(q.created_at <= q.updated_at);
        assert!(q.updated_at <= anchor().timestamp_millis());
        assert!(q.due_date > anchor().timestamp_millis());
    }
}

#[test]
fn test_custom_question_count() {
    let mut generator = QuestionnaireGenerator::seeded(5, anchor()).with_question_count(3, 2);
    let q = generator.generate_base_questionnaire();
    assert!((2..=3).contains(&q.questions.len()));
}

#[test]
fn test_pool_has_one_seed_per_status() {
    let pool = QuestionnaireGenerator::seeded(42, anchor()).build_pool();
    assert_eq!(pool.len(), 5);

    let ids: Vec<&str> = pool.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids, vec!["Q-001", "Q-002", "Q-003", "Q-004", "Q-005"]);

    let statuses: Vec<QuestionnaireStatus> = pool.iter().map(|q| q.status).collect();
    assert_eq!(statuses, QuestionnaireStatus::ALL.to_vec());

    let approved = &pool[3];
    assert_eq!(approved.progress, 100);
    assert!(approved.file.as_deref().unwrap().ends_with("_approved.pdf"));

    let started = &pool[1];
    assert!((1..=3).contains(&started.collaborators.len()));
    assert!(started.file.is_some());

    let review = &pool[2];
    assert!((2..=4).contains(&review.collaborators.len()));
    assert!(review.file.as_deref().unwrap().ends_with("_review.docx"));

    assert!(PoolValidator::validate(&pool).is_ok());
}

#[test]
fn test_seed_progress_ranges() {
    for seed in 0..50 {
        let pool = QuestionnaireGenerator::seeded(seed, anchor())
            .with_question_count(1, 1)
            .build_pool();
        let progress: Vec<u8> = pool.iter().map(|q| q.progress).collect();

        assert!((10..=40).contains(&progress[0]));
        assert!((41..=85).contains(&progress[1]));
        assert!((86..=99).contains(&progress[2]));
        assert_eq!(progress[3], 100);
        assert!((90..=99).contains(&progress[4]));
    }
}

#[test]
fn test_same_seed_same_pool() {
    let first = QuestionnaireGenerator::seeded(99, anchor()).build_pool();
    let second = QuestionnaireGenerator::seeded(99, anchor()).build_pool();
    assert_eq!(first, second);

    let other = QuestionnaireGenerator::seeded(100, anchor()).build_pool();
    assert_ne!(first, other);
}

#[test]
fn test_assignees_come_from_roster() {
    let roster = vec!["ana".to_string()];
    let pool = QuestionnaireGenerator::seeded(8, anchor())
        .with_assignees(roster)
        .build_pool();
    assert!(pool.iter().all(|q| q.assignee == "ana"));
}
