//! Seeded synthesis of the questionnaire pool.
//!
//! Every random choice goes through the generator's own RNG, so a fixed seed and
//! anchor time reproduce the same pool byte for byte.

use chrono::{DateTime, Duration, Utc};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

use crate::domain::member::default_members;
use crate::domain::{
    Question, QuestionId, QuestionStatus, Questionnaire, QuestionnaireStatus, QuestionnaireType,
};

pub const DEFAULT_QUESTION_COUNT: RangeInclusive<usize> = 50..=100;

pub const QUESTION_STATUS_WEIGHTS: [(QuestionStatus, f64); 5] = [
    (QuestionStatus::Approved, 2.0),
    (QuestionStatus::ReadyToApprove, 3.0),
    (QuestionStatus::Flagged, 1.0),
    (QuestionStatus::Answered, 4.0),
    (QuestionStatus::UnAnswered, 3.0),
];

const CUSTOMER_NAMES: [&str; 4] = ["Biogen", "Novartis", "Pfizer", "Moderna"];

const QUESTION_TEMPLATES: [&str; 5] = [
    "Has the {module} been properly validated?",
    "Are {subject} documented according to {standard} requirements?",
    "Was {process} completed within the expected timeframe?",
    "Has the {document} been reviewed and approved?",
    "Were any deviations found during {activity}?",
];

const PLACEHOLDERS: [(&str, [&str; 3]); 6] = [
    ("{module}", ["System", "Software", "Policy"]),
    ("{subject}", ["Records", "Reports", "Logs"]),
    ("{standard}", ["ISO 27001", "SOC 2", "GDPR"]),
    ("{process}", ["Audit", "Testing", "Verification"]),
    ("{document}", ["Report", "Contract", "Agreement"]),
    ("{activity}", ["Review", "Inspection", "Assessment"]),
];

fn answer_candidates(status: QuestionStatus) -> &'static [&'static str] {
    match status {
        QuestionStatus::Approved => &["Yes", "Confirmed", "Verified"],
        QuestionStatus::ReadyToApprove => &["Provisional approval", "Pending final review"],
        QuestionStatus::Flagged => &["Requires clarification", "Discrepancy found"],
        QuestionStatus::Answered => &["Yes", "No"],
        QuestionStatus::UnAnswered => &[],
    }
}

/// Uniform choice from a non-empty slice.
fn pick<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// Picks a value with probability proportional to its weight.
///
/// Draws uniformly in `[0, total)` and returns the first item whose interval
/// holds the draw. Rounding can leave the draw past the last interval, in which
/// case the last item is returned. `None` only for an empty slice.
pub fn weighted_pick<'a, T, R: Rng + ?Sized>(items: &'a [(T, f64)], rng: &mut R) -> Option<&'a T> {
    let (last, _) = items.last()?;
    let total: f64 = items.iter().map(|(_, weight)| weight).sum();
    let mut draw = rng.gen::<f64>() * total;

    for (value, weight) in items {
        if draw < *weight {
            return Some(value);
        }
        draw -= weight;
    }
    Some(last)
}

pub fn fill_placeholders<R: Rng + ?Sized>(template: &str, rng: &mut R) -> String {
    let mut text = template.to_string();
    for (placeholder, choices) in PLACEHOLDERS {
        let choice = pick(rng, &choices);
        text = text.replacen(placeholder, choice, 1);
    }
    text
}

pub fn generate_answer<R: Rng + ?Sized>(status: QuestionStatus, rng: &mut R) -> Option<String> {
    let candidates = answer_candidates(status);
    if candidates.is_empty() {
        None
    } else {
        Some(pick(rng, candidates).to_string())
    }
}

pub struct QuestionnaireGenerator<R: Rng = StdRng> {
    rng: R,
    anchor: DateTime<Utc>,
    question_count: RangeInclusive<usize>,
    assignees: Vec<String>,
    next_id: usize,
}

impl QuestionnaireGenerator<StdRng> {
    pub fn seeded(seed: u64, anchor: DateTime<Utc>) -> Self {
        Self::new(StdRng::seed_from_u64(seed), anchor)
    }
}

impl<R: Rng> QuestionnaireGenerator<R> {
    pub fn new(rng: R, anchor: DateTime<Utc>) -> Self {
        Self {
            rng,
            anchor,
            question_count: DEFAULT_QUESTION_COUNT,
            assignees: default_members().into_iter().map(|m| m.id).collect(),
            next_id: 0,
        }
    }

    pub fn with_question_count(mut self, min: usize, max: usize) -> Self {
        self.question_count = min.min(max)..=min.max(max);
        self
    }

    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = assignees;
        self
    }

    /// Draws a fresh seed from this generator, for components that need their
    /// own reproducible stream.
    pub fn fork_seed(&mut self) -> u64 {
        self.rng.gen()
    }

    pub fn generate_question(&mut self, index: usize) -> Question {
        let status = weighted_pick(&QUESTION_STATUS_WEIGHTS, &mut self.rng)
            .copied()
            .unwrap_or(QuestionStatus::UnAnswered);

        let suffix = uuid::Builder::from_random_bytes(self.rng.gen())
            .into_uuid()
            .simple()
            .to_string();
        let template = *pick(&mut self.rng, &QUESTION_TEMPLATES);

        Question {
            id: QuestionId::Text(format!("QID-{}{}", index, &suffix[..8])),
            text: fill_placeholders(template, &mut self.rng),
            status,
            answer: generate_answer(status, &mut self.rng),
        }
    }

    /// A questionnaire with randomized content and the next sequential id.
    /// Status starts as `Processing`; seed records overwrite it.
    pub fn generate_base_questionnaire(&mut self) -> Questionnaire {
        self.next_id += 1;
        let id = format!("Q-{:03}", self.next_id);

        let created = self.anchor - Duration::minutes(self.rng.gen_range(60..=90 * 24 * 60));
        let elapsed = (self.anchor - created).num_milliseconds();
        let updated = created + Duration::milliseconds(self.rng.gen_range(0..=elapsed));
        let due = self.anchor + Duration::days(self.rng.gen_range(1..=30));

        let customer_name = pick(&mut self.rng, &CUSTOMER_NAMES).to_string();
        let kind = *pick(&mut self.rng, &QuestionnaireType::ALL);
        let assignee = if self.assignees.is_empty() {
            String::new()
        } else {
            pick(&mut self.rng, &self.assignees).clone()
        };
        let progress = self.rng.gen_range(0..=100);

        let count = self.rng.gen_range(self.question_count.clone());
        let questions = (1..=count).map(|i| self.generate_question(i)).collect();

        Questionnaire {
            id,
            status: QuestionnaireStatus::Processing,
            customer_name,
            kind,
            assignee,
            collaborators: Vec::new(),
            description: None,
            file: None,
            notes: None,
            progress,
            created_at: created.timestamp_millis(),
            updated_at: updated.timestamp_millis(),
            due_date: due.timestamp_millis(),
            questions,
        }
    }

    /// The five seed records, `Q-001` through `Q-005`, one per status.
    pub fn build_pool(&mut self) -> Vec<Questionnaire> {
        QuestionnaireStatus::ALL
            .into_iter()
            .map(|status| self.seed_questionnaire(status))
            .collect()
    }

    fn seed_questionnaire(&mut self, status: QuestionnaireStatus) -> Questionnaire {
        let mut q = self.generate_base_questionnaire();
        q.status = status;

        match status {
            QuestionnaireStatus::Processing => {
                q.progress = self.rng.gen_range(10..=40);
            }
            QuestionnaireStatus::Started => {
                q.progress = self.rng.gen_range(41..=85);
                q.collaborators = self.collaborators(1..=3);
                let extension = *pick(&mut self.rng, &["pdf", "docx"]);
                q.file = Some(format!("{}.{}", self.word(5), extension));
            }
            QuestionnaireStatus::ReadyForReview => {
                q.progress = self.rng.gen_range(86..=99);
                q.collaborators = self.collaborators(2..=4);
                q.file = Some(format!("{}_review.docx", self.word(5)));
            }
            QuestionnaireStatus::Approved => {
                q.progress = 100;
                q.file = Some(format!("{}_approved.pdf", self.word(5)));
            }
            QuestionnaireStatus::Completed => {
                q.progress = self.rng.gen_range(90..=99);
            }
        }

        q
    }

    fn collaborators(&mut self, count: RangeInclusive<usize>) -> Vec<String> {
        let count = self.rng.gen_range(count);
        (0..count)
            .map(|_| Name().fake_with_rng::<String, _>(&mut self.rng))
            .collect()
    }

    fn word(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| self.rng.gen_range(b'a'..=b'z') as char)
            .collect()
    }
}
