//! Fixed, non-random pool for demos and tests.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Question, QuestionId, QuestionStatus, Questionnaire, QuestionnaireStatus, QuestionnaireType};

use QuestionStatus::*;

fn question(id: u64, text: &str, status: QuestionStatus, answer: &str) -> Question {
    Question {
        id: QuestionId::Number(id),
        text: text.to_string(),
        status,
        answer: (!answer.is_empty()).then(|| answer.to_string()),
    }
}

/// Vendor security question bank: text, status, answer (empty when unanswered).
const QUESTION_BANK: [(&str, QuestionStatus, &str); 30] = [
    (
        "Does your organization have a comprehensive Business Continuity Plan?",
        Approved,
        "Yes",
    ),
    (
        "How does the product authorize User access? Admin access? [local application permissions...]",
        Approved,
        "The product authorizes user access through a roles-based access control matrix...",
    ),
    (
        "How are new users provisioned in the application? [via an LDAP integration...]",
        UnAnswered,
        "",
    ),
    (
        "If yes to either of the above questions, how and when is the user or group access deprovisioned...",
        Approved,
        "User accounts are disabled or deleted from the application in a timely manner...",
    ),
    (
        "Do you have an incident management system for identifying, submitting and tracking cloud service incidents?",
        Approved,
        "Yes. This includes an intrusion detection system...",
    ),
    (
        "What testing processes are established and followed...",
        Approved,
        "SMT Data establishes rigorous testing processes...",
    ),
    (
        "How does your organization ensure that only application software verifiable as authorized...",
        Approved,
        "SMT Data ensures only authorized, tested...",
    ),
    (
        "Do change management procedures exist and are those procedures followed?",
        Answered,
        "Yes, change management procedures exist...",
    ),
    (
        "What is your strategy for engaging (or at least notifying) customers regarding upcoming functional updates?",
        UnAnswered,
        "",
    ),
    (
        "Do you encrypt customer data in storage?",
        Approved,
        "Yes, customer data in storage is encrypted...",
    ),
    (
        "Do you encrypt customer data during transmission...",
        Approved,
        "Yes, SMT Data encrypts customer data...",
    ),
    (
        "Do you log electronic access to customer data?",
        Approved,
        "Yes, electronic access to customer data is logged...",
    ),
    (
        "Describe your system development lifecycle methodology...",
        Approved,
        "SMT Data follows a structured Software Development Lifecycle...",
    ),
    (
        "In the last 12 months, have you engaged an independent auditing firm...",
        Approved,
        "Yes, SMT Data engaged an independent auditing firm...",
    ),
    (
        "Does your organization conduct training and awareness activities...",
        Answered,
        "Yes, SMT Data conducts training...",
    ),
    (
        "Are specific crisis management roles and responsibilities defined...",
        Approved,
        "Yes, SMT Data defines and documents...",
    ),
    (
        "Is there a defined problem/issue escalation plan for impacted clients?",
        Flagged,
        "Yes, SMT Data has a defined escalation process...",
    ),
    (
        "Does your organization have a comprehensive Disaster Recovery Plan?",
        Approved,
        "Yes, the organization has a comprehensive...",
    ),
    (
        "Do procedures exist to ensure that retention and destruction of data...",
        ReadyToApprove,
        "Yes, SMT Data has procedures...",
    ),
    (
        "Describe how load balancing and redundancy are utilized...",
        Approved,
        "SMT Data utilizes load balancing...",
    ),
    (
        "What are the procedures to recover systems...",
        Approved,
        "SMT Data performs data restoration checks...",
    ),
    (
        "How do you monitor and respond to alerts...",
        Answered,
        "SMT Data uses a suite of monitoring tools...",
    ),
    (
        "Do procedures exist to provide that emergency changes...",
        Answered,
        "Yes, SMT Data has procedures...",
    ),
    (
        "Which data centers will be used to serve our application?",
        UnAnswered,
        "",
    ),
    (
        "What physical security measures are in the data center?",
        Approved,
        "The data centers employ robust physical security...",
    ),
    (
        "Is there redundant power? Batteries? Generators...",
        Approved,
        "Yes, SMT Data's data centers...",
    ),
    (
        "Please describe your approach and/or practices related to application security...",
        Approved,
        "SMT Data employs a robust approach...",
    ),
    (
        "How do you monitor for and protect against common web application security vulnerabilities...",
        Approved,
        "SMT Data monitors and protects...",
    ),
    (
        "Scalability - how does the solution design and infrastructure support growth...",
        ReadyToApprove,
        "SMT Data's infrastructure, leveraging AWS...",
    ),
    (
        "What are the procedures to recover systems, applications, and data from operational failures? What is your method for testing recoverability component level versus full restore versus etc.)?",
        Approved,
        "SMT Data performs data restoration checks annually...",
    ),
];

/// The question bank with ids numbered from 1.
pub fn question_bank() -> Vec<Question> {
    QUESTION_BANK
        .iter()
        .zip(1..)
        .map(|(&(text, status, answer), id)| question(id, text, status, answer))
        .collect()
}

/// Two fixed questionnaires, timestamped relative to `anchor`.
pub fn fixture_pool(anchor: DateTime<Utc>) -> Vec<Questionnaire> {
    let at = |offset: Duration| (anchor + offset).timestamp_millis();

    vec![
        Questionnaire {
            id: "Q-001".to_string(),
            status: QuestionnaireStatus::Processing,
            customer_name: "Microsoft".to_string(),
            kind: QuestionnaireType::Security,
            assignee: "john".to_string(),
            collaborators: Vec::new(),
            description: None,
            file: None,
            notes: None,
            progress: 30,
            created_at: at(-Duration::days(1)),
            updated_at: at(-Duration::hours(1)),
            due_date: at(Duration::days(3)),
            questions: question_bank(),
        },
        Questionnaire {
            id: "Q-002".to_string(),
            status: QuestionnaireStatus::Started,
            customer_name: "Amazon".to_string(),
            kind: QuestionnaireType::Compliance,
            assignee: "emma".to_string(),
            collaborators: vec!["michael".to_string()],
            description: None,
            file: Some("compliance-checklist.pdf".to_string()),
            notes: None,
            progress: 65,
            created_at: at(-Duration::days(2)),
            updated_at: at(-Duration::minutes(30)),
            due_date: at(Duration::days(5)),
            questions: question_bank(),
        },
    ]
}
