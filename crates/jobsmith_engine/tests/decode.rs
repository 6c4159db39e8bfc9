use jobsmith_engine::{decode_generated_text, DecodeError, JobContent};
use pretty_assertions::assert_eq;

fn well_formed_reply() -> String {
    serde_json::json!({
        "description": "We are looking for a Software Engineer to build reliable services.",
        "responsibilities": [
            "Design and implement backend services",
            "Write and review code",
            "Collaborate with product teams",
            "Debug production issues",
            "Improve developer tooling",
        ],
        "requirements": ["3+ years of experience", "Strong CS fundamentals"],
        "benefits": ["Monthly team dinners", "Annual outings"],
    })
    .to_string()
}

#[test]
fn decodes_plain_json_object() {
    let content = decode_generated_text(&well_formed_reply()).expect("decode");

    assert_eq!(
        content.description,
        "We are looking for a Software Engineer to build reliable services."
    );
    assert_eq!(content.responsibilities.len(), 5);
    assert_eq!(content.requirements.len(), 2);
    assert_eq!(content.benefits.len(), 2);
    assert!(content.skills.is_empty());
}

#[test]
fn strips_markdown_code_fences() {
    let fenced = format!("```json\n{}\n```", well_formed_reply());

    let content = decode_generated_text(&fenced).expect("decode");

    assert_eq!(content.responsibilities.len(), 5);
}

#[test]
fn round_trips_encoded_content() {
    let original = decode_generated_text(&well_formed_reply()).expect("decode");

    let encoded = serde_json::json!({
        "description": original.description,
        "responsibilities": original.responsibilities,
        "requirements": original.requirements,
        "benefits": original.benefits,
    })
    .to_string();
    let again = decode_generated_text(&encoded).expect("decode");

    assert_eq!(original, again);
}

#[test]
fn single_string_field_becomes_one_element_list() {
    let reply = serde_json::json!({
        "description": "We are hiring.",
        "responsibilities": "Own the roadmap",
        "requirements": [],
        "benefits": [],
    })
    .to_string();

    let content = decode_generated_text(&reply).expect("decode");

    assert_eq!(content.responsibilities, vec!["Own the roadmap".to_string()]);
}

#[test]
fn missing_list_fields_default_to_empty() {
    let reply = serde_json::json!({ "description": "We are hiring." }).to_string();

    let content = decode_generated_text(&reply).expect("decode");

    assert!(content.responsibilities.is_empty());
    assert!(content.requirements.is_empty());
    assert!(content.benefits.is_empty());
}

#[test]
fn sentinel_reply_decodes_as_success() {
    let reply = serde_json::json!({
        "description": "No description found for this job title",
        "responsibilities": [],
        "requirements": [],
        "benefits": [],
    })
    .to_string();

    let content = decode_generated_text(&reply).expect("decode");

    assert_eq!(content, JobContent::no_result());
}

#[test]
fn missing_description_is_malformed() {
    let reply = serde_json::json!({ "responsibilities": ["x"] }).to_string();

    assert!(matches!(
        decode_generated_text(&reply),
        Err(DecodeError::Malformed(_))
    ));
}

#[test]
fn prose_reply_is_malformed() {
    let err = decode_generated_text("Sure! Here is the job description you asked for.");

    assert!(matches!(err, Err(DecodeError::Malformed(_))));
}

#[test]
fn empty_reply_is_rejected() {
    assert_eq!(decode_generated_text("  \n "), Err(DecodeError::Empty));
    assert_eq!(decode_generated_text("```json\n```"), Err(DecodeError::Empty));
}
