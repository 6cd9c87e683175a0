use super::*;

#[test]
fn test_section_serializes_as_capitalized_name() {
    let json = serde_json::to_string(&Section::Experience).unwrap();
    assert_eq!(json, r#""Experience""#);

    let section: Section = serde_json::from_str(r#""Certifications""#).unwrap();
    assert_eq!(section, Section::Certifications);
}

#[test]
fn test_section_from_str_is_case_insensitive() {
    assert_eq!("education".parse::<Section>().unwrap(), Section::Education);
    assert_eq!(" SKILLS ".parse::<Section>().unwrap(), Section::Skills);
    assert!("hobbyhorse".parse::<Section>().is_err());
}

#[test]
fn test_section_display_matches_as_str() {
    for section in Section::ALL {
        assert_eq!(section.to_string(), section.as_str());
        assert_eq!(section.as_str().parse::<Section>().unwrap(), section);
    }
}

#[test]
fn test_structured_fields_default_is_empty() {
    let fields = StructuredFields::default();
    assert!(fields.is_empty());
    assert!(fields.skills.is_empty());
}

#[test]
fn test_structured_fields_with_skill_is_not_empty() {
    let fields = StructuredFields {
        skills: vec!["Rust".to_string()],
        ..Default::default()
    };
    assert!(!fields.is_empty());
}

#[test]
fn test_structured_fields_absent_values_serialize_as_null() {
    let fields = StructuredFields {
        email: Some("jane@example.com".to_string()),
        ..Default::default()
    };
    let value = serde_json::to_value(&fields).unwrap();
    assert_eq!(value["email"], "jane@example.com");
    assert!(value["name"].is_null());
    assert!(value["experience_years"].is_null());
    assert_eq!(value["skills"], serde_json::json!([]));
}

#[test]
fn test_chunk_ongoing() {
    let mut chunk = Chunk::plain("Acme Corp\nJan 2020 - Present");
    assert!(!chunk.is_ongoing());

    chunk.start_date = Some("Jan 2020".to_string());
    assert!(chunk.is_ongoing());

    chunk.end_date = Some("Mar 2022".to_string());
    assert!(!chunk.is_ongoing());
}

#[test]
fn test_chunk_len_counts_characters() {
    let chunk = Chunk::plain("• café");
    assert_eq!(chunk.len(), 6);
    assert!(!chunk.is_empty());
}

#[test]
fn test_chunking_strategy_serde() {
    let json = serde_json::to_string(&ChunkingStrategy::SlidingWindow).unwrap();
    assert_eq!(json, r#""sliding_window""#);
    assert_eq!(ChunkingStrategy::default(), ChunkingStrategy::Empty);
}

#[test]
fn test_extraction_empty_result() {
    let extraction = Extraction::default();
    assert!(extraction.is_empty_result());
    assert_eq!(extraction.report.strategy, ChunkingStrategy::Empty);
}

#[test]
fn test_extraction_json_shape() {
    let extraction = Extraction {
        fields: StructuredFields::default(),
        chunks: vec![Chunk {
            chunk_text: "Built the thing.".to_string(),
            section: Some(Section::Projects),
            company: None,
            start_date: Some("2019".to_string()),
            end_date: Some("2021".to_string()),
        }],
        report: ChunkingReport {
            strategy: ChunkingStrategy::Sections,
            dropped_short: 1,
            split_oversized: 0,
            split_pieces: 0,
        },
    };

    let value = serde_json::to_value(&extraction).unwrap();
    assert_eq!(value["chunks"][0]["section"], "Projects");
    assert_eq!(value["chunks"][0]["start_date"], "2019");
    assert_eq!(value["report"]["strategy"], "sections");

    let back: Extraction = serde_json::from_value(value).unwrap();
    assert_eq!(back, extraction);
}

#[test]
fn test_extraction_schema_names_fields() {
    let schema = schemars::schema_for!(Extraction);
    let json = serde_json::to_string(&schema).unwrap();
    assert!(json.contains("chunk_text"));
    assert!(json.contains("experience_years"));
}
