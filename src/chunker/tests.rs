use super::*;
use crate::types::Section;

const RESUME: &str = "Jane Doe
Senior Software Engineer
jane@example.com | (555) 123-4567

Summary
Backend engineer with 8+ years of experience building payment and data platforms.

Experience
Acme Corp
Jan 2020 - Present
- Led the rewrite of the billing service in Rust
- Cut p99 latency of invoice generation by forty percent

Globex, Inc.
March 2016 to December 2019
- Maintained the Python ETL pipeline feeding the analytics warehouse
- Introduced Docker based local environments for the data team

Education
State University
B.S. Computer Science, 2012 - 2016";

fn builder() -> ChunkBuilder {
    ChunkBuilder::default()
}

#[test]
fn test_classify_line() {
    let builder = builder();
    assert_eq!(builder.classify_line(""), LineKind::Blank);
    assert_eq!(builder.classify_line("   \t"), LineKind::Blank);
    assert_eq!(
        builder.classify_line("EXPERIENCE"),
        LineKind::Header(Section::Experience)
    );
    assert_eq!(
        builder.classify_line("• Built a thing"),
        LineKind::Bullet("• Built a thing".to_string())
    );
    assert_eq!(
        builder.classify_line("1. First item"),
        LineKind::Bullet("1. First item".to_string())
    );
    assert_eq!(
        builder.classify_line("  padded text  "),
        LineKind::Text("padded text".to_string())
    );
}

#[test]
fn test_header_takes_precedence_over_bullet() {
    assert_eq!(
        builder().classify_line("- Skills"),
        LineKind::Header(Section::Skills)
    );
}

#[test]
fn test_scenario_single_experience_chunk() {
    let text = "John Smith\njohn@x.com\n\nExperience\nAcme Corp\nJan 2020 - Present\nBuilt the thing. Built another thing. Built a third thing that takes this line past fifty characters easily.";
    let (chunks, report) = builder().chunk(text);

    assert_eq!(chunks.len(), 1);
    let chunk = &chunks[0];
    assert_eq!(chunk.section, Some(Section::Experience));
    assert_eq!(chunk.company.as_deref(), Some("Acme Corp"));
    assert_eq!(chunk.start_date.as_deref(), Some("Jan 2020"));
    assert_eq!(chunk.end_date, None);
    assert!(chunk.chunk_text.starts_with("Acme Corp"));

    assert_eq!(report.strategy, ChunkingStrategy::Sections);
    // The contact block before the header is under the minimum
    assert_eq!(report.dropped_short, 1);
}

#[test]
fn test_full_resume_sections_and_metadata() {
    let (chunks, report) = builder().chunk(RESUME);

    assert_eq!(report.strategy, ChunkingStrategy::Sections);
    let sections: Vec<_> = chunks.iter().map(|c| c.section).collect();
    assert_eq!(
        sections,
        vec![
            None,
            Some(Section::Summary),
            Some(Section::Experience),
            Some(Section::Experience),
            Some(Section::Education),
        ]
    );

    let acme = &chunks[2];
    assert_eq!(acme.company.as_deref(), Some("Acme Corp"));
    assert_eq!(acme.start_date.as_deref(), Some("Jan 2020"));
    assert!(acme.is_ongoing());

    let globex = &chunks[3];
    assert_eq!(globex.company.as_deref(), Some("Globex, Inc."));
    assert_eq!(globex.start_date.as_deref(), Some("March 2016"));
    assert_eq!(globex.end_date.as_deref(), Some("December 2019"));

    let education = &chunks[4];
    assert_eq!(education.start_date.as_deref(), Some("2012"));
    assert_eq!(education.end_date.as_deref(), Some("2016"));
}

#[test]
fn test_header_lines_are_not_chunk_text() {
    let (chunks, _) = builder().chunk(RESUME);
    for chunk in &chunks {
        assert!(!chunk.chunk_text.lines().any(|line| line == "Experience"));
        assert!(!chunk.chunk_text.lines().any(|line| line == "Summary"));
    }
}

#[test]
fn test_chunks_respect_bounds_and_order() {
    let (chunks, _) = builder().chunk(RESUME);

    let mut last_position = 0;
    for chunk in &chunks {
        let len = chunk.len();
        assert!((50..=500).contains(&len), "chunk length {} out of bounds", len);

        let position = RESUME[last_position..]
            .find(&chunk.chunk_text)
            .map(|offset| offset + last_position)
            .expect("chunk text appears in source order");
        last_position = position + chunk.chunk_text.len();
    }
}

#[test]
fn test_oversized_line_falls_back_to_sliding_window() {
    let text = "word ".repeat(400);
    let (chunks, report) = builder().chunk(&text);

    // Split pieces alone do not count as section output
    assert_eq!(report.strategy, ChunkingStrategy::SlidingWindow);
    assert_eq!(report.split_oversized, 1);
    assert!(!chunks.is_empty());
    for chunk in &chunks {
        assert!(chunk.len() <= 500);
        assert_eq!(chunk.section, None);
        assert_eq!(chunk.company, None);
        assert_eq!(chunk.start_date, None);
    }
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[test]
fn test_oversized_segment_is_split_within_its_section() {
    let paragraph = "Designed the settlement engine that reconciles card payments across regions. "
        .repeat(8);
    let role = format!("Acme Corp\nJan 2020 - Present\n{}", paragraph.trim());
    let text = format!(
        "Experience\n{}\n\nEducation\nState University\nB.S. Computer Science, 2012 - 2016",
        role
    );

    let (chunks, report) = builder().chunk(&text);

    assert_eq!(report.strategy, ChunkingStrategy::Sections);
    assert_eq!(report.split_oversized, 1);
    assert_eq!(report.split_pieces, 2);
    assert_eq!(chunks.len(), 3);
    assert!(chunks.iter().all(|c| c.len() <= 500));

    let sections: Vec<_> = chunks.iter().map(|c| c.section).collect();
    assert_eq!(
        sections,
        vec![
            Some(Section::Experience),
            Some(Section::Experience),
            Some(Section::Education),
        ]
    );

    // The pieces cut at a sentence end and together hold the whole entry
    assert!(chunks[0].chunk_text.ends_with("regions."));
    let experience: String = chunks[..2].iter().map(|c| c.chunk_text.as_str()).collect();
    assert_eq!(without_whitespace(&experience), without_whitespace(&role));

    assert_eq!(chunks[0].company.as_deref(), Some("Acme Corp"));
    assert_eq!(chunks[0].start_date.as_deref(), Some("Jan 2020"));
    assert!(chunks[0].is_ongoing());
}

#[test]
fn test_short_line_before_long_line_is_kept() {
    let text = format!(
        "Acme Corp\n{}\n\nSkills\nRust, Python, PostgreSQL, Docker, Kubernetes and AWS",
        "x".repeat(495)
    );

    let (chunks, report) = builder().chunk(&text);

    assert_eq!(report.strategy, ChunkingStrategy::Sections);
    assert_eq!(report.split_oversized, 1);
    assert_eq!(chunks.len(), 3);
    assert!(chunks[0].chunk_text.starts_with("Acme Corp\n"));
    assert_eq!(chunks[0].company.as_deref(), Some("Acme Corp"));
    assert_eq!(chunks[0].section, None);
    assert_eq!(chunks[1].chunk_text, "x".repeat(50));
    assert_eq!(chunks[2].section, Some(Section::Skills));
    assert!(chunks.iter().all(|c| (50..=500).contains(&c.len())));
}

#[test]
fn test_short_text_is_empty_result() {
    let (chunks, report) = builder().chunk("john@x.com");
    assert!(chunks.is_empty());
    assert_eq!(report.strategy, ChunkingStrategy::Empty);
    assert_eq!(report.dropped_short, 1);
}

#[test]
fn test_empty_text() {
    let (chunks, report) = builder().chunk("");
    assert!(chunks.is_empty());
    assert_eq!(report, ChunkingReport::default());

    let (chunks, _) = builder().chunk("\n\n   \n");
    assert!(chunks.is_empty());
}

#[test]
fn test_section_pass_output_is_never_mixed_with_windows() {
    let (chunks, report) = builder().chunk(RESUME);
    let (section_chunks, _) = builder().section_pass(RESUME);

    assert_eq!(report.strategy, ChunkingStrategy::Sections);
    assert_eq!(chunks, section_chunks);
}

#[test]
fn test_custom_limits() {
    let limits = ChunkingConfig {
        min_chunk_length: 10,
        max_chunk_length: 60,
        sliding_window_overlap: 5,
    };
    let builder = ChunkBuilder::new(limits, SectionClassifier::default());
    assert_eq!(builder.limits(), &limits);

    let (chunks, _) =
        builder.chunk("Skills\nRust, SQL, Docker\n\nProjects\nA small compiler for a toy language");

    assert_eq!(chunks.len(), 2);
    assert_eq!(chunks[0].chunk_text, "Rust, SQL, Docker");
    assert_eq!(chunks[0].section, Some(Section::Skills));
    assert_eq!(chunks[1].chunk_text, "A small compiler for a toy language");
    assert_eq!(chunks[1].section, Some(Section::Projects));
}

#[test]
fn test_custom_vocabulary_headers() {
    let classifier = SectionClassifier::new(&[crate::vocabulary::SectionSynonym::new(
        "Berufserfahrung",
        Section::Experience,
    )])
    .unwrap();
    let builder = ChunkBuilder::new(ChunkingConfig::default(), classifier);

    let (chunks, _) = builder.chunk(
        "BERUFSERFAHRUNG\nEntwicklung einer Plattform fuer Zahlungsabwicklung im Onlinehandel.",
    );

    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].section, Some(Section::Experience));
}

#[test]
fn test_chunking_is_deterministic() {
    let builder = builder();
    assert_eq!(builder.chunk(RESUME), builder.chunk(RESUME));
}
