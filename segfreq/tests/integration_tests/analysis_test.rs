// tests/integration_tests/analysis_test.rs
use super::common::{create_test_file, setup_transcript};
use anyhow::Result;
use segfreq::{DEFAULT_TOP, FrequencyTable, analyze_file, segments};
use tempfile::TempDir;

#[test]
fn test_transcript_ranking() -> Result<()> {
    let (_temp_dir, path) = setup_transcript()?;
    let report = analyze_file(&path, DEFAULT_TOP)?;

    // "..." strips to an empty segment, "。" is not ASCII and stays
    assert_eq!(report.total_segments, 19);

    let first = &report.entries[0];
    assert_eq!((first.segment.as_str(), first.count), ("去", 5));
    assert_eq!(first.percentage(), "26.32%");

    let second = &report.entries[1];
    assert_eq!((second.segment.as_str(), second.count), ("我", 2));

    assert!(report.entries.iter().any(|e| e.segment == "。" && e.count == 1));
    assert!(report.entries.iter().any(|e| e.segment.is_empty() && e.count == 1));
    Ok(())
}

#[test]
fn test_ties_keep_first_seen_order() -> Result<()> {
    let (_temp_dir, path) = setup_transcript()?;
    let report = analyze_file(&path, DEFAULT_TOP)?;

    let twos: Vec<&str> = report
        .entries
        .iter()
        .filter(|e| e.count == 2)
        .map(|e| e.segment.as_str())
        .collect();
    assert_eq!(twos, vec!["我", "们", "今天"]);
    Ok(())
}

#[test]
fn test_counts_sum_to_token_count() -> Result<()> {
    let (_temp_dir, path) = setup_transcript()?;
    let content = std::fs::read_to_string(&path)?;

    let tokens = content.split_whitespace().count();
    let table: FrequencyTable = segments(&content).collect();

    assert_eq!(table.total(), u64::try_from(tokens)?);
    assert_eq!(table.iter().map(|(_, c)| c).sum::<u64>(), table.total());
    Ok(())
}

#[test]
fn test_percentages_match_counts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let content: String = (1..=40)
        .map(|i| format!("{}\n", vec![format!("w{i}"); i].join(" ")))
        .collect();
    let path = create_test_file(temp_dir.path(), "many.txt", &content)?;

    let report = analyze_file(&path, DEFAULT_TOP)?;
    assert_eq!(report.total_segments, 820);

    for entry in &report.entries {
        let expected = entry.count as f64 / 820.0 * 100.0;
        assert!((entry.share - expected).abs() < 1e-9);
        assert_eq!(entry.percentage(), format!("{expected:.2}%"));
    }
    assert!(report.entries.windows(2).all(|p| p[0].count >= p[1].count));
    Ok(())
}
