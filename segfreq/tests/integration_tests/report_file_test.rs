// tests/integration_tests/report_file_test.rs
use super::common::{create_test_file, setup_transcript};
use anyhow::Result;
use segfreq::{Settings, process_file};
use std::fs;

#[test]
fn test_report_lands_next_to_input() -> Result<()> {
    let (temp_dir, input) = setup_transcript()?;

    let (output, _) = process_file(&input, &Settings::default())?;

    assert_eq!(
        output,
        temp_dir
            .path()
            .join("top_segments_segmented_001 Full Transcription (v3)_LW.txt")
    );
    let content = fs::read_to_string(&output)?;
    assert!(content.starts_with("No.\tSegment\tCount\tPercentage\n1\t去\t5\t26.32%\n"));
    Ok(())
}

#[test]
fn test_rerun_is_deterministic_and_overwrites() -> Result<()> {
    let (temp_dir, input) = setup_transcript()?;
    let stale = create_test_file(
        temp_dir.path(),
        "top_segments_segmented_001 Full Transcription (v3)_LW.txt",
        "old report\n",
    )?;

    let (first_path, _) = process_file(&input, &Settings::default())?;
    assert_eq!(first_path, stale);
    let first = fs::read_to_string(&first_path)?;
    assert!(!first.contains("old report"));

    let (second_path, _) = process_file(&input, &Settings::default())?;
    let second = fs::read_to_string(&second_path)?;

    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_every_row_has_four_columns() -> Result<()> {
    let (_temp_dir, input) = setup_transcript()?;
    let (output, report) = process_file(&input, &Settings::default())?;

    let content = fs::read_to_string(output)?;
    let rows: Vec<&str> = content.lines().skip(1).collect();
    assert_eq!(rows.len(), report.len());

    for (index, row) in rows.iter().enumerate() {
        let columns: Vec<&str> = row.split('\t').collect();
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0], (index + 1).to_string());
        assert!(columns[3].ends_with('%'));
    }
    Ok(())
}
