use data_sweeper::SweepError;
use data_sweeper::export::{ExportFormat, XLSX_MIME};
use data_sweeper::ingestion::parse;
use data_sweeper::pipeline::{SweepOptions, SweepPlan, plan_for_target, sweep_batch};
use data_sweeper::source::SourceFile;
use data_sweeper::types::Value;

fn full_plan(target: ExportFormat) -> SweepPlan {
    SweepPlan {
        remove_duplicates: true,
        fill_missing: true,
        columns: None,
        target,
    }
}

#[test]
fn sweep_dedupes_fills_and_converts() {
    let file = SourceFile::from_path("tests/fixtures/scores.csv").unwrap();
    let outcome = full_plan(ExportFormat::Excel)
        .run(&file, &SweepOptions::default())
        .unwrap();

    assert_eq!(outcome.artifact.file_name, "scores.xlsx");
    assert_eq!(outcome.artifact.mime_type, XLSX_MIME);
    assert_eq!(outcome.summary.rows, 3);
    assert_eq!(outcome.summary.columns, vec!["n", "s"]);

    let back = parse(&SourceFile::new(
        outcome.artifact.file_name.clone(),
        outcome.artifact.bytes.clone(),
    ))
    .unwrap();
    let n: Vec<Value> = back.column("n").unwrap().cloned().collect();
    assert_eq!(
        n,
        vec![Value::Float64(1.0), Value::Float64(2.0), Value::Float64(1.5)]
    );

    assert_eq!(outcome.chart.series.len(), 1);
    assert_eq!(outcome.chart.series[0].values, vec![Some(1.0), Some(2.0), Some(1.5)]);
}

#[test]
fn preview_and_summary() {
    let body: String = std::iter::once("i\n".to_string())
        .chain((0..20).map(|i| format!("{i}\n")))
        .collect();
    let file = SourceFile::new("counts.csv", body.clone());

    let outcome = SweepPlan::convert_to(ExportFormat::Csv)
        .run(&file, &SweepOptions::default())
        .unwrap();

    assert_eq!(outcome.preview.row_count(), 5);
    assert_eq!(outcome.preview.rows[4], vec![Value::Int64(4)]);
    assert_eq!(outcome.summary.size_bytes, body.len());
    assert_eq!(
        outcome.summary.size_label,
        format!("{:.2} KB", body.len() as f64 / 1024.0)
    );

    let json = serde_json::to_value(&outcome.summary).unwrap();
    assert_eq!(json["file_name"], "counts.csv");
    assert_eq!(json["rows"], 20);
}

#[test]
fn column_selection_applies_before_export() {
    let file = SourceFile::from_path("tests/fixtures/people.csv").unwrap();
    let plan = SweepPlan {
        columns: Some(vec!["name".to_string(), "id".to_string()]),
        ..SweepPlan::convert_to(ExportFormat::Csv)
    };

    let outcome = plan.run(&file, &SweepOptions::default()).unwrap();
    assert_eq!(outcome.artifact.bytes, b"name,id\nAda,1\nGrace,2\n");
}

#[test]
fn one_bad_file_does_not_stop_the_batch() {
    let files = vec![
        SourceFile::from_path("tests/fixtures/people.csv").unwrap(),
        SourceFile::new("notes.docx", "not tabular"),
        SourceFile::new("broken.csv", "a\n1,2\n"),
        SourceFile::from_path("tests/fixtures/scores.csv").unwrap(),
    ];

    let results = sweep_batch(&files, &full_plan(ExportFormat::Csv), &SweepOptions::default());

    let names: Vec<&str> = results.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["people.csv", "notes.docx", "broken.csv", "scores.csv"]);

    assert!(results[0].1.is_ok());
    assert!(matches!(results[1].1, Err(SweepError::UnsupportedFormat { .. })));
    assert!(matches!(results[2].1, Err(SweepError::ParseError { .. })));
    let scores = results[3].1.as_ref().unwrap();
    assert_eq!(scores.artifact.bytes, b"n,s\n1.0,a\n2.0,b\n1.5,c\n");
}

#[test]
fn unknown_target_format_is_rejected() {
    assert_eq!(
        plan_for_target("excel").unwrap(),
        SweepPlan::convert_to(ExportFormat::Excel)
    );
    let err = plan_for_target("json").unwrap_err();
    assert!(matches!(err, SweepError::UnsupportedFormat { ref format } if format == "json"));
}
