//! Full runs over a bundle with stub summaries

use reqforge_catalog::read_catalog;
use reqforge_cli::commands::table::render_catalog_table;
use reqforge_cli::{run_pipeline_with, CliError, PipelineConfig};
use reqforge_llm::StubSummarizer;
use std::fs;
use std::path::Path;

fn config_in(dir: &Path, bundle: &Path) -> PipelineConfig {
    let mut config = PipelineConfig::default();
    config.inputs.pdf_path = dir.join("missing.pdf").to_string_lossy().into_owned();
    config.inputs.artifacts_path = bundle.to_string_lossy().into_owned();
    config.inputs.processed_dir = dir.join("processed").to_string_lossy().into_owned();
    config.catalog.output_path = dir.join("artifacts/catalog.yaml").to_string_lossy().into_owned();
    config.review.output_path = dir.join("artifacts/review.yaml").to_string_lossy().into_owned();
    config.commands.compatibility_csv_path =
        dir.join("artifacts/compatibility_matrix.csv").to_string_lossy().into_owned();
    config.logging.base_dir = dir.join("logs").to_string_lossy().into_owned();
    config.logging.redact_fields = vec!["llm_prompt".to_string()];
    config.llm.provider = "stub".to_string();
    config
}

fn write_bundle(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("bundle.json");
    fs::write(
        &path,
        r#"{
            "text": [
                {"page": 1, "content": "Issue CMD_ACT then CMD_RD after tRCD."},
                {"page": 2, "content": "Refresh interval is fixed."}
            ],
            "table": [{"page": 2, "content": [["tREFI", "3.9"]]}],
            "figure": [{"page": 3, "caption": "Command state diagram"}]
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn test_run_writes_all_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = write_bundle(dir.path());
    let config = config_in(dir.path(), &bundle);

    let report = run_pipeline_with(&config, &StubSummarizer).unwrap();

    assert!(report.run_id.starts_with("run_"));
    assert_eq!(report.merged_units, 4);
    assert_eq!(report.chunks, 1);
    assert_eq!(report.requirements, 1);
    assert_eq!(report.annotated, 1);
    assert_eq!(report.compatibility_pairs, 1);

    let catalog = read_catalog(&report.catalog_path).unwrap();
    let requirement = &catalog.requirement_units[0];
    assert_eq!(requirement.id, "REQ-0001");
    assert_eq!(requirement.command_names(), vec!["CMD_ACT", "CMD_RD"]);
    assert_eq!(
        requirement.compatibility_matrix.description,
        "Auto-inferred command transitions"
    );
    assert_eq!(catalog.metadata.total_chunks, 4);
    assert_eq!(catalog.structured_chunks[3].id.as_deref(), Some("figure-0004"));

    let csv = fs::read_to_string(&report.compatibility_csv_path).unwrap();
    assert_eq!(csv, ",CMD_ACT,CMD_RD\nCMD_ACT,-,Y\nCMD_RD,-,-\n");

    let review = fs::read_to_string(&report.review_path).unwrap();
    assert!(review.contains(&report.run_id));
    assert!(review.contains("total_requirements: 1"));

    let processed = dir.path().join("processed").join(&report.run_id);
    for name in ["text_segments", "chunked_texts", "summaries", "requirements", "catalog_payload"] {
        assert!(processed.join(format!("{name}.json")).exists(), "{name} not cached");
    }

    let snapshot_dir = dir.path().join("logs/03_llm_summarization");
    let snapshot = fs::read_dir(&snapshot_dir).unwrap().next().unwrap().unwrap().path();
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(snapshot).unwrap()).unwrap();
    assert_eq!(written["items"][0]["llm_prompt"], "<redacted>");
}

#[test]
fn test_table_rerender_matches_run() {
    let dir = tempfile::tempdir().unwrap();
    let bundle = write_bundle(dir.path());
    let config = config_in(dir.path(), &bundle);
    let report = run_pipeline_with(&config, &StubSummarizer).unwrap();

    let output = dir.path().join("rerender.csv");
    let (_, written) = render_catalog_table(&report.catalog_path, 0, &output).unwrap();

    assert_eq!(
        fs::read_to_string(written).unwrap(),
        fs::read_to_string(&report.compatibility_csv_path).unwrap()
    );
}

#[test]
fn test_missing_pdf_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = config_in(dir.path(), Path::new(""));
    config.inputs.artifacts_path.clear();

    let result = run_pipeline_with(&config, &StubSummarizer);
    assert!(matches!(result, Err(CliError::Extract(_))));
}
