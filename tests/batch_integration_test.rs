use anyhow::Result;
use ellipse_area::{
    AreaEngine, AreaError, AreaRecord, AxisPolicy, BatchPipeline, LocalStorage, OutputFormat,
    TomlConfig,
};
use std::f64::consts::PI;
use tempfile::TempDir;

const INPUT: &str = "id,semi_major_axis,semi_minor_axis
pond,2.0,3.0
puddle,0.0,5.0
broken,-1.0,2.0
disc,1.0,1.0
";

fn config_for(policy: &str, formats: &str) -> Result<TomlConfig> {
    let toml = format!(
        r#"
[batch]
name = "integration"

[input]
path = "ellipses.csv"

[output]
path = "results"
formats = {formats}

[validation]
policy = "{policy}"
"#
    );
    Ok(TomlConfig::from_toml_str(&toml)?)
}

fn setup() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("ellipses.csv"), INPUT)?;
    Ok(temp_dir)
}

#[tokio::test]
async fn test_end_to_end_batch_with_skip_policy() -> Result<()> {
    let temp_dir = setup()?;
    let config = config_for("skip", r#"["csv", "json"]"#)?;
    assert_eq!(config.validation.policy, AxisPolicy::Skip);

    let engine = AreaEngine::new(BatchPipeline::new(LocalStorage::new(temp_dir.path()), config));
    let written = engine.run().await?;
    assert_eq!(written.len(), 2);

    let csv = std::fs::read_to_string(temp_dir.path().join("results").join("areas.csv"))?;
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let records = reader
        .deserialize::<AreaRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    let ids: Vec<_> = records.iter().map(|r| r.id.clone().unwrap_or_default()).collect();
    assert_eq!(ids, vec!["pond", "puddle", "disc"]);
    assert!((records[0].area - 6.0 * PI).abs() < 1e-12);
    assert_eq!(records[1].area, 0.0);
    assert!((records[2].area - PI).abs() < 1e-12);

    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(
        temp_dir.path().join("results").join("areas.json"),
    )?)?;
    assert_eq!(json["summary"]["count"], 3);
    assert_eq!(json["summary"]["skipped"], 1);
    let total = json["summary"]["total_area"].as_f64().unwrap_or_default();
    assert!((total - 7.0 * PI).abs() < 1e-12);

    Ok(())
}

#[tokio::test]
async fn test_propagate_policy_keeps_negative_area() -> Result<()> {
    let temp_dir = setup()?;
    let config = config_for("propagate", r#"["json"]"#)?;
    assert_eq!(config.output.formats, vec![OutputFormat::Json]);

    let engine = AreaEngine::new(BatchPipeline::new(LocalStorage::new(temp_dir.path()), config));
    engine.run().await?;

    let json: serde_json::Value = serde_json::from_slice(&std::fs::read(
        temp_dir.path().join("results").join("areas.json"),
    )?)?;
    let records = json["records"].as_array().cloned().unwrap_or_default();
    assert_eq!(records.len(), 4);
    assert_eq!(records[2]["id"], "broken");
    assert!(records[2]["area"].as_f64().unwrap_or_default() < 0.0);
    assert!(!temp_dir.path().join("results").join("areas.csv").exists());

    Ok(())
}

#[tokio::test]
async fn test_fail_policy_writes_nothing() -> Result<()> {
    let temp_dir = setup()?;
    let config = config_for("fail", r#"["csv"]"#)?;

    let engine = AreaEngine::new(BatchPipeline::new(LocalStorage::new(temp_dir.path()), config));
    let result = engine.run().await;

    match result {
        Err(AreaError::InvalidAxis { field, .. }) => {
            assert_eq!(field, "row 3 semi_major_axis")
        }
        other => return Err(anyhow::anyhow!("expected InvalidAxis, got {:?}", other)),
    }
    assert!(!temp_dir.path().join("results").exists());

    Ok(())
}

#[tokio::test]
async fn test_missing_input_file_is_io_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config = config_for("propagate", r#"["csv"]"#)?;

    let engine = AreaEngine::new(BatchPipeline::new(LocalStorage::new(temp_dir.path()), config));
    let err = engine.run().await.err().ok_or_else(|| anyhow::anyhow!("expected an error"))?;

    assert!(matches!(err, AreaError::IoError(_)));
    assert_eq!(err.exit_code(), 3);

    Ok(())
}
