use anyhow::Result;
use camino::Utf8PathBuf;
use rustycontrol::bode::{BodeResponse, PolePolicy, Spacing, SweepConfig, bode};
use rustycontrol::document::{TransferFunctionDoc, load_sweep_config};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> Result<(NamedTempFile, Utf8PathBuf)> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    let path = Utf8PathBuf::from_path_buf(file.path().to_path_buf())
        .map_err(|p| anyhow::anyhow!("non-utf8 temp path {}", p.display()))?;
    Ok((file, path))
}

#[test]
fn reads_transfer_function_json() -> Result<()> {
    let (_file, path) = write_temp(
        r#"{ "name": "plant", "numerator": [1.0], "denominator": [1.0, 2.0, 1.0] }"#,
    )?;
    let doc = TransferFunctionDoc::from_json_file(&path)?;
    assert_eq!(doc.name.as_deref(), Some("plant"));
    let tf = doc.to_transfer_function()?;
    assert_eq!(tf.denominator.degree(), 2);
    Ok(())
}

#[test]
fn empty_denominator_fails_validation() {
    let doc = TransferFunctionDoc::from_json_str(r#"{ "numerator": [1.0], "denominator": [] }"#)
        .expect("valid JSON");
    assert!(doc.name.is_none());
    assert!(doc.to_transfer_function().is_err());
}

#[test]
fn partial_sweep_config_keeps_defaults() -> Result<()> {
    let (_file, path) = write_temp(r#"{ "stop": 5.0, "spacing": "linear", "on_pole": "skip" }"#)?;
    let cfg = load_sweep_config(&path)?;
    assert_eq!(cfg.stop, 5.0);
    assert_eq!(cfg.spacing, Spacing::Linear);
    assert_eq!(cfg.on_pole, PolePolicy::Skip);
    assert_eq!(cfg.start, SweepConfig::default().start);
    assert_eq!(cfg.points, 200);
    Ok(())
}

#[test]
fn binary_cache_roundtrip() -> Result<()> {
    let tf = TransferFunctionDoc {
        name: None,
        numerator: vec![1.0, 0.0],
        denominator: vec![1.0, 0.2, 1.0],
    }
    .to_transfer_function()?;
    let cfg = SweepConfig {
        points: 32,
        on_pole: PolePolicy::Skip,
        ..Default::default()
    };
    let response = bode(&tf, &cfg)?;

    let temp_file = NamedTempFile::new()?;
    response.save_to_binary(temp_file.path())?;
    let loaded = BodeResponse::load_from_binary(temp_file.path())?;

    assert_eq!(loaded, response);
    assert_eq!(loaded.points.len(), 32);
    assert_eq!(loaded.transfer_function.numerator.coefficients(), &[1.0, 0.0]);
    Ok(())
}

#[test]
fn binary_cache_rejects_foreign_files() -> Result<()> {
    let (_file, path) = write_temp("RUSTYLINK\u{1}\0\0\0 not ours")?;
    let err = BodeResponse::load_from_binary(&path).unwrap_err();
    assert!(err.to_string().contains("magic"));
    Ok(())
}
