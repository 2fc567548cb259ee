// ==========================================
// 设备目录加载 集成测试
// ==========================================
// 测试目标: 验证 JSON/CSV 文件加载与错误分类
// ==========================================

mod helpers;

use grid_reliability::config::{load_catalog_file, CatalogError, CatalogVariant};
use grid_reliability::{QuantityInput, ReliabilityEngine};
use helpers::mock_catalog::assert_close;
use std::io::Write;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建带扩展名的临时文件
fn write_temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("无法创建临时文件");
    file.write_all(content.as_bytes()).expect("写入失败");
    file.flush().expect("刷新失败");
    file
}

const SIMPLIFIED_CSV: &str = "\
name,failure_rate,repair_time,occurrence_frequency,recovery_duration
Transformer 110kV,0.015,100,1.0,43
Transformer 35kV,0.020,80,1.0,28
Cable Network 10kV,0.005,60,0.5,10
";

const SIMPLIFIED_JSON: &str = r#"[
  {"name": "Transformer 110kV", "failure_rate": 0.015, "repair_time": 100.0,
   "occurrence_frequency": 1.0, "recovery_duration": 43.0},
  {"name": "Transformer 35kV", "failure_rate": 0.020, "repair_time": 80.0,
   "occurrence_frequency": 1.0, "recovery_duration": 28.0},
  {"name": "Cable Network 10kV", "failure_rate": 0.005, "repair_time": 60.0,
   "occurrence_frequency": 0.5, "recovery_duration": 10.0}
]"#;

// ==========================================
// 正常加载
// ==========================================

#[test]
fn test_load_csv_file_matches_builtin() {
    let file = write_temp_file(".csv", SIMPLIFIED_CSV);

    let catalog = load_catalog_file(file.path()).expect("CSV 加载失败");

    assert_eq!(catalog, CatalogVariant::Simplified.build());
}

#[test]
fn test_load_json_file_matches_builtin() {
    let file = write_temp_file(".json", SIMPLIFIED_JSON);

    let catalog = load_catalog_file(file.path()).expect("JSON 加载失败");

    assert_eq!(catalog, CatalogVariant::Simplified.build());
}

#[test]
fn test_loaded_catalog_drives_engine() {
    let file = write_temp_file(".csv", SIMPLIFIED_CSV);
    let catalog = load_catalog_file(file.path()).expect("CSV 加载失败");
    let quantities = QuantityInput::new()
        .with("Transformer 110kV", 2)
        .with("Cable Network 10kV", 5);

    let result = ReliabilityEngine::new().compute_metrics(&quantities, &catalog);

    assert_close(result.total_failure_rate, 0.055, 1e-12, "总失效频率");
    assert_close(result.average_recovery_time, 81.8182, 1e-4, "平均恢复时间");
}

// ==========================================
// 错误分类
// ==========================================

#[test]
fn test_missing_file() {
    let err = load_catalog_file(Path::new("/nonexistent/catalog.csv")).unwrap_err();
    assert!(matches!(err, CatalogError::FileNotFound(_)));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp_file(".xlsx", "irrelevant");

    let err = load_catalog_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::UnsupportedFormat(ref ext) if ext == "xlsx"));
}

#[test]
fn test_duplicate_names_in_csv() {
    let file = write_temp_file(
        ".csv",
        "name,failure_rate,repair_time,occurrence_frequency\n\
         Transformer 35kV,0.02,80,1.0\n\
         Transformer 35kV,0.03,70,1.0\n",
    );

    let err = load_catalog_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateName { row: 2, .. }));
    assert!(err.to_string().contains("Transformer 35kV"));
}

#[test]
fn test_missing_required_column_value() {
    let file = write_temp_file(
        ".csv",
        "name,failure_rate,repair_time,occurrence_frequency\n\
         Transformer 35kV,0.02,,1.0\n",
    );

    let err = load_catalog_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::TypeConversionError { row: 1, ref field, .. } if field == "repair_time"
    ));
}

#[test]
fn test_json_missing_required_field() {
    let file = write_temp_file(".json", r#"[{"name": "A", "failure_rate": 0.1}]"#);

    let err = load_catalog_file(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::JsonParseError(_)));
}
