// ==========================================
// 电网可靠性计算核心 - 设备目录加载器
// ==========================================
// 支持: JSON (.json) / CSV (.csv)
// 职责: 文件 → EquipmentCatalog,校验名称非空且唯一
// 红线: 不做数值范围校验 (与计算层口径一致)
// ==========================================

use crate::config::error::{CatalogError, CatalogResult};
use crate::domain::equipment::{EquipmentCatalog, EquipmentEntry, EquipmentParams};
use csv::ReaderBuilder;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

// CSV 列名
const COL_NAME: &str = "name";
const COL_FAILURE_RATE: &str = "failure_rate";
const COL_REPAIR_TIME: &str = "repair_time";
const COL_OCCURRENCE_FREQUENCY: &str = "occurrence_frequency";
const COL_RECOVERY_DURATION: &str = "recovery_duration";

// ==========================================
// 文件入口
// ==========================================

/// 按扩展名加载目录文件
///
/// # 参数
/// - `file_path`: .json 或 .csv 文件路径
pub fn load_catalog_file(file_path: &Path) -> CatalogResult<EquipmentCatalog> {
    // 检查文件存在
    if !file_path.exists() {
        return Err(CatalogError::FileNotFound(
            file_path.display().to_string(),
        ));
    }

    let ext = file_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let catalog = match ext.as_str() {
        "json" => {
            let mut content = String::new();
            File::open(file_path)?.read_to_string(&mut content)?;
            load_catalog_json(&content)?
        }
        "csv" => load_catalog_csv(File::open(file_path)?)?,
        other => return Err(CatalogError::UnsupportedFormat(other.to_string())),
    };

    tracing::info!(
        path = %file_path.display(),
        entries = catalog.len(),
        "设备目录加载完成"
    );

    Ok(catalog)
}

// ==========================================
// JSON
// ==========================================

/// 从 JSON 数组加载目录
///
/// 格式: `[{"name": "...", "failure_rate": 0.015, "repair_time": 100,
///          "occurrence_frequency": 1.0, "recovery_duration": 43}]`
pub fn load_catalog_json(content: &str) -> CatalogResult<EquipmentCatalog> {
    let entries: Vec<EquipmentEntry> = serde_json::from_str(content)?;
    build_unique(
        entries
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| (idx + 1, entry)),
    )
}

// ==========================================
// CSV
// ==========================================

/// 从 CSV 加载目录 (首行为表头)
///
/// recovery_duration 列可缺失或为空
pub fn load_catalog_csv<R: Read>(reader: R) -> CatalogResult<EquipmentCatalog> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // 允许省略末尾空列
        .trim(csv::Trim::All)
        .from_reader(reader);

    // 读取表头
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    let mut entries = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_number = row_idx + 1;

        let row: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter())
            .collect();

        // 跳过完全空白的行
        if row.values().all(|v| v.is_empty()) {
            continue;
        }

        // 行号沿用 CSV 数据行号 (含空白行),与字段错误一致
        entries.push((row_number, map_csv_row(&row, row_number)?));
    }

    build_unique(entries)
}

fn map_csv_row(row: &HashMap<&str, &str>, row_number: usize) -> CatalogResult<EquipmentEntry> {
    let name = get_string(row, COL_NAME).unwrap_or_default();

    let params = EquipmentParams {
        failure_rate: require_f64(row, COL_FAILURE_RATE, row_number)?,
        repair_time: require_f64(row, COL_REPAIR_TIME, row_number)?,
        occurrence_frequency: require_f64(row, COL_OCCURRENCE_FREQUENCY, row_number)?,
        recovery_duration: parse_f64(row, COL_RECOVERY_DURATION, row_number)?,
    };

    Ok(EquipmentEntry { name, params })
}

/// 提取非空字符串字段
fn get_string(row: &HashMap<&str, &str>, key: &str) -> Option<String> {
    row.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// 解析浮点数 (空值 → None)
fn parse_f64(
    row: &HashMap<&str, &str>,
    key: &str,
    row_number: usize,
) -> CatalogResult<Option<f64>> {
    match get_string(row, key) {
        None => Ok(None),
        Some(value) => value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| CatalogError::TypeConversionError {
                row: row_number,
                field: key.to_string(),
                message: format!("无法解析为浮点数: {}", value),
            }),
    }
}

/// 解析必填浮点数
fn require_f64(row: &HashMap<&str, &str>, key: &str, row_number: usize) -> CatalogResult<f64> {
    parse_f64(row, key, row_number)?.ok_or_else(|| CatalogError::TypeConversionError {
        row: row_number,
        field: key.to_string(),
        message: "必填字段为空".to_string(),
    })
}

// ==========================================
// 公共校验
// ==========================================

/// 名称去空白后必须非空且唯一
///
/// `entries` 为 (源数据行号, 条目)
fn build_unique<I>(entries: I) -> CatalogResult<EquipmentCatalog>
where
    I: IntoIterator<Item = (usize, EquipmentEntry)>,
{
    let mut seen = HashSet::new();
    let mut checked = Vec::new();

    for (row, mut entry) in entries {
        entry.name = entry.name.trim().to_string();

        if entry.name.is_empty() {
            return Err(CatalogError::EmptyName(row));
        }
        if !seen.insert(entry.name.clone()) {
            return Err(CatalogError::DuplicateName {
                row,
                name: entry.name,
            });
        }

        checked.push(entry);
    }

    Ok(EquipmentCatalog::from_entries(checked))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_basic() {
        let json = r#"[
            {"name": "Transformer 110kV", "failure_rate": 0.015, "repair_time": 100,
             "occurrence_frequency": 1.0, "recovery_duration": 43},
            {"name": "Motor 0.38kV", "failure_rate": 0.1, "repair_time": 50,
             "occurrence_frequency": 0.5}
        ]"#;

        let catalog = load_catalog_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.lookup("Transformer 110kV").and_then(|p| p.recovery_duration),
            Some(43.0)
        );
        assert_eq!(catalog.lookup("Motor 0.38kV").and_then(|p| p.recovery_duration), None);
    }

    #[test]
    fn test_json_duplicate_name_rejected() {
        let json = r#"[
            {"name": "A", "failure_rate": 0.1, "repair_time": 1, "occurrence_frequency": 1},
            {"name": " A ", "failure_rate": 0.2, "repair_time": 2, "occurrence_frequency": 1}
        ]"#;

        let err = load_catalog_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { row: 2, .. }));
    }

    #[test]
    fn test_json_malformed() {
        let err = load_catalog_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::JsonParseError(_)));
    }

    #[test]
    fn test_csv_basic_with_blank_recovery() {
        let csv = "name,failure_rate,repair_time,occurrence_frequency,recovery_duration\n\
                   Transformer 35kV,0.02,80,1.0,28\n\
                   Motor 6-10kV,0.1,160,0.5,\n";

        let catalog = load_catalog_csv(csv.as_bytes()).unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Transformer 35kV", "Motor 6-10kV"]);
        assert_eq!(catalog.lookup("Motor 6-10kV").map(|p| p.repair_time), Some(160.0));
        assert_eq!(catalog.lookup("Motor 6-10kV").and_then(|p| p.recovery_duration), None);
    }

    #[test]
    fn test_csv_invalid_number() {
        let csv = "name,failure_rate,repair_time,occurrence_frequency\n\
                   Transformer 35kV,abc,80,1.0\n";

        let err = load_catalog_csv(csv.as_bytes()).unwrap_err();
        match err {
            CatalogError::TypeConversionError { row, field, .. } => {
                assert_eq!(row, 1);
                assert_eq!(field, "failure_rate");
            }
            other => panic!("意外的错误类型: {:?}", other),
        }
    }

    #[test]
    fn test_csv_empty_name_rejected() {
        let csv = "name,failure_rate,repair_time,occurrence_frequency\n\
                   ,0.02,80,1.0\n";

        let err = load_catalog_csv(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(1)));
    }

    #[test]
    fn test_csv_row_numbers_count_blank_rows() {
        let header = "name,failure_rate,repair_time,occurrence_frequency\n";

        let duplicate = format!("{header},,,\nA,0.1,1,1\n,,,\nA,0.2,2,1\n");
        let err = load_catalog_csv(duplicate.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName { row: 4, .. }));

        let bad_cell = format!("{header},,,\nA,0.1,1,1\n,,,\nB,abc,2,1\n");
        let err = load_catalog_csv(bad_cell.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::TypeConversionError { row: 4, .. }));

        let empty_name = format!("{header},,,\n ,0.1,1,1\n");
        let err = load_catalog_csv(empty_name.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyName(2)));
    }
}
