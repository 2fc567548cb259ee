// ==========================================
// 电网可靠性计算核心 - 内置设备目录
// ==========================================
// 职责: 提供两套内置目录 (简化 3 项 / 详细 16 项)
// 红线: 目录按需构建并注入引擎,不作为全局状态
// ==========================================

use crate::config::error::CatalogError;
use crate::domain::equipment::{EquipmentCatalog, EquipmentParams};
use serde::{Deserialize, Serialize};

// 简化目录: (名称, ω, t_в, μ, t_п)
const SIMPLIFIED_TABLE: [(&str, f64, f64, f64, Option<f64>); 3] = [
    ("Transformer 110kV", 0.015, 100.0, 1.0, Some(43.0)),
    ("Transformer 35kV", 0.020, 80.0, 1.0, Some(28.0)),
    ("Cable Network 10kV", 0.005, 60.0, 0.5, Some(10.0)),
];

// 详细目录: 配电网元件可靠性参数表
// 与简化目录同名的条目数值一致
const DETAILED_TABLE: [(&str, f64, f64, f64, Option<f64>); 16] = [
    ("Overhead Line 110kV", 0.007, 10.0, 0.167, Some(35.0)),
    ("Overhead Line 35kV", 0.020, 8.0, 0.167, Some(35.0)),
    ("Overhead Line 10kV", 0.020, 10.0, 0.167, Some(35.0)),
    ("Cable Line 10kV (Trench)", 0.030, 44.0, 1.0, Some(9.0)),
    ("Cable Line 10kV (Channel)", 0.005, 17.5, 1.0, Some(9.0)),
    ("Transformer 110kV", 0.015, 100.0, 1.0, Some(43.0)),
    ("Transformer 35kV", 0.020, 80.0, 1.0, Some(28.0)),
    ("Cable Network 10kV", 0.005, 60.0, 0.5, Some(10.0)),
    ("Overhead Network 10kV", 0.050, 60.0, 0.5, Some(10.0)),
    ("Breaker 110kV (SF6)", 0.010, 30.0, 0.1, Some(30.0)),
    ("Breaker 10kV (Low-Oil)", 0.020, 15.0, 0.33, Some(15.0)),
    ("Breaker 10kV (Vacuum)", 0.050, 15.0, 0.33, Some(15.0)),
    ("Busbar 10kV (per Connection)", 0.030, 2.0, 0.167, Some(5.0)),
    ("Circuit Breaker 0.38kV", 0.050, 4.0, 0.33, Some(10.0)),
    ("Motor 6-10kV", 0.100, 160.0, 0.5, None),
    ("Motor 0.38kV", 0.100, 50.0, 0.5, None),
];

/// 内置目录类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogVariant {
    /// 3 项简化目录 (早期版本)
    Simplified,
    /// 16 项详细目录 (现行版本)
    #[default]
    Detailed,
}

impl CatalogVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogVariant::Simplified => "simplified",
            CatalogVariant::Detailed => "detailed",
        }
    }

    /// 构建对应的设备目录
    pub fn build(&self) -> EquipmentCatalog {
        let table: &[(&str, f64, f64, f64, Option<f64>)] = match self {
            CatalogVariant::Simplified => &SIMPLIFIED_TABLE,
            CatalogVariant::Detailed => &DETAILED_TABLE,
        };

        table.iter().fold(
            EquipmentCatalog::new(),
            |catalog, &(name, failure_rate, repair_time, occurrence, recovery)| {
                catalog.with_entry(
                    name,
                    EquipmentParams::new(failure_rate, repair_time, occurrence, recovery),
                )
            },
        )
    }
}

impl std::fmt::Display for CatalogVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CatalogVariant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simplified" | "simple" => Ok(CatalogVariant::Simplified),
            "detailed" | "full" => Ok(CatalogVariant::Detailed),
            other => Err(CatalogError::UnknownVariant(other.to_string())),
        }
    }
}
