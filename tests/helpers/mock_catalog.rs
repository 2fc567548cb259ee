// ==========================================
// Mock 目录实现 - 用于集成测试
// ==========================================
// 不依赖 EquipmentCatalog,验证引擎只通过 EquipmentLookup 查询
// ==========================================

#![allow(dead_code)]

use grid_reliability::{EquipmentCatalog, EquipmentLookup, EquipmentParams};
use std::cell::Cell;
use std::collections::HashMap;

/// Mock 目录: 固定参数 + 查询计数
#[derive(Debug, Default)]
pub struct MockCatalog {
    pub params: HashMap<String, EquipmentParams>,
    pub lookups: Cell<usize>,
}

impl MockCatalog {
    /// 创建空目录
    pub fn empty() -> Self {
        Self::default()
    }

    /// 创建包含单个设备的目录
    pub fn single(name: &str, failure_rate: f64, repair_time: f64) -> Self {
        Self::empty().with(name, failure_rate, repair_time)
    }

    pub fn with(mut self, name: &str, failure_rate: f64, repair_time: f64) -> Self {
        self.params.insert(
            name.to_string(),
            EquipmentParams::new(failure_rate, repair_time, 1.0, None),
        );
        self
    }

    pub fn lookup_count(&self) -> usize {
        self.lookups.get()
    }
}

impl EquipmentLookup for MockCatalog {
    fn lookup(&self, name: &str) -> Option<&EquipmentParams> {
        self.lookups.set(self.lookups.get() + 1);
        self.params.get(name)
    }
}

/// 3 项简化目录 (与内置 simplified 数值一致,手工构建)
pub fn simplified_catalog() -> EquipmentCatalog {
    EquipmentCatalog::new()
        .with_entry("Transformer 110kV", EquipmentParams::new(0.015, 100.0, 1.0, Some(43.0)))
        .with_entry("Transformer 35kV", EquipmentParams::new(0.020, 80.0, 1.0, Some(28.0)))
        .with_entry("Cable Network 10kV", EquipmentParams::new(0.005, 60.0, 0.5, Some(10.0)))
}

/// 浮点近似比较
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{}: 期望 {}, 实际 {}",
        what,
        expected,
        actual
    );
}
