// ==========================================
// 电网可靠性计算核心 - 设备可靠性目录
// ==========================================
// 职责: 设备类型名称 → 可靠性参数 的只读映射
// 红线: 名称缺失不是错误,查询方自行跳过
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// EquipmentParams - 设备可靠性参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquipmentParams {
    pub failure_rate: f64,                // 失效频率 ω (1/年)
    pub repair_time: f64,                 // 平均修复时间 t_в (小时)
    pub occurrence_frequency: f64,        // 计划停运频率 μ (1/年)
    #[serde(default)]
    pub recovery_duration: Option<f64>,   // 计划停运持续时间 t_п (小时), 当前公式未使用
}

impl EquipmentParams {
    pub const fn new(
        failure_rate: f64,
        repair_time: f64,
        occurrence_frequency: f64,
        recovery_duration: Option<f64>,
    ) -> Self {
        Self {
            failure_rate,
            repair_time,
            occurrence_frequency,
            recovery_duration,
        }
    }
}

// ==========================================
// EquipmentEntry - 目录条目 (名称 + 参数)
// ==========================================
// 用途: 目录文件 (JSON/CSV) 的行结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentEntry {
    pub name: String,
    #[serde(flatten)]
    pub params: EquipmentParams,
}

// ==========================================
// Trait: EquipmentLookup
// ==========================================
// 用途: 计算引擎只依赖查询能力,测试可注入自定义目录
pub trait EquipmentLookup {
    /// 按设备名称查询参数,不存在时返回 None
    fn lookup(&self, name: &str) -> Option<&EquipmentParams>;
}

// ==========================================
// EquipmentCatalog - 设备可靠性目录
// ==========================================
// 保留插入顺序 (输入字段按目录顺序展示)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EquipmentCatalog {
    entries: Vec<EquipmentEntry>,
    index: HashMap<String, usize>,
}

impl EquipmentCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 由条目序列构建目录
    ///
    /// 同名条目: 后者覆盖前者的参数,保留前者的位置
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = EquipmentEntry>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |catalog, entry| {
                catalog.with_entry(entry.name, entry.params)
            })
    }

    /// 追加一个条目 (builder 风格)
    pub fn with_entry(mut self, name: impl Into<String>, params: EquipmentParams) -> Self {
        self.insert(name.into(), params);
        self
    }

    fn insert(&mut self, name: String, params: EquipmentParams) {
        match self.index.get(&name) {
            Some(&pos) => {
                if let Some(entry) = self.entries.get_mut(pos) {
                    entry.params = params;
                }
            }
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push(EquipmentEntry { name, params });
            }
        }
    }

    /// 按名称查询参数
    pub fn lookup(&self, name: &str) -> Option<&EquipmentParams> {
        self.index
            .get(name)
            .and_then(|&pos| self.entries.get(pos))
            .map(|entry| &entry.params)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 设备名称 (目录顺序)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// (名称, 参数) 迭代 (目录顺序)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EquipmentParams)> {
        self.entries
            .iter()
            .map(|entry| (entry.name.as_str(), &entry.params))
    }

    /// 全部条目 (目录顺序)
    pub fn entries(&self) -> &[EquipmentEntry] {
        &self.entries
    }
}

impl EquipmentLookup for EquipmentCatalog {
    fn lookup(&self, name: &str) -> Option<&EquipmentParams> {
        EquipmentCatalog::lookup(self, name)
    }
}

impl<T: EquipmentLookup + ?Sized> EquipmentLookup for &T {
    fn lookup(&self, name: &str) -> Option<&EquipmentParams> {
        (**self).lookup(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> EquipmentCatalog {
        EquipmentCatalog::new()
            .with_entry("A", EquipmentParams::new(0.1, 10.0, 1.0, Some(5.0)))
            .with_entry("B", EquipmentParams::new(0.2, 20.0, 0.5, None))
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let catalog = sample_catalog();

        assert_eq!(catalog.lookup("A").map(|p| p.failure_rate), Some(0.1));
        assert_eq!(catalog.lookup("B").and_then(|p| p.recovery_duration), None);
        assert!(catalog.lookup("C").is_none());
        assert!(catalog.lookup("").is_none());
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let catalog = EquipmentCatalog::new()
            .with_entry("Z", EquipmentParams::new(0.1, 1.0, 1.0, None))
            .with_entry("A", EquipmentParams::new(0.1, 1.0, 1.0, None))
            .with_entry("M", EquipmentParams::new(0.1, 1.0, 1.0, None));

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_duplicate_name_replaces_params_in_place() {
        let catalog = sample_catalog()
            .with_entry("A", EquipmentParams::new(0.9, 90.0, 1.0, None));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup("A").map(|p| p.failure_rate), Some(0.9));
        assert_eq!(catalog.names().next(), Some("A"));
    }

    #[test]
    fn test_lookup_through_trait_object() {
        let catalog = sample_catalog();
        let lookup: &dyn EquipmentLookup = &catalog;

        assert!(lookup.lookup("B").is_some());
        assert!(lookup.lookup("b").is_none());
    }
}
