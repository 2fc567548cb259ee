// ==========================================
// 电网可靠性计算核心 - 可靠性领域模型
// ==========================================
// 输入: QuantityInput (设备名称 → 台数)
// 输出: ReliabilityResult (6 项可靠性指标)
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// QuantityInput - 设备台数输入
// ==========================================
// 键: 设备名称; 值: 台数 (<= 0 的条目不参与计算)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuantityInput {
    counts: BTreeMap<String, i64>,
}

impl QuantityInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置某设备的台数 (builder 风格)
    pub fn with(mut self, name: impl Into<String>, count: i64) -> Self {
        self.set(name, count);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, count: i64) {
        self.counts.insert(name.into(), count);
    }

    /// 未录入的设备视为 0 台
    pub fn get(&self, name: &str) -> i64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for QuantityInput {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        let mut input = Self::new();
        for (name, count) in iter {
            input.set(name, count);
        }
        input
    }
}

// ==========================================
// ReliabilityResult - 可靠性指标
// ==========================================
// 当总失效频率为 0 时,平均恢复时间为 NaN 并向后传播
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityResult {
    pub total_failure_rate: f64,              // 单回路系统失效频率 ω_oc (1/年)
    pub average_recovery_time: f64,           // 平均恢复时间 t_в.oc (小时)
    pub accidental_downtime_coefficient: f64, // 事故停运系数 k_a.oc
    pub planned_downtime_coefficient: f64,    // 计划停运系数 k_п.oc
    pub dual_system_failure_rate: f64,        // 双回路同时失效频率 ω_дк (1/年)
    pub final_failure_rate: f64,              // 计入分段断路器后的失效频率 ω_дс (1/年)
}

impl ReliabilityResult {
    /// 所有指标是否均为有限值
    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }

    /// 按固定顺序输出 6 项指标
    pub fn as_array(&self) -> [f64; 6] {
        [
            self.total_failure_rate,
            self.average_recovery_time,
            self.accidental_downtime_coefficient,
            self.planned_downtime_coefficient,
            self.dual_system_failure_rate,
            self.final_failure_rate,
        ]
    }
}
