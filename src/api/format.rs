// ==========================================
// 电网可靠性计算核心 - 结果格式化
// ==========================================
// 口径: 定点小数,保留 4 位 (等价于 "%.4f")
// 非有限值按 Rust 默认输出 (NaN / inf / -inf),不会 panic
// ==========================================

use crate::domain::loss::LossResult;
use crate::domain::reliability::ReliabilityResult;
use serde::{Deserialize, Serialize};

/// 格式化为 4 位小数
pub fn format_fixed4(value: f64) -> String {
    format!("{:.4}", value)
}

/// 可靠性指标的显示字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedReliability {
    pub total_failure_rate: String,
    pub average_recovery_time: String,
    pub accidental_downtime_coefficient: String,
    pub planned_downtime_coefficient: String,
    pub dual_system_failure_rate: String,
    pub final_failure_rate: String,
}

impl From<&ReliabilityResult> for FormattedReliability {
    fn from(result: &ReliabilityResult) -> Self {
        Self {
            total_failure_rate: format_fixed4(result.total_failure_rate),
            average_recovery_time: format_fixed4(result.average_recovery_time),
            accidental_downtime_coefficient: format_fixed4(result.accidental_downtime_coefficient),
            planned_downtime_coefficient: format_fixed4(result.planned_downtime_coefficient),
            dual_system_failure_rate: format_fixed4(result.dual_system_failure_rate),
            final_failure_rate: format_fixed4(result.final_failure_rate),
        }
    }
}

/// 损失估算结果的显示字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedLoss {
    pub emergency_shortfall_mw: String,
    pub planned_shortfall_mw: String,
    pub total_cost: String,
}

impl From<&LossResult> for FormattedLoss {
    fn from(result: &LossResult) -> Self {
        Self {
            emergency_shortfall_mw: format_fixed4(result.emergency_shortfall_mw),
            planned_shortfall_mw: format_fixed4(result.planned_shortfall_mw),
            total_cost: format_fixed4(result.total_cost),
        }
    }
}
