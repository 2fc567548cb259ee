// ==========================================
// 电网可靠性计算核心 - 可靠性指标引擎
// ==========================================
// 职责: 单回路/双回路系统可靠性指标计算
// 输入: 设备台数 + 设备可靠性目录
// 输出: ReliabilityResult (6 项指标)
// ==========================================
// 红线: 不抛错误,不做校验; 除零结果按 IEEE-754 传播
// ==========================================

use crate::domain::constants::{
    BASELINE_FAILURE_RATE_FLOOR, DUAL_SYSTEM_CIRCUITS, HOURS_PER_YEAR,
    PLANNED_DOWNTIME_COEFFICIENT,
};
use crate::domain::equipment::EquipmentLookup;
use crate::domain::reliability::{QuantityInput, ReliabilityResult};
use tracing::instrument;

// ==========================================
// ReliabilityEngine - 可靠性指标引擎
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ReliabilityEngine {
    // 无状态引擎,目录由调用方注入
}

impl ReliabilityEngine {
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算 6 项可靠性指标
    ///
    /// # 参数
    /// - `quantities`: 设备名称 → 台数
    /// - `catalog`: 设备可靠性目录
    ///
    /// # 规则
    /// - 台数 <= 0 或名称不在目录中的条目不参与累加
    /// - 总失效频率为 0 时,平均恢复时间为 NaN (0/0),并传播到后续指标
    #[instrument(skip(self, quantities, catalog), fields(entries = quantities.len()))]
    pub fn compute_metrics<C>(&self, quantities: &QuantityInput, catalog: &C) -> ReliabilityResult
    where
        C: EquipmentLookup + ?Sized,
    {
        // 1. 累加失效频率与加权恢复时间
        let (total_failure_rate, weighted_recovery_time) =
            self.accumulate_failure_rates(quantities, catalog);

        // 2. 平均恢复时间
        let average_recovery_time = weighted_recovery_time / total_failure_rate;
        if total_failure_rate == 0.0 {
            tracing::warn!(
                average_recovery_time,
                "总失效频率为 0,平均恢复时间不是有限值"
            );
        }

        // 3. 事故停运系数
        let accidental_downtime_coefficient =
            average_recovery_time * total_failure_rate / HOURS_PER_YEAR;

        // 4. 计划停运系数 (常量,与输入无关)
        let planned_downtime_coefficient = PLANNED_DOWNTIME_COEFFICIENT;

        // 5. 双回路同时失效频率
        let dual_system_failure_rate = DUAL_SYSTEM_CIRCUITS
            * total_failure_rate
            * (accidental_downtime_coefficient + planned_downtime_coefficient);

        // 6. 计入分段断路器
        let final_failure_rate = dual_system_failure_rate + BASELINE_FAILURE_RATE_FLOOR;

        tracing::debug!(
            total_failure_rate,
            average_recovery_time,
            final_failure_rate,
            "可靠性指标计算完成"
        );

        ReliabilityResult {
            total_failure_rate,
            average_recovery_time,
            accidental_downtime_coefficient,
            planned_downtime_coefficient,
            dual_system_failure_rate,
            final_failure_rate,
        }
    }

    /// 累加失效频率
    ///
    /// # 返回
    /// (total_failure_rate, weighted_recovery_time)
    fn accumulate_failure_rates<C>(&self, quantities: &QuantityInput, catalog: &C) -> (f64, f64)
    where
        C: EquipmentLookup + ?Sized,
    {
        let mut total_failure_rate = 0.0;
        let mut weighted_recovery_time = 0.0;

        for (name, count) in quantities.iter() {
            if count <= 0 {
                continue;
            }

            let Some(params) = catalog.lookup(name) else {
                tracing::debug!(name, count, "设备不在目录中,跳过");
                continue;
            };

            let count = count as f64;
            total_failure_rate += count * params.failure_rate;
            weighted_recovery_time += count * params.failure_rate * params.repair_time;
        }

        (total_failure_rate, weighted_recovery_time)
    }
}
