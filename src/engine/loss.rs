// ==========================================
// 电网可靠性计算核心 - 停电损失估算
// ==========================================
// 职责: 事故/计划少供电量期望与总损失期望
// 红线: 纯函数,无除法,任意实数输入均有定义
// ==========================================

use crate::domain::loss::{LossInputs, LossResult};
use tracing::instrument;

// ==========================================
// LossEstimator - 停电损失估算器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct LossEstimator;

impl LossEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 组合三个公式完成一次估算
    #[instrument(skip(self, inputs))]
    pub fn estimate(&self, inputs: &LossInputs) -> LossResult {
        let emergency_shortfall_mw = Self::emergency_shortfall(
            inputs.failure_frequency,
            inputs.nominal_power,
            inputs.avg_recovery_time,
            inputs.tariff_rate,
        );
        let planned_shortfall_mw = Self::planned_shortfall(
            inputs.planned_downtime_coeff,
            inputs.nominal_power,
            inputs.tariff_rate,
        );
        let total_cost = Self::total_loss(
            emergency_shortfall_mw,
            planned_shortfall_mw,
            inputs.direct_emergency_loss,
            inputs.planned_loss,
        );

        tracing::debug!(
            emergency_shortfall_mw,
            planned_shortfall_mw,
            total_cost,
            "损失估算完成"
        );

        LossResult {
            emergency_shortfall_mw,
            planned_shortfall_mw,
            total_cost,
        }
    }

    /// 事故少供电量期望 = ω * P * t * T
    pub fn emergency_shortfall(omega: f64, power: f64, time: f64, rate: f64) -> f64 {
        omega * power * time * rate
    }

    /// 计划少供电量期望 = k_п * P * T
    pub fn planned_shortfall(coeff: f64, power: f64, rate: f64) -> f64 {
        coeff * power * rate
    }

    /// 总损失期望
    ///
    /// = L_em + MW_em * L_em + MW_plan * L_plan
    ///
    /// 注意: L_em 既单独计入又作为权重,L_plan 仅作为权重。
    /// 该不对称结构是既定口径,不得改写为对称形式。
    pub fn total_loss(
        emergency_mw: f64,
        planned_mw: f64,
        direct_emergency_loss: f64,
        direct_planned_loss: f64,
    ) -> f64 {
        direct_emergency_loss
            + (emergency_mw * direct_emergency_loss)
            + (planned_mw * direct_planned_loss)
    }
}
