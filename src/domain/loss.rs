// ==========================================
// 电网可靠性计算核心 - 停电损失领域模型
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// LossInputs - 损失估算输入 (7 个独立标量)
// ==========================================
// 不做范围校验: 负数/零值按原样参与运算
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LossInputs {
    pub failure_frequency: f64,      // 失效频率 ω (1/年)
    pub avg_recovery_time: f64,      // 平均恢复时间 t_в (小时)
    pub nominal_power: f64,          // 额定功率 P_M
    pub tariff_rate: f64,            // 电价/利用时间系数 T_M
    pub planned_downtime_coeff: f64, // 计划停运系数 k_п
    pub direct_emergency_loss: f64,  // 事故停电单位损失 З_пер.а
    pub planned_loss: f64,           // 计划停电单位损失 З_пер.п
}

// ==========================================
// LossResult - 损失估算结果
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LossResult {
    pub emergency_shortfall_mw: f64, // 事故少供电量期望 M(W_нед.а)
    pub planned_shortfall_mw: f64,   // 计划少供电量期望 M(W_нед.п)
    pub total_cost: f64,             // 总损失期望 M(З_пер)
}

impl LossResult {
    pub fn as_array(&self) -> [f64; 3] {
        [
            self.emergency_shortfall_mw,
            self.planned_shortfall_mw,
            self.total_cost,
        ]
    }
}
