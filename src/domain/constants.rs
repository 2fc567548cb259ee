// ==========================================
// 电网可靠性计算核心 - 物理常量
// ==========================================
// 职责: 集中定义公式中出现的固定常数
// 红线: 公式内不得出现裸数字,统一引用本模块
// ==========================================

/// 一年的小时数 (8760 h)
///
/// 停运系数 = 年停运小时数 / HOURS_PER_YEAR
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// 计划停运时间的安全系数
pub const PLANNED_OUTAGE_SAFETY_FACTOR: f64 = 1.2;

/// 计划停运的最长持续时间 (小时)
///
/// 取 110 kV 变压器的计划检修时长
pub const MAX_PLANNED_OUTAGE_HOURS: f64 = 43.0;

/// 计划停运系数基准值 = 1.2 * 43 / 8760 ≈ 0.005890
///
/// 注意: 该系数与任何调用方输入无关 (沿用既有计算口径)。
/// 按口径它本应由计划停运量推导,目前无法从现有资料确认正确意图,
/// 保持字面行为不变,仅在此处显式标出。
pub const PLANNED_DOWNTIME_COEFFICIENT: f64 =
    PLANNED_OUTAGE_SAFETY_FACTOR * MAX_PLANNED_OUTAGE_HOURS / HOURS_PER_YEAR;

/// 双回路系统失效频率的基础下限 (1/年)
///
/// 对应分段断路器 (10 kV) 的失效频率,叠加到双回路失效频率上
pub const BASELINE_FAILURE_RATE_FLOOR: f64 = 0.02;

/// 双回路系统的回路数
pub const DUAL_SYSTEM_CIRCUITS: f64 = 2.0;
