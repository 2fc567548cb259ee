// ==========================================
// 电网可靠性计算核心 - 引擎层
// ==========================================
// 职责: 闭式公式计算,无状态、无 I/O
// 红线: 两个引擎互不依赖,只依赖领域类型
// ==========================================

pub mod loss;
pub mod reliability;

// 重导出核心引擎
pub use loss::LossEstimator;
pub use reliability::ReliabilityEngine;
