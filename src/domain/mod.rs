// ==========================================
// 电网可靠性计算核心 - 领域模型层
// ==========================================
// 职责: 定义设备目录、输入与结果的值类型、物理常量
// 红线: 不含计算逻辑,不含解析逻辑
// ==========================================

pub mod constants;
pub mod equipment;
pub mod loss;
pub mod reliability;

// 重导出核心类型
pub use equipment::{EquipmentCatalog, EquipmentEntry, EquipmentLookup, EquipmentParams};
pub use loss::{LossInputs, LossResult};
pub use reliability::{QuantityInput, ReliabilityResult};
