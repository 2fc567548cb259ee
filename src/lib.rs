// ==========================================
// 电网可靠性与停电损失计算 - 核心库
// ==========================================
// 系统定位: 无状态计算库,由外部展示层调用
// 输入: 设备台数 / 7 项损失参数 (原始字符串或已解析数值)
// 输出: 可靠性指标 (6 项) / 损失指标 (3 项)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 值类型与常量
pub mod domain;

// 配置层 - 设备目录来源
pub mod config;

// 引擎层 - 计算公式
pub mod engine;

// 输入层 - 字段解析
pub mod input;

// API 层 - 调用入口与格式化
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    EquipmentCatalog, EquipmentEntry, EquipmentLookup, EquipmentParams, LossInputs, LossResult,
    QuantityInput, ReliabilityResult,
};

// 配置
pub use config::{CatalogError, CatalogResult, CatalogVariant};

// 引擎
pub use engine::{LossEstimator, ReliabilityEngine};

// 输入
pub use input::{LossField, LossForm, ReliabilityForm};

// API
pub use api::{format_fixed4, CalculatorApi, FormattedLoss, FormattedReliability};

// ==========================================
// 常量定义
// ==========================================

// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 库名称
pub const APP_NAME: &str = "电网可靠性与停电损失计算";
