// ==========================================
// 电网可靠性计算核心 - API 层
// ==========================================
// 职责: 面向展示层的调用入口与显示格式化
// ==========================================

pub mod calculator_api;
pub mod format;

pub use calculator_api::CalculatorApi;
pub use format::{format_fixed4, FormattedLoss, FormattedReliability};
