// ==========================================
// 电网可靠性计算核心 - 输入层
// ==========================================
// 职责: 原始字符串 → 计算输入 (默认值口径集中于此)
// ==========================================

pub mod field_parser;
pub mod forms;

pub use field_parser::{parse_decimal, parse_decimal_opt, parse_quantity};
pub use forms::{LossField, LossForm, ReliabilityForm};
