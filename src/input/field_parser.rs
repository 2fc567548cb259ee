// ==========================================
// 电网可靠性计算核心 - 输入字段解析
// ==========================================
// 口径: 无法解析的输入一律按 0 处理,不向调用方报错
// ==========================================

/// 解析台数 (整数)
///
/// 原样按 32 位十进制整数解析后扩展为 i64,失败返回 0。
/// 不去除空白: `" 5 "` 视为无法解析; 超出 i32 范围同样返回 0。
pub fn parse_quantity(raw: &str) -> i64 {
    raw.parse::<i32>().map(i64::from).unwrap_or(0)
}

/// 解析标量参数 (浮点数)
///
/// 去除首尾空白后按浮点数解析,失败返回 0.0。
/// `NaN`/`inf` 等可被解析的特殊值按原样返回。
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// 解析可缺失的标量参数 (缺失视为 0.0)
pub fn parse_decimal_opt(raw: Option<&str>) -> f64 {
    raw.map(parse_decimal).unwrap_or(0.0)
}
