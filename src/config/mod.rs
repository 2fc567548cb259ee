// ==========================================
// 电网可靠性计算核心 - 配置层
// ==========================================
// 职责: 设备目录的来源 (内置预设 / JSON / CSV)
// 红线: 目录显式构建后注入,不保留全局实例
// ==========================================

pub mod catalog_loader;
pub mod catalog_profile;
pub mod error;

// 重导出
pub use catalog_loader::{load_catalog_csv, load_catalog_file, load_catalog_json};
pub use catalog_profile::CatalogVariant;
pub use error::{CatalogError, CatalogResult};
