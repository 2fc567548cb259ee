// ==========================================
// 电网可靠性计算核心 - 计算 API
// ==========================================
// 职责: 表单记录 → 计算引擎 → 原始结果
// 红线: 不做格式化、不持有界面状态; 只编排,不含公式
// ==========================================

use crate::config::CatalogVariant;
use crate::domain::equipment::EquipmentCatalog;
use crate::domain::loss::LossResult;
use crate::domain::reliability::ReliabilityResult;
use crate::engine::{LossEstimator, ReliabilityEngine};
use crate::input::forms::{LossForm, ReliabilityForm};
use tracing::instrument;

// ==========================================
// CalculatorApi - 计算入口
// ==========================================
#[derive(Debug, Clone)]
pub struct CalculatorApi {
    catalog: EquipmentCatalog,
    reliability_engine: ReliabilityEngine,
    loss_estimator: LossEstimator,
}

impl CalculatorApi {
    /// 使用指定目录创建
    pub fn new(catalog: EquipmentCatalog) -> Self {
        Self {
            catalog,
            reliability_engine: ReliabilityEngine::new(),
            loss_estimator: LossEstimator::new(),
        }
    }

    /// 使用内置目录创建
    pub fn with_variant(variant: CatalogVariant) -> Self {
        Self::new(variant.build())
    }

    pub fn catalog(&self) -> &EquipmentCatalog {
        &self.catalog
    }

    /// 预填 "0" 的台数表单 (目录中每个设备一项)
    pub fn blank_reliability_form(&self) -> ReliabilityForm {
        ReliabilityForm::blank_for(&self.catalog)
    }

    /// 可靠性指标计算
    #[instrument(skip(self, form), fields(entries = form.len()))]
    pub fn reliability(&self, form: &ReliabilityForm) -> ReliabilityResult {
        let quantities = form.to_quantities();
        self.reliability_engine
            .compute_metrics(&quantities, &self.catalog)
    }

    /// 停电损失估算
    #[instrument(skip(self, form))]
    pub fn losses(&self, form: &LossForm) -> LossResult {
        self.loss_estimator.estimate(&form.to_inputs())
    }
}

impl Default for CalculatorApi {
    fn default() -> Self {
        Self::with_variant(CatalogVariant::default())
    }
}
