// ==========================================
// 电网可靠性计算核心 - 表单记录
// ==========================================
// 职责: 字段名 → 原始字符串 的不可变记录,一次性转换为计算输入
// 红线: 不持有界面状态,不做校验
// ==========================================

use crate::domain::equipment::EquipmentCatalog;
use crate::domain::loss::LossInputs;
use crate::domain::reliability::QuantityInput;
use crate::input::field_parser::{parse_decimal_opt, parse_quantity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ReliabilityForm - 设备台数表单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReliabilityForm {
    fields: BTreeMap<String, String>,
}

impl ReliabilityForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 为目录中每个设备预填 "0"
    pub fn blank_for(catalog: &EquipmentCatalog) -> Self {
        catalog
            .names()
            .map(|name| (name.to_string(), "0".to_string()))
            .collect()
    }

    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.set(name, raw);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.fields.insert(name.into(), raw.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// 转换为台数输入 (无法解析 → 0)
    pub fn to_quantities(&self) -> QuantityInput {
        self.fields
            .iter()
            .map(|(name, raw)| (name.as_str(), parse_quantity(raw)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReliabilityForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut form = Self::new();
        for (name, raw) in iter {
            form.set(name, raw);
        }
        form
    }
}

// ==========================================
// LossField - 损失估算表单字段
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossField {
    FailureFrequency,
    AvgRecoveryTime,
    NominalPower,
    TariffRate,
    PlannedDowntimeCoeff,
    DirectEmergencyLoss,
    PlannedLoss,
}

impl LossField {
    /// 全部字段 (表单顺序)
    pub const ALL: [LossField; 7] = [
        LossField::FailureFrequency,
        LossField::AvgRecoveryTime,
        LossField::NominalPower,
        LossField::TariffRate,
        LossField::PlannedDowntimeCoeff,
        LossField::DirectEmergencyLoss,
        LossField::PlannedLoss,
    ];

    /// 稳定字段键
    pub fn key(&self) -> &'static str {
        match self {
            LossField::FailureFrequency => "failure_frequency",
            LossField::AvgRecoveryTime => "avg_recovery_time",
            LossField::NominalPower => "nominal_power",
            LossField::TariffRate => "tariff_rate",
            LossField::PlannedDowntimeCoeff => "planned_downtime_coeff",
            LossField::DirectEmergencyLoss => "direct_emergency_loss",
            LossField::PlannedLoss => "planned_loss",
        }
    }

    /// 显示标签
    pub fn label(&self) -> &'static str {
        match self {
            LossField::FailureFrequency => "Failure Frequency (ω)",
            LossField::AvgRecoveryTime => "Average Repair Time (t_r)",
            LossField::NominalPower => "Nominal Power (P_nom)",
            LossField::TariffRate => "Tariff Rate (T_r)",
            LossField::PlannedDowntimeCoeff => "Planned Downtime Coeff. (k_plan)",
            LossField::DirectEmergencyLoss => "Emergency Losses (L_em)",
            LossField::PlannedLoss => "Planned Losses (L_plan)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

// ==========================================
// LossForm - 损失估算表单
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LossForm {
    fields: BTreeMap<LossField, String>,
}

impl LossForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按字段键构建,未知键忽略
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::new();
        for (key, raw) in pairs {
            match LossField::from_key(key) {
                Some(field) => form.set(field, raw),
                None => tracing::debug!(key, "未知损失字段,忽略"),
            }
        }
        form
    }

    pub fn with(mut self, field: LossField, raw: impl Into<String>) -> Self {
        self.set(field, raw);
        self
    }

    pub fn set(&mut self, field: LossField, raw: impl Into<String>) {
        self.fields.insert(field, raw.into());
    }

    pub fn get(&self, field: LossField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// 转换为损失估算输入 (缺失或无法解析 → 0.0)
    pub fn to_inputs(&self) -> LossInputs {
        let value = |field: LossField| parse_decimal_opt(self.get(field));

        LossInputs {
            failure_frequency: value(LossField::FailureFrequency),
            avg_recovery_time: value(LossField::AvgRecoveryTime),
            nominal_power: value(LossField::NominalPower),
            tariff_rate: value(LossField::TariffRate),
            planned_downtime_coeff: value(LossField::PlannedDowntimeCoeff),
            direct_emergency_loss: value(LossField::DirectEmergencyLoss),
            planned_loss: value(LossField::PlannedLoss),
        }
    }
}
