use serde::{Deserialize, Serialize};

/// 交易類型：實際撥款（Déboursé）或承諾款項（Engagement）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "Déboursé")]
    Disbursement,
    #[serde(rename = "Engagement")]
    Pledge,
}

impl TransactionKind {
    pub const DISBURSEMENT_LABEL: &'static str = "Déboursé";
    pub const PLEDGE_LABEL: &'static str = "Engagement";

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            Self::DISBURSEMENT_LABEL => Some(Self::Disbursement),
            Self::PLEDGE_LABEL => Some(Self::Pledge),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Disbursement => Self::DISBURSEMENT_LABEL,
            Self::Pledge => Self::PLEDGE_LABEL,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_type: TransactionKind,
    pub transaction_date: String,
    /// Raw ledger amount. `None` and `Some("")` both mean no amount was recorded.
    pub amount: Option<String>,
}

impl Transaction {
    pub fn new(kind: TransactionKind, date: &str, amount: Option<&str>) -> Self {
        Self {
            transaction_type: kind,
            transaction_date: date.to_string(),
            amount: amount.map(str::to_string),
        }
    }

    pub fn is_disbursement(&self) -> bool {
        self.transaction_type == TransactionKind::Disbursement
    }

    pub fn is_pledge(&self) -> bool {
        self.transaction_type == TransactionKind::Pledge
    }

    /// 金額是否為有效的非零文字（空字串、缺少或 "0" 皆視為零）
    pub fn has_nonzero_amount_text(&self) -> bool {
        matches!(self.amount.as_deref(), Some(text) if !text.is_empty() && text != "0")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub program_name: String,
    pub executing_agency_partner: String,
    pub maximum_contribution: f64,
    pub countries: Vec<String>,
    pub transactions: Vec<Transaction>,
}

pub type ProjectCollection = Vec<Project>;

/// One row of the per-transaction listing.
///
/// `amount` is only attached for non-zero disbursements, and is the raw
/// ledger text without any country-contribution scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionView {
    pub transaction: Transaction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub amount: Option<String>,
    pub program_name: String,
    pub exec_partner: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub nb_projects: usize,
    pub total_contrib: f64,
    pub nb_transactions: usize,
    pub nb_transactions_sent: usize,
    pub transactions: Vec<TransactionView>,
}

/// 第二個補助計畫的 CSV 資料列
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidyRecord {
    #[serde(rename = "NoOrgaQue")]
    pub org_id: String,
    #[serde(rename = "NomOrgaQue", default)]
    pub org_name_local: String,
    #[serde(rename = "NomOrgaEtran", default)]
    pub org_name_foreign: String,
    #[serde(rename = "MontantSubvention", default)]
    pub subsidy_amount: String,
    #[serde(rename = "Versement1", default)]
    pub installment_1: String,
    #[serde(rename = "Versement2", default)]
    pub installment_2: String,
    #[serde(rename = "Versement3", default)]
    pub installment_3: String,
    #[serde(rename = "Versement4", default)]
    pub installment_4: String,
    #[serde(rename = "Versement5", default)]
    pub installment_5: String,
}

impl SubsidyRecord {
    pub fn installments(&self) -> [&str; 5] {
        [
            &self.installment_1,
            &self.installment_2,
            &self.installment_3,
            &self.installment_4,
            &self.installment_5,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organisation {
    pub name_local: String,
    pub name_foreign: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubsidySummary {
    pub nb_records: usize,
    pub total_sent: f64,
    pub total_engaged: f64,
    pub organisations: std::collections::BTreeMap<String, Organisation>,
}
