use crate::domain::model::{Project, TransactionKind, TransactionView};

/// Flattens the projects into one row per transaction, in project then
/// transaction order.
///
/// Pledges are listed only with `include_pledges`. Disbursements are all
/// listed with `include_zero`; otherwise only those with a non-zero amount
/// text, which is then attached as-is. Country shares are never applied here.
pub fn extract_transactions(
    projects: &[Project],
    include_pledges: bool,
    include_zero: bool,
) -> Vec<TransactionView> {
    let mut views = Vec::new();

    for project in projects {
        for transaction in &project.transactions {
            let amount = match transaction.transaction_type {
                TransactionKind::Pledge if include_pledges => None,
                TransactionKind::Pledge => continue,
                TransactionKind::Disbursement if include_zero => None,
                TransactionKind::Disbursement if transaction.has_nonzero_amount_text() => {
                    transaction.amount.clone()
                }
                TransactionKind::Disbursement => continue,
            };

            views.push(TransactionView {
                transaction: transaction.clone(),
                amount,
                program_name: project.program_name.clone(),
                exec_partner: project.executing_agency_partner.clone(),
            });
        }
    }

    views
}
