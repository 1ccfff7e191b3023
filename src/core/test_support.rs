use crate::domain::model::{Project, Transaction, TransactionKind};

pub fn project(title: &str, max_contribution: f64, transactions: Vec<Transaction>) -> Project {
    Project {
        title: title.to_string(),
        description: format!("Description of {}", title),
        program_name: "Programme de coopération volontaire".to_string(),
        executing_agency_partner: "CECI".to_string(),
        maximum_contribution: max_contribution,
        countries: vec!["Philippines (100,00%)".to_string()],
        transactions,
    }
}

pub fn project_with_countries(countries: &[&str]) -> Project {
    Project {
        countries: countries.iter().map(|c| c.to_string()).collect(),
        ..project("Country project", 1000.0, vec![disbursed("100")])
    }
}

pub fn disbursed(amount: &str) -> Transaction {
    Transaction::new(TransactionKind::Disbursement, "2019-04-01", Some(amount))
}

pub fn pledged(amount: &str) -> Transaction {
    Transaction::new(TransactionKind::Pledge, "2018-01-15", Some(amount))
}
