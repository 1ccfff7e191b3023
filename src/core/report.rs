use crate::core::aggregate::project_disbursed;
use crate::domain::model::{Project, StatsSummary, SubsidySummary, TransactionView};
use crate::utils::error::Result;
use std::fmt::Write;

pub const STATS_FILE: &str = "README.md";
pub const PROJECTS_FILE: &str = "projects.json";
pub const TRANSACTIONS_FILE: &str = "transactions.txt";
pub const DESCRIPTIONS_FILE: &str = "descriptions.md";

pub fn render_stats(stats: &StatsSummary, keyword: &str) -> String {
    format!(
        "### Search results for '_{}_'<br />\n\
         __Number of projects__ : {}<br />\n\
         __Total aid sent in $__ : {:.2}<br />\n\
         __Number of transactions ( *engagements included* )__ : {}<br />\n\
         __Number of transactions ( *engagements excluded* )__ : {}<br />\n",
        keyword,
        stats.nb_projects,
        stats.total_contrib,
        stats.nb_transactions,
        stats.nb_transactions_sent
    )
}

pub fn render_transaction(view: &TransactionView) -> String {
    format!(
        "Date:{} | Amount:{} | Program:{} | Executive partner:{}",
        view.transaction.transaction_date,
        view.amount.as_deref().unwrap_or(""),
        view.program_name,
        view.exec_partner
    )
}

pub fn render_transactions(views: &[TransactionView]) -> String {
    views.iter().fold(String::new(), |mut out, view| {
        out.push_str(&render_transaction(view));
        out.push('\n');
        out
    })
}

/// 單一專案的說明區塊，撥款金額依國家比例計算
pub fn render_project_description(project: &Project, country_query: &str) -> Result<String> {
    let disbursed = project_disbursed(project, country_query)?;
    let mut out = String::new();

    // write! 寫入 String 不會失敗
    let _ = writeln!(out, "****************************");
    let _ = writeln!(out, "Titre du programme : {}", project.title);
    let _ = writeln!(out, "Montant debourser : {:.2}", disbursed);
    let _ = writeln!(out, "Agence partenaire executant : {}", project.executing_agency_partner);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", project.description);
    for country in &project.countries {
        let _ = writeln!(out, "- {}", country);
    }
    let _ = writeln!(out, "****************************");
    Ok(out)
}

pub fn render_project_descriptions(projects: &[Project], country_query: &str) -> Result<String> {
    let mut out = String::new();
    for project in projects {
        out.push_str(&render_project_description(project, country_query)?);
        out.push('\n');
    }
    Ok(out)
}

pub fn render_subsidies(summary: &SubsidySummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "### Subsidy program summary<br />");
    let _ = writeln!(out, "__Number of records__ : {}<br />", summary.nb_records);
    let _ = writeln!(out, "__Total international fund sent__ : {:.2}<br />", summary.total_sent);
    let _ = writeln!(out, "__Total in engagements__ : {:.2}<br />", summary.total_engaged);
    let _ = writeln!(
        out,
        "__Number of organisations__ : {}<br />",
        summary.organisations.len()
    );
    let _ = writeln!(out);
    for (org_id, organisation) in &summary.organisations {
        let _ = writeln!(
            out,
            "- {} : {} / {}",
            org_id, organisation.name_local, organisation.name_foreign
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::summarize;
    use crate::core::test_support::{disbursed, pledged, project};

    #[test]
    fn test_render_stats() {
        let projects = vec![project("A", 1.0, vec![disbursed("100"), pledged("50")])];
        let stats = summarize(&projects, "").unwrap();
        let text = render_stats(&stats, "bangsamoro");
        assert!(text.starts_with("### Search results for '_bangsamoro_'"));
        assert!(text.contains("__Number of projects__ : 1<br />"));
        assert!(text.contains("__Total aid sent in $__ : 100.00<br />"));
        assert!(text.contains("( *engagements included* )__ : 2"));
        assert!(text.contains("( *engagements excluded* )__ : 1"));
    }

    #[test]
    fn test_render_transactions() {
        let projects = vec![project("A", 1.0, vec![disbursed("12.5")])];
        let stats = summarize(&projects, "").unwrap();
        assert_eq!(
            render_transactions(&stats.transactions),
            "Date:2019-04-01 | Amount:12.5 | Program:Programme de coopération volontaire | Executive partner:CECI\n"
        );
    }

    #[test]
    fn test_render_description_uses_country_share() {
        let mut p = project("Eau potable", 1.0, vec![disbursed("1000")]);
        p.countries = vec!["Philippines (50%)".to_string(), "Laos (50%)".to_string()];
        let text = render_project_description(&p, "laos").unwrap();
        assert!(text.contains("Titre du programme : Eau potable"));
        assert!(text.contains("Montant debourser : 500.00"));
        assert!(text.contains("- Laos (50%)"));
    }
}
