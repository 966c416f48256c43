use crate::shared::api_client::{get_json, ApiError};
use contracts::dashboards::d402_monthly_report::dto::{MonthlyReportDto, MonthlyReportQuery};

pub fn report_path(query: &MonthlyReportQuery) -> Result<String, ApiError> {
    let qs = serde_qs::to_string(query).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(format!("api/monthly-reports?{}", qs))
}

pub async fn get_monthly_report(query: &MonthlyReportQuery) -> Result<MonthlyReportDto, ApiError> {
    get_json(&report_path(query)?).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path() {
        let mut query = MonthlyReportQuery {
            month: "2024-03".to_string(),
            branch_id: None,
        };
        assert_eq!(report_path(&query).unwrap(), "api/monthly-reports?month=2024-03");

        query.branch_id = Some(4);
        assert_eq!(
            report_path(&query).unwrap(),
            "api/monthly-reports?month=2024-03&branch_id=4"
        );
    }
}
