//! Project case studies shown in the "Selected Projects" section.

use serde::{Deserialize, Serialize};

/// One case study: what was asked, what was built, what it achieved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub goal: String,
    pub solution: String,
    /// Technology tags, rendered as chips in this order
    pub tech: Vec<String>,
    pub outcome: String,
    /// Outbound link, usually the code repository
    pub link: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        goal: impl Into<String>,
        solution: impl Into<String>,
        tech: &[&str],
        outcome: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            goal: goal.into(),
            solution: solution.into(),
            tech: tech.iter().map(|t| t.to_string()).collect(),
            outcome: outcome.into(),
            link: link.into(),
        }
    }

    /// The two case studies the page ships with
    pub fn builtin() -> Vec<Project> {
        vec![
            Project::new(
                "E-commerce Recommendation Engine Data Backbone",
                "Enable real-time, personalized recommendations across web and mobile.",
                "Designed a streaming-first architecture ingesting clickstream events via Kafka into \
                 S3-backed bronze storage. Built dbt models that materialize feature tables in \
                 Snowflake and orchestrated with Airflow. Implemented feature computation with Spark \
                 Structured Streaming and served aggregates via Snowflake for downstream ML.",
                &["Kafka", "AWS S3", "dbt", "Snowflake", "Airflow", "Spark", "Python", "SQL"],
                "Drove a 15% increase in cross-sells and 8% lift in average order value.",
                "https://github.com/your-username/recsys-data-backbone",
            ),
            Project::new(
                "Customer 360 Lakehouse for B2B SaaS",
                "Create a unified customer view to power revenue analytics and churn prediction.",
                "Implemented CDC ingestion from Postgres using Airbyte into a medallion architecture \
                 on S3 + Delta. Modeled business entities with dbt and exposed curated marts in \
                 BigQuery for BI. Automated end-to-end freshness SLAs with Prefect and data quality \
                 tests using dbt expectations.",
                &["Airbyte", "AWS S3", "Delta Lake", "dbt", "BigQuery", "Prefect", "Python", "SQL"],
                "Reduced time-to-insight from days to minutes; improved churn model precision by 12%.",
                "https://github.com/your-username/customer-360-lakehouse",
            ),
        ]
    }
}
