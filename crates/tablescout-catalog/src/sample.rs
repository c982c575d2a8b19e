//! Built-in demonstration catalogue

use tablescout_core::{ColumnInfo, TableRecord};

struct SampleTable {
    dataset: &'static str,
    table_name: &'static str,
    description: &'static str,
    columns: &'static [(&'static str, &'static str)],
    tags: &'static [&'static str],
    last_modified: &'static str,
    row_count: u64,
}

const SAMPLE_TABLES: &[SampleTable] = &[
    SampleTable {
        dataset: "marketing",
        table_name: "daily_campaign_performance",
        description: "Daily performance metrics for marketing campaigns including impressions, clicks, conversions and spend",
        columns: &[
            ("date", "Campaign date"),
            ("campaign_id", "Unique campaign identifier"),
            ("impressions", "Number of ad impressions"),
            ("clicks", "Number of clicks"),
            ("conversions", "Number of conversions"),
            ("spend", "Campaign spend amount"),
        ],
        tags: &["marketing", "campaign", "daily", "performance"],
        last_modified: "2024-01-15",
        row_count: 50_000,
    },
    SampleTable {
        dataset: "marketing",
        table_name: "campaign_planning_data",
        description: "Campaign planning information including budget allocation, target audience, and planned activities",
        columns: &[
            ("campaign_id", "Campaign identifier"),
            ("planned_budget", "Planned campaign budget"),
            ("target_audience", "Target audience description"),
            ("start_date", "Campaign start date"),
            ("end_date", "Campaign end date"),
        ],
        tags: &["marketing", "campaign", "planning", "budget"],
        last_modified: "2024-01-10",
        row_count: 1_200,
    },
    SampleTable {
        dataset: "sales",
        table_name: "daily_sales_summary",
        description: "Daily sales summary with revenue, units sold, and customer metrics",
        columns: &[
            ("date", "Sales date"),
            ("revenue", "Total revenue"),
            ("units_sold", "Number of units sold"),
            ("customers", "Number of unique customers"),
        ],
        tags: &["sales", "daily", "revenue", "summary"],
        last_modified: "2024-01-14",
        row_count: 30_000,
    },
    SampleTable {
        dataset: "analytics",
        table_name: "user_behavior_daily",
        description: "Daily user behavior analytics including page views, session duration, and user actions",
        columns: &[
            ("date", "Analytics date"),
            ("user_id", "User identifier"),
            ("page_views", "Number of page views"),
            ("session_duration", "Session duration in seconds"),
        ],
        tags: &["analytics", "user", "behavior", "daily"],
        last_modified: "2024-01-15",
        row_count: 100_000,
    },
    SampleTable {
        dataset: "finance",
        table_name: "budget_planning",
        description: "Budget planning data for different departments and projects",
        columns: &[
            ("department", "Department name"),
            ("project", "Project name"),
            ("planned_budget", "Planned budget amount"),
            ("actual_spend", "Actual spend amount"),
        ],
        tags: &["finance", "budget", "planning", "department"],
        last_modified: "2024-01-12",
        row_count: 500,
    },
    SampleTable {
        dataset: "marketing",
        table_name: "campaign_metadata",
        description: "Metadata for marketing campaigns including campaign type, channels, and objectives",
        columns: &[
            ("campaign_id", "Campaign identifier"),
            ("campaign_type", "Type of campaign"),
            ("channels", "Marketing channels used"),
            ("objectives", "Campaign objectives"),
        ],
        tags: &["marketing", "campaign", "metadata", "channels"],
        last_modified: "2024-01-13",
        row_count: 800,
    },
    SampleTable {
        dataset: "product",
        table_name: "daily_product_metrics",
        description: "Daily product usage metrics and feature adoption rates",
        columns: &[
            ("date", "Metrics date"),
            ("product_id", "Product identifier"),
            ("active_users", "Daily active users"),
            ("feature_usage", "Feature usage statistics"),
        ],
        tags: &["product", "daily", "metrics", "usage"],
        last_modified: "2024-01-15",
        row_count: 25_000,
    },
    SampleTable {
        dataset: "customer",
        table_name: "customer_journey_data",
        description: "Customer journey data tracking touchpoints and conversion paths",
        columns: &[
            ("customer_id", "Customer identifier"),
            ("touchpoint", "Customer touchpoint"),
            ("timestamp", "Touchpoint timestamp"),
            ("conversion_flag", "Conversion indicator"),
        ],
        tags: &["customer", "journey", "touchpoint", "conversion"],
        last_modified: "2024-01-11",
        row_count: 150_000,
    },
    SampleTable {
        dataset: "operations",
        table_name: "daily_operations_report",
        description: "Daily operations report including system uptime, error rates, and performance metrics",
        columns: &[
            ("date", "Report date"),
            ("system_uptime", "System uptime percentage"),
            ("error_rate", "Error rate percentage"),
            ("avg_response_time", "Average response time"),
        ],
        tags: &["operations", "daily", "system", "performance"],
        last_modified: "2024-01-15",
        row_count: 365,
    },
    SampleTable {
        dataset: "marketing",
        table_name: "campaign_daily_plan",
        description: "Daily campaign execution plan with scheduled activities and resource allocation",
        columns: &[
            ("date", "Plan date"),
            ("campaign_id", "Campaign identifier"),
            ("scheduled_activities", "Scheduled campaign activities"),
            ("resource_allocation", "Resource allocation details"),
        ],
        tags: &["marketing", "campaign", "daily", "plan", "execution"],
        last_modified: "2024-01-14",
        row_count: 5_000,
    },
];

/// Queries run by `tablescout demo`
pub const DEMO_QUERIES: &[&str] = &[
    "Where I can find the daily campaign plan data?",
    "Show me tables with sales information",
    "I need user behavior analytics",
    "Find tables about budget planning",
    "What tables contain campaign performance metrics?",
];

/// The ten-table demonstration catalogue, in a fixed order
pub fn sample_tables() -> Vec<TableRecord> {
    SAMPLE_TABLES
        .iter()
        .map(|t| TableRecord {
            dataset: t.dataset.to_string(),
            table_name: t.table_name.to_string(),
            description: t.description.to_string(),
            columns: t
                .columns
                .iter()
                .map(|(name, description)| ColumnInfo::new(*name, *description))
                .collect(),
            tags: t.tags.iter().map(|s| s.to_string()).collect(),
            last_modified: t.last_modified.to_string(),
            row_count: t.row_count,
        })
        .collect()
}
