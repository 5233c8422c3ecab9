mod charts;

pub use charts::{
    build_dashboard, monthly_project_trend, task_status_split, user_activity_split,
    ActivitySplit, DashboardCharts, MonthlyCount, Palette, StatusSplit, Theme,
};
