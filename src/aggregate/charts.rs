//! Chart-series derivations for the dashboard.
//!
//! Everything here is a pure function of the most recently fetched entity
//! lists plus the role and theme flags. Series are recomputed from scratch
//! on every call, never incrementally patched, so they cannot drift from
//! their inputs.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;

use crate::models::{Project, Role, Task, TaskStatus, UserProfile};

/// Active/inactive user partition. `is_activated` is boolean, so the
/// partition is exhaustive: active + inactive == total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySplit {
    pub active: u64,
    pub inactive: u64,
    pub total: u64,
}

/// Task counts per known status. Unknown statuses stay out of all three
/// buckets but still count toward `total`, so the bucket sum may be lower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusSplit {
    pub to_do: u64,
    pub in_progress: u64,
    pub done: u64,
    pub total: u64,
}

/// One month of project activity, keyed "YYYY-MM" (UTC calendar month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub created: u64,
    pub modified: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Series colors handed to the charting library. Display-only; the theme
/// never changes any count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub series: [&'static str; 3],
    pub grid: &'static str,
}

impl Theme {
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                series: ["#EF9B28", "#315951", "#E4E1F5"],
                grid: "#DEE2E6",
            },
            Theme::Dark => Palette {
                series: ["#EF9B28", "#8FD1C5", "#6C63AC"],
                grid: "#343A40",
            },
        }
    }
}

/// Chart-ready payload for one dashboard render. Manager-only series are
/// `None` for employees and are skipped in the JSON body.
#[derive(Debug, Serialize)]
pub struct DashboardCharts {
    pub role: Role,
    pub tasks: StatusSplit,
    pub total_projects: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_activity: Option<ActivitySplit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_trend: Option<Vec<MonthlyCount>>,
    pub palette: Palette,
}

fn month_key(ts: &DateTime<Utc>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

pub fn user_activity_split(users: &[UserProfile]) -> ActivitySplit {
    let active = users.iter().filter(|u| u.is_activated).count() as u64;
    ActivitySplit {
        active,
        inactive: users.len() as u64 - active,
        total: users.len() as u64,
    }
}

pub fn task_status_split(tasks: &[Task]) -> StatusSplit {
    let mut split = StatusSplit {
        to_do: 0,
        in_progress: 0,
        done: 0,
        total: tasks.len() as u64,
    };
    for task in tasks {
        match task.status {
            TaskStatus::ToDo => split.to_do += 1,
            TaskStatus::InProgress => split.in_progress += 1,
            TaskStatus::Done => split.done += 1,
            TaskStatus::Unknown => {}
        }
    }
    split
}

/// Created/modified counts per calendar month, ascending by month key.
///
/// The two counters are independent: a project with a null modification
/// date still counts toward the creation month. The output is sparse --
/// months with no activity in either counter are omitted, not zero-filled.
pub fn monthly_project_trend(projects: &[Project]) -> Vec<MonthlyCount> {
    let mut months: BTreeMap<String, (u64, u64)> = BTreeMap::new();
    for project in projects {
        if let Some(ts) = &project.creation_date {
            months.entry(month_key(ts)).or_default().0 += 1;
        }
        if let Some(ts) = &project.modification_date {
            months.entry(month_key(ts)).or_default().1 += 1;
        }
    }
    months
        .into_iter()
        .map(|(month, (created, modified))| MonthlyCount {
            month,
            created,
            modified,
        })
        .collect()
}

/// Assemble the role-gated chart payload.
///
/// Role gating is display policy only -- the remote API enforces the real
/// authorization. Employees get the task split and the total-projects
/// scalar; managers additionally get the user split and the monthly trend.
pub fn build_dashboard(
    role: Role,
    theme: Theme,
    users: &[UserProfile],
    tasks: &[Task],
    projects: &[Project],
) -> DashboardCharts {
    let (user_activity, project_trend) = if role.is_manager() {
        (
            Some(user_activity_split(users)),
            Some(monthly_project_trend(projects)),
        )
    } else {
        (None, None)
    };

    DashboardCharts {
        role,
        tasks: task_status_split(tasks),
        total_projects: projects.len() as u64,
        user_activity,
        project_trend,
        palette: theme.palette(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user(active: bool) -> UserProfile {
        UserProfile {
            is_activated: active,
            ..Default::default()
        }
    }

    fn task(status: TaskStatus) -> Task {
        Task {
            status,
            ..Default::default()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn project(created: Option<DateTime<Utc>>, modified: Option<DateTime<Utc>>) -> Project {
        Project {
            creation_date: created,
            modification_date: modified,
            ..Default::default()
        }
    }

    #[test]
    fn test_user_split_is_exhaustive() {
        let users = vec![user(true), user(false), user(true), user(true)];
        let split = user_activity_split(&users);
        assert_eq!(split.active, 3);
        assert_eq!(split.inactive, 1);
        assert_eq!(split.total, 4);
        assert_eq!(split.active + split.inactive, users.len() as u64);
    }

    #[test]
    fn test_user_split_of_empty_list_is_zero() {
        let split = user_activity_split(&[]);
        assert_eq!(
            split,
            ActivitySplit {
                active: 0,
                inactive: 0,
                total: 0
            }
        );
    }

    #[test]
    fn test_status_split_counts_known_statuses() {
        let tasks = vec![
            task(TaskStatus::ToDo),
            task(TaskStatus::InProgress),
            task(TaskStatus::Done),
            task(TaskStatus::Done),
        ];
        let split = task_status_split(&tasks);
        assert_eq!(split.to_do, 1);
        assert_eq!(split.in_progress, 1);
        assert_eq!(split.done, 2);
        assert_eq!(split.total, 4);
    }

    #[test]
    fn test_status_split_excludes_unknown_from_buckets_not_total() {
        let tasks = vec![
            task(TaskStatus::ToDo),
            task(TaskStatus::Unknown),
            task(TaskStatus::Done),
        ];
        let split = task_status_split(&tasks);
        // bucket sum covers only the known statuses
        assert_eq!(split.to_do + split.in_progress + split.done, 2);
        assert_eq!(split.total, 3);
    }

    #[test]
    fn test_trend_is_sorted_sparse_and_deduplicated() {
        // two created in 2024-01, one in 2024-03; nothing in 2024-02
        let projects = vec![
            project(Some(date(2024, 1, 5)), None),
            project(Some(date(2024, 1, 20)), None),
            project(Some(date(2024, 3, 15)), None),
        ];
        let trend = monthly_project_trend(&projects);
        assert_eq!(
            trend,
            vec![
                MonthlyCount {
                    month: "2024-01".to_string(),
                    created: 2,
                    modified: 0
                },
                MonthlyCount {
                    month: "2024-03".to_string(),
                    created: 1,
                    modified: 0
                },
            ]
        );
    }

    #[test]
    fn test_trend_counters_are_independent() {
        // created 2024-03, never modified: counts once, in created only
        let projects = vec![project(Some(date(2024, 3, 15)), None)];
        let trend = monthly_project_trend(&projects);
        assert_eq!(trend.len(), 1);
        assert_eq!(trend[0].month, "2024-03");
        assert_eq!(trend[0].created, 1);
        assert_eq!(trend[0].modified, 0);

        // modified in a different month than created: two sparse entries
        let projects = vec![project(Some(date(2024, 3, 15)), Some(date(2024, 5, 1)))];
        let trend = monthly_project_trend(&projects);
        assert_eq!(trend.len(), 2);
        assert_eq!((trend[0].created, trend[0].modified), (1, 0));
        assert_eq!((trend[1].created, trend[1].modified), (0, 1));
    }

    #[test]
    fn test_trend_orders_across_years() {
        let projects = vec![
            project(Some(date(2024, 2, 1)), None),
            project(Some(date(2023, 12, 1)), None),
        ];
        let trend = monthly_project_trend(&projects);
        let months: Vec<&str> = trend.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(months, vec!["2023-12", "2024-02"]);
    }

    #[test]
    fn test_manager_dashboard_carries_all_series() {
        let users = vec![user(true), user(false)];
        let tasks = vec![task(TaskStatus::ToDo)];
        let projects = vec![project(Some(date(2024, 1, 1)), None)];
        let charts = build_dashboard(Role::Manager, Theme::Light, &users, &tasks, &projects);
        assert!(charts.user_activity.is_some());
        assert!(charts.project_trend.is_some());
        assert_eq!(charts.total_projects, 1);
    }

    #[test]
    fn test_employee_dashboard_omits_manager_series() {
        let tasks = vec![task(TaskStatus::Done)];
        let projects = vec![project(Some(date(2024, 1, 1)), None), project(None, None)];
        let charts = build_dashboard(Role::Employee, Theme::Dark, &[], &tasks, &projects);
        assert!(charts.user_activity.is_none());
        assert!(charts.project_trend.is_none());
        // the scalar still counts every project, dated or not
        assert_eq!(charts.total_projects, 2);
        assert_eq!(charts.tasks.done, 1);
    }

    #[test]
    fn test_failed_fetches_degrade_to_zero_independently() {
        // a failed projects fetch shows up here as an empty slice; the task
        // and user aggregates are unaffected in the same render
        let users = vec![user(true)];
        let tasks = vec![task(TaskStatus::InProgress)];
        let charts = build_dashboard(Role::Manager, Theme::Light, &users, &tasks, &[]);
        assert_eq!(charts.total_projects, 0);
        assert_eq!(charts.project_trend.as_deref(), Some(&[][..]));
        assert_eq!(charts.tasks.in_progress, 1);
        assert_eq!(charts.user_activity.unwrap().active, 1);
    }

    #[test]
    fn test_theme_changes_palette_not_counts() {
        let tasks = vec![task(TaskStatus::ToDo)];
        let light = build_dashboard(Role::Employee, Theme::Light, &[], &tasks, &[]);
        let dark = build_dashboard(Role::Employee, Theme::Dark, &[], &tasks, &[]);
        assert_eq!(light.tasks, dark.tasks);
        assert_ne!(light.palette, dark.palette);
    }
}
