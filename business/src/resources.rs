//! The concrete views of the OctoFit API.
//!
//! Each resource is configuration only: a title, an endpoint path and its
//! columns. All fetching and rendering lives in [`CollectionView`].

use serde_json::Value;

use crate::column::ColumnDef;
use crate::config::BusinessConfig;
use crate::record::{Record, display_value};
use crate::view::{CollectionView, ViewConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Activities,
    Teams,
    Users,
    Leaderboard,
    Workouts,
}

impl Resource {
    pub const ALL: [Self; 5] = [
        Self::Activities,
        Self::Teams,
        Self::Users,
        Self::Leaderboard,
        Self::Workouts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Activities => "Activities",
            Self::Teams => "Teams",
            Self::Users => "Users",
            Self::Leaderboard => "Leaderboard",
            Self::Workouts => "Workouts",
        }
    }

    /// Path segment under `/api/`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Activities => "activities",
            Self::Teams => "teams",
            Self::Users => "users",
            Self::Leaderboard => "leaderboard",
            Self::Workouts => "workouts",
        }
    }

    pub fn columns(self) -> Vec<ColumnDef> {
        match self {
            Self::Activities => vec![
                ColumnDef::field("Type", "type"),
                ColumnDef::field("Duration (minutes)", "duration"),
            ],
            Self::Teams => vec![ColumnDef::field("Team Name", "name")],
            Self::Users => vec![
                ColumnDef::field("Name", "name"),
                ColumnDef::field("Email", "email"),
            ],
            Self::Leaderboard => vec![
                ColumnDef::new("Team", team_name),
                ColumnDef::field("Points", "points"),
            ],
            Self::Workouts => vec![
                ColumnDef::field("Name", "name"),
                ColumnDef::field("Description", "description"),
                ColumnDef::field("Duration (minutes)", "duration"),
            ],
        }
    }

    pub fn view_config(self, config: &BusinessConfig) -> ViewConfig {
        ViewConfig::new(self.title(), config.endpoint(self.path()), self.columns())
    }

    /// HTTP-backed view for this resource.
    pub fn view(self, config: &BusinessConfig) -> CollectionView {
        CollectionView::http(self.view_config(config))
    }
}

/// Leaderboard entries reference their team either by id or as a nested object.
fn team_name(record: &Record) -> String {
    match record.get("team") {
        Some(Value::Object(team)) => team.get("name").map(display_value).unwrap_or_default(),
        Some(other) => display_value(other),
        None => String::new(),
    }
}
