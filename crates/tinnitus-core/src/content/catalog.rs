use serde::Serialize;

use crate::sequence::Preset;

/// Top-level tabs of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Games,
    Relax,
    Care,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Games, Tab::Relax, Tab::Care, Tab::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Games => "Games",
            Tab::Relax => "Relax",
            Tab::Care => "Care",
            Tab::Settings => "Settings",
        }
    }
}

/// Something a catalog row opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "preset", rename_all = "snake_case")]
pub enum Activity {
    Breathing,
    TapPattern,
    ColorMatch,
    Routine(Preset),
    Tips,
}

impl Activity {
    pub fn title(&self) -> &'static str {
        match self {
            Activity::Breathing => "Breathing Focus",
            Activity::TapPattern => "Tap Patterns",
            Activity::ColorMatch => "Color Puzzle",
            Activity::Routine(preset) => preset.title(),
            Activity::Tips => "Daily Tips",
        }
    }

    /// CLI subcommand that runs this activity.
    pub fn command(&self) -> String {
        match self {
            Activity::Breathing => "breathe".into(),
            Activity::TapPattern => "pattern".into(),
            Activity::ColorMatch => "color".into(),
            Activity::Routine(preset) => format!("session {}", preset.slug()),
            Activity::Tips => "tips".into(),
        }
    }
}

/// Rows of each tab, in display order. The settings tab has no activities.
pub fn catalog() -> Vec<(Tab, Vec<Activity>)> {
    vec![
        (
            Tab::Games,
            vec![Activity::Breathing, Activity::TapPattern, Activity::ColorMatch],
        ),
        (
            Tab::Relax,
            vec![
                Activity::Routine(Preset::Meditation),
                Activity::Routine(Preset::ProgressiveRelaxation),
            ],
        ),
        (
            Tab::Care,
            vec![
                Activity::Routine(Preset::JawExercises),
                Activity::Routine(Preset::EarMassage),
                Activity::Routine(Preset::NeckStretches),
                Activity::Tips,
            ],
        ),
        (Tab::Settings, Vec::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_is_reachable() {
        let listed: Vec<Preset> = catalog()
            .into_iter()
            .flat_map(|(_, rows)| rows)
            .filter_map(|a| match a {
                Activity::Routine(p) => Some(p),
                _ => None,
            })
            .collect();
        for preset in Preset::ALL {
            assert!(listed.contains(&preset), "{preset} missing from catalog");
        }
    }

    #[test]
    fn tabs_in_order() {
        let tabs: Vec<Tab> = catalog().into_iter().map(|(t, _)| t).collect();
        assert_eq!(tabs, Tab::ALL.to_vec());
    }

    #[test]
    fn routine_rows_link_to_session_command() {
        assert_eq!(
            Activity::Routine(Preset::EarMassage).command(),
            "session massage"
        );
        assert_eq!(Activity::ColorMatch.title(), "Color Puzzle");
    }
}
