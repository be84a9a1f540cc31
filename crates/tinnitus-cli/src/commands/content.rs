use tinnitus_core::{catalog, Config, Tab, ABOUT};

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

pub fn activities(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    for (tab, rows) in catalog() {
        println!("{}", tab.title());
        for activity in rows {
            println!("  {:<24} tinnitus-cli {}", activity.title(), activity.command());
        }
        if tab == Tab::Settings {
            let settings = &config.settings;
            println!("  Daily Reminders: {}", on_off(settings.daily_reminders));
            println!("  Haptic Feedback: {}", on_off(settings.haptics));
            println!("  Background Sound: {}", settings.background_sound.label());
        }
    }
    Ok(())
}

pub fn tips() -> Result<(), Box<dyn std::error::Error>> {
    for (i, tip) in tinnitus_core::tips().iter().enumerate() {
        println!("{}. {}", i + 1, tip);
    }
    Ok(())
}

pub fn about() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}\n", ABOUT.title);
    println!("{}\n", ABOUT.summary);
    println!("{}\n", ABOUT.emergency_heading);
    println!("{}\n", ABOUT.emergency);
    println!("{}", ABOUT.version);
    Ok(())
}
