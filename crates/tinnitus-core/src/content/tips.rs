use serde::Serialize;

const TIPS: [&str; 10] = [
    "Avoid caffeine and nicotine, which can make tinnitus worse.",
    "Use white noise or soft music to mask tinnitus, especially at night.",
    "Protect your ears from loud sounds with earplugs or noise-cancelling headphones.",
    "Practice stress management through meditation and relaxation techniques.",
    "Stay hydrated and maintain a healthy diet with adequate vitamins and minerals.",
    "Limit salt intake, which can affect fluid retention and tinnitus symptoms.",
    "Get enough sleep and maintain a consistent sleep schedule.",
    "Avoid silence - use background noise when in quiet environments.",
    "Try to limit use of NSAIDs and aspirin, which can worsen tinnitus for some people.",
    "Regular exercise helps improve blood circulation, which may help reduce tinnitus.",
];

/// Daily tips, in display order.
pub fn tips() -> &'static [&'static str] {
    &TIPS
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct About {
    pub title: &'static str,
    pub summary: &'static str,
    pub emergency_heading: &'static str,
    pub emergency: &'static str,
    pub version: &'static str,
}

pub const ABOUT: About = About {
    title: "Tinnitus Relief",
    summary: "This app is designed to help manage tinnitus symptoms through distraction \
              techniques, relaxation exercises, and ear & jaw care.",
    emergency_heading: "Emergency Help",
    emergency: "If you experience sudden hearing loss or dramatic changes in tinnitus, \
                contact your healthcare provider immediately.",
    version: "Version 1.0",
};
