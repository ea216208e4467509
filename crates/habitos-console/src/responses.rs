//! Fixed advisory tables, one per console mode.

use habitos_core::ConsoleMode;

/// The response table for `mode`. Never empty.
pub(crate) fn responses_for(mode: ConsoleMode) -> &'static [&'static str] {
    match mode {
        ConsoleMode::Default => DEFAULT,
        ConsoleMode::Warlord => WARLORD,
        ConsoleMode::Architect => ARCHITECT,
        ConsoleMode::Sovereign => SOVEREIGN,
        ConsoleMode::Noetic => NOETIC,
        ConsoleMode::Somatic => SOMATIC,
        ConsoleMode::Shadow => SHADOW,
        ConsoleMode::Pantheon => PANTHEON,
    }
}

const DEFAULT: &[&str] = &[
    "Based on your 4D scan today, your somatic dimension is running low. Consider \
     front-loading physical habits before they compound into evening avoidance.",
    "Your habit completion rate has been trending up over the past week. The \
     minimum-viable-day system seems to be working well for you.",
];

const WARLORD: &[&str] = &[
    "Stop theorizing. You have 90 minutes before your energy window closes. Pick the \
     hardest creative task and execute. No research, no planning — production only. Move.",
    "Your shadow log shows 3 grazing episodes this week. That's not a habit — it's a \
     retreat. Install the countermove or accept the cost. There is no middle ground.",
];

const ARCHITECT: &[&str] = &[
    "Looking at your system architecture: the morning routine has a single point of \
     failure — sleep quality. I'd recommend adding a degraded-mode pathway that still \
     preserves the first 3 keystone habits even on poor sleep days.",
    "Your execution block allocation is 60% creative, 10% structural. The system is \
     becoming fragile — consider a 40/30/20/10 split across \
     creative/structural/physical/learning.",
];

const SOVEREIGN: &[&str] = &[
    "The question isn't whether to ship the beat pack. The question is: who are you \
     becoming by shipping it? Each artifact is a vote for an identity. What identity \
     does this artifact reinforce?",
    "You've been operating in reactive mode for 3 days. Sovereign state requires \
     proactive scheduling. Block tomorrow's first 2 hours before you sleep tonight.",
];

const NOETIC: &[&str] = &[
    "Interesting pattern emerging: your highest noetic scores correlate with days where \
     you read before creating. The input-processing-output pipeline seems to have a \
     24-hour latency for you.",
    "The essay you wrote on shadow integration shows synthetic thinking across multiple \
     frameworks. That's rare. Consider: what would happen if you applied that same \
     cross-domain synthesis to your music?",
];

const SOMATIC: &[&str] = &[
    "Your body is sending clear signals. Three consecutive days of somatic scores below \
     5 typically precedes a crash. Prioritize: sleep 8+ hours, cold exposure in the \
     morning, no screens after 10pm.",
    "Heart rate variability and somatic scores track together in your data. Your \
     afternoon energy dips may be postprandial — try the blood type protocol meal \
     timing: largest meal at noon, light dinner by 6pm.",
];

const SHADOW: &[&str] = &[
    "The grazing pattern isn't really about food. It's a displacement activity for the \
     anxiety you feel when creative work gets ambiguous. The real pattern: uncertainty, \
     then discomfort, then oral soothing, then guilt, then more avoidance. Break the \
     chain at step 2.",
    "Perfectionism and avoidance are the same pattern wearing different masks. One says \
     'not yet good enough,' the other says 'not yet ready to try.' Both serve the same \
     master: fear of being seen as inadequate.",
];

const PANTHEON: &[&str] = &[
    "**[Strategos]** Campaign assessment: you're winning tactical battles but losing \
     strategic ground. Three shipped artifacts this month, but none advance the primary \
     objective. Recommend: define your Q1 campaign target and filter all execution \
     blocks through it.\n\n**[Bio-Digital Lab]** Somatic data shows a 72-hour stress \
     cycle that correlates with your creative output spikes. You're running on \
     cortisol, not capability. Recommend: forced recovery day every 4th day.\n\n\
     **[Ethereal Archive]** Cross-referencing your journal entries with historical \
     pattern data: you're in a phase transition. The old system is dying but the new \
     one isn't born yet. This discomfort is not a bug — it's the signal that \
     transformation is happening. Don't retreat to comfort.",
];
