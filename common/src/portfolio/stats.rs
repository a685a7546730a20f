use serde::Serialize;

/// One figure in the stats strip under the portfolio grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub end: u64,
    /// Appended verbatim after the number, never animated.
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const HIGHLIGHT_STATS: &[Stat] = &[
    Stat { end: 150, suffix: "+", label: "Websites Launched" },
    Stat { end: 98, suffix: "%", label: "Client Retention" },
    Stat { end: 12, suffix: "", label: "Years in Sydney" },
    Stat { end: 2500, suffix: "+", label: "Keywords Ranked" },
];
