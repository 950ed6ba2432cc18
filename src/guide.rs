/// One line of the formatting help shown next to the description field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuideEntry {
    pub marker: &'static str,
    pub effect: &'static str,
    pub example: &'static str,
}

const GUIDE: [GuideEntry; 5] = [
    GuideEntry {
        marker: "**text**",
        effect: "bold text",
        example: "**Pure cotton**",
    },
    GuideEntry {
        marker: "*text*",
        effect: "italic text",
        example: "*Hand wash only*",
    },
    GuideEntry {
        marker: "-",
        effect: "start a line with it for a bullet point",
        example: "- Breathable\n- Machine washable",
    },
    GuideEntry {
        marker: "Enter",
        effect: "start a new line",
        example: "Available in blue\nAvailable in red",
    },
    GuideEntry {
        marker: "blank line",
        effect: "separate paragraphs",
        example: "First paragraph\n\nSecond paragraph",
    },
];

/// Formatting help for editors, in display order.
pub fn authoring_guide() -> &'static [GuideEntry] {
    &GUIDE
}
