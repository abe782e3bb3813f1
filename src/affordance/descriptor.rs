use crate::git::AheadBehind;

/// Which of the mutually exclusive toolbar states is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceKind {
    InProgress,
    PublishRepo,
    PublishBranchDisabled,
    PublishBranch,
    Fetch,
    Pull,
    Push,
}

/// The operation the host should dispatch when the control is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTag {
    Push,
    Pull,
    Fetch,
}

impl ActionTag {
    pub fn display_name(&self) -> &'static str {
        match self {
            ActionTag::Push => "push",
            ActionTag::Pull => "pull",
            ActionTag::Fetch => "fetch",
        }
    }
}

/// Icon slot of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    CloudUpload,
    Refresh,
    ArrowDown,
    ArrowUp,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::CloudUpload => "☁",
            Icon::Refresh => "↻",
            Icon::ArrowDown => "↓",
            Icon::ArrowUp => "↑",
        }
    }
}

/// Ahead/behind counts rendered next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub ahead: u32,
    pub behind: u32,
}

impl Badge {
    /// Badge for a divergence pair, suppressed while an operation is in
    /// progress, when no upstream is configured, or when both sides are zero.
    pub fn from_counts(counts: Option<AheadBehind>, in_progress: bool) -> Option<Self> {
        if in_progress {
            return None;
        }
        match counts {
            Some(pair) if !pair.is_in_sync() => Some(Self {
                ahead: pair.ahead,
                behind: pair.behind,
            }),
            _ => None,
        }
    }

    /// Rendered entries, zero sides omitted. Yields at most two.
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::with_capacity(2);
        if self.ahead > 0 {
            entries.push(format!("↑{}", self.ahead));
        }
        if self.behind > 0 {
            entries.push(format!("↓{}", self.behind));
        }
        entries
    }
}

/// Everything the rendering layer needs to paint the toolbar control.
///
/// Freshly constructed on every selection; the host pattern-matches on
/// `kind` and wires `action` to click handling when `enabled` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub kind: AffordanceKind,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    /// Whether the icon should animate
    pub icon_spins: bool,
    /// Completion fraction of the in-flight operation, if one is running
    pub progress_value: Option<f32>,
    pub badge: Option<Badge>,
    pub enabled: bool,
    pub action: Option<ActionTag>,
}

impl Descriptor {
    /// An interactive control. Carrying the action here keeps the
    /// action-present-iff-enabled invariant in one place.
    pub fn interactive(
        kind: AffordanceKind,
        title: String,
        description: String,
        icon: Icon,
        action: ActionTag,
    ) -> Self {
        Self {
            kind,
            title,
            description,
            icon,
            icon_spins: false,
            progress_value: None,
            badge: None,
            enabled: true,
            action: Some(action),
        }
    }

    /// A control the user cannot activate.
    pub fn inert(kind: AffordanceKind, title: String, description: String, icon: Icon) -> Self {
        Self {
            kind,
            title,
            description,
            icon,
            icon_spins: false,
            progress_value: None,
            badge: None,
            enabled: false,
            action: None,
        }
    }

    pub fn with_badge(mut self, badge: Option<Badge>) -> Self {
        self.badge = badge;
        self
    }
}
