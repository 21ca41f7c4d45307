//! Logical asset roles and their conventional file names.

use std::fmt;

/// The visual state an asset or color is requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    /// Idle.
    #[default]
    Normal,
    /// Pointer over the control.
    Hover,
    /// Pointer button held on the control.
    Pressed,
}

impl VisualState {
    /// All states, normal first.
    pub const ALL: [VisualState; 3] = [VisualState::Normal, VisualState::Hover, VisualState::Pressed];

    /// File name / config key suffix for this state (`""`, `"_hover"`, `"_pressed"`).
    pub fn suffix(self) -> &'static str {
        match self {
            VisualState::Normal => "",
            VisualState::Hover => "_hover",
            VisualState::Pressed => "_pressed",
        }
    }
}

/// The fixed set of icon-bearing buttons a theme can skin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    /// Start playback.
    Play,
    /// Pause playback.
    Pause,
    /// Stop playback.
    Stop,
    /// Open the configuration screen (drawn as a gear when unskinned).
    Config,
    /// Quit the application.
    Exit,
    /// Close a modal.
    Close,
    /// Add a credit.
    Credits,
    /// Previous album page.
    LeftNav,
    /// Next album page.
    RightNav,
}

impl IconKind {
    /// Every icon kind.
    pub const ALL: [IconKind; 9] = [
        IconKind::Play,
        IconKind::Pause,
        IconKind::Stop,
        IconKind::Config,
        IconKind::Exit,
        IconKind::Close,
        IconKind::Credits,
        IconKind::LeftNav,
        IconKind::RightNav,
    ];

    /// Stem used for file names (`<stem>_button.png`) and color labels.
    pub fn stem(self) -> &'static str {
        match self {
            IconKind::Play => "play",
            IconKind::Pause => "pause",
            IconKind::Stop => "stop",
            IconKind::Config => "config",
            IconKind::Exit => "exit",
            IconKind::Close => "close",
            IconKind::Credits => "credits",
            IconKind::LeftNav => "left",
            IconKind::RightNav => "right",
        }
    }

    /// Size the artwork is authored for.
    pub fn expected_size(self) -> (u32, u32) {
        match self {
            IconKind::LeftNav | IconKind::RightNav => (60, 80),
            IconKind::Credits => (65, 85),
            _ => (50, 50),
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

/// On-disk format of an asset candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetFormat {
    /// Raster PNG, tried first.
    Png,
    /// Vector SVG, rasterized on demand.
    Svg,
}

impl AssetFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            AssetFormat::Png => "png",
            AssetFormat::Svg => "svg",
        }
    }
}

/// The logical role of a themed visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    /// Full-window background.
    Background,
    /// Generic skin for text-labeled buttons.
    Button(VisualState),
    /// Horizontal slider track.
    SliderTrack,
    /// Vertical slider track.
    SliderTrackVertical,
    /// Slider knob.
    SliderKnob,
    /// Icon-bearing button artwork.
    Icon(IconKind, VisualState),
}

impl AssetKey {
    /// Every key a theme can provide a file for.
    pub fn all() -> impl Iterator<Item = AssetKey> {
        let fixed = [
            AssetKey::Background,
            AssetKey::SliderTrack,
            AssetKey::SliderTrackVertical,
            AssetKey::SliderKnob,
        ];
        let buttons = VisualState::ALL.into_iter().map(AssetKey::Button);
        let icons = IconKind::ALL
            .into_iter()
            .flat_map(|kind| VisualState::ALL.into_iter().map(move |state| AssetKey::Icon(kind, state)));
        fixed.into_iter().chain(buttons).chain(icons)
    }

    /// File stem inside the theme directory, without extension.
    pub fn file_stem(self) -> String {
        match self {
            AssetKey::Background => "background".to_string(),
            AssetKey::Button(state) => format!("button{}", state.suffix()),
            AssetKey::SliderTrack => "slider_track".to_string(),
            AssetKey::SliderTrackVertical => "slider_track_vertical".to_string(),
            AssetKey::SliderKnob => "slider_knob".to_string(),
            AssetKey::Icon(kind, state) => format!("{}_button{}", kind.stem(), state.suffix()),
        }
    }

    /// File name for `format`.
    pub fn file_name(self, format: AssetFormat) -> String {
        format!("{}.{}", self.file_stem(), format.extension())
    }

    /// Formats to try, in order.
    pub fn format_preference(self) -> &'static [AssetFormat] {
        &[AssetFormat::Png, AssetFormat::Svg]
    }

    /// Size the asset is authored for; SVGs are first rasterized at this size.
    pub fn expected_size(self) -> (u32, u32) {
        match self {
            AssetKey::Background => (1000, 700),
            AssetKey::Button(_) => (100, 50),
            AssetKey::SliderTrack => (300, 18),
            AssetKey::SliderTrackVertical => (18, 300),
            AssetKey::SliderKnob => (48, 48),
            AssetKey::Icon(kind, _) => kind.expected_size(),
        }
    }

    /// The state carried by this key, if it has one.
    pub fn state(self) -> Option<VisualState> {
        match self {
            AssetKey::Button(state) | AssetKey::Icon(_, state) => Some(state),
            _ => None,
        }
    }

    /// The same role in another state. Stateless keys are returned unchanged.
    pub fn with_state(self, state: VisualState) -> Self {
        match self {
            AssetKey::Button(_) => AssetKey::Button(state),
            AssetKey::Icon(kind, _) => AssetKey::Icon(kind, state),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        assert_eq!(AssetKey::Background.file_name(AssetFormat::Png), "background.png");
        assert_eq!(
            AssetKey::Button(VisualState::Pressed).file_name(AssetFormat::Png),
            "button_pressed.png"
        );
        assert_eq!(
            AssetKey::Icon(IconKind::LeftNav, VisualState::Normal).file_name(AssetFormat::Svg),
            "left_button.svg"
        );
        assert_eq!(
            AssetKey::Icon(IconKind::Play, VisualState::Hover).file_name(AssetFormat::Png),
            "play_button_hover.png"
        );
    }

    #[test]
    fn test_all_keys_have_distinct_files() {
        let stems: std::collections::HashSet<String> = AssetKey::all().map(AssetKey::file_stem).collect();
        assert_eq!(AssetKey::all().count(), 34);
        assert_eq!(stems.len(), 34);
    }

    #[test]
    fn test_with_state() {
        let key = AssetKey::Icon(IconKind::Stop, VisualState::Normal);
        assert_eq!(
            key.with_state(VisualState::Hover),
            AssetKey::Icon(IconKind::Stop, VisualState::Hover)
        );
        assert_eq!(AssetKey::SliderKnob.with_state(VisualState::Hover), AssetKey::SliderKnob);
    }

    #[test]
    fn test_nav_and_credits_sizes() {
        assert_eq!(IconKind::RightNav.expected_size(), (60, 80));
        assert_eq!(IconKind::Credits.expected_size(), (65, 85));
        assert_eq!(AssetKey::Icon(IconKind::Play, VisualState::Normal).expected_size(), (50, 50));
    }
}
