use crate::constants::SLIDE_COUNT;

/// The eight card icons, assigned by track position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Compass,
    Map,
    Wind,
    Sun,
    Mountain,
    Cloud,
    Waves,
    Globe,
}

const ICONS: [Icon; SLIDE_COUNT] = [
    Icon::Compass,
    Icon::Map,
    Icon::Wind,
    Icon::Sun,
    Icon::Mountain,
    Icon::Cloud,
    Icon::Waves,
    Icon::Globe,
];

impl Icon {
    /// Fixed position-to-icon table; wraps so any index resolves to an icon.
    pub fn for_position(position: usize) -> Icon {
        ICONS[position % ICONS.len()]
    }

    /// Short glyph drawn in the card's icon chip (default-font safe).
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Compass => "(+)",
            Icon::Map => "[#]",
            Icon::Wind => "~~~",
            Icon::Sun => "(*)",
            Icon::Mountain => "/\\",
            Icon::Cloud => "(-)",
            Icon::Waves => "~_~",
            Icon::Globe => "(o)",
        }
    }
}
