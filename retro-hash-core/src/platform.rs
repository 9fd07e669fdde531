use serde::{Deserialize, Serialize};

/// Platform/console identifiers for all supported systems.
///
/// This enum centralizes console identity — short names, display names,
/// manufacturer, and aliases — in one place. The hashing recipes match
/// against these variants; achievement databases key game records on the
/// fingerprints the recipes produce, not on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    // Nintendo
    Nes,
    Snes,
    N64,
    GameBoy,
    GameBoyColor,
    Gba,
    Ds,
    PokemonMini,
    VirtualBoy,

    // Sega
    Sg1000,
    MasterSystem,
    MegaDrive,
    SegaCd,
    Sega32x,
    Saturn,
    Dreamcast,
    GameGear,

    // Sony
    PlayStation,
    PlayStation2,

    // Atari
    Atari2600,
    Atari7800,
    Jaguar,
    Lynx,

    // NEC
    PcEngine,
    PcFx,
    Pc8800,

    // Other
    AppleII,
    Arcade,
    Colecovision,
    Intellivision,
    MagnavoxOdyssey2,
    Msx,
    NeoGeoPocket,
    Oric,
    SharpX1,
    Supervision,
    ThomsonTo8,
    ThreeDo,
    Tic80,
    Vectrex,
    Wonderswan,
}

/// All platform variants in registration order.
const ALL_PLATFORMS: &[Platform] = &[
    Platform::Nes,
    Platform::Snes,
    Platform::N64,
    Platform::GameBoy,
    Platform::GameBoyColor,
    Platform::Gba,
    Platform::Ds,
    Platform::PokemonMini,
    Platform::VirtualBoy,
    Platform::Sg1000,
    Platform::MasterSystem,
    Platform::MegaDrive,
    Platform::SegaCd,
    Platform::Sega32x,
    Platform::Saturn,
    Platform::Dreamcast,
    Platform::GameGear,
    Platform::PlayStation,
    Platform::PlayStation2,
    Platform::Atari2600,
    Platform::Atari7800,
    Platform::Jaguar,
    Platform::Lynx,
    Platform::PcEngine,
    Platform::PcFx,
    Platform::Pc8800,
    Platform::AppleII,
    Platform::Arcade,
    Platform::Colecovision,
    Platform::Intellivision,
    Platform::MagnavoxOdyssey2,
    Platform::Msx,
    Platform::NeoGeoPocket,
    Platform::Oric,
    Platform::SharpX1,
    Platform::Supervision,
    Platform::ThomsonTo8,
    Platform::ThreeDo,
    Platform::Tic80,
    Platform::Vectrex,
    Platform::Wonderswan,
];

impl Platform {
    /// Canonical short name used for CLI arguments and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Nes => "nes",
            Self::Snes => "snes",
            Self::N64 => "n64",
            Self::GameBoy => "gb",
            Self::GameBoyColor => "gbc",
            Self::Gba => "gba",
            Self::Ds => "nds",
            Self::PokemonMini => "pokemini",
            Self::VirtualBoy => "virtualboy",
            Self::Sg1000 => "sg1000",
            Self::MasterSystem => "sms",
            Self::MegaDrive => "megadrive",
            Self::SegaCd => "segacd",
            Self::Sega32x => "32x",
            Self::Saturn => "saturn",
            Self::Dreamcast => "dreamcast",
            Self::GameGear => "gamegear",
            Self::PlayStation => "psx",
            Self::PlayStation2 => "ps2",
            Self::Atari2600 => "2600",
            Self::Atari7800 => "7800",
            Self::Jaguar => "jaguar",
            Self::Lynx => "lynx",
            Self::PcEngine => "pce",
            Self::PcFx => "pcfx",
            Self::Pc8800 => "pc8800",
            Self::AppleII => "appleii",
            Self::Arcade => "arcade",
            Self::Colecovision => "coleco",
            Self::Intellivision => "intellivision",
            Self::MagnavoxOdyssey2 => "odyssey2",
            Self::Msx => "msx",
            Self::NeoGeoPocket => "ngp",
            Self::Oric => "oric",
            Self::SharpX1 => "x1",
            Self::Supervision => "supervision",
            Self::ThomsonTo8 => "to8",
            Self::ThreeDo => "3do",
            Self::Tic80 => "tic80",
            Self::Vectrex => "vectrex",
            Self::Wonderswan => "wonderswan",
        }
    }

    /// Full display name for the platform.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Nes => "Nintendo Entertainment System",
            Self::Snes => "Super Nintendo Entertainment System",
            Self::N64 => "Nintendo 64",
            Self::GameBoy => "Game Boy",
            Self::GameBoyColor => "Game Boy Color",
            Self::Gba => "Game Boy Advance",
            Self::Ds => "Nintendo DS",
            Self::PokemonMini => "Pokemon Mini",
            Self::VirtualBoy => "Virtual Boy",
            Self::Sg1000 => "Sega SG-1000",
            Self::MasterSystem => "Sega Master System",
            Self::MegaDrive => "Sega Mega Drive / Genesis",
            Self::SegaCd => "Sega CD / Mega CD",
            Self::Sega32x => "Sega 32X",
            Self::Saturn => "Sega Saturn",
            Self::Dreamcast => "Sega Dreamcast",
            Self::GameGear => "Sega Game Gear",
            Self::PlayStation => "Sony PlayStation",
            Self::PlayStation2 => "Sony PlayStation 2",
            Self::Atari2600 => "Atari 2600",
            Self::Atari7800 => "Atari 7800",
            Self::Jaguar => "Atari Jaguar",
            Self::Lynx => "Atari Lynx",
            Self::PcEngine => "PC Engine / TurboGrafx-16",
            Self::PcFx => "PC-FX",
            Self::Pc8800 => "NEC PC-8000/8800",
            Self::AppleII => "Apple II",
            Self::Arcade => "Arcade",
            Self::Colecovision => "ColecoVision",
            Self::Intellivision => "Intellivision",
            Self::MagnavoxOdyssey2 => "Magnavox Odyssey 2",
            Self::Msx => "MSX",
            Self::NeoGeoPocket => "Neo Geo Pocket",
            Self::Oric => "Oric",
            Self::SharpX1 => "Sharp X1",
            Self::Supervision => "Watara Supervision",
            Self::ThomsonTo8 => "Thomson TO8",
            Self::ThreeDo => "3DO Interactive Multiplayer",
            Self::Tic80 => "TIC-80",
            Self::Vectrex => "Vectrex",
            Self::Wonderswan => "WonderSwan",
        }
    }

    /// Console manufacturer.
    pub fn manufacturer(&self) -> &'static str {
        match self {
            Self::Nes
            | Self::Snes
            | Self::N64
            | Self::GameBoy
            | Self::GameBoyColor
            | Self::Gba
            | Self::Ds
            | Self::PokemonMini
            | Self::VirtualBoy => "Nintendo",

            Self::Sg1000
            | Self::MasterSystem
            | Self::MegaDrive
            | Self::SegaCd
            | Self::Sega32x
            | Self::Saturn
            | Self::Dreamcast
            | Self::GameGear => "Sega",

            Self::PlayStation | Self::PlayStation2 => "Sony",

            Self::Atari2600 | Self::Atari7800 | Self::Jaguar | Self::Lynx => "Atari",

            Self::PcEngine | Self::PcFx | Self::Pc8800 => "NEC",

            Self::AppleII => "Apple",
            Self::Arcade => "Various",
            Self::Colecovision => "Coleco",
            Self::Intellivision => "Mattel",
            Self::MagnavoxOdyssey2 => "Magnavox",
            Self::Msx => "Microsoft",
            Self::NeoGeoPocket => "SNK",
            Self::Oric => "Tangerine",
            Self::SharpX1 => "Sharp",
            Self::Supervision => "Watara",
            Self::ThomsonTo8 => "Thomson",
            Self::ThreeDo => "The 3DO Company",
            Self::Tic80 => "Nesbox",
            Self::Vectrex => "GCE",
            Self::Wonderswan => "Bandai",
        }
    }

    /// All accepted names for this platform (case-insensitive matching).
    ///
    /// Includes the canonical short name plus common alternatives used for
    /// folder names, CLI arguments, etc.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Nes => &["nes", "famicom", "fds"],
            Self::Snes => &["snes", "sfc", "super famicom", "super nintendo"],
            Self::N64 => &["n64", "nintendo 64"],
            Self::GameBoy => &["gb", "gameboy", "game boy"],
            Self::GameBoyColor => &["gbc", "gameboy color", "game boy color"],
            Self::Gba => &["gba", "game boy advance", "gameboy advance"],
            Self::Ds => &["nds", "ds", "nintendo ds"],
            Self::PokemonMini => &["pokemini", "pokemon mini"],
            Self::VirtualBoy => &["virtualboy", "vb", "virtual boy"],
            Self::Sg1000 => &["sg1000", "sg-1000"],
            Self::MasterSystem => &["sms", "master system", "mastersystem"],
            Self::MegaDrive => &["megadrive", "genesis", "mega drive", "md"],
            Self::SegaCd => &["segacd", "sega cd", "megacd", "mega cd"],
            Self::Sega32x => &["32x", "sega32x", "sega 32x"],
            Self::Saturn => &["saturn", "sega saturn"],
            Self::Dreamcast => &["dreamcast", "dc"],
            Self::GameGear => &["gamegear", "game gear", "gg"],
            Self::PlayStation => &["psx", "ps1", "playstation"],
            Self::PlayStation2 => &["ps2", "playstation2", "playstation 2"],
            Self::Atari2600 => &["2600", "atari2600", "atari 2600"],
            Self::Atari7800 => &["7800", "atari7800", "atari 7800"],
            Self::Jaguar => &["jaguar", "atari jaguar"],
            Self::Lynx => &["lynx", "atari lynx"],
            Self::PcEngine => &["pce", "pcengine", "pc engine", "tg16", "turbografx"],
            Self::PcFx => &["pcfx", "pc-fx"],
            Self::Pc8800 => &["pc8800", "pc-88", "pc88"],
            Self::AppleII => &["appleii", "apple2", "apple ii"],
            Self::Arcade => &["arcade", "mame", "fbneo"],
            Self::Colecovision => &["coleco", "colecovision"],
            Self::Intellivision => &["intellivision", "intv"],
            Self::MagnavoxOdyssey2 => &["odyssey2", "odyssey 2", "videopac"],
            Self::Msx => &["msx", "msx2"],
            Self::NeoGeoPocket => &["ngp", "neo geo pocket", "ngpc"],
            Self::Oric => &["oric"],
            Self::SharpX1 => &["x1", "sharp x1"],
            Self::Supervision => &["supervision", "watara"],
            Self::ThomsonTo8 => &["to8", "thomson"],
            Self::ThreeDo => &["3do"],
            Self::Tic80 => &["tic80", "tic-80"],
            Self::Vectrex => &["vectrex"],
            Self::Wonderswan => &["wonderswan", "ws", "wsc"],
        }
    }

    /// All platform variants.
    pub fn all() -> &'static [Platform] {
        ALL_PLATFORMS
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `Platform`.
#[derive(Debug, Clone)]
pub struct PlatformParseError(pub String);

impl std::fmt::Display for PlatformParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown platform: '{}'", self.0)
    }
}

impl std::error::Error for PlatformParseError {}

impl std::str::FromStr for Platform {
    type Err = PlatformParseError;

    /// Parse a platform from any recognized name (case-insensitive).
    ///
    /// Matches against `short_name()` and all entries in `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &platform in ALL_PLATFORMS {
            if platform.short_name() == lower {
                return Ok(platform);
            }
            for alias in platform.aliases() {
                if *alias == lower {
                    return Ok(platform);
                }
            }
        }
        Err(PlatformParseError(s.to_string()))
    }
}
