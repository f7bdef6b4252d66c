//! Bundled skins. Content only.

use ratatui::style::{Color, Modifier, Style};

use super::Palette;
use super::skin::{Skin, inverted};

pub const ALL: [Skin; 4] = [LOKI, FALLOUT, MATRIX, TRON];

// ============================================================================
// LOKI
// ============================================================================

pub const LOKI: Skin = Skin {
    name: "loki",
    description: "Asgardian trickster console",
    palette: Palette {
        primary: Style::new().fg(Color::LightGreen),
        secondary: Style::new().fg(Color::Green),
        accent: Style::new().fg(Color::LightYellow),
        background: Style::new().bg(Color::Black),
        warning: Style::new().fg(Color::LightRed),
        success: Style::new().fg(Color::Yellow),
        border: Style::new().fg(Color::Green),
        selected: inverted(Color::Black, Color::LightGreen),
        dim: Style::new().fg(Color::Indexed(22)),
    },
    logo_wide: &[
        "",
        "  ██╗      ██████╗ ██╗  ██╗██╗     ████████╗███████╗██████╗ ███╗   ███╗",
        "  ██║     ██╔═══██╗██║ ██╔╝██║     ╚══██╔══╝██╔════╝██╔══██╗████╗ ████║",
        "  ██║     ██║   ██║█████╔╝ ██║        ██║   █████╗  ██████╔╝██╔████╔██║",
        "  ██║     ██║   ██║██╔═██╗ ██║        ██║   ██╔══╝  ██╔══██╗██║╚██╔╝██║",
        "  ███████╗╚██████╔╝██║  ██╗██║        ██║   ███████╗██║  ██║██║ ╚═╝ ██║",
        "  ╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝        ╚═╝   ╚══════╝╚═╝  ╚═╝╚═╝     ╚═╝",
        "",
        "            ᚠ ᚢ ᚦ ᚨ ᚱ ᚲ   GLORIOUS PURPOSE TERMINAL   ᚷ ᚹ ᚺ ᚾ ᛁ ᛃ",
        "",
    ],
    logo_compact: &["", "  ᛚ LOKI TERM ᛚ", ""],
    subtitle_title: "ᛟ TIME VARIANCE AUTHORITY ᛟ",
    subtitle: "Burdened with glorious purpose",
    footer_title: "ᛉ CONTROLS ᛉ",
    gutter: "  ᚱ ",
    selected_open: "» ",
    selected_close: " «",
    rule: '━',
    loading: "Summoning the trickster's console...",
    executing: "Weaving illusion: ",
    goodbye: "I am burdened with glorious purpose. Farewell.",
};

// ============================================================================
// FALLOUT
// ============================================================================

pub const FALLOUT: Skin = Skin {
    name: "fallout",
    description: "Vault-Tec terminal interface",
    palette: Palette {
        primary: Style::new().fg(Color::LightYellow),
        secondary: Style::new().fg(Color::Yellow),
        accent: Style::new().fg(Color::White),
        background: Style::new().bg(Color::Black),
        warning: Style::new().fg(Color::LightRed),
        success: Style::new().fg(Color::LightGreen),
        border: Style::new().fg(Color::Yellow),
        selected: inverted(Color::Black, Color::LightYellow),
        dim: Style::new().fg(Color::Indexed(94)),
    },
    logo_wide: &[
        "╔═══════════════════════════════════════════════════════════════════════╗",
        "║                                                                       ║",
        "║   ██╗   ██╗ █████╗ ██╗   ██╗██╗  ████████╗    ████████╗███████╗ ██████╗ ║",
        "║   ██║   ██║██╔══██╗██║   ██║██║  ╚══██╔══╝    ╚══██╔══╝██╔════╝██╔════╝ ║",
        "║   ╚██╗ ██╔╝███████║██║   ██║██║     ██║  █████╗  ██║   █████╗  ██║      ║",
        "║    ╚████╔╝ ██╔══██║╚██████╔╝███████╗██║  ╚════╝  ██║   ███████╗╚██████╗ ║",
        "║     ╚═══╝  ╚═╝  ╚═╝ ╚═════╝ ╚══════╝╚═╝          ╚═╝   ╚══════╝ ╚═════╝ ║",
        "║                                                                       ║",
        "║                  VAULT-TEC TERMINAL v2.077  [ ACCESS AUTHORIZED ]     ║",
        "╚═══════════════════════════════════════════════════════════════════════╝",
    ],
    logo_compact: &["╔═══════════════════╗", "║ VAULT-TEC v2.077  ║", "╚═══════════════════╝"],
    subtitle_title: "█ ROBCO INDUSTRIES UNIFIED OPERATING SYSTEM █",
    subtitle: "*** VAULT-TEC AUTOMATED SYSTEMS *** Build 2.077 ***",
    footer_title: "█ VAULT-TEC INTERFACE PROTOCOL █",
    gutter: "  █ ",
    selected_open: "> ",
    selected_close: " <",
    rule: '═',
    loading: "*** INITIALIZING VAULT-TEC TERMINAL ***",
    executing: "*** EXECUTING: ",
    goodbye: "*** HAVE A PLEASANT DAY, VAULT DWELLER ***",
};

// ============================================================================
// MATRIX
// ============================================================================

pub const MATRIX: Skin = Skin {
    name: "matrix",
    description: "Digital rain construct",
    palette: Palette {
        primary: Style::new().fg(Color::LightGreen),
        secondary: Style::new().fg(Color::Green),
        accent: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
        background: Style::new().bg(Color::Black),
        warning: Style::new().fg(Color::Red),
        success: Style::new().fg(Color::Green),
        border: Style::new().fg(Color::Green),
        selected: Style::new().fg(Color::LightGreen).add_modifier(Modifier::REVERSED),
        dim: Style::new().fg(Color::Indexed(28)),
    },
    logo_wide: &[
        "  ﾊ ﾐ ﾋ ｰ ｳ ｼ ﾅ ﾓ ﾆ ｻ ﾜ ﾂ ｵ ﾘ ｱ ﾎ ﾃ ﾏ ｹ ﾒ ｴ ｶ ｷ ﾑ ﾕ ﾗ ｾ ﾈ ｽ ﾀ ﾇ ﾍ",
        "  ███╗   ███╗ █████╗ ████████╗██████╗ ██╗██╗  ██╗",
        "  ████╗ ████║██╔══██╗╚══██╔══╝██╔══██╗██║╚██╗██╔╝",
        "  ██╔████╔██║███████║   ██║   ██████╔╝██║ ╚███╔╝ ",
        "  ██║╚██╔╝██║██╔══██║   ██║   ██╔══██╗██║ ██╔██╗ ",
        "  ██║ ╚═╝ ██║██║  ██║   ██║   ██║  ██║██║██╔╝ ██╗",
        "  ╚═╝     ╚═╝╚═╝  ╚═╝   ╚═╝   ╚═╝  ╚═╝╚═╝╚═╝  ╚═╝",
        "  ｦ ｲ ｸ ｺ ｿ ﾁ ﾄ ﾉ ﾌ ﾔ ﾖ ﾙ ﾚ ﾛ ﾝ 0 1 0 1 1 0 1 0 0 1 1 0 1",
        "",
    ],
    logo_compact: &["", "  [ THE MATRIX ]", ""],
    subtitle_title: "NEBUCHADNEZZAR",
    subtitle: "Wake up. The Matrix has you.",
    footer_title: "OPERATOR",
    gutter: "  │ ",
    selected_open: "▶ ",
    selected_close: " ◀",
    rule: '─',
    loading: "Jacking in...",
    executing: "Loading program: ",
    goodbye: "There is no spoon.",
};

// ============================================================================
// TRON
// ============================================================================

pub const TRON: Skin = Skin {
    name: "tron",
    description: "Neon grid",
    palette: Palette {
        primary: Style::new().fg(Color::LightCyan),
        secondary: Style::new().fg(Color::Cyan),
        accent: Style::new().fg(Color::LightBlue),
        background: Style::new().bg(Color::Black),
        warning: Style::new().fg(Color::LightRed),
        success: Style::new().fg(Color::LightBlue),
        border: Style::new().fg(Color::Cyan),
        selected: inverted(Color::Black, Color::LightCyan),
        dim: Style::new().fg(Color::Indexed(24)),
    },
    logo_wide: &[
        "",
        "  ████████╗██████╗  ██████╗ ███╗   ██╗",
        "  ╚══██╔══╝██╔══██╗██╔═══██╗████╗  ██║",
        "     ██║   ██████╔╝██║   ██║██╔██╗ ██║",
        "     ██║   ██╔══██╗██║   ██║██║╚██╗██║",
        "     ██║   ██║  ██║╚██████╔╝██║ ╚████║",
        "     ╚═╝   ╚═╝  ╚═╝ ╚═════╝ ╚═╝  ╚═══╝",
        "  ═══════════════ END OF LINE ═══════════════",
        "",
    ],
    logo_compact: &["", "  ◢ TRON ◣", ""],
    subtitle_title: "ENCOM MAINFRAME",
    subtitle: "Greetings, program.",
    footer_title: "GRID CONTROLS",
    gutter: "  ◆ ",
    selected_open: "◢ ",
    selected_close: " ◣",
    rule: '▬',
    loading: "Entering the grid...",
    executing: "Derezzing into: ",
    goodbye: "End of line.",
};
