//! retro-menu CLI
//!
//! Themed terminal menus: a demo, a theme listing, and `pick` for shell
//! scripts that want a menu over a fixed list of choices.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;

use retro_menu::config::{MenuConfig, Pacing, default_config_path};
use retro_menu::input::{InputSource, InputToken, TerminalInput};
use retro_menu::surface::Target;
use retro_menu::types::OptionKind;
use retro_menu::{Menu, MenuOption, ThemeRegistry, logging};

/// Key of the demo picker entry that cycles through every theme.
const ALL_THEMES: &str = "all";

#[derive(Parser)]
#[command(name = "retro-menu")]
#[command(about = "Themed interactive terminal menus with keyboard and mouse input")]
#[command(version)]
struct Cli {
    /// Config file (default: platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a theme, then try it on a sample menu
    Demo {
        /// Start with this theme instead of the configured default
        #[arg(long)]
        theme: Option<String>,

        /// Skip the cosmetic pauses
        #[arg(long)]
        no_delay: bool,
    },

    /// List available themes
    Themes,

    /// Show a menu over the given options and print the chosen key
    Pick {
        /// Option as KEY=LABEL or KEY=LABEL:DESCRIPTION (repeatable, in order)
        #[arg(long = "option", short = 'o', required = true, value_parser = parse_option_spec)]
        options: Vec<MenuOption>,

        /// Insert a separator after the option with this key (repeatable)
        #[arg(long)]
        separator_after: Vec<String>,

        /// Theme to use
        #[arg(long)]
        theme: Option<String>,

        /// Do not append an exit entry
        #[arg(long)]
        no_exit: bool,

        /// Skip the cosmetic pauses
        #[arg(long)]
        no_delay: bool,
    },

    /// Print the effective configuration as JSON
    Config {
        /// Write it to the default config path
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match MenuConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = logging::init(&config.log);

    let registry = Arc::new(ThemeRegistry::with_presets());
    if !registry.set_current(&config.default_theme) {
        warn!(theme = %config.default_theme, "configured default theme not found");
    }

    let result = match cli.command {
        Commands::Demo { theme, no_delay } => cmd_demo(&registry, &config, theme, no_delay),
        Commands::Themes => cmd_themes(&registry),
        Commands::Pick {
            options,
            separator_after,
            theme,
            no_exit,
            no_delay,
        } => cmd_pick(&registry, &config, options, &separator_after, theme, no_exit, no_delay),
        Commands::Config { init } => cmd_config(&config, init),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// ARGUMENT PARSING
// ============================================================================

/// Parse `KEY=LABEL[:DESCRIPTION]`.
fn parse_option_spec(spec: &str) -> Result<MenuOption, String> {
    let (key, rest) = spec
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=LABEL[:DESCRIPTION], got '{}'", spec))?;
    let key = key.trim();
    if key.is_empty() {
        return Err("option key must not be empty".to_string());
    }
    let (label, description) = rest.split_once(':').unwrap_or((rest, ""));
    let option = MenuOption::new(key, label.trim(), description.trim());
    if option.kind() != OptionKind::Action {
        return Err(format!("'{}' is a reserved key", key));
    }
    Ok(option)
}

fn apply_theme(registry: &ThemeRegistry, name: &str) -> Result<(), String> {
    if registry.set_current(name) {
        Ok(())
    } else {
        Err(format!(
            "Unknown theme '{}' (available: {})",
            name,
            registry.list_names().join(", ")
        ))
    }
}

fn pacing(config: &MenuConfig, no_delay: bool) -> Pacing {
    if no_delay { Pacing::none() } else { config.pacing() }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_demo(
    registry: &Arc<ThemeRegistry>,
    config: &MenuConfig,
    theme: Option<String>,
    no_delay: bool,
) -> Result<ExitCode, String> {
    if let Some(name) = theme {
        apply_theme(registry, &name)?;
    }
    let pacing = pacing(config, no_delay);
    let mut picker = theme_picker(registry, config).pacing(pacing);

    while let Some(choice) = picker.run().map_err(|e| e.to_string())? {
        let themes = if choice == ALL_THEMES {
            registry.list_names()
        } else {
            vec![choice]
        };

        for name in themes {
            apply_theme(registry, &name)?;
            let mut demo = demo_menu(registry, config).pacing(pacing);
            while let Some(key) = demo.run().map_err(|e| e.to_string())? {
                println!();
                println!("  '{}' would run here. Press Enter to continue.", key);
                let mut input = TerminalInput::new(config.escape_timeout());
                if matches!(input.next_token(), InputToken::Interrupt | InputToken::Eof) {
                    return Ok(ExitCode::SUCCESS);
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn theme_picker(registry: &Arc<ThemeRegistry>, config: &MenuConfig) -> Menu {
    let mut menu = Menu::with_config(Arc::clone(registry), config).section("THEMES");
    for name in registry.list_names() {
        let description = registry
            .get(&name)
            .map(|t| t.description().to_string())
            .unwrap_or_default();
        menu = menu.option(name.clone(), name, description);
    }
    menu.separator()
        .option(ALL_THEMES, "All themes", "Cycle through every theme")
        .exit("Exit", "Leave the demo")
}

fn demo_menu(registry: &Arc<ThemeRegistry>, config: &MenuConfig) -> Menu {
    Menu::with_config(Arc::clone(registry), config)
        .option("deploy", "🚀 Deploy", "Deploy application to production")
        .option("test", "🧪 Run Tests", "Execute comprehensive test suite")
        .option("build", "🔨 Build", "Compile and package application")
        .option("docs", "📚 Documentation", "Generate and view documentation")
        .separator()
        .option("config", "⚙️ Configuration", "Modify application settings")
        .option("logs", "📊 View Logs", "Display application logs")
        .option("monitor", "📈 Monitor", "Real-time system monitoring")
        .separator()
        .exit("❌ Exit Demo", "Return to theme selection")
}

fn cmd_themes(registry: &ThemeRegistry) -> Result<ExitCode, String> {
    let current = registry.current().map(|t| t.name().to_string());
    for name in registry.list_names() {
        let marker = if current.as_deref() == Some(name.as_str()) { "*" } else { " " };
        let description = registry
            .get(&name)
            .map(|t| t.description().to_string())
            .unwrap_or_default();
        println!("{} {:<10} {}", marker, name, description);
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_pick(
    registry: &Arc<ThemeRegistry>,
    config: &MenuConfig,
    options: Vec<MenuOption>,
    separator_after: &[String],
    theme: Option<String>,
    no_exit: bool,
    no_delay: bool,
) -> Result<ExitCode, String> {
    if let Some(name) = theme {
        apply_theme(registry, &name)?;
    }

    // Drawn on stderr so stdout carries only the chosen key.
    let mut menu = Menu::with_config(Arc::clone(registry), config)
        .pacing(pacing(config, no_delay))
        .output(Target::Stderr);
    for option in options {
        let split = separator_after.contains(&option.key);
        menu.push(option);
        if split {
            menu.push(MenuOption::separator(""));
        }
    }
    if !no_exit {
        menu.push(MenuOption::exit("Exit", "Leave without choosing"));
    }

    match menu.run().map_err(|e| e.to_string())? {
        Some(key) => {
            println!("{}", key);
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::from(1)),
    }
}

fn cmd_config(config: &MenuConfig, init: bool) -> Result<ExitCode, String> {
    let json = serde_json::to_string_pretty(config).map_err(|e| e.to_string())?;
    println!("{}", json);

    if init {
        let path = default_config_path().ok_or("No config directory on this platform")?;
        if path.exists() {
            return Err(format!("Config already exists: {}", path.display()));
        }
        config.save(&path).map_err(|e| e.to_string())?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn option_spec_with_description() {
        let option = parse_option_spec("build=Build:Compile everything").unwrap();
        assert_eq!(option, MenuOption::new("build", "Build", "Compile everything"));
    }

    #[test]
    fn option_spec_without_description() {
        let option = parse_option_spec("test=Run tests").unwrap();
        assert_eq!(option.description, "");
    }

    #[test]
    fn option_spec_rejects_reserved_and_malformed() {
        assert!(parse_option_spec("exit=Quit").is_err());
        assert!(parse_option_spec("separator=x").is_err());
        assert!(parse_option_spec("=Label").is_err());
        assert!(parse_option_spec("no-equals").is_err());
    }

    #[test]
    fn pick_parses_repeated_options() {
        let cli = Cli::try_parse_from([
            "retro-menu", "pick", "-o", "a=A", "--option", "b=B:second", "--separator-after", "a",
        ])
        .unwrap();
        match cli.command {
            Commands::Pick { options, separator_after, .. } => {
                assert_eq!(options.len(), 2);
                assert_eq!(separator_after, vec!["a"]);
            }
            _ => panic!("expected pick"),
        }
    }

    #[test]
    fn theme_picker_lists_every_theme() {
        let registry = Arc::new(ThemeRegistry::with_presets());
        let picker = theme_picker(&registry, &MenuConfig::default());
        for name in registry.list_names() {
            assert!(picker.options().iter().any(|o| o.key == name));
        }
        assert!(picker.options().last().unwrap().is_exit());
    }
}
