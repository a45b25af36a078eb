use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Cricket live-score and content aggregation API
///
/// Serves normalized fixture, player, team, ranking and news data aggregated
/// from the configured upstream providers as JSON over HTTP.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Address to bind the HTTP server to.
    #[arg(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on.
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Path to a config file, overriding the platform default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the log file, overriding config and the default location.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<String>,

    /// Also log to stdout (logs always go to the rolling file).
    #[arg(short, long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["cricscore"]);
        assert_eq!(args.bind, "0.0.0.0");
        assert_eq!(args.port, 8080);
        assert!(args.config.is_none());
        assert!(!args.debug);
    }

    #[test]
    fn test_custom_bind_and_port() {
        let args = Args::parse_from(["cricscore", "--bind", "127.0.0.1", "-p", "9000", "-d"]);
        assert_eq!(args.bind, "127.0.0.1");
        assert_eq!(args.port, 9000);
        assert!(args.debug);
    }
}
