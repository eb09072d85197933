use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use clock_render::{
    display_once, Alignment, ClockConfig, ClockError, ClockLoop, CrosstermTerminal, FaceOptions,
    FrameOptions, LocalTime, RenderOptions, TimeSource, Viewport,
};
use log::{debug, info};

const PROMPT: &str = "Enter the time as HH:MM: ";

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the time as seven-segment ASCII art")]
struct Cli {
    /// Time to display once, as HH:MM
    time: Option<String>,
    /// Keep redrawing the current time every second
    #[arg(long, default_value_t = false)]
    live: bool,
    #[command(flatten)]
    settings: DisplaySettings,
    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Parser, Debug, Clone)]
struct DisplaySettings {
    /// Use a 12 hour clock with an AM/PM line
    #[arg(long, default_value_t = false)]
    ampm: bool,
    /// Blink the first separator in live mode
    #[arg(long, default_value_t = false)]
    blink: bool,
    /// Size multiplier for the digits
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    scale: u16,
    /// Digit color (red, green, yellow, blue, magenta, cyan, white, bright)
    #[arg(long)]
    color: Option<String>,
    /// Show seconds in live mode
    #[arg(long, default_value_t = false)]
    seconds: bool,
    /// Print the date under the clock
    #[arg(long, default_value_t = false)]
    date: bool,
    /// Horizontal placement; centering also pads vertically in live mode
    #[arg(long, value_enum, default_value = "left")]
    align: AlignChoice,
    /// Draw a box around the clock
    #[arg(long, default_value_t = false)]
    border: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum AlignChoice {
    Left,
    Center,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let config = cli.settings.to_config();
    debug!("starting with {config:?}");

    if cli.live {
        return live(config);
    }

    let entered = match cli.time {
        Some(time) => time.trim().to_owned(),
        None => prompt(&mut io::stdin().lock(), &mut io::stdout())?,
    };
    let frame = once(&entered, &config)?;
    println!("{frame}");
    Ok(())
}

fn once(entered: &str, config: &ClockConfig) -> Result<String> {
    let date = config.face.show_date.then(|| LocalTime.now().date());
    match display_once(entered, config, date, Viewport::detect()) {
        Ok(frame) => Ok(frame.to_string()),
        Err(ClockError::InvalidTimeFormat(_)) => {
            bail!("Invalid format/value. Use HH:MM between 00:00 and 23:59.")
        },
        Err(err) => Err(err).with_context(|| format!("failed to render {entered:?}")),
    }
}

fn prompt(input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read the time")?;
    if read == 0 {
        bail!("no input provided");
    }
    Ok(line.trim().to_owned())
}

fn live(config: ClockConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the clock runtime")?;

    runtime.block_on(async {
        let mut clock = ClockLoop::new(CrosstermTerminal::stdout(), LocalTime, config);

        // Polling the signal first installs the handler before the cursor is
        // hidden.
        let outcome = tokio::select! {
            biased;
            signal = tokio::signal::ctrl_c() => {
                info!("interrupt received");
                signal.map_err(ClockError::from)
            },
            result = clock.run() => result,
        };

        clock.stop().context("failed to restore the terminal")?;
        outcome.context("live clock failed")
    })
}

impl DisplaySettings {
    fn to_config(&self) -> ClockConfig {
        ClockConfig {
            face: FaceOptions {
                ampm: self.ampm,
                seconds: self.seconds,
                blink: self.blink,
                show_date: self.date,
            },
            render: RenderOptions::with_color_name(self.scale, self.color.as_deref()),
            frame: FrameOptions { align: self.align.to_alignment(), border: self.border },
        }
    }
}

impl AlignChoice {
    fn to_alignment(self) -> Alignment {
        match self {
            AlignChoice::Left => Alignment::Left,
            AlignChoice::Center => Alignment::Center,
        }
    }
}

#[cfg(test)]
mod tests {
    use clock_render::Color;

    use super::*;

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "ascii-clock",
            "--live",
            "--ampm",
            "--blink",
            "--seconds",
            "--date",
            "--border",
            "--scale",
            "3",
            "--color",
            "Cyan",
            "--align",
            "center",
        ])
        .unwrap();
        assert!(cli.live);
        assert_eq!(cli.time, None);

        let config = cli.settings.to_config();
        assert_eq!(
            config.face,
            FaceOptions { ampm: true, seconds: true, blink: true, show_date: true }
        );
        assert_eq!(config.render, RenderOptions { scale: 3, color: Some(Color::Cyan) });
        assert_eq!(config.frame, FrameOptions { align: Alignment::Center, border: true });
    }

    #[test]
    fn defaults_are_plain_24h() {
        let cli = Cli::try_parse_from(["ascii-clock", "07:45"]).unwrap();
        assert_eq!(cli.time.as_deref(), Some("07:45"));
        assert_eq!(cli.settings.to_config(), ClockConfig::default());
    }

    #[test]
    fn unknown_color_is_accepted_and_ignored() {
        let cli = Cli::try_parse_from(["ascii-clock", "--color", "octarine"]).unwrap();
        assert_eq!(cli.settings.to_config().render.color, None);
    }

    #[test]
    fn zero_scale_is_rejected() {
        assert!(Cli::try_parse_from(["ascii-clock", "--scale", "0"]).is_err());
        assert!(Cli::try_parse_from(["ascii-clock", "--align", "right"]).is_err());
    }

    #[test]
    fn prompt_reads_one_trimmed_line() {
        let mut output = Vec::new();
        let entered = prompt(&mut " 09:30\n10:00\n".as_bytes(), &mut output).unwrap();
        assert_eq!(entered, "09:30");
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT);
    }

    #[test]
    fn prompt_fails_on_end_of_input() {
        let err = prompt(&mut "".as_bytes(), &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "no input provided");
    }

    #[test]
    fn invalid_time_has_a_user_facing_message() {
        let err = once("12:60", &ClockConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid format/value. Use HH:MM between 00:00 and 23:59.");
    }

    #[test]
    fn once_renders_the_meridiem_line() {
        let mut config = ClockConfig::default();
        config.face.ampm = true;
        let frame = once("14:30", &config).unwrap();
        assert_eq!(frame.lines().count(), 4);
        assert!(frame.ends_with("PM"));
    }
}
