//! # identicon CLI
//!
//! Writes the identicon for a piece of text to an image file.
//!
//! ## Usage
//!
//! ```bash
//! # 320px PNG named alice.png
//! identicon alice
//!
//! # Custom size, padding and colors
//! identicon -s 128 -p 5 -b ffffff -c 3366cc "Jane Doe"
//!
//! # Shared settings from a JSON profile, written into another directory
//! identicon --profile team.json -d avatars/ bob@example.com
//!
//! # Base64 data URI on stdout
//! identicon -f base64 alice
//! ```

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use log::{LevelFilter, info};

use identicon::{
    AvatarProfile, Color, DEFAULT_JPEG_QUALITY, Identicon, IdenticonError, OutputFormat,
    parse_hex_color, save_to_file,
};

/// Generate a 5x5 block avatar from text
#[derive(Parser, Debug)]
#[command(name = "identicon")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Case insensitive text to derive the avatar from
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    text: String,

    /// Image size in pixels [default: 320]
    #[arg(short, long, allow_negative_numbers = true)]
    size: Option<i32>,

    /// Image padding in percent, 0-10 [default: 10]
    #[arg(short, long, allow_negative_numbers = true)]
    padding: Option<i32>,

    /// Background color as 6 hex digits (e.g. ffffff)
    #[arg(short, long, value_parser = parse_hex_color)]
    background: Option<Color>,

    /// Avatar color as 6 hex digits (e.g. ffffff)
    #[arg(short = 'c', long = "color", value_parser = parse_hex_color)]
    foreground: Option<Color>,

    /// Output file name [default: text with spaces replaced by "_"]
    #[arg(short = 'n', long = "name", value_name = "FILE")]
    filename: Option<String>,

    /// Directory to write the image to
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Png)]
    format: OutputFormat,

    /// JPEG quality, 1-100
    #[arg(short, long, default_value_t = DEFAULT_JPEG_QUALITY)]
    quality: u8,

    /// JSON file with default size, padding and colors
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    configure_logger(if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    });

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn configure_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<(), IdenticonError> {
    let profile = match cli.profile {
        Some(ref path) => {
            info!("loading profile from {}", path.display());
            AvatarProfile::from_json(&std::fs::read_to_string(path)?)?
        }
        None => AvatarProfile::default(),
    };

    let mut spec = profile.to_spec(cli.text.as_str())?;
    if let Some(size) = cli.size {
        spec.size = size;
    }
    if let Some(padding) = cli.padding {
        spec.padding = padding;
    }
    if cli.background.is_some() {
        spec.background = cli.background;
    }
    if cli.foreground.is_some() {
        spec.foreground = cli.foreground;
    }

    let img = spec.create()?;
    let data = cli.format.encode(&img, cli.quality)?;

    if cli.format == OutputFormat::Base64 {
        println!("{}", String::from_utf8_lossy(&data));
        return Ok(());
    }

    let path = output_path(&cli.text, cli.filename.as_deref(), cli.directory, cli.format);
    save_to_file(&path, &data)?;
    println!("{}", path.display());
    Ok(())
}

/// Joins the output directory with the chosen or derived file name.
fn output_path(
    text: &str,
    filename: Option<&str>,
    directory: Option<PathBuf>,
    format: OutputFormat,
) -> PathBuf {
    let name = match filename {
        Some(name) => name.to_string(),
        None => default_filename(text, format),
    };
    directory.unwrap_or_default().join(name)
}

fn default_filename(text: &str, format: OutputFormat) -> String {
    let stem: String = text
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["identicon", "alice"]).unwrap();
        assert_eq!(cli.text, "alice");
        assert_eq!(cli.size, None);
        assert_eq!(cli.format, OutputFormat::Png);
        assert_eq!(cli.quality, 90);
        assert!(cli.background.is_none());
    }

    #[test]
    fn short_flags() {
        let cli = Cli::try_parse_from([
            "identicon", "-s", "64", "-p", "-3", "-b", "ffffff", "-c", "000000", "-n",
            "out.png", "-d", "/tmp", "Jane Doe",
        ])
        .unwrap();
        assert_eq!(cli.size, Some(64));
        assert_eq!(cli.padding, Some(-3));
        assert_eq!(cli.background.map(|c| c.red), Some(0xff));
        assert_eq!(cli.foreground.map(|c| (c.red, c.alpha)), Some((0, 0xff)));
        assert_eq!(cli.filename.as_deref(), Some("out.png"));
        assert_eq!(cli.directory, Some(PathBuf::from("/tmp")));
    }

    #[test]
    fn rejects_bad_color() {
        assert!(Cli::try_parse_from(["identicon", "-b", "fff", "x"]).is_err());
        assert!(Cli::try_parse_from(["identicon", "-c", "zzzzzz", "x"]).is_err());
    }

    #[test]
    fn requires_text() {
        assert!(Cli::try_parse_from(["identicon"]).is_err());
        assert!(Cli::try_parse_from(["identicon", ""]).is_err());
    }

    #[test]
    fn filenames() {
        assert_eq!(default_filename("Jane Doe", OutputFormat::Png), "Jane_Doe.png");
        assert_eq!(default_filename("a/b", OutputFormat::Jpeg), "a_b.jpg");
        assert_eq!(
            output_path("x", None, Some(PathBuf::from("out")), OutputFormat::Png),
            PathBuf::from("out").join("x.png")
        );
        assert_eq!(
            output_path("x", Some("y.png"), None, OutputFormat::Png),
            PathBuf::from("y.png")
        );
    }

    #[test]
    fn writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "identicon",
            "-s",
            "30",
            "-d",
            dir.path().to_str().unwrap(),
            "some text",
        ])
        .unwrap();
        run(cli).unwrap();

        let written = std::fs::read(dir.path().join("some_text.png")).unwrap();
        let img = identicon::decode_png(&written).unwrap();
        assert_eq!(img.dimensions(), (30, 30));
    }

    #[test]
    fn flags_override_profile() {
        let dir = tempfile::tempdir().unwrap();
        let profile = dir.path().join("profile.json");
        std::fs::write(&profile, r#"{"size": 20, "background": "ffffff"}"#).unwrap();

        let cli = Cli::try_parse_from([
            "identicon",
            "--profile",
            profile.to_str().unwrap(),
            "-s",
            "40",
            "-d",
            dir.path().to_str().unwrap(),
            "bob",
        ])
        .unwrap();
        run(cli).unwrap();

        let img = identicon::decode_png(&std::fs::read(dir.path().join("bob.png")).unwrap()).unwrap();
        assert_eq!(img.dimensions(), (40, 40));
        assert_eq!(img.get_pixel(0, 0).0, [0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn invalid_size_fails() {
        let cli = Cli::try_parse_from(["identicon", "-s", "0", "x"]).unwrap();
        assert!(matches!(run(cli), Err(IdenticonError::InvalidSize(0))));
    }
}
