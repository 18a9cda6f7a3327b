//! Writes the static SEO assets next to the built site.

use clap::Parser;
use pedal_generator::seo::{json_ld, manifest, og_image_svg};
use std::error::Error;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "seo_assets",
    version,
    about = "Pedal Generator SEO asset writer",
    long_about = "Write manifest.webmanifest, og-image.svg and jsonld.json for the built site"
)]
struct Args {
    /// Directory to write into, created if missing
    #[arg(default_value = "dist")]
    out_dir: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    fs::create_dir_all(&args.out_dir)?;

    let files = [
        ("manifest.webmanifest", serde_json::to_string_pretty(&manifest())?),
        ("og-image.svg", og_image_svg()),
        ("jsonld.json", serde_json::to_string_pretty(&json_ld())?),
    ];

    for (name, contents) in files {
        let path = args.out_dir.join(name);
        fs::write(&path, contents)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn out_dir_defaults_to_dist() {
        let args = Args::try_parse_from(["seo_assets"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("dist"));
    }

    #[test]
    fn out_dir_is_positional() {
        let args = Args::try_parse_from(["seo_assets", "public"]).unwrap();
        assert_eq!(args.out_dir, PathBuf::from("public"));
    }

    #[test]
    fn help_flag_is_not_taken_as_a_directory() {
        let err = Args::try_parse_from(["seo_assets", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let err = Args::try_parse_from(["seo_assets", "--out", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
