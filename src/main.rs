use geonav::algorithms::marker_north_of;
use geonav::api::{
    JsonFilePlaceSource, MarkerFormatter, NavigationSession, OutputFormat, PlaceSource,
    StaticPositionSource, UnavailablePlaceSource,
};
use geonav::{
    distance, AppConfig, ConfigurationManager, CoordinateValidator, Destination, GeoCoordinate,
};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: geonav navigate <lat> <lon> [--places FILE] [--config FILE] [--format text|json|json-pretty]
   or: geonav places <lat> <lon> [--places FILE] [--config FILE] [--format text|json|json-pretty]
   or: geonav marker <lat> <lon> [--format text|json|json-pretty]
   or: geonav distance <lat1> <lon1> <lat2> <lon2>
   or: geonav init-config <FILE>";

/// Arguments shared by `navigate`, `places` and `marker`
struct NavigateArgs {
    position: GeoCoordinate,
    places: Option<PathBuf>,
    config: Option<PathBuf>,
    format: OutputFormat,
}

fn parse_coordinate(lat: &str, lon: &str) -> Result<GeoCoordinate, Box<dyn std::error::Error>> {
    let coordinate = GeoCoordinate::new(lat.parse::<f64>()?, lon.parse::<f64>()?);
    CoordinateValidator::validate(&coordinate)?;
    Ok(coordinate)
}

fn parse_navigate_args(args: &[String]) -> Result<NavigateArgs, Box<dyn std::error::Error>> {
    if args.len() < 2 {
        return Err("expected <lat> <lon>".into());
    }

    let mut parsed = NavigateArgs {
        position: parse_coordinate(&args[0], &args[1])?,
        places: None,
        config: None,
        format: OutputFormat::Text,
    };

    let mut iter = args[2..].iter();
    while let Some(arg) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("{} requires a value", arg))
        };
        match arg.as_str() {
            "--places" => parsed.places = Some(PathBuf::from(value()?)),
            "--config" => parsed.config = Some(PathBuf::from(value()?)),
            "--format" => parsed.format = value()?.parse::<OutputFormat>()?,
            other => return Err(format!("Unknown argument: {}", other).into()),
        }
    }

    Ok(parsed)
}

fn open_session(args: &NavigateArgs) -> Result<NavigationSession, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ConfigurationManager::from_file(path)?.into_config(),
        None => AppConfig::default(),
    };

    let place_source: Box<dyn PlaceSource> = match &args.places {
        Some(path) => Box::new(JsonFilePlaceSource::new(path.clone())),
        None => Box::new(UnavailablePlaceSource::new("no places file given")),
    };

    Ok(NavigationSession::new(
        config,
        Box::new(StaticPositionSource::new(args.position)),
        place_source,
    )?)
}

fn run_navigate(args: NavigateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(&args)?;
    let pass = session.navigate()?;
    let formatter = MarkerFormatter::new(pass.fix.coordinate).with_format(args.format);
    println!("{}", formatter.render(&pass.markers)?.trim_end());
    Ok(())
}

/// Every nearby place, without the five-destination cap
fn run_places(args: NavigateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(&args)?;
    let fix = session.locate()?;
    let destinations: Vec<Destination> = session
        .nearby_places(fix.coordinate)
        .iter()
        .map(Destination::from)
        .collect();

    let formatter = MarkerFormatter::new(fix.coordinate).with_format(args.format);
    println!("{}", formatter.render(&formatter.markers(&destinations))?.trim_end());
    Ok(())
}

fn run_marker(args: NavigateArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.places.is_some() || args.config.is_some() {
        return Err("marker accepts only --format".into());
    }
    let formatter = MarkerFormatter::new(args.position).with_format(args.format);
    let marker = formatter.marker(0, &marker_north_of(args.position));
    println!("{}", formatter.render(&[marker])?.trim_end());
    Ok(())
}

fn parse_or_usage(args: &[String]) -> Result<NavigateArgs, Box<dyn std::error::Error>> {
    parse_navigate_args(args).map_err(|e| {
        eprintln!("{}\n{}", e, USAGE);
        e
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("navigate") => run_navigate(parse_or_usage(&args[2..])?),
        Some("places") => run_places(parse_or_usage(&args[2..])?),
        Some("marker") => run_marker(parse_or_usage(&args[2..])?),
        Some("distance") if args.len() == 6 => {
            let a = parse_coordinate(&args[2], &args[3])?;
            let b = parse_coordinate(&args[4], &args[5])?;
            println!("{:.1} m", distance(a, b));
            Ok(())
        }
        Some("init-config") if args.len() == 3 => {
            let mut manager = ConfigurationManager::new();
            manager.save_to_file(&args[2])?;
            println!("Wrote default configuration to {}", args[2]);
            Ok(())
        }
        _ => {
            eprintln!("{}", USAGE);
            Err("Invalid arguments".into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_navigate_args() {
        let parsed = parse_navigate_args(&strings(&[
            "51.5", "-0.1", "--places", "venues.json", "--format", "json",
        ]))
        .unwrap();

        assert_eq!(parsed.position, GeoCoordinate::new(51.5, -0.1));
        assert_eq!(parsed.places, Some(PathBuf::from("venues.json")));
        assert!(parsed.config.is_none());
        assert_eq!(parsed.format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_navigate_rejects_bad_input() {
        assert!(parse_navigate_args(&strings(&["51.5"])).is_err());
        assert!(parse_navigate_args(&strings(&["95.0", "0.0"])).is_err());
        assert!(parse_navigate_args(&strings(&["1.0", "2.0", "--format"])).is_err());
        assert!(parse_navigate_args(&strings(&["1.0", "2.0", "--verbose"])).is_err());
    }

    #[test]
    fn test_marker_rejects_place_options() {
        let parsed = parse_navigate_args(&strings(&["1.0", "2.0", "--places", "venues.json"])).unwrap();
        assert!(run_marker(parsed).is_err());
    }
}
